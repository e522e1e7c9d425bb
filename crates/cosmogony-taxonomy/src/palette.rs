//! Fate presentation palette.
//!
//! The flat fate-key → `{hex, label, description}` mapping consumed by the
//! rendering layer. Pure lookup data, no logic: the registry's key
//! uniqueness guarantee is what keeps this map collision-free.
//!
//! Color entries are ordered least active → most active within each scale.

use indexmap::IndexMap;

use crate::registry::FateKey;

/// Presentation attributes for one fate.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FatePresentation {
    /// CSS hex color.
    pub hex: &'static str,
    /// Human-readable label derived from the key.
    pub label: String,
    pub description: &'static str,
}

/// Convert a camelCase key to Title Case with spaces.
///
/// `"spiralGalaxy"` → `"Spiral Galaxy"`.
pub fn camel_to_title(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            label.push(' ');
            label.push(ch);
        } else {
            label.push(ch);
        }
    }
    label
}

const PALETTE: &[(FateKey, &str, &str)] = &[
    // Cooling regimes (Mpc100)
    (
        "radiationCoupled",
        "#05050a",
        "Near-black violet. Baryons locked to the photon bath; nothing can collapse.",
    ),
    (
        "acousticFluid",
        "#0d0d1c",
        "Deep indigo. The coupled fluid rings with acoustic oscillations.",
    ),
    (
        "recombinedGas",
        "#16213a",
        "Midnight blue. Neutral gas, decoupled and free to fall into structure.",
    ),
    (
        "noCooling",
        "#1f2430",
        "Charcoal blue. Gravitating but unable to shed heat; collapse stalls.",
    ),
    (
        "popIiiStarFormation",
        "#3d3a66",
        "Dusky violet. Molecular hydrogen cooling lights the first stars.",
    ),
    (
        "metalCooling",
        "#4c5a8a",
        "Slate indigo. Metal lines radiate heat away; structure formation accelerates.",
    ),
    // Web-scale (Mpc10)
    (
        "void",
        "#0a0a0f",
        "Near-black with a hint of blue. Vast underdense regions where structure formation is suppressed.",
    ),
    (
        "sheet",
        "#1a1a2e",
        "Dark blue-gray. Weak overdensities, the walls between voids where early groups form.",
    ),
    (
        "filament",
        "#2d3a4a",
        "Steel blue. Matter transport corridors connecting nodes, where groups and clusters form.",
    ),
    (
        "node",
        "#4a5568",
        "Slate gray. Filament intersections where clusters form, the densest web-scale structures.",
    ),
    (
        "infallRegion",
        "#6b7280",
        "Warm gray. Terminal state: matter captured into bound halos, no longer part of the free web.",
    ),
    // Halo-scale (Mpc1)
    (
        "empty",
        "#000000",
        "Pure black. No structure, no bound halo, the cosmic background.",
    ),
    (
        "gasRichGroup",
        "#3a6b8c",
        "Ocean blue. Gas-rich group where cooling works and spirals thrive.",
    ),
    (
        "gasPoorGroup",
        "#5a7a8a",
        "Dusty teal. Gas depleted, star formation quenched.",
    ),
    (
        "fossilGroup",
        "#7a8a7a",
        "Sage gray. Single giant elliptical dominates after mergers complete.",
    ),
    (
        "coolCoreCluster",
        "#9a6a5a",
        "Warm copper. Central cooling with AGN feedback equilibrium.",
    ),
    (
        "nonCoolCoreCluster",
        "#8a6a6a",
        "Muted rose. Merger-heated, no central cooling established.",
    ),
    (
        "fossilCluster",
        "#6a6a6a",
        "Neutral gray. Terminal state: one giant elliptical dominates.",
    ),
    // Galactic-scale (kpc100)
    (
        "diffuseHalo",
        "#0d1117",
        "Near-black. A failed galaxy with minimal stellar content, almost disappearing into the void.",
    ),
    (
        "quenchedRemnant",
        "#4b5563",
        "Gray. Completely dead: no star formation, no AGN, quietly fading.",
    ),
    (
        "dwarfSpheroid",
        "#c9a66b",
        "Warm tan. Old, gas-poor, dominated by ancient red giants.",
    ),
    (
        "ellipticalGalaxy",
        "#c2555a",
        "Rose-red. The most massive galaxies, red and dead giants of clusters.",
    ),
    (
        "lenticularGalaxy",
        "#d4915d",
        "Amber. Disk structure remains but star formation has quenched, a sunset galaxy.",
    ),
    (
        "dwarfIrregular",
        "#4a7c9b",
        "Dusty blue. Gas-rich, chaotic, actively star-forming; think LMC/SMC.",
    ),
    (
        "activeGalactic",
        "#8b5cf6",
        "Violet. Powered by an accreting supermassive black hole, radiating across the spectrum.",
    ),
    (
        "spiralGalaxy",
        "#3fb5a3",
        "Cyan-teal. Active star formation in spiral arms, alive and growing.",
    ),
    // Interstellar-scale (pc100)
    (
        "evolvedField",
        "#565264",
        "Faded mauve. Old field stars and remnants, the long afterglow of formation.",
    ),
    (
        "diffuseIsm",
        "#33415c",
        "Smoky blue. Ambient warm and cool hydrogen between structures.",
    ),
    (
        "stellarStream",
        "#7d6f86",
        "Ash violet. A cluster smeared into a tidal ribbon.",
    ),
    (
        "globularCluster",
        "#b08d57",
        "Old gold. A dense ancient swarm of low-mass stars and remnants.",
    ),
    (
        "superbubble",
        "#6e4a5e",
        "Ember plum. A hot cavity carved by a generation of supernovae.",
    ),
    (
        "openCluster",
        "#5fa8d3",
        "Clear blue. A young coeval cluster still bright with massive stars.",
    ),
    (
        "giantMolecularCloud",
        "#2e4057",
        "Deep slate. Cold molecular murk, the birthplace of stars.",
    ),
    (
        "hiiRegion",
        "#c75d6a",
        "Glowing rose. Hydrogen ionized by newborn OB stars.",
    ),
    // Stellar-scale (pc1)
    (
        "diffuseGas",
        "#232a36",
        "Dim steel. A parcel of interstellar gas with no star.",
    ),
    (
        "substellarObject",
        "#4d4357",
        "Dark heather. Planetary-mass wanderers, cold and unlit.",
    ),
    (
        "brownDwarf",
        "#7c4f3a",
        "Umber. A failed star cooling forever on deuterium's leftovers.",
    ),
    (
        "whiteDwarf",
        "#c9d6ea",
        "Pale ice. A degenerate core shining on stored heat.",
    ),
    (
        "neutronStar",
        "#9fb8d8",
        "Electric steel. City-sized, spinning, magnetized.",
    ),
    (
        "blackHole",
        "#11001c",
        "Absolute violet-black. An event horizon with nothing to show.",
    ),
    (
        "star",
        "#f0c75e",
        "Golden. Sustained fusion, the engine of everything else here.",
    ),
];

/// The full presentation map, keyed by fate.
///
/// Labels are derived from keys; includes the background `empty` fate.
pub fn presentation_map() -> IndexMap<FateKey, FatePresentation> {
    PALETTE
        .iter()
        .map(|(key, hex, description)| {
            (
                *key,
                FatePresentation {
                    hex,
                    label: camel_to_title(key),
                    description,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::FateRegistry;

    #[test]
    fn camel_to_title_cases() {
        assert_eq!(camel_to_title("spiralGalaxy"), "Spiral Galaxy");
        assert_eq!(camel_to_title("void"), "Void");
        assert_eq!(camel_to_title("nonCoolCoreCluster"), "Non Cool Core Cluster");
    }

    #[test]
    fn every_registered_fate_has_a_presentation() {
        let registry = FateRegistry::builtin().unwrap();
        let map = presentation_map();
        for record in registry.records() {
            assert!(map.contains_key(record.key), "no palette entry for {}", record.key);
        }
    }

    #[test]
    fn palette_has_no_duplicate_keys_and_valid_hex() {
        let map = presentation_map();
        assert_eq!(map.len(), PALETTE.len(), "duplicate palette keys collapse");
        for (key, presentation) in &map {
            assert!(presentation.hex.starts_with('#') && presentation.hex.len() == 7, "{key}");
        }
    }
}
