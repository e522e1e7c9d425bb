//! Baryon cooling regimes (`Mpc100` scale).
//!
//! Early-universe and diffuse-regime thermal states of baryonic matter,
//! *before* it becomes a bound object with a locked fate. These are
//! thermodynamic regimes, not structural fates: they determine whether
//! matter *can* cool and collapse, not what it becomes once it does. In the
//! early universe cooling — not mass — was the limiting factor; most
//! baryons never formed stars because they stayed coupled to radiation,
//! lacked molecular or metal cooling channels, or never fell into deep
//! potential wells.
//!
//! Regimes are reversible and time-dependent, so none of them carries a
//! lock or same-scale transitions. Only regimes where `can_gravitate` is
//! true paint cosmic web structure below them.

use crate::web::WebFate;

/// A thermal regime of baryonic matter at the 100 Mpc scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CoolingRegime {
    /// Photons dominate completely; pressure prevents any collapse.
    RadiationCoupled,
    /// Tightly coupled baryon-photon fluid carrying acoustic oscillations.
    AcousticFluid,
    /// Post-recombination neutral gas, decoupled and free to gravitate.
    RecombinedGas,
    /// Decoupled but below every cooling threshold; collapse stalls.
    NoCooling,
    /// Molecular-hydrogen cooling enables the first (Pop III) stars.
    PopIiiStarFormation,
    /// Metal-line cooling from processed material.
    MetalCooling,
}

impl CoolingRegime {
    pub const ALL: [CoolingRegime; 6] = [
        CoolingRegime::RadiationCoupled,
        CoolingRegime::AcousticFluid,
        CoolingRegime::RecombinedGas,
        CoolingRegime::NoCooling,
        CoolingRegime::PopIiiStarFormation,
        CoolingRegime::MetalCooling,
    ];

    /// Canonical camelCase key, globally unique across every scale's table.
    pub const fn key(self) -> &'static str {
        match self {
            CoolingRegime::RadiationCoupled => "radiationCoupled",
            CoolingRegime::AcousticFluid => "acousticFluid",
            CoolingRegime::RecombinedGas => "recombinedGas",
            CoolingRegime::NoCooling => "noCooling",
            CoolingRegime::PopIiiStarFormation => "popIiiStarFormation",
            CoolingRegime::MetalCooling => "metalCooling",
        }
    }
}

/// Order-of-magnitude thermal characteristics of a cooling regime.
///
/// Values are thresholds describing which physics dominates, not precise
/// predictions. `None` means the bound does not apply to this regime.
#[derive(Debug, Clone, Copy)]
pub struct CoolingRegimeInfo {
    /// Temperature floor in kelvin.
    pub min_temperature_k: Option<f64>,
    /// Temperature ceiling in kelvin.
    pub max_temperature_k: Option<f64>,
    /// Free electrons per baryon.
    pub free_electron_abundance: Option<f64>,
    /// Thomson scattering rate over expansion rate.
    pub thomson_to_expansion_ratio: Option<f64>,
    /// Molecular hydrogen fraction per H.
    pub h2_fraction: Option<f64>,
    /// Metallicity relative to solar.
    pub metallicity: Option<f64>,
    /// Whether collapse needs a pre-existing dark matter halo.
    pub requires_dark_matter_halo: bool,
    /// Whether gravitational collapse can proceed at all.
    pub can_gravitate: bool,
    /// Primordial lithium survives in this regime.
    pub primordial_lithium_preserved: bool,
    /// Prior over web-scale child fates. Empty for regimes that cannot
    /// gravitate — the universe below them stays homogeneous.
    pub child_fate_weights: &'static [(WebFate, f64)],
}

/// The canonical cooling-regime table.
pub const COOLING_REGIMES: &[(CoolingRegime, CoolingRegimeInfo)] = &[
    (
        CoolingRegime::RadiationCoupled,
        CoolingRegimeInfo {
            min_temperature_k: Some(1e6),
            max_temperature_k: None,
            free_electron_abundance: Some(1.0),
            thomson_to_expansion_ratio: Some(1e5),
            h2_fraction: None,
            metallicity: None,
            requires_dark_matter_halo: false,
            can_gravitate: false,
            primordial_lithium_preserved: true,
            child_fate_weights: &[],
        },
    ),
    (
        CoolingRegime::AcousticFluid,
        CoolingRegimeInfo {
            min_temperature_k: Some(3000.0),
            max_temperature_k: Some(1e6),
            free_electron_abundance: Some(0.99),
            thomson_to_expansion_ratio: Some(10.0),
            h2_fraction: None,
            metallicity: None,
            requires_dark_matter_halo: false,
            can_gravitate: false,
            primordial_lithium_preserved: true,
            child_fate_weights: &[],
        },
    ),
    (
        CoolingRegime::RecombinedGas,
        CoolingRegimeInfo {
            min_temperature_k: None,
            max_temperature_k: Some(3000.0),
            free_electron_abundance: Some(1e-4),
            thomson_to_expansion_ratio: Some(0.1),
            h2_fraction: None,
            metallicity: None,
            requires_dark_matter_halo: false,
            can_gravitate: true,
            primordial_lithium_preserved: true,
            child_fate_weights: &[
                (WebFate::Void, 0.6), // voids dominate by volume
                (WebFate::Sheet, 0.2),
                (WebFate::Filament, 0.15),
                (WebFate::Node, 0.04), // rare dense intersections
                (WebFate::InfallRegion, 0.01),
            ],
        },
    ),
    (
        CoolingRegime::NoCooling,
        CoolingRegimeInfo {
            min_temperature_k: None,
            max_temperature_k: None,
            free_electron_abundance: Some(1e-4),
            thomson_to_expansion_ratio: None,
            h2_fraction: Some(1e-7),
            metallicity: Some(0.0),
            requires_dark_matter_halo: true,
            can_gravitate: false,
            primordial_lithium_preserved: true,
            child_fate_weights: &[
                (WebFate::Void, 0.85), // collapse stalls without cooling
                (WebFate::Sheet, 0.15),
            ],
        },
    ),
    (
        CoolingRegime::PopIiiStarFormation,
        CoolingRegimeInfo {
            min_temperature_k: None,
            max_temperature_k: None,
            free_electron_abundance: None,
            thomson_to_expansion_ratio: None,
            h2_fraction: Some(1e-4),
            metallicity: Some(0.0),
            requires_dark_matter_halo: true,
            can_gravitate: true,
            primordial_lithium_preserved: false,
            child_fate_weights: &[
                (WebFate::Void, 0.5),
                (WebFate::Sheet, 0.25),
                (WebFate::Filament, 0.15),
                (WebFate::Node, 0.08),
                (WebFate::InfallRegion, 0.02),
            ],
        },
    ),
    (
        CoolingRegime::MetalCooling,
        CoolingRegimeInfo {
            min_temperature_k: None,
            max_temperature_k: None,
            free_electron_abundance: None,
            thomson_to_expansion_ratio: None,
            h2_fraction: None,
            metallicity: Some(1e-4), // critical metallicity
            requires_dark_matter_halo: true,
            can_gravitate: true,
            primordial_lithium_preserved: false,
            child_fate_weights: &[
                (WebFate::Void, 0.55),
                (WebFate::Sheet, 0.2),
                (WebFate::Filament, 0.15),
                (WebFate::Node, 0.07),
                (WebFate::InfallRegion, 0.03),
            ],
        },
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coupled_regimes_paint_no_structure() {
        // Before decoupling the universe is homogeneous: no child weights.
        for (regime, info) in COOLING_REGIMES {
            let coupled = matches!(
                regime,
                CoolingRegime::RadiationCoupled | CoolingRegime::AcousticFluid
            );
            if coupled {
                assert!(
                    info.child_fate_weights.is_empty(),
                    "{} is photon-coupled but paints structure",
                    regime.key()
                );
            } else {
                assert!(!info.child_fate_weights.is_empty());
            }
        }
    }

    #[test]
    fn table_covers_every_regime_once() {
        for regime in CoolingRegime::ALL {
            assert_eq!(
                COOLING_REGIMES.iter().filter(|(r, _)| *r == regime).count(),
                1
            );
        }
    }
}
