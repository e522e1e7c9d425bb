//! Galactic-scale fates (`kpc100` scale).
//!
//! Physical regimes of galaxies: dark-matter-dominated halos hosting
//! stellar and gas components, distinguished by morphology, gas content,
//! and dynamical state.
//!
//! A galactic fate paints its interstellar children with what will
//! eventually exist there — a spiral paints GMCs, HII regions, and open
//! clusters; an elliptical paints evolved field and globular clusters.
//! Transitions between galactic fates are caused by external events (major
//! mergers, gas stripping); when a galaxy transitions, it repaints its
//! children.

use crate::interstellar::InterstellarFate;
use crate::StellarPopulation;

/// A galaxy regime at the 100 kpc scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GalacticFate {
    /// A failed galaxy: dark matter and sparse gas, minimal stars.
    DiffuseHalo,
    /// Gas-rich, chaotic, actively star-forming dwarf.
    DwarfIrregular,
    /// Old, gas-poor dwarf dominated by ancient stars.
    DwarfSpheroid,
    /// Disk galaxy with active star formation in spiral arms.
    SpiralGalaxy,
    /// Disk remains but star formation has quenched.
    LenticularGalaxy,
    /// Pressure-supported spheroid of old stars.
    EllipticalGalaxy,
    /// Accreting supermassive black hole dominates the output.
    ActiveGalactic,
    /// Terminal: no star formation, no AGN, quietly fading.
    QuenchedRemnant,
}

/// Why a galaxy can no longer change regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GalacticLock {
    /// Violent relaxation produced pressure-supported structure; disk
    /// rebuilding is extremely unlikely.
    MorphologicalRelaxation,
    /// Gas reservoir permanently depleted.
    GasExhaustion,
    /// Torn apart by a larger system's tides.
    TidalDisruption,
}

impl GalacticFate {
    pub const ALL: [GalacticFate; 8] = [
        GalacticFate::DiffuseHalo,
        GalacticFate::DwarfIrregular,
        GalacticFate::DwarfSpheroid,
        GalacticFate::SpiralGalaxy,
        GalacticFate::LenticularGalaxy,
        GalacticFate::EllipticalGalaxy,
        GalacticFate::ActiveGalactic,
        GalacticFate::QuenchedRemnant,
    ];

    /// Canonical camelCase key, globally unique across every scale's table.
    pub const fn key(self) -> &'static str {
        match self {
            GalacticFate::DiffuseHalo => "diffuseHalo",
            GalacticFate::DwarfIrregular => "dwarfIrregular",
            GalacticFate::DwarfSpheroid => "dwarfSpheroid",
            GalacticFate::SpiralGalaxy => "spiralGalaxy",
            GalacticFate::LenticularGalaxy => "lenticularGalaxy",
            GalacticFate::EllipticalGalaxy => "ellipticalGalaxy",
            GalacticFate::ActiveGalactic => "activeGalactic",
            GalacticFate::QuenchedRemnant => "quenchedRemnant",
        }
    }
}

impl GalacticLock {
    pub const fn key(self) -> &'static str {
        match self {
            GalacticLock::MorphologicalRelaxation => "morphologicalRelaxation",
            GalacticLock::GasExhaustion => "gasExhaustion",
            GalacticLock::TidalDisruption => "tidalDisruption",
        }
    }
}

/// Characteristics of one galactic fate.
#[derive(Debug, Clone, Copy)]
pub struct GalacticFateInfo {
    /// Stellar mass floor in solar masses.
    pub stellar_mass_min_msun: f64,
    /// Stellar mass ceiling in solar masses; `None` is unbounded.
    pub stellar_mass_max_msun: Option<f64>,
    pub gas_rich: bool,
    pub star_formation_active: bool,
    pub dominant_stellar_population: StellarPopulation,
    pub locked_by: Option<GalacticLock>,
    /// Characteristic evolution timescale in Gyr.
    pub typical_timescale_gyr: f64,
    /// Same-scale successors; empty once locked.
    pub allowed_transitions: &'static [GalacticFate],
    /// Prior over interstellar child fates.
    pub child_fate_weights: &'static [(InterstellarFate, f64)],
}

/// The canonical galactic-scale table.
pub const GALACTIC_SCALE_FATES: &[(GalacticFate, GalacticFateInfo)] = &[
    (
        GalacticFate::DiffuseHalo,
        GalacticFateInfo {
            stellar_mass_min_msun: 1e4,
            stellar_mass_max_msun: Some(1e7),
            gas_rich: true,
            star_formation_active: false,
            dominant_stellar_population: StellarPopulation::Old,
            locked_by: None,
            typical_timescale_gyr: 2.0,
            allowed_transitions: &[GalacticFate::DwarfIrregular, GalacticFate::DwarfSpheroid],
            child_fate_weights: &[
                (InterstellarFate::DiffuseIsm, 0.6),
                (InterstellarFate::EvolvedField, 0.3),
                (InterstellarFate::GiantMolecularCloud, 0.08),
                (InterstellarFate::OpenCluster, 0.02),
            ],
        },
    ),
    (
        GalacticFate::DwarfIrregular,
        GalacticFateInfo {
            stellar_mass_min_msun: 1e6,
            stellar_mass_max_msun: Some(1e9),
            gas_rich: true,
            star_formation_active: true,
            dominant_stellar_population: StellarPopulation::Mixed,
            locked_by: None,
            typical_timescale_gyr: 1.0,
            allowed_transitions: &[GalacticFate::DwarfSpheroid, GalacticFate::SpiralGalaxy],
            child_fate_weights: &[
                (InterstellarFate::GiantMolecularCloud, 0.25),
                (InterstellarFate::Superbubble, 0.2),
                (InterstellarFate::DiffuseIsm, 0.25),
                (InterstellarFate::HiiRegion, 0.15),
                (InterstellarFate::OpenCluster, 0.1),
                (InterstellarFate::EvolvedField, 0.05),
            ],
        },
    ),
    (
        GalacticFate::DwarfSpheroid,
        GalacticFateInfo {
            stellar_mass_min_msun: 1e5,
            stellar_mass_max_msun: Some(1e8),
            gas_rich: false,
            star_formation_active: false,
            dominant_stellar_population: StellarPopulation::Old,
            locked_by: Some(GalacticLock::GasExhaustion),
            typical_timescale_gyr: 5.0,
            allowed_transitions: &[],
            child_fate_weights: &[
                (InterstellarFate::EvolvedField, 0.6),
                (InterstellarFate::GlobularCluster, 0.15),
                (InterstellarFate::StellarStream, 0.15),
                (InterstellarFate::DiffuseIsm, 0.1),
            ],
        },
    ),
    (
        GalacticFate::SpiralGalaxy,
        GalacticFateInfo {
            stellar_mass_min_msun: 1e9,
            stellar_mass_max_msun: Some(1e12),
            gas_rich: true,
            star_formation_active: true,
            dominant_stellar_population: StellarPopulation::Mixed,
            locked_by: None,
            typical_timescale_gyr: 3.0,
            allowed_transitions: &[
                GalacticFate::LenticularGalaxy,
                GalacticFate::EllipticalGalaxy,
                GalacticFate::ActiveGalactic,
            ],
            child_fate_weights: &[
                (InterstellarFate::GiantMolecularCloud, 0.2),
                (InterstellarFate::HiiRegion, 0.1),
                (InterstellarFate::DiffuseIsm, 0.25),
                (InterstellarFate::OpenCluster, 0.15),
                (InterstellarFate::Superbubble, 0.1),
                (InterstellarFate::EvolvedField, 0.15),
                (InterstellarFate::GlobularCluster, 0.03),
                (InterstellarFate::StellarStream, 0.02),
            ],
        },
    ),
    (
        GalacticFate::LenticularGalaxy,
        GalacticFateInfo {
            stellar_mass_min_msun: 1e10,
            stellar_mass_max_msun: Some(1e12),
            gas_rich: false,
            star_formation_active: false,
            dominant_stellar_population: StellarPopulation::Old,
            locked_by: None,
            typical_timescale_gyr: 4.0,
            allowed_transitions: &[GalacticFate::EllipticalGalaxy, GalacticFate::QuenchedRemnant],
            child_fate_weights: &[
                (InterstellarFate::EvolvedField, 0.5),
                (InterstellarFate::DiffuseIsm, 0.15),
                (InterstellarFate::GlobularCluster, 0.1),
                (InterstellarFate::StellarStream, 0.1),
                (InterstellarFate::OpenCluster, 0.1),
                (InterstellarFate::Superbubble, 0.05),
            ],
        },
    ),
    (
        GalacticFate::EllipticalGalaxy,
        GalacticFateInfo {
            stellar_mass_min_msun: 1e10,
            stellar_mass_max_msun: None,
            gas_rich: false,
            star_formation_active: false,
            dominant_stellar_population: StellarPopulation::Old,
            locked_by: Some(GalacticLock::MorphologicalRelaxation),
            typical_timescale_gyr: 6.0,
            allowed_transitions: &[],
            child_fate_weights: &[
                (InterstellarFate::EvolvedField, 0.55),
                (InterstellarFate::GlobularCluster, 0.2),
                (InterstellarFate::StellarStream, 0.15),
                (InterstellarFate::DiffuseIsm, 0.1),
            ],
        },
    ),
    (
        GalacticFate::ActiveGalactic,
        GalacticFateInfo {
            stellar_mass_min_msun: 1e10,
            stellar_mass_max_msun: None,
            gas_rich: false,
            star_formation_active: false,
            dominant_stellar_population: StellarPopulation::Mixed,
            locked_by: None,
            typical_timescale_gyr: 0.5, // AGN duty cycles are short
            allowed_transitions: &[GalacticFate::EllipticalGalaxy, GalacticFate::QuenchedRemnant],
            child_fate_weights: &[
                (InterstellarFate::DiffuseIsm, 0.35),
                (InterstellarFate::EvolvedField, 0.3),
                (InterstellarFate::Superbubble, 0.15),
                (InterstellarFate::GlobularCluster, 0.1),
                (InterstellarFate::StellarStream, 0.1),
            ],
        },
    ),
    (
        GalacticFate::QuenchedRemnant,
        GalacticFateInfo {
            stellar_mass_min_msun: 1e9,
            stellar_mass_max_msun: None,
            gas_rich: false,
            star_formation_active: false,
            dominant_stellar_population: StellarPopulation::Old,
            locked_by: Some(GalacticLock::GasExhaustion),
            typical_timescale_gyr: 8.0,
            allowed_transitions: &[],
            child_fate_weights: &[
                (InterstellarFate::EvolvedField, 0.65),
                (InterstellarFate::GlobularCluster, 0.15),
                (InterstellarFate::StellarStream, 0.15),
                (InterstellarFate::DiffuseIsm, 0.05),
            ],
        },
    ),
];
