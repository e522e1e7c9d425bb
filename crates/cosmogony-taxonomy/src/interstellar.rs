//! Interstellar-scale fates (`pc100` scale).
//!
//! Stellar neighborhoods: giant molecular clouds, star clusters, HII
//! regions, superbubbles, and the diffuse interstellar medium. This scale
//! has a characteristic timescale of tens of Myr — faster than galactic
//! evolution, spanning many stellar generations — and it determines the
//! local environment for star formation: stellar density, metallicity
//! coherence, gas availability.
//!
//! When an interstellar fate paints its stellar children it paints final
//! outcomes: a GMC paints the stars, brown dwarfs, and leftover gas that
//! will exist when the process completes, not "collapsing cores".

use crate::stellar::StellarFate;

/// A stellar-neighborhood regime at the 100 pc scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InterstellarFate {
    /// Active star-forming molecular cloud.
    GiantMolecularCloud,
    /// Ionized by young OB stars; feedback suppresses further formation.
    HiiRegion,
    /// Hot cavity carved by supernovae.
    Superbubble,
    /// Ambient warm/cool atomic gas.
    DiffuseIsm,
    /// Young bound cluster with a coeval population.
    OpenCluster,
    /// Ancient dense bound cluster.
    GlobularCluster,
    /// Tidally disrupted cluster stretched into a stream.
    StellarStream,
    /// Terminal: old field population.
    EvolvedField,
}

/// Why an interstellar structure can no longer change regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InterstellarLock {
    /// A gravitationally bound star cluster formed; its stars stay
    /// kinematically coherent.
    ClusterBinding,
    /// Stellar feedback destroyed the parent cloud; the gas cannot reform
    /// on this timescale.
    FeedbackDisruption,
    /// Tidal forces dispersed the structure.
    TidalDisruption,
}

impl InterstellarFate {
    pub const ALL: [InterstellarFate; 8] = [
        InterstellarFate::GiantMolecularCloud,
        InterstellarFate::HiiRegion,
        InterstellarFate::Superbubble,
        InterstellarFate::DiffuseIsm,
        InterstellarFate::OpenCluster,
        InterstellarFate::GlobularCluster,
        InterstellarFate::StellarStream,
        InterstellarFate::EvolvedField,
    ];

    /// Canonical camelCase key, globally unique across every scale's table.
    pub const fn key(self) -> &'static str {
        match self {
            InterstellarFate::GiantMolecularCloud => "giantMolecularCloud",
            InterstellarFate::HiiRegion => "hiiRegion",
            InterstellarFate::Superbubble => "superbubble",
            InterstellarFate::DiffuseIsm => "diffuseIsm",
            InterstellarFate::OpenCluster => "openCluster",
            InterstellarFate::GlobularCluster => "globularCluster",
            InterstellarFate::StellarStream => "stellarStream",
            InterstellarFate::EvolvedField => "evolvedField",
        }
    }
}

impl InterstellarLock {
    pub const fn key(self) -> &'static str {
        match self {
            InterstellarLock::ClusterBinding => "clusterBinding",
            InterstellarLock::FeedbackDisruption => "feedbackDisruption",
            InterstellarLock::TidalDisruption => "tidalDisruption",
        }
    }
}

/// Characteristics of one interstellar fate.
#[derive(Debug, Clone, Copy)]
pub struct InterstellarFateInfo {
    /// Structure size floor in parsecs.
    pub size_pc_min: f64,
    /// Structure size ceiling in parsecs; `None` is unbounded.
    pub size_pc_max: Option<f64>,
    pub gas_rich: bool,
    pub star_formation_active: bool,
    pub gravitationally_bound: bool,
    pub locked_by: Option<InterstellarLock>,
    /// Characteristic timescale in Myr.
    pub typical_timescale_myr: f64,
    /// Same-scale successors; empty once locked.
    pub allowed_transitions: &'static [InterstellarFate],
    /// Prior over stellar child fates.
    pub child_fate_weights: &'static [(StellarFate, f64)],
}

/// The canonical interstellar-scale table.
pub const INTERSTELLAR_SCALE_FATES: &[(InterstellarFate, InterstellarFateInfo)] = &[
    (
        InterstellarFate::GiantMolecularCloud,
        InterstellarFateInfo {
            size_pc_min: 10.0,
            size_pc_max: Some(100.0),
            gas_rich: true,
            star_formation_active: true,
            gravitationally_bound: false,
            locked_by: None,
            typical_timescale_myr: 30.0,
            allowed_transitions: &[
                InterstellarFate::HiiRegion,
                InterstellarFate::OpenCluster,
                InterstellarFate::DiffuseIsm,
            ],
            child_fate_weights: &[
                (StellarFate::DiffuseGas, 0.4), // cloud material that never forms stars
                (StellarFate::Star, 0.35),
                (StellarFate::BrownDwarf, 0.15),
                (StellarFate::SubstellarObject, 0.1),
            ],
        },
    ),
    (
        InterstellarFate::HiiRegion,
        InterstellarFateInfo {
            size_pc_min: 1.0,
            size_pc_max: Some(100.0),
            gas_rich: true,
            star_formation_active: false,
            gravitationally_bound: false,
            locked_by: Some(InterstellarLock::FeedbackDisruption),
            typical_timescale_myr: 10.0,
            allowed_transitions: &[],
            child_fate_weights: &[
                (StellarFate::Star, 0.45), // the ionizing OB stars
                (StellarFate::DiffuseGas, 0.25),
                (StellarFate::BrownDwarf, 0.18),
                (StellarFate::SubstellarObject, 0.12), // ejected from forming systems
            ],
        },
    ),
    (
        InterstellarFate::Superbubble,
        InterstellarFateInfo {
            size_pc_min: 50.0,
            size_pc_max: Some(500.0),
            gas_rich: false,
            star_formation_active: false,
            gravitationally_bound: false,
            locked_by: None,
            typical_timescale_myr: 30.0,
            allowed_transitions: &[InterstellarFate::DiffuseIsm],
            child_fate_weights: &[
                (StellarFate::DiffuseGas, 0.25), // hot, tenuous plasma
                (StellarFate::Star, 0.25),       // survivors
                (StellarFate::WhiteDwarf, 0.2),
                (StellarFate::NeutronStar, 0.15), // core-collapse supernovae
                (StellarFate::BlackHole, 0.06),
                (StellarFate::BrownDwarf, 0.05),
                (StellarFate::SubstellarObject, 0.04),
            ],
        },
    ),
    (
        InterstellarFate::DiffuseIsm,
        InterstellarFateInfo {
            size_pc_min: 10.0,
            size_pc_max: Some(100.0),
            gas_rich: true,
            star_formation_active: false,
            gravitationally_bound: false,
            locked_by: None,
            typical_timescale_myr: 100.0,
            allowed_transitions: &[InterstellarFate::GiantMolecularCloud],
            child_fate_weights: &[
                (StellarFate::DiffuseGas, 0.5),
                (StellarFate::Star, 0.25), // field stars passing through
                (StellarFate::WhiteDwarf, 0.1),
                (StellarFate::BrownDwarf, 0.08),
                (StellarFate::SubstellarObject, 0.04),
                (StellarFate::NeutronStar, 0.02),
                (StellarFate::BlackHole, 0.01),
            ],
        },
    ),
    (
        InterstellarFate::OpenCluster,
        InterstellarFateInfo {
            size_pc_min: 1.0,
            size_pc_max: Some(30.0),
            gas_rich: false,
            star_formation_active: false,
            gravitationally_bound: true,
            locked_by: Some(InterstellarLock::ClusterBinding),
            typical_timescale_myr: 100.0,
            allowed_transitions: &[],
            child_fate_weights: &[
                (StellarFate::Star, 0.6), // coeval population
                (StellarFate::BrownDwarf, 0.15),
                (StellarFate::WhiteDwarf, 0.1),
                (StellarFate::SubstellarObject, 0.08),
                (StellarFate::NeutronStar, 0.05),
                (StellarFate::BlackHole, 0.02),
            ],
        },
    ),
    (
        InterstellarFate::GlobularCluster,
        InterstellarFateInfo {
            size_pc_min: 10.0,
            size_pc_max: Some(100.0),
            gas_rich: false,
            star_formation_active: false,
            gravitationally_bound: true,
            locked_by: Some(InterstellarLock::ClusterBinding),
            typical_timescale_myr: 10000.0,
            allowed_transitions: &[],
            child_fate_weights: &[
                (StellarFate::Star, 0.4), // ancient low-mass survivors
                (StellarFate::WhiteDwarf, 0.3),
                (StellarFate::NeutronStar, 0.1), // includes millisecond pulsars
                (StellarFate::BrownDwarf, 0.1),
                (StellarFate::BlackHole, 0.05),
                (StellarFate::SubstellarObject, 0.05),
            ],
        },
    ),
    (
        InterstellarFate::StellarStream,
        InterstellarFateInfo {
            size_pc_min: 100.0,
            size_pc_max: Some(1000.0),
            gas_rich: false,
            star_formation_active: false,
            gravitationally_bound: false,
            locked_by: Some(InterstellarLock::TidalDisruption),
            typical_timescale_myr: 1000.0,
            allowed_transitions: &[],
            child_fate_weights: &[
                (StellarFate::Star, 0.45), // stripped from the parent cluster
                (StellarFate::WhiteDwarf, 0.25),
                (StellarFate::BrownDwarf, 0.12),
                (StellarFate::NeutronStar, 0.08),
                (StellarFate::SubstellarObject, 0.06),
                (StellarFate::BlackHole, 0.04),
            ],
        },
    ),
    (
        InterstellarFate::EvolvedField,
        InterstellarFateInfo {
            size_pc_min: 10.0,
            size_pc_max: Some(100.0),
            gas_rich: false,
            star_formation_active: false,
            gravitationally_bound: false,
            locked_by: None,
            typical_timescale_myr: 5000.0,
            allowed_transitions: &[],
            child_fate_weights: &[
                (StellarFate::Star, 0.35), // long-lived, low-mass
                (StellarFate::WhiteDwarf, 0.3),
                (StellarFate::BrownDwarf, 0.15),
                (StellarFate::SubstellarObject, 0.08),
                (StellarFate::NeutronStar, 0.07),
                (StellarFate::BlackHole, 0.05),
            ],
        },
    ),
];
