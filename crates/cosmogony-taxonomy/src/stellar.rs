//! Stellar-scale fates (`pc1` scale) — the leaf of the ladder.
//!
//! At ~1 pc a parcel is a single stellar system or the immediate
//! environment of one: a star, a remnant, or a patch of gas. The seven
//! fates split by what resists gravity — nothing (diffuse gas), fusion
//! (stars), electron or neutron degeneracy (white dwarfs, brown dwarfs,
//! neutron stars), material strength (substellar objects), or nothing at
//! all behind an event horizon.
//!
//! Stars do not transition to remnants here. Internal evolution is not a
//! transition — when the parent interstellar region ages it repaints its
//! children with more remnants and fewer live stars. This is the leaf
//! scale, so no fate paints children.

/// Chemical elements a stellar fate can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum Element {
    H,
    He,
    C,
    N,
    O,
    Ne,
    Mg,
    Si,
    S,
    Fe,
    Ni,
}

/// What resists gravity at the microscopic level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Support {
    /// Kinetic pressure from thermal motion.
    ThermalGas,
    /// Pauli exclusion of electrons (white/brown dwarfs).
    ElectronDegeneracy,
    /// Pauli exclusion of neutrons.
    NeutronDegeneracy,
    /// Fusion energy release regulates contraction.
    Nuclear,
    /// Electromagnetic bonds / lattice strength.
    Material,
    /// Spacetime geometry; nothing else applies.
    EventHorizon,
}

/// A stellar-system regime at the 1 pc scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StellarFate {
    /// Ambient ISM; not self-gravitating.
    DiffuseGas,
    /// Any object with sustained fusion, main sequence through AGB.
    Star,
    /// Electron-degenerate remnant; no fusion.
    WhiteDwarf,
    /// Neutron-degenerate remnant of a massive star.
    NeutronStar,
    /// Singularity behind an event horizon.
    BlackHole,
    /// Never achieved sustained hydrogen fusion; cools forever.
    BrownDwarf,
    /// Below brown-dwarf mass: planetary-mass objects, rogue planets.
    SubstellarObject,
}

/// Why a stellar parcel can no longer change regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StellarLock {
    /// Hydrogen fusion began.
    FusionIgnition,
    /// Electron degeneracy is the sole support.
    ElectronDegeneracyDominance,
    /// Neutron degeneracy is the sole support.
    NeutronDegeneracyDominance,
    /// A singularity formed.
    EventHorizonFormation,
}

impl StellarFate {
    pub const ALL: [StellarFate; 7] = [
        StellarFate::DiffuseGas,
        StellarFate::Star,
        StellarFate::WhiteDwarf,
        StellarFate::NeutronStar,
        StellarFate::BlackHole,
        StellarFate::BrownDwarf,
        StellarFate::SubstellarObject,
    ];

    /// Canonical camelCase key, globally unique across every scale's table.
    pub const fn key(self) -> &'static str {
        match self {
            StellarFate::DiffuseGas => "diffuseGas",
            StellarFate::Star => "star",
            StellarFate::WhiteDwarf => "whiteDwarf",
            StellarFate::NeutronStar => "neutronStar",
            StellarFate::BlackHole => "blackHole",
            StellarFate::BrownDwarf => "brownDwarf",
            StellarFate::SubstellarObject => "substellarObject",
        }
    }
}

impl StellarLock {
    pub const fn key(self) -> &'static str {
        match self {
            StellarLock::FusionIgnition => "fusionIgnition",
            StellarLock::ElectronDegeneracyDominance => "electronDegeneracyDominance",
            StellarLock::NeutronDegeneracyDominance => "neutronDegeneracyDominance",
            StellarLock::EventHorizonFormation => "eventHorizonFormation",
        }
    }
}

/// Characteristics of one stellar fate.
#[derive(Debug, Clone, Copy)]
pub struct StellarFateInfo {
    /// Mass floor in solar masses; `None` means no floor.
    pub mass_min_msun: Option<f64>,
    /// Mass ceiling in solar masses; `None` is unbounded.
    pub mass_max_msun: Option<f64>,
    /// Elements this fate enriches its surroundings with.
    pub elements_produced: &'static [Element],
    /// Support mechanisms; empty means not self-gravitating.
    pub support: &'static [Support],
    pub locked_by: Option<StellarLock>,
    /// Characteristic timescale in Myr; infinite for permanent objects.
    pub typical_timescale_myr: f64,
    /// Same-scale successors; empty once locked.
    pub allowed_transitions: &'static [StellarFate],
}

/// The canonical stellar-scale table.
pub const STELLAR_SCALE_FATES: &[(StellarFate, StellarFateInfo)] = &[
    (
        StellarFate::DiffuseGas,
        StellarFateInfo {
            mass_min_msun: None,
            mass_max_msun: None,
            elements_produced: &[],
            support: &[],
            locked_by: None,
            typical_timescale_myr: 100.0,
            allowed_transitions: &[],
        },
    ),
    (
        StellarFate::Star,
        StellarFateInfo {
            mass_min_msun: Some(0.08), // hydrogen-burning limit
            mass_max_msun: Some(150.0),
            elements_produced: &[Element::He, Element::C, Element::N, Element::O],
            support: &[Support::Nuclear],
            locked_by: Some(StellarLock::FusionIgnition),
            typical_timescale_myr: 10000.0, // varies enormously by mass
            allowed_transitions: &[],
        },
    ),
    (
        StellarFate::WhiteDwarf,
        StellarFateInfo {
            mass_min_msun: Some(0.5),
            mass_max_msun: Some(1.4), // Chandrasekhar limit
            elements_produced: &[Element::He, Element::C, Element::N, Element::O],
            support: &[Support::ElectronDegeneracy],
            locked_by: Some(StellarLock::ElectronDegeneracyDominance),
            typical_timescale_myr: f64::INFINITY,
            allowed_transitions: &[],
        },
    ),
    (
        StellarFate::NeutronStar,
        StellarFateInfo {
            mass_min_msun: Some(1.4),
            mass_max_msun: Some(2.5), // TOV limit
            elements_produced: &[
                Element::He,
                Element::C,
                Element::N,
                Element::O,
                Element::Ne,
                Element::Mg,
                Element::Si,
                Element::S,
                Element::Fe,
                Element::Ni,
            ],
            support: &[Support::NeutronDegeneracy],
            locked_by: Some(StellarLock::NeutronDegeneracyDominance),
            typical_timescale_myr: f64::INFINITY,
            allowed_transitions: &[],
        },
    ),
    (
        StellarFate::BlackHole,
        StellarFateInfo {
            mass_min_msun: Some(2.5),
            mass_max_msun: None,
            elements_produced: &[
                Element::He,
                Element::C,
                Element::N,
                Element::O,
                Element::Ne,
                Element::Mg,
                Element::Si,
                Element::S,
                Element::Fe,
                Element::Ni,
            ],
            support: &[Support::EventHorizon],
            locked_by: Some(StellarLock::EventHorizonFormation),
            typical_timescale_myr: f64::INFINITY,
            allowed_transitions: &[],
        },
    ),
    (
        StellarFate::BrownDwarf,
        StellarFateInfo {
            mass_min_msun: Some(0.013), // deuterium-burning limit
            mass_max_msun: Some(0.08),
            elements_produced: &[],
            support: &[Support::ElectronDegeneracy],
            locked_by: Some(StellarLock::ElectronDegeneracyDominance),
            typical_timescale_myr: f64::INFINITY,
            allowed_transitions: &[],
        },
    ),
    (
        StellarFate::SubstellarObject,
        StellarFateInfo {
            mass_min_msun: None,
            mass_max_msun: Some(0.013),
            elements_produced: &[],
            support: &[Support::Material, Support::ElectronDegeneracy],
            locked_by: Some(StellarLock::ElectronDegeneracyDominance),
            typical_timescale_myr: f64::INFINITY,
            allowed_transitions: &[],
        },
    ),
];
