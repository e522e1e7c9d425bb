//! Halo-scale fates (`Mpc1` scale).
//!
//! Dark matter halos hosting galaxy populations, from loose groups to
//! massive clusters — the largest gravitationally bound structures. The
//! fundamental distinction is halo mass: group-mass halos (1e12–1e13 solar
//! masses) can radiatively cool their gas, so star formation continues;
//! cluster-mass halos (1e14+) shock-heat their gas to virial temperature
//! and it stays hot.
//!
//! A halo fate paints its galactic children with final outcomes: a gas-rich
//! group paints spirals and irregulars, a fossil cluster paints one giant
//! elliptical plus dwarfs. Transient phases (protoclusters, ongoing
//! mergers) are mechanisms, not fates, and are not modeled.

use crate::galactic::GalacticFate;
use crate::BaryonPhase;

/// A dark-matter-halo regime at the 1 Mpc scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HaloFate {
    /// No bound halo formed; background cell of the web.
    Empty,
    /// Gas cooling works; spirals and irregulars thrive.
    GasRichGroup,
    /// Gas depleted; star formation quenched.
    GasPoorGroup,
    /// Dynamical friction exhausted; one giant elliptical dominates.
    FossilGroup,
    /// Central cooling balanced against AGN feedback.
    CoolCoreCluster,
    /// Merger-heated; no central cooling established.
    NonCoolCoreCluster,
    /// Terminal: single dominant elliptical, two-magnitude luminosity gap.
    FossilCluster,
}

/// Why a halo-scale parcel can no longer change regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HaloLock {
    /// Virialized into a single halo.
    GravitationalBinding,
    /// Shock-heated ICM dominates the baryons.
    Thermalization,
    /// Internal merging complete.
    DynamicalExhaustion,
    /// AGN feedback and cooling reached equilibrium.
    CoolingFeedbackBalance,
}

impl HaloFate {
    pub const ALL: [HaloFate; 7] = [
        HaloFate::Empty,
        HaloFate::GasRichGroup,
        HaloFate::GasPoorGroup,
        HaloFate::FossilGroup,
        HaloFate::CoolCoreCluster,
        HaloFate::NonCoolCoreCluster,
        HaloFate::FossilCluster,
    ];

    /// Canonical camelCase key, globally unique across every scale's table.
    pub const fn key(self) -> &'static str {
        match self {
            HaloFate::Empty => "empty",
            HaloFate::GasRichGroup => "gasRichGroup",
            HaloFate::GasPoorGroup => "gasPoorGroup",
            HaloFate::FossilGroup => "fossilGroup",
            HaloFate::CoolCoreCluster => "coolCoreCluster",
            HaloFate::NonCoolCoreCluster => "nonCoolCoreCluster",
            HaloFate::FossilCluster => "fossilCluster",
        }
    }
}

impl HaloLock {
    pub const fn key(self) -> &'static str {
        match self {
            HaloLock::GravitationalBinding => "gravitationalBinding",
            HaloLock::Thermalization => "thermalization",
            HaloLock::DynamicalExhaustion => "dynamicalExhaustion",
            HaloLock::CoolingFeedbackBalance => "coolingFeedbackBalance",
        }
    }
}

/// Characteristics of one halo-scale fate.
#[derive(Debug, Clone, Copy)]
pub struct HaloFateInfo {
    /// Halo mass floor in solar masses.
    pub halo_mass_min_msun: f64,
    /// Halo mass ceiling in solar masses; `None` is unbounded.
    pub halo_mass_max_msun: Option<f64>,
    pub gravitationally_bound: bool,
    pub dominant_baryon_phase: BaryonPhase,
    pub locked_by: Option<HaloLock>,
    /// Characteristic evolution timescale in Gyr.
    pub typical_timescale_gyr: f64,
    /// Same-scale successors; empty once locked into a terminal state.
    pub allowed_transitions: &'static [HaloFate],
    /// Prior over galactic child fates.
    pub child_fate_weights: &'static [(GalacticFate, f64)],
}

/// The canonical halo-scale table.
pub const HALO_SCALE_FATES: &[(HaloFate, HaloFateInfo)] = &[
    (
        // Background cell: most of the web hosts no bound halo at all.
        // Paints nothing below it; galactic sampling through an empty cell
        // degrades to the diffuse-halo fallback.
        HaloFate::Empty,
        HaloFateInfo {
            halo_mass_min_msun: 0.0,
            halo_mass_max_msun: Some(1e12),
            gravitationally_bound: false,
            dominant_baryon_phase: BaryonPhase::Plasma,
            locked_by: None,
            typical_timescale_gyr: 10.0,
            allowed_transitions: &[HaloFate::GasRichGroup],
            child_fate_weights: &[],
        },
    ),
    // Group-mass halos (1e12-1e13 Msun): gas can cool and accrete.
    (
        HaloFate::GasRichGroup,
        HaloFateInfo {
            halo_mass_min_msun: 1e12,
            halo_mass_max_msun: Some(1e13),
            gravitationally_bound: true,
            dominant_baryon_phase: BaryonPhase::Mixed,
            locked_by: Some(HaloLock::GravitationalBinding),
            typical_timescale_gyr: 2.0,
            allowed_transitions: &[],
            child_fate_weights: &[
                (GalacticFate::SpiralGalaxy, 0.35),
                (GalacticFate::DwarfIrregular, 0.25),
                (GalacticFate::ActiveGalactic, 0.1), // interactions trigger AGN
                (GalacticFate::LenticularGalaxy, 0.1),
                (GalacticFate::DwarfSpheroid, 0.1),
                (GalacticFate::EllipticalGalaxy, 0.05),
                (GalacticFate::DiffuseHalo, 0.05),
            ],
        },
    ),
    (
        HaloFate::GasPoorGroup,
        HaloFateInfo {
            halo_mass_min_msun: 1e12,
            halo_mass_max_msun: Some(1e13),
            gravitationally_bound: true,
            dominant_baryon_phase: BaryonPhase::Stellar,
            locked_by: Some(HaloLock::GravitationalBinding),
            typical_timescale_gyr: 4.0,
            allowed_transitions: &[],
            child_fate_weights: &[
                (GalacticFate::LenticularGalaxy, 0.3),
                (GalacticFate::EllipticalGalaxy, 0.2),
                (GalacticFate::DwarfSpheroid, 0.2),
                (GalacticFate::SpiralGalaxy, 0.1), // survivors at the outskirts
                (GalacticFate::QuenchedRemnant, 0.1),
                (GalacticFate::DwarfIrregular, 0.05),
                (GalacticFate::DiffuseHalo, 0.05),
            ],
        },
    ),
    (
        HaloFate::FossilGroup,
        HaloFateInfo {
            halo_mass_min_msun: 1e12,
            halo_mass_max_msun: Some(1e13),
            gravitationally_bound: true,
            dominant_baryon_phase: BaryonPhase::Stellar,
            locked_by: Some(HaloLock::DynamicalExhaustion),
            typical_timescale_gyr: 6.0,
            allowed_transitions: &[],
            child_fate_weights: &[
                (GalacticFate::EllipticalGalaxy, 0.5), // central dominant galaxy
                (GalacticFate::QuenchedRemnant, 0.2),
                (GalacticFate::DwarfSpheroid, 0.15),
                (GalacticFate::LenticularGalaxy, 0.1),
                (GalacticFate::DiffuseHalo, 0.05),
            ],
        },
    ),
    // Cluster-mass halos (1e14+ Msun): shock-heated ICM dominates.
    (
        HaloFate::CoolCoreCluster,
        HaloFateInfo {
            halo_mass_min_msun: 1e14,
            halo_mass_max_msun: None,
            gravitationally_bound: true,
            dominant_baryon_phase: BaryonPhase::Plasma,
            locked_by: Some(HaloLock::CoolingFeedbackBalance),
            typical_timescale_gyr: 5.0,
            allowed_transitions: &[],
            child_fate_weights: &[
                (GalacticFate::EllipticalGalaxy, 0.4), // includes the BCG
                (GalacticFate::LenticularGalaxy, 0.2),
                (GalacticFate::DwarfSpheroid, 0.15),
                (GalacticFate::ActiveGalactic, 0.1), // central AGN in the BCG
                (GalacticFate::QuenchedRemnant, 0.1),
                (GalacticFate::SpiralGalaxy, 0.03), // very rare, recent infall
                (GalacticFate::DiffuseHalo, 0.02),
            ],
        },
    ),
    (
        HaloFate::NonCoolCoreCluster,
        HaloFateInfo {
            halo_mass_min_msun: 1e14,
            halo_mass_max_msun: None,
            gravitationally_bound: true,
            dominant_baryon_phase: BaryonPhase::Plasma,
            locked_by: Some(HaloLock::Thermalization),
            typical_timescale_gyr: 3.0,
            allowed_transitions: &[],
            child_fate_weights: &[
                (GalacticFate::EllipticalGalaxy, 0.35),
                (GalacticFate::LenticularGalaxy, 0.25),
                (GalacticFate::DwarfSpheroid, 0.15),
                (GalacticFate::QuenchedRemnant, 0.1),
                (GalacticFate::ActiveGalactic, 0.05),
                (GalacticFate::SpiralGalaxy, 0.05),
                (GalacticFate::DiffuseHalo, 0.05),
            ],
        },
    ),
    (
        HaloFate::FossilCluster,
        HaloFateInfo {
            halo_mass_min_msun: 1e14,
            halo_mass_max_msun: None,
            gravitationally_bound: true,
            dominant_baryon_phase: BaryonPhase::Plasma,
            locked_by: Some(HaloLock::DynamicalExhaustion),
            typical_timescale_gyr: 8.0,
            allowed_transitions: &[],
            child_fate_weights: &[
                (GalacticFate::EllipticalGalaxy, 0.5), // central giant dominates
                (GalacticFate::DwarfSpheroid, 0.2),
                (GalacticFate::QuenchedRemnant, 0.15),
                (GalacticFate::LenticularGalaxy, 0.1),
                (GalacticFate::DiffuseHalo, 0.05), // intracluster light
            ],
        },
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_halos_are_locked() {
        // Every bound halo has crossed an irreversible threshold; only the
        // empty background cell stays unlocked.
        for (fate, info) in HALO_SCALE_FATES {
            if info.gravitationally_bound {
                assert!(info.locked_by.is_some(), "{} is bound but unlocked", fate.key());
                assert!(info.allowed_transitions.is_empty());
            }
        }
    }

    #[test]
    fn cluster_mass_floor_exceeds_group_ceiling() {
        for (_, info) in HALO_SCALE_FATES {
            if info.halo_mass_min_msun >= 1e14 {
                assert!(info.halo_mass_max_msun.is_none());
            }
        }
    }
}
