//! Web-scale fates (`Mpc10` scale).
//!
//! Large-scale, unbound regimes of the cosmic web. Web fates are not bound
//! objects — they are infrastructure: long-lived structures that transport
//! matter and set boundary conditions for smaller-scale formation.
//!
//! By dimensionality: voids (3D underdense regions), sheets (2D walls
//! between voids), filaments (1D transport corridors), nodes (0D filament
//! intersections where clusters form).
//!
//! Web fates evolve slowly and are mostly unlocked. The one true
//! irreversibility is capture into a bound halo: an [`WebFate::InfallRegion`]
//! is permanently dominated by the groups and clusters swallowing it.

use crate::halo::HaloFate;
use crate::BaryonPhase;

/// A regime of the cosmic web at the 10 Mpc scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WebFate {
    /// Vast underdense region; structure formation suppressed.
    Void,
    /// Weak overdense wall between voids.
    Sheet,
    /// Matter transport corridor connecting nodes.
    Filament,
    /// Filament intersection; cluster formation site.
    Node,
    /// Terminal: matter captured into bound halos.
    InfallRegion,
}

/// Why a web-scale parcel can no longer change regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WebLock {
    /// Matter entered a bound group/cluster halo.
    HaloCapture,
}

impl WebFate {
    pub const ALL: [WebFate; 5] = [
        WebFate::Void,
        WebFate::Sheet,
        WebFate::Filament,
        WebFate::Node,
        WebFate::InfallRegion,
    ];

    /// Canonical camelCase key, globally unique across every scale's table.
    pub const fn key(self) -> &'static str {
        match self {
            WebFate::Void => "void",
            WebFate::Sheet => "sheet",
            WebFate::Filament => "filament",
            WebFate::Node => "node",
            WebFate::InfallRegion => "infallRegion",
        }
    }
}

impl WebLock {
    pub const fn key(self) -> &'static str {
        match self {
            WebLock::HaloCapture => "haloCapture",
        }
    }
}

/// Characteristics of one web-scale fate.
#[derive(Debug, Clone, Copy)]
pub struct WebFateInfo {
    /// Typical density relative to the cosmic mean.
    pub typical_density_contrast: f64,
    pub dominant_baryon_phase: BaryonPhase,
    pub gravitationally_bound: bool,
    pub locked_by: Option<WebLock>,
    /// Characteristic structure size in Mpc.
    pub typical_scale_mpc: f64,
    /// Same-scale successors; empty once locked.
    pub allowed_transitions: &'static [WebFate],
    /// Prior over halo-scale child fates.
    pub child_fate_weights: &'static [(HaloFate, f64)],
}

/// The canonical web-scale table.
pub const WEB_SCALE_FATES: &[(WebFate, WebFateInfo)] = &[
    (
        WebFate::Void,
        WebFateInfo {
            typical_density_contrast: 0.1,
            dominant_baryon_phase: BaryonPhase::Plasma,
            gravitationally_bound: false,
            locked_by: None,
            typical_scale_mpc: 10.0,
            allowed_transitions: &[WebFate::Sheet],
            child_fate_weights: &[
                (HaloFate::Empty, 0.9),
                (HaloFate::GasRichGroup, 0.1), // rare isolated groups
            ],
        },
    ),
    (
        WebFate::Sheet,
        WebFateInfo {
            typical_density_contrast: 0.3,
            dominant_baryon_phase: BaryonPhase::Plasma,
            gravitationally_bound: false,
            locked_by: None,
            typical_scale_mpc: 5.0,
            allowed_transitions: &[WebFate::Filament],
            child_fate_weights: &[
                (HaloFate::Empty, 0.6),
                (HaloFate::GasRichGroup, 0.35), // early groups forming in walls
                (HaloFate::GasPoorGroup, 0.05),
            ],
        },
    ),
    (
        WebFate::Filament,
        WebFateInfo {
            typical_density_contrast: 3.0,
            dominant_baryon_phase: BaryonPhase::Plasma,
            gravitationally_bound: false,
            locked_by: None,
            typical_scale_mpc: 2.0,
            allowed_transitions: &[WebFate::Node, WebFate::InfallRegion],
            child_fate_weights: &[
                (HaloFate::GasRichGroup, 0.45), // most filament halos are gas-rich groups
                (HaloFate::GasPoorGroup, 0.15),
                (HaloFate::Empty, 0.15),
                (HaloFate::CoolCoreCluster, 0.1),
                (HaloFate::NonCoolCoreCluster, 0.1),
                (HaloFate::FossilGroup, 0.05),
            ],
        },
    ),
    (
        WebFate::Node,
        WebFateInfo {
            typical_density_contrast: 30.0,
            dominant_baryon_phase: BaryonPhase::Plasma,
            gravitationally_bound: false,
            locked_by: None,
            typical_scale_mpc: 1.0,
            allowed_transitions: &[WebFate::InfallRegion],
            child_fate_weights: &[
                (HaloFate::CoolCoreCluster, 0.35), // nodes are cluster formation sites
                (HaloFate::NonCoolCoreCluster, 0.25),
                (HaloFate::GasRichGroup, 0.15),
                (HaloFate::GasPoorGroup, 0.15),
                (HaloFate::FossilCluster, 0.05),
                (HaloFate::FossilGroup, 0.05),
            ],
        },
    ),
    (
        WebFate::InfallRegion,
        WebFateInfo {
            typical_density_contrast: 50.0,
            dominant_baryon_phase: BaryonPhase::Plasma,
            gravitationally_bound: false,
            locked_by: Some(WebLock::HaloCapture),
            typical_scale_mpc: 1.0,
            allowed_transitions: &[],
            child_fate_weights: &[
                (HaloFate::NonCoolCoreCluster, 0.35), // merger-heated clusters dominate
                (HaloFate::CoolCoreCluster, 0.25),
                (HaloFate::GasPoorGroup, 0.15), // stripped infalling groups
                (HaloFate::FossilCluster, 0.1),
                (HaloFate::FossilGroup, 0.1),
                (HaloFate::GasRichGroup, 0.05), // rare recent infall
            ],
        },
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infall_region_is_the_only_terminal_web_state() {
        for (fate, info) in WEB_SCALE_FATES {
            match fate {
                WebFate::InfallRegion => {
                    assert!(info.locked_by.is_some());
                    assert!(info.allowed_transitions.is_empty());
                }
                _ => assert!(info.locked_by.is_none()),
            }
        }
    }

    #[test]
    fn denser_fates_sit_at_smaller_scales() {
        // The web's density/scale relation: voids are big and empty, nodes
        // small and dense.
        let (_, void_info) = WEB_SCALE_FATES[0];
        let (_, node_info) = WEB_SCALE_FATES[3];
        assert!(void_info.typical_density_contrast < node_info.typical_density_contrast);
        assert!(void_info.typical_scale_mpc > node_info.typical_scale_mpc);
    }
}
