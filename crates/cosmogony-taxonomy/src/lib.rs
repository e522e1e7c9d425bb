//! Cosmogony Taxonomy
//!
//! The fate data model: one finite state machine per spatial scale, plus the
//! validated registry that ties them together.
//!
//! # Fates
//!
//! A *fate* is the qualitative physical regime a parcel of matter occupies
//! at a given scale — a destination, not a lifecycle stage. Each per-scale
//! table defines:
//!
//! - the fates themselves, with order-of-magnitude physical attributes
//!   (mass, size, timescale) that bound applicability but are not enforced
//!   at the type level,
//! - a *lock*: the physical cause, if any, that makes the fate irreversible
//!   (fusion ignition, event horizon formation, dynamical exhaustion). A
//!   locked fate permits no same-scale transitions,
//! - `allowed_transitions`: the same-scale successor fates, caused by
//!   external events rather than internal evolution,
//! - `child_fate_weights`: the prior distribution over the next-finer
//!   scale's fates. Weights are relative and normalized at use time; an
//!   omitted key means weight zero.
//!
//! Child weights are a property of the *parent's* physics: a fossil group
//! paints mostly elliptical galaxies, a spiral galaxy paints GMCs and open
//! clusters. They are priors, not permissions — rare configurations remain
//! possible.
//!
//! # Scale chaining
//!
//! Each table's child-weight keys are typed as the next-finer scale's key
//! enum, so referential integrity across tables is checked by the compiler.
//! The [`registry::FateRegistry`] re-checks everything at construction time
//! (key uniqueness, the lock invariant, weight sanity) and is the only
//! lookup surface the rest of the system uses — there is no module-level
//! singleton to poison between tests or between universes.
//!
//! The ladder, coarsest to finest:
//!
//! | Scale    | Table                          |
//! |----------|--------------------------------|
//! | `Mpc100` | [`cooling::COOLING_REGIMES`]   |
//! | `Mpc10`  | [`web::WEB_SCALE_FATES`]       |
//! | `Mpc1`   | [`halo::HALO_SCALE_FATES`]     |
//! | `kpc100` | [`galactic::GALACTIC_SCALE_FATES`] |
//! | `pc100`  | [`interstellar::INTERSTELLAR_SCALE_FATES`] |
//! | `pc1`    | [`stellar::STELLAR_SCALE_FATES`] (leaf) |

pub mod cooling;
pub mod galactic;
pub mod halo;
pub mod interstellar;
pub mod palette;
pub mod registry;
pub mod stellar;
pub mod web;

pub use cooling::CoolingRegime;
pub use galactic::GalacticFate;
pub use halo::HaloFate;
pub use interstellar::InterstellarFate;
pub use registry::{FateKey, FateRecord, FateRegistry, Result, TaxonomyError};
pub use stellar::StellarFate;
pub use web::WebFate;

/// The background fate key painted where no structure exists.
///
/// Not an error state: an empty prior (deep void, unpainted cell) degrades
/// to this rather than failing.
pub const EMPTY_FATE: FateKey = "empty";

/// Which baryonic component dominates a bound structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BaryonPhase {
    /// Hot diffuse plasma (ICM, unbound web).
    Plasma,
    /// Comparable stellar and gaseous mass.
    Mixed,
    /// Stars dominate; gas is depleted.
    Stellar,
}

/// Dominant stellar population age of a galaxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StellarPopulation {
    Young,
    Mixed,
    Old,
}
