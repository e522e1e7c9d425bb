//! Cosmogony Engine
//!
//! The sampling machinery that turns the fate taxonomy and the coherent
//! noise fields into concrete, reproducible universes:
//!
//! - [`sampler`] — converts a parent's weighted child-fate prior into a
//!   deterministic partition of the unit interval and maps noise samples
//!   through it. Marginals are guaranteed; the field decides *where* each
//!   fate appears, not *how many*.
//! - [`spline`] — damped-oscillator time splines fit to point observations,
//!   so a single sample describes a quantity across all of cosmic time.
//! - [`observation`] — the observation store: recording collapses a
//!   parcel's distribution into a concrete fate and density; stored
//!   observations fold back into the density field so later samples stay
//!   consistent with earlier ones.
//! - [`tiles`] — the tile-painting interface exposed to the rendering
//!   collaborator.
//! - [`search`] — top-level hierarchical queries ("find N galaxies").
//!
//! Everything is synchronous and single-threaded; the only shared mutable
//! state is the observation store.

pub mod error;
pub mod observation;
pub mod sampler;
pub mod search;
pub mod spline;
pub mod tiles;

pub use error::{EngineError, Result};
pub use observation::{
    MemoryStore, Observation, ObservationBackend, ObservationId, ObservationStore, ParcelKey,
};
pub use sampler::Thresholds;
pub use search::{find_galaxies, FindGalaxiesArgs, FindGalaxiesResult};
pub use spline::TimeSpline;
