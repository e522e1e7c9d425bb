//! Engine errors.
//!
//! Data-integrity failures (bad fate keys, missing ancestor coordinates,
//! unusable observation times) surface to the caller — they are caller
//! bugs, not conditions to recover from. Numerical edge cases (degenerate
//! Hessians, empty priors) never reach this module; they resolve to
//! documented defaults where they occur.

use thiserror::Error;

use cosmogony_foundation::Scale;
use cosmogony_taxonomy::TaxonomyError;

/// Engine result type alias.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised by the sampling and observation machinery.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    /// A child fate was sampled without the ancestor coordinate components
    /// the sample is conditioned on.
    ///
    /// Observing a halo fate needs both its own and its parent's position;
    /// guessing zero would silently sample the wrong tile.
    #[error("missing {scale} coordinate required for this observation")]
    MissingCoordinate {
        /// The scale whose position was absent.
        scale: Scale,
    },

    /// A fate lookup failed; see [`TaxonomyError`].
    #[error(transparent)]
    Taxonomy(#[from] TaxonomyError),

    /// An observation was recorded at a cosmic time a spline cannot be fit
    /// to (the damped-growth fit needs `time_gyr > 0`).
    #[error("cannot fit a time spline at time {time_gyr} Gyr")]
    InvalidObservationTime { time_gyr: f64 },
}
