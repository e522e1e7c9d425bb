//! Damped-oscillator splines over cosmic time.
//!
//! An observation sees a quantity at one instant; the spline extends that
//! single point across all of cosmic time as
//!
//! `y(t) = equilibrium + amplitude · exp(-damping · t) · cos(frequency · t + phase)`
//!
//! which lets a stored observation answer "what did this point look like at
//! time t" and lets constraints propagate between observations made at
//! different epochs.

use serde::{Deserialize, Serialize};

/// A damped oscillator as a closed-form function of cosmic time (Gyr since
/// the Big Bang).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSpline {
    /// The quantity being tracked (e.g. `"densityContrast"`).
    pub quantity: String,
    /// Asymptotic value as `t → ∞`.
    pub equilibrium: f64,
    /// Initial oscillation amplitude.
    pub amplitude: f64,
    /// Oscillation frequency in radians per Gyr.
    pub frequency_per_gyr: f64,
    /// Decay rate per Gyr.
    pub damping_per_gyr: f64,
    /// Phase offset in radians.
    pub phase: f64,
}

impl TimeSpline {
    /// Evaluate the spline at a cosmic time.
    pub fn evaluate(&self, t_gyr: f64) -> f64 {
        self.equilibrium
            + self.amplitude
                * (-self.damping_per_gyr * t_gyr).exp()
                * (self.frequency_per_gyr * t_gyr + self.phase).cos()
    }

    /// Fit a growth spline to a single observed value.
    ///
    /// The early universe was homogeneous, so the curve starts near zero
    /// (`amplitude = -observed`), settles toward the observed value
    /// (`equilibrium = observed`), and the damping is chosen so it is ~95%
    /// settled by the observation time (`damping = 3 / t_obs`, since
    /// `e^-3 ≈ 0.05`). No oscillation — a proper fit would need multiple
    /// observations.
    ///
    /// Requires `t_obs_gyr > 0`; callers validate.
    pub fn fit_to_observation(quantity: &str, observed_value: f64, t_obs_gyr: f64) -> Self {
        Self {
            quantity: quantity.to_string(),
            equilibrium: observed_value,
            amplitude: -observed_value,
            frequency_per_gyr: 0.0,
            damping_per_gyr: 3.0 / t_obs_gyr,
            phase: 0.0,
        }
    }
}
