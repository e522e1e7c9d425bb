//! Cosmogony Field
//!
//! Deterministic, spatially-continuous scalar fields used to correlate
//! nearby samples' categorical outcomes. Three implementations:
//!
//! - [`noise2d`] — classic 2D gradient noise, the workhorse behind
//!   threshold sampling of child fates within a tile,
//! - [`fourier`] — a sparse 3D Fourier density field (few global modes,
//!   analytic derivatives) used for cosmic-web classification and for
//!   folding observations back into a field,
//! - [`wavelet`] — a 3D Haar wavelet density field (local support,
//!   finite-difference derivatives), the configuration-selected alternate.
//!
//! The two 3D strategies are interchangeable behind [`DensityField3`];
//! callers pick one via [`FieldStrategy`] and stay agnostic after that.
//! Everything is a pure function of seed and coordinates — the same inputs
//! produce the same field on every platform.

pub mod eigen;
pub mod fourier;
pub mod noise2d;
pub mod tweb;
pub mod wavelet;

use serde::{Deserialize, Serialize};

use cosmogony_taxonomy::WebFate;

/// Axis-aligned bounding box of a 3D field, in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds3 {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Bounds3 {
    /// A cube spanning `[0, size]` on every axis.
    pub fn cube(size: f64) -> Self {
        Self {
            min: [0.0; 3],
            max: [size; 3],
        }
    }

    /// Extent along one axis.
    pub fn extent(&self, axis: usize) -> f64 {
        self.max[axis] - self.min[axis]
    }

    /// Normalize a world position to `[0, 1]` per axis.
    pub fn unit(&self, x: f64, y: f64, z: f64) -> [f64; 3] {
        [
            (x - self.min[0]) / self.extent(0),
            (y - self.min[1]) / self.extent(1),
            (z - self.min[2]) / self.extent(2),
        ]
    }
}

/// The six unique components of a symmetric 3x3 Hessian.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hessian3 {
    pub dxx: f64,
    pub dyy: f64,
    pub dzz: f64,
    pub dxy: f64,
    pub dxz: f64,
    pub dyz: f64,
}

/// A deterministic 3D density field with derivatives and web classification.
///
/// `classify` and `ray_march_from_above` are total: numerical degeneracy
/// resolves to a default class rather than failing.
pub trait DensityField3 {
    /// Density at a world position.
    fn density(&self, x: f64, y: f64, z: f64) -> f64;

    /// Spatial gradient `[d/dx, d/dy, d/dz]` at a world position.
    fn gradient(&self, x: f64, y: f64, z: f64) -> [f64; 3];

    /// Hessian at a world position.
    fn hessian(&self, x: f64, y: f64, z: f64) -> Hessian3;

    /// The field's bounding box.
    fn bounds(&self) -> Bounds3;

    /// T-web classification of a point from the local Hessian.
    fn classify(&self, x: f64, y: f64, z: f64) -> WebFate {
        let lambdas = eigen::symmetric_eigenvalues(&self.hessian(x, y, z));
        tweb::classify_eigenvalues(lambdas)
    }

    /// March downward from the top of the box and classify the first sample
    /// whose |density| is significant; all-void columns report void.
    fn ray_march_from_above(&self, x: f64, y: f64, z_steps: u32) -> WebFate {
        let bounds = self.bounds();
        let z_min = bounds.min[2];
        let z_max = bounds.max[2];
        let z_step = (z_max - z_min) / z_steps as f64;

        let mut z = z_max;
        while z >= z_min {
            let density = self.density(x, y, z);
            if density.abs() > SIGNIFICANT_DENSITY {
                let fate = self.classify(x, y, z);
                if fate != WebFate::Void {
                    return fate;
                }
            }
            z -= z_step;
        }
        WebFate::Void
    }
}

/// |density| above this is worth classifying during a ray march.
pub const SIGNIFICANT_DENSITY: f64 = 0.5;

/// Default number of z samples for a ray march.
pub const DEFAULT_Z_STEPS: u32 = 50;

/// Which 3D field implementation to use.
///
/// Both satisfy [`DensityField3`]; the sparse Fourier field is the default
/// because observation folding injects global modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldStrategy {
    #[default]
    SparseFourier,
    HaarWavelet,
}

impl FieldStrategy {
    /// Build the low-frequency prior field for this strategy — the
    /// "before any observation" state.
    pub fn default_field(self, seed: f64, grid_size: f64) -> Box<dyn DensityField3> {
        match self {
            FieldStrategy::SparseFourier => {
                Box::new(fourier::SparseFourierField::generate_default(seed, grid_size))
            }
            FieldStrategy::HaarWavelet => {
                Box::new(wavelet::WaveletField::generate_default(seed, grid_size))
            }
        }
    }
}
