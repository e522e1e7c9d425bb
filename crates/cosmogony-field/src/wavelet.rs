//! 3D Haar wavelet density field.
//!
//! The local-support alternative to the Fourier field: each wavelet only
//! affects the region around its center, so smooth voids stay cheap while
//! observed regions accumulate detail. Coefficients live at octree-style
//! levels (level 0 covers the whole volume, level 1 covers eighths, and so
//! on), though the field itself is just a flat list of coefficients.
//!
//! Haar basis functions are discontinuous, so derivatives come from
//! central finite differences with a step of 1% of the domain extent.

use serde::{Deserialize, Serialize};

use cosmogony_foundation::rng::seeded_unit_indexed;

use crate::{Bounds3, DensityField3, Hessian3};

/// One of the eight 3D Haar basis functions.
///
/// The scaling function is constant over the support; the seven wavelets
/// are the sign patterns of the octants, orthogonal to it and to each
/// other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HaarBasis {
    /// Constant over the support.
    Scaling,
    /// +x/-x split.
    SplitX,
    /// +y/-y split.
    SplitY,
    /// +z/-z split.
    SplitZ,
    /// xy quadrant pattern.
    QuadrantXy,
    /// xz quadrant pattern.
    QuadrantXz,
    /// yz quadrant pattern.
    QuadrantYz,
    /// Full octant pattern.
    Octant,
}

impl HaarBasis {
    /// Evaluate at a point in local coordinates (`[-1, 1]` per axis,
    /// relative to the wavelet center).
    pub fn evaluate(self, local_x: f64, local_y: f64, local_z: f64) -> f64 {
        let sign = |v: f64| if v >= 0.0 { 1.0 } else { -1.0 };
        match self {
            HaarBasis::Scaling => 1.0,
            HaarBasis::SplitX => sign(local_x),
            HaarBasis::SplitY => sign(local_y),
            HaarBasis::SplitZ => sign(local_z),
            HaarBasis::QuadrantXy => sign(local_x) * sign(local_y),
            HaarBasis::QuadrantXz => sign(local_x) * sign(local_z),
            HaarBasis::QuadrantYz => sign(local_y) * sign(local_z),
            HaarBasis::Octant => sign(local_x) * sign(local_y) * sign(local_z),
        }
    }
}

/// A single wavelet coefficient.
///
/// Center and half-size are in normalized `[0, 1]` coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveletCoefficient {
    pub cx: f64,
    pub cy: f64,
    pub cz: f64,
    /// Half-extent of the support region.
    pub half_size: f64,
    /// Coefficient amplitude.
    pub value: f64,
    pub basis: HaarBasis,
}

/// A density field defined by localized wavelet coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveletField {
    pub coefficients: Vec<WaveletCoefficient>,
    pub bounds: Bounds3,
}

/// Finite-difference step as a fraction of the domain extent.
const DERIVATIVE_STEP_FRACTION: f64 = 0.01;

impl WaveletField {
    /// The low-frequency prior: a DC scaling coefficient plus level-1 axis
    /// splits with seeded amplitudes, small amplitudes filtered out.
    pub fn generate_default(seed: f64, grid_size: f64) -> Self {
        let mut coefficients = vec![WaveletCoefficient {
            cx: 0.5,
            cy: 0.5,
            cz: 0.5,
            half_size: 0.5,
            value: 0.0,
            basis: HaarBasis::Scaling,
        }];

        // Level 1: a 2x2x2 grid of cells, axis splits only. Up to 24
        // wavelets before filtering, typically around half survive.
        let per_side = 2usize;
        let cell_size = 1.0 / per_side as f64;
        let half_size = cell_size / 2.0;
        let base_amplitude = 2.0;

        let mut index = 0usize;
        for ix in 0..per_side {
            for iy in 0..per_side {
                for iz in 0..per_side {
                    let cx = (ix as f64 + 0.5) * cell_size;
                    let cy = (iy as f64 + 0.5) * cell_size;
                    let cz = (iz as f64 + 0.5) * cell_size;

                    for basis in [HaarBasis::SplitX, HaarBasis::SplitY, HaarBasis::SplitZ] {
                        let r = seeded_unit_indexed(seed, index as f64);
                        index += 1;
                        let amplitude = base_amplitude * (r - 0.5) * 2.0;
                        if amplitude.abs() < 0.3 {
                            continue;
                        }
                        coefficients.push(WaveletCoefficient {
                            cx,
                            cy,
                            cz,
                            half_size,
                            value: amplitude,
                            basis,
                        });
                    }
                }
            }
        }

        Self {
            coefficients,
            bounds: Bounds3::cube(grid_size),
        }
    }

    /// Append a local correction at a world position.
    ///
    /// `size` is the edge length of the affected region in world units.
    pub fn add_wavelet(
        &mut self,
        x: f64,
        y: f64,
        z: f64,
        amplitude: f64,
        size: f64,
        basis: HaarBasis,
    ) {
        let [cx, cy, cz] = self.bounds.unit(x, y, z);
        let half_size = size / self.bounds.extent(0) / 2.0;
        self.coefficients.push(WaveletCoefficient {
            cx,
            cy,
            cz,
            half_size,
            value: amplitude,
            basis,
        });
    }

    pub fn coefficient_count(&self) -> usize {
        self.coefficients.len()
    }

    fn step(&self) -> f64 {
        DERIVATIVE_STEP_FRACTION * self.bounds.extent(0)
    }
}

impl DensityField3 for WaveletField {
    /// Sum of every coefficient whose support contains the point.
    fn density(&self, x: f64, y: f64, z: f64) -> f64 {
        let [nx, ny, nz] = self.bounds.unit(x, y, z);

        let mut density = 0.0;
        for coeff in &self.coefficients {
            let dx = nx - coeff.cx;
            let dy = ny - coeff.cy;
            let dz = nz - coeff.cz;
            if dx.abs() <= coeff.half_size
                && dy.abs() <= coeff.half_size
                && dz.abs() <= coeff.half_size
            {
                density += coeff.value
                    * coeff.basis.evaluate(
                        dx / coeff.half_size,
                        dy / coeff.half_size,
                        dz / coeff.half_size,
                    );
            }
        }
        density
    }

    /// Central differences; Haar wavelets have no analytic derivative.
    fn gradient(&self, x: f64, y: f64, z: f64) -> [f64; 3] {
        let eps = self.step();
        [
            (self.density(x + eps, y, z) - self.density(x - eps, y, z)) / (2.0 * eps),
            (self.density(x, y + eps, z) - self.density(x, y - eps, z)) / (2.0 * eps),
            (self.density(x, y, z + eps) - self.density(x, y, z - eps)) / (2.0 * eps),
        ]
    }

    fn hessian(&self, x: f64, y: f64, z: f64) -> Hessian3 {
        let eps = self.step();
        let center = self.density(x, y, z);

        let dxx = (self.density(x + eps, y, z) - 2.0 * center + self.density(x - eps, y, z))
            / (eps * eps);
        let dyy = (self.density(x, y + eps, z) - 2.0 * center + self.density(x, y - eps, z))
            / (eps * eps);
        let dzz = (self.density(x, y, z + eps) - 2.0 * center + self.density(x, y, z - eps))
            / (eps * eps);

        let dxy = (self.density(x + eps, y + eps, z) - self.density(x + eps, y - eps, z)
            - self.density(x - eps, y + eps, z)
            + self.density(x - eps, y - eps, z))
            / (4.0 * eps * eps);
        let dxz = (self.density(x + eps, y, z + eps) - self.density(x + eps, y, z - eps)
            - self.density(x - eps, y, z + eps)
            + self.density(x - eps, y, z - eps))
            / (4.0 * eps * eps);
        let dyz = (self.density(x, y + eps, z + eps) - self.density(x, y + eps, z - eps)
            - self.density(x, y - eps, z + eps)
            + self.density(x, y - eps, z - eps))
            / (4.0 * eps * eps);

        Hessian3 {
            dxx,
            dyy,
            dzz,
            dxy,
            dxz,
            dyz,
        }
    }

    fn bounds(&self) -> Bounds3 {
        self.bounds
    }
}
