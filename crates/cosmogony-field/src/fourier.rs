//! Sparse 3D Fourier density field.
//!
//! The density is a truncated Fourier sum: a small set of global modes
//! (DC + a handful of low frequencies to start) rather than a full
//! transform. Each mode influences the whole volume, boundary conditions
//! are naturally periodic, and the gradient and Hessian are exact.
//!
//! Modes are added incrementally: the default field carries the
//! low-frequency prior, and each observation can inject or amplify a mode
//! to fit the data. Mode counts stay small (tens) unless a region is
//! heavily observed.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use cosmogony_foundation::rng::seeded_unit_indexed;

use crate::{Bounds3, DensityField3, Hessian3};

/// A single 3D Fourier mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FourierMode {
    /// Integer frequency along x (can be negative).
    pub kx: i32,
    pub ky: i32,
    pub kz: i32,
    pub amplitude: f64,
    /// Phase offset in radians.
    pub phase: f64,
}

/// A density field defined by a sparse set of global Fourier modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseFourierField {
    pub modes: Vec<FourierMode>,
    pub bounds: Bounds3,
    /// Period used to normalize positions into phase space.
    pub period: f64,
}

impl SparseFourierField {
    /// The low-frequency prior: DC plus up to six axis/diagonal modes with
    /// seeded amplitudes and phases, near-zero amplitudes filtered out.
    ///
    /// This is the field before any observation has been folded in.
    pub fn generate_default(seed: f64, grid_size: f64) -> Self {
        let mut modes = vec![FourierMode {
            kx: 0,
            ky: 0,
            kz: 0,
            amplitude: 0.0,
            phase: 0.0,
        }];

        // The k = 1 modes carry the large-scale void/overdense structure.
        const LOW_FREQUENCIES: [(i32, i32, i32); 6] = [
            (1, 0, 0),
            (0, 1, 0),
            (0, 0, 1),
            (1, 1, 0),
            (1, 0, 1),
            (0, 1, 1),
        ];

        for (i, (kx, ky, kz)) in LOW_FREQUENCIES.into_iter().enumerate() {
            // Bias toward positive amplitudes so structure dominates noise.
            let amplitude = 2.0 * (seeded_unit_indexed(seed, i as f64) - 0.3);
            let phase = seeded_unit_indexed(seed, (i + 100) as f64) * TAU;
            if amplitude.abs() > 0.3 {
                modes.push(FourierMode {
                    kx,
                    ky,
                    kz,
                    amplitude,
                    phase,
                });
            }
        }

        Self {
            modes,
            bounds: Bounds3::cube(grid_size),
            period: grid_size,
        }
    }

    /// Inject a mode, accumulating amplitude if the exact frequency already
    /// exists.
    ///
    /// Phase adjustment of an existing mode would need complex arithmetic;
    /// the amplitude sum is the accepted approximation.
    pub fn add_mode(&mut self, kx: i32, ky: i32, kz: i32, amplitude: f64, phase: f64) {
        if let Some(existing) = self
            .modes
            .iter_mut()
            .find(|mode| mode.kx == kx && mode.ky == ky && mode.kz == kz)
        {
            existing.amplitude += amplitude;
        } else {
            self.modes.push(FourierMode {
                kx,
                ky,
                kz,
                amplitude,
                phase,
            });
        }
    }

    pub fn mode_count(&self) -> usize {
        self.modes.len()
    }

    /// Position normalized to `[0, period]` per axis.
    fn normalized(&self, x: f64, y: f64, z: f64) -> [f64; 3] {
        let unit = self.bounds.unit(x, y, z);
        [
            unit[0] * self.period,
            unit[1] * self.period,
            unit[2] * self.period,
        ]
    }

    /// Phase-space scale factor for derivatives along one axis.
    fn axis_scale(&self, axis: usize) -> f64 {
        TAU / self.bounds.extent(axis)
    }
}

impl DensityField3 for SparseFourierField {
    /// `density(x,y,z) = Σ amplitude_k · cos(2π(k·n)/period + phase_k)`
    fn density(&self, x: f64, y: f64, z: f64) -> f64 {
        let [nx, ny, nz] = self.normalized(x, y, z);
        self.modes
            .iter()
            .map(|mode| {
                let phase = TAU * (mode.kx as f64 * nx + mode.ky as f64 * ny + mode.kz as f64 * nz)
                    / self.period
                    + mode.phase;
                mode.amplitude * phase.cos()
            })
            .sum()
    }

    /// Analytic derivative of the Fourier sum.
    fn gradient(&self, x: f64, y: f64, z: f64) -> [f64; 3] {
        let [nx, ny, nz] = self.normalized(x, y, z);
        let (sx, sy, sz) = (self.axis_scale(0), self.axis_scale(1), self.axis_scale(2));

        let mut gradient = [0.0; 3];
        for mode in &self.modes {
            let phase = TAU * (mode.kx as f64 * nx + mode.ky as f64 * ny + mode.kz as f64 * nz)
                / self.period
                + mode.phase;
            let sin_phase = phase.sin();

            gradient[0] -= mode.amplitude * sin_phase * mode.kx as f64 * sx;
            gradient[1] -= mode.amplitude * sin_phase * mode.ky as f64 * sy;
            gradient[2] -= mode.amplitude * sin_phase * mode.kz as f64 * sz;
        }
        gradient
    }

    /// Analytic second derivatives of the Fourier sum.
    fn hessian(&self, x: f64, y: f64, z: f64) -> Hessian3 {
        let [nx, ny, nz] = self.normalized(x, y, z);
        let (sx, sy, sz) = (self.axis_scale(0), self.axis_scale(1), self.axis_scale(2));

        let mut h = Hessian3::default();
        for mode in &self.modes {
            let phase = TAU * (mode.kx as f64 * nx + mode.ky as f64 * ny + mode.kz as f64 * nz)
                / self.period
                + mode.phase;
            let a = mode.amplitude * phase.cos();
            let (kx, ky, kz) = (mode.kx as f64, mode.ky as f64, mode.kz as f64);

            h.dxx -= a * kx * kx * sx * sx;
            h.dyy -= a * ky * ky * sy * sy;
            h.dzz -= a * kz * kz * sz * sz;
            h.dxy -= a * kx * ky * sx * sy;
            h.dxz -= a * kx * kz * sx * sz;
            h.dyz -= a * ky * kz * sy * sz;
        }
        h
    }

    fn bounds(&self) -> Bounds3 {
        self.bounds
    }
}
