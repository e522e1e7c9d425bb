//! Closed-form eigenvalues for symmetric 3x3 matrices.
//!
//! A real symmetric matrix has three real eigenvalues, so the cubic
//! characteristic polynomial solves analytically (Cardano). O(1), no
//! allocation, fully deterministic — which matters because web
//! classification must give the same answer for the same field on every
//! platform.

use crate::Hessian3;

/// Below this the matrix is treated as a scalar multiple of the identity.
const DEGENERACY_THRESHOLD: f64 = 1e-12;

/// Eigenvalues of a symmetric 3x3 Hessian, sorted descending.
///
/// Requires a symmetric input by construction ([`Hessian3`] only stores the
/// six unique components). Numerical degeneracy (all eigenvalues equal, or
/// the Cardano angle drifting past its domain) is resolved in place rather
/// than surfaced: classification must stay total.
pub fn symmetric_eigenvalues(h: &Hessian3) -> [f64; 3] {
    let (a, b, c) = (h.dxx, h.dyy, h.dzz);
    let (d, e, f) = (h.dxy, h.dxz, h.dyz);

    // Mean of the eigenvalues and deviation magnitude.
    let p1 = d * d + e * e + f * f;
    let q = (a + b + c) / 3.0;
    let p2 = (a - q) * (a - q) + (b - q) * (b - q) + (c - q) * (c - q) + 2.0 * p1;
    let p = (p2 / 6.0).sqrt();

    if p < DEGENERACY_THRESHOLD {
        // Scalar multiple of the identity: a triple eigenvalue.
        return [q, q, q];
    }

    // B = (A - qI) / p; det(B)/2 is the Cardano angle argument.
    let b11 = (a - q) / p;
    let b22 = (b - q) / p;
    let b33 = (c - q) / p;
    let b12 = d / p;
    let b13 = e / p;
    let b23 = f / p;

    let det_b = b11 * (b22 * b33 - b23 * b23) - b12 * (b12 * b33 - b23 * b13)
        + b13 * (b12 * b23 - b22 * b13);

    // Floating error can push r marginally outside [-1, 1]; clamp for acos.
    let r = (det_b / 2.0).clamp(-1.0, 1.0);
    let phi = r.acos() / 3.0;

    let lambda1 = q + 2.0 * p * phi.cos();
    let lambda3 = q + 2.0 * p * (phi + 2.0 * std::f64::consts::PI / 3.0).cos();
    let lambda2 = 3.0 * q - lambda1 - lambda3; // trace = sum of eigenvalues

    let mut lambdas = [lambda1, lambda2, lambda3];
    lambdas.sort_by(|x, y| y.partial_cmp(x).unwrap_or(std::cmp::Ordering::Equal));
    lambdas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal(a: f64, b: f64, c: f64) -> Hessian3 {
        Hessian3 {
            dxx: a,
            dyy: b,
            dzz: c,
            ..Default::default()
        }
    }

    #[test]
    fn diagonal_matrices_return_their_entries() {
        let lambdas = symmetric_eigenvalues(&diagonal(3.0, 1.0, 2.0));
        assert!((lambdas[0] - 3.0).abs() < 1e-9);
        assert!((lambdas[1] - 2.0).abs() < 1e-9);
        assert!((lambdas[2] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn identity_multiples_are_degenerate() {
        let lambdas = symmetric_eigenvalues(&diagonal(2.5, 2.5, 2.5));
        for lambda in lambdas {
            assert!((lambda - 2.5).abs() < 1e-9);
        }
    }

    #[test]
    fn off_diagonal_coupling_splits_eigenvalues() {
        // [[2, 1, 0], [1, 2, 0], [0, 0, 3]] has eigenvalues 3, 3, 1.
        let h = Hessian3 {
            dxx: 2.0,
            dyy: 2.0,
            dzz: 3.0,
            dxy: 1.0,
            dxz: 0.0,
            dyz: 0.0,
        };
        let lambdas = symmetric_eigenvalues(&h);
        assert!((lambdas[0] - 3.0).abs() < 1e-9);
        assert!((lambdas[1] - 3.0).abs() < 1e-9);
        assert!((lambdas[2] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn trace_is_preserved() {
        let h = Hessian3 {
            dxx: 1.2,
            dyy: -0.7,
            dzz: 0.4,
            dxy: 0.3,
            dxz: -0.2,
            dyz: 0.1,
        };
        let lambdas = symmetric_eigenvalues(&h);
        let trace = h.dxx + h.dyy + h.dzz;
        assert!((lambdas.iter().sum::<f64>() - trace).abs() < 1e-9);
        // Sorted descending.
        assert!(lambdas[0] >= lambdas[1] && lambdas[1] >= lambdas[2]);
    }
}
