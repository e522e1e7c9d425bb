//! 2D gradient noise.
//!
//! Spatially coherent, deterministic values from coordinates: the same
//! `(x, y, seed)` always produces the same float, nearby coordinates
//! produce smoothly varying floats, and different seeds produce visibly
//! uncorrelated fields (the seed additively offsets the coordinates before
//! hashing).
//!
//! The noise value is later converted to a categorical fate via thresholds
//! derived from a parent's child-fate weights — continuity here is what
//! makes adjacent cells' fates cluster.

use std::f64::consts::PI;

use cosmogony_foundation::rng::hash_grid_corner;

/// Gradient noise at `(x, y)`, nominally in `[0, 1]`.
///
/// Classic two-dimensional value noise: hash each integer grid corner to
/// one of 8 fixed gradient directions, dot with the offset vector,
/// smoothstep-blend bilinearly, remap from `[-1, 1]`.
pub fn gradient_noise(x: f64, y: f64, seed: f64) -> f64 {
    // Different seeds shift the lattice so fields decorrelate.
    let x = x + seed * 17.1;
    let y = y + seed * 31.7;

    let x0 = x.floor();
    let y0 = y.floor();
    let x1 = x0 + 1.0;
    let y1 = y0 + 1.0;

    let sx = smoothstep(x - x0);
    let sy = smoothstep(y - y0);

    let n00 = gradient_dot(x0, y0, x, y);
    let n10 = gradient_dot(x1, y0, x, y);
    let n01 = gradient_dot(x0, y1, x, y);
    let n11 = gradient_dot(x1, y1, x, y);

    let nx0 = lerp(n00, n10, sx);
    let nx1 = lerp(n01, n11, sx);
    let value = lerp(nx0, nx1, sy);

    (value + 1.0) / 2.0
}

fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Gradient at an integer corner dotted with the offset to the sample.
///
/// The corner hash picks one of 8 gradient angles (multiples of 45°).
fn gradient_dot(grid_x: f64, grid_y: f64, x: f64, y: f64) -> f64 {
    let hash = hash_grid_corner(grid_x, grid_y);
    let angle = (hash % 8) as f64 * (PI / 4.0);

    let dx = x - grid_x;
    let dy = y - grid_y;
    dx * angle.cos() + dy * angle.sin()
}
