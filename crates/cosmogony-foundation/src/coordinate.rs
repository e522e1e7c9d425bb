//! Hierarchical coordinate encoding.
//!
//! A parcel's position is expressed at a *bottom* scale: the finest
//! resolution being simulated. The `x` and `y` values pack the cell index at
//! the bottom scale and at every coarser scale into a single integer via
//! repeated div/mod against the width ladder. Scales finer than the bottom
//! are not part of the coordinate at all — they belong to a different
//! simulation context.
//!
//! Example: a coordinate at scale `Mpc1` with `x = 52` encodes `Mpc1: 2`
//! (52 % 10) and `Mpc10: 5` (52 / 10).
//!
//! With twelve scales and widths up to 1000 the packed range needs ~97 bits,
//! so packed values are `u128`. Per-scale components must lie in
//! `[0, width)`; encoding an out-of-range component produces a value that
//! decodes to something else (garbage in, garbage out) rather than a panic —
//! callers validate ranges.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::scale::Scale;

/// Per-scale cell indices along one axis, keyed from the bottom scale upward.
pub type ScalePositions = IndexMap<Scale, u128>;

/// Pack per-scale positions into a single hierarchical value.
///
/// Walks from `bottom` to the coarsest scale, accumulating
/// `position * multiplier` and advancing the multiplier by each scale's
/// width. Missing entries default to 0.
pub fn encode_coordinate(positions: &ScalePositions, bottom: Scale) -> u128 {
    let mut value = 0u128;
    let mut multiplier = 1u128;
    for scale in bottom.and_coarser() {
        let position = positions.get(&scale).copied().unwrap_or(0);
        value += position * multiplier;
        multiplier *= scale.width();
    }
    value
}

/// Unpack a hierarchical value into per-scale positions.
///
/// Inverse of [`encode_coordinate`]: for each scale from `bottom` upward,
/// extracts `(value / multiplier) % width`.
pub fn decode_coordinate(value: u128, bottom: Scale) -> ScalePositions {
    let mut positions = ScalePositions::new();
    let mut multiplier = 1u128;
    for scale in bottom.and_coarser() {
        positions.insert(scale, (value / multiplier) % scale.width());
        multiplier *= scale.width();
    }
    positions
}

/// A position in the parcel hierarchy.
///
/// `scale` is the bottom scale; `x` and `y` are hierarchical integers
/// encoding the position at `scale` and every coarser scale. This is the
/// only serialized external representation of a parcel's location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    /// The finest scale this coordinate resolves.
    pub scale: Scale,
    /// Packed x position.
    pub x: u128,
    /// Packed y position.
    pub y: u128,
}

impl Coordinate {
    pub fn new(scale: Scale, x: u128, y: u128) -> Self {
        Self { scale, x, y }
    }

    /// Build a coordinate from per-scale `(x, y)` cell indices.
    pub fn from_positions(bottom: Scale, positions: &IndexMap<Scale, (u128, u128)>) -> Self {
        let xs = positions.iter().map(|(s, (x, _))| (*s, *x)).collect();
        let ys = positions.iter().map(|(s, (_, y))| (*s, *y)).collect();
        Self {
            scale: bottom,
            x: encode_coordinate(&xs, bottom),
            y: encode_coordinate(&ys, bottom),
        }
    }

    /// Decode both axes into per-scale `(x, y)` pairs, bottom scale first.
    pub fn positions(&self) -> IndexMap<Scale, (u128, u128)> {
        let xs = decode_coordinate(self.x, self.scale);
        let ys = decode_coordinate(self.y, self.scale);
        xs.into_iter()
            .map(|(scale, x)| (scale, (x, ys[&scale])))
            .collect()
    }

    /// The `(x, y)` cell index at one scale, or `None` for scales finer
    /// than the bottom.
    pub fn position_at(&self, scale: Scale) -> Option<(u128, u128)> {
        if scale < self.scale {
            return None;
        }
        self.positions().get(&scale).copied()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{},{}", self.scale, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_walks_the_width_ladder() {
        // kpc100 has width 10, so Mpc1 contributes at multiplier 10.
        let mut positions = ScalePositions::new();
        positions.insert(Scale::Kiloparsec100, 3);
        positions.insert(Scale::Megaparsec, 2);
        assert_eq!(encode_coordinate(&positions, Scale::Kiloparsec100), 23);

        let decoded = decode_coordinate(23, Scale::Kiloparsec100);
        assert_eq!(decoded[&Scale::Kiloparsec100], 3);
        assert_eq!(decoded[&Scale::Megaparsec], 2);
        assert_eq!(decoded[&Scale::Megaparsec10], 0);
    }

    #[test]
    fn missing_positions_default_to_zero() {
        let positions = ScalePositions::new();
        assert_eq!(encode_coordinate(&positions, Scale::Parsec), 0);
    }

    #[test]
    fn round_trip_at_every_bottom_scale() {
        // Deterministic pseudo-positions: keep each component within its width.
        for bottom in Scale::ALL {
            let mut positions = ScalePositions::new();
            for (i, scale) in bottom.and_coarser().enumerate() {
                positions.insert(scale, (i as u128 * 7 + 3) % scale.width());
            }
            let encoded = encode_coordinate(&positions, bottom);
            let decoded = decode_coordinate(encoded, bottom);
            for (scale, position) in &positions {
                assert_eq!(
                    decoded[scale], *position,
                    "round trip failed at {scale} from bottom {bottom}"
                );
            }
        }
    }

    #[test]
    fn round_trip_with_maximal_components() {
        for bottom in [Scale::Attoparsec, Scale::Parsec, Scale::Megaparsec10] {
            let mut positions = ScalePositions::new();
            for scale in bottom.and_coarser() {
                positions.insert(scale, scale.width() - 1);
            }
            let decoded = decode_coordinate(encode_coordinate(&positions, bottom), bottom);
            assert_eq!(decoded, positions);
        }
    }

    #[test]
    fn coordinate_positions_pair_both_axes() {
        let coordinate = Coordinate::new(Scale::Megaparsec, 52, 37);
        let positions = coordinate.positions();
        assert_eq!(positions[&Scale::Megaparsec], (2, 7));
        assert_eq!(positions[&Scale::Megaparsec10], (5, 3));

        let rebuilt = Coordinate::from_positions(Scale::Megaparsec, &positions);
        assert_eq!(rebuilt, coordinate);
    }

    #[test]
    fn position_at_rejects_finer_scales() {
        let coordinate = Coordinate::new(Scale::Kiloparsec100, 0, 0);
        assert_eq!(coordinate.position_at(Scale::Parsec), None);
        assert!(coordinate.position_at(Scale::Megaparsec10).is_some());
    }

    #[test]
    fn display_is_scale_prefixed() {
        let coordinate = Coordinate::new(Scale::Kiloparsec100, 52, 37);
        assert_eq!(coordinate.to_string(), "kpc100:52,37");
    }
}
