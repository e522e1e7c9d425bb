//! Cosmogony Foundation
//!
//! Core primitives shared by every Cosmogony crate: the scale ladder,
//! hierarchical coordinate encoding, and deterministic seeded hashing.
//! Everything here is a pure function of explicit inputs — the whole model
//! rests on the guarantee that the same seed and coordinate always describe
//! the same universe.

pub mod coordinate;
pub mod rng;
pub mod scale;

pub use coordinate::{decode_coordinate, encode_coordinate, Coordinate, ScalePositions};
pub use scale::{Scale, UnknownScale};
