//! The spatial scale ladder.
//!
//! The universe is modeled as a hierarchy of parcels at twelve resolution
//! scales, from ~1 attoparsec cells (individual objects) up to 100 Mpc cells
//! (early-universe thermal regimes). Each scale has an integer *width*: how
//! many cells of this scale fit along one axis of a cell of the next-coarser
//! scale. Widths are capped at 1000 so the chained products stay within the
//! packed-coordinate range (see [`crate::coordinate`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One resolution level of the parcel hierarchy.
///
/// Ordered from finest to coarsest; `Ord` follows that ordering, so
/// `Scale::Parsec < Scale::Megaparsec10`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Scale {
    /// ~1 attoparsec grid: individual objects, trees, rocks, organisms.
    #[serde(rename = "apc1")]
    Attoparsec,
    /// ~1 femtoparsec grid: landscape features, forests, caves.
    #[serde(rename = "fpc1")]
    Femtoparsec,
    /// ~1 picoparsec grid: continental features, mantle plumes, plutons.
    #[serde(rename = "ppc1")]
    Picoparsec,
    /// ~1 nanoparsec grid: individual planets, large moons.
    #[serde(rename = "npc1")]
    Nanoparsec,
    /// ~1 microparsec grid: inner planetary systems, planets with moons.
    #[serde(rename = "upc1")]
    Microparsec,
    /// ~1 milliparsec grid: outer planetary systems, Oort clouds.
    #[serde(rename = "mpc1")]
    Milliparsec,
    /// ~1 pc grid: stellar systems and remnants.
    #[serde(rename = "pc1")]
    Parsec,
    /// ~100 pc grid: interstellar neighborhoods (GMCs, clusters, bubbles).
    #[serde(rename = "pc100")]
    Parsec100,
    /// 100x100 kpc grid: galaxies.
    #[serde(rename = "kpc100")]
    Kiloparsec100,
    /// 1x1 Mpc grid: dark matter halos (groups and clusters).
    #[serde(rename = "Mpc1")]
    Megaparsec,
    /// 10x10 Mpc grid: cosmic web geometry.
    #[serde(rename = "Mpc10")]
    Megaparsec10,
    /// 100 Mpc grid: early-universe thermal regimes.
    #[serde(rename = "Mpc100")]
    Megaparsec100,
}

/// A scale name that is not part of the ladder.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown scale: {0}")]
pub struct UnknownScale(pub String);

impl Scale {
    /// Every scale, ordered finest to coarsest.
    pub const ALL: [Scale; 12] = [
        Scale::Attoparsec,
        Scale::Femtoparsec,
        Scale::Picoparsec,
        Scale::Nanoparsec,
        Scale::Microparsec,
        Scale::Milliparsec,
        Scale::Parsec,
        Scale::Parsec100,
        Scale::Kiloparsec100,
        Scale::Megaparsec,
        Scale::Megaparsec10,
        Scale::Megaparsec100,
    ];

    /// Canonical short name, as used in serialized coordinates and fate data.
    pub const fn name(self) -> &'static str {
        match self {
            Scale::Attoparsec => "apc1",
            Scale::Femtoparsec => "fpc1",
            Scale::Picoparsec => "ppc1",
            Scale::Nanoparsec => "npc1",
            Scale::Microparsec => "upc1",
            Scale::Milliparsec => "mpc1",
            Scale::Parsec => "pc1",
            Scale::Parsec100 => "pc100",
            Scale::Kiloparsec100 => "kpc100",
            Scale::Megaparsec => "Mpc1",
            Scale::Megaparsec10 => "Mpc10",
            Scale::Megaparsec100 => "Mpc100",
        }
    }

    /// How many cells of this scale fit along one axis of a cell of the
    /// next-coarser scale. Always <= 1000.
    pub const fn width(self) -> u128 {
        match self {
            Scale::Attoparsec => 1000,
            Scale::Femtoparsec => 1000,
            Scale::Picoparsec => 1000,
            Scale::Nanoparsec => 1000,
            Scale::Microparsec => 1000,
            Scale::Milliparsec => 1000,
            Scale::Parsec => 100,
            Scale::Parsec100 => 1000,
            Scale::Kiloparsec100 => 10,
            Scale::Megaparsec => 10,
            Scale::Megaparsec10 => 10,
            // 1000x1000 grid covers 100,000 Mpc, well beyond the observable
            // universe.
            Scale::Megaparsec100 => 1000,
        }
    }

    /// Position of this scale in [`Scale::ALL`] (0 = finest).
    pub fn index(self) -> usize {
        Scale::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// The next-finer scale, if any.
    pub fn finer(self) -> Option<Scale> {
        self.index().checked_sub(1).map(|i| Scale::ALL[i])
    }

    /// The next-coarser scale, if any.
    pub fn coarser(self) -> Option<Scale> {
        Scale::ALL.get(self.index() + 1).copied()
    }

    /// Iterate this scale and every coarser one, in ladder order.
    pub fn and_coarser(self) -> impl Iterator<Item = Scale> {
        Scale::ALL.into_iter().skip(self.index())
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scale {
    type Err = UnknownScale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scale::ALL
            .into_iter()
            .find(|scale| scale.name() == s)
            .ok_or_else(|| UnknownScale(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_is_totally_ordered() {
        for pair in Scale::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn widths_stay_within_bound() {
        for scale in Scale::ALL {
            assert!(scale.width() <= 1000, "{scale} exceeds the width cap");
            assert!(scale.width() >= 2);
        }
    }

    #[test]
    fn finer_and_coarser_are_inverses() {
        for scale in Scale::ALL {
            if let Some(coarser) = scale.coarser() {
                assert_eq!(coarser.finer(), Some(scale));
            }
        }
        assert_eq!(Scale::Attoparsec.finer(), None);
        assert_eq!(Scale::Megaparsec100.coarser(), None);
    }

    #[test]
    fn names_round_trip() {
        for scale in Scale::ALL {
            assert_eq!(scale.name().parse::<Scale>(), Ok(scale));
        }
        assert!("Mpc1000".parse::<Scale>().is_err());
    }

    #[test]
    fn serde_uses_canonical_names() {
        let json = serde_json::to_string(&Scale::Kiloparsec100).unwrap();
        assert_eq!(json, "\"kpc100\"");
        let back: Scale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Scale::Kiloparsec100);
    }
}
