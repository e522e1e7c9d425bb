//! Tile painting — the interface the rendering layer consumes.
//!
//! A tile is one parcel's grid of child cells. Painting produces a fate
//! key per cell, deterministically from the parcel's coordinate:
//!
//! - the 2D path thresholds gradient noise through a parent's child-fate
//!   weights (marginals guaranteed, clustering from noise continuity),
//! - the 3D path builds the tile's default density field and ray-marches
//!   each cell from above (the cosmic-web view).
//!
//! Both key off the same tile seed, `x * 10000 + y`, so repainting a tile
//! always reproduces it.

use indexmap::IndexMap;

use cosmogony_field::noise2d::gradient_noise;
use cosmogony_field::{FieldStrategy, DEFAULT_Z_STEPS};
use cosmogony_foundation::Coordinate;
use cosmogony_taxonomy::{FateKey, FateRegistry, EMPTY_FATE};

use crate::error::Result;
use crate::sampler::Thresholds;

/// Deterministic seed for a tile's noise field.
pub fn tile_seed(coordinate: &Coordinate) -> f64 {
    (coordinate.x * 10000 + coordinate.y) as f64
}

/// Paint an N×N tile from explicit child-fate weights.
///
/// Returns fate keys in row-major order (`cells[y * grid_size + x]`). An
/// empty or zero-mass prior paints the background fate everywhere — an
/// expected terminal case (deep void), not an error.
pub fn paint_tile(
    weights: &IndexMap<FateKey, f64>,
    coordinate: &Coordinate,
    grid_size: u32,
) -> Vec<FateKey> {
    let seed = tile_seed(coordinate);
    let cells = (grid_size * grid_size) as usize;

    let Some(thresholds) = Thresholds::from_weights(weights.iter().map(|(k, w)| (*k, *w))) else {
        return vec![EMPTY_FATE; cells];
    };

    let mut tile = Vec::with_capacity(cells);
    for y in 0..grid_size {
        for x in 0..grid_size {
            let value = gradient_noise(x as f64, y as f64, seed);
            tile.push(thresholds.sample(value));
        }
    }
    tile
}

/// Paint an N×N tile from a parent fate's child weights.
///
/// Fails fast on an unknown parent key; an empty prior degrades to the
/// background fate as in [`paint_tile`].
pub fn paint_tile_for_parent(
    registry: &FateRegistry,
    parent_fate: &str,
    coordinate: &Coordinate,
    grid_size: u32,
) -> Result<Vec<FateKey>> {
    let record = registry.get(parent_fate)?;
    Ok(paint_tile(&record.child_fate_weights, coordinate, grid_size))
}

/// Paint an N×N tile by ray-marching the tile's 3D density field.
///
/// Each cell samples the column above it; the first significant density
/// sample classifies the cell, and all-void columns paint void.
pub fn paint_tile_3d(
    coordinate: &Coordinate,
    grid_size: u32,
    strategy: FieldStrategy,
) -> Vec<FateKey> {
    let field = strategy.default_field(tile_seed(coordinate), grid_size as f64);
    let bounds = field.bounds();

    let mut tile = Vec::with_capacity((grid_size * grid_size) as usize);
    for y in 0..grid_size {
        for x in 0..grid_size {
            let world_x = (x as f64 / grid_size as f64) * bounds.extent(0) + bounds.min[0];
            let world_y = (y as f64 / grid_size as f64) * bounds.extent(1) + bounds.min[1];
            let fate = field.ray_march_from_above(world_x, world_y, DEFAULT_Z_STEPS);
            tile.push(fate.key());
        }
    }
    tile
}
