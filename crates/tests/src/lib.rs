//! Integration test harness for Cosmogony.
//!
//! This crate provides utilities for end-to-end testing of the full
//! observation pipeline: Registry → Search → Observe → Record → Fold.

use cosmogony_engine::search::{
    find_galaxies, observe_galactic_fate, observe_halo_fate, FindGalaxiesArgs, FindGalaxiesResult,
    SearchCoordinates,
};
use cosmogony_engine::{Observation, ObservationStore};
use cosmogony_field::fourier::SparseFourierField;
use cosmogony_field::DensityField3;
use cosmogony_foundation::Coordinate;
use cosmogony_taxonomy::{FateKey, FateRegistry, HaloFate};

/// Edge length of the world-space box a harness universe lives in.
pub const WORLD_SIZE: f64 = 10.0;

/// Cosmic time observations are recorded at, unless a test says otherwise.
pub const PRESENT_DAY_GYR: f64 = 13.8;

/// Test harness holding one universe: a validated fate registry, an
/// observation store, and the seed everything derives from.
pub struct TestHarness {
    registry: FateRegistry,
    store: ObservationStore,
    universe_seed: i64,
}

impl TestHarness {
    /// Create a harness for the universe with the given seed.
    ///
    /// # Panics
    ///
    /// Panics if the built-in fate tables fail validation.
    pub fn new(universe_seed: i64) -> Self {
        let registry = FateRegistry::builtin().expect("built-in fate tables must validate");
        Self {
            registry,
            store: ObservationStore::in_memory(),
            universe_seed,
        }
    }

    /// Search this universe for `limit` galaxies.
    ///
    /// # Panics
    ///
    /// Panics if the search fails (it only can on registry corruption).
    pub fn find_galaxies(&self, limit: usize) -> FindGalaxiesResult {
        find_galaxies(
            &FindGalaxiesArgs {
                limit,
                universe_seed: self.universe_seed,
            },
            &self.registry,
        )
        .expect("search over a validated registry cannot fail")
    }

    /// Observe the halo-scale fate at a set of search coordinates.
    pub fn observe_halo(&self, coords: &SearchCoordinates) -> HaloFate {
        observe_halo_fate(coords, self.universe_seed).expect("harness coordinates are complete")
    }

    /// Observe the galactic-scale fate at a set of search coordinates.
    pub fn observe_galactic(&self, coords: &SearchCoordinates) -> FateKey {
        observe_galactic_fate(coords, self.universe_seed, &self.registry)
            .expect("harness coordinates are complete")
    }

    /// Observe a galaxy's fate and record it in the store at present day.
    ///
    /// The world position is the center of the galaxy's kpc100 cell mapped
    /// into the harness world box; the density contrast is sampled from the
    /// universe's default density field at that position.
    pub fn record_galaxy(&mut self, coords: &SearchCoordinates) -> Observation {
        let coordinate = coords
            .to_coordinate()
            .expect("harness coordinates are complete");
        let fate = self.observe_galactic(coords);

        let (cell_x, cell_y) = coords.kpc100.expect("checked by to_coordinate");
        let world_x = cell_x as f64 + 0.5;
        let world_y = cell_y as f64 + 0.5;
        let world_z = WORLD_SIZE / 2.0;
        let density = self
            .density_field()
            .density(world_x, world_y, world_z);

        self.store
            .record_observation(
                coordinate,
                world_x,
                world_y,
                world_z,
                PRESENT_DAY_GYR,
                fate,
                density,
            )
            .expect("present-day observations always fit a spline")
    }

    /// The universe's default (pre-observation) density field.
    pub fn density_field(&self) -> SparseFourierField {
        SparseFourierField::generate_default(self.universe_seed as f64, WORLD_SIZE)
    }

    /// Fold every stored observation of a parcel into a field.
    pub fn fold_parcel(&self, coordinate: &Coordinate, field: &mut SparseFourierField) {
        self.store.apply_parcel_to_field(coordinate, field);
    }

    pub fn registry(&self) -> &FateRegistry {
        &self.registry
    }

    pub fn store(&self) -> &ObservationStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ObservationStore {
        &mut self.store
    }

    pub fn seed(&self) -> i64 {
        self.universe_seed
    }
}
