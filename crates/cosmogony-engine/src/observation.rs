//! The observation system.
//!
//! Observations bridge the ground-truth sampling (which decides what is at
//! a specific point) and the fast field projection (which interpolates
//! between observed points). Recording an observation collapses a parcel's
//! probability distribution into a concrete fate and density at a specific
//! cosmic time, fits a [`TimeSpline`] so the point has a history, and
//! persists the result for the lifetime of the process.
//!
//! Storage sits behind [`ObservationBackend`] so a durable store can be
//! substituted without touching the sampling logic; the in-memory
//! [`MemoryStore`] indexes observations by parcel, so parcel queries do
//! not scan the whole store.
//!
//! # Revision on paradox
//!
//! Re-recording an id with a *different* fate or density is a paradox.
//! Policy: most-recent-wins with an audit trail — the new record replaces
//! the old, and the displaced observation is appended to a revision log
//! queryable per id. Detection is exact-id only; cross-scale
//! ancestor/descendant conflict detection would hook in at the same place
//! once bottom-up constraint propagation exists.
//!
//! # Concurrency
//!
//! Single-threaded by design. There is deliberately no transaction around
//! "read parent fate, decide child fate, write child observation"; a
//! concurrent implementation would need a mutual-exclusion discipline
//! around the store.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use cosmogony_field::fourier::SparseFourierField;
use cosmogony_foundation::Coordinate;
use cosmogony_taxonomy::FateKey;

use crate::error::{EngineError, Result};
use crate::spline::TimeSpline;

/// The parcel a set of observations belongs to: a coordinate flattened
/// into an orderable key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ParcelKey {
    pub scale: cosmogony_foundation::Scale,
    pub x: u128,
    pub y: u128,
}

impl From<&Coordinate> for ParcelKey {
    fn from(coordinate: &Coordinate) -> Self {
        Self {
            scale: coordinate.scale,
            x: coordinate.x,
            y: coordinate.y,
        }
    }
}

impl fmt::Display for ParcelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{},{}", self.scale, self.x, self.y)
    }
}

/// Composite observation identity: parcel plus world position rounded to
/// two decimals.
///
/// Two samples of the same parcel at (effectively) the same point are the
/// same observation — that is what makes paradoxes detectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ObservationId {
    pub parcel: ParcelKey,
    /// World position in hundredths of a unit.
    pub wx_centi: i64,
    pub wy_centi: i64,
    pub wz_centi: i64,
}

impl ObservationId {
    pub fn new(coordinate: &Coordinate, world_x: f64, world_y: f64, world_z: f64) -> Self {
        let centi = |v: f64| (v * 100.0).round() as i64;
        Self {
            parcel: ParcelKey::from(coordinate),
            wx_centi: centi(world_x),
            wy_centi: centi(world_y),
            wz_centi: centi(world_z),
        }
    }
}

impl fmt::Display for ObservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{:.2},{:.2},{:.2}",
            self.parcel,
            self.wx_centi as f64 / 100.0,
            self.wy_centi as f64 / 100.0,
            self.wz_centi as f64 / 100.0
        )
    }
}

/// A recorded collapse of a parcel's distribution at a point and time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub id: ObservationId,
    /// The parcel's hierarchical coordinate.
    pub coordinate: Coordinate,
    /// World-space position within the parcel.
    pub world_x: f64,
    pub world_y: f64,
    pub world_z: f64,
    /// Cosmic time of the observation (Gyr since the Big Bang).
    pub time_gyr: f64,
    /// The observed fate.
    pub fate: FateKey,
    /// The observed density contrast at this point.
    pub density_contrast: f64,
    /// How the density evolves over cosmic time.
    pub density_spline: TimeSpline,
}

/// Pluggable observation persistence.
///
/// Append-mostly: `put` replaces an existing record with the same id and
/// returns the displaced one.
pub trait ObservationBackend {
    /// Insert or replace; returns the displaced record, if any.
    fn put(&mut self, observation: Observation) -> Option<Observation>;

    /// Fetch one observation by id.
    fn get(&self, id: &ObservationId) -> Option<&Observation>;

    /// All observations for one parcel, in id order.
    fn for_parcel(&self, parcel: &ParcelKey) -> Vec<&Observation>;

    /// Every observation, in id order.
    fn all(&self) -> Vec<&Observation>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory backend with a per-parcel index.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: BTreeMap<ObservationId, Observation>,
    by_parcel: BTreeMap<ParcelKey, Vec<ObservationId>>,
}

impl ObservationBackend for MemoryStore {
    fn put(&mut self, observation: Observation) -> Option<Observation> {
        let id = observation.id;
        let displaced = self.records.insert(id, observation);
        if displaced.is_none() {
            self.by_parcel.entry(id.parcel).or_default().push(id);
        }
        displaced
    }

    fn get(&self, id: &ObservationId) -> Option<&Observation> {
        self.records.get(id)
    }

    fn for_parcel(&self, parcel: &ParcelKey) -> Vec<&Observation> {
        self.by_parcel
            .get(parcel)
            .map(|ids| ids.iter().filter_map(|id| self.records.get(id)).collect())
            .unwrap_or_default()
    }

    fn all(&self) -> Vec<&Observation> {
        self.records.values().collect()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

/// The observation store: recording, parcel lookup, revision log, and
/// folding observations back into a density field.
#[derive(Debug, Default)]
pub struct ObservationStore<B: ObservationBackend = MemoryStore> {
    backend: B,
    /// Displaced records, oldest first.
    revisions: Vec<Observation>,
}

impl ObservationStore<MemoryStore> {
    /// A fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::default()
    }
}

impl<B: ObservationBackend> ObservationStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            revisions: Vec::new(),
        }
    }

    /// Record an observation: fit the density spline, persist, return the
    /// stored record.
    ///
    /// Re-recording an id with different values revises the stored record
    /// (most-recent-wins) and logs the displaced one.
    #[allow(clippy::too_many_arguments)]
    pub fn record_observation(
        &mut self,
        coordinate: Coordinate,
        world_x: f64,
        world_y: f64,
        world_z: f64,
        time_gyr: f64,
        fate: FateKey,
        density_contrast: f64,
    ) -> Result<Observation> {
        if time_gyr <= 0.0 || !time_gyr.is_finite() {
            return Err(EngineError::InvalidObservationTime { time_gyr });
        }

        let id = ObservationId::new(&coordinate, world_x, world_y, world_z);
        let density_spline =
            TimeSpline::fit_to_observation("densityContrast", density_contrast, time_gyr);
        let observation = Observation {
            id,
            coordinate,
            world_x,
            world_y,
            world_z,
            time_gyr,
            fate,
            density_contrast,
            density_spline,
        };

        if let Some(displaced) = self.backend.put(observation.clone()) {
            let contradicts = displaced.fate != fate
                || (displaced.density_contrast - density_contrast).abs() > 1e-9;
            if contradicts {
                warn!(
                    id = %id,
                    was = displaced.fate,
                    now = fate,
                    "observation paradox: revising stored record"
                );
                self.revisions.push(displaced);
            }
        } else {
            debug!(id = %id, fate, "observation recorded");
        }

        Ok(observation)
    }

    /// All observations for a parcel.
    pub fn observations_for_parcel(&self, coordinate: &Coordinate) -> Vec<&Observation> {
        self.backend.for_parcel(&ParcelKey::from(coordinate))
    }

    /// Every observation, in id order.
    pub fn all_observations(&self) -> Vec<&Observation> {
        self.backend.all()
    }

    /// Displaced records for one id, oldest first.
    pub fn revisions_for(&self, id: &ObservationId) -> Vec<&Observation> {
        self.revisions.iter().filter(|obs| obs.id == *id).collect()
    }

    pub fn len(&self) -> usize {
        self.backend.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backend.is_empty()
    }

    /// Fold every observation of a parcel into a density field.
    pub fn apply_parcel_to_field(&self, coordinate: &Coordinate, field: &mut SparseFourierField) {
        for observation in self.observations_for_parcel(coordinate) {
            apply_observation_to_field(observation, field);
        }
    }
}

/// Fold one observation into a sparse Fourier field.
///
/// Injects the global `(1, 1, 1)` mode: amplitude proportional to the
/// observed density contrast (scaled down because the mode has global
/// reach) and phase chosen so the cosine peaks exactly at the observation's
/// position.
pub fn apply_observation_to_field(observation: &Observation, field: &mut SparseFourierField) {
    let unit = field
        .bounds
        .unit(observation.world_x, observation.world_y, observation.world_z);
    let nx = unit[0] * field.period;
    let ny = unit[1] * field.period;
    let nz = unit[2] * field.period;

    let (kx, ky, kz) = (1, 1, 1);
    // cos(phase + 2π(k·n)/period) = 1 at the observation point.
    let phase = -std::f64::consts::TAU * (kx as f64 * nx + ky as f64 * ny + kz as f64 * nz)
        / field.period;
    let amplitude = observation.density_contrast * 0.3;

    field.add_mode(kx, ky, kz, amplitude, phase);
}
