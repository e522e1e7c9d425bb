//! Integration tests for end-to-end Cosmogony observation.
//!
//! These tests verify the full pipeline:
//! Build registry → Search → Observe fates → Record → Fold into field

use std::collections::BTreeSet;

use cosmogony_engine::search::SearchCoordinates;
use cosmogony_engine::tiles::{paint_tile_3d, paint_tile_for_parent};
use cosmogony_engine::EngineError;
use cosmogony_field::fourier::SparseFourierField;
use cosmogony_field::{Bounds3, DensityField3, FieldStrategy, DEFAULT_Z_STEPS};
use cosmogony_foundation::{decode_coordinate, encode_coordinate, Coordinate, Scale};
use cosmogony_taxonomy::palette::presentation_map;
use cosmogony_taxonomy::EMPTY_FATE;
use cosmogony_tests::{TestHarness, WORLD_SIZE};

/// Test the full pipeline: search for galaxies, record each as an
/// observation, and verify the store indexes them by parcel.
#[test]
fn test_search_record_and_query_pipeline() {
    let mut harness = TestHarness::new(42);

    let result = harness.find_galaxies(5);
    assert_eq!(result.galaxies.len(), 5);

    for galaxy in &result.galaxies {
        harness.record_galaxy(galaxy);
    }

    // The search may revisit a coordinate; the store keys observations by
    // parcel + position, so duplicates collapse onto one record.
    let distinct: BTreeSet<String> = result
        .galaxies
        .iter()
        .map(|g| g.to_coordinate().unwrap().to_string())
        .collect();
    assert_eq!(harness.store().len(), distinct.len());

    // Every recorded galaxy is retrievable through its parcel.
    for galaxy in &result.galaxies {
        let coordinate = galaxy.to_coordinate().unwrap();
        let stored = harness.store().observations_for_parcel(&coordinate);
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].coordinate, coordinate);
        assert_eq!(stored[0].fate, harness.observe_galactic(galaxy));
    }
}

/// Test that two universes with the same seed are indistinguishable and
/// two with different seeds diverge.
///
/// Determinism must hold through the serialized form too, since the
/// hierarchical coordinate encoding is the persisted representation.
#[test]
fn test_universes_reproduce_from_their_seed() {
    let a = TestHarness::new(42).find_galaxies(5);
    let b = TestHarness::new(42).find_galaxies(5);
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );

    let c = TestHarness::new(123).find_galaxies(5);
    assert_ne!(a.galaxies, c.galaxies);
}

/// Test that searched coordinates survive the hierarchical encoding.
///
/// Each galaxy's per-scale cells pack into a `Coordinate` and decode back
/// to the same cells; re-encoding the decoded positions is the identity.
#[test]
fn test_galaxy_coordinates_round_trip() {
    let harness = TestHarness::new(42);
    let result = harness.find_galaxies(8);

    for galaxy in &result.galaxies {
        let coordinate = galaxy.to_coordinate().unwrap();
        let positions = coordinate.positions();

        let (kx, ky) = galaxy.kpc100.unwrap();
        let (mx, my) = galaxy.mpc1.unwrap();
        let (wx, wy) = galaxy.mpc10.unwrap();
        assert_eq!(positions[&Scale::Kiloparsec100], (kx as u128, ky as u128));
        assert_eq!(positions[&Scale::Megaparsec], (mx as u128, my as u128));
        assert_eq!(positions[&Scale::Megaparsec10], (wx as u128, wy as u128));

        assert_eq!(
            Coordinate::from_positions(Scale::Kiloparsec100, &positions),
            coordinate
        );

        let xs = decode_coordinate(coordinate.x, coordinate.scale);
        assert_eq!(encode_coordinate(&xs, coordinate.scale), coordinate.x);
    }
}

/// Test that a recorded observation folds back into the density field and
/// raises the density exactly at the observed position.
#[test]
fn test_observations_fold_into_the_field() {
    let mut harness = TestHarness::new(42);
    let result = harness.find_galaxies(1);
    let galaxy = result.galaxies[0];
    let observation = harness.record_galaxy(&galaxy);
    let coordinate = galaxy.to_coordinate().unwrap();

    let mut field = SparseFourierField {
        modes: Vec::new(),
        bounds: Bounds3::cube(WORLD_SIZE),
        period: WORLD_SIZE,
    };
    harness.fold_parcel(&coordinate, &mut field);

    // One observation, one injected mode, peaking at the observation.
    assert_eq!(field.mode_count(), 1);
    let at_observation = field.density(
        observation.world_x,
        observation.world_y,
        observation.world_z,
    );
    assert!((at_observation - observation.density_contrast * 0.3).abs() < 1e-9);

    // Folding the same parcel again accumulates the mode's amplitude.
    harness.fold_parcel(&coordinate, &mut field);
    assert_eq!(field.mode_count(), 1);
    let doubled = field.density(
        observation.world_x,
        observation.world_y,
        observation.world_z,
    );
    assert!((doubled - 2.0 * observation.density_contrast * 0.3).abs() < 1e-9);
}

/// Test that the spline fitted during recording gives the observation a
/// plausible history: homogeneous at the Big Bang, settled at observation
/// time, converged at equilibrium.
#[test]
fn test_recorded_splines_grow_from_the_big_bang() {
    let mut harness = TestHarness::new(42);
    let result = harness.find_galaxies(3);

    for galaxy in &result.galaxies {
        let observation = harness.record_galaxy(galaxy);
        let spline = &observation.density_spline;

        assert!(spline.evaluate(0.0).abs() < 1e-12);
        let at_obs = spline.evaluate(observation.time_gyr);
        let gap = (at_obs - observation.density_contrast).abs();
        assert!(gap <= observation.density_contrast.abs() * 0.06 + 1e-12);
        let settled = spline.evaluate(1000.0);
        assert!((settled - observation.density_contrast).abs() < 1e-9);
    }
}

/// Test that tile painting agrees with the taxonomy: every painted cell
/// comes from the observed parent's child prior, and a parent with no
/// prior paints the background fate.
#[test]
fn test_painted_tiles_respect_the_parent_prior() {
    let harness = TestHarness::new(42);
    let coords = SearchCoordinates {
        mpc10: Some((3, 7)),
        mpc1: Some((2, 5)),
        kpc100: Some((0, 0)),
    };

    let halo_fate = harness.observe_halo(&coords);
    let coordinate = coords.to_coordinate().unwrap();
    let tile = paint_tile_for_parent(harness.registry(), halo_fate.key(), &coordinate, 12).unwrap();
    assert_eq!(tile.len(), 144);

    let record = harness.registry().get(halo_fate.key()).unwrap();
    for cell in &tile {
        if record.child_fate_weights.is_empty() {
            assert_eq!(*cell, EMPTY_FATE);
        } else {
            assert!(record.child_fate_weights.contains_key(cell));
        }
    }
}

/// Test that 3D cosmic-web tiles paint valid web fates under both field
/// strategies, and that classification is total over the whole grid.
#[test]
fn test_web_tiles_classify_totally() {
    let harness = TestHarness::new(42);
    let coordinate = Coordinate::new(Scale::Megaparsec10, 52, 37);

    for strategy in [FieldStrategy::SparseFourier, FieldStrategy::HaarWavelet] {
        let tile = paint_tile_3d(&coordinate, 8, strategy);
        assert_eq!(tile.len(), 64);
        for cell in &tile {
            let record = harness.registry().get(cell).unwrap();
            assert_eq!(record.scale, Scale::Megaparsec10);
        }
    }

    // Ray marching the default field directly is total as well.
    let field = harness.density_field();
    for i in 0..8 {
        let fate = field.ray_march_from_above(i as f64 + 0.5, 9.5 - i as f64, DEFAULT_Z_STEPS);
        assert!(harness.registry().get(fate.key()).is_ok());
    }
}

/// Test the revision-on-paradox policy end to end: re-recording the same
/// point with a contradictory fate replaces the record (most recent wins)
/// and preserves the displaced observation in the revision log.
#[test]
fn test_contradictory_observations_revise_with_audit_trail() {
    let mut harness = TestHarness::new(42);
    let coordinate = Coordinate::new(Scale::Kiloparsec100, 523, 371);

    let first = harness
        .store_mut()
        .record_observation(coordinate, 1.0, 2.0, 3.0, 13.8, "spiralGalaxy", 1.4)
        .unwrap();
    let second = harness
        .store_mut()
        .record_observation(coordinate, 1.0, 2.0, 3.0, 13.8, "ellipticalGalaxy", 2.1)
        .unwrap();
    assert_eq!(first.id, second.id);

    assert_eq!(harness.store().len(), 1);
    let stored = harness.store().observations_for_parcel(&coordinate);
    assert_eq!(stored[0].fate, "ellipticalGalaxy");

    let revisions = harness.store().revisions_for(&second.id);
    assert_eq!(revisions.len(), 1);
    assert_eq!(revisions[0].fate, "spiralGalaxy");
    assert_eq!(revisions[0].density_contrast, 1.4);
}

/// Test that sampling without the required ancestor coordinates surfaces
/// an error instead of guessing a position.
#[test]
fn test_incomplete_coordinates_fail_fast() {
    let harness = TestHarness::new(42);
    let coords = SearchCoordinates {
        mpc10: Some((1, 1)),
        mpc1: None,
        kpc100: Some((4, 4)),
    };

    let err = cosmogony_engine::search::observe_galactic_fate(&coords, 42, harness.registry())
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::MissingCoordinate {
            scale: Scale::Megaparsec
        }
    );
    assert!(coords.to_coordinate().is_none());
}

/// Test the fate-to-presentation interface: every fate the pipeline can
/// produce — searched, painted, or classified — has a palette entry.
#[test]
fn test_every_reachable_fate_has_a_presentation() {
    let harness = TestHarness::new(42);
    let palette = presentation_map();

    for record in harness.registry().records() {
        let presentation = &palette[record.key];
        assert!(presentation.hex.starts_with('#'));
        assert!(!presentation.label.is_empty());
    }

    let result = harness.find_galaxies(5);
    for obs in &result.observations {
        assert!(palette.contains_key(obs.fate), "no palette entry for {}", obs.fate);
    }

    let coordinate = Coordinate::new(Scale::Megaparsec10, 5, 9);
    for cell in paint_tile_3d(&coordinate, 6, FieldStrategy::SparseFourier) {
        assert!(palette.contains_key(cell));
    }
}
