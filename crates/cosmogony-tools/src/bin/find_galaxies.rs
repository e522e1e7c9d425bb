//! Search a universe for galaxies and print what was observed.
//!
//! Usage: `find-galaxies [--limit N] [--seed SEED]`

use std::process;

use clap::Parser;
use indexmap::IndexMap;
use tracing::{error, info};

use cosmogony_engine::search::{find_galaxies, FindGalaxiesArgs, SearchCoordinates};
use cosmogony_taxonomy::FateRegistry;

#[derive(Parser, Debug)]
#[command(name = "find-galaxies")]
#[command(about = "Observe a deterministic universe until N galaxies are found")]
struct Args {
    /// Number of galaxies to find
    #[arg(long, default_value = "10")]
    limit: usize,

    /// Universe seed; identical seeds reproduce identical universes
    #[arg(long, default_value = "42")]
    seed: i64,
}

fn coordinate_tuple(coords: &SearchCoordinates) -> String {
    let cell = |position: Option<(u32, u32)>| match position {
        Some((x, y)) => format!("{x},{y}"),
        None => "-".to_string(),
    };
    format!(
        "Mpc10({}), Mpc1({}), kpc100({})",
        cell(coords.mpc10),
        cell(coords.mpc1),
        cell(coords.kpc100)
    )
}

fn main() {
    cosmogony_tools::init_logging();

    let args = Args::parse();

    let registry = match FateRegistry::builtin() {
        Ok(registry) => registry,
        Err(err) => {
            error!("fate registry failed to build: {err}");
            process::exit(1);
        }
    };

    info!("Finding {} galaxies (seed {})...", args.limit, args.seed);

    let result = match find_galaxies(
        &FindGalaxiesArgs {
            limit: args.limit,
            universe_seed: args.seed,
        },
        &registry,
    ) {
        Ok(result) => result,
        Err(err) => {
            error!("search failed: {err}");
            process::exit(1);
        }
    };

    info!(
        "Found {} galaxies after {} observations",
        result.galaxies.len(),
        result.observations.len()
    );
    for galaxy in &result.galaxies {
        info!("  Galaxy at {}", coordinate_tuple(galaxy));
    }

    info!("--- Sample of observations ---");
    for obs in result.observations.iter().take(20) {
        info!("  {:<18} at {}", obs.fate, coordinate_tuple(&obs.coordinates));
    }
    if result.observations.len() > 20 {
        info!(
            "  ... and {} more observations",
            result.observations.len() - 20
        );
    }

    info!("--- Fate distribution ---");
    let mut histogram: IndexMap<&str, usize> = IndexMap::new();
    for obs in &result.observations {
        *histogram.entry(obs.fate).or_default() += 1;
    }
    histogram.sort_by(|_, a, _, b| b.cmp(a));
    for (fate, count) in &histogram {
        let share = *count as f64 / result.observations.len() as f64 * 100.0;
        info!("  {:<18} {:>4}  ({:.1}%)", fate, count, share);
    }
}
