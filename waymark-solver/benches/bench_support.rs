//! Benchmark support utilities for the greedy planner.
//!
//! Generates deterministic store layouts: stores are grouped into zones the
//! way a mall is laid out in wings, using a seeded RNG for reproducibility.

use geo::Coord;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use waymark_core::Waypoint;

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// Number of zones stores are spread across.
const ZONE_COUNT: usize = 4;

/// Half-width of a zone around its centre, in venue units.
const ZONE_SPREAD: f64 = 120.0;

/// Width and height of the venue floor plan, in venue units.
const FLOOR_SIZE: f64 = 1200.0;

/// Entrance on the west side of the floor plan.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "entrance sits halfway up the floor plan"
)]
pub fn entrance() -> Waypoint {
    Waypoint::new("entrance", Coord { x: 0.0, y: FLOOR_SIZE / 2.0 })
}

/// Generate `count` stores spread across zones.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "stores are jittered around zone centres"
)]
pub fn generate_zoned_stores(count: usize, seed: u64) -> Vec<Waypoint> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let centres: Vec<Coord<f64>> = (0..ZONE_COUNT)
        .map(|_| Coord {
            x: rng.gen_range(ZONE_SPREAD..FLOOR_SIZE - ZONE_SPREAD),
            y: rng.gen_range(ZONE_SPREAD..FLOOR_SIZE - ZONE_SPREAD),
        })
        .collect();

    centres
        .iter()
        .cycle()
        .take(count)
        .enumerate()
        .map(|(i, centre)| {
            let location = Coord {
                x: centre.x + rng.gen_range(-ZONE_SPREAD..ZONE_SPREAD),
                y: centre.y + rng.gen_range(-ZONE_SPREAD..ZONE_SPREAD),
            };
            Waypoint::new(format!("store-{i}"), location)
        })
        .collect()
}
