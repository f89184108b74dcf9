//! Headless driver: generate a seeded star cloud, report a few bulk
//! statistics, and dump a binary snapshot to disk.

use galaxy_core::{Galaxy, GalaxyConfig};
use galaxy_physics::{distance_squared, procgen, vector_add};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::Path;
use std::process;

/// Mean velocity of the cloud, accumulated with `vector_add`.
fn mean_velocity(galaxy: &Galaxy) -> [f64; 3] {
    let mut sum = [0.0; 3];
    for star in galaxy.stars() {
        vector_add(&mut sum, &star.velocity);
    }
    let n = galaxy.len().max(1) as f64;
    sum.map(|c| c / n)
}

/// Closest pair among the first `sample` stars. O(sample^2), which is
/// fine for a diagnostic; a real neighbor search belongs to a solver.
fn closest_pair_distance(galaxy: &Galaxy, sample: usize) -> f64 {
    let stars = &galaxy.stars()[..galaxy.len().min(sample)];
    let mut best = f64::INFINITY;
    for (i, s1) in stars.iter().enumerate() {
        for s2 in &stars[i + 1..] {
            best = best.min(distance_squared(s1, s2));
        }
    }
    best.sqrt()
}

fn main() {
    let config = GalaxyConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    eprintln!(
        "Generating {} stars (seed {})...",
        config.star_count, config.seed
    );
    let galaxy = procgen::generate_galaxy(&config, &mut rng);

    let v = mean_velocity(&galaxy);
    println!(
        "Mean velocity: [{:.3}, {:.3}, {:.3}]",
        v[0], v[1], v[2]
    );
    println!(
        "Closest pair in a 100-star sample: {:.3} units",
        closest_pair_distance(&galaxy, 100)
    );

    let path = Path::new("snapshots/galaxy.bin");
    if let Err(e) = galaxy_storage::dump_to_file(&galaxy, path) {
        eprintln!("dump failed: {e}");
        process::exit(1);
    }
    println!("Wrote {} stars to {}", galaxy.len(), path.display());
}
