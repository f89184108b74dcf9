use galaxy_core::{Galaxy, GalaxyConfig, Star};
use rand::Rng;

/// Generate a star cloud from the config: uniform positions within a
/// ball of `config.radius`, isotropic velocities, masses uniform in
/// `[min_mass, max_mass)`. Deterministic for a given RNG state.
pub fn generate_galaxy(config: &GalaxyConfig, rng: &mut impl Rng) -> Galaxy {
    let mut galaxy = Galaxy::new();
    for _ in 0..config.star_count {
        galaxy.add(generate_star(config, rng));
    }
    galaxy
}

fn generate_star(config: &GalaxyConfig, rng: &mut impl Rng) -> Star {
    let mut star = Star::new();

    // Cube-root radius sampling gives a uniform density in the ball
    let r = config.radius * rng.gen_range(0.0..1.0f64).cbrt();
    star.position = random_direction(rng).map(|c| c * r);

    let speed = rng.gen_range(0.0..config.velocity_spread);
    star.velocity = random_direction(rng).map(|c| c * speed);

    star.mass = rng.gen_range(config.min_mass..config.max_mass);
    star
}

/// Uniform direction on the unit sphere, via spherical coordinates.
fn random_direction(rng: &mut impl Rng) -> [f64; 3] {
    let theta = rng.gen_range(0.0..std::f64::consts::TAU);
    let phi = rng.gen_range(-1.0..1.0f64).acos();
    [
        phi.sin() * theta.cos(),
        phi.sin() * theta.sin(),
        phi.cos(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn small_config() -> GalaxyConfig {
        GalaxyConfig {
            star_count: 200,
            seed: 7,
            ..GalaxyConfig::default()
        }
    }

    #[test]
    fn test_generates_requested_star_count() {
        let config = small_config();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let galaxy = generate_galaxy(&config, &mut rng);
        assert_eq!(galaxy.len(), config.star_count as usize);
    }

    #[test]
    fn test_generation_is_deterministic_for_a_seed() {
        let config = small_config();
        let mut rng_a = ChaCha8Rng::seed_from_u64(config.seed);
        let mut rng_b = ChaCha8Rng::seed_from_u64(config.seed);
        let a = generate_galaxy(&config, &mut rng_a);
        let b = generate_galaxy(&config, &mut rng_b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_stars_respect_config_bounds() {
        let config = small_config();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let galaxy = generate_galaxy(&config, &mut rng);

        for star in galaxy.stars() {
            let r2: f64 = star.position.iter().map(|c| c * c).sum();
            assert!(r2 <= config.radius * config.radius * (1.0 + 1e-12));

            let v2: f64 = star.velocity.iter().map(|c| c * c).sum();
            assert!(v2 <= config.velocity_spread * config.velocity_spread * (1.0 + 1e-12));

            assert!(star.mass >= config.min_mass && star.mass < config.max_mass);
        }
    }
}
