use serde::{Deserialize, Serialize};

/// Galaxy generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalaxyConfig {
    /// Number of stars to generate
    pub star_count: u32,
    /// Random seed for deterministic generation
    pub seed: u64,
    /// Radius of the initial star cloud (simulation units)
    pub radius: f64,
    /// Maximum initial speed
    pub velocity_spread: f64,
    /// Smallest star mass (solar masses)
    pub min_mass: f64,
    /// Largest star mass (solar masses)
    pub max_mass: f64,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            star_count: 10_000,
            seed: 42,
            radius: 100.0,
            velocity_spread: 5.0,
            min_mass: 0.1,
            max_mass: 50.0,
        }
    }
}
