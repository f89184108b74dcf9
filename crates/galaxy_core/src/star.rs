use serde::{Deserialize, Serialize};

/// A 3-component vector — the shape of a star's position and velocity,
/// not a standalone entity.
pub type Vector = [f64; 3];

/// A point mass in the galaxy.
/// All fields start at zero; the integrator driving the simulation
/// mutates them freely. Any f64 is accepted, including NaN and
/// infinities — this is a low-level data container, not a validator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Star {
    /// Position in simulation units
    pub position: Vector,
    /// Velocity in simulation units
    pub velocity: Vector,
    /// Mass in solar masses
    pub mass: f64,
}

impl Star {
    /// A star at the origin, at rest, with zero mass.
    pub fn new() -> Self {
        Self::default()
    }
}
