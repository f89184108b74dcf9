use galaxy_core::{Star, Vector};

/// Accumulate `y` into `x` in place: `x[i] += y[i]`.
/// The elementwise primitive integrators build their update steps from.
pub fn vector_add(x: &mut Vector, y: &Vector) {
    x[0] += y[0];
    x[1] += y[1];
    x[2] += y[2];
}

/// Squared Euclidean distance between two stars' positions.
/// The square root is deliberately omitted: squared distance suffices
/// for comparisons and is cheaper in inner force/neighbor loops.
pub fn distance_squared(s1: &Star, s2: &Star) -> f64 {
    let dx = s1.position[0] - s2.position[0];
    let dy = s1.position[1] - s2.position[1];
    let dz = s1.position[2] - s2.position[2];
    dx * dx + dy * dy + dz * dz
}
