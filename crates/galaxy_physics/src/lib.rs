pub mod procgen;
pub mod vectors;

pub use vectors::{distance_squared, vector_add};
