pub mod config;
pub mod galaxy;
pub mod star;

pub use config::GalaxyConfig;
pub use galaxy::*;
pub use star::*;
