pub mod approximator;
pub mod config;
pub mod parser;
pub mod types;

// Main API exports
pub use approximator::{ApproximationError, FractionApproximator, approximate};
pub use config::{ApproximationConfig, ConfigError};
pub use types::*;
