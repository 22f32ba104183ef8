//! Kinmap Core — profile records, configuration, error types.

pub mod config;
pub mod error;
pub mod profile;

pub use config::{KinmapConfig, LayoutConfig};
pub use error::{Error, Result};
pub use profile::{load_profiles, parse_profiles, Profile};
