//! dues-config
//!
//! Persistent preferences for the dues report tooling.
//! Owns the Config data structure plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::{default_base_dir, ConfigManager};
pub use model::{Config, MAX_CURRENCY_PRECISION};
