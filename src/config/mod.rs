//! Configuration loading and layering.
//!
//! Handles `.userdesk.toml` loading, environment variable resolution,
//! and CLI flag merging with proper priority ordering.

pub mod env;
pub mod loader;

pub use env::Env;
pub use loader::{ApiConfig, CliOverrides, Config, ConfigError, LogConfig, ViewConfig};
