//! Configuration management
//!
//! Layered loading of [`AppConfig`] from defaults, a TOML file and
//! `NOTEGATE__` environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
