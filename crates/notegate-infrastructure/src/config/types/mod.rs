//! Configuration data types

pub mod app;
pub mod auth;
pub mod logging;

pub use app::AppConfig;
pub use auth::{
    AdminSeedConfig, AuthConfig, BreachConfig, HashingConfig, PasswordConfig,
    RegistrationConfig, SigningAlgorithm, TokenConfig,
};
pub use logging::LoggingConfig;
