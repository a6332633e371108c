//! # notegate
//!
//! Authentication core for a notes API: bearer token issuance and
//! verification, breach-checked password governance, identity resolution
//! from request headers and the authorization gates protected operations
//! run behind.
//!
//! ## Example
//!
//! ```ignore
//! use notegate::{AuthRuntime, infrastructure::config::ConfigLoader};
//! use notegate::domain::value_objects::OperationContext;
//! use notegate::application::Gate;
//!
//! let runtime = AuthRuntime::from_config(ConfigLoader::new().load()?)?;
//! let login = runtime.accounts().login("alice@example.com", "Sup3rSecur3Pass!").await?;
//!
//! let ctx = OperationContext::bearer(&login.token);
//! let resolved = Gate::LoggedIn.check(runtime.resolver(), &ctx).await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - entities, value objects, error taxonomy, port traits
//! - `application` - password policy, resolver, gates, account use cases
//! - `infrastructure` - Argon2, Pwned Passwords, JWT, config, logging

pub mod bootstrap;

/// Domain layer - core types and port traits
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use notegate_domain::*;
}

/// Application layer - resolver, gates and use cases
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use notegate_application::*;
}

/// Infrastructure layer - adapters, configuration and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use notegate_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::{Error, Identity, Result};

// Re-export the runtime entry point at the crate root
pub use bootstrap::AuthRuntime;
