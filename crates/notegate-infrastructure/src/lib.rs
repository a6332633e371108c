//! # Infrastructure Layer
//!
//! Concrete adapters for the notegate domain ports, plus the cross-cutting
//! concerns every binary needs.
//!
//! ## Module Categories
//!
//! ### Security & Authentication
//! | Module | Description |
//! |--------|-------------|
//! | [`crypto`] | Argon2id credential hasher |
//! | [`token`] | JWT token service |
//! | [`breach`] | Pwned Passwords k-anonymity breach checker |
//!
//! ### Data & Storage
//! | Module | Description |
//! |--------|-------------|
//! | [`repository`] | In-memory identity repository |
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-layered TOML and environment configuration |
//! | [`constants`] | Centralized configuration defaults |
//! | [`logging`] | Structured logging with tracing |

pub mod breach;
pub mod config;
pub mod constants;
pub mod crypto;
pub mod error_ext;
pub mod logging;
pub mod repository;
pub mod token;

// Re-export commonly used types
pub use breach::PwnedPasswordsClient;
pub use crypto::Argon2CredentialHasher;
pub use error_ext::ErrorContext;
pub use repository::InMemoryIdentityRepository;
pub use token::JwtTokenService;
