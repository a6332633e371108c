//! External provider ports

/// Breach checker port
pub mod breach;
/// Credential hasher port
pub mod crypto;

pub use breach::BreachChecker;
pub use crypto::CredentialHasher;
