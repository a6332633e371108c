//! Authentication configuration types

use crate::constants::*;
use notegate_domain::constants::{BREACH_OCCURRENCE_THRESHOLD, MIN_PASSWORD_LENGTH};
use serde::{Deserialize, Serialize};
use std::fmt;

/// HMAC signing algorithms accepted for bearer tokens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SigningAlgorithm {
    /// HMAC with SHA-256
    #[default]
    HS256,
    /// HMAC with SHA-384
    HS384,
    /// HMAC with SHA-512
    HS512,
}

impl fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::HS256 => "HS256",
            Self::HS384 => "HS384",
            Self::HS512 => "HS512",
        };
        f.write_str(name)
    }
}

/// Token service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Signing secret
    ///
    /// **REQUIRED**. Configure via `NOTEGATE__AUTH__TOKEN__SECRET`
    /// or `auth.token.secret` in the config file. At least 32 characters.
    pub secret: String,

    /// Signing algorithm
    pub algorithm: SigningAlgorithm,

    /// Token lifetime in minutes
    pub ttl_minutes: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            // Empty by default; the loader rejects it
            secret: String::new(),
            algorithm: SigningAlgorithm::default(),
            ttl_minutes: TOKEN_DEFAULT_TTL_MINUTES,
        }
    }
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

/// Password policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordConfig {
    /// Minimum length in characters
    pub min_length: usize,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            min_length: MIN_PASSWORD_LENGTH,
        }
    }
}

/// Breach checker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreachConfig {
    /// Range endpoint base URL, must end with `/`
    pub base_url: String,

    /// Occurrence count above which a password counts as breached
    pub threshold: u64,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for BreachConfig {
    fn default() -> Self {
        Self {
            base_url: BREACH_DEFAULT_BASE_URL.to_string(),
            threshold: BREACH_OCCURRENCE_THRESHOLD,
            timeout_secs: BREACH_DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Argon2id work factor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashingConfig {
    /// Memory cost in KiB
    pub memory_kib: u32,

    /// Number of iterations
    pub iterations: u32,

    /// Degree of parallelism
    pub parallelism: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            memory_kib: ARGON2_DEFAULT_MEMORY_KIB,
            iterations: ARGON2_DEFAULT_ITERATIONS,
            parallelism: ARGON2_DEFAULT_PARALLELISM,
        }
    }
}

/// Registration policy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrationConfig {
    /// Mark new identities active immediately instead of awaiting confirmation
    pub activate_on_register: bool,
}

/// Administrator seeded at startup
#[derive(Clone, Serialize, Deserialize)]
pub struct AdminSeedConfig {
    /// Administrator username
    pub username: String,

    /// Administrator email
    pub email: String,

    /// Administrator plaintext password, hashed on seeding
    pub password: String,
}

impl fmt::Debug for AdminSeedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminSeedConfig")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Token service configuration
    #[serde(default)]
    pub token: TokenConfig,

    /// Password policy configuration
    #[serde(default)]
    pub password: PasswordConfig,

    /// Breach checker configuration
    #[serde(default)]
    pub breach: BreachConfig,

    /// Credential hashing work factor
    #[serde(default)]
    pub hashing: HashingConfig,

    /// Registration policy
    #[serde(default)]
    pub registration: RegistrationConfig,

    /// Optional administrator seed
    #[serde(default)]
    pub admin: Option<AdminSeedConfig>,
}
