//! Credential Hasher Port
//!
//! One-way password hashing. The trait is defined here and implemented in
//! notegate-infrastructure (Argon2id).

use crate::error::Result;

/// Credential hasher port
///
/// `hash` output is self-salted and algorithm-tagged, so two calls with the
/// same plaintext produce different digests. Digests are only ever compared
/// through `verify`.
pub trait CredentialHasher: Send + Sync {
    /// Hash a plaintext password
    fn hash(&self, plaintext: &str) -> Result<String>;

    /// Check `plaintext` against `digest`
    ///
    /// Fails with [`Error::InvalidCredential`](crate::error::Error::InvalidCredential)
    /// on mismatch.
    fn verify(&self, digest: &str, plaintext: &str) -> Result<()>;
}
