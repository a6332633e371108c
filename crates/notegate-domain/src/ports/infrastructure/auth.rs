//! Token Service Port
//!
//! Defines the contract for stateless bearer token issuance and verification.

use crate::error::Result;
use crate::value_objects::TokenClaims;

/// Token service interface
///
/// Implementations hold a process-wide secret and algorithm fixed at
/// construction. Verification decodes and checks the signature before
/// looking at the expiration, so a token that is both malformed and
/// expired reports [`Error::InvalidToken`](crate::error::Error::InvalidToken).
pub trait TokenService: Send + Sync {
    /// Issue a token for `subject` expiring one TTL from now
    fn issue(&self, subject: &str) -> Result<String>;

    /// Verify signature and expiration, returning the claims
    fn verify(&self, token: &str) -> Result<TokenClaims>;

    /// Verify against an explicit instant (seconds since the Unix epoch)
    fn verify_at(&self, token: &str, now: i64) -> Result<TokenClaims>;

    /// Re-issue a currently valid token with the same subject and a fresh expiration
    ///
    /// Any verification failure is returned unchanged.
    fn renew(&self, token: &str) -> Result<String>;
}
