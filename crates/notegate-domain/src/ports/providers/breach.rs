//! Breach Checker Port
//!
//! Reputation lookup for passwords seen in public breaches.

use crate::error::Result;
use async_trait::async_trait;

/// Breach checker port
///
/// Implementations must fail closed: any failure to obtain an answer is an
/// error, never `Ok(false)`.
#[async_trait]
pub trait BreachChecker: Send + Sync {
    /// Whether `plaintext` appears in breach corpora more often than the
    /// configured threshold
    async fn is_breached(&self, plaintext: &str) -> Result<bool>;
}
