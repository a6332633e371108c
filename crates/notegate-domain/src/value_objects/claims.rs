//! Bearer token claims

use serde::{Deserialize, Serialize};

/// Payload carried inside a bearer token
///
/// Serialized as `{"sub": <email>, "exp": <unix seconds>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (identity email)
    pub sub: String,
    /// Expiration instant, seconds since the Unix epoch (UTC)
    pub exp: i64,
}

impl TokenClaims {
    /// Create claims for `subject` expiring at `exp`
    pub fn new<S: Into<String>>(subject: S, exp: i64) -> Self {
        Self {
            sub: subject.into(),
            exp,
        }
    }

    /// Whether the token is expired at `now` (exactly at `exp` counts as expired)
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}
