//! Domain layer constants
//!
//! Contains constants that are part of the authentication rules. Defaults
//! that only configure infrastructure live in
//! `notegate_infrastructure::constants`.

// ============================================================================
// REQUEST CONSTANTS
// ============================================================================

/// Header carrying the bearer credential
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Literal scheme marker expected in the authorization header (case-sensitive)
pub const BEARER_SCHEME: &str = "Bearer";

// ============================================================================
// PASSWORD CONSTANTS
// ============================================================================

/// Minimum password length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 12;

/// Breach occurrence count above which a password is rejected
pub const BREACH_OCCURRENCE_THRESHOLD: u64 = 5;

/// Number of leading SHA-1 hex characters sent to the breach service
pub const BREACH_PREFIX_LENGTH: usize = 5;
