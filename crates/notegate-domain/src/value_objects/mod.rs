//! Domain value objects

/// Bearer token claims
pub mod claims;
/// Request context carriers
pub mod request;
/// Identity resolution outcome
pub mod resolution;

pub use claims::TokenClaims;
pub use request::{InboundRequest, OperationContext};
pub use resolution::{Resolution, ResolvedIdentity, UnauthenticatedReason};
