//! Domain entities

/// Identity entity and its insert/update payloads
pub mod identity;

pub use identity::{Identity, IdentityChanges, IdentityId, IdentityPatch, NewIdentity};
