//! Identity Repository Interface
//!
//! Data accessor for persisted identities. Implementations scope any
//! connection or lock to a single call; nothing is held between calls.

use crate::entities::{Identity, IdentityId, IdentityPatch, NewIdentity};
use chrono::{DateTime, Utc};
use crate::error::Result;
use async_trait::async_trait;

/// Repository: identity persistence
///
/// Must be safe for concurrent reads.
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Find an identity by its unique email
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>>;

    /// Find an identity by its unique username
    async fn find_by_username(&self, username: &str) -> Result<Option<Identity>>;

    /// Find an identity by id
    async fn find_by_id(&self, id: IdentityId) -> Result<Option<Identity>>;

    /// All identities ordered by id
    async fn list(&self) -> Result<Vec<Identity>>;

    /// Insert a new identity, assigning its id and creation timestamp
    ///
    /// Fails with [`Error::AlreadyExists`](crate::error::Error::AlreadyExists)
    /// when the email or username is taken.
    async fn insert(&self, identity: NewIdentity) -> Result<Identity>;

    /// Apply `patch` to the stored identity `id` and return the result
    ///
    /// Only the fields set in `patch` are written, so concurrent writes to
    /// other fields are preserved. Fails with `NotFound` for an unknown id and
    /// `AlreadyExists` when the new email or username collides with another
    /// identity.
    async fn update(&self, id: IdentityId, patch: IdentityPatch) -> Result<Identity>;

    /// Stamp `last_login` on the stored identity `id` and return the result
    async fn touch_last_login(&self, id: IdentityId, at: DateTime<Utc>) -> Result<Identity>;
}
