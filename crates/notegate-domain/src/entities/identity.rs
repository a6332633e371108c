//! Identity entity
//!
//! The persisted account that bearer tokens resolve to.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Unique identifier of an identity
pub type IdentityId = i64;

/// A registered account
///
/// `username` and `email` are unique across the store. `password_digest`
/// holds the hasher output, never the plaintext, and is redacted from
/// `Debug` output and skipped by serialization.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    /// Unique identity id
    pub id: IdentityId,
    /// Unique username
    pub username: String,
    /// Unique email, used as the token subject
    pub email: String,
    /// One-way password digest
    #[serde(skip)]
    pub password_digest: String,
    /// Administrator flag
    pub is_admin: bool,
    /// Login is refused while this is false
    pub is_active: bool,
    /// When the identity was inserted
    pub created_at: DateTime<Utc>,
    /// Last successful login
    pub last_login: Option<DateTime<Utc>>,
}

impl Identity {
    /// Stamp a successful login
    pub fn touch_login(&mut self, at: DateTime<Utc>) {
        self.last_login = Some(at);
    }

    /// Overwrite the fields set in `patch`
    pub fn apply(&mut self, patch: IdentityPatch) {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(password_digest) = patch.password_digest {
            self.password_digest = password_digest;
        }
    }

    /// Whether this identity owns `target` or may act on it as administrator
    pub fn owns_or_administers(&self, target: IdentityId) -> bool {
        self.id == target || self.is_admin
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_digest", &"<redacted>")
            .field("is_admin", &self.is_admin)
            .field("is_active", &self.is_active)
            .field("created_at", &self.created_at)
            .field("last_login", &self.last_login)
            .finish()
    }
}

/// Insert payload for a new identity
///
/// The repository assigns `id` and stamps `created_at` at insert time.
#[derive(Clone)]
pub struct NewIdentity {
    /// Unique username
    pub username: String,
    /// Unique email
    pub email: String,
    /// One-way password digest
    pub password_digest: String,
    /// Administrator flag
    pub is_admin: bool,
    /// Active flag
    pub is_active: bool,
}

impl fmt::Debug for NewIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewIdentity")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_digest", &"<redacted>")
            .field("is_admin", &self.is_admin)
            .field("is_active", &self.is_active)
            .finish()
    }
}

impl NewIdentity {
    /// Materialize the entity once the store has assigned id and timestamp
    pub fn into_identity(self, id: IdentityId, created_at: DateTime<Utc>) -> Identity {
        Identity {
            id,
            username: self.username,
            email: self.email,
            password_digest: self.password_digest,
            is_admin: self.is_admin,
            is_active: self.is_active,
            created_at,
            last_login: None,
        }
    }
}

/// Requested changes to an existing identity
///
/// `None` leaves the field untouched. `password` is plaintext and must pass
/// the password policy before it is hashed.
#[derive(Clone, Default)]
pub struct IdentityChanges {
    /// New username
    pub username: Option<String>,
    /// New email
    pub email: Option<String>,
    /// New plaintext password
    pub password: Option<String>,
}

impl IdentityChanges {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.password.is_none()
    }
}

impl fmt::Debug for IdentityChanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityChanges")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Field-level write applied to a stored identity
///
/// Unlike [`IdentityChanges`] the password is already hashed. Fields left
/// `None` keep whatever the store currently holds.
#[derive(Clone, Default)]
pub struct IdentityPatch {
    /// New username
    pub username: Option<String>,
    /// New email
    pub email: Option<String>,
    /// New password digest
    pub password_digest: Option<String>,
}

impl fmt::Debug for IdentityPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityPatch")
            .field("username", &self.username)
            .field("email", &self.email)
            .field(
                "password_digest",
                &self.password_digest.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
