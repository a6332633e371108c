//! Outcome of resolving a request to an identity

use crate::entities::Identity;
use crate::error::{Error, Result};
use std::fmt;

/// Why a request could not be tied to an identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnauthenticatedReason {
    /// The context carries no request object
    MissingRequest,
    /// No `Authorization: Bearer <token>` header in the expected two-part form
    MissingCredential,
    /// The token is valid but no identity has its subject email
    UnknownIdentity,
}

impl fmt::Display for UnauthenticatedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::MissingRequest => "missing request object in context",
            Self::MissingCredential => "missing authentication token",
            Self::UnknownIdentity => "couldn't authenticate user",
        };
        f.write_str(text)
    }
}

/// An identity together with the raw credential that resolved it
#[derive(Debug, Clone)]
pub struct ResolvedIdentity {
    /// The acting identity
    pub identity: Identity,
    /// Raw bearer token, kept for renewal
    pub token: String,
}

/// Result of identity resolution
#[derive(Debug, Clone)]
pub enum Resolution {
    /// The request carries a valid credential for a known identity
    Resolved(ResolvedIdentity),
    /// The request could not be authenticated
    Unauthenticated {
        /// Why resolution failed
        reason: UnauthenticatedReason,
    },
}

impl Resolution {
    /// Convert into a result, mapping `Unauthenticated` to
    /// [`Error::AuthenticationFailure`]
    pub fn into_result(self) -> Result<ResolvedIdentity> {
        match self {
            Self::Resolved(resolved) => Ok(resolved),
            Self::Unauthenticated { reason } => Err(Error::authentication(reason)),
        }
    }

    /// The resolved identity, if any
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Resolved(resolved) => Some(&resolved.identity),
            Self::Unauthenticated { .. } => None,
        }
    }
}
