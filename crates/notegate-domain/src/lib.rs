//! # notegate domain
//!
//! Core types and contracts of the authentication core: the [`Identity`]
//! entity, token claims, the request-context carriers, the identity
//! [`Resolution`] sum type, the error taxonomy, and the port traits that
//! the infrastructure layer implements.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Identity entity and its payloads |
//! | [`value_objects`] | Claims, request context, resolution outcome |
//! | [`ports`] | Token service, request context, hasher, breach checker |
//! | [`repositories`] | Identity repository |
//! | [`error`] | Error taxonomy and `Result` alias |

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod repositories;
pub mod value_objects;

pub use entities::{Identity, IdentityChanges, IdentityId, IdentityPatch, NewIdentity};
pub use error::{Error, Result};
pub use value_objects::{
    InboundRequest, OperationContext, Resolution, ResolvedIdentity, TokenClaims,
    UnauthenticatedReason,
};
