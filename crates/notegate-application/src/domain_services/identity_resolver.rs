//! Identity resolution
//!
//! Maps the bearer credential of an inbound request to a persisted
//! identity. The header must contain the literal `Bearer` and split on
//! whitespace into exactly two parts; the second part is the token.

use notegate_domain::constants::{AUTHORIZATION_HEADER, BEARER_SCHEME};
use notegate_domain::error::Result;
use notegate_domain::ports::{RequestContext, TokenService};
use notegate_domain::repositories::IdentityRepository;
use notegate_domain::value_objects::{Resolution, ResolvedIdentity, UnauthenticatedReason};
use std::sync::Arc;
use tracing::debug;

/// Resolves request credentials to identities
#[derive(Clone)]
pub struct IdentityResolver {
    tokens: Arc<dyn TokenService>,
    identities: Arc<dyn IdentityRepository>,
}

impl IdentityResolver {
    /// Create a resolver over a token service and identity repository
    pub fn new(tokens: Arc<dyn TokenService>, identities: Arc<dyn IdentityRepository>) -> Self {
        Self { tokens, identities }
    }

    /// Resolve the acting identity of `ctx`
    ///
    /// Token failures (`InvalidToken`, `ExpiredToken`) and repository
    /// failures are returned as errors. Every other reason the request
    /// cannot be tied to an identity is `Ok(Resolution::Unauthenticated)`.
    pub async fn resolve(&self, ctx: &dyn RequestContext) -> Result<Resolution> {
        let Some(request) = ctx.request() else {
            return Ok(unauthenticated(UnauthenticatedReason::MissingRequest));
        };

        let Some(token) = bearer_token(request.header(AUTHORIZATION_HEADER)) else {
            return Ok(unauthenticated(UnauthenticatedReason::MissingCredential));
        };

        let claims = self.tokens.verify(token)?;

        match self.identities.find_by_email(&claims.sub).await? {
            Some(identity) => Ok(Resolution::Resolved(ResolvedIdentity {
                identity,
                token: token.to_string(),
            })),
            None => Ok(unauthenticated(UnauthenticatedReason::UnknownIdentity)),
        }
    }

    /// Resolve or fail with [`Error::AuthenticationFailure`](notegate_domain::Error::AuthenticationFailure)
    pub async fn authenticate(&self, ctx: &dyn RequestContext) -> Result<ResolvedIdentity> {
        self.resolve(ctx).await?.into_result()
    }
}

fn unauthenticated(reason: UnauthenticatedReason) -> Resolution {
    debug!(%reason, "Request not authenticated");
    Resolution::Unauthenticated { reason }
}

/// Extract the token from an `Authorization` header value
fn bearer_token(header: Option<&str>) -> Option<&str> {
    let header = header?;
    if !header.contains(BEARER_SCHEME) {
        return None;
    }

    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(token), None) => Some(token),
        _ => None,
    }
}
