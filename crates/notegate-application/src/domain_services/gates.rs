//! Authorization gates
//!
//! A gate runs before a protected operation. On failure the operation body
//! is never invoked; on success it receives the resolved identity.

use super::identity_resolver::IdentityResolver;
use notegate_domain::entities::{Identity, IdentityId};
use notegate_domain::error::{Error, Result};
use notegate_domain::ports::RequestContext;
use notegate_domain::value_objects::ResolvedIdentity;
use std::future::Future;
use tracing::debug;

/// Authorization predicate applied to a protected operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Any authenticated identity
    LoggedIn,
    /// Authenticated administrators only
    AdminOnly,
}

impl Gate {
    /// Evaluate the gate for `ctx`
    ///
    /// `LoggedIn` fails with `AuthenticationFailure` (or the token error)
    /// when no identity resolves. `AdminOnly` additionally fails with
    /// `AuthorizationFailure` for non-administrators.
    pub async fn check(
        self,
        resolver: &IdentityResolver,
        ctx: &dyn RequestContext,
    ) -> Result<ResolvedIdentity> {
        let resolved = resolver.authenticate(ctx).await?;

        if self == Self::AdminOnly && !resolved.identity.is_admin {
            debug!(identity = resolved.identity.id, "Admin gate denied");
            return Err(Error::unauthorized());
        }

        Ok(resolved)
    }

    /// Run `operation` only if the gate passes
    pub async fn guard<T, F, Fut>(
        self,
        resolver: &IdentityResolver,
        ctx: &dyn RequestContext,
        operation: F,
    ) -> Result<T>
    where
        F: FnOnce(ResolvedIdentity) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let resolved = self.check(resolver, ctx).await?;
        operation(resolved).await
    }
}

/// Grant access when `actor` owns `target` or is an administrator
pub fn ensure_owner_or_admin(actor: &Identity, target: IdentityId) -> Result<()> {
    if actor.owns_or_administers(target) {
        Ok(())
    } else {
        debug!(actor = actor.id, target, "Owner-or-admin check denied");
        Err(Error::unauthorized())
    }
}
