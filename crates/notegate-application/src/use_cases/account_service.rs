//! Account Service Use Case
//!
//! Registration, login, token renewal, account update, identity queries and
//! administrator bootstrap, each expressed over the domain ports. Every
//! protected operation runs its gate before touching the repository.

use crate::domain_services::{
    Gate, IdentityResolver, PasswordPolicy, ensure_owner_or_admin, ensure_valid_email,
};
use chrono::Utc;
use notegate_domain::entities::{
    Identity, IdentityChanges, IdentityId, IdentityPatch, NewIdentity,
};
use notegate_domain::error::{Error, Result};
use notegate_domain::ports::{CredentialHasher, RequestContext, TokenService};
use notegate_domain::repositories::IdentityRepository;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Registration input
#[derive(Clone)]
pub struct RegisterRequest {
    /// Requested username
    pub username: String,
    /// Requested email
    pub email: String,
    /// Plaintext password
    pub password: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Administrator created at startup when missing
#[derive(Clone)]
pub struct AdminSeed {
    /// Administrator username
    pub username: String,
    /// Administrator email
    pub email: String,
    /// Plaintext password
    pub password: String,
}

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Freshly issued bearer token
    pub token: String,
    /// The identity, with `last_login` stamped
    pub identity: Identity,
}

/// Registration behaviour
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationPolicy {
    /// New identities are active immediately instead of awaiting confirmation
    pub activate_on_register: bool,
}

/// Account use cases
#[derive(Clone)]
pub struct AccountService {
    identities: Arc<dyn IdentityRepository>,
    hasher: Arc<dyn CredentialHasher>,
    tokens: Arc<dyn TokenService>,
    password_policy: PasswordPolicy,
    resolver: IdentityResolver,
    registration: RegistrationPolicy,
}

impl AccountService {
    /// Create the service with injected dependencies
    pub fn new(
        identities: Arc<dyn IdentityRepository>,
        hasher: Arc<dyn CredentialHasher>,
        tokens: Arc<dyn TokenService>,
        password_policy: PasswordPolicy,
        registration: RegistrationPolicy,
    ) -> Self {
        let resolver = IdentityResolver::new(Arc::clone(&tokens), Arc::clone(&identities));
        Self {
            identities,
            hasher,
            tokens,
            password_policy,
            resolver,
            registration,
        }
    }

    /// The identity resolver shared by the gates of this service
    pub fn resolver(&self) -> &IdentityResolver {
        &self.resolver
    }

    /// Register a new identity
    ///
    /// Email format, email uniqueness, username uniqueness and the password
    /// policy are checked in that order, all before anything is persisted.
    pub async fn register(&self, request: RegisterRequest) -> Result<Identity> {
        ensure_valid_email(&request.email)?;
        self.ensure_email_free(&request.email).await?;
        self.ensure_username_free(&request.username).await?;
        self.password_policy.ensure_safe(&request.password).await?;

        let password_digest = self.hasher.hash(&request.password)?;
        let identity = self
            .identities
            .insert(NewIdentity {
                username: request.username,
                email: request.email,
                password_digest,
                is_admin: false,
                is_active: self.registration.activate_on_register,
            })
            .await?;

        info!(identity = identity.id, active = identity.is_active, "Identity registered");
        Ok(identity)
    }

    /// Exchange email and password for a bearer token
    ///
    /// An unknown email and a wrong password fail identically. The password
    /// is verified before the active flag is looked at.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        let Some(identity) = self.identities.find_by_email(email).await? else {
            debug!("Login rejected: unknown email");
            return Err(Error::InvalidCredential);
        };

        self.hasher
            .verify(&identity.password_digest, password)
            .inspect_err(|_| debug!(identity = identity.id, "Login rejected: bad password"))?;

        if !identity.is_active {
            debug!(identity = identity.id, "Login rejected: inactive account");
            return Err(Error::AccountInactive);
        }

        let token = self.tokens.issue(&identity.email)?;
        let identity = self
            .identities
            .touch_last_login(identity.id, Utc::now())
            .await?;

        info!(identity = identity.id, "Identity logged in");
        Ok(LoginOutcome { token, identity })
    }

    /// Re-issue the caller's credential with a fresh expiration
    pub async fn renew_token(&self, ctx: &dyn RequestContext) -> Result<String> {
        Gate::LoggedIn
            .guard(&self.resolver, ctx, |resolved| async move {
                self.tokens.renew(&resolved.token)
            })
            .await
    }

    /// Fetch an identity the caller owns or administers
    pub async fn get_user(&self, ctx: &dyn RequestContext, id: IdentityId) -> Result<Identity> {
        Gate::LoggedIn
            .guard(&self.resolver, ctx, |resolved| async move {
                ensure_owner_or_admin(&resolved.identity, id)?;
                self.load(id).await
            })
            .await
    }

    /// List every identity (administrators only)
    pub async fn list_users(&self, ctx: &dyn RequestContext) -> Result<Vec<Identity>> {
        Gate::AdminOnly
            .guard(&self.resolver, ctx, |_| async move {
                self.identities.list().await
            })
            .await
    }

    /// Apply `changes` to the identity `target`
    ///
    /// The caller must own `target` or be an administrator. Changed fields
    /// go through the same checks as registration.
    pub async fn update_user(
        &self,
        ctx: &dyn RequestContext,
        target: IdentityId,
        changes: IdentityChanges,
    ) -> Result<Identity> {
        Gate::LoggedIn
            .guard(&self.resolver, ctx, |resolved| async move {
                ensure_owner_or_admin(&resolved.identity, target)?;
                self.apply_changes(target, changes).await
            })
            .await
    }

    /// Create the seeded administrator unless its email is already registered
    ///
    /// Returns `None` when the administrator already exists. The password is
    /// operator-supplied and is only hashed, not checked against the policy.
    pub async fn bootstrap_admin(&self, seed: AdminSeed) -> Result<Option<Identity>> {
        if self.identities.find_by_email(&seed.email).await?.is_some() {
            debug!("Admin seed already present");
            return Ok(None);
        }

        let password_digest = self.hasher.hash(&seed.password)?;
        let admin = self
            .identities
            .insert(NewIdentity {
                username: seed.username,
                email: seed.email,
                password_digest,
                is_admin: true,
                is_active: true,
            })
            .await?;

        info!(identity = admin.id, "Administrator seeded");
        Ok(Some(admin))
    }

    async fn apply_changes(&self, target: IdentityId, changes: IdentityChanges) -> Result<Identity> {
        let current = self.load(target).await?;
        if changes.is_empty() {
            return Ok(current);
        }

        let mut patch = IdentityPatch::default();
        if let Some(email) = changes.email.filter(|email| *email != current.email) {
            ensure_valid_email(&email)?;
            self.ensure_email_free(&email).await?;
            patch.email = Some(email);
        }
        if let Some(username) = changes.username.filter(|name| *name != current.username) {
            self.ensure_username_free(&username).await?;
            patch.username = Some(username);
        }
        if let Some(password) = changes.password {
            self.password_policy.ensure_safe(&password).await?;
            patch.password_digest = Some(self.hasher.hash(&password)?);
        }

        let identity = self.identities.update(target, patch).await?;
        info!(identity = identity.id, "Identity updated");
        Ok(identity)
    }

    async fn load(&self, id: IdentityId) -> Result<Identity> {
        self.identities
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("identity {id}")))
    }

    async fn ensure_email_free(&self, email: &str) -> Result<()> {
        if self.identities.find_by_email(email).await?.is_some() {
            return Err(Error::already_exists("Email"));
        }
        Ok(())
    }

    async fn ensure_username_free(&self, username: &str) -> Result<()> {
        if self.identities.find_by_username(username).await?.is_some() {
            return Err(Error::already_exists("Username"));
        }
        Ok(())
    }
}
