//! Runtime wiring
//!
//! Builds the infrastructure adapters from [`AppConfig`] and hands them to
//! the application services as `Arc<dyn Port>`.

use notegate_application::{
    AccountService, AdminSeed, IdentityResolver, PasswordPolicy, RegistrationPolicy,
};
use notegate_domain::entities::Identity;
use notegate_domain::error::Result;
use notegate_domain::ports::{BreachChecker, CredentialHasher, TokenService};
use notegate_domain::repositories::IdentityRepository;
use notegate_infrastructure::config::AppConfig;
use notegate_infrastructure::config::loader::validate_app_config;
use notegate_infrastructure::{
    Argon2CredentialHasher, InMemoryIdentityRepository, JwtTokenService, PwnedPasswordsClient,
};
use std::sync::Arc;
use tracing::info;

/// Wired authentication core
pub struct AuthRuntime {
    config: AppConfig,
    tokens: Arc<dyn TokenService>,
    hasher: Arc<dyn CredentialHasher>,
    password_policy: PasswordPolicy,
    accounts: AccountService,
}

impl AuthRuntime {
    /// Wire the runtime over an in-memory identity store
    pub fn from_config(config: AppConfig) -> Result<Self> {
        Self::with_repository(config, Arc::new(InMemoryIdentityRepository::new()))
    }

    /// Wire the runtime over a caller-supplied identity store
    pub fn with_repository(
        config: AppConfig,
        identities: Arc<dyn IdentityRepository>,
    ) -> Result<Self> {
        validate_app_config(&config)?;
        let auth = &config.auth;

        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(&auth.token)?);
        let hasher: Arc<dyn CredentialHasher> =
            Arc::new(Argon2CredentialHasher::from_config(&auth.hashing)?);
        let breach: Arc<dyn BreachChecker> = Arc::new(PwnedPasswordsClient::new(&auth.breach)?);

        let password_policy = PasswordPolicy::with_min_length(breach, auth.password.min_length);
        let accounts = AccountService::new(
            identities,
            Arc::clone(&hasher),
            Arc::clone(&tokens),
            password_policy.clone(),
            RegistrationPolicy {
                activate_on_register: auth.registration.activate_on_register,
            },
        );

        info!(
            algorithm = %auth.token.algorithm,
            ttl_minutes = auth.token.ttl_minutes,
            "Authentication runtime ready"
        );

        Ok(Self {
            config,
            tokens,
            hasher,
            password_policy,
            accounts,
        })
    }

    /// Create the configured administrator, if any and not yet present
    pub async fn seed_admin(&self) -> Result<Option<Identity>> {
        let Some(admin) = &self.config.auth.admin else {
            return Ok(None);
        };

        self.accounts
            .bootstrap_admin(AdminSeed {
                username: admin.username.clone(),
                email: admin.email.clone(),
                password: admin.password.clone(),
            })
            .await
    }

    /// Loaded configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Account use cases
    pub fn accounts(&self) -> &AccountService {
        &self.accounts
    }

    /// Identity resolver for gating protected operations
    pub fn resolver(&self) -> &IdentityResolver {
        self.accounts.resolver()
    }

    /// Token service
    pub fn tokens(&self) -> &Arc<dyn TokenService> {
        &self.tokens
    }

    /// Credential hasher
    pub fn hasher(&self) -> &Arc<dyn CredentialHasher> {
        &self.hasher
    }

    /// Password policy
    pub fn password_policy(&self) -> &PasswordPolicy {
        &self.password_policy
    }
}
