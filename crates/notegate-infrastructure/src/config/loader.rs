//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables
//! and default values, merged with Figment.

use crate::config::{AppConfig, AuthConfig, LoggingConfig};
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::parse_log_level;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use notegate_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default location found)
    /// 3. Environment variables (e.g. `NOTEGATE__AUTH__TOKEN__SECRET`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = self.source_path() {
            if !config_path.is_file() {
                return Err(Error::configuration(format!(
                    "Configuration file not found: {}",
                    config_path.display()
                )));
            }
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .map_err(|e| Error::configuration(format!("Failed to extract configuration: {e}")))?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).config_context("Failed to write config file")?;

        Ok(())
    }

    /// The TOML file `load` reads: the explicit path, else the first default
    /// location that exists
    pub fn source_path(&self) -> Option<PathBuf> {
        self.config_path
            .clone()
            .or_else(Self::find_default_config_path)
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join("config")
                .join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
        ];

        candidates.into_iter().find(|path| path.is_file())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Runs after extraction; a value that deserializes but is unusable is a
/// configuration error, never silently corrected.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_token_config(&config.auth)?;
    validate_password_config(&config.auth)?;
    validate_breach_config(&config.auth)?;
    validate_hashing_config(&config.auth)?;
    validate_admin_seed(&config.auth)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

fn validate_token_config(auth: &AuthConfig) -> Result<()> {
    if auth.token.secret.is_empty() {
        return Err(Error::configuration(
            "Token secret is required (auth.token.secret or NOTEGATE__AUTH__TOKEN__SECRET)",
        ));
    }
    if auth.token.secret.len() < TOKEN_MIN_SECRET_LENGTH {
        return Err(Error::configuration(format!(
            "Token secret should be at least {TOKEN_MIN_SECRET_LENGTH} characters long"
        )));
    }
    if auth.token.ttl_minutes <= 0 {
        return Err(Error::configuration("Token TTL must be greater than 0"));
    }
    Ok(())
}

fn validate_password_config(auth: &AuthConfig) -> Result<()> {
    if auth.password.min_length == 0 {
        return Err(Error::configuration(
            "Minimum password length must be greater than 0",
        ));
    }
    Ok(())
}

fn validate_breach_config(auth: &AuthConfig) -> Result<()> {
    if auth.breach.timeout_secs == 0 {
        return Err(Error::configuration(
            "Breach check timeout must be greater than 0",
        ));
    }
    reqwest::Url::parse(&auth.breach.base_url).config_context(format!(
        "Invalid breach service URL '{}'",
        auth.breach.base_url
    ))?;
    if !auth.breach.base_url.ends_with('/') {
        return Err(Error::configuration(
            "Breach service URL must end with '/'",
        ));
    }
    Ok(())
}

fn validate_hashing_config(auth: &AuthConfig) -> Result<()> {
    let hashing = &auth.hashing;
    if hashing.iterations == 0 || hashing.parallelism == 0 {
        return Err(Error::configuration(
            "Hashing iterations and parallelism must be greater than 0",
        ));
    }
    if hashing.memory_kib < 8 * hashing.parallelism {
        return Err(Error::configuration(
            "Hashing memory must be at least 8 KiB per lane",
        ));
    }
    Ok(())
}

fn validate_admin_seed(auth: &AuthConfig) -> Result<()> {
    if let Some(admin) = &auth.admin {
        if admin.username.is_empty() || admin.email.is_empty() || admin.password.is_empty() {
            return Err(Error::configuration(
                "Admin seed requires username, email and password",
            ));
        }
    }
    Ok(())
}

fn validate_logging_config(logging: &LoggingConfig) -> Result<()> {
    parse_log_level(&logging.level).map(|_| ())
}

/// Configuration builder for programmatic configuration
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Set the token signing secret
    pub fn with_token_secret<S: Into<String>>(mut self, secret: S) -> Self {
        self.config.auth.token.secret = secret.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
