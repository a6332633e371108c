//! Pwned Passwords range client
//!
//! k-anonymity lookup: only the first five hex characters of the password's
//! SHA-1 leave the process. The service answers with every known suffix for
//! that prefix and the match happens locally.

use crate::config::BreachConfig;
use crate::constants::BREACH_DEPENDENCY_NAME;
use crate::error_ext::ErrorContext;
use async_trait::async_trait;
use notegate_domain::constants::BREACH_PREFIX_LENGTH;
use notegate_domain::error::{Error, Result};
use notegate_domain::ports::BreachChecker;
use reqwest::Client;
use sha1::{Digest, Sha1};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Breach checker backed by the Pwned Passwords range API
///
/// Fails closed: transport errors, timeouts, non-2xx statuses and bodies
/// that do not parse are all [`Error::DependencyUnavailable`].
#[derive(Clone)]
pub struct PwnedPasswordsClient {
    client: Client,
    base_url: String,
    threshold: u64,
    timeout: Duration,
}

impl PwnedPasswordsClient {
    /// Build a client with its own HTTP connection pool
    pub fn new(config: &BreachConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!("notegate/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self::with_client(client, config, timeout))
    }

    /// Build a client around an existing `reqwest::Client`
    pub fn with_client(client: Client, config: &BreachConfig, timeout: Duration) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            threshold: config.threshold,
            timeout,
        }
    }

    async fn fetch_range(&self, prefix: &str) -> Result<String> {
        let url = format!("{}{prefix}", self.base_url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(prefix, error = %e, "Breach lookup request failed");
            if e.is_timeout() {
                Error::dependency_with_source(
                    BREACH_DEPENDENCY_NAME,
                    format!("Request timed out after {:?}", self.timeout),
                    e,
                )
            } else {
                Error::dependency_with_source(BREACH_DEPENDENCY_NAME, "Request failed", e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(prefix, %status, "Breach lookup returned an error status");
            return Err(Error::dependency(
                BREACH_DEPENDENCY_NAME,
                format!("Unexpected status {status}"),
            ));
        }

        response
            .text()
            .await
            .network_context(BREACH_DEPENDENCY_NAME, "Failed to read range response")
    }
}

#[async_trait]
impl BreachChecker for PwnedPasswordsClient {
    async fn is_breached(&self, plaintext: &str) -> Result<bool> {
        let (prefix, suffix) = split_digest(plaintext);
        let body = self.fetch_range(&prefix).await?;
        let range = parse_range(&body).inspect_err(|e| {
            warn!(prefix = %prefix, error = %e, "Breach lookup response did not parse");
        })?;

        let count = range.get(&suffix).copied().unwrap_or(0);
        debug!(prefix = %prefix, count, threshold = self.threshold, "Breach lookup completed");

        Ok(count > self.threshold)
    }
}

/// Uppercase SHA-1 hex of `plaintext`, split into prefix and suffix
///
/// The prefix is [`BREACH_PREFIX_LENGTH`] characters, the suffix the
/// remaining 35.
pub fn split_digest(plaintext: &str) -> (String, String) {
    let digest = hex::encode_upper(Sha1::digest(plaintext.as_bytes()));
    let (prefix, suffix) = digest.split_at(BREACH_PREFIX_LENGTH);
    (prefix.to_string(), suffix.to_string())
}

/// Parse a range response into suffix -> occurrence count
///
/// Lines are `SUFFIX:COUNT` separated by CRLF. Bare LF is accepted and
/// blank lines are skipped. Suffixes are normalized to uppercase.
pub fn parse_range(body: &str) -> Result<HashMap<String, u64>> {
    let mut range = HashMap::new();

    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (suffix, count) = line.split_once(':').ok_or_else(|| {
            Error::dependency(
                BREACH_DEPENDENCY_NAME,
                format!("Malformed range line: {line}"),
            )
        })?;
        let count = count.trim().parse::<u64>().network_context(
            BREACH_DEPENDENCY_NAME,
            format!("Malformed occurrence count in line: {line}"),
        )?;

        range.insert(suffix.trim().to_ascii_uppercase(), count);
    }

    Ok(range)
}
