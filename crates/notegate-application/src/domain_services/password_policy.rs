//! Password policy
//!
//! A password is acceptable when it has at least the configured number of
//! characters and the breach checker does not report it. Length is checked
//! first, so short passwords never reach the network.

use notegate_domain::constants::MIN_PASSWORD_LENGTH;
use notegate_domain::error::{Error, Result};
use notegate_domain::ports::BreachChecker;
use std::sync::Arc;
use tracing::debug;

const WEAK_PASSWORD_MESSAGE: &str = "Your password is not safe enough";

/// Rules applied to every new or changed password
#[derive(Clone)]
pub struct PasswordPolicy {
    min_length: usize,
    breach_checker: Arc<dyn BreachChecker>,
}

impl PasswordPolicy {
    /// Policy with the default minimum length
    pub fn new(breach_checker: Arc<dyn BreachChecker>) -> Self {
        Self::with_min_length(breach_checker, MIN_PASSWORD_LENGTH)
    }

    /// Policy with an explicit minimum length (in characters)
    pub fn with_min_length(breach_checker: Arc<dyn BreachChecker>, min_length: usize) -> Self {
        Self {
            min_length,
            breach_checker,
        }
    }

    /// Minimum length in characters
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Fail with [`Error::WeakPassword`] unless `password` is acceptable
    ///
    /// A breach checker failure propagates as
    /// [`Error::DependencyUnavailable`]; it never counts as a pass.
    pub async fn ensure_safe(&self, password: &str) -> Result<()> {
        if password.chars().count() < self.min_length {
            debug!(min_length = self.min_length, "Password rejected: too short");
            return Err(Error::weak_password(WEAK_PASSWORD_MESSAGE));
        }

        if self.breach_checker.is_breached(password).await? {
            debug!("Password rejected: found in breach corpus");
            return Err(Error::weak_password(WEAK_PASSWORD_MESSAGE));
        }

        Ok(())
    }
}
