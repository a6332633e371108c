//! Error handling types

use crate::value_objects::UnauthenticatedReason;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by dependency and ambient variants
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for notegate
///
/// Every variant is terminal for the current operation. Nothing in the
/// workspace retries on any of them.
#[derive(Error, Debug)]
pub enum Error {
    /// Token could not be decoded or its signature does not match
    #[error("Invalid authentication token")]
    InvalidToken,

    /// Token is well-formed but its expiration instant has passed
    #[error("Token has expired")]
    ExpiredToken,

    /// No usable credential, no request, or no identity behind the credential
    #[error("Authentication failed: {reason}")]
    AuthenticationFailure {
        /// Why the caller could not be authenticated
        reason: UnauthenticatedReason,
    },

    /// Authenticated identity lacks the privilege the operation needs
    #[error("{message}")]
    AuthorizationFailure {
        /// Description of the missing privilege
        message: String,
    },

    /// Password rejected by the password policy
    #[error("{message}")]
    WeakPassword {
        /// Description of the policy violation
        message: String,
    },

    /// Password does not match the stored digest, or the login email is unknown
    #[error("Invalid email or password")]
    InvalidCredential,

    /// Login attempted on an identity that is not active yet
    #[error("Account is not active yet, please confirm your email or contact support")]
    AccountInactive,

    /// An external dependency failed; never read as a successful check
    #[error("Dependency unavailable ({dependency}): {message}")]
    DependencyUnavailable {
        /// Name of the dependency that failed
        dependency: String,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Email address failed format validation
    #[error("Email is not valid: {email}")]
    InvalidEmail {
        /// The rejected address
        email: String,
    },

    /// A unique field is already taken by another identity
    #[error("{field} already exists")]
    AlreadyExists {
        /// Name of the conflicting field
        field: String,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Authentication and authorization error creation methods
impl Error {
    /// Create an authentication failure for the given reason
    pub fn authentication(reason: UnauthenticatedReason) -> Self {
        Self::AuthenticationFailure { reason }
    }

    /// Create an authorization failure with the default message
    pub fn unauthorized() -> Self {
        Self::authorization("You are not authorized to perform this action")
    }

    /// Create an authorization failure
    pub fn authorization<S: Into<String>>(message: S) -> Self {
        Self::AuthorizationFailure {
            message: message.into(),
        }
    }

    /// Create a weak password error
    pub fn weak_password<S: Into<String>>(message: S) -> Self {
        Self::WeakPassword {
            message: message.into(),
        }
    }
}

// Dependency error creation methods
impl Error {
    /// Create a dependency failure
    pub fn dependency<D: Into<String>, S: Into<String>>(dependency: D, message: S) -> Self {
        Self::DependencyUnavailable {
            dependency: dependency.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a dependency failure with source
    pub fn dependency_with_source<
        D: Into<String>,
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        dependency: D,
        message: S,
        source: E,
    ) -> Self {
        Self::DependencyUnavailable {
            dependency: dependency.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Account validation error creation methods
impl Error {
    /// Create an invalid email error
    pub fn invalid_email<S: Into<String>>(email: S) -> Self {
        Self::InvalidEmail {
            email: email.into(),
        }
    }

    /// Create an already-exists error
    pub fn already_exists<S: Into<String>>(field: S) -> Self {
        Self::AlreadyExists {
            field: field.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }
}

// Configuration, infrastructure and internal error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl Error {
    /// True for rejections caused by the caller's input or credentials.
    ///
    /// Dependency, configuration, infrastructure and internal failures are
    /// not client errors.
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            Self::DependencyUnavailable { .. }
                | Self::Configuration { .. }
                | Self::Infrastructure { .. }
                | Self::Internal { .. }
        )
    }
}
