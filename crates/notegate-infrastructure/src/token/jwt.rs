//! JWT token service
//!
//! HMAC-signed JSON Web Tokens carrying `{sub, exp}`. Expiration is checked
//! by hand after decoding so that a token which fails to decode is always
//! reported as invalid, whatever its expiration, and so that a token is
//! already expired at the exact `exp` second.

use crate::config::{SigningAlgorithm, TokenConfig};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use notegate_domain::error::{Error, Result};
use notegate_domain::ports::TokenService;
use notegate_domain::value_objects::TokenClaims;
use tracing::debug;

impl From<SigningAlgorithm> for Algorithm {
    fn from(algorithm: SigningAlgorithm) -> Self {
        match algorithm {
            SigningAlgorithm::HS256 => Algorithm::HS256,
            SigningAlgorithm::HS384 => Algorithm::HS384,
            SigningAlgorithm::HS512 => Algorithm::HS512,
        }
    }
}

/// JWT implementation of [`TokenService`]
///
/// Secret, algorithm and TTL are fixed at construction.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl_secs: i64,
}

impl JwtTokenService {
    /// Create a token service from its configuration
    pub fn new(config: &TokenConfig) -> Result<Self> {
        if config.secret.is_empty() {
            return Err(Error::configuration("Token secret cannot be empty"));
        }
        let ttl_secs = config
            .ttl_minutes
            .checked_mul(60)
            .filter(|secs| *secs > 0)
            .ok_or_else(|| {
                Error::configuration("Token TTL must be a positive number of minutes")
            })?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            algorithm: config.algorithm.into(),
            ttl_secs,
        })
    }

    /// Issue a token for `subject` as if the current instant were `now`
    pub fn issue_at(&self, subject: &str, now: i64) -> Result<String> {
        let claims = TokenClaims::new(subject, now.saturating_add(self.ttl_secs));

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| Error::internal(format!("Token generation failed: {e}")))
    }

    fn decode_claims(&self, token: &str) -> Result<TokenClaims> {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.leeway = 0;

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(error = %e, "Token rejected");
                Error::InvalidToken
            })
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, subject: &str) -> Result<String> {
        self.issue_at(subject, Utc::now().timestamp())
    }

    fn verify(&self, token: &str) -> Result<TokenClaims> {
        self.verify_at(token, Utc::now().timestamp())
    }

    fn verify_at(&self, token: &str, now: i64) -> Result<TokenClaims> {
        let claims = self.decode_claims(token)?;
        if claims.is_expired_at(now) {
            debug!(exp = claims.exp, now, "Token expired");
            return Err(Error::ExpiredToken);
        }
        Ok(claims)
    }

    fn renew(&self, token: &str) -> Result<String> {
        let claims = self.verify(token)?;
        self.issue(&claims.sub)
    }
}
