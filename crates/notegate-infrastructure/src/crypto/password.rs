//! Credential hasher using Argon2id

use crate::config::HashingConfig;
use argon2::{
    Algorithm, Argon2, Params, PasswordHasher, PasswordVerifier, Version,
    password_hash::{self, PasswordHash, SaltString, rand_core::OsRng},
};
use notegate_domain::error::{Error, Result};
use notegate_domain::ports::CredentialHasher;

/// Argon2id credential hasher
///
/// Produces PHC strings (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`) with a
/// fresh random salt per call. Verification reads the parameters from the
/// digest itself, so digests made under an older work factor still verify.
#[derive(Clone)]
pub struct Argon2CredentialHasher {
    argon2: Argon2<'static>,
}

impl Argon2CredentialHasher {
    /// Create a hasher with the Argon2id defaults
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Create a hasher with an explicit work factor
    pub fn from_config(config: &HashingConfig) -> Result<Self> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|e| Error::configuration(format!("Invalid Argon2 parameters: {e}")))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl Default for Argon2CredentialHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialHasher for Argon2CredentialHasher {
    fn hash(&self, plaintext: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);

        let digest = self
            .argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| Error::infrastructure(format!("Password hashing failed: {e}")))?;

        Ok(digest.to_string())
    }

    fn verify(&self, digest: &str, plaintext: &str) -> Result<()> {
        let parsed = PasswordHash::new(digest)
            .map_err(|e| Error::infrastructure(format!("Invalid password hash format: {e}")))?;

        match self.argon2.verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(()),
            Err(password_hash::Error::Password) => Err(Error::InvalidCredential),
            Err(e) => Err(Error::infrastructure(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}
