//! Argon2id password encrypter implementation.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::config::HashingConfig;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::Encrypter;

const OUTPUT_LENGTH: usize = 32;

/// Argon2id encrypter adapter.
///
/// Every call draws a fresh salt, so equal passwords hash to different PHC
/// strings. Hashing is CPU bound and runs on the blocking thread pool.
#[derive(Debug, Clone)]
pub struct Argon2Encrypter {
    params: Params,
}

impl Argon2Encrypter {
    /// Create a new encrypter with custom parameters.
    ///
    /// `memory_cost` is expressed in KiB.
    pub fn new(memory_cost: u32, iterations: u32, parallelism: u32) -> Result<Self, DomainError> {
        let params = Params::new(memory_cost, iterations, parallelism, Some(OUTPUT_LENGTH))
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::HashingFailed,
                    format!("Invalid argon2 parameters: {}", e),
                )
            })?;

        Ok(Self { params })
    }

    pub fn from_config(config: &HashingConfig) -> Result<Self, DomainError> {
        Self::new(config.memory_cost_kib, config.iterations, config.parallelism)
    }
}

fn hash_password(params: Params, password: &SecretString) -> Result<String, DomainError> {
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);

    argon2
        .hash_password(password.expose_secret().as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            DomainError::new(ErrorCode::HashingFailed, format!("Failed to hash password: {}", e))
        })
}

#[async_trait]
impl Encrypter for Argon2Encrypter {
    async fn encrypt(&self, plaintext: &str) -> Result<String, DomainError> {
        let params = self.params.clone();
        let password = SecretString::new(plaintext.to_owned());

        tokio::task::spawn_blocking(move || hash_password(params, &password))
            .await
            .map_err(|e| DomainError::internal(format!("Hashing task failed: {}", e)))?
    }
}
