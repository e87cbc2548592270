//! Encrypter port - One-way password hashing.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// Port for turning a plaintext secret into its stored representation.
///
/// # Contract
///
/// Implementations must:
/// - Be one-way; the plaintext cannot be recovered from the output
/// - Mix in a random salt, so hashing the same input twice may give
///   different outputs (callers must not rely on stable output)
/// - Report failures as `DomainError` instead of panicking
#[async_trait]
pub trait Encrypter: Send + Sync {
    /// Hash `plaintext` and return the stored representation.
    async fn encrypt(&self, plaintext: &str) -> Result<String, DomainError>;
}
