//! EmailValidator port - Email syntax check.

use crate::domain::foundation::DomainError;

/// Port for checking whether a string is a syntactically valid email address.
///
/// The check is synchronous and pure. An `Err` means the checker itself
/// failed, which is different from answering `Ok(false)`.
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> Result<bool, DomainError>;
}
