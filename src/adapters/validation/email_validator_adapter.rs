//! Email validator backed by the `validator` crate.

use validator::ValidateEmail;

use crate::domain::foundation::DomainError;
use crate::ports::EmailValidator;

/// Syntax-only email checker (HTML5 / RFC 5322 rules from `validator`).
///
/// Never faults: every input gets a yes/no answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidatorAdapter;

impl EmailValidatorAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> Result<bool, DomainError> {
        Ok(email.validate_email())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_email() {
        let sut = EmailValidatorAdapter::new();
        assert!(sut.is_valid("valid_email@mail.com").unwrap());
    }

    #[test]
    fn rejects_missing_at_sign() {
        let sut = EmailValidatorAdapter::new();
        assert!(!sut.is_valid("invalid_email.mail.com").unwrap());
    }

    #[test]
    fn rejects_missing_domain() {
        let sut = EmailValidatorAdapter::new();
        assert!(!sut.is_valid("invalid@").unwrap());
    }

    #[test]
    fn rejects_empty_string() {
        let sut = EmailValidatorAdapter::new();
        assert!(!sut.is_valid("").unwrap());
    }
}
