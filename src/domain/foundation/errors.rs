//! Error types for the domain layer.

use std::error::Error;
use std::fmt;

/// Error codes for collaborator faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    HashingFailed,
    DatabaseError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::HashingFailed => "HASHING_FAILED",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// A fault raised by a port.
///
/// The signup controller is the only place that turns it into a
/// client-facing response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_code_and_message() {
        let err = DomainError::new(ErrorCode::DatabaseError, "connection refused");
        assert_eq!(err.to_string(), "[DATABASE_ERROR] connection refused");
    }

    #[test]
    fn internal_uses_internal_code() {
        let err = DomainError::internal("validator exploded");
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(err.message(), "validator exploded");
    }

    #[test]
    fn hashing_code_is_screaming_snake_case() {
        assert_eq!(ErrorCode::HashingFailed.to_string(), "HASHING_FAILED");
    }
}
