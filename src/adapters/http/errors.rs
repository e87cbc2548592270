//! Client-facing errors returned in response bodies.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Errors a controller reports to the client.
///
/// Serialized as `{ "name": ..., "message": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    /// A required field was absent.
    #[error("Missing param: {0}")]
    MissingParam(String),

    /// A field failed a semantic check.
    #[error("Invalid param: {0}")]
    InvalidParam(String),

    /// Any unexpected collaborator fault. Never carries the underlying cause.
    #[error("Internal Server Error: Try again later")]
    InternalServer,
}

impl HttpError {
    pub fn missing_param(field: impl Into<String>) -> Self {
        Self::MissingParam(field.into())
    }

    pub fn invalid_param(field: impl Into<String>) -> Self {
        Self::InvalidParam(field.into())
    }

    /// Error kind as exposed to clients.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MissingParam(_) => "MissingParamError",
            Self::InvalidParam(_) => "InvalidParamError",
            Self::InternalServer => "InternalServerError",
        }
    }
}

impl Serialize for HttpError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("HttpError", 2)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}
