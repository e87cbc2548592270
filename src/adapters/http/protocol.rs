//! Transport-neutral request/response shapes shared by controllers.

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

/// Inbound request as seen by a controller.
///
/// The body is an untyped JSON value; controllers decode and validate it.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub body: Value,
}

impl HttpRequest {
    pub fn new(body: Value) -> Self {
        Self { body }
    }
}

/// Outbound response produced by a controller.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse<T> {
    pub status_code: StatusCode,
    pub body: T,
}

impl<T: Serialize> IntoResponse for HttpResponse<T> {
    fn into_response(self) -> Response {
        (self.status_code, Json(self.body)).into_response()
    }
}

/// A boundary component that turns an [`HttpRequest`] into an [`HttpResponse`].
///
/// `handle` is infallible: every failure is already mapped to a response.
#[async_trait]
pub trait Controller: Send + Sync {
    type Body: Serialize + Send;

    async fn handle(&self, request: HttpRequest) -> HttpResponse<Self::Body>;
}
