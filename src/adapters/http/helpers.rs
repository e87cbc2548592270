//! Response constructors used by controllers.

use axum::http::StatusCode;

use super::errors::HttpError;
use super::protocol::HttpResponse;

/// 400 carrying a validation error.
pub fn bad_request<T: From<HttpError>>(error: HttpError) -> HttpResponse<T> {
    HttpResponse {
        status_code: StatusCode::BAD_REQUEST,
        body: error.into(),
    }
}

/// 500 with the generic internal error body.
pub fn server_error<T: From<HttpError>>() -> HttpResponse<T> {
    HttpResponse {
        status_code: StatusCode::INTERNAL_SERVER_ERROR,
        body: HttpError::InternalServer.into(),
    }
}

/// 200 carrying `data`.
pub fn ok<T>(data: impl Into<T>) -> HttpResponse<T> {
    HttpResponse {
        status_code: StatusCode::OK,
        body: data.into(),
    }
}
