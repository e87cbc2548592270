//! HTTP routes for signup.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

use crate::adapters::http::protocol::{Controller, HttpRequest};

use super::controller::SignUpController;

/// Bridges axum to a [`Controller`]: the JSON body goes in as an
/// [`HttpRequest`], the controller's response comes back out as-is.
pub async fn adapt_route<C>(State(controller): State<Arc<C>>, Json(body): Json<Value>) -> Response
where
    C: Controller + 'static,
{
    controller.handle(HttpRequest::new(body)).await.into_response()
}

/// Creates the signup router.
pub fn signup_routes(controller: Arc<SignUpController>) -> Router {
    Router::new()
        .route("/signup", post(adapt_route::<SignUpController>))
        .with_state(controller)
}
