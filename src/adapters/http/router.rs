//! Top-level HTTP router with shared middleware.

use std::sync::Arc;

use axum::error_handling::HandleErrorLayer;
use axum::http::HeaderValue;
use axum::{BoxError, Router};
use tower::timeout::error::Elapsed;
use tower::timeout::TimeoutLayer;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::errors::HttpError;
use super::helpers::server_error;
use super::protocol::HttpResponse;
use super::signup::{signup_routes, SignUpController};

/// Mounts every endpoint under `/api` and wraps it with tracing, request
/// timeout and CORS.
pub fn app_router(controller: Arc<SignUpController>, server: &ServerConfig) -> Router {
    Router::new()
        .nest("/api", signup_routes(controller))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(request_failed))
                .layer(TimeoutLayer::new(server.request_timeout())),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(server))
}

/// A request the middleware gave up on gets the same 500 body as any fault.
async fn request_failed(error: BoxError) -> HttpResponse<HttpError> {
    if error.is::<Elapsed>() {
        tracing::error!("request timed out");
    } else {
        tracing::error!(%error, "request failed in middleware");
    }
    server_error()
}

/// Any origin unless `cors_origins` lists some. Unparseable origins are skipped.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAccountRepository;
    use crate::application::AddAccountHandler;
    use crate::domain::foundation::DomainError;
    use crate::ports::{EmailValidator, Encrypter};
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use std::time::Duration;
    use tower::ServiceExt;

    struct AcceptAll;

    impl EmailValidator for AcceptAll {
        fn is_valid(&self, _email: &str) -> Result<bool, DomainError> {
            Ok(true)
        }
    }

    struct PrefixEncrypter;

    #[async_trait]
    impl Encrypter for PrefixEncrypter {
        async fn encrypt(&self, plaintext: &str) -> Result<String, DomainError> {
            Ok(format!("hashed:{}", plaintext.len()))
        }
    }

    /// Never finishes within a test's patience.
    struct StalledEncrypter;

    #[async_trait]
    impl Encrypter for StalledEncrypter {
        async fn encrypt(&self, _plaintext: &str) -> Result<String, DomainError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok("too_late".to_string())
        }
    }

    fn controller_with(encrypter: Arc<dyn Encrypter>) -> Arc<SignUpController> {
        let use_case = Arc::new(AddAccountHandler::new(
            encrypter,
            Arc::new(InMemoryAccountRepository::new()),
        ));
        Arc::new(SignUpController::new(Arc::new(AcceptAll), use_case))
    }

    fn controller() -> Arc<SignUpController> {
        controller_with(Arc::new(PrefixEncrypter))
    }

    fn signup_request(origin: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/signup")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ORIGIN, origin)
            .body(Body::from(
                r#"{"name":"n","email":"e@mail.com","password":"p","passwordConfirmation":"p"}"#,
            ))
            .unwrap()
    }

    #[tokio::test]
    async fn signup_is_mounted_under_api() {
        let app = app_router(controller(), &ServerConfig::default());

        let response = app.oneshot(signup_request("http://any.example")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn default_cors_allows_any_origin() {
        let app = app_router(controller(), &ServerConfig::default());

        let response = app.oneshot(signup_request("http://any.example")).await.unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn configured_cors_echoes_listed_origin_only() {
        let server = ServerConfig {
            cors_origins: Some("http://localhost:5173".to_string()),
            ..Default::default()
        };

        let allowed = app_router(controller(), &server)
            .oneshot(signup_request("http://localhost:5173"))
            .await
            .unwrap();
        let denied = app_router(controller(), &server)
            .oneshot(signup_request("http://evil.example"))
            .await
            .unwrap();

        assert_eq!(
            allowed.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
        assert!(denied.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }

    #[tokio::test]
    async fn unknown_path_is_404() {
        let app = app_router(controller(), &ServerConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/signup")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn timed_out_request_gets_internal_error_body() {
        let server = ServerConfig {
            request_timeout_secs: 1,
            ..Default::default()
        };
        let app = app_router(controller_with(Arc::new(StalledEncrypter)), &server);

        let response = app.oneshot(signup_request("http://any.example")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "InternalServerError",
                "message": "Internal Server Error: Try again later"
            })
        );
    }
}
