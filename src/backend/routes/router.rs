/**
 * Router Configuration
 *
 * Combines the API routes, static uploads and the cross-cutting layers
 * into a single Axum router.
 *
 * # Layers
 *
 * - `CorsLayer` allowing the configured frontend origins with credentials
 * - `TraceLayer` for request/response logging
 *
 * Unknown paths get `404 { "message": "Not found" }`.
 */

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    Json, Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Router<()> {
    let router = configure_api_routes(Router::new(), &app_state);

    router
        .nest_service("/uploads", ServeDir::new(&config.upload_dir))
        .fallback(not_found)
        .layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// CORS for the browser frontend
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(MessageResponse::new("Not found")))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;
    use crate::backend::auth::service::AuthService;
    use crate::backend::auth::sessions::TokenIssuer;
    use crate::backend::auth::store::{CredentialStores, MemoryCredentialStore};
    use crate::backend::notify::DisabledNotifier;

    fn test_router() -> Router {
        let config = ServerConfig::from_lookup(|key| match key {
            "PRIMARY_DATABASE_URL" => Some("postgres://unused/car_portal".to_string()),
            "JWT_SECRET" => Some("router-secret".to_string()),
            _ => None,
        })
        .unwrap();

        let auth = AuthService::new(
            CredentialStores::new(Arc::new(MemoryCredentialStore::new())),
            TokenIssuer::new(&config.jwt_secret),
            Arc::new(DisabledNotifier),
            config.frontend_url.clone(),
        );
        create_router(AppState::new(auth), &config)
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_configured_origin() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/auth/login")
            .header(header::ORIGIN, "http://localhost:5173")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();

        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
    }

    #[tokio::test]
    async fn test_cors_rejects_other_origin() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/auth/login")
            .header(header::ORIGIN, "https://evil.example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn test_fallback_returns_json_404() {
        let request = Request::builder()
            .uri("/does-not-exist")
            .body(Body::empty())
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Not found");
    }

    #[test]
    fn test_invalid_origin_is_skipped() {
        // Must not panic on a value that is not a valid header
        let _ = cors_layer(&["http://ok.example.com".to_string(), "bad\norigin".to_string()]);
    }
}
