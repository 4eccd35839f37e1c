//! HTTP surface: feature routes, health check and the middleware stack

pub mod response;

use axum::{extract::State, http::Uri, routing::get, Router};
use serde_json::{json, Value};
use tower_http::compression::CompressionLayer;

use crate::config::Config;
use crate::error::AppError;
use crate::features;
use crate::middleware;
use crate::store::SharedStore;
use response::ApiResponse;

/// Build the application router over `store`
///
/// Layers apply innermost first: compression, request tracing, CORS, then
/// panic recovery around everything.
pub fn create_router(store: SharedStore, config: &Config) -> Router {
    let health = Router::new()
        .route("/health", get(health_check))
        .with_state(store.clone());

    Router::new()
        .merge(health)
        .merge(features::router(store))
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(&config.cors))
        .layer(middleware::catch_panic_layer())
}

/// Health check handler
async fn health_check(State(store): State<SharedStore>) -> Result<ApiResponse<Value>, AppError> {
    store.ping().await.map_err(|e| {
        tracing::error!("Store health check failed: {}", e);
        AppError::from(e)
    })?;

    Ok(ApiResponse::success(json!({
        "status": "healthy",
        "database": "connected",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

#[cfg(test)]
mod tests {
    use crate::features::shared::test_helpers::*;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::body::Body;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let (_store, app) = test_app();
        let (status, body) = send(&app, get("/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], "healthy");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (_store, app) = test_app();
        let (status, body) = send(&app, get("/nowhere")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["message"], "No route for /nowhere");
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_json_404() {
        let (_store, app) = test_app();

        for uri in ["/venues/abc", "/artists/xyz/edit"] {
            let (status, body) = send(&app, get(uri)).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(body["success"], false);
            assert_eq!(body["error"]["code"], "NOT_FOUND");
        }

        let (status, body) = send(&app, delete("/artists/1e3")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let (_store, app) = test_app();
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/venues/create")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert!(response.status().is_success());
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}
