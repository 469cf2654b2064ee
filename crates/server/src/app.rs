//! Router assembly.
//!
//! Builds the complete HTTP application from an [`AppState`] and the loaded
//! [`AppConfig`]. The binary and the integration tests share this entry point,
//! so the tests exercise exactly the stack that is served.

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, middleware::map_response, routing::get, Router};
use beacon_core::{
    alerts::AlertBuffer,
    config::{AppConfig, HEALTH_PATH},
};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::limit::RequestBodyLimitLayer;

use crate::{middleware, router};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub buffer: Arc<AlertBuffer>,
}

impl AppState {
    #[must_use]
    pub fn new(buffer: Arc<AlertBuffer>) -> Self {
        Self { buffer }
    }

    /// State with an empty buffer of the configured capacity.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Arc::new(AlertBuffer::new(config.alerts.capacity)))
    }
}

/// Builds the application router.
///
/// Routes:
/// - `GET|POST|OPTIONS <webhook_path>`; any other method, `HEAD` included,
///   answers `405`
/// - `GET /health`
///
/// Every response carries the CORS headers and an `x-request-id`.
pub fn create_app(state: AppState, config: &AppConfig) -> Router {
    let (set_request_id, propagate_request_id) = middleware::request_id_layers();

    // `get` also serves HEAD unless a HEAD handler is registered
    let webhook = get(router::list_alerts)
        .head(router::method_not_allowed)
        .post(router::ingest_alert)
        .options(router::preflight)
        .fallback(router::method_not_allowed);

    let app = Router::new()
        .route(HEALTH_PATH, get(router::handle_health))
        .route(&config.server.webhook_path, webhook)
        .with_state(state)
        // The size limit is enforced by `RequestBodyLimitLayer` instead
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.server.max_body_bytes))
        .layer(map_response(middleware::payload_too_large_envelope))
        .layer(ConcurrencyLimitLayer::new(config.server.max_concurrent_requests))
        // Layers are applied in reverse order, so propagate runs after set
        .layer(propagate_request_id)
        .layer(set_request_id);

    middleware::with_cors_headers(app)
}
