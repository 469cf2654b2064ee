//! Request ID propagation.
//!
//! Every request gets an `x-request-id`: the caller's value when supplied,
//! a fresh UUID v4 otherwise. The same value is copied onto the response and
//! attached to handler log lines, so a sender can correlate a rejected alert
//! with the server's warning.

use axum::http::{HeaderMap, HeaderName};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

/// The header name for request IDs.
pub static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Creates the request ID layer pair.
///
/// Apply `propagate` before `set` (layers run in reverse order of application):
///
/// ```ignore
/// let (set_layer, propagate_layer) = request_id_layers();
/// let app = Router::new()
///     .route("/", get(handler))
///     .layer(propagate_layer)
///     .layer(set_layer);
/// ```
#[must_use]
pub fn request_id_layers() -> (SetRequestIdLayer<MakeRequestUuid>, PropagateRequestIdLayer) {
    (
        SetRequestIdLayer::new(X_REQUEST_ID.clone(), MakeRequestUuid),
        PropagateRequestIdLayer::new(X_REQUEST_ID.clone()),
    )
}

/// Reads the request ID set by [`request_id_layers`], or `"-"` when absent.
#[must_use]
pub fn request_id(headers: &HeaderMap) -> &str {
    headers.get(&X_REQUEST_ID).and_then(|v| v.to_str().ok()).unwrap_or("-")
}
