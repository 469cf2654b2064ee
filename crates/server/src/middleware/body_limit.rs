//! JSON envelope for oversized request bodies.
//!
//! `RequestBodyLimitLayer` answers a declared oversized body with a plain-text
//! `413`, and the `Bytes` extractor does the same when a streamed body runs
//! past the limit. Both are rewritten here so senders see the same
//! `{success, message}` shape as every other failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;

/// Replaces any `413` response with [`ApiError::PayloadTooLarge`].
///
/// Install with [`axum::middleware::map_response`] outside the body limit layer.
pub async fn payload_too_large_envelope(response: Response) -> Response {
    if response.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::PayloadTooLarge.into_response();
    }
    response
}
