//! Request-boundary errors and their HTTP rendering.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::types::{
    ErrorResponse, InvalidAlertResponse, INTERNAL_SERVER_ERROR, INVALID_ALERT_FORMAT,
    METHOD_NOT_ALLOWED, PAYLOAD_TOO_LARGE,
};

/// Everything a webhook request can fail with. None of these are fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The message did not match the signal format.
    #[error("Invalid alert format")]
    InvalidAlert { received_data: Value },

    /// The body could not be decoded (bad JSON, non UTF-8 text).
    #[error("Unreadable request body: {0}")]
    UnreadableBody(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The body exceeded `server.max_body_bytes`.
    #[error("Payload too large")]
    PayloadTooLarge,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidAlert { .. } => StatusCode::BAD_REQUEST,
            Self::UnreadableBody(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            Self::InvalidAlert { received_data } => (
                status,
                Json(InvalidAlertResponse {
                    success: false,
                    message: INVALID_ALERT_FORMAT.to_string(),
                    received_data,
                }),
            )
                .into_response(),
            Self::UnreadableBody(reason) => (
                status,
                Json(ErrorResponse {
                    success: false,
                    message: INTERNAL_SERVER_ERROR.to_string(),
                    error: Some(reason),
                }),
            )
                .into_response(),
            Self::MethodNotAllowed => (
                status,
                Json(ErrorResponse {
                    success: false,
                    message: METHOD_NOT_ALLOWED.to_string(),
                    error: None,
                }),
            )
                .into_response(),
            Self::PayloadTooLarge => (
                status,
                Json(ErrorResponse {
                    success: false,
                    message: PAYLOAD_TOO_LARGE.to_string(),
                    error: None,
                }),
            )
                .into_response(),
        }
    }
}
