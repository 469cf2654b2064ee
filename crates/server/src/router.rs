use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use beacon_core::alerts::{parse_message, AlertPayload};
use chrono::Utc;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::{
    app::AppState,
    error::ApiError,
    middleware::request_id,
    types::{AlertListResponse, AlertStoredResponse, HealthResponse, SERVER_RUNNING},
};

/// Handles alert ingestion.
///
/// The body is resolved into an [`AlertPayload`] according to its
/// `Content-Type`, parsed, stamped with the receive time and pushed onto the
/// buffer. Rejected messages leave the buffer untouched.
///
/// # Errors
///
/// - [`ApiError::UnreadableBody`] when a JSON body fails to decode or a text body
///   is not UTF-8
/// - [`ApiError::InvalidAlert`] when the message does not match the signal format
pub async fn ingest_alert(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<AlertStoredResponse>, ApiError> {
    let request_id = request_id(&headers);

    let payload = resolve_payload(&headers, &body).map_err(|e| {
        error!(request_id, error = %e, "Failed to read webhook body");
        e
    })?;

    let parsed = parse_message(payload.message()).map_err(|reason| {
        warn!(request_id, reason = %reason, "Rejected alert");
        ApiError::InvalidAlert { received_data: payload.received_data() }
    })?;

    let alert = parsed.stamp(Utc::now());
    let buffered = state.buffer.push(alert.clone());

    info!(
        request_id,
        symbol = %alert.symbol,
        signal_type = %alert.signal_type,
        buffered,
        "Alert stored"
    );

    Ok(Json(AlertStoredResponse::new(alert)))
}

/// Returns the buffered alerts, newest first.
pub async fn list_alerts(State(state): State<AppState>) -> Json<AlertListResponse> {
    let alerts = state.buffer.snapshot();
    debug!(count = alerts.len(), "Listing alerts");
    Json(AlertListResponse::new(alerts))
}

/// CORS preflight. The headers themselves are added by the CORS layer.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

pub async fn handle_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        message: SERVER_RUNNING.to_string(),
        alert_count: state.buffer.len(),
        timestamp: beacon_core::alerts::types::iso_millis::format(&Utc::now()),
    })
}

/// Resolves the request body into an [`AlertPayload`].
///
/// JSON content types are decoded as JSON; everything else, including a
/// missing `Content-Type`, is read as UTF-8 text. An empty body is always
/// [`AlertPayload::Missing`].
fn resolve_payload(headers: &HeaderMap, body: &[u8]) -> Result<AlertPayload, ApiError> {
    if body.is_empty() {
        return Ok(AlertPayload::Missing);
    }

    if is_json(headers) {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| ApiError::UnreadableBody(format!("Invalid JSON body: {e}")))?;
        return Ok(AlertPayload::from_json(value));
    }

    let text = std::str::from_utf8(body)
        .map_err(|e| ApiError::UnreadableBody(format!("Body is not valid UTF-8: {e}")))?;
    Ok(AlertPayload::from_text(text.to_string()))
}

/// `application/json` or any `+json` structured syntax suffix.
fn is_json(headers: &HeaderMap) -> bool {
    let Some(mime) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<mime::Mime>().ok())
    else {
        return false;
    };

    mime.type_() == "application"
        && (mime.subtype() == "json" || mime.suffix().is_some_and(|name| name == "json"))
}
