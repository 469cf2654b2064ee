//! Response envelopes for the webhook API.
//!
//! Field names follow the JSON the alert dashboard already consumes
//! (`success`, `message`, `receivedData`, `alertCount`).

use beacon_core::alerts::Alert;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message returned with a stored alert.
pub const ALERT_STORED: &str = "Alert received and stored";
/// Message returned when the parser rejects a payload.
pub const INVALID_ALERT_FORMAT: &str = "Invalid alert format";
/// Message returned for unexpected failures.
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";
/// Message returned for unsupported methods.
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
/// Message returned when a body exceeds the configured limit.
pub const PAYLOAD_TOO_LARGE: &str = "Payload too large";
/// Message returned by the health route.
pub const SERVER_RUNNING: &str = "Webhook server is running!";

/// `POST` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertStoredResponse {
    pub success: bool,
    pub message: String,
    pub alert: Alert,
}

impl AlertStoredResponse {
    #[must_use]
    pub fn new(alert: Alert) -> Self {
        Self { success: true, message: ALERT_STORED.to_string(), alert }
    }
}

/// `POST` rejection body; echoes what was received.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidAlertResponse {
    pub success: bool,
    pub message: String,
    pub received_data: Value,
}

/// Generic failure body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// `GET` body: the buffer contents, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertListResponse {
    pub success: bool,
    pub alerts: Vec<Alert>,
    pub count: usize,
}

impl AlertListResponse {
    #[must_use]
    pub fn new(alerts: Vec<Alert>) -> Self {
        let count = alerts.len();
        Self { success: true, alerts, count }
    }
}

/// Health route body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub message: String,
    pub alert_count: usize,
    pub timestamp: String,
}
