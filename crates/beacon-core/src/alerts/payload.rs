//! Inbound webhook payload shapes.
//!
//! Senders post either the bare message text or a JSON object wrapping it in a
//! `message` (or `text`) field. The body is resolved into an [`AlertPayload`]
//! once, at the transport boundary, and everything downstream works from that.

use serde_json::{Map, Value};

/// Object fields that may carry the message, checked in order.
const MESSAGE_FIELDS: [&str; 2] = ["message", "text"];

/// The resolved shape of an ingestion request body.
#[derive(Debug, Clone, PartialEq)]
pub enum AlertPayload {
    /// The body itself is the message.
    RawText(String),
    /// A JSON object; the message lives in one of its fields.
    JsonObject(Map<String, Value>),
    /// No body, or a body that can't carry a message.
    Missing,
}

impl AlertPayload {
    /// Builds a payload from a decoded JSON document.
    ///
    /// A JSON string is treated as raw text. Arrays, numbers, booleans and
    /// `null` resolve to [`AlertPayload::Missing`].
    #[must_use]
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::String(text) => Self::RawText(text),
            Value::Object(map) => Self::JsonObject(map),
            _ => Self::Missing,
        }
    }

    /// Builds a payload from a non-JSON body. Empty text is [`AlertPayload::Missing`].
    #[must_use]
    pub fn from_text(text: String) -> Self {
        if text.is_empty() {
            Self::Missing
        } else {
            Self::RawText(text)
        }
    }

    /// Returns the message text, or `""` when the payload carries none.
    ///
    /// For objects the first string-valued field among `message` and `text`
    /// wins; empty strings are skipped.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::RawText(text) => text,
            Self::JsonObject(map) => MESSAGE_FIELDS
                .iter()
                .filter_map(|field| map.get(*field).and_then(Value::as_str))
                .find(|text| !text.is_empty())
                .unwrap_or(""),
            Self::Missing => "",
        }
    }

    /// The payload as it should be echoed back to a sender for diagnostics.
    #[must_use]
    pub fn received_data(&self) -> Value {
        match self {
            Self::RawText(text) => Value::String(text.clone()),
            Self::JsonObject(map) => Value::Object(map.clone()),
            Self::Missing => Value::Null,
        }
    }
}
