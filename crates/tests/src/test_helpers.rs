//! Test Helper Functions and Utilities
//!
//! Message builders and a thin in-process server wrapper.

#![allow(clippy::unwrap_used)]

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use beacon_core::config::AppConfig;
use serde_json::Value;
use server::{create_app, AppState};
use tower::ServiceExt;

pub const WEBHOOK: &str = "/api/webhook";

pub const BTC_MESSAGE: &str = "BTCUSDT | BUY+LONG Signal\nP: 45000.50  ATR: 1200.30  RSI: 35.20\nLongStop: 43500.00  ShortStop: 46500.00";

/// Builds a valid three-line signal message.
#[must_use]
pub fn signal_message(symbol: &str, signal_type: &str, price: &str) -> String {
    format!(
        "{symbol} | {signal_type} Signal\nP: {price}  ATR: 1.50  RSI: 50.00\nLongStop: 1.00  ShortStop: 2.00"
    )
}

/// A response with its body already collected.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

/// The assembled application plus a handle on its buffer.
#[derive(Clone)]
pub struct TestServer {
    pub app: Router,
    pub state: AppState,
}

impl TestServer {
    pub fn new() -> Self {
        Self::with_config(&AppConfig::default())
    }

    pub fn with_config(config: &AppConfig) -> Self {
        let state = AppState::from_config(config);
        Self { app: create_app(state.clone(), config), state }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let (parts, body) = response.into_parts();
        let body = to_bytes(body, usize::MAX).await.unwrap().to_vec();

        TestResponse { status: parts.status, headers: parts.headers, body }
    }

    pub async fn post(&self, content_type: &str, body: impl Into<Body>) -> TestResponse {
        let request = Request::builder()
            .method(Method::POST)
            .uri(WEBHOOK)
            .header(header::CONTENT_TYPE, content_type)
            .body(body.into())
            .unwrap();
        self.send(request).await
    }

    pub async fn post_json(&self, value: &Value) -> TestResponse {
        self.post("application/json", value.to_string()).await
    }

    pub async fn post_text(&self, text: &str) -> TestResponse {
        self.post("text/plain", text.to_string()).await
    }

    pub async fn method(&self, method: Method) -> TestResponse {
        let request = Request::builder().method(method).uri(WEBHOOK).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn get_alerts(&self) -> TestResponse {
        self.method(Method::GET).await
    }
}
