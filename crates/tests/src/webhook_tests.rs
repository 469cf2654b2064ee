//! End-to-end behavior of the webhook route.
//!
//! Covers the request/response contract a signal sender and the alert
//! dashboard rely on: stored and rejected ingestion, newest-first retrieval,
//! the capacity bound, preflight and CORS headers.

#![allow(clippy::unwrap_used)]

use axum::http::{header, Method, StatusCode};
use serde_json::json;

use crate::test_helpers::{signal_message, TestServer, BTC_MESSAGE};

#[tokio::test]
async fn test_json_message_is_stored() {
    let server = TestServer::new();

    let response = server.post_json(&json!({ "message": BTC_MESSAGE })).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Alert received and stored");
    assert_eq!(body["alert"]["symbol"], "BTCUSDT");
    assert_eq!(body["alert"]["signalType"], "BUY+LONG");
    assert_eq!(body["alert"]["price"], "45000.50");
    assert_eq!(body["alert"]["atr"], "1200.30");
    assert_eq!(body["alert"]["rsi"], "35.20");
    assert_eq!(body["alert"]["longStop"], "43500.00");
    assert_eq!(body["alert"]["shortStop"], "46500.00");

    let timestamp = body["alert"]["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok(), "{timestamp}");
    assert!(timestamp.ends_with('Z'));

    assert_eq!(server.state.buffer.len(), 1);
}

#[tokio::test]
async fn test_text_field_is_used_when_message_absent() {
    let server = TestServer::new();

    let response = server.post_json(&json!({ "text": BTC_MESSAGE })).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["alert"]["symbol"], "BTCUSDT");
}

#[tokio::test]
async fn test_raw_text_body_is_stored() {
    let server = TestServer::new();

    let response = server.post_text(BTC_MESSAGE).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["alert"]["signalType"], "BUY+LONG");
}

#[tokio::test]
async fn test_json_string_body_is_stored() {
    let server = TestServer::new();

    let response = server.post_json(&json!(BTC_MESSAGE)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["alert"]["symbol"], "BTCUSDT");
}

#[tokio::test]
async fn test_garbage_is_rejected_and_echoed() {
    let server = TestServer::new();

    let response = server.post_json(&json!({ "message": "garbage" })).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid alert format");
    assert_eq!(body["receivedData"], json!({ "message": "garbage" }));
    assert!(server.state.buffer.is_empty());
}

#[tokio::test]
async fn test_raw_text_rejection_echoes_string() {
    let server = TestServer::new();

    let response = server.post_text("BTCUSDT BUY").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["receivedData"], "BTCUSDT BUY");
}

#[tokio::test]
async fn test_empty_body_is_rejected() {
    let server = TestServer::new();

    let response = server.post("application/json", "").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["receivedData"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_object_without_message_is_rejected() {
    let server = TestServer::new();

    let response = server.post_json(&json!({ "symbol": "BTCUSDT", "message": 42 })).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["receivedData"]["symbol"], "BTCUSDT");
}

#[tokio::test]
async fn test_empty_buffer_listing() {
    let server = TestServer::new();

    let response = server.get_alerts().await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({ "success": true, "alerts": [], "count": 0 }));
}

#[tokio::test]
async fn test_newest_alert_listed_first() {
    let server = TestServer::new();

    server.post_text(&signal_message("AAAUSDT", "Buy", "1.00")).await;
    server.post_text(&signal_message("BBBUSDT", "Sell", "2.00")).await;

    let body = server.get_alerts().await.json();
    assert_eq!(body["count"], 2);
    assert_eq!(body["alerts"][0]["symbol"], "BBBUSDT");
    assert_eq!(body["alerts"][1]["symbol"], "AAAUSDT");
}

#[tokio::test]
async fn test_listing_is_idempotent() {
    let server = TestServer::new();
    server.post_text(BTC_MESSAGE).await;

    let first = server.get_alerts().await;
    let second = server.get_alerts().await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body, second.body);
}

#[tokio::test]
async fn test_capacity_keeps_most_recent_hundred() {
    let server = TestServer::new();

    for i in 0..105 {
        let response = server.post_text(&signal_message(&format!("S{i}"), "Buy", "1.00")).await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let body = server.get_alerts().await.json();
    let alerts = body["alerts"].as_array().unwrap();

    assert_eq!(body["count"], 100);
    assert_eq!(alerts.len(), 100);
    assert_eq!(alerts[0]["symbol"], "S104");
    assert_eq!(alerts[99]["symbol"], "S5");
    assert!(alerts.iter().all(|alert| alert["symbol"] != "S4"));
}

#[tokio::test]
async fn test_preflight() {
    let server = TestServer::new();

    let response = server.method(Method::OPTIONS).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.is_empty());
    assert_eq!(response.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(response.headers[header::ACCESS_CONTROL_ALLOW_METHODS], "GET, POST, OPTIONS");
    assert_eq!(response.headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
}

#[tokio::test]
async fn test_cors_headers_on_every_outcome() {
    let server = TestServer::new();

    let responses = [
        server.post_text(BTC_MESSAGE).await,
        server.post_text("garbage").await,
        server.post("application/json", "{broken").await,
        server.get_alerts().await,
        server.method(Method::DELETE).await,
    ];

    for response in responses {
        assert_eq!(response.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(response.headers[header::ACCESS_CONTROL_ALLOW_METHODS], "GET, POST, OPTIONS");
        assert_eq!(response.headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
    }
}

#[tokio::test]
async fn test_other_methods_not_allowed() {
    let server = TestServer::new();

    for method in [Method::HEAD, Method::PUT, Method::DELETE, Method::PATCH] {
        let response = server.method(method.clone()).await;

        assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED, "{method}");
        if method != Method::HEAD {
            assert_eq!(
                response.json(),
                json!({ "success": false, "message": "Method not allowed" })
            );
        }
    }
}

#[tokio::test]
async fn test_head_is_not_served_as_get() {
    let server = TestServer::new();
    server.post_text(BTC_MESSAGE).await;

    let response = server.method(Method::HEAD).await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert!(response.body.is_empty());
    assert_eq!(response.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn test_invalid_json_is_server_error() {
    let server = TestServer::new();

    let response = server.post("application/json", "{\"message\": ").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Internal server error");
    assert!(body["error"].as_str().is_some());
    assert!(server.state.buffer.is_empty());
}

#[tokio::test]
async fn test_health_reports_buffer_size() {
    let server = TestServer::new();
    server.post_text(BTC_MESSAGE).await;
    server.post_text(BTC_MESSAGE).await;

    let request = axum::http::Request::builder()
        .uri("/health")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = server.send(request).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["alertCount"], 2);
}
