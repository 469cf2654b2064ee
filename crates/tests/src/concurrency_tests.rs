//! Parallel ingestion against one shared buffer.
//!
//! The buffer must never exceed its capacity, and below capacity no accepted
//! alert may be lost, regardless of how requests interleave.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use beacon_core::config::AppConfig;
use futures::future::join_all;
use std::collections::HashSet;

use crate::test_helpers::{signal_message, TestServer};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_posts_lose_nothing_below_capacity() {
    let server = TestServer::new();

    let requests = (0..80).map(|i| {
        let server = server.clone();
        tokio::spawn(async move {
            server.post_text(&signal_message(&format!("C{i}"), "Buy", "1.00")).await.status
        })
    });

    let statuses = join_all(requests).await;
    assert!(statuses.into_iter().all(|status| status.unwrap() == StatusCode::OK));

    let alerts = server.state.buffer.snapshot();
    assert_eq!(alerts.len(), 80);

    let symbols: HashSet<_> = alerts.iter().map(|alert| alert.symbol.clone()).collect();
    assert_eq!(symbols.len(), 80);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_posts_never_exceed_capacity() {
    let mut config = AppConfig::default();
    config.alerts.capacity = 10;
    let server = TestServer::with_config(&config);

    let writers = (0..50).map(|i| {
        let server = server.clone();
        tokio::spawn(async move {
            server.post_text(&signal_message(&format!("W{i}"), "Sell", "2.00")).await.status
        })
    });
    let readers = (0..20).map(|_| {
        let server = server.clone();
        tokio::spawn(async move {
            let body = server.get_alerts().await.json();
            body["count"].as_u64().unwrap()
        })
    });

    let (statuses, counts) = futures::join!(join_all(writers), join_all(readers));

    assert!(statuses.into_iter().all(|status| status.unwrap() == StatusCode::OK));
    assert!(counts.into_iter().all(|count| count.unwrap() <= 10));
    assert_eq!(server.state.buffer.len(), 10);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_sequential_posts_from_one_sender_keep_order() {
    let server = TestServer::new();

    // One sender awaiting each response, while others post in parallel
    let noise = (0..20).map(|i| {
        let server = server.clone();
        tokio::spawn(async move {
            server.post_text(&signal_message(&format!("N{i}"), "Long", "3.00")).await;
        })
    });
    let sender = {
        let server = server.clone();
        tokio::spawn(async move {
            for i in 0..10 {
                server.post_text(&signal_message(&format!("ORD{i}"), "Buy", "1.00")).await;
            }
        })
    };

    join_all(noise).await;
    sender.await.unwrap();

    let ordered: Vec<_> = server
        .state
        .buffer
        .snapshot()
        .into_iter()
        .filter(|alert| alert.symbol.starts_with("ORD"))
        .map(|alert| alert.symbol)
        .collect();

    let expected: Vec<_> = (0..10).rev().map(|i| format!("ORD{i}")).collect();
    assert_eq!(ordered, expected);
}
