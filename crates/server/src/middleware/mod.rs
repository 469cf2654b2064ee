//! HTTP middleware for the webhook server.
//!
//! Request-scoped concerns that sit outside the handlers: request IDs, CORS
//! headers and the JSON body for oversized requests. Concurrency and body-size
//! limits come straight from `tower`/`tower-http` and are wired in
//! [`crate::app`].

pub mod body_limit;
pub mod cors;
pub mod request_id;

pub use body_limit::payload_too_large_envelope;
pub use cors::with_cors_headers;
pub use request_id::{request_id, request_id_layers, X_REQUEST_ID};
