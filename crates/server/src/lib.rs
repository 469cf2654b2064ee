//! HTTP surface of the Beacon webhook alert service.
//!
//! - [`app`]: router assembly and shared state
//! - [`router`]: request handlers
//! - [`middleware`]: request IDs and CORS headers
//! - [`error`] / [`types`]: error mapping and response envelopes

pub mod app;
pub mod error;
pub mod middleware;
pub mod router;
pub mod types;

pub use app::{create_app, AppState};
