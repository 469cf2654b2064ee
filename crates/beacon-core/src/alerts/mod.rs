//! Signal alerts: parsing, payload resolution and in-memory retention.
//!
//! ## Components
//!
//! - **[`parse_message`]**: Turns the three-line signal text into a [`ParsedAlert`]
//! - **[`AlertPayload`]**: Resolved shape of an inbound request body
//! - **[`AlertBuffer`]**: Bounded, newest-first store of received [`Alert`]s
//!
//! ## Usage
//!
//! ```rust
//! use beacon_core::alerts::{parse_message, AlertBuffer, AlertPayload};
//! use chrono::Utc;
//!
//! let buffer = AlertBuffer::new(100);
//!
//! let payload = AlertPayload::from_json(serde_json::json!({
//!     "message": "BTCUSDT | BUY+LONG Signal\n\
//!                 P: 45000.50  ATR: 1200.30  RSI: 35.20\n\
//!                 LongStop: 43500.00  ShortStop: 46500.00"
//! }));
//!
//! let alert = parse_message(payload.message()).unwrap().stamp(Utc::now());
//! buffer.push(alert);
//!
//! assert_eq!(buffer.snapshot()[0].symbol, "BTCUSDT");
//! ```

pub mod buffer;
pub mod parser;
pub mod payload;
pub mod types;

pub use buffer::{AlertBuffer, DEFAULT_CAPACITY};
pub use parser::{parse_message, ParseError};
pub use payload::AlertPayload;
pub use types::{Alert, ParsedAlert};
