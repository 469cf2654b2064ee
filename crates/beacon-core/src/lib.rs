//! # Beacon Core
//!
//! Core library for the Beacon signal alert webhook service.
//!
//! This crate provides the transport-independent pieces:
//!
//! - **[`alerts`]**: The alert record, the three-line signal message parser, the
//!   resolved request payload shape and the bounded newest-first alert buffer.
//!
//! - **[`config`]**: Layered configuration (defaults, TOML file, environment).
//!
//! ## Request Flow
//!
//! ```text
//! Signal source
//!       │  POST (raw text or {"message": ...})
//!       ▼
//! ┌──────────────┐
//! │ AlertPayload │ ─── unreadable ──► 500
//! └──────┬───────┘
//!        │ message text
//!        ▼
//! ┌──────────────┐
//! │ parse_message│ ─── invalid ──► 400 (payload echoed)
//! └──────┬───────┘
//!        │ ParsedAlert + timestamp
//!        ▼
//! ┌──────────────┐
//! │ AlertBuffer  │ ◄── GET snapshot (newest first)
//! └──────────────┘
//! ```

pub mod alerts;
pub mod config;
