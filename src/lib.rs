//! # steamsum
//!
//! A TUI client for AI-generated Steam review summaries.
//!
//! ## Features
//!
//! - **Debounced autocomplete**: game names resolve to Steam app ids as you type
//! - **Review summaries**: what players praised and criticized, fetched from the summariser backend
//! - **One-shot commands**: `search` and `summarize` share the same HTTP client as the TUI

pub mod app;
pub mod client;
pub mod config;
pub mod debounce;
pub mod event;
pub mod logging;
pub mod runtime;
pub mod summary;
pub mod tui;
pub mod ui;

pub use client::{ApiClient, ApiError};
pub use config::Config;
pub use summary::{AppId, Candidate, ReviewSummary, SummaryResult};
