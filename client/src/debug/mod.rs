//! # Logging and Tracing Infrastructure
//!
//! Structured logging for the society client.
//!
//! ## Features
//!
//! - **File-based logging**: Structured logs to `logs/society-client.log.<date>` (daily rotation)
//! - **Trace ids**: Every controller operation opens a span carrying a fresh `trace_id`,
//!   so the login, order creation, checkout and verification lines of one payment
//!   can be grepped together
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Initialize at app startup and keep the guard alive
//! let _guard = society_client::debug::init();
//!
//! // Log with structured fields
//! tracing::info!(endpoint = "/payments/create-order", duration_ms = 234, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `society_client=debug,info`)
//! - `SOCIETY_LOG_DIR`: Log directory (default: `logs`)
//! - `SOCIETY_LOG_STDOUT`: Mirror logs to stdout (1=on, 0=off)
//! - `SOCIETY_LOG_JSON`: JSON lines in the file log (1=on)

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init as init_logger;

use tracing_appender::non_blocking::WorkerGuard;
use uuid::Uuid;

/// Initialize logging from the environment
///
/// Call this at application startup, before any other operations.
pub fn init() -> Option<WorkerGuard> {
    init_logger(&DebugConfig::from_env())
}

/// Generate a new trace id for one user-initiated operation
pub fn new_trace_id() -> String {
    Uuid::new_v4().to_string()
}
