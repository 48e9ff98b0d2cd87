//! File-based logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use super::config::DebugConfig;

/// Initialize the logging system
///
/// Sets up file-based logging with:
/// - Daily log rotation under `logs/` (or `SOCIETY_LOG_DIR`)
/// - Optional stdout mirror (`SOCIETY_LOG_STDOUT=1`)
/// - Optional JSON lines (`SOCIETY_LOG_JSON=1`)
/// - Non-blocking writes so logging never stalls a request
///
/// The returned guard flushes buffered lines when dropped; keep it alive for the
/// lifetime of the program. Returns `None` when the log directory cannot be created
/// or a subscriber is already installed.
pub fn init(config: &DebugConfig) -> Option<WorkerGuard> {
    // Create logs directory if it doesn't exist
    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, &config.log_file_prefix);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Configure log filter from environment
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("society_client=info,warn"));

    let file_layer = if config.json {
        fmt::layer()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_current_span(true)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(non_blocking)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false) // No ANSI codes in log files
            .boxed()
    };

    let stdout_layer = config
        .log_to_stdout
        .then(|| fmt::layer().with_target(false).compact().boxed());

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .try_init();

    if installed.is_err() {
        // Tests and embedding hosts may have installed their own subscriber
        return None;
    }

    tracing::info!(
        log_file = %config.log_path_hint().display(),
        log_level = %config.log_level,
        stdout = config.log_to_stdout,
        json = config.json,
        "Logging initialized"
    );

    Some(guard)
}
