//! Logging configuration from environment variables

use std::path::PathBuf;

/// Logging system configuration
#[derive(Debug, Clone)]
pub struct DebugConfig {
    /// Log directory (daily rotation happens inside it)
    pub log_dir: PathBuf,
    /// File name prefix for rotated logs
    pub log_file_prefix: String,
    /// Log level filter (e.g., "society_client=debug,info")
    pub log_level: String,
    /// Mirror log output to stdout
    pub log_to_stdout: bool,
    /// Emit JSON lines instead of human-readable text in the file log
    pub json: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_file_prefix: "society-client.log".to_string(),
            log_level: "society_client=info,warn".to_string(),
            log_to_stdout: cfg!(feature = "debug-mode"),
            json: false,
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            log_dir: std::env::var("SOCIETY_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_file_prefix: defaults.log_file_prefix,
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_to_stdout: std::env::var("SOCIETY_LOG_STDOUT")
                .map(|v| v == "1")
                .unwrap_or(defaults.log_to_stdout),
            json: std::env::var("SOCIETY_LOG_JSON")
                .map(|v| v == "1")
                .unwrap_or(false),
        }
    }

    /// Path of today's log file is `<log_dir>/<prefix>.<date>`
    pub fn log_path_hint(&self) -> PathBuf {
        self.log_dir.join(&self.log_file_prefix)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
