//! Logging configuration
//!
//! # Environment Variables
//! - `LOG_FORMAT`: Output format - `json` (default) or `pretty`
//! - `RUST_LOG`: Log level filter (default: `warn`)

use tracing_subscriber::EnvFilter;

/// Initialize logging with configurable format.
///
/// Reads `LOG_FORMAT` from environment:
/// - `json` (default): Machine-parseable JSON output
/// - `pretty`: Human-readable output for development
///
/// All log output goes to stderr; stdout is reserved for the tool's JSON
/// document.
pub fn init_logging() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if log_format == "pretty" {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .pretty()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    }
}
