//! Logging setup.
//!
//! The TUI owns the terminal, so interactive runs log to a daily-rotated
//! file under ${PORTICO_HOME}/logs. One-shot commands log to stderr.
//! Filtering is controlled by the PORTICO_LOG env var (default: info).

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Env var holding the tracing filter directive.
const LOG_FILTER_ENV: &str = "PORTICO_LOG";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initializes file logging for TUI runs.
///
/// Returns the appender guard; dropping it flushes buffered log lines, so
/// the caller must keep it alive for the life of the process.
pub fn init_file(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::daily(log_dir, "portico.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

/// Initializes stderr logging for non-interactive commands.
pub fn init_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}
