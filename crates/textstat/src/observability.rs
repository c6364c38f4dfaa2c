//! Logging setup for the CLI.
//!
//! Two layers:
//! - stderr, compact, quiet by default (warnings and errors only)
//! - an optional JSON-lines log file, written through a non-blocking
//!   appender, filtered by the configured log level
//!
//! `RUST_LOG`, when set, replaces both default filters.

use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Name of the log file inside a log directory.
const LOG_FILE_NAME: &str = "textstat.jsonl";

/// Where (if anywhere) logs are written to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Log file path; `None` disables file logging.
    pub log_path: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve the log file from `TEXTSTAT_LOG_PATH`, falling back to
    /// `log_dir` (already merged from config and `TEXTSTAT_LOG_DIR`).
    pub fn from_env_with_overrides(log_dir: Option<PathBuf>) -> Self {
        let explicit = std::env::var_os("TEXTSTAT_LOG_PATH").map(PathBuf::from);
        Self::resolve(explicit, log_dir)
    }

    fn resolve(explicit: Option<PathBuf>, log_dir: Option<PathBuf>) -> Self {
        Self {
            log_path: explicit.or_else(|| log_dir.map(|dir| dir.join(LOG_FILE_NAME))),
        }
    }
}

/// Default console level for the `-q` / `-v` flags.
pub const fn console_level(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `RUST_LOG` if set, otherwise `default_directive`.
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install the global subscriber.
///
/// Keep the returned guard alive until exit so buffered file logs are flushed.
pub fn init_observability(
    config: &ObservabilityConfig,
    console_filter: EnvFilter,
    file_filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_filter(console_filter);

    let (file, guard) = match config.log_path {
        Some(ref path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create log directory {}", parent.display())
                })?;
            }
            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(log_file);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_filter(file_filter);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(guard)
}
