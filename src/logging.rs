//! File-based tracing setup.
//!
//! The REPL owns stdout, so diagnostics go to a rolling file under
//! ${BABIX_HOME}/logs instead. Logging is off unless `BABIX_LOG` is set
//! (standard `EnvFilter` syntax, e.g. `BABIX_LOG=babix=debug`).

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

/// Initializes the tracing subscriber if `BABIX_LOG` is set.
///
/// Returns the appender guard; dropping it flushes buffered log lines, so
/// the caller must hold it for the process lifetime.
pub fn init() -> Result<Option<WorkerGuard>> {
    let Ok(filter) = std::env::var("BABIX_LOG") else {
        return Ok(None);
    };

    let logs_dir = paths::logs_dir();
    fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&logs_dir, "babix.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
