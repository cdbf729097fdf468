//! Logging setup
//!
//! The TUI owns the terminal, so logs go to a file unless stderr is asked for.

use crate::config::FormConfig;
use anyhow::{Context, Result};
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "login_form=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into())
}

/// Install the global subscriber. Keep the returned guard alive until exit so
/// buffered file output is flushed.
pub fn init(config: &FormConfig) -> Result<Option<WorkerGuard>> {
    if config.log_to_stderr() {
        tracing_subscriber::registry()
            .with(env_filter())
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
        return Ok(None);
    }

    // Never stderr here: it would draw over the alternate screen
    let file = config.log_file_path();
    let (writer, guard) = file_writer(&file)?;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();

    tracing::debug!(path = %file.display(), "Logging to file");
    Ok(Some(guard))
}

/// Non-blocking appender for `path`, creating its directory. Lines are only
/// guaranteed on disk once the guard is dropped.
fn file_writer(path: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    let (dir, name) = split_log_path(path)?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, name);
    Ok(tracing_appender::non_blocking(appender))
}

fn split_log_path(path: &Path) -> Result<(&Path, &std::ffi::OsStr)> {
    let name = path
        .file_name()
        .with_context(|| format!("log file path has no file name: {}", path.display()))?;
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let dir = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };
    Ok((dir, name))
}
