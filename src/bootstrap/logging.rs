use std::{fs, io::ErrorKind};

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    Result, SlmError,
    settings::{SettingsPaths, defaults::LOG_FILENAME},
};

/// Keeps the background log writer alive.
///
/// Dropping the guard flushes every buffered line to the log file, so the
/// owner should hold it until the process is about to exit. Unwinding from a
/// panic drops it too.
#[must_use = "dropping the guard stops log output"]
pub struct LogGuard {
    _worker: WorkerGuard,
}

/// Level used when `RUST_LOG` is not set.
pub fn default_level(debug: bool) -> &'static str {
    if debug { "debug" } else { "info" }
}

/// Initialize tracing with output to `slm.log` in the working directory.
///
/// Any log file from a previous run is deleted first; logs are never rotated
/// or appended across runs. `debug` raises verbosity and adds source
/// locations and thread ids to every line.
///
/// # Errors
/// Returns `SlmError::Logging` if the old file cannot be removed, the new one
/// cannot be created, or a global subscriber is already installed.
pub fn init_logging(paths: &SettingsPaths, debug: bool) -> Result<LogGuard> {
    let log_path = paths.log_file();

    match fs::remove_file(&log_path) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            return Err(SlmError::Logging(format!(
                "failed to remove old log file {}: {e}",
                log_path.display()
            )));
        }
    }

    let (stem, extension) = LOG_FILENAME
        .rsplit_once('.')
        .unwrap_or((LOG_FILENAME, "log"));

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(stem)
        .filename_suffix(extension)
        .build(paths.base_dir())
        .map_err(|e| SlmError::Logging(format!("failed to create log file: {e}")))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(debug)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(true)
                .with_level(true)
                .with_file(debug)
                .with_line_number(debug)
                .with_thread_ids(debug)
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| SlmError::Logging(e.to_string()))?;

    Ok(LogGuard { _worker: guard })
}
