//! Application startup.
//!
//! Resolves the working directory, loads settings from it, starts logging
//! and hands control to one front end. Any failure before the front end
//! starts aborts the process.

mod frontend;
mod logging;
mod workdir;

#[cfg(test)]
mod tests;

pub use frontend::{
    Dispatcher, FrontEnd, FrontEndKind, MODE_CONSOLE, MODE_GUI, resolve_front_end,
};
pub use logging::{LogGuard, default_level, init_logging};
pub use workdir::{current_working_dir, resolve_working_dir};

use std::{env, path::PathBuf, sync::Arc};

use tokio::sync::Mutex;
use tracing::info;

use crate::{
    Result,
    cli::Args,
    freshness::APP_VERSION,
    settings::{SettingsStore, SharedStore},
};

/// Everything a front end receives at start.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Directory holding settings, caches and the log file.
    pub working_dir: PathBuf,
    /// The settings store; lock it around every load/save.
    pub store: SharedStore,
}

impl AppContext {
    /// Context around an already created store.
    pub fn new(working_dir: PathBuf, store: SettingsStore) -> Self {
        Self {
            working_dir,
            store: Arc::new(Mutex::new(store)),
        }
    }
}

/// Runs the whole startup sequence and then the selected front end.
///
/// The log guard lives for the duration of this call, so returning (or
/// unwinding) flushes the log file.
///
/// # Errors
/// Returns `SlmError::Platform` or `SlmError::Logging` if startup fails, or
/// the front end's own error.
pub async fn run(args: Args, dispatcher: Dispatcher) -> Result<()> {
    let working_dir = current_working_dir()?;

    let mut store = SettingsStore::new(&working_dir);
    let settings = store.load().clone();

    let _log_guard = init_logging(store.paths(), settings.debug)?;
    info!("[SLM starts]");
    info!(version = APP_VERSION, "Build");
    if let Ok(exe_path) = env::current_exe() {
        info!("[Executable: {}]", exe_path.display());
    }
    info!("[Working directory: {}]", working_dir.display());
    info!(mode = ?args.mode, mode_set = args.mode_is_set(), "Command line flags");

    let kind = dispatcher.select(&settings, args.mode.as_deref());
    let context = AppContext::new(working_dir, store);

    dispatcher.launch(kind, context).await
}
