use std::{
    env,
    ffi::OsStr,
    path::{Component, Path, PathBuf},
};

use crate::{Result, SlmError};

const BUNDLE_EXTENSION: &str = "app";

/// Resolves the working directory of the running executable.
///
/// # Errors
/// Returns `SlmError::Platform` if the executable path cannot be determined.
pub fn current_working_dir() -> Result<PathBuf> {
    let exe_path = env::current_exe().map_err(|e| {
        SlmError::Platform(format!("failed to get executable directory: {e}"))
    })?;

    resolve_working_dir(&exe_path, env::consts::OS)
}

/// Directory the application treats as home for settings, logs and caches.
///
/// Normally the executable's own directory. On macOS, an executable inside an
/// application bundle (`Name.app/Contents/MacOS/...`) resolves to the
/// directory containing the bundle.
///
/// # Errors
/// Returns `SlmError::Platform` if `exe_path` has no parent directory.
pub fn resolve_working_dir(exe_path: &Path, os: &str) -> Result<PathBuf> {
    let exe_dir = exe_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .ok_or_else(|| {
            SlmError::Platform(format!(
                "executable path '{}' has no parent directory",
                exe_path.display()
            ))
        })?;

    if os == "macos" {
        if let Some(bundle_parent) = bundle_parent(exe_dir) {
            return Ok(bundle_parent);
        }
    }

    Ok(exe_dir.to_path_buf())
}

/// Parent of the outermost `.app` component in `dir`, if any.
fn bundle_parent(dir: &Path) -> Option<PathBuf> {
    let mut parent = PathBuf::new();

    for component in dir.components() {
        if let Component::Normal(name) = component {
            if is_bundle(name) {
                return Some(parent);
            }
        }
        parent.push(component);
    }

    None
}

fn is_bundle(name: &OsStr) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext == BUNDLE_EXTENSION)
}
