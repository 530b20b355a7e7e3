use std::path::{Path, PathBuf};

use super::defaults::{
    LOG_FILENAME, SETTINGS_FILENAME, TITLES_JSON_FILENAME, VERSIONS_JSON_FILENAME,
};

/// Locations of every file the application keeps in its working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsPaths {
    base: PathBuf,
}

impl SettingsPaths {
    /// Creates path helpers rooted at `base`, the application's working directory
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// The working directory itself
    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    /// Returns the path to the settings document
    pub fn settings_file(&self) -> PathBuf {
        self.base.join(SETTINGS_FILENAME)
    }

    /// Returns the path to the cached title catalog
    pub fn titles_cache(&self) -> PathBuf {
        self.base.join(TITLES_JSON_FILENAME)
    }

    /// Returns the path to the cached version catalog
    pub fn versions_cache(&self) -> PathBuf {
        self.base.join(VERSIONS_JSON_FILENAME)
    }

    /// Returns the path to the log file
    pub fn log_file(&self) -> PathBuf {
        self.base.join(LOG_FILENAME)
    }
}
