use std::{
    fs::{self, File},
    io::{self, ErrorKind, Write},
    path::{Path, PathBuf},
};

use tracing::{error, info, instrument, warn};

use super::{Settings, SettingsPaths, verify::verify_settings};
use crate::{Result, SlmError};

/// Sole owner of the settings document.
///
/// The first [`load`](Self::load) reads (or creates) the file; later calls
/// return the in-memory document until [`reset`](Self::reset) is called.
/// The store does no locking of its own: callers that share it across tasks
/// wrap it in a mutex.
#[derive(Debug)]
pub struct SettingsStore {
    paths: SettingsPaths,
    current: Option<Settings>,
}

impl SettingsStore {
    /// Creates a store for the settings file inside `base_dir`.
    ///
    /// Nothing is read until the first call to [`load`](Self::load).
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            paths: SettingsPaths::new(base_dir.as_ref()),
            current: None,
        }
    }

    /// File locations this store works with.
    pub fn paths(&self) -> &SettingsPaths {
        &self.paths
    }

    /// Returns the settings document, reading it from disk on first use.
    ///
    /// A missing, unreadable or corrupt file is replaced by a freshly persisted
    /// default document; this never fails.
    #[instrument(skip(self))]
    pub fn load(&mut self) -> &Settings {
        let settings = match self.current.take() {
            Some(settings) => settings,
            None => self.read_from_disk(),
        };

        self.current.insert(settings)
    }

    /// Returns the in-memory document without touching disk.
    pub fn current(&self) -> Option<&Settings> {
        self.current.as_ref()
    }

    /// Overwrites the settings file with `settings` and makes it current.
    ///
    /// The document becomes current even if the write fails, so the running
    /// session keeps the caller's values.
    ///
    /// # Errors
    /// Returns `SlmError::ConfigIo` if the file cannot be written.
    #[instrument(skip(self, settings))]
    pub fn save(&mut self, settings: Settings) -> Result<&Settings> {
        let result = self.write_document(&settings);
        let current = self.current.insert(settings);

        match result {
            Ok(()) => Ok(&*current),
            Err(e) => {
                error!(error = %e, "Failed to save settings");
                Err(e)
            }
        }
    }

    /// Returns the settings file exactly as stored on disk.
    ///
    /// Writes the default document first if the file does not exist.
    ///
    /// # Errors
    /// Returns `SlmError::ConfigIo` if the file cannot be read back.
    pub fn load_raw_text(&mut self) -> Result<String> {
        let path = self.paths.settings_file();

        if !path.exists() {
            let defaults = self.persist_defaults();
            self.current = Some(defaults);
        }

        fs::read_to_string(&path).map_err(|e| SlmError::config_io(e, &path))
    }

    /// Drops the in-memory document so the next load reads disk again.
    pub fn reset(&mut self) {
        self.current = None;
    }

    fn read_from_disk(&self) -> Settings {
        let path = self.paths.settings_file();

        match Self::read_document(&path) {
            Ok(Some(settings)) => {
                info!("Loaded settings from {}", path.display());
                verify_settings(&self.paths, settings)
            }
            Ok(None) => {
                info!("No settings file found, creating default settings");
                self.persist_defaults()
            }
            Err(e) => {
                warn!(error = %e, "Missing or corrupted settings file, creating a new one");
                self.persist_defaults()
            }
        }
    }

    fn read_document(path: &Path) -> Result<Option<Settings>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SlmError::config_io(e, path)),
        };

        Settings::from_json(&content, path).map(Some)
    }

    fn persist_defaults(&self) -> Settings {
        let defaults = Settings::default();

        if let Err(e) = self.write_document(&defaults) {
            error!(error = %e, "Failed to persist default settings, continuing in memory");
        }

        defaults
    }

    fn write_document(&self, settings: &Settings) -> Result<()> {
        let path = self.paths.settings_file();
        let content = settings.to_json(&path)?;

        write_atomic(&path, content.as_bytes()).map_err(|e| SlmError::config_io(e, &path))
    }
}

/// Replaces `path` with `contents` via a sibling `.tmp` file and a rename, so
/// readers never observe a partially written file.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    {
        let mut file = File::create(&tmp)?;
        file.write_all(contents)?;
        file.sync_all()?;
    }

    fs::rename(&tmp, path).inspect_err(|_| {
        let _ = fs::remove_file(&tmp);
    })
}
