//! Persistent settings document and its store.
//!
//! The document lives as `settings.json` in the application's working
//! directory. [`SettingsStore`] owns it: it creates the file with defaults on
//! first use, repairs it on every load and rewrites it in full on every save.

pub mod defaults;
mod lenient;
mod paths;
mod store;
mod template;
mod verify;


pub use paths::SettingsPaths;
pub use store::SettingsStore;
pub(crate) use store::write_atomic;
pub use template::{NameTemplate, TemplateToken};

use std::{path::Path, sync::Arc};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Result, SlmError};

/// Settings store shared between tasks; every load/save goes through the lock.
pub type SharedStore = Arc<tokio::sync::Mutex<SettingsStore>>;

/// How the organize engine names and lays out library files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OrganizeOptions {
    /// Put every game (and its updates/DLC) in its own folder.
    #[serde(default, deserialize_with = "lenient::zero")]
    pub create_folder_per_game: bool,

    /// Sub-folder for DLC files; empty keeps them next to the base game.
    #[serde(default, deserialize_with = "lenient::zero")]
    pub dlc_folder: String,

    /// Sub-folder for update files; empty keeps them next to the base game.
    #[serde(default, deserialize_with = "lenient::zero")]
    pub updates_folder: String,

    /// Rename files using `file_name_template`.
    #[serde(default, deserialize_with = "lenient::zero")]
    pub rename_files: bool,

    /// Remove folders left empty after organizing.
    #[serde(default, deserialize_with = "lenient::zero")]
    pub delete_empty_folders: bool,

    /// Remove update files superseded by a newer update.
    #[serde(default, deserialize_with = "lenient::zero")]
    pub delete_old_update_files: bool,

    /// Folder naming template, e.g. `{TITLE_NAME}`.
    #[serde(default, deserialize_with = "lenient::zero")]
    pub folder_name_template: String,

    /// Strip characters the console's filesystem cannot store.
    #[serde(
        default = "defaults::switch_safe_file_names",
        deserialize_with = "lenient::switch_safe_file_names"
    )]
    pub switch_safe_file_names: bool,

    /// File naming template.
    #[serde(default, deserialize_with = "lenient::zero")]
    pub file_name_template: String,

    /// Organize updates and DLC even when their base game is not in the library.
    #[serde(default, deserialize_with = "lenient::zero")]
    pub process_when_missing_base_game: bool,
}

impl OrganizeOptions {
    /// Values a document gets when it omits `organize_options` entirely.
    pub fn base() -> Self {
        Self {
            create_folder_per_game: false,
            dlc_folder: String::new(),
            updates_folder: String::new(),
            rename_files: false,
            delete_empty_folders: false,
            delete_old_update_files: false,
            folder_name_template: String::new(),
            switch_safe_file_names: defaults::switch_safe_file_names(),
            file_name_template: String::new(),
            process_when_missing_base_game: false,
        }
    }
}

impl Default for OrganizeOptions {
    fn default() -> Self {
        Self {
            folder_name_template: defaults::folder_name_template(),
            file_name_template: defaults::file_name_template(),
            ..Self::base()
        }
    }
}

/// The persisted settings document.
///
/// Field order here is the order written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Settings {
    /// Version catalog endpoint.
    #[serde(default, deserialize_with = "lenient::zero")]
    pub versions_json_url: String,

    /// ETag of the cached version catalog.
    #[serde(default, deserialize_with = "lenient::zero")]
    pub versions_etag: String,

    /// Title catalog endpoint.
    #[serde(default, deserialize_with = "lenient::zero")]
    pub titles_json_url: String,

    /// ETag of the cached title catalog.
    #[serde(default, deserialize_with = "lenient::zero")]
    pub titles_etag: String,

    /// Path to the console key file used by the file parser.
    #[serde(default, deserialize_with = "lenient::zero")]
    pub prod_keys: String,

    /// Primary library folder.
    #[serde(default, deserialize_with = "lenient::zero")]
    pub folder: String,

    /// Additional folders to scan.
    #[serde(default, deserialize_with = "lenient::zero")]
    pub scan_folders: Vec<String>,

    /// Start the graphical front end instead of the console.
    #[serde(default, deserialize_with = "lenient::zero")]
    pub gui: bool,

    /// Verbose logging.
    #[serde(default, deserialize_with = "lenient::zero")]
    pub debug: bool,

    /// Report titles with a newer update available.
    #[serde(default, deserialize_with = "lenient::zero")]
    pub check_for_missing_updates: bool,

    /// Report titles with DLC not present locally.
    #[serde(default, deserialize_with = "lenient::zero")]
    pub check_for_missing_dlc: bool,

    /// Hide catalog entries missing from the library.
    #[serde(default, deserialize_with = "lenient::zero")]
    pub hide_missing_games: bool,

    /// Hide demo titles.
    #[serde(default, deserialize_with = "lenient::zero")]
    pub hide_demo_games: bool,

    /// Organize engine policy.
    #[serde(
        default = "OrganizeOptions::base",
        deserialize_with = "lenient::organize_options"
    )]
    pub organize_options: OrganizeOptions,

    /// Descend into sub-folders while scanning.
    #[serde(default, deserialize_with = "lenient::zero")]
    pub scan_recursively: bool,

    /// Rows per page in the graphical listing.
    #[serde(
        default = "defaults::gui_page_size",
        deserialize_with = "lenient::gui_page_size"
    )]
    pub gui_page_size: u32,

    /// Skip update checks for DLC titles.
    #[serde(default, deserialize_with = "lenient::zero")]
    pub ignore_dlc_updates: bool,

    /// Title ids excluded from missing-DLC reports.
    #[serde(
        default = "defaults::ignore_dlc_title_ids",
        deserialize_with = "lenient::ignore_dlc_title_ids"
    )]
    pub ignore_dlc_title_ids: Vec<String>,

    /// Title ids excluded from missing-update reports.
    #[serde(default, deserialize_with = "lenient::zero")]
    pub ignore_update_title_ids: Vec<String>,

    /// File extensions skipped while scanning.
    #[serde(default, deserialize_with = "lenient::zero")]
    pub ignore_file_types: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            versions_json_url: defaults::DEFAULT_VERSIONS_JSON_URL.to_string(),
            versions_etag: defaults::VERSIONS_ETAG_SENTINEL.to_string(),
            titles_json_url: defaults::DEFAULT_TITLES_JSON_URL.to_string(),
            titles_etag: defaults::TITLES_ETAG_SENTINEL.to_string(),
            prod_keys: String::new(),
            folder: String::new(),
            scan_folders: Vec::new(),
            gui: true,
            debug: false,
            check_for_missing_updates: true,
            check_for_missing_dlc: true,
            hide_missing_games: false,
            hide_demo_games: false,
            organize_options: OrganizeOptions::default(),
            scan_recursively: true,
            gui_page_size: defaults::GUI_PAGE_SIZE,
            ignore_dlc_updates: false,
            ignore_dlc_title_ids: defaults::ignore_dlc_title_ids(),
            ignore_update_title_ids: Vec::new(),
            ignore_file_types: Vec::new(),
        }
    }
}

impl Settings {
    /// Decodes a settings document, tolerating bad individual fields.
    ///
    /// # Errors
    /// Returns `SlmError::ConfigCorrupt` if the content is not a JSON object.
    pub fn from_json(content: &str, path: &Path) -> Result<Self> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| SlmError::config_corrupt(e, path))?;

        if !value.is_object() {
            return Err(SlmError::config_corrupt(
                "top-level value is not an object",
                path,
            ));
        }

        Settings::deserialize(value).map_err(|e| SlmError::config_corrupt(e, path))
    }

    /// Encodes the document as indented JSON in declaration order.
    ///
    /// # Errors
    /// Returns `SlmError::ConfigIo` if serialization fails.
    pub fn to_json(&self, path: &Path) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| SlmError::config_io(e, path))
    }

    /// JSON schema of the document for external editors.
    ///
    /// # Errors
    /// Returns `SlmError::ConfigIo` if the schema cannot be encoded.
    pub fn json_schema() -> Result<Value> {
        let schema = schemars::schema_for!(Settings);
        serde_json::to_value(&schema)
            .map_err(|e| SlmError::config_io(e, Path::new(defaults::SETTINGS_FILENAME)))
    }
}
