use async_trait::async_trait;
use tracing::info;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        path_ops::{navigate_path, set_value_at_path},
        types::{ArgType, CommandArg, CommandMetadata},
    },
    settings::{Settings, SharedStore},
};

/// Changes one settings value and saves the whole document.
///
/// The new value is read as the type the field already has and rejected if
/// the field cannot hold it. A failed write is reported, but the change
/// stays in effect for this session.
pub struct SetCommand {
    store: SharedStore,
}

impl SetCommand {
    /// Creates a new SetCommand writing through `store`.
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Command for SetCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let path = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <path> argument for 'set' command".to_string())
        })?;
        let raw = args.get(1).map(String::as_str).unwrap_or_default();

        let mut store = self.store.lock().await;

        let mut document = serde_json::to_value(store.load())
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        set_value_at_path(&mut document, path, raw)?;
        let requested = navigate_path(&document, path)?.clone();

        let updated: Settings = serde_json::from_value(document)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        // The document decoder replaces out-of-range values with defaults.
        let decoded = serde_json::to_value(&updated)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        if navigate_path(&decoded, path)? != &requested {
            return Err(CliError::InvalidArguments(format!(
                "Value '{raw}' is out of range for '{path}'"
            )));
        }

        store.save(updated)?;
        info!(path = %path, value = %raw, "Setting changed from console");

        Ok(format!("Set new value '{raw}' at path '{path}'"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "set".to_string(),
            description: "Set a settings value and save".to_string(),
            category: "settings".to_string(),
            args: vec![
                CommandArg {
                    name: "path".to_string(),
                    description: "Settings path".to_string(),
                    required: true,
                    value_type: ArgType::Path,
                },
                CommandArg {
                    name: "value".to_string(),
                    description: "New value, read as the field's type; empty clears a list"
                        .to_string(),
                    required: false,
                    value_type: ArgType::String,
                },
            ],
            examples: vec![
                "settings set debug true".to_string(),
                "settings set gui_page_size 50".to_string(),
                "settings set ignore_dlc_title_ids 01007F600B135007,0100000000001001".to_string(),
            ],
        }
    }
}
