use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        formatting::format_json_value,
        path_ops::navigate_path,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    settings::SharedStore,
};

/// Prints one settings value addressed by a dot path.
///
/// ```text
/// slm> settings get gui_page_size
/// gui_page_size: 100
/// slm> settings get organize_options.folder_name_template
/// organize_options.folder_name_template: "{TITLE_NAME}"
/// ```
pub struct GetCommand {
    store: SharedStore,
}

impl GetCommand {
    /// Creates a new GetCommand reading from `store`.
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Command for GetCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let path = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <path> argument for 'get' command".to_string())
        })?;

        let document = {
            let mut store = self.store.lock().await;
            serde_json::to_value(store.load())
                .map_err(|e| CliError::ConfigError(e.to_string()))?
        };

        let value = navigate_path(&document, path)?;

        Ok(format!("{}: {}", path, format_json_value(value)))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "get".to_string(),
            description: "Get a settings value".to_string(),
            category: "settings".to_string(),
            args: vec![CommandArg {
                name: "path".to_string(),
                description: "Settings path (e.g., organize_options.rename_files)".to_string(),
                required: true,
                value_type: ArgType::Path,
            }],
            examples: vec![
                "settings get gui_page_size".to_string(),
                "settings get organize_options.rename_files".to_string(),
                "settings get ignore_dlc_title_ids.0".to_string(),
            ],
        }
    }
}
