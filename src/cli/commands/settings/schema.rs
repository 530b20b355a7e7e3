use async_trait::async_trait;

use crate::{
    cli::{CliError, Command, CommandResult, types::CommandMetadata},
    settings::Settings,
};

/// Prints the JSON schema of the settings document for external editors.
pub struct SchemaCommand;

#[async_trait]
impl Command for SchemaCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let schema = Settings::json_schema()?;

        serde_json::to_string_pretty(&schema).map_err(|e| CliError::ConfigError(e.to_string()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "schema".to_string(),
            description: "Print the settings JSON schema".to_string(),
            category: "settings".to_string(),
            args: vec![],
            examples: vec!["settings schema".to_string()],
        }
    }
}
