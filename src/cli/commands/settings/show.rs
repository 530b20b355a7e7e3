use async_trait::async_trait;

use crate::{
    cli::{CliError, Command, CommandResult, types::CommandMetadata},
    settings::SharedStore,
};

/// Prints the whole settings document as it would be saved.
pub struct ShowCommand {
    store: SharedStore,
}

impl ShowCommand {
    /// Creates a new ShowCommand reading from `store`.
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Command for ShowCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let mut store = self.store.lock().await;
        let path = store.paths().settings_file();

        store.load().to_json(&path).map_err(CliError::from)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "show".to_string(),
            description: "Show the full settings document".to_string(),
            category: "settings".to_string(),
            args: vec![],
            examples: vec!["settings show".to_string()],
        }
    }
}
