use async_trait::async_trait;

use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    settings::SharedStore,
};

/// Drops the in-memory document and reads the settings file again,
/// picking up edits made outside the application.
pub struct ReloadCommand {
    store: SharedStore,
}

impl ReloadCommand {
    /// Creates a new ReloadCommand for `store`.
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Command for ReloadCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let mut store = self.store.lock().await;

        store.reset();
        store.load();

        Ok(format!(
            "Reloaded settings from {}",
            store.paths().settings_file().display()
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "reload".to_string(),
            description: "Re-read the settings file from disk".to_string(),
            category: "settings".to_string(),
            args: vec![],
            examples: vec!["settings reload".to_string()],
        }
    }
}
