use crate::settings::SharedStore;

use super::{CliError, CommandRegistry};

/// Entry point the console uses to run commands.
///
/// Owns a registry with every built-in command registered against one
/// shared settings store.
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a service with all available commands registered.
    pub fn new(store: SharedStore) -> Self {
        let mut registry = CommandRegistry::new(store);
        registry.register_all_commands();

        CliService { registry }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist in the
    /// category, or the command's own error.
    pub async fn execute_command(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        self.registry.execute(category, command_name, args).await
    }

    /// Lists all available commands as (category, command names) pairs.
    pub fn list_all(&self) -> Vec<(String, Vec<String>)> {
        self.registry.list_commands()
    }

    /// Help text for every registered command.
    pub fn help_text(&self) -> String {
        self.registry.help_text()
    }
}
