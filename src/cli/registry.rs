use std::collections::HashMap;

use crate::settings::SharedStore;

use super::{
    CliError, Command,
    commands::{catalog, settings, update},
    formatting::{format_category, format_command, format_description, format_header, format_usage},
    types::CommandMetadata,
};

/// Registry for console commands organized by category.
///
/// ```text
/// registry
/// ├── catalog
/// │   ├── refresh
/// │   └── status
/// ├── settings
/// │   ├── get
/// │   ├── reload
/// │   ├── schema
/// │   ├── set
/// │   └── show
/// └── update
///     └── check
/// ```
pub struct CommandRegistry {
    /// Nested HashMap structure: category name -> (command name -> command implementation)
    categories: HashMap<String, HashMap<String, Box<dyn Command>>>,
    store: SharedStore,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    ///
    /// Commands are added with [`register_command`](Self::register_command) or
    /// all at once with [`register_all_commands`](Self::register_all_commands).
    pub fn new(store: SharedStore) -> Self {
        Self {
            categories: HashMap::new(),
            store,
        }
    }

    /// Registers a command in the specified category.
    ///
    /// The command's metadata name is its key; a command with the same name
    /// in the same category is replaced.
    pub fn register_command(&mut self, category: &str, command: Box<dyn Command>) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(command.metadata().name, command);
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` if the category or command does not
    /// exist, `CliError::InvalidArguments` if the argument count is wrong, or
    /// whatever the command itself returns.
    pub async fn execute(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        let found_category = self.categories.get(category).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find category '{category}'"))
        })?;

        let found_command = found_category.get(command_name).ok_or_else(|| {
            CliError::CommandNotFound(format!(
                "Failed to find command '{command_name}' in '{category}'"
            ))
        })?;

        Self::validate_args(&found_command.metadata(), args)?;

        found_command.execute(args).await
    }

    /// Lists all registered commands organized by category.
    ///
    /// Categories and commands are sorted alphabetically for consistent display.
    pub fn list_commands(&self) -> Vec<(String, Vec<String>)> {
        let mut categories: Vec<(String, Vec<String>)> = self
            .categories
            .iter()
            .map(|(category, commands)| {
                let mut command_list: Vec<String> = commands.keys().cloned().collect();
                command_list.sort();

                (category.clone(), command_list)
            })
            .collect();

        categories.sort();

        categories
    }

    /// Help text listing every command with its arguments and description.
    pub fn help_text(&self) -> String {
        let mut lines = vec![format_header("Commands:")];

        for (category, commands) in self.list_commands() {
            lines.push(format_category(&category));

            for name in commands {
                let Some(command) = self
                    .categories
                    .get(&category)
                    .and_then(|commands| commands.get(&name))
                else {
                    continue;
                };
                let metadata = command.metadata();

                let args: Vec<String> = metadata
                    .args
                    .iter()
                    .map(|arg| {
                        if arg.required {
                            format!("<{}>", arg.name)
                        } else {
                            format!("[{}]", arg.name)
                        }
                    })
                    .collect();

                lines.push(format!(
                    "  {} {} {}",
                    format_command(&metadata.name),
                    format_usage(&args.join(" ")),
                    format_description(&metadata.description)
                ));
            }
        }

        lines.push(format!(
            "{} {}",
            format_command("help"),
            format_description("Show this list")
        ));
        lines.push(format!(
            "{} {}",
            format_command("exit"),
            format_description("Leave the console")
        ));

        lines.join("\n")
    }

    fn validate_args(metadata: &CommandMetadata, args: &[String]) -> Result<(), CliError> {
        let required_count = metadata.args.iter().filter(|arg| arg.required).count();
        let total_count = metadata.args.len();

        if args.len() < required_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at least {} arguments, got {}",
                required_count,
                args.len(),
            )));
        }

        if args.len() > total_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at most {} arguments, got {}",
                total_count,
                args.len(),
            )));
        }

        Ok(())
    }

    /// Registers all available console commands in their respective categories.
    pub fn register_all_commands(&mut self) {
        settings::register_commands(self, self.store.clone());
        catalog::register_commands(self, self.store.clone());
        update::register_commands(self);
    }
}
