use async_trait::async_trait;
use thiserror::Error;

use crate::SlmError;

/// Errors that can occur during console command execution.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command or category was not found in the registry.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Invalid arguments were provided to a command.
    ///
    /// Returned when argument validation fails, such as missing required
    /// arguments, too many arguments, or values of the wrong type.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The settings store failed, e.g. a save could not be written.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A remote service failed.
    #[error("Service error: {0}")]
    ServiceError(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<SlmError> for CliError {
    fn from(error: SlmError) -> Self {
        match error {
            SlmError::Io(e) => CliError::IoError(e),
            e if e.is_settings_error() => CliError::ConfigError(e.to_string()),
            e => CliError::ServiceError(e.to_string()),
        }
    }
}

/// Type alias for command execution results.
///
/// Commands return their output text or a `CliError`.
pub type CommandResult = Result<String, CliError>;

/// Specification for a single command argument.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument (e.g., "path", "value", "feed").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,

    /// The expected type of this argument for validation and help display.
    pub value_type: ArgType,
}

/// Type classification for command arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgType {
    /// A general string value.
    String,

    /// One of a fixed set of names.
    Choice(&'static [&'static str]),

    /// A dot-separated settings path.
    Path,
}

/// Complete metadata for a console command.
///
/// Single source of truth for a command's identity, arguments and usage;
/// the registry uses it for help text and argument count validation.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command name (e.g., "get", "set", "refresh").
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// Specification of all arguments this command accepts.
    pub args: Vec<CommandArg>,

    /// Example usage strings to show in help text.
    pub examples: Vec<String>,

    /// Category this command belongs to (e.g., "settings", "catalog").
    pub category: String,
}

/// Interface for all console commands.
///
/// Commands receive their dependencies through their constructors.
#[async_trait]
pub trait Command: Send + Sync {
    /// Executes the command with the provided arguments.
    ///
    /// The registry has already checked the argument count against
    /// [`metadata`](Self::metadata); the command validates values itself.
    ///
    /// # Errors
    ///
    /// Returns `CliError` for invalid argument values, settings store
    /// failures, remote service failures or I/O failures.
    async fn execute(&self, args: &[String]) -> CommandResult;

    /// Returns the complete metadata for this command.
    fn metadata(&self) -> CommandMetadata;
}
