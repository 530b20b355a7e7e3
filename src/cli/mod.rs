//! Command line flags and the text console front end.
//!
//! The console runs a hierarchical command system over the shared settings
//! store. Commands are organized by category and generate their help text
//! from metadata.

mod args;
mod commands;
mod console;
pub mod formatting;
mod path_ops;
mod registry;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use args::Args;
pub use console::{ConsoleFrontEnd, ConsoleInput, split_words};
pub use registry::CommandRegistry;
pub use service::CliService;
pub use types::{ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult};
