//! Application update commands.
mod check;

pub use check::CheckCommand;

use crate::cli::CommandRegistry;

/// Registers the "update" category.
pub fn register_commands(registry: &mut CommandRegistry) {
    const CATEGORY_NAME: &str = "update";

    registry.register_command(CATEGORY_NAME, Box::new(CheckCommand));
}
