//! Catalog cache commands.
mod refresh;
mod status;

pub use refresh::RefreshCommand;
pub use status::StatusCommand;

use crate::{cli::CommandRegistry, settings::SharedStore};

/// Registers the "catalog" category: refreshing and inspecting the cached
/// title and version catalogs.
pub fn register_commands(registry: &mut CommandRegistry, store: SharedStore) {
    const CATEGORY_NAME: &str = "catalog";

    registry.register_command(CATEGORY_NAME, Box::new(RefreshCommand::new(store.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(StatusCommand::new(store)));
}
