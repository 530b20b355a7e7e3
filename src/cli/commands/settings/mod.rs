//! Settings document commands.
mod get;
mod reload;
mod schema;
mod set;
mod show;

pub use get::GetCommand;
pub use reload::ReloadCommand;
pub use schema::SchemaCommand;
pub use set::SetCommand;
pub use show::ShowCommand;

use crate::{cli::CommandRegistry, settings::SharedStore};

/// Registers the "settings" category: reading, editing and reloading the
/// settings document.
pub fn register_commands(registry: &mut CommandRegistry, store: SharedStore) {
    const CATEGORY_NAME: &str = "settings";

    registry.register_command(CATEGORY_NAME, Box::new(GetCommand::new(store.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(SetCommand::new(store.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(ShowCommand::new(store.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(SchemaCommand));
    registry.register_command(CATEGORY_NAME, Box::new(ReloadCommand::new(store)));
}
