use async_trait::async_trait;

use crate::{
    cli::{
        Command, CommandResult,
        formatting::format_header,
        types::CommandMetadata,
    },
    freshness::CatalogFeed,
    settings::SharedStore,
};

/// Shows each catalog's URL, stored ETag and whether the next refresh can
/// be conditional.
pub struct StatusCommand {
    store: SharedStore,
}

impl StatusCommand {
    /// Creates a new StatusCommand reading from `store`.
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Command for StatusCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let mut store = self.store.lock().await;
        let settings = store.load().clone();
        let paths = store.paths();

        let mut lines = Vec::new();
        for feed in CatalogFeed::ALL {
            let etag = feed.etag(&settings);
            let cache_file = feed.cache_file(paths);

            lines.push(format_header(feed.name()));
            lines.push(format!("  url:    {}", feed.url(&settings)));
            lines.push(format!(
                "  etag:   {}",
                if etag == feed.sentinel() { "(never fetched)" } else { etag }
            ));
            lines.push(format!(
                "  cache:  {} ({})",
                cache_file.display(),
                if cache_file.exists() { "present" } else { "missing" }
            ));
            lines.push(format!(
                "  revalidate: {}",
                feed.can_revalidate(&settings, paths)
            ));
        }

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "status".to_string(),
            description: "Show catalog URLs, ETags and cache files".to_string(),
            category: "catalog".to_string(),
            args: vec![],
            examples: vec!["catalog status".to_string()],
        }
    }
}
