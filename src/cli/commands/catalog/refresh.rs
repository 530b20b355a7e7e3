use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    freshness::{CatalogFeed, CatalogFetcher, RefreshOutcome},
    settings::SharedStore,
};

const FEED_NAMES: &[&str] = &["titles", "versions"];

/// Downloads one catalog unless the server reports the cached copy current.
pub struct RefreshCommand {
    store: SharedStore,
}

impl RefreshCommand {
    /// Creates a new RefreshCommand saving ETags through `store`.
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Command for RefreshCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let feed: CatalogFeed = args
            .first()
            .ok_or_else(|| {
                CliError::InvalidArguments("Expected <feed> argument for 'refresh'".to_string())
            })?
            .parse()
            .map_err(CliError::InvalidArguments)?;

        let fetcher = CatalogFetcher::new()?;
        let mut store = self.store.lock().await;

        match fetcher.refresh(feed, &mut store).await? {
            RefreshOutcome::NotModified => Ok(format!("{feed}: cached copy is up to date")),
            RefreshOutcome::Downloaded { bytes, etag } => Ok(format!(
                "{feed}: downloaded {bytes} bytes to {} (etag {etag})",
                feed.cache_file(store.paths()).display()
            )),
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "refresh".to_string(),
            description: "Download a catalog if it changed".to_string(),
            category: "catalog".to_string(),
            args: vec![CommandArg {
                name: "feed".to_string(),
                description: "Catalog to refresh".to_string(),
                required: true,
                value_type: ArgType::Choice(FEED_NAMES),
            }],
            examples: vec![
                "catalog refresh titles".to_string(),
                "catalog refresh versions".to_string(),
            ],
        }
    }
}
