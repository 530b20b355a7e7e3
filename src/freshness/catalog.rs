use std::{fmt, path::PathBuf, str::FromStr};

use reqwest::{
    Client, StatusCode,
    header::{ETAG, IF_NONE_MATCH},
};
use tracing::{info, instrument, warn};

use super::http_client;
use crate::{
    Result, SlmError,
    settings::{Settings, SettingsPaths, SettingsStore, defaults, write_atomic},
};

/// One of the two remotely published metadata catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFeed {
    /// Title names, ids and regions.
    Titles,
    /// Latest update version per title.
    Versions,
}

impl CatalogFeed {
    /// Both feeds.
    pub const ALL: [CatalogFeed; 2] = [CatalogFeed::Titles, CatalogFeed::Versions];

    /// Short name used on the console.
    pub fn name(&self) -> &'static str {
        match self {
            CatalogFeed::Titles => "titles",
            CatalogFeed::Versions => "versions",
        }
    }

    /// Endpoint configured for this feed.
    pub fn url<'a>(&self, settings: &'a Settings) -> &'a str {
        match self {
            CatalogFeed::Titles => &settings.titles_json_url,
            CatalogFeed::Versions => &settings.versions_json_url,
        }
    }

    /// ETag stored for this feed.
    pub fn etag<'a>(&self, settings: &'a Settings) -> &'a str {
        match self {
            CatalogFeed::Titles => &settings.titles_etag,
            CatalogFeed::Versions => &settings.versions_etag,
        }
    }

    /// Replaces the stored ETag for this feed.
    pub fn set_etag(&self, settings: &mut Settings, etag: String) {
        match self {
            CatalogFeed::Titles => settings.titles_etag = etag,
            CatalogFeed::Versions => settings.versions_etag = etag,
        }
    }

    /// "Never fetched" ETag for this feed.
    pub fn sentinel(&self) -> &'static str {
        match self {
            CatalogFeed::Titles => defaults::TITLES_ETAG_SENTINEL,
            CatalogFeed::Versions => defaults::VERSIONS_ETAG_SENTINEL,
        }
    }

    /// Local cache file for this feed.
    pub fn cache_file(&self, paths: &SettingsPaths) -> PathBuf {
        match self {
            CatalogFeed::Titles => paths.titles_cache(),
            CatalogFeed::Versions => paths.versions_cache(),
        }
    }

    /// Whether the next refresh may be conditional.
    ///
    /// Requires a real (non-sentinel) ETag and a cache file to fall back on
    /// when the server answers "not modified".
    pub fn can_revalidate(&self, settings: &Settings, paths: &SettingsPaths) -> bool {
        self.etag(settings) != self.sentinel() && self.cache_file(paths).exists()
    }
}

impl fmt::Display for CatalogFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CatalogFeed {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "titles" => Ok(CatalogFeed::Titles),
            "versions" => Ok(CatalogFeed::Versions),
            other => Err(format!("unknown catalog '{other}', expected titles or versions")),
        }
    }
}

/// Result of a catalog refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Server confirmed the cached copy is current.
    NotModified,
    /// A new copy was written to the cache file.
    Downloaded {
        /// Size of the downloaded catalog.
        bytes: usize,
        /// ETag now stored for the feed.
        etag: String,
    },
}

/// Downloads catalogs with conditional GETs keyed on the stored ETag.
#[derive(Debug, Clone)]
pub struct CatalogFetcher {
    client: Client,
}

impl CatalogFetcher {
    /// Creates a fetcher with the shared HTTP client settings.
    ///
    /// # Errors
    /// Returns `SlmError::Network` if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: http_client("catalog")?,
        })
    }

    /// Refreshes one feed's cache file.
    ///
    /// Sends `If-None-Match` when the feed can be revalidated. On a fresh
    /// download the body replaces the cache file and the response ETag (or
    /// the sentinel, if the server sent none) is saved through `store`.
    ///
    /// # Errors
    /// Returns `SlmError::Network` for request or status failures,
    /// `SlmError::Io` if the cache file cannot be written and
    /// `SlmError::ConfigIo` if the new ETag cannot be saved.
    #[instrument(skip(self, store))]
    pub async fn refresh(
        &self,
        feed: CatalogFeed,
        store: &mut SettingsStore,
    ) -> Result<RefreshOutcome> {
        let mut settings = store.load().clone();
        let url = feed.url(&settings).to_string();
        let cache_file = feed.cache_file(store.paths());

        let mut request = self.client.get(&url);
        if feed.can_revalidate(&settings, store.paths()) {
            request = request.header(IF_NONE_MATCH, feed.etag(&settings));
        }

        let response = request
            .send()
            .await
            .map_err(|e| SlmError::network(e, &url))?;

        let status = response.status();
        if status == StatusCode::NOT_MODIFIED {
            info!(%feed, "Catalog not modified");
            return Ok(RefreshOutcome::NotModified);
        }

        if !status.is_success() {
            return Err(SlmError::network(format!("unexpected status {status}"), &url));
        }

        let etag = match response.headers().get(ETAG).map(|v| v.to_str()) {
            Some(Ok(etag)) => etag.to_string(),
            Some(Err(_)) | None => {
                warn!(%feed, "Response carried no usable ETag");
                feed.sentinel().to_string()
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| SlmError::network(e, &url))?;

        write_atomic(&cache_file, &body)?;
        info!(%feed, bytes = body.len(), %etag, "Catalog downloaded");

        feed.set_etag(&mut settings, etag.clone());
        store.save(settings)?;

        Ok(RefreshOutcome::Downloaded {
            bytes: body.len(),
            etag,
        })
    }
}
