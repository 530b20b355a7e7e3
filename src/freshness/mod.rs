//! Remote freshness checks.
//!
//! Two independent mechanisms live here: the release check compares this
//! build's version with the published one, and catalog refreshes use the
//! per-feed ETags stored in the settings document to avoid re-downloading
//! unchanged metadata.

mod catalog;
mod release;
mod version;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogFeed, CatalogFetcher, RefreshOutcome};
pub use release::{APP_VERSION, RELEASE_VERSION_URL, ReleaseChecker, ReleaseStatus};
pub use version::{compare_versions, parse_version};

use std::time::Duration;

use reqwest::Client;

use crate::{Result, SlmError};

/// Upper bound on any single request, connection included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("slm/", env!("CARGO_PKG_VERSION"));

fn http_client(endpoint: &str) -> Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| SlmError::network(e, endpoint))
}
