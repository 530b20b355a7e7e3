use std::cmp::Ordering;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, instrument};

use super::{http_client, version::compare_versions};
use crate::{Result, SlmError};

/// Endpoint publishing `{"version": "<semver>"}` for the latest release.
pub const RELEASE_VERSION_URL: &str =
    "https://raw.githubusercontent.com/firebat20/switch-library-manager/master/version.json";

/// Version of this build.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Deserialize)]
struct ReleaseInfo {
    version: String,
}

/// Outcome of a release check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseStatus {
    /// Version of the running build.
    pub local: String,
    /// Version published by the release endpoint.
    pub remote: String,
    /// Whether `remote` is strictly greater than `local`.
    pub newer_available: bool,
}

/// Asks the release endpoint whether a newer build exists.
///
/// Every call is a fresh round trip; nothing is cached or retried.
#[derive(Debug, Clone)]
pub struct ReleaseChecker {
    client: Client,
    endpoint: String,
    local_version: String,
}

impl ReleaseChecker {
    /// Checker for the published endpoint and this build's version.
    ///
    /// # Errors
    /// Returns `SlmError::Network` if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Self::with_endpoint(RELEASE_VERSION_URL, APP_VERSION)
    }

    /// Checker for an arbitrary endpoint and local version.
    ///
    /// # Errors
    /// Returns `SlmError::Network` if the HTTP client cannot be built.
    pub fn with_endpoint(endpoint: &str, local_version: &str) -> Result<Self> {
        Ok(Self {
            client: http_client(endpoint)?,
            endpoint: endpoint.to_string(),
            local_version: local_version.to_string(),
        })
    }

    /// Returns true only if the published version is strictly newer.
    ///
    /// # Errors
    /// Returns `SlmError::Network` if the endpoint is unreachable, times out,
    /// or returns a body without a parsable `version`.
    pub async fn check_for_newer_release(&self) -> Result<bool> {
        Ok(self.check().await?.newer_available)
    }

    /// Fetches the published version and compares it with the local one.
    ///
    /// # Errors
    /// Same as [`check_for_newer_release`](Self::check_for_newer_release).
    #[instrument(skip_all)]
    pub async fn check(&self) -> Result<ReleaseStatus> {
        let remote = self.fetch_remote_version().await?;

        let ordering = compare_versions(&remote, &self.local_version).map_err(|e| {
            SlmError::network(format!("invalid version '{remote}': {e}"), &self.endpoint)
        })?;

        let status = ReleaseStatus {
            local: self.local_version.clone(),
            newer_available: ordering == Ordering::Greater,
            remote,
        };

        info!(
            endpoint = %self.endpoint,
            local = %status.local,
            remote = %status.remote,
            newer = status.newer_available,
            "Release check finished"
        );

        Ok(status)
    }

    async fn fetch_remote_version(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| SlmError::network(e, &self.endpoint))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SlmError::network(
                format!("unexpected status {status}"),
                &self.endpoint,
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SlmError::network(e, &self.endpoint))?;
        debug!(bytes = body.len(), "Received release info");

        let info: ReleaseInfo = serde_json::from_str(&body)
            .map_err(|e| SlmError::network(format!("unparsable body: {e}"), &self.endpoint))?;

        Ok(info.version)
    }
}
