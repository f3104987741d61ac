//! GitHub release feed client.
//!
//! Fetches the latest published release for the managed toolchain and
//! exposes asset selection by platform suffix. The feed endpoint is fixed
//! per build from the repository coordinates in `Cargo.toml` metadata.
//!
//! Releases are ephemeral: each check fetches fresh metadata, and nothing
//! from a previous fetch is cached. "Newer" is never computed here — the
//! coordinator compares tags by exact string equality only.

use crate::libs::error::UpdateError;
use crate::libs::http::Http;
use async_trait::async_trait;
use serde::Deserialize;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

/// One published release: a tag plus its downloadable assets.
///
/// Extra fields in the feed response are ignored.
#[derive(Deserialize, Debug, Clone)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// One downloadable file belonging to a release.
#[derive(Deserialize, Debug, Clone)]
pub struct Asset {
    pub name: String,
    pub browser_download_url: String,
}

impl Release {
    /// Selects the asset whose name carries the given platform suffix.
    ///
    /// Reports the full list of available asset names on a miss so the
    /// failure is diagnosable from the error message alone.
    pub fn asset_for(&self, suffix: &str) -> Result<&Asset, UpdateError> {
        self.assets
            .iter()
            .find(|asset| asset.name.contains(suffix))
            .ok_or_else(|| UpdateError::NoMatchingAsset {
                suffix: suffix.to_owned(),
                available: self.assets.iter().map(|asset| asset.name.clone()).collect(),
            })
    }
}

/// Source of release metadata. The coordinator only ever talks to this
/// trait, so flows can be driven by a scripted feed in tests.
#[async_trait]
pub trait ReleaseFeed {
    async fn latest_release(&self) -> Result<Release, UpdateError>;
}

/// Release feed backed by the GitHub "latest release" endpoint.
pub struct GithubFeed {
    http: Http,
    url: String,
}

impl GithubFeed {
    pub fn new(http: Http) -> Self {
        Self {
            http,
            url: format!(
                "https://api.github.com/repos/{}/{}/releases/latest",
                APP_METADATA_OWNER, APP_METADATA_REPO
            ),
        }
    }

    /// Overrides the feed endpoint. Used to point a coordinator at a
    /// mirror or a local fixture server.
    pub fn with_url(http: Http, url: String) -> Self {
        Self { http, url }
    }
}

#[async_trait]
impl ReleaseFeed for GithubFeed {
    async fn latest_release(&self) -> Result<Release, UpdateError> {
        let response = self.http.get_following(&self.url).await?;
        let body = response
            .text()
            .await
            .map_err(|e| UpdateError::transport(&self.url, e))?;

        // Parse failures are surfaced distinctly from transport failures so
        // "server unreachable" and "server replied with something
        // unexpected" stay tellable apart in diagnostics.
        let release: Release = serde_json::from_str(&body).map_err(|e| UpdateError::MalformedFeed {
            message: e.to_string(),
        })?;

        tracing::debug!(tag = %release.tag_name, assets = release.assets.len(), "fetched latest release");
        Ok(release)
    }
}
