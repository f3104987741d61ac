//! Orchestration of the binary acquisition flows.
//!
//! The coordinator sequences release discovery, asset selection, download,
//! installation, and version bookkeeping into the three user-facing flows:
//!
//! - **ensure** — first install when no binary is present, otherwise a no-op
//! - **check** — foreground, user-initiated update check
//! - **check_available / apply** — the two-phase background check: phase 1
//!   is pure computation (fetch + compare, no side effects) returning a
//!   pending decision; phase 2 mutates state and is only entered once the
//!   caller has an explicit confirmation in hand
//!
//! The coordinator is the sole writer of the install directory and the
//! version file. Ordering guarantee: the version record is written only
//! after the installer step sequence completed without error, so a crash or
//! cancellation in between leaves the prior record intact rather than
//! advertising files that were never fully installed.
//!
//! Version comparison is exact string equality of release tags. No semantic
//! ordering is applied anywhere: "newer" means "a different tag than the
//! one currently recorded".

use crate::libs::cancel::CancelFlag;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::UpdateError;
use crate::libs::fetcher::{ArtifactSource, HttpFetcher};
use crate::libs::http::Http;
use crate::libs::installer::{self, InstallPaths};
use crate::libs::messages::Message;
use crate::libs::platform;
use crate::libs::release::{GithubFeed, Release, ReleaseFeed, APP_METADATA_NAME, APP_METADATA_VERSION};
use crate::libs::version_store::VersionStore;
use crate::msg_info;
use std::fs;
use std::path::PathBuf;

/// Directory under the app data dir where assets are downloaded before
/// installation.
pub const DOWNLOAD_DIR_NAME: &str = "downloads";

/// Result of the ensure flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// A binary was already present; nothing was touched.
    AlreadyInstalled,
    /// A fresh toolchain was installed with this release tag.
    Installed(String),
}

/// Result of the foreground check flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The recorded version matches the latest release tag.
    AlreadyCurrent(String),
    /// A different release was installed.
    Updated { from: Option<String>, to: String },
}

/// Phase-1 result of the background check: a decision request carrying
/// everything phase 2 needs, produced without side effects.
#[derive(Debug, Clone)]
pub struct PendingUpdate {
    pub release: Release,
    pub installed: Option<String>,
}

/// Sequences the acquisition components. Generic over the feed and the
/// artifact source so flows can be driven by scripted implementations.
pub struct UpdateCoordinator<F, A> {
    feed: F,
    artifacts: A,
    paths: InstallPaths,
    store: VersionStore,
    suffix: String,
    download_dir: PathBuf,
}

impl UpdateCoordinator<GithubFeed, HttpFetcher> {
    /// Builds the production coordinator for the running machine.
    ///
    /// Fails fast with `UnsupportedPlatform` before any network operation
    /// when the (os, arch) pair has no published asset.
    pub fn for_current_platform() -> Result<Self, UpdateError> {
        let suffix = platform::current()?;
        let http = Http::new(&format!("{}/{}", APP_METADATA_NAME, APP_METADATA_VERSION))?;
        let paths = InstallPaths::resolve()?;
        let download_dir = DataStorage::new().get_path(DOWNLOAD_DIR_NAME)?;

        Ok(Self::new(
            GithubFeed::new(http.clone()),
            HttpFetcher::new(http),
            paths,
            suffix.to_owned(),
            download_dir,
        ))
    }
}

impl<F, A> UpdateCoordinator<F, A>
where
    F: ReleaseFeed + Send + Sync,
    A: ArtifactSource + Send + Sync,
{
    pub fn new(feed: F, artifacts: A, paths: InstallPaths, suffix: String, download_dir: PathBuf) -> Self {
        let store = VersionStore::new(paths.version_file());
        Self {
            feed,
            artifacts,
            paths,
            store,
            suffix,
            download_dir,
        }
    }

    pub fn paths(&self) -> &InstallPaths {
        &self.paths
    }

    /// Binary presence is the authoritative installed-state signal; the
    /// version record is advisory metadata only.
    pub fn is_installed(&self) -> bool {
        self.paths.binary().is_file()
    }

    /// Recorded version of the current install, if both the binary and a
    /// readable record exist. A record without a binary counts as not
    /// installed.
    pub fn installed_version(&self) -> Option<String> {
        if !self.is_installed() {
            return None;
        }
        self.store.read().map(|record| record.version)
    }

    /// First-install flow. A no-op when a binary is already present.
    pub async fn ensure(&self, cancel: &CancelFlag) -> Result<EnsureOutcome, UpdateError> {
        if self.is_installed() {
            return Ok(EnsureOutcome::AlreadyInstalled);
        }

        msg_info!(Message::FetchingReleaseFeed);
        let release = self.feed.latest_release().await?;
        let tag = release.tag_name.clone();
        self.acquire(&release, cancel).await?;
        Ok(EnsureOutcome::Installed(tag))
    }

    /// Foreground check flow: compare, and update on any tag mismatch.
    pub async fn check(&self, cancel: &CancelFlag) -> Result<CheckOutcome, UpdateError> {
        match self.check_available().await? {
            None => Ok(CheckOutcome::AlreadyCurrent(
                self.installed_version().unwrap_or_default(),
            )),
            Some(pending) => {
                let from = pending.installed.clone();
                let to = self.apply(pending, cancel).await?;
                Ok(CheckOutcome::Updated { from, to })
            }
        }
    }

    /// Phase 1 of the background check: fetch and compare only. No side
    /// effects beyond the metadata request.
    pub async fn check_available(&self) -> Result<Option<PendingUpdate>, UpdateError> {
        let release = self.feed.latest_release().await?;
        let installed = self.installed_version();

        if installed.as_deref() == Some(release.tag_name.as_str()) {
            return Ok(None);
        }
        Ok(Some(PendingUpdate { release, installed }))
    }

    /// Phase 2 of the background check: download, install, and record.
    /// Callers must hold an explicit user confirmation before entering.
    pub async fn apply(&self, pending: PendingUpdate, cancel: &CancelFlag) -> Result<String, UpdateError> {
        let tag = pending.release.tag_name.clone();
        self.acquire(&pending.release, cancel).await?;
        Ok(tag)
    }

    /// The shared download → install → record sequence.
    ///
    /// Cancellation checkpoints: the fetcher observes the flag between
    /// chunks, and the flag is checked once more after the transfer and
    /// before installation. Either way the downloaded artifact is deleted
    /// and no durable state is mutated. Once extraction begins, the
    /// sequence runs to completion or failure.
    async fn acquire(&self, release: &Release, cancel: &CancelFlag) -> Result<(), UpdateError> {
        let asset = release.asset_for(&self.suffix)?;
        fs::create_dir_all(&self.download_dir)?;
        let archive = self.download_dir.join(&asset.name);

        msg_info!(Message::DownloadingAsset(asset.name.clone()));
        let downloaded = self
            .artifacts
            .download(&asset.browser_download_url, &archive, cancel)
            .await;

        if let Err(e) = downloaded {
            remove_artifact(&archive);
            return Err(e);
        }
        if cancel.is_cancelled() {
            remove_artifact(&archive);
            return Err(UpdateError::Cancelled);
        }

        msg_info!(Message::InstallingRelease(release.tag_name.clone()));
        installer::install(&archive, self.paths.root())?;
        self.store.write(&release.tag_name)?;
        Ok(())
    }
}

/// Best-effort removal of an abandoned download. Cleanup failures are
/// logged, never propagated.
fn remove_artifact(archive: &std::path::Path) {
    if archive.exists() {
        if let Err(e) = fs::remove_file(archive) {
            tracing::warn!(archive = %archive.display(), error = %e, "could not remove abandoned download");
        }
    }
}
