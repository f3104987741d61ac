//! Version bookkeeping for the installed toolchain.
//!
//! A single `version.json` file inside the install root is the durable
//! record of what was installed and when. It is advisory metadata only:
//! presence of the binary is the authoritative "is it installed" signal,
//! and a missing or corrupt version file must never block the consumer
//! from using an otherwise valid install. Reads are therefore lenient and
//! return `None` instead of raising.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::libs::error::UpdateError;

pub const VERSION_FILE_NAME: &str = "version.json";

/// The persisted install record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InstalledVersion {
    pub version: String,
    #[serde(rename = "installedAt")]
    pub installed_at: DateTime<Utc>,
}

/// Reads and writes the `version.json` record at a fixed path.
#[derive(Clone, Debug)]
pub struct VersionStore {
    path: PathBuf,
}

impl VersionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Overwrites the record with the given version tag and the current
    /// time. Only called after an install completed without error.
    pub fn write(&self, version: &str) -> Result<(), UpdateError> {
        let record = InstalledVersion {
            version: version.to_owned(),
            installed_at: Utc::now(),
        };
        let json = serde_json::to_string_pretty(&record).map_err(io::Error::other)?;
        fs::write(&self.path, json)?;
        tracing::debug!(version, path = %self.path.display(), "recorded installed version");
        Ok(())
    }

    /// Returns the recorded version, or `None` when the file is missing or
    /// does not parse. Never raises.
    pub fn read(&self) -> Option<InstalledVersion> {
        let content = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&content) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "version record unreadable; treating as unknown");
                None
            }
        }
    }
}
