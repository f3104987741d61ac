//! Scratch staging for user-supplied binaries (manual mode).
//!
//! A user-supplied binary may be mid-rebuild by a toolchain build running on
//! the same machine; starting a process against the live path could collide
//! with that rebuild replacing the file. Staging copies the binary into a
//! fresh, process-private scratch directory and hands back the copy's path,
//! so no handle is ever held on the user's original file.
//!
//! Scratch directories are never persisted: the previous one is removed
//! before staging again and on session shutdown. Cleanup is best-effort by
//! policy — a failure to delete a scratch directory is logged and never
//! propagated.

use crate::libs::data_storage::DataStorage;
use crate::libs::error::UpdateError;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Directory under the app data dir holding scratch copies.
pub const STAGE_DIR_NAME: &str = "staged";

/// Disambiguates scratch directories created within the same millisecond.
static STAGE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Stages manual-mode binaries into scratch copies and tears them down.
pub struct Stager {
    base: PathBuf,
    current: Option<PathBuf>,
}

impl Stager {
    pub fn new() -> Result<Self, UpdateError> {
        Ok(Self::with_base(DataStorage::new().get_path(STAGE_DIR_NAME)?))
    }

    /// Builds a stager over an explicit scratch base directory.
    pub fn with_base(base: PathBuf) -> Self {
        let stager = Self { base, current: None };
        // Scratch dirs left behind by a crashed session are dead weight.
        stager.sweep_leftovers();
        stager
    }

    /// Stages `source` and returns the path to use for spawning.
    ///
    /// When `source` does not resolve to an existing file (for example a
    /// bare command name resolvable via PATH), it is returned unchanged.
    /// Otherwise the file is copied into a fresh uniquely named scratch
    /// directory, the executable bit is restored on Unix, and the copy's
    /// path is returned. Any previously staged copy is removed first.
    pub fn stage(&mut self, source: &Path) -> Result<PathBuf, UpdateError> {
        self.cleanup();

        if !source.is_file() {
            return Ok(source.to_path_buf());
        }

        let dir = self.base.join(format!(
            "stage-{}-{}-{}",
            std::process::id(),
            Utc::now().timestamp_millis(),
            STAGE_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        fs::create_dir_all(&dir)?;

        let file_name = source.file_name().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "binary path has no file name")
        })?;
        let dest = dir.join(file_name);
        fs::copy(source, &dest)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&dest, fs::Permissions::from_mode(0o755))?;
        }

        tracing::debug!(source = %source.display(), staged = %dest.display(), "binary staged");
        self.current = Some(dir);
        Ok(dest)
    }

    /// Removes the current scratch directory, if any. Best-effort.
    pub fn cleanup(&mut self) {
        if let Some(dir) = self.current.take() {
            if let Err(e) = fs::remove_dir_all(&dir) {
                tracing::warn!(dir = %dir.display(), error = %e, "could not remove scratch directory");
            }
        }
    }

    /// Removes scratch directories from previous runs. Best-effort.
    fn sweep_leftovers(&self) {
        let Ok(entries) = fs::read_dir(&self.base) else {
            return;
        };
        for entry in entries.flatten() {
            if let Err(e) = fs::remove_dir_all(entry.path()) {
                tracing::warn!(dir = %entry.path().display(), error = %e, "could not sweep stale scratch directory");
            }
        }
    }
}

impl Drop for Stager {
    fn drop(&mut self) {
        self.cleanup();
    }
}
