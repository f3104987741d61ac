//! Archive installation into the durable install directory.
//!
//! Every install is destructive and full: the prior install directory is
//! wiped, the archive is extracted in its place, a single spurious wrapper
//! directory is flattened away, the executable bit is restored on Unix, and
//! the source archive is deleted. The steps run strictly in that order, and
//! a failure leaves the directory in whatever partial state the failing
//! step produced — the caller must treat it as invalid until the next
//! successful install.
//!
//! Supported archive formats are `.zip` and `.tar.gz`/`.tgz`, covering the
//! published release assets for all platforms in the allow-list.

use crate::libs::data_storage::DataStorage;
use crate::libs::error::UpdateError;
use crate::libs::platform;
use crate::libs::version_store::VERSION_FILE_NAME;
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tar::Archive;

/// Directory under the app data dir holding the extracted toolchain.
pub const INSTALL_DIR_NAME: &str = "toolchain";

/// Resource subdirectory shipped alongside the binary.
pub const STDLIB_DIR_NAME: &str = "stdlib";

/// Resolved locations inside the install root.
#[derive(Clone, Debug)]
pub struct InstallPaths {
    root: PathBuf,
}

impl InstallPaths {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Install root in the platform app data directory.
    pub fn resolve() -> Result<Self, UpdateError> {
        Ok(Self::new(DataStorage::new().get_path(INSTALL_DIR_NAME)?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path where the managed executable lives once installed.
    pub fn binary(&self) -> PathBuf {
        self.root.join(platform::binary_name())
    }

    /// The stdlib resource directory, if the install ships one.
    pub fn stdlib(&self) -> Option<PathBuf> {
        let dir = self.root.join(STDLIB_DIR_NAME);
        dir.is_dir().then_some(dir)
    }

    pub fn version_file(&self) -> PathBuf {
        self.root.join(VERSION_FILE_NAME)
    }
}

/// Installs a downloaded archive into `target`, replacing any prior
/// install. See the module docs for the step sequence.
pub fn install(archive: &Path, target: &Path) -> Result<(), UpdateError> {
    if target.exists() {
        fs::remove_dir_all(target)?;
    }
    fs::create_dir_all(target)?;

    extract(archive, target).map_err(|e| UpdateError::Install {
        archive: archive.to_path_buf(),
        message: e.to_string(),
    })?;

    flatten_single_wrapper(target)?;

    #[cfg(unix)]
    restore_executable_bit(&target.join(platform::binary_name()))?;

    fs::remove_file(archive)?;
    tracing::debug!(target = %target.display(), "archive installed");
    Ok(())
}

/// Extracts the archive's full contents into `target`, dispatching on the
/// archive file name.
fn extract(archive: &Path, target: &Path) -> anyhow::Result<()> {
    let name = archive.file_name().and_then(|n| n.to_str()).unwrap_or_default();

    if name.ends_with(".zip") {
        let mut zip = zip::ZipArchive::new(File::open(archive)?)?;
        zip.extract(target)?;
    } else if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
        let tar = GzDecoder::new(File::open(archive)?);
        Archive::new(tar).unpack(target)?;
    } else {
        anyhow::bail!("unrecognized archive format: {}", name);
    }

    Ok(())
}

/// Flattens a spurious top-level wrapper directory.
///
/// Applied if and only if extraction produced exactly one entry and that
/// entry is a directory: its contents move up into `target` and the empty
/// wrapper is removed. A multi-entry extraction is left untouched.
fn flatten_single_wrapper(target: &Path) -> Result<(), UpdateError> {
    let entries: Vec<_> = fs::read_dir(target)?.collect::<Result<_, _>>()?;
    if entries.len() != 1 {
        return Ok(());
    }

    let only = &entries[0];
    if !only.file_type()?.is_dir() {
        return Ok(());
    }

    let wrapper = only.path();
    for child in fs::read_dir(&wrapper)? {
        let child = child?;
        fs::rename(child.path(), target.join(child.file_name()))?;
    }
    fs::remove_dir(&wrapper)?;
    tracing::debug!(wrapper = %wrapper.display(), "flattened wrapper directory");
    Ok(())
}

/// Archives do not reliably preserve permission bits; put the executable
/// bit back on the binary if it is present.
#[cfg(unix)]
fn restore_executable_bit(binary: &Path) -> Result<(), UpdateError> {
    use std::os::unix::fs::PermissionsExt;

    if binary.is_file() {
        fs::set_permissions(binary, fs::Permissions::from_mode(0o755))?;
    }
    Ok(())
}
