//! Platform-to-asset-suffix resolution.
//!
//! Release assets are published per platform with a fixed naming scheme
//! (`flang-<suffix>.zip`, `flang-<suffix>.tar.gz`). Only the pairs listed in
//! the allow-list below have published assets; anything else is unsupported
//! and must fail before any network operation is attempted, pointing the
//! user at manual configuration instead.

use crate::libs::error::UpdateError;
use std::env::consts::{ARCH, OS};

/// Maps an (os, arch) pair to the release asset suffix for that platform.
///
/// Returns `None` for every pair outside the fixed allow-list.
pub fn suffix(os: &str, arch: &str) -> Option<&'static str> {
    match (os, arch) {
        ("windows", "x86_64") => Some("win-x64"),
        ("linux", "x86_64") => Some("linux-x64"),
        ("linux", "aarch64") => Some("linux-arm64"),
        ("macos", "x86_64") => Some("macos-x64"),
        ("macos", "aarch64") => Some("macos-arm64"),
        _ => None,
    }
}

/// Resolves the suffix for the machine this process is running on.
pub fn current() -> Result<&'static str, UpdateError> {
    suffix(OS, ARCH).ok_or_else(|| UpdateError::UnsupportedPlatform {
        os: OS.to_owned(),
        arch: ARCH.to_owned(),
    })
}

/// Name of the managed executable inside the install directory.
pub fn binary_name() -> &'static str {
    if cfg!(windows) {
        "flang.exe"
    } else {
        "flang"
    }
}
