//! Typed error taxonomy for the binary acquisition and update flows.
//!
//! Every failure that can surface from release discovery, download,
//! installation, or version bookkeeping maps to one variant here, so the
//! command layer can tell "server unreachable" apart from "server replied
//! with something unexpected" and report each with the right guidance.
//!
//! Cancellation is modeled as a variant rather than a separate channel:
//! flows abandon cleanly by returning [`UpdateError::Cancelled`], and the
//! command layer treats it as a non-error outcome.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpdateError {
    /// The running (os, arch) pair has no published release asset.
    /// Fatal for automatic acquisition; manual mode remains available.
    #[error("unsupported platform {os}/{arch}; configure a binary path manually with `flangup init`")]
    UnsupportedPlatform { os: String, arch: String },

    /// The HTTP client itself could not be constructed.
    #[error("failed to initialize HTTP client: {message}")]
    ClientInit { message: String },

    /// Connection-level failure: DNS, TLS, refused connection, broken stream.
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The server answered with a non-2xx, non-redirect status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// A 3xx response arrived without a `Location` header to follow.
    #[error("redirect from {url} carried no Location header")]
    MissingLocation { url: String },

    /// The redirect chain exceeded the configured hop bound.
    #[error("more than {limit} redirects while fetching {url}")]
    TooManyRedirects { url: String, limit: usize },

    /// The release feed replied, but the body did not parse as a release.
    #[error("release feed response was not valid JSON: {message}")]
    MalformedFeed { message: String },

    /// The release carries no asset for the resolved platform suffix.
    #[error("no release asset matches '{suffix}' (available: {})", .available.join(", "))]
    NoMatchingAsset { suffix: String, available: Vec<String> },

    /// Extraction or post-extraction fixup failed; the install directory
    /// must be treated as invalid until the next successful install.
    #[error("failed to install archive {}: {message}", .archive.display())]
    Install { archive: PathBuf, message: String },

    /// Local filesystem failure outside the installer step sequence.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The user abandoned the flow. Not a failure.
    #[error("operation cancelled")]
    Cancelled,
}

impl UpdateError {
    /// Returns `true` when the error is a clean user abandonment rather
    /// than a real failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, UpdateError::Cancelled)
    }

    /// Wraps a connection-level reqwest failure with the URL it hit.
    pub fn transport(url: &str, err: reqwest::Error) -> Self {
        UpdateError::Transport {
            url: url.to_owned(),
            message: err.to_string(),
        }
    }
}
