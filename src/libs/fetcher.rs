//! Streaming artifact download.
//!
//! Streams a release asset to a destination file chunk by chunk, so the
//! payload is never buffered in memory as a whole. The cancellation flag is
//! observed between chunks; on cancellation the partially written file is
//! left on disk and the coordinator is responsible for deleting it, which
//! keeps the "never mistake a half-written artifact for a complete one"
//! guarantee in exactly one place.

use crate::libs::cancel::CancelFlag;
use crate::libs::error::UpdateError;
use crate::libs::http::Http;
use async_trait::async_trait;
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Source of artifact bytes. Substituted with a scripted implementation in
/// coordinator tests.
#[async_trait]
pub trait ArtifactSource {
    async fn download(&self, url: &str, dest: &Path, cancel: &CancelFlag) -> Result<(), UpdateError>;
}

/// Artifact source backed by the shared redirect-following HTTP transport.
pub struct HttpFetcher {
    http: Http,
}

impl HttpFetcher {
    pub fn new(http: Http) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ArtifactSource for HttpFetcher {
    async fn download(&self, url: &str, dest: &Path, cancel: &CancelFlag) -> Result<(), UpdateError> {
        let mut response = self.http.get_following(url).await?;
        let mut out = tokio::fs::File::create(dest).await?;
        let mut written: u64 = 0;

        while let Some(chunk) = response.chunk().await.map_err(|e| UpdateError::transport(url, e))? {
            cancel.check()?;
            out.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }

        out.flush().await?;
        tracing::debug!(url, bytes = written, dest = %dest.display(), "asset downloaded");
        Ok(())
    }
}
