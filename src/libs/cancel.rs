//! Cancellation signal shared between a flow and its caller.
//!
//! Long-running acquisition flows accept a [`CancelFlag`] and poll it at
//! well-defined checkpoints: between download chunks, and after the network
//! transfer completes but before any durable state is mutated. Once the
//! installer step sequence has started, the flag is intentionally no longer
//! consulted, so a cancel can never leave a half-applied install behind.

use crate::libs::error::UpdateError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A clonable, thread-safe cancellation token.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Idempotent.
    pub fn request(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Checkpoint helper: returns `Err(Cancelled)` once cancellation has
    /// been requested.
    pub fn check(&self) -> Result<(), UpdateError> {
        if self.is_cancelled() {
            Err(UpdateError::Cancelled)
        } else {
            Ok(())
        }
    }

    /// Flips the flag when the user presses Ctrl-C, letting the active
    /// flow abandon cleanly at its next checkpoint.
    pub fn hook_ctrl_c(&self) {
        let flag = self.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                flag.request();
            }
        });
    }
}
