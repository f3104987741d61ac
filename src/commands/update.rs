//! User-initiated update check (the foreground check flow).
//!
//! Compares the recorded version against the latest release tag and
//! installs on any mismatch. Unlike the background check, failures here
//! are surfaced to the user directly.

use crate::{
    libs::{
        cancel::CancelFlag,
        coordinator::{CheckOutcome, UpdateCoordinator},
        messages::Message,
    },
    msg_error_anyhow, msg_info, msg_success,
};
use anyhow::Result;

/// Executes the update check.
pub async fn cmd() -> Result<()> {
    let coordinator = UpdateCoordinator::for_current_platform()?;
    let cancel = CancelFlag::new();
    cancel.hook_ctrl_c();

    match coordinator.check(&cancel).await {
        Ok(CheckOutcome::AlreadyCurrent(tag)) => {
            msg_info!(Message::AlreadyCurrent(tag));
            Ok(())
        }
        Ok(CheckOutcome::Updated { to, .. }) => {
            if !cancel.is_cancelled() {
                msg_success!(Message::UpdateCompleted(to));
                msg_info!(Message::RestartRequired);
            }
            Ok(())
        }
        Err(e) if e.is_cancelled() => {
            msg_info!(Message::OperationCancelled);
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "update check failed");
            Err(msg_error_anyhow!(Message::UpdateCheckFailed(e.to_string())))
        }
    }
}
