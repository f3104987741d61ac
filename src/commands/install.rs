//! First-install command (the ensure flow).
//!
//! Installs the toolchain when no binary is present. When one is already
//! installed this is a no-op aside from a background-style update check
//! whose result is reported as a hint, never acted on automatically.

use crate::{
    libs::{
        cancel::CancelFlag,
        coordinator::{EnsureOutcome, UpdateCoordinator},
        messages::Message,
    },
    msg_error_anyhow, msg_info, msg_success,
};
use anyhow::Result;

/// Executes the first-install flow.
pub async fn cmd() -> Result<()> {
    let coordinator = UpdateCoordinator::for_current_platform()?;
    let cancel = CancelFlag::new();
    cancel.hook_ctrl_c();

    match coordinator.ensure(&cancel).await {
        Ok(EnsureOutcome::Installed(tag)) => {
            // A cancel that lands after a completed install keeps the
            // install; only the finalization messaging is skipped.
            if !cancel.is_cancelled() {
                msg_success!(Message::InstallCompleted(tag));
            }
            Ok(())
        }
        Ok(EnsureOutcome::AlreadyInstalled) => {
            msg_info!(Message::AlreadyInstalled(coordinator.paths().root().display().to_string()));

            match coordinator.check_available().await {
                Ok(Some(pending)) => {
                    msg_info!(Message::UpdateAvailable(pending.release.tag_name));
                    msg_info!(Message::RunUpdateHint);
                }
                Ok(None) => {}
                // Background check failures stay silent for the user.
                Err(e) => tracing::debug!(error = %e, "background update check failed"),
            }
            Ok(())
        }
        Err(e) if e.is_cancelled() => {
            msg_info!(Message::OperationCancelled);
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "first install failed");
            Err(msg_error_anyhow!(Message::InstallFailed(e.to_string())))
        }
    }
}
