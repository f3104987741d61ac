//! Language server session command.
//!
//! Makes sure a binary is available for the configured mode, runs the
//! background update check (with user confirmation) when enabled, then
//! starts the language server and keeps the session alive until the server
//! exits or the user interrupts.
//!
//! The install-while-in-use hazard is avoided structurally: any install
//! happens strictly before the server is spawned, and the session is
//! stopped before this command returns.

use crate::{
    libs::{
        cancel::CancelFlag,
        config::{Config, ServerMode},
        coordinator::{EnsureOutcome, UpdateCoordinator},
        installer::InstallPaths,
        messages::Message,
        session::Session,
    },
    msg_error, msg_error_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm};

/// Executes the start command.
pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let server = config.server();

    let paths = match server.mode {
        ServerMode::Automatic => {
            let coordinator = UpdateCoordinator::for_current_platform()?;
            let cancel = CancelFlag::new();
            cancel.hook_ctrl_c();

            match coordinator.ensure(&cancel).await {
                Ok(EnsureOutcome::Installed(tag)) => {
                    if cancel.is_cancelled() {
                        return Ok(());
                    }
                    msg_success!(Message::InstallCompleted(tag));
                }
                Ok(EnsureOutcome::AlreadyInstalled) => {
                    if server.check_updates {
                        background_check(&coordinator, &cancel).await;
                    }
                }
                Err(e) if e.is_cancelled() => {
                    msg_info!(Message::OperationCancelled);
                    return Ok(());
                }
                Err(e) => {
                    tracing::error!(error = %e, "first install failed");
                    return Err(msg_error_anyhow!(Message::InstallFailed(e.to_string())));
                }
            }
            coordinator.paths().clone()
        }
        ServerMode::Manual => InstallPaths::resolve()?,
    };

    let mut session = Session::new()?;
    let pid = session.start(&server, &paths).await?;
    msg_info!(Message::SessionStarted(pid));

    let exit_status = tokio::select! {
        status = session.wait() => status.ok().flatten(),
        _ = tokio::signal::ctrl_c() => None,
    };
    if let Some(status) = exit_status {
        msg_info!(Message::ServerExited(status.to_string()));
    }
    session.end().await;

    Ok(())
}

/// The automatic background check: phase 1 computes the pending decision,
/// the user confirms, and only then does phase 2 mutate any state. A binary
/// that might be in use is never replaced without consent.
async fn background_check<F, A>(coordinator: &UpdateCoordinator<F, A>, cancel: &CancelFlag)
where
    F: crate::libs::release::ReleaseFeed + Send + Sync,
    A: crate::libs::fetcher::ArtifactSource + Send + Sync,
{
    match coordinator.check_available().await {
        Ok(Some(pending)) => {
            let tag = pending.release.tag_name.clone();
            msg_info!(Message::UpdateAvailable(tag.clone()));

            let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptConfirmUpdate(tag).to_string())
                .default(true)
                .interact()
                .unwrap_or(false);
            if !confirmed {
                msg_info!(Message::UpdateDeclined);
                return;
            }

            match coordinator.apply(pending, cancel).await {
                Ok(to) => msg_success!(Message::UpdateCompleted(to)),
                Err(e) if e.is_cancelled() => msg_info!(Message::OperationCancelled),
                // The user opted in, so a failure here is surfaced; the
                // existing install stays usable.
                Err(e) => msg_error!(Message::UpdateCheckFailed(e.to_string())),
            }
        }
        Ok(None) => {}
        // Automatic checks fail silently for the user.
        Err(e) => tracing::debug!(error = %e, "background update check failed"),
    }
}
