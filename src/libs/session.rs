//! Language server session lifecycle.
//!
//! At most one language server runs per session context; starting a new
//! instance always stops the previous one first, and stopping tears down
//! any scratch copy the stager created for it. The session only spawns the
//! child and hands off its stdio — the LSP transport itself is owned by the
//! consumer on the other end.

use crate::libs::config::{ServerConfig, ServerMode};
use crate::libs::installer::InstallPaths;
use crate::libs::messages::Message;
use crate::libs::stager::Stager;
use crate::{msg_bail_anyhow, msg_info};
use anyhow::Result;
use std::process::ExitStatus;
use tokio::process::{Child, Command};

/// Explicit session context: the active child process and the current
/// scratch copy, with a start/end pair guaranteeing teardown.
pub struct Session {
    child: Option<Child>,
    stager: Stager,
}

impl Session {
    pub fn new() -> Result<Self> {
        Ok(Self {
            child: None,
            stager: Stager::new()?,
        })
    }

    /// Starts the language server for the configured mode.
    ///
    /// Automatic mode spawns the installed binary; manual mode stages the
    /// user-supplied one first. Any previously running instance is stopped
    /// before the new one starts. Returns the child's PID.
    pub async fn start(&mut self, config: &ServerConfig, paths: &InstallPaths) -> Result<u32> {
        self.end().await;

        let (command, stdlib) = match config.mode {
            ServerMode::Automatic => {
                let stdlib = config.stdlib_dir().or_else(|| paths.stdlib());
                (paths.binary(), stdlib)
            }
            ServerMode::Manual => {
                let Some(binary) = config.binary_dir() else {
                    msg_bail_anyhow!(Message::ManualBinaryNotConfigured);
                };
                let staged = self.stager.stage(&binary)?;
                (staged, config.stdlib_dir())
            }
        };

        let mut cmd = Command::new(&command);
        cmd.arg("--lsp");
        if let Some(dir) = &stdlib {
            cmd.arg("--stdlib-path").arg(dir);
        }

        let child = cmd.spawn()?;
        let pid = child.id().unwrap_or_default();
        tracing::debug!(command = %command.display(), stdlib = ?stdlib, pid, "language server started");
        self.child = Some(child);
        Ok(pid)
    }

    /// Waits for the running server to exit on its own. A child that exited
    /// is detached so a later `end` does not try to stop it again.
    pub async fn wait(&mut self) -> Result<Option<ExitStatus>> {
        match self.child.as_mut() {
            Some(child) => {
                let status = child.wait().await?;
                self.child = None;
                Ok(Some(status))
            }
            None => Ok(None),
        }
    }

    /// Stops the active instance (if any) and tears down its scratch copy.
    pub async fn end(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Err(e) = child.kill().await {
                tracing::warn!(error = %e, "could not stop language server");
            } else {
                let _ = child.wait().await;
                msg_info!(Message::SessionStopped);
            }
        }
        self.stager.cleanup();
    }

    /// Whether a child process is currently attached to this session.
    pub fn is_active(&self) -> bool {
        self.child.is_some()
    }
}
