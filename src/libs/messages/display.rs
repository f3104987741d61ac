//! Display implementation for flangup application messages.
//!
//! The `Display` impl for the `Message` enum is the single source of truth
//! for all user-facing text: structured message data is converted into
//! human-readable terminal output in one place, keeping wording consistent
//! and parameter interpolation type-safe.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let message = match self {
            // === INSTALL MESSAGES ===
            Message::FetchingReleaseFeed => "Checking for the latest flang release...".to_string(),
            Message::DownloadingAsset(name) => format!("Downloading {}...", name),
            Message::InstallingRelease(tag) => format!("Installing flang {}...", tag),
            Message::InstallCompleted(tag) => format!("flang {} installed successfully", tag),
            Message::AlreadyInstalled(path) => format!("A flang toolchain is already installed at {}", path),
            Message::InstallFailed(err) => format!("Installation failed: {}", err),

            // === UPDATE MESSAGES ===
            Message::AlreadyCurrent(tag) => format!("flang {} is already the latest version", tag),
            Message::UpdateAvailable(tag) => format!("A new flang release is available: {}", tag),
            Message::UpdateCompleted(tag) => format!("flang updated to {}", tag),
            Message::UpdateDeclined => "Update skipped".to_string(),
            Message::UpdateCheckFailed(err) => format!("Update check failed: {}", err),
            Message::RestartRequired => "Restart the language server to pick up the new binary".to_string(),
            Message::RunUpdateHint => "Run `flangup update` to install it".to_string(),

            // === STATUS MESSAGES ===
            Message::StatusMode(mode) => format!("Mode: {}", mode),
            Message::StatusInstalledVersion(tag) => format!("Installed version: {}", tag),
            Message::StatusVersionUnknown => "Installed version: unknown (no version record)".to_string(),
            Message::StatusNotInstalled => "No toolchain installed. Run `flangup install` to set one up.".to_string(),
            Message::StatusBinaryPath(path) => format!("Binary: {}", path),
            Message::StatusStdlibPath(path) => format!("Stdlib: {}", path),
            Message::StatusBackgroundChecks(enabled) => format!(
                "Background update checks: {}",
                if *enabled { "enabled" } else { "disabled" }
            ),

            // === SESSION MESSAGES ===
            Message::SessionStarted(pid) => format!("Language server started with PID: {}", pid),
            Message::SessionStopped => "Language server stopped".to_string(),
            Message::ServerExited(status) => format!("Language server exited: {}", status),
            Message::ManualBinaryNotConfigured => {
                "Manual mode is selected but no binary path is configured. Run `flangup init` to set one.".to_string()
            }

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleServer => "Language server configuration".to_string(),

            // === PROMPTS ===
            Message::PromptServerMode => "How should the flang binary be obtained?".to_string(),
            Message::PromptBinaryPath => "Path to the flang binary".to_string(),
            Message::PromptStdlibPath => "Stdlib directory (leave empty to use the installed one)".to_string(),
            Message::PromptCheckUpdates => "Check for updates in the background on start?".to_string(),
            Message::PromptConfirmUpdate(tag) => {
                format!("A new flang release {} is available. Download and install it now?", tag)
            }

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", message)
    }
}
