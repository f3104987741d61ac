//! Configuration management for the flangup application.
//!
//! Settings live in a single JSON file in the platform application data
//! directory, following OS conventions for per-user storage. The file is
//! optional: a missing file reads as defaults, so the tool works out of the
//! box in automatic mode.
//!
//! ## Configuration Structure
//!
//! One `server` module controls how the language server binary is obtained
//! and launched:
//!
//! - **mode**: `automatic` (download from published releases) or `manual`
//!   (use a binary the user supplies)
//! - **binary_path**: explicit binary for manual mode
//! - **stdlib_path**: explicit resource directory override
//! - **check_updates**: whether background update checks run on start
//!
//! An interactive wizard (`flangup init`) fills these in; the file can also
//! be edited by hand.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// How the language server binary is obtained.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServerMode {
    /// Download and update the binary from published releases.
    #[default]
    Automatic,
    /// Use a binary the user supplies; never touch the network.
    Manual,
}

/// Language server acquisition and launch settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Operating mode: automatic acquisition or user-supplied binary.
    #[serde(default)]
    pub mode: ServerMode,

    /// Explicit binary path for manual mode. May be a bare command name
    /// resolvable via PATH.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary_path: Option<String>,

    /// Explicit stdlib resource directory, overriding the installed one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdlib_path: Option<String>,

    /// Whether to check for updates in the background on session start.
    #[serde(default = "default_check_updates")]
    pub check_updates: bool,
}

fn default_check_updates() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            mode: ServerMode::Automatic,
            binary_path: None,
            stdlib_path: None,
            check_updates: true,
        }
    }
}

impl ServerConfig {
    pub fn binary_dir(&self) -> Option<PathBuf> {
        self.binary_path.as_ref().map(PathBuf::from)
    }

    pub fn stdlib_dir(&self) -> Option<PathBuf> {
        self.stdlib_path.as_ref().map(PathBuf::from)
    }
}

/// Main configuration container.
///
/// The `skip_serializing_if` attribute keeps unconfigured modules out of
/// the JSON output, so the file stays clean and readable.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Language server settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// A missing file returns the default configuration; a file that exists
    /// but cannot be read or parsed is an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// The effective server settings, defaulted when not configured.
    pub fn server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }

    /// Saves the current configuration with pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Pre-fills existing values as defaults so re-running the wizard only
    /// changes what the user touches.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let current = config.server();

        msg_print!(Message::ConfigModuleServer);

        let modes = ["Automatic (download from published releases)", "Manual (use an existing binary)"];
        let default_index = match current.mode {
            ServerMode::Automatic => 0,
            ServerMode::Manual => 1,
        };
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptServerMode.to_string())
            .items(&modes)
            .default(default_index)
            .interact()?;
        let mode = if selection == 1 { ServerMode::Manual } else { ServerMode::Automatic };

        let binary_path = if mode == ServerMode::Manual {
            let entered: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptBinaryPath.to_string())
                .default(current.binary_path.clone().unwrap_or_default())
                .interact_text()?;
            (!entered.trim().is_empty()).then(|| entered.trim().to_string())
        } else {
            current.binary_path.clone()
        };

        let stdlib_entered: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStdlibPath.to_string())
            .allow_empty(true)
            .default(current.stdlib_path.clone().unwrap_or_default())
            .interact_text()?;
        let stdlib_path = (!stdlib_entered.trim().is_empty()).then(|| stdlib_entered.trim().to_string());

        let check_updates = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCheckUpdates.to_string())
            .default(current.check_updates)
            .interact()?;

        config.server = Some(ServerConfig {
            mode,
            binary_path,
            stdlib_path,
            check_updates,
        });

        Ok(config)
    }
}
