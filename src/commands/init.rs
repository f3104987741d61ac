//! Application configuration initialization command.
//!
//! Provides an interactive setup wizard that guides users through
//! configuring flangup for first-time use: acquisition mode, binary and
//! stdlib paths, and background update checks.

use crate::{
    libs::{
        config::{Config, CONFIG_FILE_NAME},
        data_storage::DataStorage,
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the initialization command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating new one
    #[arg(short, long)]
    delete: bool,
}

/// Executes the initialization command.
///
/// Runs the interactive wizard, or removes the configuration file when
/// `--delete` is used.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            std::fs::remove_file(config_file_path)?;
        }
        return Ok(());
    }

    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
