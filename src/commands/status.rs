//! Status display: configured mode, installed version, and paths.

use crate::{
    libs::{
        config::{Config, ServerMode},
        installer::InstallPaths,
        messages::Message,
        version_store::VersionStore,
    },
    msg_print,
};
use anyhow::Result;

/// Prints the current toolchain and configuration state.
pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let server = config.server();

    let mode = match server.mode {
        ServerMode::Automatic => "automatic",
        ServerMode::Manual => "manual",
    };
    msg_print!(Message::StatusMode(mode.to_string()));

    if let Some(binary) = server.binary_dir() {
        msg_print!(Message::StatusBinaryPath(binary.display().to_string()));
    }

    let paths = InstallPaths::resolve()?;
    if paths.binary().is_file() {
        if server.mode == ServerMode::Automatic {
            msg_print!(Message::StatusBinaryPath(paths.binary().display().to_string()));
        }
        match VersionStore::new(paths.version_file()).read() {
            Some(record) => msg_print!(Message::StatusInstalledVersion(record.version)),
            None => msg_print!(Message::StatusVersionUnknown),
        }
        if let Some(stdlib) = paths.stdlib() {
            msg_print!(Message::StatusStdlibPath(stdlib.display().to_string()));
        }
    } else if server.mode == ServerMode::Automatic {
        msg_print!(Message::StatusNotInstalled);
    }

    msg_print!(Message::StatusBackgroundChecks(server.check_updates));
    Ok(())
}
