//! # Flangup - Flang Toolchain Manager
//!
//! A command-line utility for installing, updating, and launching the
//! platform-specific flang compiler binary and its language server mode.
//!
//! ## Features
//!
//! - **Release Discovery**: Finds the latest published flang release on GitHub
//! - **Atomic Installation**: Downloads and installs the toolchain as a unit
//! - **Version Bookkeeping**: Records what is installed and when
//! - **Update Coordination**: Foreground and background update checks
//! - **Manual Mode**: Stages a user-supplied binary in a lock-safe scratch copy
//! - **Language Server Sessions**: Spawns `flang --lsp` for an editor consumer
//!
//! ## Usage
//!
//! ```rust,no_run
//! use flangup::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
