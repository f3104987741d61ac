pub mod init;
pub mod install;
pub mod start;
pub mod status;
pub mod update;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Install the flang toolchain if it is missing")]
    Install,
    #[command(about = "Check for and install the latest flang release")]
    Update,
    #[command(about = "Show the installed toolchain and configuration")]
    Status,
    #[command(about = "Start the flang language server")]
    Start,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        // In debug mode the message macros route through tracing; make sure
        // a subscriber is listening.
        if crate::libs::messages::macros::is_debug_mode() {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .try_init();
        }

        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Install => install::cmd().await,
            Commands::Update => update::cmd().await,
            Commands::Status => status::cmd(),
            Commands::Start => start::cmd().await,
        }
    }
}
