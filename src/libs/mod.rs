//! Core library modules for the flangup application.
//!
//! Serves as the main entry point for all flangup library components,
//! providing a centralized access point to the application's core
//! functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Binary Acquisition**: Release feed, artifact download, installation
//! - **Update Coordination**: Ensure/check flows with cancellation support
//! - **Session Management**: Language server lifecycle and binary staging
//!
//! ## Usage
//!
//! ```rust,no_run
//! use flangup::libs::cancel::CancelFlag;
//! use flangup::libs::coordinator::UpdateCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let coordinator = UpdateCoordinator::for_current_platform()?;
//!     coordinator.ensure(&CancelFlag::new()).await?;
//!     Ok(())
//! }
//! ```

pub mod cancel;
pub mod config;
pub mod coordinator;
pub mod data_storage;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod installer;
pub mod messages;
pub mod platform;
pub mod release;
pub mod session;
pub mod stager;
pub mod version_store;
