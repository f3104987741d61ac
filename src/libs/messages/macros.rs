//! Convenient macros for application messaging and logging.
//!
//! These macros unify message display across the application: in normal
//! mode they print directly to the console, and in debug mode they route
//! through the `tracing` system instead, so structured logging and plain
//! user output never interleave.
//!
//! Debug mode is detected from the environment (`FLANGUP_DEBUG` or
//! `RUST_LOG`) and cached on first use.
//!
//! ## Macro Categories
//!
//! - **`msg_print!`**: general message display
//! - **`msg_success!`** / **`msg_info!`** / **`msg_warning!`**: prefixed
//!   notifications (✅ / ℹ️ / ⚠️)
//! - **`msg_error!`**: error display with ❌ prefix, on stderr in normal mode
//! - **`msg_debug!`**: debug-only messages, suppressed outside debug mode
//! - **`msg_error_anyhow!`** / **`msg_bail_anyhow!`**: error creation and
//!   early return for functions returning `anyhow::Result`

use std::sync::OnceLock;

/// Cached debug-mode detection; environment variables are checked once.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| {
        // Check for application-specific debug flag
        std::env::var("FLANGUP_DEBUG").is_ok() ||
        // Check for standard Rust logging configuration
        std::env::var("RUST_LOG").is_ok()
    })
}

/// Prints a general message with automatic debug mode routing.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix and automatic routing.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix; uses stderr in normal mode.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints a warning message with ⚠️ prefix and automatic routing.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("\n⚠️ {}\n", $msg);
        } else {
            println!("\n⚠️ {}\n", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix and automatic routing.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Debug-only message display with 🔍 prefix; suppressed in normal mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message with ❌ prefix.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Early return with an error created from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
