//! Library half of the `mma` command-line tool.
//!
//! The binary in `main.rs` only parses the command name; each command lives
//! in [`commands`] and returns a [`CliError`] instead of exiting, so it can
//! be tested in-process.

pub mod commands;
pub mod discovery;
mod error;

pub use error::CliError;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the `tracing` subscriber, once per process.
///
/// Does nothing unless `RUST_LOG` is set, so normal runs pay no logging
/// cost. `RUST_LOG=mma_lexer=trace` shows every rule-set and scope
/// transition.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Unset or unparsable RUST_LOG: stay silent.
        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .try_init();
    });
}
