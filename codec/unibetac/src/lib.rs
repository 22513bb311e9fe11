//! Command-line front end for Beta Code conversion.
//!
//! The `unibeta` binary is a thin dispatcher over this library:
//!
//! - [`commands`]: argument parsing and the conversion, file and
//!   code point listing commands
//! - [`error`]: [`CliError`], everything a command can fail with
//!
//! # Logging
//!
//! [`init_tracing`] installs a subscriber only when `RUST_LOG` is set, so
//! a normal run pays nothing for the library's trace events. Setting
//! `UNIBETA_LOG_TREE` as well switches to indented span output:
//!
//! ```text
//! RUST_LOG=unibeta=trace UNIBETA_LOG_TREE=1 unibeta greek2beta λόγος
//! ```

use std::sync::Once;

pub mod commands;
pub mod error;

pub use error::CliError;

static TRACING_INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// Only takes effect if `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let tree = std::env::var_os("UNIBETA_LOG_TREE").is_some();

        // Both go to stderr; stdout carries the converted text.
        let flat = (!tree).then(|| {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr)
        });
        let nested = tree.then(|| tracing_tree::HierarchicalLayer::new(2).with_targets(true));
        tracing_subscriber::registry()
            .with(filter)
            .with(flat)
            .with(nested)
            .init();
    });
}
