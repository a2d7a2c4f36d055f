//! Tracing setup for the command-line front end.
//!
//! The parser logs through the `tracing` facade. A subscriber is installed
//! only when `ESPARSE_LOG` (or `RUST_LOG`) is set; both take the usual
//! filter syntax:
//!
//! ```bash
//! ESPARSE_LOG=debug esparse file.js
//! ESPARSE_LOG=esparse_parser=trace esparse --module file.mjs
//! ```
//!
//! Output goes to stderr so it never mixes with results on stdout.

use tracing_subscriber::{fmt, EnvFilter};

/// `ESPARSE_LOG` takes precedence over `RUST_LOG`.
fn build_filter() -> Option<EnvFilter> {
    if let Ok(value) = std::env::var("ESPARSE_LOG") {
        return Some(EnvFilter::builder().parse_lossy(value));
    }
    if std::env::var("RUST_LOG").is_ok() {
        return Some(EnvFilter::from_default_env());
    }
    None
}

pub fn init_tracing() {
    let Some(filter) = build_filter() else {
        return;
    };
    // A second initialisation (tests) keeps the first subscriber.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
