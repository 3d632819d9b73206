// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the reporank CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging to stderr,
//! so stdout stays clean for the ranking itself.
//!
//! # Examples
//!
//! ```bash
//! # Show every request and the sort statistics
//! RUST_LOG=reporank=debug reporank rank
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter when `RUST_LOG` is unset.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "reporank=debug,reporank_core=debug,reqwest=warn"
    } else {
        "reporank=warn,reporank_core=warn,reqwest=error"
    }
}

/// Initialize the logging subsystem.
///
/// The `RUST_LOG` environment variable takes precedence; otherwise `verbose`
/// selects between debug and warning level for reporank's own targets.
pub fn init_logging(verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
