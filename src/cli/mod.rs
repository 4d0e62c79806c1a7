//! CLI infrastructure for the solver
//!
//! This module provides the command-line interface for solving positions,
//! evaluating moves, running matches and verifying the search.

use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod output;

/// Install the global tracing subscriber, logging to stderr.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects `debug` over `warn`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
