// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Log setup for the binary.
//!
//! Library code only emits `tracing` events; nothing is printed unless a
//! subscriber is installed. The CLI installs one writing to stderr so stdout
//! stays clean for `match --json`.

use std::io;
use tracing_subscriber::EnvFilter;

/// Env var holding an `EnvFilter` directive, e.g. `jobmatch=debug`.
pub const LOG_ENV: &str = "JOBMATCH_LOG";

/// Filter used when `verbose` is off and `JOBMATCH_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

pub fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("jobmatch=debug,info");
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the stderr subscriber. Safe to call twice; the second call is a no-op.
pub fn configure_logging(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter(verbose))
        .with_target(false)
        .try_init();
}
