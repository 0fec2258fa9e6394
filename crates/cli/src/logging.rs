// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing subscriber setup.
//!
//! Filter priority, highest first:
//! 1. `BRANDSCOPE_LOG` (e.g. `brandscope=debug`)
//! 2. `RUST_LOG`
//! 3. `--verbose` (debug) / `--quiet` (error)
//! 4. `warn`

use std::io::IsTerminal;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Environment variables consulted for filter directives, in order.
pub const LOG_ENV_VARS: [&str; 2] = ["BRANDSCOPE_LOG", "RUST_LOG"];

/// Verbosity derived from CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    /// `--verbose` wins when both flags are given.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else if quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        }
    }

    pub fn level(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::ERROR,
            Verbosity::Normal => LevelFilter::WARN,
            Verbosity::Verbose => LevelFilter::DEBUG,
        }
    }
}

/// Build the filter from the first valid env directive, else from flags.
pub fn build_env_filter(verbosity: Verbosity, env: impl Fn(&str) -> Option<String>) -> EnvFilter {
    for var in LOG_ENV_VARS {
        if let Some(directives) = env(var)
            && !directives.trim().is_empty()
        {
            match EnvFilter::try_new(&directives) {
                Ok(filter) => return filter,
                Err(e) => eprintln!("brandscope: ignoring invalid {var}: {e}"),
            }
        }
    }
    EnvFilter::default().add_directive(verbosity.level().into())
}

/// Install the global subscriber, writing to stderr.
///
/// Returns false if a subscriber was already installed.
pub fn init(verbosity: Verbosity) -> bool {
    let filter = build_env_filter(verbosity, |var| std::env::var(var).ok());
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false);
    tracing_subscriber::registry().with(filter).with(layer).try_init().is_ok()
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
