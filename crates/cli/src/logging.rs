// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Console logging setup.
//!
//! Logs go to stderr so expanded tokens on stdout stay machine-readable.

use std::io::IsTerminal;

/// Console verbosity selected by flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// No flag: warnings and errors only, unless RUST_LOG says otherwise.
    Default,
    Verbose,
    Debug,
}

impl Verbosity {
    /// `--debug` wins over `--verbose`.
    pub fn from_flags(verbose: bool, debug: bool) -> Self {
        match (verbose, debug) {
            (_, true) => Self::Debug,
            (true, false) => Self::Verbose,
            (false, false) => Self::Default,
        }
    }

    fn directive(self) -> &'static str {
        match self {
            Self::Default => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// Install the global subscriber. Explicit flags beat RUST_LOG.
pub fn init(verbosity: Verbosity) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = match verbosity {
        Verbosity::Default => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(verbosity.directive())),
        _ => EnvFilter::new(verbosity.directive()),
    };

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal() && !crate::env::no_color())
        .with_target(false)
        .without_time();

    // A second init (tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
