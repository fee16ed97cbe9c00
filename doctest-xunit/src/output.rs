// Copyright (c) The doctest-xunit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Args;
use std::sync::Once;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{filter::Targets, layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Output-related options.
#[derive(Copy, Clone, Debug, Args)]
#[must_use]
pub(crate) struct OutputOpts {
    /// Verbose output
    #[arg(long, short, env = "DOCTEST_XUNIT_VERBOSE")]
    pub(crate) verbose: bool,
}

static INIT_LOGGER: Once = Once::new();

impl OutputOpts {
    /// Initializes logging to stderr.
    pub(crate) fn init(self) {
        INIT_LOGGER.call_once(|| {
            let level_str = std::env::var("DOCTEST_XUNIT_LOG").unwrap_or_default();

            // If the level string is empty, use the standard level filter
            // instead.
            let targets: Targets = if level_str.is_empty() {
                let default = if self.verbose {
                    LevelFilter::DEBUG
                } else {
                    LevelFilter::INFO
                };
                Targets::new().with_default(default)
            } else {
                level_str.parse().expect("unable to parse DOCTEST_XUNIT_LOG")
            };

            let layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(targets);

            tracing_subscriber::registry().with(layer).init();
        });
    }
}
