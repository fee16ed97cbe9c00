// Copyright (c) The doctest-xunit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    convert::{convert_build_output, DOCTEST_BUILDER},
    output::OutputOpts,
};
use camino::Utf8PathBuf;
use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;

/// Convert a Sphinx doctest build log into an XUnit XML report.
///
/// Run this once after a documentation build finishes, pointed at the build
/// output directory. When the build used the doctest builder, `output.txt`
/// is parsed and `doctests.xml` is written next to it; for any other builder
/// there is nothing to convert and the command exits successfully without
/// writing anything.
#[derive(Debug, Parser)]
#[command(version, bin_name = "doctest-xunit")]
pub struct DoctestXunitApp {
    /// Build output directory containing the doctest results log
    #[arg(value_name = "OUTDIR")]
    outdir: Utf8PathBuf,

    /// Name of the builder that produced the output directory
    #[arg(long, default_value = DOCTEST_BUILDER, value_name = "NAME")]
    builder: String,

    #[command(flatten)]
    output: OutputOpts,
}

impl DoctestXunitApp {
    /// Executes the app.
    pub fn exec(self) -> Result<()> {
        self.output.init();

        if convert_build_output(&self.outdir, &self.builder)?.is_none() {
            info!("builder `{}` produces no doctest output; skipped", self.builder);
        }
        Ok(())
    }
}
