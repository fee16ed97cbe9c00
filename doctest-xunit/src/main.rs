// Copyright (c) The doctest-xunit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use color_eyre::Result;
use doctest_xunit::DoctestXunitApp;

fn main() -> Result<()> {
    color_eyre::install()?;

    let app = DoctestXunitApp::parse();
    app.exec()
}
