// Copyright (c) The doctest-xunit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Convert Sphinx doctest build logs into XUnit XML reports.
//!
//! The Sphinx doctest builder writes its results as a loosely-delimited text
//! log (`output.txt` in the build output directory). CI servers such as
//! Jenkins want a machine-readable report instead. This crate parses the log
//! into a [`xunit_report::TestSuite`] and writes it back out as
//! `doctests.xml`, one `testcase` element per executed example.
//!
//! The intended entry point is the `doctest-xunit` binary, run once after a
//! documentation build finishes; [`convert_build_output`] is the same
//! operation as a library call.

#![warn(missing_docs)]

mod convert;
mod dispatch;
mod errors;
mod output;
mod parser;

pub use convert::*;
pub use errors::*;
pub use parser::*;

#[doc(hidden)]
pub use dispatch::DoctestXunitApp;
