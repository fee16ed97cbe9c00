// Copyright (c) The doctest-xunit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generate XUnit-style XML test reports.
//!
//! This crate models a single test suite as an ordered list of test cases and
//! serializes it into the `testsuite`/`testcase` XML schema understood by CI
//! servers such as Jenkins. Aggregate counts are always derived from the case
//! list, so a serialized report can never disagree with its contents.

#![warn(missing_docs)]

mod errors;
mod report;
mod serialize;

pub use errors::*;
pub use report::*;
