// Copyright (c) The doctest-xunit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-build conversion of a doctest log into an XUnit report.

use crate::{errors::ConvertError, parser::parse_doctest_log};
use atomicwrites::{AtomicFile, OverwriteBehavior};
use camino::{Utf8Path, Utf8PathBuf};
use std::{fs, io::Write};
use tracing::{debug, info};
use xunit_report::TestSuite;

/// Name of the results log the doctest builder leaves in its output
/// directory.
pub const DOCTEST_OUTPUT: &str = "output.txt";

/// Name of the XUnit report written next to the log.
pub const XUNIT_OUTPUT: &str = "doctests.xml";

/// Name of the builder whose output directory contains a doctest log.
pub const DOCTEST_BUILDER: &str = "doctest";

/// Converts the results of a finished documentation build into an XUnit
/// report.
///
/// Only the doctest builder produces a results log, so for any other
/// `builder` this is a no-op returning `Ok(None)`. Otherwise the log is
/// expected at [`DOCTEST_OUTPUT`] inside `outdir` and the report is written
/// to [`XUNIT_OUTPUT`] in the same directory; the report path is returned.
pub fn convert_build_output(
    outdir: &Utf8Path,
    builder: &str,
) -> Result<Option<Utf8PathBuf>, ConvertError> {
    if builder != DOCTEST_BUILDER {
        debug!("builder `{builder}` does not produce doctest output, nothing to do");
        return Ok(None);
    }

    let log_path = outdir.join(DOCTEST_OUTPUT);
    let suite = parse_log_file(&log_path)?;

    let report_path = outdir.join(XUNIT_OUTPUT);
    write_report(&suite, &report_path)?;
    info!(
        "wrote {report_path}: {} tests, {} failures",
        suite.tests(),
        suite.failures(),
    );

    Ok(Some(report_path))
}

/// Reads and parses the doctest log at `path`.
///
/// The log is read in full and the file handle released before parsing
/// begins, on success and failure alike.
pub fn parse_log_file(path: &Utf8Path) -> Result<TestSuite, ConvertError> {
    let input = fs::read_to_string(path).map_err(|error| ConvertError::ReadLog {
        path: path.to_owned(),
        error,
    })?;
    Ok(parse_doctest_log(&input)?)
}

/// Serializes `suite` and writes it to `path`.
///
/// The report is serialized into memory first and moved into place with an
/// atomic write, so a failure part-way through never leaves a truncated
/// report for CI to misread.
pub fn write_report(suite: &TestSuite, path: &Utf8Path) -> Result<(), ConvertError> {
    let mut buf: Vec<u8> = vec![];
    suite.serialize(&mut buf)?;

    AtomicFile::new(path, OverwriteBehavior::AllowOverwrite)
        .write(|file| file.write_all(&buf))
        .map_err(|error| {
            let error = match error {
                atomicwrites::Error::Internal(error) => error,
                atomicwrites::Error::User(error) => error,
            };
            ConvertError::WriteReport {
                path: path.to_owned(),
                error,
            }
        })
}
