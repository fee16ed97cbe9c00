// Copyright (c) The doctest-xunit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors produced while converting doctest logs.

use camino::Utf8PathBuf;
use thiserror::Error;
use xunit_report::SerializeError;

/// An error that occurs while parsing a doctest results log.
///
/// The log grammar is fixed, and parsing is all-or-nothing: the first
/// structural violation aborts the parse with a variant identifying the
/// offending line.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// A document segment did not begin with the `Document:` marker.
    #[error("first line of document results should begin \"Document:\", found: {line:?}")]
    MissingDocumentMarker {
        /// The offending line.
        line: String,
    },

    /// The line under a document title was not an underline row.
    #[error("invalid second line of document results: {line:?}, expected a title underline")]
    MissingTitleUnderline {
        /// The offending line.
        line: String,
    },

    /// A document segment ended before its result lines.
    #[error("results for document {document} ended before any test summary")]
    TruncatedSegment {
        /// The document whose segment was cut short.
        document: String,
    },

    /// The first line of an all-passed segment did not match
    /// `<N> items passed all tests:`.
    #[error("all-passed summary line incorrect: {line:?}")]
    InvalidPassSummary {
        /// The offending line.
        line: String,
    },

    /// A line in an all-passed segment did not match
    /// `<M> tests in <blockname>`.
    #[error("unexpected information line in all-passed results: {line:?}")]
    InvalidPassCount {
        /// The offending line.
        line: String,
    },

    /// An all-passed segment ended before listing every block it declared.
    #[error("all-passed results for {document} ended before {expected} block lines were found")]
    TruncatedPassList {
        /// The document whose segment was cut short.
        document: String,
        /// The number of block lines the summary declared.
        expected: usize,
    },
}

/// An error that occurs while converting a doctest log into an XUnit report.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// The doctest log could not be read.
    #[error("failed to read doctest log at `{path}`")]
    ReadLog {
        /// The path to the log.
        path: Utf8PathBuf,
        /// The underlying error.
        #[source]
        error: std::io::Error,
    },

    /// The doctest log did not match the expected grammar.
    #[error("failed to parse doctest log")]
    Parse(#[from] ParseError),

    /// The report could not be serialized.
    #[error("failed to serialize XUnit report")]
    Serialize(#[from] SerializeError),

    /// The report could not be written to its output path.
    #[error("failed to write XUnit report to `{path}`")]
    WriteReport {
        /// The path the report was being written to.
        path: Utf8PathBuf,
        /// The underlying error.
        #[source]
        error: std::io::Error,
    },
}
