// Copyright (c) The doctest-xunit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parsing of Sphinx doctest results logs.
//!
//! The log is a sequence of per-document segments followed by a cross-run
//! summary. A document where every example block passed looks like:
//!
//! ```text
//! Document: bar/FooDoc
//! --------------------
//! 1 items passed all tests:
//!    2 tests in default
//! 2 tests in 1 items.
//! 2 passed and 0 failed.
//! Test passed.
//! ```
//!
//! A document with failures reports one block per failing example, delimited
//! by rows of asterisks:
//!
//! ```text
//! Document: bar/FooDoc
//! --------------------
//! **********************************************************************
//! File "bar/FooDoc.rst", line 111, in Ex1
//! Failed example:
//!     print "Single line failed test"
//! Expected:
//!     No match
//! Got:
//!     Single line failed test
//! **********************************************************************
//! 1 items had failures:
//!    1 of   1 in Ex1
//! 1 tests in 1 items.
//! 0 passed and 1 failed.
//! ***Test Failed*** 1 failures.
//! ```
//!
//! [`parse_doctest_log`] turns the whole log into a single
//! [`TestSuite`], preserving document order and within-document order.

use crate::errors::ParseError;
use regex::Regex;
use std::sync::LazyLock;
use xunit_report::{TestCase, TestCaseStatus, TestSuite};

/// Marker beginning the results for one document.
const DOCTEST_DOCUMENT_BEGIN: &str = "Document:";

/// Marker beginning the cross-run summary; everything after it is ignored.
const DOCTEST_SUMMARY_TITLE: &str = "Doctest summary";

/// Name given to the suite produced by a parse run.
pub const SUITE_NAME: &str = "doctests";

/// Failure type recorded on failing cases, serialized as the `type`
/// attribute of the XUnit `failure` element.
pub const USAGE_FAILURE_TYPE: &str = "UsageFailure";

static ALLPASS_SUMMARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+) items passed all tests:$").unwrap());
static ALLPASS_TEST_NAMES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+(\d+) tests in (.+)$").unwrap());
static FAILURE_LOCATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^File "(.+)", line (\d+), in (.+)$"#).unwrap());
static FAILURE_SUMMARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+) items had failures:$").unwrap());

/// Parses the complete text of a doctest results log into a [`TestSuite`].
///
/// Parsing is all-or-nothing: any structural violation returns a
/// [`ParseError`] and no partial suite.
pub fn parse_doctest_log(input: &str) -> Result<TestSuite, ParseError> {
    let mut suite = TestSuite::new(SUITE_NAME);
    let mut segment: Vec<&str> = Vec::new();

    for line in input.lines() {
        if line.starts_with(DOCTEST_DOCUMENT_BEGIN) {
            // A new document begins; parse the previous one first.
            if !segment.is_empty() {
                suite.add_test_cases(parse_segment(&segment)?);
                segment.clear();
            }
            segment.push(line);
        } else if line.starts_with(DOCTEST_SUMMARY_TITLE) {
            break;
        } else if !segment.is_empty() && !line.is_empty() {
            segment.push(line);
        }
    }
    if !segment.is_empty() {
        suite.add_test_cases(parse_segment(&segment)?);
    }

    Ok(suite)
}

/// Outcome shape of one document segment, decided once from its body.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum SegmentKind {
    /// Every example block in the document passed.
    AllPass,
    /// The document reported at least one failing example block.
    HasFailures,
}

fn parse_segment(lines: &[&str]) -> Result<Vec<TestCase>, ParseError> {
    let document = extract_document_name(lines[0])?;

    let underline = lines.get(1).ok_or_else(|| ParseError::TruncatedSegment {
        document: document.to_owned(),
    })?;
    if !underline.starts_with('-') {
        return Err(ParseError::MissingTitleUnderline {
            line: (*underline).to_owned(),
        });
    }

    let body = &lines[2..];
    let first = body.first().ok_or_else(|| ParseError::TruncatedSegment {
        document: document.to_owned(),
    })?;
    let kind = if first.starts_with('*') {
        SegmentKind::HasFailures
    } else {
        SegmentKind::AllPass
    };

    // All cases in a document share its base name as their classname.
    let classname = match document.rfind('/') {
        Some(idx) => &document[idx + 1..],
        None => document,
    };

    match kind {
        SegmentKind::AllPass => parse_all_pass(document, classname, body),
        SegmentKind::HasFailures => Ok(parse_failures(classname, body)),
    }
}

fn extract_document_name(first_line: &str) -> Result<&str, ParseError> {
    match first_line.strip_prefix(DOCTEST_DOCUMENT_BEGIN) {
        Some(rest) => Ok(rest.trim()),
        None => Err(ParseError::MissingDocumentMarker {
            line: first_line.to_owned(),
        }),
    }
}

/// Parses the body of a segment where every block passed.
///
/// The body begins with `<N> items passed all tests:` followed by N lines of
/// the form `<M> tests in <blockname>`; each contributes M passing cases, so
/// the suite total matches the number of executed examples. Trailing summary
/// lines (`2 tests in 1 items.` and friends) are ignored.
fn parse_all_pass(
    document: &str,
    classname: &str,
    body: &[&str],
) -> Result<Vec<TestCase>, ParseError> {
    let captures =
        ALLPASS_SUMMARY_RE
            .captures(body[0])
            .ok_or_else(|| ParseError::InvalidPassSummary {
                line: body[0].to_owned(),
            })?;
    let items: usize = captures[1]
        .parse()
        .map_err(|_| ParseError::InvalidPassSummary {
            line: body[0].to_owned(),
        })?;

    let mut cases = Vec::new();
    for index in 0..items {
        let line = body
            .get(1 + index)
            .ok_or_else(|| ParseError::TruncatedPassList {
                document: document.to_owned(),
                expected: items,
            })?;
        let captures =
            ALLPASS_TEST_NAMES_RE
                .captures(line)
                .ok_or_else(|| ParseError::InvalidPassCount {
                    line: (*line).to_owned(),
                })?;
        let ntests: usize = captures[1]
            .parse()
            .map_err(|_| ParseError::InvalidPassCount {
                line: (*line).to_owned(),
            })?;
        let name = &captures[2];
        for _ in 0..ntests {
            cases.push(TestCase::new(classname, name, TestCaseStatus::pass()));
        }
    }

    Ok(cases)
}

/// Parses the body of a segment that reported failures.
///
/// The body is a sequence of blocks delimited by divider rows. Within a
/// block, a leading `File "...", line N, in <blockname>` line names the
/// failing example; the rest is the verbatim failure transcript. A
/// `<N> items had failures:` line ends accumulation, so the per-document
/// tallies that follow it never leak into a transcript.
fn parse_failures(classname: &str, body: &[&str]) -> Vec<TestCase> {
    let mut cases = Vec::new();
    let mut block: Option<FailureBlock<'_>> = None;

    for line in body {
        if is_divider(line) {
            if let Some(block) = block.take() {
                block.finish(classname, &mut cases);
            }
            block = Some(FailureBlock::default());
            continue;
        }
        if FAILURE_SUMMARY_RE.is_match(line) {
            break;
        }
        if let Some(block) = block.as_mut() {
            block.push_line(line);
        }
    }
    if let Some(block) = block.take() {
        block.finish(classname, &mut cases);
    }

    cases
}

/// A divider is a row consisting solely of repeated `*` characters.
fn is_divider(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b == b'*')
}

/// One failure block under construction, between two dividers.
#[derive(Debug, Default)]
struct FailureBlock<'a> {
    /// Block name from the location line. Stays `None` when the log carries
    /// no recognizable location line; such cases are emitted with an empty
    /// name.
    name: Option<&'a str>,
    transcript: Vec<&'a str>,
}

impl<'a> FailureBlock<'a> {
    fn push_line(&mut self, line: &'a str) {
        if self.name.is_none() && self.transcript.is_empty() {
            if let Some(captures) = FAILURE_LOCATION_RE.captures(line) {
                self.name = Some(captures.get(3).expect("group 3 is not optional").as_str());
                return;
            }
        }
        self.transcript.push(line);
    }

    /// Appends this block as a failing case, unless the block is empty (two
    /// adjacent dividers, or the divider that closes the block list).
    fn finish(self, classname: &str, cases: &mut Vec<TestCase>) {
        if self.name.is_none() && self.transcript.is_empty() {
            return;
        }
        let mut status = TestCaseStatus::failure();
        status.set_type(USAGE_FAILURE_TYPE);
        if !self.transcript.is_empty() {
            status.set_description(self.transcript.join("\n"));
        }
        cases.push(TestCase::new(
            classname,
            self.name.unwrap_or(""),
            status,
        ));
    }
}
