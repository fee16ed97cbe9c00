// Copyright (c) The doctest-xunit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino_tempfile::Utf8TempDir;
use doctest_xunit::{convert_build_output, ConvertError, DOCTEST_OUTPUT, XUNIT_OUTPUT};
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::fs;

static SAMPLE_LOG: &str = indoc! {r#"
    Document: algorithms/FirstDoc
    -----------------------------
    1 items passed all tests:
       2 tests in default
    2 tests in 1 items.
    2 passed and 0 failed.
    Test passed.
    Document: algorithms/SecondDoc
    ------------------------------
    **********************************************************************
    File "algorithms/SecondDoc.rst", line 111, in Ex1
    Failed example:
        print "Single line failed test"
    Expected:
        No match
    Got:
        Single line failed test
    **********************************************************************
    1 items had failures:
       1 of   1 in Ex1
    1 tests in 1 items.
    0 passed and 1 failed.
    ***Test Failed*** 1 failures.
    Doctest summary
    ===============
        3 tests
        1 failure in tests
        0 failures in setup code
"#};

// Failure transcripts span indentation levels, so the expected report is
// written out flush-left rather than through indoc.
static EXPECTED_REPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuite name="doctests" tests="3" failures="1">
    <testcase classname="FirstDoc" name="default"/>
    <testcase classname="FirstDoc" name="default"/>
    <testcase classname="SecondDoc" name="Ex1">
        <failure type="UsageFailure">Failed example:
    print &quot;Single line failed test&quot;
Expected:
    No match
Got:
    Single line failed test</failure>
    </testcase>
</testsuite>
"#;

#[test]
fn converts_doctest_build_output() {
    let outdir = Utf8TempDir::new().expect("temp dir is created");
    fs::write(outdir.path().join(DOCTEST_OUTPUT), SAMPLE_LOG).expect("log is written");

    let report_path = convert_build_output(outdir.path(), "doctest")
        .expect("conversion succeeds")
        .expect("doctest builder produces a report");
    assert_eq!(report_path, outdir.path().join(XUNIT_OUTPUT));

    let report = fs::read_to_string(&report_path).expect("report is readable");
    assert_eq!(report, EXPECTED_REPORT);
}

#[test]
fn conversion_is_idempotent() {
    let outdir = Utf8TempDir::new().expect("temp dir is created");
    fs::write(outdir.path().join(DOCTEST_OUTPUT), SAMPLE_LOG).expect("log is written");

    let first_path = convert_build_output(outdir.path(), "doctest")
        .expect("first conversion succeeds")
        .expect("doctest builder produces a report");
    let first = fs::read(&first_path).expect("report is readable");

    let second_path = convert_build_output(outdir.path(), "doctest")
        .expect("second conversion succeeds")
        .expect("doctest builder produces a report");
    let second = fs::read(&second_path).expect("report is readable");

    assert_eq!(first_path, second_path);
    assert_eq!(first, second);
}

#[test]
fn non_doctest_builder_is_a_noop() {
    let outdir = Utf8TempDir::new().expect("temp dir is created");
    // No log file either: the builder check comes first.

    let result = convert_build_output(outdir.path(), "html").expect("no-op succeeds");
    assert_eq!(result, None);
    assert!(
        !outdir.path().join(XUNIT_OUTPUT).exists(),
        "no report is written for non-doctest builders"
    );
}

#[test]
fn missing_log_is_an_error() {
    let outdir = Utf8TempDir::new().expect("temp dir is created");

    let err = convert_build_output(outdir.path(), "doctest").expect_err("missing log is rejected");
    assert!(
        matches!(&err, ConvertError::ReadLog { path, .. } if path.file_name() == Some(DOCTEST_OUTPUT)),
        "unexpected error: {err}"
    );
}

#[test]
fn malformed_log_leaves_no_report_behind() {
    let outdir = Utf8TempDir::new().expect("temp dir is created");
    let log = indoc! {"
        Document: a/B
        this is not an underline
    "};
    fs::write(outdir.path().join(DOCTEST_OUTPUT), log).expect("log is written");

    let err = convert_build_output(outdir.path(), "doctest").expect_err("bad log is rejected");
    assert!(
        matches!(&err, ConvertError::Parse(_)),
        "unexpected error: {err}"
    );
    assert!(
        !outdir.path().join(XUNIT_OUTPUT).exists(),
        "parse failures never produce a partial report"
    );
}

#[test]
fn rerun_overwrites_previous_report() {
    let outdir = Utf8TempDir::new().expect("temp dir is created");
    fs::write(outdir.path().join(DOCTEST_OUTPUT), SAMPLE_LOG).expect("log is written");
    convert_build_output(outdir.path(), "doctest").expect("first conversion succeeds");

    let passing_log = indoc! {"
        Document: algorithms/FirstDoc
        -----------------------------
        1 items passed all tests:
           1 tests in default
    "};
    fs::write(outdir.path().join(DOCTEST_OUTPUT), passing_log).expect("log is rewritten");
    convert_build_output(outdir.path(), "doctest").expect("second conversion succeeds");

    let report =
        fs::read_to_string(outdir.path().join(XUNIT_OUTPUT)).expect("report is readable");
    assert!(
        report.contains(r#"tests="1" failures="0""#),
        "report reflects the rerun: {report}"
    );
}
