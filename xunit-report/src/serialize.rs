// Copyright (c) The doctest-xunit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Serialize a `TestSuite`.

use crate::{errors::SerializeError, Output, TestCase, TestCaseStatus, TestSuite};
use quick_xml::{
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
    Writer,
};
use std::io;

static TESTSUITE_TAG: &str = "testsuite";
static TESTCASE_TAG: &str = "testcase";
static FAILURE_TAG: &str = "failure";

pub(crate) fn serialize_suite(
    suite: &TestSuite,
    writer: impl io::Write,
) -> Result<(), SerializeError> {
    let mut writer = Writer::new_with_indent(writer, b' ', 4);

    let decl = BytesDecl::new("1.0", Some("UTF-8"), None);
    writer.write_event(Event::Decl(decl))?;

    serialize_suite_impl(suite, &mut writer)?;

    // Add a trailing newline.
    writer.write_indent()?;
    Ok(())
}

fn serialize_suite_impl(
    suite: &TestSuite,
    writer: &mut Writer<impl io::Write>,
) -> Result<(), SerializeError> {
    // Counts are derived from the case list at this point, never cached.
    let tests = suite.tests().to_string();
    let failures = suite.failures().to_string();

    let mut testsuite_tag = BytesStart::new(TESTSUITE_TAG);
    testsuite_tag.extend_attributes([
        ("name", suite.name.as_str()),
        ("tests", tests.as_str()),
        ("failures", failures.as_str()),
    ]);
    writer.write_event(Event::Start(testsuite_tag))?;

    for test_case in &suite.test_cases {
        serialize_test_case(test_case, writer)?;
    }

    serialize_end_tag(TESTSUITE_TAG, writer)?;
    writer.write_event(Event::Eof)?;

    Ok(())
}

fn serialize_test_case(
    test_case: &TestCase,
    writer: &mut Writer<impl io::Write>,
) -> Result<(), SerializeError> {
    // Use the destructuring syntax to ensure that all fields are handled.
    let TestCase {
        classname,
        name,
        status,
    } = test_case;

    let mut testcase_tag = BytesStart::new(TESTCASE_TAG);
    testcase_tag.extend_attributes([("classname", classname.as_str()), ("name", name.as_str())]);

    match status {
        TestCaseStatus::Pass => {
            writer.write_event(Event::Empty(testcase_tag))?;
        }
        TestCaseStatus::Failure { ty, description } => {
            writer.write_event(Event::Start(testcase_tag))?;
            serialize_failure(ty.as_deref(), description.as_ref(), writer)?;
            serialize_end_tag(TESTCASE_TAG, writer)?;
        }
    }

    Ok(())
}

fn serialize_failure(
    ty: Option<&str>,
    description: Option<&Output>,
    writer: &mut Writer<impl io::Write>,
) -> Result<(), SerializeError> {
    let mut failure_tag = BytesStart::new(FAILURE_TAG);
    if let Some(ty) = ty {
        failure_tag.push_attribute(("type", ty));
    }

    match description {
        Some(description) => {
            writer.write_event(Event::Start(failure_tag))?;
            writer.write_event(Event::Text(BytesText::new(description.as_str())))?;
            serialize_end_tag(FAILURE_TAG, writer)?;
        }
        None => {
            writer.write_event(Event::Empty(failure_tag))?;
        }
    }

    Ok(())
}

fn serialize_end_tag(
    tag_name: &'static str,
    writer: &mut Writer<impl io::Write>,
) -> Result<(), SerializeError> {
    writer.write_event(Event::End(BytesEnd::new(tag_name)))?;
    Ok(())
}
