// Copyright (c) The doctest-xunit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{errors::SerializeError, serialize::serialize_suite};
use std::io;

/// The root element of an XUnit report.
///
/// A `TestSuite` is an ordered collection of [`TestCase`] instances. The
/// `tests` and `failures` attributes of the serialized report are computed
/// from the case list at emit time; they are never stored separately, so they
/// cannot fall out of sync with the cases.
#[derive(Clone, Debug)]
pub struct TestSuite {
    /// The name of this suite.
    pub name: String,

    /// The test cases that form this suite, in execution order.
    pub test_cases: Vec<TestCase>,
}

impl TestSuite {
    /// Creates a new `TestSuite` with the given name and no cases.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            test_cases: vec![],
        }
    }

    /// Adds a test case to this suite.
    pub fn add_test_case(&mut self, test_case: TestCase) -> &mut Self {
        self.test_cases.push(test_case);
        self
    }

    /// Adds several test cases to this suite.
    pub fn add_test_cases(&mut self, test_cases: impl IntoIterator<Item = TestCase>) -> &mut Self {
        self.test_cases.extend(test_cases);
        self
    }

    /// The total number of test cases in this suite.
    pub fn tests(&self) -> usize {
        self.test_cases.len()
    }

    /// The number of failed test cases in this suite.
    pub fn failures(&self) -> usize {
        self.test_cases
            .iter()
            .filter(|case| !case.status.is_pass())
            .count()
    }

    /// The number of passed test cases in this suite.
    pub fn passed(&self) -> usize {
        self.tests() - self.failures()
    }

    /// Serialize this suite to the given writer.
    pub fn serialize(&self, writer: impl io::Write) -> Result<(), SerializeError> {
        serialize_suite(self, writer)
    }

    /// Serialize this suite to a string.
    #[allow(clippy::inherent_to_string)]
    pub fn to_string(&self) -> Result<String, SerializeError> {
        let mut buf: Vec<u8> = vec![];
        self.serialize(&mut buf)?;
        String::from_utf8(buf).map_err(|utf8_err| SerializeError::Utf8(utf8_err.utf8_error()))
    }
}

/// A single test case within a [`TestSuite`].
#[derive(Clone, Debug)]
pub struct TestCase {
    /// The "classname" of the test case: the container the case was executed
    /// in. `classname` + `name` together identify a test.
    pub classname: String,

    /// The name of the test case.
    pub name: String,

    /// The outcome of this test case.
    pub status: TestCaseStatus,
}

impl TestCase {
    /// Creates a new test case.
    pub fn new(
        classname: impl Into<String>,
        name: impl Into<String>,
        status: TestCaseStatus,
    ) -> Self {
        Self {
            classname: classname.into(),
            name: name.into(),
            status,
        }
    }
}

/// Represents the success or failure of a test case.
///
/// A case is passed exactly when its status is [`Pass`](Self::Pass); the
/// failure description only exists inside the [`Failure`](Self::Failure)
/// variant, so a passed case can never carry failure text.
#[derive(Clone, Debug)]
pub enum TestCaseStatus {
    /// This test case passed.
    Pass,

    /// This test case failed.
    Failure {
        /// The "type" of failure that occurred, serialized as the `type`
        /// attribute of the `failure` element.
        ty: Option<String>,

        /// The captured failure text, serialized as the text node of the
        /// `failure` element.
        description: Option<Output>,
    },
}

impl TestCaseStatus {
    /// Creates a new `TestCaseStatus` that represents a passed test.
    pub fn pass() -> Self {
        TestCaseStatus::Pass
    }

    /// Creates a new `TestCaseStatus` that represents a failed test.
    pub fn failure() -> Self {
        TestCaseStatus::Failure {
            ty: None,
            description: None,
        }
    }

    /// Sets the failure type. No-op if this is a pass.
    pub fn set_type(&mut self, ty: impl Into<String>) -> &mut Self {
        if let TestCaseStatus::Failure { ty: ty_mut, .. } = self {
            *ty_mut = Some(ty.into());
        }
        self
    }

    /// Sets the failure description (text node). No-op if this is a pass.
    pub fn set_description(&mut self, description: impl AsRef<str>) -> &mut Self {
        if let TestCaseStatus::Failure {
            description: description_mut,
            ..
        } = self
        {
            *description_mut = Some(Output::new(description));
        }
        self
    }

    /// Returns true if this status represents a passed test.
    pub fn is_pass(&self) -> bool {
        matches!(self, TestCaseStatus::Pass)
    }
}

/// Text captured from a test run, such as a failure transcript.
///
/// # Encoding
///
/// XUnit reports assume valid Unicode text. Non-printable control characters
/// cannot be represented in XML at all, so they are stripped on construction.
#[derive(Clone, Debug)]
pub struct Output {
    output: Box<str>,
}

impl Output {
    /// Creates a new output, removing any non-printable characters from it.
    pub fn new(output: impl AsRef<str>) -> Self {
        let output = output
            .as_ref()
            .replace(
                |c| matches!(c, '\x00'..='\x08' | '\x0b' | '\x0c' | '\x0e'..='\x1f'),
                "",
            )
            .into_boxed_str();
        Self { output }
    }

    /// Returns the output.
    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Converts the output into a string.
    pub fn into_string(self) -> String {
        self.output.into_string()
    }
}

impl AsRef<str> for Output {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<Output> for String {
    fn from(output: Output) -> Self {
        output.into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_derive_from_case_list() {
        let mut suite = TestSuite::new("doctests");
        assert_eq!(suite.tests(), 0);
        assert_eq!(suite.failures(), 0);

        suite.add_test_case(TestCase::new("Doc", "default", TestCaseStatus::pass()));
        suite.add_test_case(TestCase::new("Doc", "Ex1", TestCaseStatus::failure()));
        suite.add_test_case(TestCase::new("Other", "default", TestCaseStatus::pass()));

        assert_eq!(suite.tests(), 3);
        assert_eq!(suite.failures(), 1);
        assert_eq!(suite.passed(), 2);

        // Mutating the case list directly must be reflected in the counts.
        suite.test_cases.pop();
        assert_eq!(suite.tests(), 2);
        assert_eq!(suite.passed(), 1);
    }

    #[test]
    fn status_setters_are_noops_on_pass() {
        let mut status = TestCaseStatus::pass();
        status.set_type("UsageFailure").set_description("boom");
        assert!(status.is_pass());
    }

    #[test]
    fn output_strips_control_characters() {
        let output = Output::new("got:\x08 a\x00nswer\n\tok");
        assert_eq!(output.as_str(), "got: answer\n\tok");
    }
}
