// Copyright (c) The doctest-xunit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// An error that occurs while serializing a [`TestSuite`](crate::TestSuite).
///
/// Returned by [`TestSuite::serialize`](crate::TestSuite::serialize) and
/// [`TestSuite::to_string`](crate::TestSuite::to_string).
#[derive(Debug, Error)]
pub enum SerializeError {
    /// The XML writer reported an error.
    #[error("error serializing XUnit report")]
    Xml(#[from] quick_xml::Error),

    /// The serialized report was not valid UTF-8.
    #[error("serialized XUnit report is not valid UTF-8")]
    Utf8(#[from] std::str::Utf8Error),
}
