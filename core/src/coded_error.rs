/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use std::error::Error;

/// Type alias to make it easy to work with [miette::Result] and [miette::Report], which
/// are [`std::error::Error`] wrappers. Works hand in hand w/ [`CodedError`] and any other
/// type of error.
pub type CommonResult<T> = miette::Result<T>;

/// Boxed error that can be chained as the cause of a [`CodedError`].
pub type BoxedCause = Box<dyn Error + Send + Sync + 'static>;

/// An error that carries an integer `code`, so that the caller can dispatch on it, an
/// optional message, and an optional chained cause.
///
/// There is no validation of any kind. The code means whatever the caller decides it
/// means.
///
/// # Example
///
/// ```
/// use r3bl_android_core::{CodedError, CommonResult};
///
/// const NOT_SIGNED_IN: i32 = 401;
///
/// fn fetch_profile() -> CommonResult<String> {
///     Err(CodedError::new(NOT_SIGNED_IN, "No session"))?
/// }
///
/// let report = fetch_profile().unwrap_err();
/// let coded = report.downcast_ref::<CodedError>().unwrap();
/// assert_eq!(coded.code(), NOT_SIGNED_IN);
/// ```
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("{}", fmt_code_and_message(.code, .message))]
#[diagnostic(code(r3bl_android_core::coded_error))]
pub struct CodedError {
    code: i32,
    message: String,
    #[source]
    cause: Option<BoxedCause>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn fmt_code_and_message(code: &i32, message: &str) -> String {
    if message.is_empty() {
        format!("[{code}]")
    } else {
        format!("[{code}] {message}")
    }
}

impl CodedError {
    /// Only the code, w/ an empty message and no cause.
    #[must_use]
    pub fn with_code(code: i32) -> Self { Self::new(code, "") }

    /// Code and message, no cause.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            cause: None,
        }
    }

    /// Code and cause, w/ an empty message.
    pub fn with_cause(code: i32, cause: impl Into<BoxedCause>) -> Self {
        Self::with_message_and_cause(code, "", cause)
    }

    /// Code, message, and cause.
    pub fn with_message_and_cause(
        code: i32,
        message: impl Into<String>,
        cause: impl Into<BoxedCause>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    #[must_use]
    pub fn code(&self) -> i32 { self.code }

    /// The message, which is empty if none was given.
    #[must_use]
    pub fn message(&self) -> &str { &self.message }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_with_code() {
        let it = CodedError::with_code(7);
        assert_eq!(it.code(), 7);
        assert_eq!(it.message(), "");
        assert!(it.source().is_none());
        assert_eq!(it.to_string(), "[7]");
    }

    #[test]
    fn test_new() {
        let it = CodedError::new(-1, "bad state");
        assert_eq!(it.code(), -1);
        assert_eq!(it.message(), "bad state");
        assert_eq!(it.to_string(), "[-1] bad state");
    }

    #[test]
    fn test_cause_is_chained() {
        let io_err = std::io::Error::other("disk full");
        let it = CodedError::with_message_and_cause(500, "save failed", io_err);

        assert_eq!(it.code(), 500);
        let Some(cause) = it.source() else {
            panic!("cause must be chained");
        };
        assert_eq!(cause.to_string(), "disk full");
    }

    #[test]
    fn test_with_cause_from_str() {
        let it = CodedError::with_cause(3, "root cause");
        assert_eq!(it.message(), "");
        assert_eq!(it.source().map(ToString::to_string), Some("root cause".into()));
    }

    #[test]
    fn test_into_report_and_back() {
        fn fails() -> CommonResult<()> { Err(CodedError::new(42, "nope"))? }

        let report = fails().unwrap_err();
        let Some(it) = report.downcast_ref::<CodedError>() else {
            panic!("report must wrap a CodedError");
        };
        assert_eq!(it.code(), 42);
    }
}
