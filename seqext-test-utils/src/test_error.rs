// Copyright 2026 seqext contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Comparable error type for failure-injection tests.

/// An error injected into a fallible operation under test.
///
/// Implements `PartialEq` so tests can assert that the exact injected error
/// surfaced at the caller, with no wrapping along the way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("injected failure: {message}")]
pub struct TestError {
    pub message: String,
}

impl TestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_message() {
        let error = TestError::new("boom");
        assert_eq!(error.to_string(), "injected failure: boom");
    }

    #[test]
    fn test_error_equality_is_by_message() {
        assert_eq!(TestError::new("boom"), TestError::new("boom"));
        assert_ne!(TestError::new("boom"), TestError::new("bang"));
    }
}
