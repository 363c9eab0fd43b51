// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error type for shape parsing

use thiserror::Error;

/// Errors raised while turning a text description into a shape.
///
/// Construction through the typed constructors never fails, so the only
/// failure mode is a description that does not match its expected layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("invalid format for {input:?}: {reason}")]
    InvalidFormat { input: String, reason: String },
}

impl ShapeError {
    pub(crate) fn invalid_format(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// The offending description
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidFormat { input, .. } => input,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_input_and_reason() {
        let err = ShapeError::invalid_format("Square", "expected 6 tokens, found 1");
        assert_eq!(
            err.to_string(),
            "invalid format for \"Square\": expected 6 tokens, found 1"
        );
        assert_eq!(err.input(), "Square");
    }
}
