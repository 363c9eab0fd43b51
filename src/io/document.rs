// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Multi-line documents of shape descriptions

use super::parse_shape;
use crate::error::Result;
use crate::shape::Shape;
use anyhow::Context;
use std::path::Path;
use tracing::{debug, warn};

/// Outcome of parsing one line of a document
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    /// 1-based line number in the source
    pub line: usize,
    pub result: Result<Shape>,
}

impl ParsedLine {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Parse every description in `source`, one per line.
///
/// Blank lines and `#` comments are skipped. Failures are recorded per line
/// and never stop the rest of the document.
pub fn parse_document(source: &str) -> Vec<ParsedLine> {
    let parsed: Vec<ParsedLine> = source
        .lines()
        .enumerate()
        .filter(|(_, text)| {
            let trimmed = text.trim_start();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(index, text)| {
            let result = parse_shape(text);
            if let Err(e) = &result {
                warn!(line = index + 1, error = %e, "skipping malformed description");
            }
            ParsedLine {
                line: index + 1,
                result,
            }
        })
        .collect();

    debug!(lines = parsed.len(), "parsed document");
    parsed
}

/// Read and parse a document from disk
pub fn parse_document_file(path: impl AsRef<Path>) -> anyhow::Result<Vec<ParsedLine>> {
    let source = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read shape file: {:?}", path.as_ref()))?;
    Ok(parse_document(&source))
}
