// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Command runner shared by the `shapekit` binary

use super::Reporter;
use crate::analytics::{BatchSummary, ShapeStats};
use crate::config::{OutputFormat, ReportConfig};
use crate::io::{self, ParsedLine};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Rendered output of a batch run
pub struct BatchReport {
    pub output: String,
    pub summary: BatchSummary,
}

#[derive(Serialize)]
struct LineReport {
    line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<ShapeStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<&ParsedLine> for LineReport {
    fn from(parsed: &ParsedLine) -> Self {
        let (stats, error) = match &parsed.result {
            Ok(shape) => (Some(ShapeStats::of(shape)), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            line: parsed.line,
            stats,
            error,
        }
    }
}

#[derive(Serialize)]
struct BatchJson<'a> {
    lines: Vec<LineReport>,
    summary: &'a BatchSummary,
}

/// Runner for the CLI commands
pub struct Runner {
    config: ReportConfig,
    reporter: Reporter,
}

impl Runner {
    pub fn new(config: ReportConfig) -> Self {
        let reporter = Reporter::new(config.color, config.show_exact);
        Self { config, reporter }
    }

    /// Measure a single description
    pub fn describe(&self, input: &str) -> Result<String> {
        let shape = io::parse_shape(input)?;
        match self.config.format {
            OutputFormat::Text => Ok(self.reporter.format_shape(&shape)),
            OutputFormat::Json => serde_json::to_string_pretty(&ShapeStats::of(&shape))
                .context("Failed to serialize shape stats"),
        }
    }

    /// Normalize a description to its canonical form
    pub fn canonical(&self, input: &str) -> Result<String> {
        let shape = io::parse_shape(input)?;
        Ok(io::to_canonical_string(&shape))
    }

    /// Measure every description in a document
    pub fn batch(&self, source: &str) -> Result<BatchReport> {
        self.report(io::parse_document(source))
    }

    /// Measure every description in a document on disk
    pub fn batch_file(&self, path: impl AsRef<Path>) -> Result<BatchReport> {
        self.report(io::parse_document_file(path)?)
    }

    fn report(&self, mut lines: Vec<ParsedLine>) -> Result<BatchReport> {
        if self.config.fail_fast {
            if let Some(first_bad) = lines.iter().position(|l| !l.is_ok()) {
                lines.truncate(first_bad + 1);
            }
        }

        let summary = BatchSummary::from_lines(&lines);
        info!(
            total = summary.total,
            failed = summary.failed,
            "batch finished"
        );

        let output = match self.config.format {
            OutputFormat::Text => {
                let mut out: Vec<String> =
                    lines.iter().map(|l| self.reporter.format_line(l)).collect();
                out.push(self.reporter.format_summary(&summary));
                out.join("\n")
            }
            OutputFormat::Json => {
                let doc = BatchJson {
                    lines: lines.iter().map(LineReport::from).collect(),
                    summary: &summary,
                };
                serde_json::to_string_pretty(&doc).context("Failed to serialize batch report")?
            }
        };

        Ok(BatchReport { output, summary })
    }
}
