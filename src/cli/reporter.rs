// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::analytics::{BatchSummary, ShapeStats};
use crate::io::ParsedLine;
use crate::shape::Shape;
use colored::*;

/// CLI reporter for formatted output
pub struct Reporter {
    color: bool,
    show_exact: bool,
}

impl Reporter {
    pub fn new(color: bool, show_exact: bool) -> Self {
        Self { color, show_exact }
    }

    /// `"<Name> Perimeter <P> Area <A>"`, optionally followed by exact values
    pub fn format_shape(&self, shape: &Shape) -> String {
        let stats = ShapeStats::of(shape);
        let mut out = format!(
            "{} Perimeter {} Area {}",
            self.paint(&stats.name, |s| s.cyan().bold()),
            stats.perimeter,
            stats.area
        );
        if self.show_exact {
            out.push_str(&self.paint(
                &format!(
                    " (exact perimeter {:.6}, exact area {:.6})",
                    stats.exact_perimeter, stats.exact_area
                ),
                |s| s.bright_black(),
            ));
        }
        out
    }

    /// One batch line, prefixed with its line number
    pub fn format_line(&self, parsed: &ParsedLine) -> String {
        let prefix = self.paint(&format!("{:>4}:", parsed.line), |s| s.bright_black());
        match &parsed.result {
            Ok(shape) => format!("{} {}", prefix, self.format_shape(shape)),
            Err(e) => format!(
                "{} {} {}",
                prefix,
                self.paint("error:", |s| s.red().bold()),
                e
            ),
        }
    }

    pub fn format_summary(&self, summary: &BatchSummary) -> String {
        let mut out = String::new();
        out.push_str(&self.paint(&"━".repeat(60), |s| s.bright_black()));
        out.push('\n');

        let status = format!(
            "{} of {} descriptions parsed",
            summary.parsed, summary.total
        );
        if summary.all_parsed() {
            out.push_str(&self.paint(&status, |s| s.green().bold()));
        } else {
            out.push_str(&self.paint(&status, |s| s.yellow().bold()));
            out.push_str(&format!(", {} failed", summary.failed));
        }
        out.push('\n');

        for (name, count) in &summary.counts {
            out.push_str(&format!("  {:<10} {}\n", name, count));
        }
        out.push_str(&format!(
            "  Total perimeter {}\n  Total area {}",
            Self::format_total(summary.total_perimeter),
            Self::format_total(summary.total_area)
        ));
        out
    }

    fn format_total<T: std::fmt::Display>(total: Option<T>) -> String {
        total.map_or_else(|| "out of range".to_string(), |t| t.to_string())
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("{} {}", "Error:".red().bold(), message);
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::parse_document;
    use crate::shape::Circle;

    #[test]
    fn test_plain_shape_line() {
        let reporter = Reporter::new(false, false);
        assert_eq!(
            reporter.format_shape(&Circle::new(1, 1, 2).into()),
            "Circle Perimeter 12 Area 12"
        );
    }

    #[test]
    fn test_exact_values_appended() {
        let reporter = Reporter::new(false, true);
        assert_eq!(
            reporter.format_shape(&Circle::new(0, 0, 1).into()),
            "Circle Perimeter 6 Area 3 (exact perimeter 6.283185, exact area 3.141593)"
        );
    }

    #[test]
    fn test_failed_line() {
        let reporter = Reporter::new(false, false);
        let lines = parse_document("Square TopRight 1");
        let text = reporter.format_line(&lines[0]);
        assert!(text.starts_with("   1: error: invalid format"));
    }

    #[test]
    fn test_summary_lists_counts() {
        let reporter = Reporter::new(false, false);
        let lines = parse_document("Square TopRight 1 1 Side 2\nbogus");
        let text = reporter.format_summary(&BatchSummary::from_lines(&lines));
        assert!(text.contains("1 of 2 descriptions parsed, 1 failed"));
        assert!(text.contains("Square     1"));
        assert!(text.contains("Total area 4"));
    }

    #[test]
    fn test_summary_with_overflowed_total() {
        let reporter = Reporter::new(false, false);
        let summary = BatchSummary {
            total_area: None,
            ..BatchSummary::default()
        };
        assert!(reporter
            .format_summary(&summary)
            .ends_with("Total perimeter 0\n  Total area out of range"));
    }
}
