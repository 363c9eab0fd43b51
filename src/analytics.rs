// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Shape analytics and batch statistics

use crate::io::{to_canonical_string, ParsedLine};
use crate::shape::{Measure, Shape};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Measurements of a single shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStats {
    pub name: String,
    /// Perimeter truncated toward zero
    pub perimeter: i128,
    /// Area truncated toward zero
    pub area: u128,
    pub exact_perimeter: f64,
    pub exact_area: f64,
    /// Description that parses back to the same shape
    pub canonical: String,
}

impl ShapeStats {
    pub fn of(shape: &Shape) -> Self {
        Self {
            name: shape.name().to_string(),
            perimeter: shape.perimeter(),
            area: shape.area(),
            exact_perimeter: shape.exact_perimeter(),
            exact_area: shape.exact_area(),
            canonical: to_canonical_string(shape),
        }
    }
}

/// Aggregate over a parsed document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub parsed: usize,
    pub failed: usize,
    /// Parsed shapes per name
    pub counts: BTreeMap<String, usize>,
    /// Sum of perimeters, `None` once the sum leaves the `i128` range
    pub total_perimeter: Option<i128>,
    /// Sum of areas, `None` once the sum leaves the `u128` range
    pub total_area: Option<u128>,
}

impl Default for BatchSummary {
    fn default() -> Self {
        Self {
            total: 0,
            parsed: 0,
            failed: 0,
            counts: BTreeMap::new(),
            total_perimeter: Some(0),
            total_area: Some(0),
        }
    }
}

impl BatchSummary {
    pub fn from_lines(lines: &[ParsedLine]) -> Self {
        let mut summary = Self {
            total: lines.len(),
            ..Self::default()
        };

        for shape in lines.iter().filter_map(|l| l.result.as_ref().ok()) {
            summary.parsed += 1;
            *summary.counts.entry(shape.name().to_string()).or_insert(0) += 1;
            summary.total_perimeter = summary
                .total_perimeter
                .and_then(|sum| sum.checked_add(shape.perimeter()));
            summary.total_area = summary
                .total_area
                .and_then(|sum| sum.checked_add(shape.area()));
        }
        summary.failed = summary.total - summary.parsed;

        summary
    }

    pub fn all_parsed(&self) -> bool {
        self.failed == 0
    }
}
