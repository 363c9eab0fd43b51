// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Math utilities

use std::f64::consts::PI;

/// Truncate toward zero, saturating at the `i128` range
pub fn truncate(value: f64) -> i128 {
    value.trunc() as i128
}

/// Truncate toward zero for non-negative quantities; negatives clamp to 0
pub fn truncate_unsigned(value: f64) -> u128 {
    value.trunc() as u128
}

/// Circumference of a circle with the given radius
pub fn circumference(radius: i64) -> f64 {
    2.0 * PI * radius as f64
}

/// Area of a disc with the given radius
pub fn disc_area(radius: i64) -> f64 {
    let r = radius as f64;
    PI * r * r
}
