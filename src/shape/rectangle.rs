// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Axis-aligned rectangle spanned by two opposite corners

use super::{write_summary, Measure, ShapeKind};
use crate::error::Result;
use crate::io::Fields;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The corners are taken as given; measurements use absolute differences, so
/// swapped corners describe the same rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    pub top_right_x: i64,
    pub top_right_y: i64,
    pub bottom_left_x: i64,
    pub bottom_left_y: i64,
}

impl Rectangle {
    pub fn new(top_right_x: i64, top_right_y: i64, bottom_left_x: i64, bottom_left_y: i64) -> Self {
        Self {
            top_right_x,
            top_right_y,
            bottom_left_x,
            bottom_left_y,
        }
    }

    /// Extent along the x axis
    pub fn length(&self) -> u64 {
        self.top_right_x.abs_diff(self.bottom_left_x)
    }

    /// Extent along the y axis
    pub fn width(&self) -> u64 {
        self.top_right_y.abs_diff(self.bottom_left_y)
    }

    /// Parse `Rectangle TopRight <x> <y> BottomLeft <x2> <y2>`.
    pub fn from_input_string(input: &str) -> Result<Self> {
        let fields = Fields::read(input, ShapeKind::Rectangle)?;
        Ok(Self::new(
            fields.integer(2)?,
            fields.integer(3)?,
            fields.integer(5)?,
            fields.integer(6)?,
        ))
    }
}

impl Measure for Rectangle {
    fn name(&self) -> &'static str {
        ShapeKind::Rectangle.label()
    }

    fn perimeter(&self) -> i128 {
        2 * (i128::from(self.length()) + i128::from(self.width()))
    }

    fn area(&self) -> u128 {
        u128::from(self.length()) * u128::from(self.width())
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(f, self)
    }
}
