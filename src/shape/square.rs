// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Axis-aligned square anchored at its top-right corner

use super::{write_summary, Measure, ShapeKind};
use crate::error::Result;
use crate::io::Fields;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub top_right_x: i64,
    pub top_right_y: i64,
    pub side: i64,
}

impl Square {
    pub fn new(top_right_x: i64, top_right_y: i64, side: i64) -> Self {
        Self {
            top_right_x,
            top_right_y,
            side,
        }
    }

    /// Parse `Square TopRight <x> <y> Side <side>`.
    ///
    /// Only the token count and the three numeric positions are checked; the
    /// keyword tokens may hold anything.
    pub fn from_input_string(input: &str) -> Result<Self> {
        let fields = Fields::read(input, ShapeKind::Square)?;
        Ok(Self::new(
            fields.integer(2)?,
            fields.integer(3)?,
            fields.integer(5)?,
        ))
    }
}

impl Measure for Square {
    fn name(&self) -> &'static str {
        ShapeKind::Square.label()
    }

    fn perimeter(&self) -> i128 {
        4 * i128::from(self.side)
    }

    fn area(&self) -> u128 {
        u128::from(self.side.unsigned_abs()).pow(2)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_square() {
        let square = Square::new(1, 1, 1);
        assert_eq!(square.name(), "Square");
        assert_eq!(square.perimeter(), 4);
        assert_eq!(square.area(), 1);
        assert_eq!(square.to_string(), "Square Perimeter 4 Area 1");
    }

    #[test]
    fn test_position_does_not_affect_measurements() {
        let a = Square::new(0, 0, 7);
        let b = Square::new(-40, 12, 7);
        assert_eq!(a.perimeter(), b.perimeter());
        assert_eq!(a.area(), b.area());
        assert_eq!(a.perimeter(), 28);
        assert_eq!(a.area(), 49);
    }

    #[test]
    fn test_negative_side_is_accepted() {
        let square = Square::new(0, 0, -3);
        assert_eq!(square.perimeter(), -12);
        assert_eq!(square.area(), 9);
    }

    #[test]
    fn test_large_side_does_not_overflow() {
        let square = Square::from_input_string("Square TopRight 0 0 Side 3037000500").unwrap();
        assert_eq!(square.perimeter(), 12_148_002_000);
        assert_eq!(square.area(), 9_223_372_037_000_250_000);
        assert_eq!(
            square.to_string(),
            "Square Perimeter 12148002000 Area 9223372037000250000"
        );
    }

    #[test]
    fn test_extreme_sides() {
        let max = Square::new(0, 0, i64::MAX);
        assert_eq!(max.perimeter(), 4 * i128::from(i64::MAX));
        assert_eq!(max.area(), u128::from(i64::MAX as u64).pow(2));

        let min = Square::new(0, 0, i64::MIN);
        assert_eq!(min.perimeter(), 4 * i128::from(i64::MIN));
        assert_eq!(min.area(), 1u128 << 126);
    }

    #[test]
    fn test_from_input_string() {
        let square = Square::from_input_string("Square TopRight 1 1 Side 1").unwrap();
        assert_eq!(square, Square::new(1, 1, 1));
    }

    #[test]
    fn test_keyword_tokens_are_not_checked() {
        let square = Square::from_input_string("a b 3 4 c 5").unwrap();
        assert_eq!(square, Square::new(3, 4, 5));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(Square::from_input_string("Square").is_err());
        assert!(Square::from_input_string("Square TopRight 1").is_err());
        assert!(Square::from_input_string("Square TopRight 1 one Side 1").is_err());
        assert!(Square::from_input_string("Square TopRight 1 1 Side 1 extra").is_err());
        assert!(Square::from_input_string("Square TopRight 1 1 Side 1.5").is_err());
    }
}
