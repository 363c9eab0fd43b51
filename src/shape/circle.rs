// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Circle given by its center and radius

use super::{write_summary, Measure, ShapeKind};
use crate::error::Result;
use crate::io::Fields;
use crate::utils::math::{circumference, disc_area, truncate, truncate_unsigned};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Circle {
    pub center_x: i64,
    pub center_y: i64,
    pub radius: i64,
}

impl Circle {
    pub fn new(center_x: i64, center_y: i64, radius: i64) -> Self {
        Self {
            center_x,
            center_y,
            radius,
        }
    }

    /// Parse `Circle Center <x> <y> Radius <radius>`.
    pub fn from_input_string(input: &str) -> Result<Self> {
        let fields = Fields::read(input, ShapeKind::Circle)?;
        Ok(Self::new(
            fields.integer(2)?,
            fields.integer(3)?,
            fields.integer(5)?,
        ))
    }
}

impl Measure for Circle {
    fn name(&self) -> &'static str {
        ShapeKind::Circle.label()
    }

    /// Circumference truncated toward zero
    fn perimeter(&self) -> i128 {
        truncate(self.exact_perimeter())
    }

    /// Area truncated toward zero
    fn area(&self) -> u128 {
        truncate_unsigned(self.exact_area())
    }

    fn exact_perimeter(&self) -> f64 {
        circumference(self.radius)
    }

    fn exact_area(&self) -> f64 {
        disc_area(self.radius)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_radius_two() {
        let circle = Circle::new(1, 1, 2);
        assert_eq!(circle.name(), "Circle");
        assert_eq!(circle.perimeter(), 12);
        assert_eq!(circle.area(), 12);
        assert_eq!(circle.to_string(), "Circle Perimeter 12 Area 12");
    }

    #[test]
    fn test_exact_values() {
        let circle = Circle::new(1, 1, 2);
        assert_relative_eq!(circle.exact_perimeter(), 2.0 * PI * 2.0);
        assert_relative_eq!(circle.exact_area(), PI * 4.0);
    }

    #[test]
    fn test_truncates_rather_than_rounds() {
        // 2π·3 = 18.85, π·9 = 28.27
        let circle = Circle::new(0, 0, 3);
        assert_eq!(circle.perimeter(), 18);
        assert_eq!(circle.area(), 28);

        // π·1 = 3.14, 2π = 6.28
        let unit = Circle::new(0, 0, 1);
        assert_eq!(unit.perimeter(), 6);
        assert_eq!(unit.area(), 3);
    }

    #[test]
    fn test_zero_radius() {
        let point = Circle::new(5, 5, 0);
        assert_eq!(point.perimeter(), 0);
        assert_eq!(point.area(), 0);
    }

    #[test]
    fn test_negative_radius_truncates_toward_zero() {
        let circle = Circle::new(0, 0, -2);
        assert_eq!(circle.perimeter(), -12);
        assert_eq!(circle.area(), 12);
    }

    #[test]
    fn test_extreme_radius() {
        let circle = Circle::from_input_string("Circle Center 0 0 Radius 9223372036854775807").unwrap();
        let r = i64::MAX as f64;
        assert_eq!(circle.perimeter(), (2.0 * PI * r).trunc() as i128);
        assert_eq!(circle.area(), (PI * r * r).trunc() as u128);
        assert!(circle.area() > u128::from(u64::MAX));

        let negative = Circle::new(0, 0, i64::MIN);
        assert!(negative.perimeter() < 0);
        assert_eq!(negative.area(), (PI * r * r).trunc() as u128);
    }

    #[test]
    fn test_keyword_tokens_are_not_checked() {
        let circle = Circle::from_input_string("o p -4 7 q 3").unwrap();
        assert_eq!(circle, Circle::new(-4, 7, 3));
    }

    #[test]
    fn test_from_input_string() {
        let circle = Circle::from_input_string("Circle Center 1 1 Radius 2").unwrap();
        assert_eq!(circle, Circle::new(1, 1, 2));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(Circle::from_input_string("Circle Center 1 1 Radius").is_err());
        assert!(Circle::from_input_string("Circle Center 1 1 Radius two").is_err());
        assert!(Circle::from_input_string("").is_err());
    }
}
