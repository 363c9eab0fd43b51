// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Shape module - planar figures and their measurements
//!
//! Every figure is an immutable value. Perimeter and area are recomputed from
//! the stored parameters on each call and reported as integers truncated
//! toward zero; the untruncated values stay available through
//! [`Measure::exact_perimeter`] and [`Measure::exact_area`].
//!
//! Parameters are `i64`, measurements are widened so that every parameter
//! combination fits: perimeters are `i128` (a negative side or radius gives a
//! negative perimeter) and areas are `u128`.

mod circle;
mod rectangle;
mod square;

pub use circle::Circle;
pub use rectangle::Rectangle;
pub use square::Square;

use crate::error::ShapeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Common measurements every figure provides
pub trait Measure {
    /// Fixed label of the figure ("Square", "Rectangle", "Circle")
    fn name(&self) -> &'static str;

    fn perimeter(&self) -> i128;

    fn area(&self) -> u128;

    /// Perimeter before truncation
    fn exact_perimeter(&self) -> f64 {
        self.perimeter() as f64
    }

    /// Area before truncation
    fn exact_area(&self) -> f64 {
        self.area() as f64
    }
}

/// Writes the `"<name> Perimeter <p> Area <a>"` summary shared by all figures.
pub(crate) fn write_summary(f: &mut fmt::Formatter<'_>, shape: &impl Measure) -> fmt::Result {
    write!(
        f,
        "{} Perimeter {} Area {}",
        shape.name(),
        shape.perimeter(),
        shape.area()
    )
}

/// Discriminant of [`Shape`], keyed by the leading token of a description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShapeKind {
    Square,
    Rectangle,
    Circle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Square, ShapeKind::Rectangle, ShapeKind::Circle];

    pub fn label(self) -> &'static str {
        match self {
            Self::Square => "Square",
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
        }
    }

    /// Exact, case-sensitive lookup of a shape label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }

    /// Number of tokens in this kind's text description
    pub fn token_count(self) -> usize {
        match self {
            Self::Square | Self::Circle => 6,
            Self::Rectangle => 7,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Any supported planar figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Shape {
    Square(Square),
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Square(_) => ShapeKind::Square,
            Self::Rectangle(_) => ShapeKind::Rectangle,
            Self::Circle(_) => ShapeKind::Circle,
        }
    }

    fn as_measure(&self) -> &dyn Measure {
        match self {
            Self::Square(s) => s,
            Self::Rectangle(r) => r,
            Self::Circle(c) => c,
        }
    }
}

impl Measure for Shape {
    fn name(&self) -> &'static str {
        self.kind().label()
    }

    fn perimeter(&self) -> i128 {
        self.as_measure().perimeter()
    }

    fn area(&self) -> u128 {
        self.as_measure().area()
    }

    fn exact_perimeter(&self) -> f64 {
        self.as_measure().exact_perimeter()
    }

    fn exact_area(&self) -> f64 {
        self.as_measure().exact_area()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(f, self)
    }
}

impl FromStr for Shape {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::io::parse_shape(s)
    }
}

impl From<Square> for Shape {
    fn from(square: Square) -> Self {
        Self::Square(square)
    }
}

impl From<Rectangle> for Shape {
    fn from(rectangle: Rectangle) -> Self {
        Self::Rectangle(rectangle)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(ShapeKind::from_label("Square"), Some(ShapeKind::Square));
        assert_eq!(ShapeKind::from_label("Rectangle"), Some(ShapeKind::Rectangle));
        assert_eq!(ShapeKind::from_label("Circle"), Some(ShapeKind::Circle));
        assert_eq!(ShapeKind::from_label("square"), None);
        assert_eq!(ShapeKind::from_label("Triangle"), None);
    }

    #[test]
    fn test_dispatch_matches_variants() {
        let shapes: [Shape; 3] = [
            Square::new(1, 1, 1).into(),
            Rectangle::new(2, 2, 1, 1).into(),
            Circle::new(1, 1, 2).into(),
        ];

        let rendered: Vec<String> = shapes.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "Square Perimeter 4 Area 1",
                "Rectangle Perimeter 4 Area 1",
                "Circle Perimeter 12 Area 12",
            ]
        );
        assert_eq!(shapes[0].name(), "Square");
        assert_eq!(shapes[1].name(), "Rectangle");
        assert_eq!(shapes[2].name(), "Circle");
    }

    #[test]
    fn test_serde_tagged_by_kind() {
        let shape = Shape::from(Square::new(1, 2, 3));
        let json = serde_json::to_value(shape).unwrap();
        assert_eq!(json["kind"], "Square");
        assert_eq!(json["side"], 3);

        let back: Shape = serde_json::from_value(json).unwrap();
        assert_eq!(back, shape);
    }
}
