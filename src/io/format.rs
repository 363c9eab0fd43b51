// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Canonical text form of shapes

use crate::shape::Shape;

/// Render a shape in the description format its parser accepts
pub fn to_canonical_string(shape: &Shape) -> String {
    match shape {
        Shape::Square(s) => format!(
            "Square TopRight {} {} Side {}",
            s.top_right_x, s.top_right_y, s.side
        ),
        Shape::Rectangle(r) => format!(
            "Rectangle TopRight {} {} BottomLeft {} {}",
            r.top_right_x, r.top_right_y, r.bottom_left_x, r.bottom_left_y
        ),
        Shape::Circle(c) => format!(
            "Circle Center {} {} Radius {}",
            c.center_x, c.center_y, c.radius
        ),
    }
}
