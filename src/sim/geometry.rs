//! Planar geometry helpers for rectangle edge classification
//!
//! Screen coordinates: +X right, +Y down.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Which side of a directed line a point falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Positive cross product
    Left,
    /// Negative or zero cross product (points on the line land here)
    Right,
}

/// Classify `c` against the directed segment `a -> b`.
///
/// Uses the sign of the 2D cross product `(b - a) × (c - a)`. A point exactly
/// on the line reports [`Side::Right`].
#[inline]
pub fn side_of_line(a: DVec2, b: DVec2, c: DVec2) -> Side {
    if (b - a).perp_dot(c - a) > 0.0 {
        Side::Left
    } else {
        Side::Right
    }
}

/// Axis-aligned rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(position: DVec2, width: f64, height: f64) -> Self {
        Self {
            left: position.x,
            top: position.y,
            right: position.x + width,
            bottom: position.y + height,
        }
    }

    /// Grow every side outward by `amount` (Minkowski sum with a circle's bounding box)
    #[inline]
    pub fn expand(&self, amount: f64) -> Self {
        Self {
            left: self.left - amount,
            top: self.top - amount,
            right: self.right + amount,
            bottom: self.bottom + amount,
        }
    }

    /// Strict interior test (points on the border are outside)
    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        self.spans_x(p.x) && self.spans_y(p.y)
    }

    /// `x` lies strictly between left and right
    #[inline]
    pub fn spans_x(&self, x: f64) -> bool {
        self.left < x && x < self.right
    }

    /// `y` lies strictly between top and bottom
    #[inline]
    pub fn spans_y(&self, y: f64) -> bool {
        self.top < y && y < self.bottom
    }

    /// `x` sits exactly on the left or right edge
    #[inline]
    pub fn on_vertical_edge(&self, x: f64) -> bool {
        x == self.left || x == self.right
    }

    /// `y` sits exactly on the top or bottom edge
    #[inline]
    pub fn on_horizontal_edge(&self, y: f64) -> bool {
        y == self.top || y == self.bottom
    }

    pub fn top_left(&self) -> DVec2 {
        DVec2::new(self.left, self.top)
    }

    pub fn top_right(&self) -> DVec2 {
        DVec2::new(self.right, self.top)
    }

    pub fn bottom_right(&self) -> DVec2 {
        DVec2::new(self.right, self.bottom)
    }

    pub fn bottom_left(&self) -> DVec2 {
        DVec2::new(self.left, self.bottom)
    }
}
