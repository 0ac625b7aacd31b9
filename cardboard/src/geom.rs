//! Screen-space geometry shared by hit-testing and drag rendering.
//!
//! All coordinates are CSS pixels relative to the document viewport, which is
//! what `getBoundingClientRect` reports on the host side.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in viewport space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`.
    #[must_use]
    pub fn distance_sq(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// Axis-aligned rectangle with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Center of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Whether `pt` lies inside the rectangle (edges inclusive).
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.x + self.width && pt.y >= self.y && pt.y <= self.y + self.height
    }
}

/// The visible window area a dragged card is confined to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether the viewport has been measured yet.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Clamp a drag `offset` so that `rect` moved by it stays inside the window.
    ///
    /// A rectangle larger than the viewport along an axis is pinned to the
    /// top/left edge on that axis. Unknown viewports leave the offset as is.
    #[must_use]
    pub fn clamp_offset(&self, rect: &Rect, offset: Point) -> Point {
        if !self.is_known() {
            return offset;
        }
        let min_dx = -rect.x;
        let max_dx = (self.width - rect.width - rect.x).max(min_dx);
        let min_dy = -rect.y;
        let max_dy = (self.height - rect.height - rect.y).max(min_dy);
        Point::new(offset.x.clamp(min_dx, max_dx), offset.y.clamp(min_dy, max_dy))
    }
}
