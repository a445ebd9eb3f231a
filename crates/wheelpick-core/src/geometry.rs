//! Plane geometry in logical pixels, y growing downward.

use serde::{Deserialize, Serialize};

/// A position in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset
    pub x: f32,
    /// Vertical offset, downward
    pub y: f32,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width and height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent
    pub width: f32,
    /// Vertical extent
    pub height: f32,
}

impl Size {
    /// Create a size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and extent.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Extent of the rectangle.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Midpoint of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width.mul_add(0.5, self.x), self.height.mul_add(0.5, self.y))
    }

    /// Hit test. Points on the edges are inside.
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        (self.x..=self.x + self.width).contains(&point.x)
            && (self.y..=self.y + self.height).contains(&point.y)
    }

    /// Shrink the left and right edges by `amount` each, keeping the center.
    ///
    /// The width bottoms out at zero.
    #[must_use]
    pub fn inset_horizontal(&self, amount: f32) -> Self {
        let width = (self.width - 2.0 * amount).max(0.0);
        Self::new(self.x + (self.width - width) / 2.0, self.y, width, self.height)
    }
}

/// Corner rounding shared by all four corners of a filled rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CornerRadius(pub f32);

impl CornerRadius {
    /// Same radius on every corner.
    #[must_use]
    pub const fn uniform(radius: f32) -> Self {
        Self(radius)
    }
}
