//! Paint output: affine transforms, text styles and the draw command tree.

use crate::geometry::{CornerRadius, Point, Rect, Size};
use crate::Color;
use serde::{Deserialize, Serialize};

/// Affine map `p' = (sx·x + kx·y + tx, ky·x + sy·y + ty)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// x scale
    pub sx: f32,
    /// y contribution to x
    pub kx: f32,
    /// x contribution to y
    pub ky: f32,
    /// y scale
    pub sy: f32,
    /// x offset
    pub tx: f32,
    /// y offset
    pub ty: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    /// Leaves every point where it is.
    pub const IDENTITY: Self = Self::scale(1.0, 1.0);

    /// Shift by `(x, y)`.
    #[must_use]
    pub const fn translate(x: f32, y: f32) -> Self {
        Self {
            tx: x,
            ty: y,
            ..Self::IDENTITY
        }
    }

    /// Scale about the origin.
    #[must_use]
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self {
            sx,
            kx: 0.0,
            ky: 0.0,
            sy,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Scale about `anchor`, which stays fixed.
    #[must_use]
    pub fn scale_about(anchor: Point, sx: f32, sy: f32) -> Self {
        Self {
            tx: sx.mul_add(-anchor.x, anchor.x),
            ty: sy.mul_add(-anchor.y, anchor.y),
            ..Self::scale(sx, sy)
        }
    }

    /// `self` followed by `outer`: `a.then(&b).apply(p) == b.apply(a.apply(p))`.
    #[must_use]
    pub fn then(&self, outer: &Self) -> Self {
        let o = outer;
        let offset = o.apply(Point::new(self.tx, self.ty));
        Self {
            sx: o.sx.mul_add(self.sx, o.kx * self.ky),
            kx: o.sx.mul_add(self.kx, o.kx * self.sy),
            ky: o.ky.mul_add(self.sx, o.sy * self.ky),
            sy: o.ky.mul_add(self.kx, o.sy * self.sy),
            tx: offset.x,
            ty: offset.y,
        }
    }

    /// Map a point.
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.sx.mul_add(p.x, self.kx.mul_add(p.y, self.tx)),
            self.ky.mul_add(p.x, self.sy.mul_add(p.y, self.ty)),
        )
    }

    /// Lengths of the mapped unit axes: how much x and y are stretched.
    #[must_use]
    pub fn scale_factors(&self) -> (f32, f32) {
        (self.sx.hypot(self.ky), self.kx.hypot(self.sy))
    }
}

/// How a label is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Fill colour, alpha included
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: Color::BLACK,
        }
    }
}

impl TextStyle {
    /// Rough extent of `text` on one line: 0.6em per char, 1.2em line height.
    ///
    /// ```
    /// use wheelpick_core::TextStyle;
    ///
    /// let style = TextStyle { size: 10.0, ..TextStyle::default() };
    /// let size = style.estimate_size("2024");
    /// assert!((size.width - 24.0).abs() < 1e-4);
    /// ```
    #[must_use]
    pub fn estimate_size(&self, text: &str) -> Size {
        let chars = text.chars().count() as f32;
        Size::new(chars * self.size * 0.6, self.size * 1.2)
    }
}

/// One node of recorded paint output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Filled, optionally rounded rectangle
    Rect {
        /// Area to fill
        bounds: Rect,
        /// Corner rounding
        radius: CornerRadius,
        /// Fill colour
        color: Color,
    },
    /// A line of text
    Text {
        /// Label
        content: String,
        /// Top-left of the text box before any transform
        position: Point,
        /// Size and colour
        style: TextStyle,
    },
    /// Children drawn through `transform`
    Group {
        /// Nested commands
        children: Vec<DrawCommand>,
        /// Applied to every child
        transform: Transform2D,
    },
    /// Children clipped to `bounds`
    Clip {
        /// Visible area
        bounds: Rect,
        /// Nested commands
        children: Vec<DrawCommand>,
    },
}
