//! Size negotiation between a host and its widgets.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Smallest and largest size a widget may take.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Lower bound
    pub min: Size,
    /// Upper bound, possibly infinite
    pub max: Size,
}

impl Constraints {
    /// Exactly `size`.
    #[must_use]
    pub const fn tight(size: Size) -> Self {
        Self {
            min: size,
            max: size,
        }
    }

    /// Anything from zero to infinity.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            min: Size::new(0.0, 0.0),
            max: Size::new(f32::INFINITY, f32::INFINITY),
        }
    }

    /// Fit a preferred size into the bounds.
    #[must_use]
    pub fn constrain(&self, preferred: Size) -> Size {
        Size::new(
            preferred.width.max(self.min.width).min(self.max.width),
            preferred.height.max(self.min.height).min(self.max.height),
        )
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Outcome of [`Widget::layout`](crate::Widget::layout).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutResult {
    /// Size the widget occupies
    pub size: Size,
}
