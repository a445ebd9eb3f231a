//! Distance-from-center to visual transform mapping.
//!
//! Items grow toward the center of the wheel and tilt away from the viewer
//! as they move off-center. Distances are expressed in units of one sixth of
//! the viewport height.

use wheelpick_core::{Point, Transform2D};

/// Scale at zero normalized distance before the linear falloff offset.
pub const MAX_SCALE: f32 = 1.2;

/// Rotation about the X axis, in degrees, per normalized distance unit.
pub const ROTATION_PER_UNIT: f32 = -20.0;

/// The viewport is treated as this many distance units tall.
pub const VIEWPORT_UNITS: f32 = 6.0;

/// Scale and X-axis rotation applied to one wheel item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemTransform {
    /// Uniform scale factor
    pub scale: f32,
    /// Rotation about the horizontal axis, in degrees
    pub rotation_x: f32,
    alpha: f32,
}

impl ItemTransform {
    /// Neutral transform used for degenerate geometry.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        rotation_x: 0.0,
        alpha: 1.0,
    };

    /// The `(scale, rotation_x)` pair.
    #[must_use]
    pub const fn pair(&self) -> (f32, f32) {
        (self.scale, self.rotation_x)
    }

    /// Distance-based opacity, `1.2 - n` clamped to [0, 1].
    ///
    /// Not applied unless the style enables fading.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.alpha.clamp(0.0, 1.0)
    }

    /// Project onto a 2D affine transform anchored at `anchor`.
    ///
    /// A rotation about the X axis viewed head-on foreshortens the vertical
    /// axis by `cos(rotation_x)`.
    #[must_use]
    pub fn to_affine(&self, anchor: Point) -> Transform2D {
        let fold = self.rotation_x.to_radians().cos().max(0.0);
        Transform2D::scale_about(anchor, self.scale, self.scale * fold)
    }
}

impl Default for ItemTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Map an item's distance from the viewport center to its transform.
///
/// Returns [`ItemTransform::IDENTITY`] when the viewport height is zero,
/// negative or not finite, or when the result would not be finite.
#[must_use]
pub fn transform(distance_from_center: f32, viewport_height: f32) -> ItemTransform {
    if !(viewport_height.is_finite() && viewport_height > 0.0) {
        return ItemTransform::IDENTITY;
    }

    let unit = viewport_height / VIEWPORT_UNITS;
    let normalized = distance_from_center.abs() / unit;
    let alpha = MAX_SCALE - normalized;
    let scale = (MAX_SCALE - 1.0).mul_add(-(1.0 - alpha), MAX_SCALE);
    let rotation_x = ROTATION_PER_UNIT * normalized;

    if !(scale.is_finite() && rotation_x.is_finite() && alpha.is_finite()) {
        return ItemTransform::IDENTITY;
    }

    ItemTransform {
        scale,
        rotation_x,
        alpha,
    }
}
