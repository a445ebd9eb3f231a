//! Straight-alpha RGBA colours and their hex notation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Colour with channels in `0.0..=1.0`, alpha not premultiplied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Opacity
    pub a: f32,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::opaque(0.0, 0.0, 0.0);
    /// Opaque `#888888`, the default label colour of the wheel.
    pub const GRAY: Self = Self::opaque(0.533, 0.533, 0.533);

    const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Build a colour, clamping every channel into range.
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        let unit = |v: f32| v.clamp(0.0, 1.0);
        Self {
            r: unit(r),
            g: unit(g),
            b: unit(b),
            a: unit(a),
        }
    }

    /// Replace the alpha channel.
    #[must_use]
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Parse `rrggbb` or `rrggbbaa`, with or without a leading `#`.
    ///
    /// # Errors
    ///
    /// [`ColorParseError::InvalidLength`] for any other digit count and
    /// [`ColorParseError::InvalidHex`] for a non-hex digit.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !matches!(digits.len(), 6 | 8) {
            return Err(ColorParseError::InvalidLength);
        }
        if !digits.is_ascii() {
            return Err(ColorParseError::InvalidHex);
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[2 * i..2 * i + 2], 16)
                .map(|v| f32::from(v) / 255.0)
                .map_err(|_| ColorParseError::InvalidHex)
        };
        let alpha = if digits.len() == 8 { channel(3)? } else { 1.0 };
        Ok(Self::new(channel(0)?, channel(1)?, channel(2)?, alpha))
    }

    /// Format as `#rrggbbaa`.
    #[must_use]
    pub fn to_hex_with_alpha(&self) -> String {
        let byte = |v: f32| (v * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            byte(self.r),
            byte(self.g),
            byte(self.b),
            byte(self.a)
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Why a hex colour failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// A digit outside `0-9a-fA-F`
    #[error("hex colour contains a non-hex digit")]
    InvalidHex,
    /// Neither 6 nor 8 digits
    #[error("hex colour must have 6 or 8 digits")]
    InvalidLength,
}
