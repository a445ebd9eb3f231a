//! Wheel picker configuration.
//!
//! Every field has a default, so an empty TOML document is a valid config.
//! Colors are written as hex strings (`"#rrggbb"` or `"#rrggbbaa"`).

use crate::snap::SnapConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use wheelpick_core::{Color, Easing};

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed to load
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
    /// The TOML was malformed or had wrongly-typed fields.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    /// The config could not be written as TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// A field parsed but is out of its allowed range.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue {
        /// Dotted field path
        field: &'static str,
        /// What was wrong with it
        reason: String,
    },
}

/// Top-level configuration for a [`WheelPicker`](crate::WheelPicker).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WheelPickerConfig {
    /// Height of one item row in pixels
    pub item_height: f32,
    /// Rows visible at once; the preferred height is `item_height * visible_items`
    pub visible_items: usize,
    /// Animation timings
    pub animation: AnimationConfig,
    /// Drag and fling tuning
    pub gesture: GestureConfig,
    /// Colors and metrics
    pub style: StyleConfig,
}

impl Default for WheelPickerConfig {
    fn default() -> Self {
        Self {
            item_height: 40.0,
            visible_items: 9,
            animation: AnimationConfig::default(),
            gesture: GestureConfig::default(),
            style: StyleConfig::default(),
        }
    }
}

/// Timings for programmatic seeks, snaps and the settle guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Duration of an animated scroll to a host-supplied value
    pub seek_duration_ms: u64,
    /// Duration of a snap to the nearest item without a fling
    pub snap_duration_ms: u64,
    /// Upper bound for a fling's settle animation
    pub max_fling_duration_ms: u64,
    /// Quiescence window after a seek finishes during which settles are not
    /// reported
    pub settle_guard_ms: u64,
    /// Curve used by all scroll animations
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            seek_duration_ms: 300,
            snap_duration_ms: 180,
            max_fling_duration_ms: 600,
            settle_guard_ms: 500,
            easing: Easing::CubicOut,
        }
    }
}

/// Drag and fling tuning, in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GestureConfig {
    /// Pointer travel before a press becomes a drag
    pub drag_slop: f32,
    /// Fling deceleration in px/s²
    pub fling_deceleration: f32,
    /// Release velocities below this (px/s) snap without flinging
    pub fling_velocity_threshold: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_slop: 10.0,
            fling_deceleration: 2400.0,
            fling_velocity_threshold: 60.0,
        }
    }
}

/// Visual style of labels and the highlight band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Label color
    #[serde(with = "hex_color")]
    pub text_color: Color,
    /// Label font size
    pub font_size: f32,
    /// Fill of the center highlight band
    #[serde(with = "hex_color")]
    pub highlight_color: Color,
    /// Corner radius of the highlight band
    pub highlight_radius: f32,
    /// Horizontal inset of the band from the widget edges
    pub highlight_inset: f32,
    /// Horizontal padding around the whole wheel
    pub horizontal_padding: f32,
    /// Fade labels with distance from center
    pub fade_with_distance: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            text_color: Color::GRAY,
            font_size: 16.0,
            highlight_color: Color::GRAY.with_alpha(0.1),
            highlight_radius: 8.0,
            highlight_inset: 8.0,
            horizontal_padding: 4.0,
            fade_with_distance: false,
        }
    }
}

impl WheelPickerConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded wheel picker config");
        Ok(config)
    }

    /// Serialize back to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if the TOML serializer rejects the
    /// document.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("item_height", self.item_height)?;
        positive("style.font_size", self.style.font_size)?;
        positive("gesture.fling_deceleration", self.gesture.fling_deceleration)?;
        non_negative("gesture.drag_slop", self.gesture.drag_slop)?;
        non_negative(
            "gesture.fling_velocity_threshold",
            self.gesture.fling_velocity_threshold,
        )?;
        non_negative("style.highlight_radius", self.style.highlight_radius)?;
        non_negative("style.highlight_inset", self.style.highlight_inset)?;
        non_negative("style.horizontal_padding", self.style.horizontal_padding)?;
        if self.visible_items == 0 {
            return Err(ConfigError::InvalidValue {
                field: "visible_items",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Preferred viewport height.
    #[must_use]
    pub fn viewport_height(&self) -> f32 {
        self.item_height * self.visible_items as f32
    }

    /// Scroll/snap parameters derived from this config.
    #[must_use]
    pub fn snap(&self) -> SnapConfig {
        SnapConfig {
            item_height: self.item_height,
            seek_duration: Duration::from_millis(self.animation.seek_duration_ms),
            snap_duration: Duration::from_millis(self.animation.snap_duration_ms),
            max_fling_duration: Duration::from_millis(self.animation.max_fling_duration_ms),
            settle_guard: Duration::from_millis(self.animation.settle_guard_ms),
            easing: self.animation.easing,
            fling_deceleration: self.gesture.fling_deceleration,
            fling_velocity_threshold: self.gesture.fling_velocity_threshold,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("expected a positive number, got {value}"),
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("expected a non-negative number, got {value}"),
        })
    }
}

mod hex_color {
    use serde::{Deserialize, Deserializer, Serializer};
    use wheelpick_core::Color;

    pub(super) fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&color.to_hex_with_alpha())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::from_hex(&raw).map_err(|e| serde::de::Error::custom(format!("{raw:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = WheelPickerConfig::from_toml_str("").unwrap();
        assert_eq!(config, WheelPickerConfig::default());
        assert_eq!(config.viewport_height(), 360.0);
    }

    #[test]
    fn test_partial_document_overrides() {
        let config = WheelPickerConfig::from_toml_str(
            r##"
            item_height = 32.0
            visible_items = 7

            [animation]
            settle_guard_ms = 250
            easing = "ease_in_out"

            [style]
            highlight_color = "#ff000040"
            "##,
        )
        .unwrap();
        assert_eq!(config.item_height, 32.0);
        assert_eq!(config.viewport_height(), 224.0);
        assert_eq!(config.animation.settle_guard_ms, 250);
        assert_eq!(config.animation.seek_duration_ms, 300);
        assert_eq!(config.animation.easing, Easing::EaseInOut);
        assert_eq!(config.style.highlight_color.r, 1.0);
        assert!((config.style.highlight_color.a - 0.251).abs() < 0.01);
    }

    #[test]
    fn test_snap_config_durations() {
        let snap = WheelPickerConfig::default().snap();
        assert_eq!(snap.settle_guard, Duration::from_millis(500));
        assert_eq!(snap.seek_duration, Duration::from_millis(300));
        assert_eq!(snap.item_height, 40.0);
    }

    #[test]
    fn test_bad_color_is_parse_error() {
        let err = WheelPickerConfig::from_toml_str("[style]\ntext_color = \"#12\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("hex colour must have 6 or 8 digits"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = WheelPickerConfig::from_toml_str("item_hieght = 3.0").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_out_of_range_values() {
        let err = WheelPickerConfig::from_toml_str("item_height = 0.0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "item_height",
                ..
            }
        ));

        let err = WheelPickerConfig::from_toml_str("visible_items = 0").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for `visible_items`: must be at least 1"
        );

        let err = WheelPickerConfig::from_toml_str("[gesture]\ndrag_slop = -1.0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "gesture.drag_slop",
                ..
            }
        ));
    }

    #[test]
    fn test_toml_roundtrip_preserves_config() {
        let mut config = WheelPickerConfig::default();
        config.style.fade_with_distance = true;
        config.animation.easing = Easing::Linear;
        let text = config.to_toml_string().unwrap();
        let back = WheelPickerConfig::from_toml_str(&text).unwrap();
        assert!(back.style.fade_with_distance);
        assert_eq!(back.animation, config.animation);
        assert_eq!(back.style.highlight_color.to_hex_with_alpha(), "#8888881a");
    }

    #[test]
    fn test_serialize_errors_are_reported() {
        let inner = <toml::ser::Error as serde::ser::Error>::custom("unsupported value");
        let err = ConfigError::from(inner);
        assert!(matches!(err, ConfigError::Serialize(_)));
        assert_eq!(
            err.to_string(),
            "failed to serialize config: unsupported value"
        );
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = WheelPickerConfig::load("/nonexistent/wheelpick.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/wheelpick.toml"));
    }

    #[test]
    fn test_load_reads_file() {
        let dir = std::env::temp_dir().join(format!("wheelpick-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("picker.toml");
        std::fs::write(&path, "visible_items = 5\n").unwrap();

        let config = WheelPickerConfig::load(&path).unwrap();
        assert_eq!(config.visible_items, 5);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
