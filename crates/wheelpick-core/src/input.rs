//! Pointer, wheel, keyboard and touch input delivered by the host.
//!
//! Positions are in the same coordinate space as the widget's layout bounds.
//! Events serialize with a `type` tag so hosts can replay recorded sessions.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// One input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Pointer moved, pressed or not
    MouseMove {
        /// Pointer position
        position: Point,
    },
    /// Button pressed
    MouseDown {
        /// Pointer position
        position: Point,
        /// Which button
        button: MouseButton,
    },
    /// Button released
    MouseUp {
        /// Pointer position
        position: Point,
        /// Which button
        button: MouseButton,
    },
    /// Wheel notch or trackpad scroll, positive `delta_y` when rolled up
    Scroll {
        /// Horizontal delta
        delta_x: f32,
        /// Vertical delta
        delta_y: f32,
    },
    /// Key pressed
    KeyDown {
        /// Which key
        key: Key,
    },
    /// Keyboard focus left the widget; any press in progress is abandoned
    FocusOut,
    /// Finger down
    TouchStart {
        /// Finger identity for the lifetime of the touch
        id: TouchId,
        /// Contact position
        position: Point,
    },
    /// Finger moved
    TouchMove {
        /// Finger identity
        id: TouchId,
        /// Contact position
        position: Point,
    },
    /// Finger lifted
    TouchEnd {
        /// Finger identity
        id: TouchId,
        /// Last contact position
        position: Point,
    },
    /// The platform took the touch away
    TouchCancel {
        /// Finger identity
        id: TouchId,
    },
}

/// Identity of one finger from touch start to end or cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TouchId(pub u32);

impl TouchId {
    /// Wrap a platform touch identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary button
    Left,
    /// Secondary button
    Right,
}

/// Navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Page up
    PageUp,
    /// Page down
    PageDown,
    /// Home
    Home,
    /// End
    End,
}
