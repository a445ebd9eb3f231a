//! Core types and traits for the wheelpick widget library.
//!
//! - Geometry and layout: [`Point`], [`Size`], [`Rect`], [`Constraints`]
//! - Input: [`Event`], [`Key`], [`VelocityTracker`]
//! - Painting: [`Widget`], [`Canvas`], [`RecordingCanvas`], [`DrawCommand`],
//!   [`Transform2D`], [`Color`]
//! - Animation: [`Easing`], [`EasedValue`]

pub mod animation;
mod canvas;
mod color;
pub mod draw;
pub mod gesture;
mod geometry;
mod input;
mod layout;
pub mod widget;

pub use animation::{EasedValue, Easing};
pub use canvas::{Canvas, RecordingCanvas, TextRun};
pub use color::{Color, ColorParseError};
pub use draw::{DrawCommand, TextStyle, Transform2D};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use gesture::VelocityTracker;
pub use input::{Event, Key, MouseButton, TouchId};
pub use layout::{Constraints, LayoutResult};
pub use widget::{TypeId, Widget};
