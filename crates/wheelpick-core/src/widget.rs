//! The widget contract.
//!
//! A host drives each widget through measure, layout and paint, feeds it
//! input through [`Widget::event`] and advances its animations once per frame
//! through [`Widget::tick`]. Either of the last two may hand a message back.
//!
//! ```
//! use wheelpick_core::TypeId;
//!
//! assert_eq!(TypeId::of::<u8>(), TypeId::of::<u8>());
//! assert_ne!(TypeId::of::<u8>(), TypeId::of::<u16>());
//! ```

use crate::canvas::Canvas;
use crate::input::Event;
use crate::layout::{Constraints, LayoutResult};
use crate::{Rect, Size};
use std::any::Any;
use std::time::Duration;

/// Identifies the concrete type behind a `dyn Widget`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Identifier of `T`.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// A UI element a host can size, place, paint and feed with input.
pub trait Widget: Send + Sync {
    /// Concrete widget type.
    fn type_id(&self) -> TypeId;

    /// Preferred size within `constraints`.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Accept the bounds the host assigned.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Paint into `canvas` at the laid-out bounds.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// React to input.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Advance time by `dt`.
    fn tick(&mut self, _dt: Duration) -> Option<Box<dyn Any + Send>> {
        None
    }

    /// Whether the widget handles pointer input.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Whether the widget takes keyboard focus.
    fn is_focusable(&self) -> bool {
        false
    }

    /// Identifier for locating the widget in tests.
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Bounds from the last layout.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}
