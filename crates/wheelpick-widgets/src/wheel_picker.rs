//! Wheel picker widget.

use crate::config::WheelPickerConfig;
use crate::sequence::Sequence;
use crate::snap::{ScrollState, SnapController, WheelSelectionChanged};
use crate::transform::{self, ItemTransform, MAX_SCALE};
use std::any::Any;
use std::fmt;
use std::ops::Range;
use std::time::Duration;
use tracing::{debug, trace, warn};
use wheelpick_core::{
    Canvas, CornerRadius, Constraints, Event, Key, LayoutResult, MouseButton, Point,
    Rect, Size, TextStyle, TouchId, TypeId, Widget,
};

/// Host callback receiving the selected index.
pub type SelectionCallback = Box<dyn FnMut(usize) + Send + Sync>;

/// Narrowest preferred width.
const MIN_WIDTH: f32 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PointerSource {
    Mouse,
    Touch(TouchId),
}

#[derive(Debug, Clone, Copy)]
struct Press {
    source: PointerSource,
    origin_y: f32,
    dragging: bool,
}

/// A vertically scrolling wheel of labels that snaps to the centered item.
///
/// Items near the center are drawn larger and items farther away tilt back.
/// The selection callback fires only when a user-driven scroll settles;
/// host-driven changes to the current index scroll silently.
///
/// # Examples
///
/// ```
/// use wheelpick_widgets::WheelPicker;
///
/// let picker = WheelPicker::new((1..=12).map(|m| m.to_string()))
///     .current(Some(3))
///     .on_selection_changed(|index| println!("picked {index}"));
/// assert_eq!(picker.item_count(), 12);
/// ```
pub struct WheelPicker {
    sequence: Sequence,
    controller: SnapController,
    config: WheelPickerConfig,
    current: usize,
    on_selection_changed: Option<SelectionCallback>,
    test_id_value: Option<String>,
    bounds: Rect,
    press: Option<Press>,
}

impl fmt::Debug for WheelPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WheelPicker")
            .field("items", &self.sequence.real_len())
            .field("current", &self.current)
            .field("position", &self.controller.position())
            .field("phase", &self.controller.phase().name())
            .field("test_id", &self.test_id_value)
            .finish_non_exhaustive()
    }
}

impl WheelPicker {
    /// Create a picker over `items`, scrolling to the first item.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        let config = WheelPickerConfig::default();
        let sequence = Sequence::from_items(&items);
        let mut picker = Self {
            controller: Self::mount(&config, &sequence, 0),
            sequence,
            config,
            current: 0,
            on_selection_changed: None,
            test_id_value: None,
            bounds: Rect::default(),
            press: None,
        };
        picker.bounds = Rect::new(0.0, 0.0, 0.0, picker.config.viewport_height());
        picker
    }

    /// Set the initially selected index. `None` selects the first item.
    #[must_use]
    pub fn current(mut self, initial: Option<usize>) -> Self {
        self.current = initial.unwrap_or(0);
        self.controller.seek_to(self.current);
        self
    }

    /// Set the callback invoked when the user settles on an item.
    #[must_use]
    pub fn on_selection_changed(
        mut self,
        callback: impl FnMut(usize) + Send + Sync + 'static,
    ) -> Self {
        self.on_selection_changed = Some(Box::new(callback));
        self
    }

    /// Replace the configuration. Restarts the scroll to the current index.
    ///
    /// A configuration that fails [`WheelPickerConfig::validate`] is logged
    /// and replaced by the defaults.
    #[must_use]
    pub fn with_config(mut self, config: WheelPickerConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(error) => {
                warn!(%error, "invalid wheel picker config, using defaults");
                WheelPickerConfig::default()
            }
        };
        self.controller = Self::mount(&config, &self.sequence, self.current);
        self.bounds.height = config.viewport_height();
        self.config = config;
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    fn mount(config: &WheelPickerConfig, sequence: &Sequence, current: usize) -> SnapController {
        let mut controller = SnapController::new(config.snap(), sequence.real_len());
        controller.set_viewport_height(config.viewport_height());
        controller.seek_to(current);
        controller
    }

    /// Replace the items. A list with the same content is ignored.
    pub fn set_items<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        if self.sequence.matches(&items) {
            trace!("items unchanged");
            return;
        }
        let was_empty = !self.sequence.has_selectable();
        self.sequence = Sequence::from_items(&items);
        debug!(items = items.len(), "sequence rebuilt");
        self.controller.set_item_count(items.len());
        if was_empty && self.sequence.has_selectable() {
            debug!(current = self.current, "items arrived, restoring current index");
            self.controller.seek_to(self.current);
        }
    }

    /// Update the host's current index. Only a changed value scrolls.
    pub fn set_current(&mut self, current: Option<usize>) {
        let current = current.unwrap_or(0);
        if current == self.current {
            return;
        }
        debug!(from = self.current, to = current, "current index changed");
        self.current = current;
        self.controller.seek_to(current);
    }

    /// Host-supplied current index.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Number of caller items.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.sequence.real_len()
    }

    /// Index nearest the viewport center.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.controller.selected_index()
    }

    /// Padded sequence being displayed.
    #[must_use]
    pub const fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Scroll state machine.
    #[must_use]
    pub const fn controller(&self) -> &SnapController {
        &self.controller
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &WheelPickerConfig {
        &self.config
    }

    /// Derived scroll telemetry.
    #[must_use]
    pub fn scroll_state(&self) -> ScrollState {
        self.controller.scroll_state()
    }

    /// Sequence indices at least partly inside the viewport.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        let h = self.config.item_height;
        let start = self.scroll_state().first_visible_sequence_index;
        let end = (self.controller.position() + 0.5 + self.bounds.height / (2.0 * h))
            .ceil()
            .max(0.0) as usize;
        start.min(self.sequence.len())..end.min(self.sequence.len())
    }

    /// Transform of every visible item, keyed by sequence index.
    #[must_use]
    pub fn visible_transforms(&self) -> Vec<(usize, ItemTransform)> {
        self.visible_range()
            .map(|i| {
                let d = self.controller.distance_from_center(i);
                (i, transform::transform(d, self.bounds.height))
            })
            .collect()
    }

    fn emit(&mut self, change: Option<WheelSelectionChanged>) -> Option<Box<dyn Any + Send>> {
        let change = change?;
        if let Some(callback) = self.on_selection_changed.as_mut() {
            callback(change.index);
        }
        Some(Box::new(change))
    }

    fn press_at(&mut self, source: PointerSource, position: Point) {
        if self.bounds.contains_point(&position) {
            self.press = Some(Press {
                source,
                origin_y: position.y,
                dragging: false,
            });
        }
    }

    fn pointer_moved(&mut self, source: PointerSource, y: f32) {
        let slop = self.config.gesture.drag_slop;
        let Some(press) = self.press.as_mut().filter(|p| p.source == source) else {
            return;
        };
        if press.dragging {
            self.controller.drag_to(y);
        } else if (y - press.origin_y).abs() >= slop {
            press.dragging = true;
            self.controller.begin_drag(y);
        }
    }

    fn pointer_released(&mut self, source: PointerSource) -> Option<Box<dyn Any + Send>> {
        let press = self.press.filter(|p| p.source == source)?;
        self.press = None;
        if press.dragging {
            let change = self.controller.release();
            self.emit(change)
        } else {
            None
        }
    }

    fn pointer_cancelled(&mut self) -> Option<Box<dyn Any + Send>> {
        let press = self.press.take()?;
        if press.dragging {
            let change = self.controller.cancel_drag();
            self.emit(change)
        } else {
            None
        }
    }

    fn key_step(&self, key: Key) -> i64 {
        let page = self.config.visible_items.saturating_sub(1).max(1) as i64;
        let all = self.sequence.real_len() as i64;
        match key {
            Key::Up => -1,
            Key::Down => 1,
            Key::PageUp => -page,
            Key::PageDown => page,
            Key::Home => -all,
            Key::End => all,
        }
    }

    fn text_style(&self, item: &ItemTransform) -> TextStyle {
        let style = &self.config.style;
        let color = if style.fade_with_distance {
            style.text_color.with_alpha(style.text_color.a * item.alpha())
        } else {
            style.text_color
        };
        TextStyle {
            size: style.font_size,
            color,
        }
    }

    fn highlight_band(&self) -> Rect {
        let h = self.config.item_height;
        let style = &self.config.style;
        let center_y = self.bounds.center().y;
        Rect::new(self.bounds.x, center_y - h / 2.0, self.bounds.width, h)
            .inset_horizontal(style.horizontal_padding + style.highlight_inset)
    }
}

impl Widget for WheelPicker {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let style = TextStyle {
            size: self.config.style.font_size,
            ..TextStyle::default()
        };
        let widest = self
            .sequence
            .labels()
            .iter()
            .map(|label| style.estimate_size(label).width)
            .fold(0.0, f32::max);
        let chrome = 2.0 * (self.config.style.horizontal_padding + self.config.style.highlight_inset);
        let width = widest.mul_add(MAX_SCALE, chrome).max(MIN_WIDTH);
        constraints.constrain(Size::new(width, self.config.viewport_height()))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        self.controller.set_viewport_height(bounds.height);
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.push_clip(self.bounds);

        let content = self
            .bounds
            .inset_horizontal(self.config.style.horizontal_padding);
        let center = self.bounds.center();
        for (index, item) in self.visible_transforms() {
            let Some(label) = self.sequence.get(index).filter(|l| !l.is_empty()) else {
                continue;
            };
            let anchor = Point::new(
                content.center().x,
                center.y + self.controller.distance_from_center(index),
            );
            let style = self.text_style(&item);
            let size = style.estimate_size(label);
            let origin = Point::new(anchor.x - size.width / 2.0, anchor.y - size.height / 2.0);

            canvas.push_transform(item.to_affine(anchor));
            canvas.draw_text(label, origin, &style);
            canvas.pop_transform();
        }

        let style = &self.config.style;
        canvas.fill_rounded_rect(
            self.highlight_band(),
            CornerRadius::uniform(style.highlight_radius),
            style.highlight_color,
        );

        canvas.pop_clip();
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => self.press_at(PointerSource::Mouse, *position),
            Event::MouseMove { position } => self.pointer_moved(PointerSource::Mouse, position.y),
            Event::MouseUp {
                button: MouseButton::Left,
                ..
            } => return self.pointer_released(PointerSource::Mouse),
            Event::TouchStart { id, position } => {
                if self.press.is_none() {
                    self.press_at(PointerSource::Touch(*id), *position);
                }
            }
            Event::TouchMove { id, position } => {
                self.pointer_moved(PointerSource::Touch(*id), position.y);
            }
            Event::TouchEnd { id, position } => {
                self.pointer_moved(PointerSource::Touch(*id), position.y);
                return self.pointer_released(PointerSource::Touch(*id));
            }
            Event::TouchCancel { id } => {
                if self.press.is_some_and(|p| p.source == PointerSource::Touch(*id)) {
                    return self.pointer_cancelled();
                }
            }
            Event::FocusOut => return self.pointer_cancelled(),
            Event::Scroll { delta_y, .. } => {
                if *delta_y != 0.0 {
                    // Wheel up brings earlier items into the center.
                    let step = if *delta_y > 0.0 { -1 } else { 1 };
                    self.controller.step_by(step);
                }
            }
            Event::KeyDown { key } => {
                let step = self.key_step(*key);
                self.controller.step_by(step);
            }
            _ => {}
        }
        None
    }

    fn tick(&mut self, dt: Duration) -> Option<Box<dyn Any + Send>> {
        let change = self.controller.tick(dt);
        self.emit(change)
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn is_focusable(&self) -> bool {
        true
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snap::SnapPhase;
    use std::sync::{Arc, Mutex};
    use wheelpick_core::{Color, DrawCommand, RecordingCanvas};

    const FRAME: Duration = Duration::from_millis(16);

    fn numbers(n: usize) -> Vec<String> {
        (1..=n).map(|i| i.to_string()).collect()
    }

    fn recorder() -> (Arc<Mutex<Vec<usize>>>, impl FnMut(usize) + Send + Sync + 'static) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        (log, move |i| sink.lock().unwrap().push(i))
    }

    fn laid_out(mut picker: WheelPicker) -> WheelPicker {
        picker.layout(Rect::new(0.0, 0.0, 200.0, 360.0));
        picker
    }

    fn run(picker: &mut WheelPicker, total: Duration) -> Vec<usize> {
        let mut out = Vec::new();
        let mut left = total;
        while !left.is_zero() {
            let dt = left.min(FRAME);
            left -= dt;
            if let Some(msg) = picker.tick(dt) {
                out.push(msg.downcast_ref::<WheelSelectionChanged>().unwrap().index);
            }
        }
        out
    }

    fn mouse_down(y: f32) -> Event {
        Event::MouseDown {
            position: Point::new(100.0, y),
            button: MouseButton::Left,
        }
    }

    fn mouse_move(y: f32) -> Event {
        Event::MouseMove {
            position: Point::new(100.0, y),
        }
    }

    fn mouse_up(y: f32) -> Event {
        Event::MouseUp {
            position: Point::new(100.0, y),
            button: MouseButton::Left,
        }
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[test]
    fn test_new_defaults_to_first_item() {
        let picker = WheelPicker::new(numbers(5));
        assert_eq!(picker.item_count(), 5);
        assert_eq!(picker.current_index(), 0);
        assert_eq!(picker.selected_index(), Some(0));
        assert_eq!(picker.sequence().len(), 13);
    }

    #[test]
    fn test_current_none_is_zero() {
        let picker = WheelPicker::new(numbers(5)).current(None);
        assert_eq!(picker.current_index(), 0);
    }

    #[test]
    fn test_mount_never_invokes_callback() {
        let (log, callback) = recorder();
        let mut picker = laid_out(
            WheelPicker::new(numbers(40))
                .current(Some(5))
                .on_selection_changed(callback),
        );
        assert!(run(&mut picker, Duration::from_secs(2)).is_empty());
        assert!(log.lock().unwrap().is_empty());
        assert_eq!(picker.selected_index(), Some(5));
        assert!(matches!(picker.controller().phase(), SnapPhase::Idle));
    }

    #[test]
    fn test_with_config_remounts() {
        let mut config = WheelPickerConfig::default();
        config.item_height = 30.0;
        config.visible_items = 5;
        let mut picker = WheelPicker::new(numbers(10))
            .current(Some(3))
            .with_config(config);
        assert_eq!(picker.bounds().height, 150.0);
        run(&mut picker, Duration::from_secs(1));
        assert_eq!(picker.selected_index(), Some(3));
        assert_eq!(picker.controller().config().item_height, 30.0);
    }

    #[test]
    fn test_with_config_falls_back_on_invalid_config() {
        let mut config = WheelPickerConfig::default();
        config.item_height = 0.0;
        let mut picker = laid_out(
            WheelPicker::new(numbers(10))
                .current(Some(3))
                .with_config(config),
        );
        assert_eq!(picker.config(), &WheelPickerConfig::default());
        assert_eq!(picker.controller().config().item_height, 40.0);
        run(&mut picker, Duration::from_secs(1));
        assert_eq!(picker.selected_index(), Some(3));
        assert!(!picker.visible_range().is_empty());
    }

    #[test]
    fn test_current_beyond_end_lands_on_last_item() {
        let (log, callback) = recorder();
        let mut picker = laid_out(
            WheelPicker::new(numbers(40))
                .current(Some(usize::MAX))
                .on_selection_changed(callback),
        );
        assert!(run(&mut picker, Duration::from_secs(2)).is_empty());
        assert_eq!(picker.selected_index(), Some(39));
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_widget_flags() {
        let picker = WheelPicker::new(numbers(3)).with_test_id("month");
        assert!(picker.is_interactive());
        assert!(picker.is_focusable());
        assert_eq!(Widget::test_id(&picker), Some("month"));
        assert_eq!(Widget::type_id(&picker), TypeId::of::<WheelPicker>());
    }

    #[test]
    fn test_debug_hides_callback() {
        let picker = WheelPicker::new(numbers(3)).on_selection_changed(|_| {});
        let text = format!("{picker:?}");
        assert!(text.contains("WheelPicker"));
        assert!(text.contains("items: 3"));
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    #[test]
    fn test_mouse_drag_settles_and_reports() {
        let (log, callback) = recorder();
        let mut picker = laid_out(
            WheelPicker::new(numbers(40))
                .current(Some(5))
                .on_selection_changed(callback),
        );
        run(&mut picker, Duration::from_secs(1));

        assert!(picker.event(&mouse_down(180.0)).is_none());
        assert!(picker.event(&mouse_move(175.0)).is_none());
        assert!(!picker.scroll_state().is_user_dragging);
        picker.event(&mouse_move(160.0));
        assert!(picker.scroll_state().is_user_dragging);
        picker.event(&mouse_move(-40.0));
        assert_eq!(picker.controller().position(), 14.0);

        let msg = picker.event(&mouse_up(-40.0)).unwrap();
        assert_eq!(
            msg.downcast_ref::<WheelSelectionChanged>(),
            Some(&WheelSelectionChanged { index: 10 })
        );
        assert_eq!(*log.lock().unwrap(), vec![10]);
        assert!(run(&mut picker, Duration::from_secs(1)).is_empty());
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_click_without_drag_does_nothing() {
        let mut picker = laid_out(WheelPicker::new(numbers(10)));
        run(&mut picker, Duration::from_secs(1));
        picker.event(&mouse_down(200.0));
        picker.event(&mouse_move(205.0));
        assert!(picker.event(&mouse_up(205.0)).is_none());
        assert!(run(&mut picker, Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_press_outside_bounds_is_ignored() {
        let mut picker = laid_out(WheelPicker::new(numbers(10)));
        picker.event(&mouse_down(500.0));
        picker.event(&mouse_move(300.0));
        assert!(!picker.scroll_state().is_user_dragging);
    }

    #[test]
    fn test_touch_drag_follows_one_finger() {
        let mut picker = laid_out(WheelPicker::new(numbers(20)));
        run(&mut picker, Duration::from_secs(1));
        let finger = TouchId::new(1);
        let other = TouchId::new(2);
        picker.event(&Event::TouchStart {
            id: finger,
            position: Point::new(50.0, 200.0),
        });
        picker.event(&Event::TouchStart {
            id: other,
            position: Point::new(60.0, 100.0),
        });
        picker.event(&Event::TouchMove {
            id: other,
            position: Point::new(60.0, 0.0),
        });
        assert!(!picker.scroll_state().is_user_dragging);
        picker.event(&Event::TouchMove {
            id: finger,
            position: Point::new(50.0, 180.0),
        });
        let msg = picker.event(&Event::TouchEnd {
            id: finger,
            position: Point::new(50.0, 100.0),
        });
        // 80px up from where the drag began moves two items.
        let change = msg.unwrap();
        assert_eq!(
            change.downcast_ref::<WheelSelectionChanged>(),
            Some(&WheelSelectionChanged { index: 2 })
        );
    }

    #[test]
    fn test_touch_cancel_snaps_to_nearest() {
        let mut picker = laid_out(WheelPicker::new(numbers(20)));
        run(&mut picker, Duration::from_secs(1));
        let finger = TouchId::new(7);
        picker.event(&Event::TouchStart {
            id: finger,
            position: Point::new(50.0, 200.0),
        });
        picker.event(&Event::TouchMove {
            id: finger,
            position: Point::new(50.0, 185.0),
        });
        picker.event(&Event::TouchMove {
            id: finger,
            position: Point::new(50.0, 135.0),
        });
        assert!(picker.event(&Event::TouchCancel { id: finger }).is_none());
        assert_eq!(run(&mut picker, Duration::from_millis(400)), vec![1]);
    }

    // =========================================================================
    // Wheel and keyboard
    // =========================================================================

    #[test]
    fn test_scroll_wheel_steps() {
        let (log, callback) = recorder();
        let mut picker = laid_out(
            WheelPicker::new(numbers(10))
                .current(Some(4))
                .on_selection_changed(callback),
        );
        run(&mut picker, Duration::from_secs(1));
        picker.event(&Event::Scroll {
            delta_x: 0.0,
            delta_y: -1.0,
        });
        assert_eq!(run(&mut picker, Duration::from_millis(400)), vec![5]);
        picker.event(&Event::Scroll {
            delta_x: 0.0,
            delta_y: 3.0,
        });
        assert_eq!(run(&mut picker, Duration::from_millis(400)), vec![4]);
        assert_eq!(*log.lock().unwrap(), vec![5, 4]);
    }

    #[test]
    fn test_keys_step() {
        let mut picker = laid_out(WheelPicker::new(numbers(30)));
        run(&mut picker, Duration::from_secs(1));

        picker.event(&Event::KeyDown { key: Key::Down });
        assert_eq!(run(&mut picker, Duration::from_millis(400)), vec![1]);
        picker.event(&Event::KeyDown { key: Key::PageDown });
        assert_eq!(run(&mut picker, Duration::from_millis(400)), vec![9]);
        picker.event(&Event::KeyDown { key: Key::End });
        assert_eq!(run(&mut picker, Duration::from_millis(400)), vec![29]);
        picker.event(&Event::KeyDown { key: Key::Home });
        assert_eq!(run(&mut picker, Duration::from_millis(400)), vec![0]);
        picker.event(&Event::KeyDown { key: Key::Up });
        assert!(run(&mut picker, Duration::from_millis(400)).is_empty());
    }

    // =========================================================================
    // Host updates
    // =========================================================================

    #[test]
    fn test_set_current_is_keyed() {
        let mut picker = laid_out(WheelPicker::new(numbers(40)).current(Some(5)));
        run(&mut picker, Duration::from_secs(1));
        let generation = picker.controller().generation();

        picker.set_current(Some(5));
        assert_eq!(picker.controller().generation(), generation);

        picker.set_current(Some(12));
        picker.set_current(Some(20));
        assert_eq!(picker.controller().generation(), generation + 2);
        assert!(run(&mut picker, Duration::from_secs(1)).is_empty());
        assert_eq!(picker.selected_index(), Some(20));
    }

    #[test]
    fn test_set_current_zero_keeps_wheel_in_place() {
        let (log, callback) = recorder();
        let mut picker = laid_out(
            WheelPicker::new(numbers(40))
                .current(Some(12))
                .on_selection_changed(callback),
        );
        run(&mut picker, Duration::from_secs(1));

        picker.set_current(Some(0));
        assert_eq!(picker.current_index(), 0);
        assert!(!picker.scroll_state().is_scroll_in_progress);
        assert!(picker.scroll_state().is_programmatic_settle_in_progress);
        assert!(run(&mut picker, Duration::from_secs(1)).is_empty());
        assert_eq!(picker.selected_index(), Some(12));
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_set_items_same_content_keeps_state() {
        let mut picker = laid_out(WheelPicker::new(numbers(40)).current(Some(7)));
        run(&mut picker, Duration::from_millis(100));
        let before = picker.controller().position();
        picker.set_items(numbers(40));
        assert_eq!(picker.controller().position(), before);
        assert!(matches!(
            picker.controller().phase(),
            SnapPhase::ProgrammaticSeek { .. }
        ));
    }

    #[test]
    fn test_set_items_rebuilds_and_clamps() {
        let mut picker = laid_out(WheelPicker::new(numbers(40)).current(Some(30)));
        run(&mut picker, Duration::from_secs(1));
        picker.set_items(["a", "b", "c"]);
        assert_eq!(picker.item_count(), 3);
        assert_eq!(picker.sequence().get(4), Some("a"));
        assert_eq!(picker.selected_index(), Some(2));
    }

    #[test]
    fn test_set_items_same_length_new_labels_rebuilds() {
        let mut picker = laid_out(WheelPicker::new(["a", "b", "c"]));
        picker.set_items(["x", "y", "z"]);
        assert_eq!(picker.sequence().items(), ["x", "y", "z"]);
        assert_eq!(picker.sequence().get(5), Some("y"));
    }

    #[test]
    fn test_items_arriving_after_empty_start_restore_current() {
        let (log, callback) = recorder();
        let mut picker = laid_out(
            WheelPicker::new(Vec::<String>::new())
                .current(Some(5))
                .on_selection_changed(callback),
        );
        run(&mut picker, Duration::from_millis(100));
        assert_eq!(picker.selected_index(), None);

        picker.set_items(numbers(40));
        assert!(picker.scroll_state().is_programmatic_settle_in_progress);
        assert!(run(&mut picker, Duration::from_secs(2)).is_empty());
        assert_eq!(picker.current_index(), 5);
        assert_eq!(picker.selected_index(), Some(5));
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_empty_items_never_report() {
        let (log, callback) = recorder();
        let mut picker = laid_out(
            WheelPicker::new(Vec::<String>::new())
                .current(Some(3))
                .on_selection_changed(callback),
        );
        picker.event(&mouse_down(100.0));
        picker.event(&mouse_move(50.0));
        picker.event(&mouse_move(-100.0));
        picker.event(&mouse_up(-100.0));
        picker.event(&Event::KeyDown { key: Key::Down });
        picker.event(&Event::Scroll {
            delta_x: 0.0,
            delta_y: -1.0,
        });
        assert!(run(&mut picker, Duration::from_secs(2)).is_empty());
        assert!(log.lock().unwrap().is_empty());
        assert_eq!(picker.selected_index(), None);
    }

    // =========================================================================
    // Measure and paint
    // =========================================================================

    #[test]
    fn test_measure_prefers_visible_rows() {
        let picker = WheelPicker::new(["January", "February"]);
        let size = picker.measure(Constraints::unbounded());
        assert_eq!(size.height, 360.0);
        // "February" = 8 chars * 16 * 0.6 = 76.8, scaled by 1.2, plus 2 * 12
        assert!((size.width - 116.16).abs() < 1e-3);

        let tight = picker.measure(Constraints::tight(Size::new(50.0, 50.0)));
        assert_eq!(tight, Size::new(50.0, 50.0));
    }

    #[test]
    fn test_measure_has_minimum_width() {
        let picker = WheelPicker::new(["a"]);
        assert_eq!(picker.measure(Constraints::unbounded()).width, MIN_WIDTH);
    }

    #[test]
    fn test_visible_range_covers_viewport() {
        let mut picker = laid_out(WheelPicker::new(numbers(40)).current(Some(5)));
        run(&mut picker, Duration::from_secs(1));
        assert_eq!(picker.visible_range(), 5..14);
    }

    #[test]
    fn test_paint_clips_and_draws_highlight() {
        let mut picker = laid_out(WheelPicker::new(numbers(40)).current(Some(5)));
        run(&mut picker, Duration::from_secs(1));

        let mut canvas = RecordingCanvas::new();
        picker.paint(&mut canvas);

        assert_eq!(canvas.open_frames(), 0);
        match &canvas.commands()[..] {
            [DrawCommand::Clip { bounds, .. }] => {
                assert_eq!(*bounds, Rect::new(0.0, 0.0, 200.0, 360.0));
            }
            other => panic!("expected one clip, got {other:?}"),
        }

        let rects = canvas.rects();
        assert_eq!(rects.len(), 1);
        let (band, radius, color) = rects[0];
        assert_eq!(band, Rect::new(12.0, 160.0, 176.0, 40.0));
        assert_eq!(radius, CornerRadius::uniform(8.0));
        assert_eq!(color, Color::GRAY.with_alpha(0.1));
    }

    #[test]
    fn test_paint_scales_center_label() {
        let mut picker = laid_out(WheelPicker::new(numbers(40)).current(Some(5)));
        run(&mut picker, Duration::from_secs(1));

        let mut canvas = RecordingCanvas::new();
        picker.paint(&mut canvas);
        let runs = canvas.text_runs();
        let labels: Vec<&str> = runs.iter().map(|r| r.content.as_str()).collect();
        assert_eq!(labels, ["2", "3", "4", "5", "6", "7", "8", "9", "10"]);

        let center = runs.iter().find(|r| r.content == "6").unwrap();
        let (sx, sy) = center.transform.scale_factors();
        assert!((sx - 1.24).abs() < 1e-4 && (sy - 1.24).abs() < 1e-4);
        assert_eq!(center.clip, Some(picker.bounds()));

        let edge = runs.iter().find(|r| r.content == "2").unwrap();
        let (sx, sy) = edge.transform.scale_factors();
        assert!(sx < 1.24 && sy < sx);
    }

    #[test]
    fn test_paint_skips_placeholders() {
        let mut picker = laid_out(WheelPicker::new(["only"]));
        run(&mut picker, Duration::from_secs(1));
        let mut canvas = RecordingCanvas::new();
        picker.paint(&mut canvas);
        let runs = canvas.text_runs();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].content, "only");
    }

    #[test]
    fn test_paint_fades_when_enabled() {
        let mut config = WheelPickerConfig::default();
        config.style.fade_with_distance = true;
        let mut picker = laid_out(
            WheelPicker::new(numbers(40))
                .current(Some(5))
                .with_config(config),
        );
        run(&mut picker, Duration::from_secs(1));
        let mut canvas = RecordingCanvas::new();
        picker.paint(&mut canvas);

        let mut alphas = Vec::new();
        collect_text_alpha(canvas.commands(), &mut alphas);
        let center = alphas.iter().find(|(c, _)| c == "6").unwrap().1;
        let edge = alphas.iter().find(|(c, _)| c == "2").unwrap().1;
        assert!((center - 1.0).abs() < 1e-4);
        assert_eq!(edge, 0.0);
    }

    fn collect_text_alpha(commands: &[DrawCommand], out: &mut Vec<(String, f32)>) {
        for command in commands {
            match command {
                DrawCommand::Text { content, style, .. } => {
                    out.push((content.clone(), style.color.a));
                }
                DrawCommand::Group { children, .. } | DrawCommand::Clip { children, .. } => {
                    collect_text_alpha(children, out);
                }
                DrawCommand::Rect { .. } => {}
            }
        }
    }

    #[test]
    fn test_identical_inputs_paint_identically() {
        let a = laid_out(WheelPicker::new(numbers(12)).current(Some(4)));
        let b = laid_out(WheelPicker::new(numbers(12)).current(Some(4)));
        assert_eq!(a.sequence(), b.sequence());
        assert_eq!(a.visible_transforms(), b.visible_transforms());
    }
}
