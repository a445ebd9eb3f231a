//! Scroll position and snap state machine.
//!
//! The position is a fractional sequence index aligned with the viewport
//! center. Only user-driven settles report a selection; host-requested seeks
//! move the wheel silently and then hold a guard window before returning to
//! idle.

use crate::sequence::PADDING_COUNT;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, trace};
use wheelpick_core::{EasedValue, Easing, VelocityTracker};

/// Positions closer than this to an item boundary count as on it.
const SNAP_EPSILON: f32 = 1e-4;

/// Message emitted when a user-driven scroll settles on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WheelSelectionChanged {
    /// Index into the caller's item list
    pub index: usize,
}

/// Timing and physics parameters for [`SnapController`].
#[derive(Debug, Clone, PartialEq)]
pub struct SnapConfig {
    /// Height of one item in pixels
    pub item_height: f32,
    /// Programmatic seek animation length
    pub seek_duration: Duration,
    /// Snap animation length for slow releases and steps
    pub snap_duration: Duration,
    /// Upper bound for a fling settle
    pub max_fling_duration: Duration,
    /// Quiescence after a seek completes
    pub settle_guard: Duration,
    /// Curve for every animation
    pub easing: Easing,
    /// Fling deceleration, px/s²
    pub fling_deceleration: f32,
    /// Minimum release speed for a fling, px/s
    pub fling_velocity_threshold: f32,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            item_height: 40.0,
            seek_duration: Duration::from_millis(300),
            snap_duration: Duration::from_millis(180),
            max_fling_duration: Duration::from_millis(600),
            settle_guard: Duration::from_millis(500),
            easing: Easing::CubicOut,
            fling_deceleration: 2400.0,
            fling_velocity_threshold: 60.0,
        }
    }
}

/// Progress of a programmatic seek.
#[derive(Debug, Clone, PartialEq)]
pub enum SeekStage {
    /// Scrolling toward the target
    Animating(EasedValue),
    /// Arrived; waiting out the guard window
    Quiescing {
        /// Guard time left
        remaining: Duration,
    },
}

/// What is currently driving the scroll position.
#[derive(Debug, Clone, Default)]
pub enum SnapPhase {
    /// Nothing is moving
    #[default]
    Idle,
    /// Host-requested scroll; never reports a selection
    ProgrammaticSeek {
        /// Request number; only the newest request exists
        generation: u64,
        /// Sequence index being centered
        target: usize,
        /// Animation or guard
        stage: SeekStage,
    },
    /// Pointer is down and moving the wheel
    UserDragging {
        /// Last pointer y coordinate
        last_y: f32,
        /// Recent pointer samples
        tracker: VelocityTracker,
    },
    /// User-driven animation to an item boundary
    Settling {
        /// Sequence index the wheel will stop on
        target: usize,
        /// Position animation
        motion: EasedValue,
    },
}

impl SnapPhase {
    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::ProgrammaticSeek { .. } => "programmatic_seek",
            Self::UserDragging { .. } => "user_dragging",
            Self::Settling { .. } => "settling",
        }
    }
}

/// Snapshot of scroll telemetry derived from the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    /// First sequence index at least partly inside the viewport
    pub first_visible_sequence_index: usize,
    /// The position is changing
    pub is_scroll_in_progress: bool,
    /// A pointer drag is active
    pub is_user_dragging: bool,
    /// A host seek or its guard window is active
    pub is_programmatic_settle_in_progress: bool,
}

/// Owns the scroll position and the four-phase snap state machine.
#[derive(Debug, Clone)]
pub struct SnapController {
    config: SnapConfig,
    viewport_height: f32,
    position: f32,
    real_len: usize,
    phase: SnapPhase,
    clock: Duration,
    generation: u64,
}

impl SnapController {
    /// Create a controller centered on the first item.
    #[must_use]
    pub fn new(config: SnapConfig, item_count: usize) -> Self {
        Self {
            viewport_height: config.item_height * 9.0,
            config,
            position: PADDING_COUNT as f32,
            real_len: item_count,
            phase: SnapPhase::Idle,
            clock: Duration::ZERO,
            generation: 0,
        }
    }

    /// Parameters in use.
    #[must_use]
    pub const fn config(&self) -> &SnapConfig {
        &self.config
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> &SnapPhase {
        &self.phase
    }

    /// Fractional sequence index at the viewport center.
    #[must_use]
    pub const fn position(&self) -> f32 {
        self.position
    }

    /// Number of selectable items.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.real_len
    }

    /// Number of seeks requested so far.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Viewport height used for visibility.
    #[must_use]
    pub const fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Set the viewport height, normally from layout.
    pub fn set_viewport_height(&mut self, height: f32) {
        if height.is_finite() && height >= 0.0 {
            self.viewport_height = height;
        }
    }

    /// Sequence index nearest the viewport center.
    #[must_use]
    pub fn centered_sequence_index(&self) -> usize {
        self.position.round().max(0.0) as usize
    }

    /// Caller index nearest the viewport center, if any item exists.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        if self.real_len == 0 {
            return None;
        }
        Some(self.clamp_target(self.centered_sequence_index()) - PADDING_COUNT)
    }

    /// Signed distance in pixels from the viewport center to the center of
    /// the item at `sequence_index`. Positive is below center.
    #[must_use]
    pub fn distance_from_center(&self, sequence_index: usize) -> f32 {
        (sequence_index as f32 - self.position) * self.config.item_height
    }

    /// Derived scroll telemetry.
    #[must_use]
    pub fn scroll_state(&self) -> ScrollState {
        let h = self.config.item_height;
        let first = if h > 0.0 {
            (self.position + 0.5 - self.viewport_height / (2.0 * h))
                .floor()
                .max(0.0) as usize
        } else {
            0
        };
        let (in_progress, dragging, programmatic) = match &self.phase {
            SnapPhase::Idle => (false, false, false),
            SnapPhase::ProgrammaticSeek { stage, .. } => {
                (matches!(stage, SeekStage::Animating(_)), false, true)
            }
            SnapPhase::UserDragging { .. } => (true, true, false),
            SnapPhase::Settling { .. } => (true, false, false),
        };
        ScrollState {
            first_visible_sequence_index: first,
            is_scroll_in_progress: in_progress,
            is_user_dragging: dragging,
            is_programmatic_settle_in_progress: programmatic,
        }
    }

    /// Animate so that caller index `index` is centered. Never reports a
    /// selection. Supersedes every other phase.
    ///
    /// A target of 0, or one already centered, does not move the wheel but
    /// still arms the settle guard.
    pub fn seek_to(&mut self, index: usize) {
        if self.real_len == 0 {
            trace!(index, "seek ignored, no selectable items");
            return;
        }
        if let SnapPhase::ProgrammaticSeek { generation, .. } = &self.phase {
            debug!(generation = *generation, "seek superseded");
        }
        self.generation += 1;
        let requested = self.clamp_target(index.saturating_add(PADDING_COUNT));
        // Index 0 keeps the wheel on its nearest item.
        let target = if requested == PADDING_COUNT {
            self.clamp_target(self.centered_sequence_index())
        } else {
            requested
        };
        let stage = if self.is_at(target) {
            self.position = target as f32;
            self.quiescing()
        } else {
            SeekStage::Animating(self.motion_to(target, self.config.seek_duration))
        };
        debug!(
            target_index = target - PADDING_COUNT,
            generation = self.generation,
            animated = matches!(stage, SeekStage::Animating(_)),
            "seek requested"
        );
        self.phase = SnapPhase::ProgrammaticSeek {
            generation: self.generation,
            target,
            stage,
        };
    }

    /// Start a drag at pointer coordinate `y`.
    pub fn begin_drag(&mut self, y: f32) {
        if !matches!(self.phase, SnapPhase::Idle) {
            debug!(from = self.phase.name(), "drag supersedes phase");
        }
        let mut tracker = VelocityTracker::new();
        tracker.push(self.clock, y);
        self.phase = SnapPhase::UserDragging { last_y: y, tracker };
    }

    /// Follow the pointer to `y`. Ignored unless dragging.
    pub fn drag_to(&mut self, y: f32) {
        let h = self.config.item_height;
        let (min, max) = self.bounds();
        let SnapPhase::UserDragging { last_y, tracker } = &mut self.phase else {
            return;
        };
        let delta = y - *last_y;
        if !delta.is_finite() {
            return;
        }
        *last_y = y;
        tracker.push(self.clock, y);
        if h > 0.0 {
            self.position = (self.position - delta / h).clamp(min, max);
        }
    }

    /// End the drag and settle, flinging with the release velocity.
    ///
    /// Returns the selection when the wheel is already at rest on an item.
    pub fn release(&mut self) -> Option<WheelSelectionChanged> {
        let SnapPhase::UserDragging { last_y, tracker } = &mut self.phase else {
            return None;
        };
        tracker.push(self.clock, *last_y);
        let velocity = tracker.velocity();
        self.settle(velocity)
    }

    /// End the drag without a fling, as for a cancelled touch.
    pub fn cancel_drag(&mut self) -> Option<WheelSelectionChanged> {
        if matches!(self.phase, SnapPhase::UserDragging { .. }) {
            self.settle(0.0)
        } else {
            None
        }
    }

    /// Settle `delta` items away from the current or pending boundary.
    ///
    /// Returns whether a settle was started. Ignored while dragging.
    pub fn step_by(&mut self, delta: i64) -> bool {
        if self.real_len == 0 || matches!(self.phase, SnapPhase::UserDragging { .. }) {
            return false;
        }
        let base = match &self.phase {
            SnapPhase::Settling { target, .. } => *target,
            _ => self.centered_sequence_index(),
        };
        let (min, max) = self.index_bounds();
        let target = (base as i64)
            .saturating_add(delta)
            .clamp(min as i64, max as i64) as usize;

        let unchanged = match &self.phase {
            SnapPhase::Settling { target: pending, .. } => *pending == target,
            _ => self.is_at(target),
        };
        if unchanged {
            return false;
        }
        trace!(delta, target_index = target - PADDING_COUNT, "step");
        self.phase = SnapPhase::Settling {
            target,
            motion: self.motion_to(target, self.config.snap_duration),
        };
        true
    }

    /// Advance the clock, animations and guard timer.
    ///
    /// Returns the selection when a user-driven settle completes.
    pub fn tick(&mut self, dt: Duration) -> Option<WheelSelectionChanged> {
        self.clock += dt;
        let (min, max) = self.bounds();
        match &mut self.phase {
            SnapPhase::Idle | SnapPhase::UserDragging { .. } => None,
            SnapPhase::ProgrammaticSeek {
                generation, stage, ..
            } => {
                let generation = *generation;
                match stage {
                    SeekStage::Animating(motion) => {
                        motion.update(dt);
                        self.position = (motion.value() as f32).clamp(min, max);
                        if motion.is_complete() {
                            debug!(generation, "seek complete, guarding");
                            *stage = SeekStage::Quiescing {
                                remaining: self.config.settle_guard,
                            };
                        }
                    }
                    SeekStage::Quiescing { remaining } => {
                        *remaining = remaining.saturating_sub(dt);
                        if remaining.is_zero() {
                            debug!(generation, "guard elapsed");
                            self.phase = SnapPhase::Idle;
                        }
                    }
                }
                None
            }
            SnapPhase::Settling { target, motion } => {
                motion.update(dt);
                self.position = (motion.value() as f32).clamp(min, max);
                if !motion.is_complete() {
                    return None;
                }
                let target = *target;
                self.phase = SnapPhase::Idle;
                self.finish_settle(target)
            }
        }
    }

    /// Change the number of selectable items, re-clamping the position and
    /// any pending target.
    pub fn set_item_count(&mut self, count: usize) {
        if count == self.real_len {
            return;
        }
        debug!(from = self.real_len, to = count, "item count changed");
        self.real_len = count;
        let (min, max) = self.bounds();
        self.position = self.position.clamp(min, max);

        if count == 0 {
            if !matches!(self.phase, SnapPhase::UserDragging { .. }) {
                self.phase = SnapPhase::Idle;
            }
            return;
        }

        let retarget = match &self.phase {
            SnapPhase::Settling { target, motion } => {
                Some((*target, motion.remaining(), false))
            }
            SnapPhase::ProgrammaticSeek {
                target,
                stage: SeekStage::Animating(motion),
                ..
            } => Some((*target, motion.remaining(), true)),
            _ => None,
        };
        let Some((target, remaining, programmatic)) = retarget else {
            return;
        };
        let clamped = self.clamp_target(target);
        if clamped == target {
            return;
        }
        let motion = self.motion_to(clamped, remaining);
        match &mut self.phase {
            SnapPhase::Settling { target, motion: m } if !programmatic => {
                *target = clamped;
                *m = motion;
            }
            SnapPhase::ProgrammaticSeek { target, stage, .. } if programmatic => {
                *target = clamped;
                *stage = SeekStage::Animating(motion);
            }
            _ => {}
        }
    }

    fn settle(&mut self, velocity: f32) -> Option<WheelSelectionChanged> {
        if self.real_len == 0 {
            self.phase = SnapPhase::Idle;
            return None;
        }
        let cfg = &self.config;
        let speed = velocity.abs();
        let (destination, duration) = if speed >= cfg.fling_velocity_threshold
            && cfg.fling_deceleration > 0.0
            && cfg.item_height > 0.0
        {
            let throw = velocity * speed / (2.0 * cfg.fling_deceleration);
            let secs = f64::from(speed / cfg.fling_deceleration);
            let duration = Duration::try_from_secs_f64(secs)
                .unwrap_or(cfg.max_fling_duration)
                .clamp(cfg.snap_duration, cfg.max_fling_duration.max(cfg.snap_duration));
            (self.position - throw / cfg.item_height, duration)
        } else {
            (self.position, cfg.snap_duration)
        };
        let (min, max) = self.bounds();
        let target = destination.clamp(min, max).round() as usize;
        debug!(
            velocity,
            target_index = target - PADDING_COUNT,
            "drag released"
        );

        if speed < cfg.fling_velocity_threshold && self.is_at(target) {
            self.position = target as f32;
            self.phase = SnapPhase::Idle;
            return self.finish_settle(target);
        }
        self.phase = SnapPhase::Settling {
            target,
            motion: self.motion_to(target, duration),
        };
        None
    }

    fn finish_settle(&mut self, target: usize) -> Option<WheelSelectionChanged> {
        if self.real_len == 0 {
            return None;
        }
        self.position = target as f32;
        let index = self.clamp_target(target) - PADDING_COUNT;
        debug!(index, "selection settled");
        Some(WheelSelectionChanged { index })
    }

    const fn quiescing(&self) -> SeekStage {
        SeekStage::Quiescing {
            remaining: self.config.settle_guard,
        }
    }

    fn motion_to(&self, target: usize, duration: Duration) -> EasedValue {
        EasedValue::new(f64::from(self.position), target as f64, duration)
            .with_easing(self.config.easing)
    }

    fn is_at(&self, target: usize) -> bool {
        (self.position - target as f32).abs() < SNAP_EPSILON
    }

    fn clamp_target(&self, sequence_index: usize) -> usize {
        let (min, max) = self.index_bounds();
        sequence_index.clamp(min, max)
    }

    const fn index_bounds(&self) -> (usize, usize) {
        (
            PADDING_COUNT,
            PADDING_COUNT + self.real_len.saturating_sub(1),
        )
    }

    fn bounds(&self) -> (f32, f32) {
        let (min, max) = self.index_bounds();
        (min as f32, max as f32)
    }
}
