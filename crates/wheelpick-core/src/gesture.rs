//! Pointer velocity tracking for drag and fling gestures.
//!
//! Timestamps are supplied by the caller (a widget-local clock advanced by
//! `tick`), which keeps gesture handling deterministic under test.

use std::collections::VecDeque;
use std::time::Duration;

/// Samples older than this, relative to the newest, are discarded.
pub const VELOCITY_WINDOW: Duration = Duration::from_millis(100);

/// Estimates pointer velocity along one axis from recent samples.
#[derive(Debug, Clone, Default)]
pub struct VelocityTracker {
    samples: VecDeque<(Duration, f32)>,
}

impl VelocityTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pointer coordinate at time `at`.
    pub fn push(&mut self, at: Duration, value: f32) {
        // Samples within one frame share a timestamp; keep the newest.
        if let Some(last) = self.samples.back_mut() {
            if last.0 == at {
                last.1 = value;
                return;
            }
        }
        self.samples.push_back((at, value));
        while let Some(&(first, _)) = self.samples.front() {
            if at.saturating_sub(first) > VELOCITY_WINDOW {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Velocity in units per second over the retained window.
    #[must_use]
    pub fn velocity(&self) -> f32 {
        let (Some(&(t0, v0)), Some(&(t1, v1))) = (self.samples.front(), self.samples.back())
        else {
            return 0.0;
        };
        let dt = t1.saturating_sub(t0).as_secs_f32();
        if dt < 0.001 {
            return 0.0;
        }
        (v1 - v0) / dt
    }

    /// Number of retained samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check for no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Drop all samples.
    pub fn reset(&mut self) {
        self.samples.clear();
    }
}
