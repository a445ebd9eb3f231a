//! Time-based tweens for frame-driven animation.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Shape of a tween over normalized time `t` in `0..=1`.
///
/// Every curve starts at 0 and ends at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant speed
    Linear,
    /// Quadratic deceleration
    EaseOut,
    /// Quadratic acceleration then deceleration
    EaseInOut,
    /// Cubic deceleration
    #[default]
    CubicOut,
    /// Cubic acceleration then deceleration
    CubicInOut,
    /// Exponential deceleration, reaching 1 exactly at `t = 1`
    ExpoOut,
}

impl Easing {
    /// Eased progress at `t`, clamped into `0..=1` first.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let rest = 1.0 - t;
        match self {
            Self::Linear => t,
            Self::EaseOut => 1.0 - rest * rest,
            Self::EaseInOut if t < 0.5 => 2.0 * t.powi(2),
            Self::EaseInOut => 1.0 - 2.0 * rest.powi(2),
            Self::CubicOut => 1.0 - rest.powi(3),
            Self::CubicInOut if t < 0.5 => 4.0 * t.powi(3),
            Self::CubicInOut => 1.0 - 4.0 * rest.powi(3),
            Self::ExpoOut if t >= 1.0 => 1.0,
            Self::ExpoOut => 1.0 - 2f64.powf(-10.0 * t),
        }
    }
}

/// Tween from `from` to `to` advanced by [`EasedValue::update`].
#[derive(Debug, Clone, PartialEq)]
pub struct EasedValue {
    /// Value at the start
    pub from: f64,
    /// Value once finished
    pub to: f64,
    /// Length of the tween
    pub duration: Duration,
    /// Time advanced so far, never past `duration`
    pub elapsed: Duration,
    /// Curve
    pub easing: Easing,
}

impl EasedValue {
    /// Tween over `duration` with [`Easing::CubicOut`].
    #[must_use]
    pub const fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing: Easing::CubicOut,
        }
    }

    /// Use a different curve.
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Current value. Exactly `to` once complete.
    #[must_use]
    pub fn value(&self) -> f64 {
        if self.is_complete() {
            self.to
        } else {
            let eased = self.easing.apply(self.progress());
            (self.to - self.from).mul_add(eased, self.from)
        }
    }

    /// Whether the full duration has elapsed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Time left until completion.
    #[must_use]
    pub const fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.elapsed)
    }

    /// Advance by `dt`, stopping at the end.
    pub fn update(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    /// Linear fraction of the duration elapsed. A zero duration counts as done.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }
}
