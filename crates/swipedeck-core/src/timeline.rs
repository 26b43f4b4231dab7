#![forbid(unsafe_code)]

//! Linear progress timelines.
//!
//! A [`Timeline`] accumulates elapsed time as [`Duration`] (no floating-point
//! drift) and reports normalized progress in `[0.0, 1.0]`. Both visual modes
//! interpolate linearly from it; there is no easing.

use std::time::Duration;

/// Speed multiplier applied to swipe-driven transition completions.
///
/// A finger release snaps faster than a programmatic navigation.
pub const SWIPE_SNAP_FACTOR: f64 = 0.6;

/// Elapsed-over-duration progress, linear, clamped to `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    elapsed: Duration,
    duration: Duration,
}

impl Timeline {
    /// Create a timeline over `duration`.
    ///
    /// A zero duration is clamped to a minimal positive one so the first
    /// tick completes immediately instead of dividing by zero.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
        }
    }

    /// Create a timeline over `duration * factor`.
    #[must_use]
    pub fn scaled(duration: Duration, factor: f64) -> Self {
        Self::new(duration.mul_f64(factor))
    }

    /// Advance by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    /// Normalized progress in `[0.0, 1.0]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (t as f32).clamp(0.0, 1.0)
    }

    /// Whether the full duration has elapsed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Linear interpolation between two pixel values.
#[inline]
#[must_use]
pub fn lerp(from: f64, to: f64, t: f32) -> f64 {
    from + (to - from) * f64::from(t.clamp(0.0, 1.0))
}
