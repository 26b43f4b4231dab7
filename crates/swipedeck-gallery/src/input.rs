#![forbid(unsafe_code)]

//! Touch gesture interpretation.
//!
//! Pure geometry over recorded touch coordinates. The gallery owns the
//! gesture lifecycle; this module only answers the three questions a drag
//! poses: is this movement horizontal enough to claim, where should the
//! strip sit while the finger is down, and what does a release commit to.

/// Minimum horizontal travel for a fade-mode release to change slides,
/// in pixels. Exactly this distance does not qualify.
pub const FADE_SWIPE_THRESHOLD: f64 = 80.0;

/// Maximum gesture angle claimed as horizontal, in degrees from the x axis.
pub const HORIZONTAL_ANGLE_DEG: f64 = 30.0;

/// A touch sequence in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchState {
    /// Contact x at touch start.
    pub start_x: f64,
    /// Contact y at touch start.
    pub start_y: f64,
    /// Strip offset at touch start.
    pub start_offset: f64,
}

impl TouchState {
    /// Record a new touch sequence.
    #[must_use]
    pub fn new(start_x: f64, start_y: f64, start_offset: f64) -> Self {
        Self {
            start_x,
            start_y,
            start_offset,
        }
    }

    /// Strip offset that keeps the content under the finger at `x`.
    #[must_use]
    pub fn drag_offset(&self, x: f64) -> f64 {
        self.start_offset - (self.start_x - x)
    }

    /// Whether the movement to `(x, y)` is within the horizontal cone.
    ///
    /// Pure vertical movement is never claimed; zero horizontal travel is
    /// evaluated as one pixel so a stationary touch still counts.
    #[must_use]
    pub fn is_horizontal(&self, x: f64, y: f64) -> bool {
        let mut dx = (self.start_x - x).abs();
        let dy = (self.start_y - y).abs();
        if dx == 0.0 {
            dx = 1.0;
        }
        if dy == 0.0 {
            return true;
        }
        dx / dy > horizontal_ratio_threshold()
    }

    /// Slide-mode release: step by one if the strip moved more than a third
    /// of the step unit, in the direction of the drag.
    #[must_use]
    pub fn slide_release_delta(&self, current_offset: f64, step: f64) -> i64 {
        let threshold = step / 3.0;
        if self.start_offset - threshold > current_offset {
            1
        } else if current_offset - threshold > self.start_offset {
            -1
        } else {
            0
        }
    }

    /// Fade-mode release: step by one if the finger traveled strictly more
    /// than [`FADE_SWIPE_THRESHOLD`] pixels horizontally.
    #[must_use]
    pub fn fade_release_delta(&self, end_x: f64) -> i64 {
        let travel = self.start_x - end_x;
        if travel > FADE_SWIPE_THRESHOLD {
            1
        } else if -travel > FADE_SWIPE_THRESHOLD {
            -1
        } else {
            0
        }
    }
}

/// `|dx/dy|` ratio corresponding to [`HORIZONTAL_ANGLE_DEG`].
fn horizontal_ratio_threshold() -> f64 {
    HORIZONTAL_ANGLE_DEG.to_radians().tan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn touch() -> TouchState {
        TouchState::new(300.0, 150.0, -600.0)
    }

    #[test]
    fn drag_offset_follows_finger() {
        let t = touch();
        assert_eq!(t.drag_offset(300.0), -600.0);
        assert_eq!(t.drag_offset(250.0), -650.0);
        assert_eq!(t.drag_offset(340.0), -560.0);
    }

    #[test]
    fn shallow_movement_is_horizontal() {
        let t = touch();
        // 100 px across, 20 px down: well inside the 30 degree cone.
        assert!(t.is_horizontal(200.0, 170.0));
    }

    #[test]
    fn steep_movement_is_not_horizontal() {
        let t = touch();
        // 20 px across, 100 px down.
        assert!(!t.is_horizontal(280.0, 250.0));
    }

    #[test]
    fn pure_horizontal_is_claimed() {
        let t = touch();
        assert!(t.is_horizontal(100.0, 150.0));
    }

    #[test]
    fn pure_vertical_is_rejected() {
        let t = touch();
        // dx evaluates as one pixel, so the ratio is 1/100.
        assert!(!t.is_horizontal(300.0, 250.0));
    }

    #[test]
    fn stationary_touch_is_horizontal() {
        let t = touch();
        assert!(t.is_horizontal(300.0, 150.0));
    }

    #[test]
    fn slide_release_commits_past_a_third() {
        let t = touch();
        // Step 600: threshold 200.
        assert_eq!(t.slide_release_delta(-801.0, 600.0), 1);
        assert_eq!(t.slide_release_delta(-399.0, 600.0), -1);
    }

    #[test]
    fn slide_release_at_exact_third_settles_back() {
        let t = touch();
        assert_eq!(t.slide_release_delta(-800.0, 600.0), 0);
        assert_eq!(t.slide_release_delta(-400.0, 600.0), 0);
    }

    #[test]
    fn fade_release_threshold_is_strict() {
        let t = touch();
        assert_eq!(t.fade_release_delta(220.0), 0); // exactly 80 px
        assert_eq!(t.fade_release_delta(219.0), 1); // 81 px left
        assert_eq!(t.fade_release_delta(380.0), 0); // exactly 80 px right
        assert_eq!(t.fade_release_delta(381.0), -1); // 81 px right
    }

    #[test]
    fn fade_release_without_movement_is_zero() {
        let t = touch();
        assert_eq!(t.fade_release_delta(300.0), 0);
    }

    proptest! {
        #[test]
        fn drag_offset_round_trips_at_start(x in -1000.0f64..1000.0, y in -1000.0f64..1000.0, off in -5000.0f64..0.0) {
            let t = TouchState::new(x, y, off);
            prop_assert_eq!(t.drag_offset(x), off);
        }

        #[test]
        fn fade_delta_is_a_step_or_nothing(start in -500.0f64..500.0, end in -500.0f64..500.0) {
            let t = TouchState::new(start, 0.0, 0.0);
            let delta = t.fade_release_delta(end);
            prop_assert!((-1..=1).contains(&delta));
            if (start - end).abs() <= FADE_SWIPE_THRESHOLD {
                prop_assert_eq!(delta, 0);
            }
        }
    }
}
