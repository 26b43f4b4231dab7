#![forbid(unsafe_code)]

//! Index computation.
//!
//! Pure functions from the current slide/pager position and a navigation
//! request to the full set of next indexes. Wraparound rules differ by
//! mode: fade has no clones so its index math is modular, while slide mode
//! deliberately does NOT wrap — the clone buffer absorbs the overshoot and
//! the engine re-anchors after the animation commits.

use crate::config::Mode;

/// Resolved current/next indexes for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indexes {
    /// Current slide base index.
    pub slide_current: i64,
    /// Target slide base index. In slide mode this may be `-1` or `count`
    /// (a clone), never further out than one step.
    pub slide_next: i64,
    /// Current pager entry.
    pub pager_current: usize,
    /// Next pager entry, always wrapped into `[0, count)`.
    pub pager_next: usize,
}

/// Resolve a relative navigation by `delta` slides.
#[must_use]
pub fn relative(
    mode: Mode,
    count: usize,
    slide_current: i64,
    pager_current: usize,
    delta: i64,
) -> Indexes {
    let n = count as i64;
    let slide_next = match mode {
        Mode::Slide => slide_current + delta,
        Mode::Fade => (slide_current + n + delta).rem_euclid(n),
    };
    let pager_next = (pager_current as i64 + delta).rem_euclid(n) as usize;
    Indexes {
        slide_current,
        slide_next,
        pager_current,
        pager_next,
    }
}

/// Resolve an absolute navigation to a pager entry's base index.
///
/// The clicked entry implies a delta relative to the current pager entry;
/// the slide target then follows the mode's own wrap rule.
#[must_use]
pub fn absolute(
    mode: Mode,
    count: usize,
    slide_current: i64,
    pager_current: usize,
    target_base: usize,
) -> Indexes {
    let delta = target_base as i64 - pager_current as i64;
    relative(mode, count, slide_current, pager_current, delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fade_forward_wraps_modularly() {
        let idx = relative(Mode::Fade, 4, 3, 3, 1);
        assert_eq!(idx.slide_next, 0);
        assert_eq!(idx.pager_next, 0);
    }

    #[test]
    fn fade_backward_wraps_modularly() {
        let idx = relative(Mode::Fade, 4, 0, 0, -1);
        assert_eq!(idx.slide_next, 3);
        assert_eq!(idx.pager_next, 3);
    }

    #[test]
    fn slide_forward_does_not_wrap() {
        let idx = relative(Mode::Slide, 4, 3, 3, 1);
        assert_eq!(idx.slide_next, 4); // lands on a clone
        assert_eq!(idx.pager_next, 0); // pager always wraps
    }

    #[test]
    fn slide_backward_does_not_wrap() {
        let idx = relative(Mode::Slide, 4, 0, 0, -1);
        assert_eq!(idx.slide_next, -1);
        assert_eq!(idx.pager_next, 3);
    }

    #[test]
    fn interior_steps_match_between_modes() {
        let s = relative(Mode::Slide, 5, 2, 2, 1);
        let f = relative(Mode::Fade, 5, 2, 2, 1);
        assert_eq!(s.slide_next, 3);
        assert_eq!(f.slide_next, 3);
    }

    #[test]
    fn absolute_targets_entry_directly() {
        let idx = absolute(Mode::Slide, 5, 1, 1, 4);
        assert_eq!(idx.slide_next, 4);
        assert_eq!(idx.pager_next, 4);
    }

    #[test]
    fn absolute_backward_in_fade_mode() {
        let idx = absolute(Mode::Fade, 5, 3, 3, 0);
        assert_eq!(idx.slide_next, 0);
        assert_eq!(idx.pager_next, 0);
    }

    #[test]
    fn zero_delta_is_identity() {
        let idx = relative(Mode::Slide, 4, 2, 2, 0);
        assert_eq!(idx.slide_next, 2);
        assert_eq!(idx.pager_next, 2);
    }

    proptest! {
        #[test]
        fn fade_next_is_always_in_range(count in 2usize..12, current in 0i64..12, delta in -1i64..=1) {
            let current = current.rem_euclid(count as i64);
            let idx = relative(Mode::Fade, count, current, current as usize, delta);
            prop_assert!(idx.slide_next >= 0 && idx.slide_next < count as i64);
        }

        #[test]
        fn pager_next_is_always_in_range(count in 2usize..12, current in 0usize..12, delta in -1i64..=1) {
            let current = current % count;
            let idx = relative(Mode::Slide, count, current as i64, current, delta);
            prop_assert!(idx.pager_next < count);
        }

        #[test]
        fn slide_overshoot_is_at_most_one_step(count in 2usize..12, current in 0usize..12, delta in -1i64..=1) {
            let current = current % count;
            let idx = relative(Mode::Slide, count, current as i64, current, delta);
            prop_assert!(idx.slide_next >= -1 && idx.slide_next <= count as i64);
        }
    }
}
