#![forbid(unsafe_code)]

//! The animation engine.
//!
//! A two-state machine: **Idle** or **Animating** exactly one
//! [`Transition`]. It is the only place that writes slide opacity, the
//! strip offset, and the current-slide marker. A transition always runs to
//! completion once started; the navigation guard upstream ensures at most
//! one is ever in flight.
//!
//! On commit in slide mode, a target that landed on a clone is re-anchored:
//! the strip is instantaneously re-offset to the numerically equivalent
//! in-bounds position and the marker moves to the equivalent original, all
//! in the same paint with no timeline involved.

use std::time::Duration;

use swipedeck_core::capability::OffsetWrite;
use swipedeck_core::event::NodeId;
use swipedeck_core::timeline::{Timeline, lerp};

use crate::host::{CURRENT_CLASS, Host};
use crate::layout::Layout;
use crate::slides::SlideStrip;

/// What one transition animates.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Channel {
    /// Crossfade: outgoing display position fades out, incoming fades in.
    Fade {
        out_display: usize,
        in_display: usize,
    },
    /// Horizontal strip movement from `start` by `delta` pixels.
    Slide { start: f64, delta: f64 },
}

/// An in-flight slide change.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    timeline: Timeline,
    next_base: i64,
    channel: Channel,
}

/// Result of advancing the engine by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum TickOutcome {
    /// Nothing in flight.
    Idle,
    /// Transition still running; visual writes were applied.
    Running,
    /// Transition finished this tick: final state committed, marker moved,
    /// strip re-anchored if it landed on a clone.
    Committed,
}

/// Drives at most one transition and owns every visual write.
#[derive(Debug)]
pub struct Engine {
    write: OffsetWrite,
    offset: f64,
    transition: Option<Transition>,
}

impl Engine {
    /// An idle engine using the given offset strategy.
    #[must_use]
    pub fn new(write: OffsetWrite) -> Self {
        Self {
            write,
            offset: 0.0,
            transition: None,
        }
    }

    /// Whether a transition is in flight. This is the navigation guard's
    /// source of truth.
    #[must_use]
    pub fn in_flight(&self) -> bool {
        self.transition.is_some()
    }

    /// Last written strip offset in pixels.
    ///
    /// The engine is the single writer, so this is always the live value;
    /// nothing is ever read back from the host.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Write the strip offset immediately, with no animation. Used for
    /// live finger tracking and for non-animated repaints after re-layout.
    pub fn write_offset(&mut self, host: &mut dyn Host, list: NodeId, x: f64) {
        self.offset = x;
        host.set_offset(list, x, self.write);
    }

    /// Fade-mode static paint: the current slide fully opaque, every other
    /// record transparent. Applied at init and after every re-layout.
    pub fn paint_fade_static(&self, host: &mut dyn Host, strip: &SlideStrip) {
        for (display, record) in strip.records().iter().enumerate() {
            let value = if display == strip.current_display() {
                1.0
            } else {
                0.0
            };
            host.set_opacity(record.node, value);
        }
    }

    /// Begin a crossfade toward `next_base`.
    pub fn start_fade(&mut self, duration: Duration, strip: &SlideStrip, next_base: i64) {
        self.transition = Some(Transition {
            timeline: Timeline::new(duration),
            next_base,
            channel: Channel::Fade {
                out_display: strip.current_display(),
                in_display: strip.display_of_base(next_base),
            },
        });
    }

    /// Begin a strip movement from `start` to `target` pixels toward
    /// `next_base`.
    pub fn start_slide(&mut self, duration: Duration, start: f64, target: f64, next_base: i64) {
        self.transition = Some(Transition {
            timeline: Timeline::new(duration),
            next_base,
            channel: Channel::Slide {
                start,
                delta: target - start,
            },
        });
    }

    /// Advance the in-flight transition by `dt` and apply this tick's
    /// visual writes. Commits and returns to idle when progress reaches 1.
    pub fn tick(
        &mut self,
        host: &mut dyn Host,
        dt: Duration,
        strip: &mut SlideStrip,
        layout: &Layout,
        list: NodeId,
    ) -> TickOutcome {
        let Some(mut transition) = self.transition else {
            return TickOutcome::Idle;
        };
        transition.timeline.tick(dt);
        let progress = transition.timeline.progress();

        match transition.channel {
            Channel::Fade {
                out_display,
                in_display,
            } => {
                host.set_opacity(strip.node_at(out_display), f64::from(1.0 - progress));
                host.set_opacity(strip.node_at(in_display), f64::from(progress));
            }
            Channel::Slide { start, delta } => {
                let x = lerp(start, start + delta, progress);
                self.offset = x;
                host.set_offset(list, x, self.write);
            }
        }

        if !transition.timeline.is_complete() {
            self.transition = Some(transition);
            return TickOutcome::Running;
        }

        self.transition = None;
        self.commit(host, transition, strip, layout, list);
        TickOutcome::Committed
    }

    fn commit(
        &mut self,
        host: &mut dyn Host,
        transition: Transition,
        strip: &mut SlideStrip,
        layout: &Layout,
        list: NodeId,
    ) {
        let next_base = transition.next_base;

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "gallery_commit",
            next_base,
            current = strip.current_base()
        )
        .entered();

        let display = strip.display_of_base(next_base);
        host.remove_class(strip.node_at(strip.current_display()), CURRENT_CLASS);
        host.add_class(strip.node_at(display), CURRENT_CLASS);
        strip.set_current(display);

        // Clone landing: same-paint re-anchor to the equivalent original.
        let slid = matches!(transition.channel, Channel::Slide { .. });
        if slid && strip.is_clone_base(next_base) {
            let equivalent = strip.wrap_base(next_base);
            let x = layout.offset_for(equivalent, strip.clone_offset());
            self.offset = x;
            host.set_offset(list, x, self.write);

            let equivalent_display = strip.display_of_base(equivalent);
            host.remove_class(strip.node_at(display), CURRENT_CLASS);
            host.add_class(strip.node_at(equivalent_display), CURRENT_CLASS);
            strip.set_current(equivalent_display);
        }
    }
}
