#![forbid(unsafe_code)]

//! The gallery controller.
//!
//! [`Gallery`] owns every piece built at init and arbitrates between the
//! input sources (clicks, touches, autoplay) and the single animation slot.
//! All navigation funnels through one guard: while a transition is in
//! flight or a finger is down, new requests are dropped, never queued.
//!
//! Time only enters through [`Gallery::tick`]; the host calls it from its
//! frame scheduler whenever [`Gallery::needs_frame`] is true.

use std::time::Duration;

use swipedeck_core::event::{EventOutcome, HostEvent, NodeId};
use swipedeck_core::timeline::SWIPE_SNAP_FACTOR;

use crate::autoplay::Autoplay;
use crate::build::{self, Arrows, Built};
use crate::config::{GalleryConfig, GalleryOptions, Mode};
use crate::engine::Engine;
use crate::error::GalleryError;
use crate::host::Host;
use crate::input::TouchState;
use crate::layout::Layout;
use crate::pager::PagerModel;
use crate::slides::SlideStrip;
use crate::state::{self, Indexes};

/// A constructed, running gallery.
#[derive(Debug)]
pub struct Gallery {
    config: GalleryConfig,
    wrap: NodeId,
    list: NodeId,
    strip: SlideStrip,
    pager: Option<PagerModel>,
    arrows: Option<Arrows>,
    layout: Option<Layout>,
    pending_measure: Option<Duration>,
    engine: Engine,
    touch: Option<TouchState>,
    autoplay: Autoplay,
}

impl Gallery {
    /// Construct a gallery on the element matching `selector`.
    ///
    /// Validates the nesting contract, splices clones, generates controls,
    /// and performs the initial measure and paint. Autoplay starts here if
    /// enabled and the gallery has more than one slide.
    pub fn init(
        host: &mut dyn Host,
        selector: &str,
        options: GalleryOptions,
    ) -> Result<Self, GalleryError> {
        let container = host
            .query(selector)
            .ok_or(GalleryError::ContainerNotFound)?;
        let config = GalleryConfig::with_options(&options);

        let Built {
            wrap,
            list,
            strip,
            pager,
            arrows,
        } = build::build(host, container, &config)?;

        let engine = Engine::new(host.capabilities().offset_write());
        let autoplay = Autoplay::new(config.auto_delay);

        let mut gallery = Self {
            config,
            wrap,
            list,
            strip,
            pager,
            arrows,
            layout: None,
            pending_measure: None,
            engine,
            touch: None,
            autoplay,
        };
        gallery.refresh_layout(host);
        if gallery.navigable() && gallery.config.auto {
            gallery.autoplay.start();
        }
        Ok(gallery)
    }

    /// Effective configuration after defaulting and normalization.
    #[must_use]
    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Base index of the current slide, folded into `[0, count)`.
    #[must_use]
    pub fn current_base_index(&self) -> i64 {
        self.strip.wrap_base(self.strip.current_base())
    }

    /// The clone-padded slide sequence.
    #[must_use]
    pub fn strip(&self) -> &SlideStrip {
        &self.strip
    }

    /// The generated pager, if any.
    #[must_use]
    pub fn pager(&self) -> Option<&PagerModel> {
        self.pager.as_ref()
    }

    /// The generated prev/next controls, if any.
    #[must_use]
    pub fn arrows(&self) -> Option<Arrows> {
        self.arrows
    }

    /// Last written strip offset in pixels.
    #[must_use]
    pub fn strip_offset(&self) -> f64 {
        self.engine.offset()
    }

    /// Whether a transition is currently animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.engine.in_flight()
    }

    /// Whether the host should keep delivering ticks.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.engine.in_flight() || self.pending_measure.is_some() || self.autoplay.running()
    }

    fn navigable(&self) -> bool {
        self.strip.count_base() > 1
    }

    /// Whether navigation requests are currently dropped.
    #[must_use]
    pub fn busy(&self) -> bool {
        self.engine.in_flight() || self.touch.is_some() || self.layout.is_none()
    }

    fn pager_current(&self) -> usize {
        self.pager.as_ref().map_or_else(
            || self.strip.wrap_base(self.strip.current_base()) as usize,
            PagerModel::current,
        )
    }

    /// Navigate by `delta` slides. Returns `false` when the request was
    /// dropped (busy, not navigable, or a zero delta).
    pub fn navigate(&mut self, host: &mut dyn Host, delta: i64) -> bool {
        if delta == 0 || !self.navigable() || self.busy() {
            return false;
        }
        let idx = state::relative(
            self.config.mode,
            self.strip.count_base(),
            self.strip.current_base(),
            self.pager_current(),
            delta,
        );
        self.autoplay.stop();
        self.start_transition(host, idx, self.config.transition_speed);
        true
    }

    /// Navigate directly to the slide behind pager entry `target`.
    pub fn navigate_to(&mut self, host: &mut dyn Host, target: usize) -> bool {
        if !self.navigable() || self.busy() || target >= self.strip.count_base() {
            return false;
        }
        if target == self.pager_current() {
            return false;
        }
        let idx = state::absolute(
            self.config.mode,
            self.strip.count_base(),
            self.strip.current_base(),
            self.pager_current(),
            target,
        );
        self.autoplay.stop();
        self.start_transition(host, idx, self.config.transition_speed);
        true
    }

    /// Feed one host event through the gallery.
    pub fn handle(&mut self, host: &mut dyn Host, event: HostEvent) -> EventOutcome {
        match event {
            HostEvent::Click { target } => self.handle_click(host, target),
            HostEvent::TouchStart { x, y } => self.handle_touch_start(x, y),
            HostEvent::TouchMove { x, y } => self.handle_touch_move(host, x, y),
            HostEvent::TouchEnd { x, .. } => self.handle_touch_end(host, x),
            HostEvent::Resize | HostEvent::Load => {
                self.refresh_layout(host);
                EventOutcome::Handled
            }
        }
    }

    /// Advance time: the deferred-measure countdown, the in-flight
    /// transition, and the autoplay interval, in that order. An autoplay
    /// firing goes through the same guard as any navigation.
    pub fn tick(&mut self, host: &mut dyn Host, dt: Duration) {
        if let Some(remaining) = self.pending_measure {
            match remaining.checked_sub(dt) {
                Some(rest) if !rest.is_zero() => self.pending_measure = Some(rest),
                _ => {
                    self.pending_measure = None;
                    self.refresh_layout(host);
                }
            }
        }
        if let Some(layout) = self.layout {
            let _ = self
                .engine
                .tick(host, dt, &mut self.strip, &layout, self.list);
        }
        if self.autoplay.tick(dt) {
            let _ = self.navigate(host, 1);
        }
    }

    // -----------------------------------------------------------------------
    // Event handling
    // -----------------------------------------------------------------------

    fn handle_click(&mut self, host: &mut dyn Host, target: NodeId) -> EventOutcome {
        if let Some(arrows) = self.arrows {
            if within(&*host, arrows.prev, target) {
                let _ = self.navigate(host, -1);
                return EventOutcome::Handled;
            }
            if within(&*host, arrows.next, target) {
                let _ = self.navigate(host, 1);
                return EventOutcome::Handled;
            }
        }
        if let Some(entry) = self.pager.as_ref().and_then(|p| p.entry_index(target)) {
            let _ = self.navigate_to(host, entry);
            return EventOutcome::Handled;
        }
        EventOutcome::Ignored
    }

    fn handle_touch_start(&mut self, x: f64, y: f64) -> EventOutcome {
        if !self.config.swipe || !self.navigable() || self.busy() {
            return EventOutcome::Ignored;
        }
        self.touch = Some(TouchState::new(x, y, self.engine.offset()));
        self.autoplay.stop();
        EventOutcome::Handled
    }

    fn handle_touch_move(&mut self, host: &mut dyn Host, x: f64, y: f64) -> EventOutcome {
        let Some(touch) = self.touch else {
            return EventOutcome::Ignored;
        };
        if !touch.is_horizontal(x, y) {
            // Vertical movement stays with the page scroller.
            return EventOutcome::Ignored;
        }
        if self.config.mode == Mode::Slide {
            self.engine.write_offset(host, self.list, touch.drag_offset(x));
        }
        EventOutcome::HandledPreventDefault
    }

    fn handle_touch_end(&mut self, host: &mut dyn Host, x: f64) -> EventOutcome {
        let Some(touch) = self.touch.take() else {
            return EventOutcome::Ignored;
        };
        let Some(layout) = self.layout else {
            return EventOutcome::Ignored;
        };
        let count = self.strip.count_base();
        match self.config.mode {
            Mode::Slide => {
                let delta = touch.slide_release_delta(self.engine.offset(), layout.elem_width);
                let idx = state::relative(
                    Mode::Slide,
                    count,
                    self.strip.current_base(),
                    self.pager_current(),
                    delta,
                );
                // A swipe snaps faster; a settle-back runs at full speed.
                let duration = if delta == 0 {
                    self.config.transition_speed
                } else {
                    self.config.transition_speed.mul_f64(SWIPE_SNAP_FACTOR)
                };
                self.start_transition(host, idx, duration);
            }
            Mode::Fade => {
                let delta = touch.fade_release_delta(x);
                if delta == 0 {
                    if self.config.auto && self.navigable() {
                        self.autoplay.start();
                    }
                    return EventOutcome::Handled;
                }
                let idx = state::relative(
                    Mode::Fade,
                    count,
                    self.strip.current_base(),
                    self.pager_current(),
                    delta,
                );
                self.start_transition(host, idx, self.config.transition_speed);
            }
        }
        EventOutcome::Handled
    }

    // -----------------------------------------------------------------------
    // Transitions and layout
    // -----------------------------------------------------------------------

    fn start_transition(&mut self, host: &mut dyn Host, idx: Indexes, duration: Duration) {
        let Some(layout) = self.layout else {
            return;
        };

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "gallery_navigate",
            from = idx.slide_current,
            to = idx.slide_next
        )
        .entered();

        match self.config.mode {
            Mode::Fade => self
                .engine
                .start_fade(duration, &self.strip, idx.slide_next),
            Mode::Slide => {
                let target = layout.offset_for(idx.slide_next, self.strip.clone_offset());
                self.engine
                    .start_slide(duration, self.engine.offset(), target, idx.slide_next);
            }
        }
        // The pager marker moves at navigation start, not at commit.
        if idx.pager_next != idx.pager_current
            && let Some(pager) = &mut self.pager
        {
            pager.set_current(idx.pager_next, host);
        }
        if self.config.auto && self.navigable() {
            self.autoplay.start();
        }
    }

    fn refresh_layout(&mut self, host: &mut dyn Host) {
        let reference = self.strip.node_at(self.strip.display_of_base(0));
        match Layout::measure(host, &self.config, self.wrap, reference, self.strip.len()) {
            Ok(layout) => {
                self.layout = Some(layout);
                self.pending_measure = None;
                self.apply_layout(host, layout);
            }
            Err(retry) => self.pending_measure = Some(retry.delay),
        }
    }

    fn apply_layout(&mut self, host: &mut dyn Host, layout: Layout) {
        for record in self.strip.records() {
            host.set_width(record.node, layout.slide_width);
            host.set_height(record.node, layout.slide_height);
            if self.config.use_absolute
                && let Some(&inner) = host.children(record.node).first()
            {
                host.set_height(inner, layout.slide_height);
            }
        }
        host.set_width(self.list, layout.list_width);
        host.set_height(self.wrap, layout.outer_height);
        host.set_height(self.list, layout.outer_height);

        match self.config.mode {
            Mode::Slide => {
                // Repaint at the settled position; an in-flight transition
                // keeps writing its own offsets.
                if !self.engine.in_flight() {
                    let x = layout.offset_for(self.strip.current_base(), self.strip.clone_offset());
                    self.engine.write_offset(host, self.list, x);
                }
            }
            Mode::Fade => self.engine.paint_fade_static(host, &self.strip),
        }
    }
}

/// Whether `target` is the control itself or one of its direct children
/// (the generated label element).
fn within(host: &dyn Host, control: NodeId, target: NodeId) -> bool {
    target == control || host.children(control).contains(&target)
}
