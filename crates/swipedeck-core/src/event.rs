#![forbid(unsafe_code)]

//! Canonical host event types.
//!
//! The host owns actual event delivery (DOM listeners, a terminal loop, a
//! test harness); the gallery only sees these canonical events. All types
//! derive `Clone` and `PartialEq` for use in tests and pattern matching.
//!
//! # Design Notes
//!
//! - Coordinates are page-space pixels, `f64` like the host's own values.
//! - Click targets are the actual clicked element, not the listened
//!   ancestor; the gallery maps the node back to a control or pager entry.
//! - `Resize` and `Load` carry no payload: the gallery re-measures through
//!   the host rather than trusting event data.

/// Opaque handle to a host element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

/// An input or lifecycle event delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// A click on (or inside) a node the gallery listens on.
    Click {
        /// The clicked element.
        target: NodeId,
    },
    /// Finger down on the slide list.
    TouchStart {
        /// Page-space x in pixels.
        x: f64,
        /// Page-space y in pixels.
        y: f64,
    },
    /// Finger moved while down.
    TouchMove {
        /// Page-space x in pixels.
        x: f64,
        /// Page-space y in pixels.
        y: f64,
    },
    /// Finger lifted.
    TouchEnd {
        /// Page-space x in pixels.
        x: f64,
        /// Page-space y in pixels.
        y: f64,
    },
    /// The window was resized.
    Resize,
    /// The window finished loading.
    Load,
}

/// Where a listener is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenTarget {
    /// A specific element.
    Node(NodeId),
    /// The window itself.
    Window,
}

/// Which event class a listener covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listen {
    /// Click events.
    Click,
    /// The touchstart/touchmove/touchend family.
    Touch,
    /// Window resize.
    Resize,
    /// Window load.
    Load,
}

/// What the gallery did with a delivered event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum EventOutcome {
    /// The event was not for this gallery.
    Ignored,
    /// The event was consumed.
    Handled,
    /// The event was consumed and the host should suppress its default
    /// reaction (page scrolling during a horizontal drag).
    HandledPreventDefault,
}

impl EventOutcome {
    /// Whether the event was consumed in any form.
    #[must_use]
    pub fn is_handled(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}
