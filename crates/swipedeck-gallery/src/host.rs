#![forbid(unsafe_code)]

//! The host boundary.
//!
//! Everything the gallery cannot do itself — element construction and
//! cloning, computed-style measurement, visual writes, listener wiring —
//! goes through [`Host`]. A browser embedding implements this over the DOM;
//! tests use [`crate::mock::MockHost`].

use swipedeck_core::capability::{Capabilities, OffsetWrite};
use swipedeck_core::event::{Listen, ListenTarget, NodeId};
use swipedeck_core::geometry::ElementMetrics;

/// Class marking the current slide and current pager entry.
pub const CURRENT_CLASS: &str = "ExCurrent";
/// Class on every generated pager entry.
pub const PAGER_ELEM_CLASS: &str = "SwipeDeckPagerElem";
/// Class on the generated previous control.
pub const ARROW_PREV_CLASS: &str = "SwipeDeckPrev";
/// Class on the generated next control.
pub const ARROW_NEXT_CLASS: &str = "SwipeDeckNext";
/// Attribute carrying a slide's or pager entry's stable base index.
pub const INDEX_ATTR: &str = "data-index";

/// The external collaborator the gallery drives.
///
/// Structural queries return element children only; the host is responsible
/// for skipping text and comment nodes. Visual writes are fire-and-forget:
/// the gallery is the single writer of everything it writes and never reads
/// a value back.
pub trait Host {
    /// Capabilities, probed once at gallery construction.
    fn capabilities(&self) -> Capabilities;

    /// Resolve a selector to its first match.
    fn query(&mut self, selector: &str) -> Option<NodeId>;

    /// Direct element children in document order.
    fn children(&self, node: NodeId) -> Vec<NodeId>;

    /// Create a detached element.
    fn create_element(&mut self, tag: &str) -> NodeId;

    /// Deep-clone a node.
    fn clone_node(&mut self, node: NodeId) -> NodeId;

    /// Append `child` as the last child of `parent`.
    fn append_child(&mut self, parent: NodeId, child: NodeId);

    /// Insert `child` as the first child of `parent`.
    fn prepend_child(&mut self, parent: NodeId, child: NodeId);

    /// Replace a node's text content.
    fn set_text(&mut self, node: NodeId, text: &str);

    /// Tag a node with its stable base index ([`INDEX_ATTR`]).
    fn set_index_tag(&mut self, node: NodeId, index: i64);

    /// Add a class to a node.
    fn add_class(&mut self, node: NodeId, class: &str);

    /// Remove a class from a node.
    fn remove_class(&mut self, node: NodeId, class: &str);

    /// Computed-style snapshot for a node.
    fn metrics(&self, node: NodeId) -> ElementMetrics;

    /// Set a node's width in pixels.
    fn set_width(&mut self, node: NodeId, px: f64);

    /// Set a node's height in pixels.
    fn set_height(&mut self, node: NodeId, px: f64);

    /// Set a node's opacity in `[0.0, 1.0]`.
    fn set_opacity(&mut self, node: NodeId, value: f64);

    /// Write a horizontal offset, either as a 2D translation or as an
    /// absolute left position depending on `write`.
    fn set_offset(&mut self, node: NodeId, x: f64, write: OffsetWrite);

    /// `src` of the first image nested under `node`, if any.
    fn image_source(&self, node: NodeId) -> Option<String>;

    /// Apply `src` as a cover-fit, centered, non-repeating background.
    fn set_thumbnail(&mut self, node: NodeId, src: &str);

    /// Register interest in an event class on a target. Matching events are
    /// later delivered through [`crate::Gallery::handle`].
    fn listen(&mut self, target: ListenTarget, kind: Listen);
}
