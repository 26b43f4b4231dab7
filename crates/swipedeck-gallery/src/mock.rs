#![forbid(unsafe_code)]

//! Deterministic in-memory host for tests.
//!
//! [`MockHost`] keeps a flat node arena and records every visual write so
//! tests can assert on classes, opacities, and strip offsets without a
//! browser. [`MockHost::gallery_dom`] builds the canonical
//! container → wrapper → list → slides structure the gallery expects.

use std::collections::HashMap;

use swipedeck_core::capability::{Capabilities, OffsetWrite};
use swipedeck_core::event::{Listen, ListenTarget, NodeId};
use swipedeck_core::geometry::ElementMetrics;

use crate::host::Host;

/// One element in the mock arena.
#[derive(Debug, Clone)]
pub struct MockNode {
    /// Element tag name.
    pub tag: String,
    /// Classes in application order.
    pub classes: Vec<String>,
    /// Text content.
    pub text: String,
    /// Base index tag, if assigned.
    pub index_tag: Option<i64>,
    /// Child ids in document order.
    pub children: Vec<NodeId>,
    /// Metrics reported to the gallery.
    pub metrics: ElementMetrics,
    /// Last written width, if any.
    pub width: Option<f64>,
    /// Last written height, if any.
    pub height: Option<f64>,
    /// Last written opacity, if any.
    pub opacity: Option<f64>,
    /// Last written horizontal offset and how it was written.
    pub offset: Option<(f64, OffsetWrite)>,
    /// Last applied thumbnail source, if any.
    pub thumbnail: Option<String>,
    /// Image source this node reports (set on `img` children in tests).
    pub image_source: Option<String>,
}

impl MockNode {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_owned(),
            classes: Vec::new(),
            text: String::new(),
            index_tag: None,
            children: Vec::new(),
            metrics: ElementMetrics::sized(0.0, 0.0),
            width: None,
            height: None,
            opacity: None,
            offset: None,
            thumbnail: None,
            image_source: None,
        }
    }
}

/// In-memory [`Host`] implementation.
#[derive(Debug, Default)]
pub struct MockHost {
    nodes: Vec<MockNode>,
    selectors: HashMap<String, NodeId>,
    caps: Option<Capabilities>,
    /// Every listener registration, in order.
    pub listens: Vec<(ListenTarget, Listen)>,
}

impl MockHost {
    /// A fully capable host with an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A host reporting exactly `caps`.
    #[must_use]
    pub fn with_capabilities(caps: Capabilities) -> Self {
        Self {
            caps: Some(caps),
            ..Self::default()
        }
    }

    /// Create a detached element (test-side alias of the trait method).
    pub fn create(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len() as u64);
        self.nodes.push(MockNode::new(tag));
        id
    }

    /// Make `node` resolvable through `selector`.
    pub fn register(&mut self, selector: &str, node: NodeId) {
        self.selectors.insert(selector.to_owned(), node);
    }

    /// Borrow a node.
    ///
    /// # Panics
    /// Panics on an id from a different host.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &MockNode {
        &self.nodes[id.0 as usize]
    }

    /// Mutably borrow a node.
    pub fn node_mut(&mut self, id: NodeId) -> &mut MockNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Override the metrics a node reports.
    pub fn set_metrics(&mut self, id: NodeId, metrics: ElementMetrics) {
        self.node_mut(id).metrics = metrics;
    }

    /// Whether a node currently carries `class`.
    #[must_use]
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id).classes.iter().any(|c| c == class)
    }

    /// Last written offset of a node, if any.
    #[must_use]
    pub fn offset_of(&self, id: NodeId) -> Option<f64> {
        self.node(id).offset.map(|(x, _)| x)
    }

    /// Build the canonical gallery structure with 600×300 slides inside a
    /// 600 px wrapper, registered under `selector`. Returns the container.
    pub fn gallery_dom(&mut self, selector: &str, slides: usize) -> NodeId {
        self.gallery_dom_with(selector, slides, 600.0, ElementMetrics::sized(600.0, 300.0))
    }

    /// Like [`gallery_dom`](Self::gallery_dom) with explicit wrapper width
    /// and per-slide metrics.
    pub fn gallery_dom_with(
        &mut self,
        selector: &str,
        slides: usize,
        wrap_width: f64,
        slide_metrics: ElementMetrics,
    ) -> NodeId {
        let container = self.create("div");
        let wrap = self.create("div");
        let list = self.create("ul");
        self.node_mut(container).children.push(wrap);
        self.node_mut(wrap).children.push(list);
        self.node_mut(wrap).metrics = ElementMetrics::sized(wrap_width, 0.0);
        for i in 0..slides {
            let slide = self.create("li");
            let img = self.create("img");
            self.node_mut(img).image_source = Some(format!("slide-{i}.jpg"));
            self.node_mut(slide).children.push(img);
            self.node_mut(slide).metrics = slide_metrics;
            self.node_mut(list).children.push(slide);
        }
        self.register(selector, container);
        container
    }
}

impl Host for MockHost {
    fn capabilities(&self) -> Capabilities {
        self.caps.unwrap_or_default()
    }

    fn query(&mut self, selector: &str) -> Option<NodeId> {
        self.selectors.get(selector).copied()
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.node(node).children.clone()
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.create(tag)
    }

    fn clone_node(&mut self, node: NodeId) -> NodeId {
        let mut copy = self.node(node).clone();
        let children = std::mem::take(&mut copy.children);
        let id = NodeId(self.nodes.len() as u64);
        self.nodes.push(copy);
        for child in children {
            let child_copy = self.clone_node(child);
            self.node_mut(id).children.push(child_copy);
        }
        id
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.node_mut(parent).children.push(child);
    }

    fn prepend_child(&mut self, parent: NodeId, child: NodeId) {
        self.node_mut(parent).children.insert(0, child);
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        self.node_mut(node).text = text.to_owned();
    }

    fn set_index_tag(&mut self, node: NodeId, index: i64) {
        self.node_mut(node).index_tag = Some(index);
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if !self.has_class(node, class) {
            self.node_mut(node).classes.push(class.to_owned());
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        self.node_mut(node).classes.retain(|c| c != class);
    }

    fn metrics(&self, node: NodeId) -> ElementMetrics {
        self.node(node).metrics
    }

    fn set_width(&mut self, node: NodeId, px: f64) {
        self.node_mut(node).width = Some(px);
    }

    fn set_height(&mut self, node: NodeId, px: f64) {
        self.node_mut(node).height = Some(px);
    }

    fn set_opacity(&mut self, node: NodeId, value: f64) {
        self.node_mut(node).opacity = Some(value);
    }

    fn set_offset(&mut self, node: NodeId, x: f64, write: OffsetWrite) {
        self.node_mut(node).offset = Some((x, write));
    }

    fn image_source(&self, node: NodeId) -> Option<String> {
        if let Some(ref src) = self.node(node).image_source {
            return Some(src.clone());
        }
        self.node(node)
            .children
            .iter()
            .find_map(|&child| self.image_source(child))
    }

    fn set_thumbnail(&mut self, node: NodeId, src: &str) {
        self.node_mut(node).thumbnail = Some(src.to_owned());
    }

    fn listen(&mut self, target: ListenTarget, kind: Listen) {
        self.listens.push((target, kind));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_dom_shape() {
        let mut host = MockHost::new();
        let container = host.gallery_dom(".g", 3);
        let wrap = host.children(container)[0];
        let list = host.children(wrap)[0];
        assert_eq!(host.children(container).len(), 1);
        assert_eq!(host.children(wrap).len(), 1);
        assert_eq!(host.children(list).len(), 3);
    }

    #[test]
    fn query_resolves_registered_selector() {
        let mut host = MockHost::new();
        let container = host.gallery_dom(".g", 2);
        assert_eq!(host.query(".g"), Some(container));
        assert_eq!(host.query(".missing"), None);
    }

    #[test]
    fn clone_node_is_deep() {
        let mut host = MockHost::new();
        let container = host.gallery_dom(".g", 2);
        let wrap = host.children(container)[0];
        let list = host.children(wrap)[0];
        let slide = host.children(list)[0];

        let copy = host.clone_node(slide);
        assert_ne!(copy, slide);
        assert_eq!(host.children(copy).len(), 1);
        // Cloned subtree keeps the image source.
        assert_eq!(host.image_source(copy).as_deref(), Some("slide-0.jpg"));
    }

    #[test]
    fn image_source_searches_descendants() {
        let mut host = MockHost::new();
        let container = host.gallery_dom(".g", 1);
        let wrap = host.children(container)[0];
        let list = host.children(wrap)[0];
        let slide = host.children(list)[0];
        assert_eq!(host.image_source(slide).as_deref(), Some("slide-0.jpg"));
    }

    #[test]
    fn add_class_is_idempotent() {
        let mut host = MockHost::new();
        let node = host.create("div");
        host.add_class(node, "a");
        host.add_class(node, "a");
        assert_eq!(host.node(node).classes, vec!["a"]);
        host.remove_class(node, "a");
        assert!(host.node(node).classes.is_empty());
    }

    #[test]
    fn prepend_inserts_first() {
        let mut host = MockHost::new();
        let parent = host.create("ul");
        let a = host.create("li");
        let b = host.create("li");
        host.append_child(parent, a);
        host.prepend_child(parent, b);
        assert_eq!(host.children(parent), vec![b, a]);
    }
}
