#![forbid(unsafe_code)]

//! One-shot DOM augmentation.
//!
//! Validates the container's nesting contract, splices wraparound clones
//! into the slide list, tags every slide with its stable base index, and
//! generates the pager and prev/next controls. Runs exactly once, at
//! [`Gallery::init`](crate::Gallery::init); everything after construction
//! only mutates what is built here.

use swipedeck_core::event::{Listen, ListenTarget, NodeId};

use crate::config::GalleryConfig;
use crate::error::GalleryError;
use crate::host::{
    ARROW_NEXT_CLASS, ARROW_PREV_CLASS, CURRENT_CLASS, Host, PAGER_ELEM_CLASS,
};
use crate::pager::PagerModel;
use crate::slides::{SlideRecord, SlideStrip};

/// Generated previous/next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrows {
    /// The previous control.
    pub prev: NodeId,
    /// The next control.
    pub next: NodeId,
}

/// Everything construction produced.
#[derive(Debug)]
pub struct Built {
    /// The wrapper element (viewport).
    pub wrap: NodeId,
    /// The slide list element (the strip the engine moves).
    pub list: NodeId,
    /// Clone-padded slide sequence.
    pub strip: SlideStrip,
    /// Generated pager, when enabled and the gallery is navigable.
    pub pager: Option<PagerModel>,
    /// Generated prev/next controls, when enabled and navigable.
    pub arrows: Option<Arrows>,
}

/// Validate the container and build the augmented structure.
pub fn build(
    host: &mut dyn Host,
    container: NodeId,
    config: &GalleryConfig,
) -> Result<Built, GalleryError> {
    let (wrap, list, originals) = validate(host, container)?;
    let count = originals.len();
    let offset = config.clone_offset(count);
    let navigable = count > 1;

    splice_clones(host, list, &originals, offset);
    let strip = tag_strip(host, list, count, offset);
    host.add_class(strip.node_at(strip.current_display()), CURRENT_CLASS);

    let pager = if navigable && config.use_pager {
        Some(build_pager(host, container, config, &strip))
    } else {
        None
    };
    let arrows = if navigable && config.use_arrow {
        Some(build_arrows(host, container, config))
    } else {
        None
    };

    if navigable && config.swipe {
        host.listen(ListenTarget::Node(list), Listen::Touch);
    }
    host.listen(ListenTarget::Window, Listen::Resize);
    host.listen(ListenTarget::Window, Listen::Load);

    Ok(Built {
        wrap,
        list,
        strip,
        pager,
        arrows,
    })
}

fn validate(
    host: &mut dyn Host,
    container: NodeId,
) -> Result<(NodeId, NodeId, Vec<NodeId>), GalleryError> {
    let container_children = host.children(container);
    let &[wrap] = &container_children[..] else {
        return Err(GalleryError::InvalidStructure(
            "container must hold exactly one wrapper element",
        ));
    };
    let wrap_children = host.children(wrap);
    let &[list] = &wrap_children[..] else {
        return Err(GalleryError::InvalidStructure(
            "wrapper must hold exactly one slide list element",
        ));
    };
    let originals = host.children(list);
    if originals.is_empty() {
        return Err(GalleryError::InvalidStructure(
            "slide list must hold at least one slide element",
        ));
    }
    Ok((wrap, list, originals))
}

/// Append clones of the first `offset` slides and prepend clones of the
/// last `offset`, so the augmented order reads
/// `[tail-clones][originals][head-clones]`.
fn splice_clones(host: &mut dyn Host, list: NodeId, originals: &[NodeId], offset: usize) {
    let n = originals.len();
    for i in 0..offset {
        let copy = host.clone_node(originals[i % n]);
        host.append_child(list, copy);
    }
    // Prepending the last slide first, then the one before it, leaves the
    // tail clones in ascending base order.
    for i in 0..offset {
        let copy = host.clone_node(originals[n - 1 - (i % n)]);
        host.prepend_child(list, copy);
    }
}

/// Re-collect the augmented children and tag each with its base index.
fn tag_strip(host: &mut dyn Host, list: NodeId, count: usize, offset: usize) -> SlideStrip {
    let records: Vec<SlideRecord> = host
        .children(list)
        .into_iter()
        .enumerate()
        .map(|(k, node)| {
            let base_index = k as i64 - offset as i64;
            host.set_index_tag(node, base_index);
            SlideRecord { node, base_index }
        })
        .collect();
    SlideStrip::new(records, count, offset)
}

fn build_pager(
    host: &mut dyn Host,
    container: NodeId,
    config: &GalleryConfig,
    strip: &SlideStrip,
) -> PagerModel {
    let root = host.create_element("div");
    if !config.pager_user_class.is_empty() {
        host.add_class(root, &config.pager_user_class);
    }
    let ul = host.create_element("ul");
    host.append_child(root, ul);

    let entries: Vec<NodeId> = (0..strip.count_base())
        .map(|i| {
            let entry = host.create_element("li");
            host.add_class(entry, PAGER_ELEM_CLASS);
            host.set_text(entry, &(i + 1).to_string());
            host.set_index_tag(entry, i as i64);
            if config.use_thumbnail {
                let slide = strip.node_at(strip.display_of_base(i as i64));
                // Slides without an image keep the numbered entry.
                if let Some(src) = host.image_source(slide) {
                    host.set_thumbnail(entry, &src);
                }
            }
            host.append_child(ul, entry);
            entry
        })
        .collect();

    host.add_class(entries[0], CURRENT_CLASS);
    host.append_child(container, root);
    host.listen(ListenTarget::Node(root), Listen::Click);
    PagerModel::new(root, entries)
}

fn build_arrows(host: &mut dyn Host, container: NodeId, config: &GalleryConfig) -> Arrows {
    let prev = arrow(host, container, config, ARROW_PREV_CLASS, "Prev");
    let next = arrow(host, container, config, ARROW_NEXT_CLASS, "Next");
    Arrows { prev, next }
}

fn arrow(
    host: &mut dyn Host,
    container: NodeId,
    config: &GalleryConfig,
    class: &str,
    label: &str,
) -> NodeId {
    let control = host.create_element("div");
    host.add_class(control, class);
    if !config.arrow_user_class.is_empty() {
        host.add_class(control, &config.arrow_user_class);
    }
    let text = host.create_element("span");
    host.set_text(text, label);
    host.append_child(control, text);
    host.append_child(container, control);
    host.listen(ListenTarget::Node(control), Listen::Click);
    control
}
