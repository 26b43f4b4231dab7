#![forbid(unsafe_code)]

//! Pager model.
//!
//! One entry per ORIGINAL slide, index-synchronized with the strip but a
//! fully independent subtree. The current pager entry moves at navigation
//! start, not at animation commit.

use swipedeck_core::event::NodeId;

use crate::host::{CURRENT_CLASS, Host};

/// The generated pager: root element, entry list, current marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerModel {
    root: NodeId,
    entries: Vec<NodeId>,
    current: usize,
}

impl PagerModel {
    /// Wrap the generated pager nodes. Entry 0 starts current.
    #[must_use]
    pub fn new(root: NodeId, entries: Vec<NodeId>) -> Self {
        Self {
            root,
            entries,
            current: 0,
        }
    }

    /// The pager root (click listener target).
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Entry nodes in order.
    #[must_use]
    pub fn entries(&self) -> &[NodeId] {
        &self.entries
    }

    /// Number of entries (= original slide count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pager has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the current entry.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Map a clicked node back to its entry index.
    #[must_use]
    pub fn entry_index(&self, node: NodeId) -> Option<usize> {
        self.entries.iter().position(|&e| e == node)
    }

    /// Move the current marker, updating classes through the host.
    pub fn set_current(&mut self, index: usize, host: &mut dyn Host) {
        debug_assert!(index < self.entries.len());
        host.remove_class(self.entries[self.current], CURRENT_CLASS);
        host.add_class(self.entries[index], CURRENT_CLASS);
        self.current = index;
    }
}
