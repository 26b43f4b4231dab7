#![forbid(unsafe_code)]

//! The augmented slide sequence.
//!
//! In slide mode the original N slides are padded with clones so the strip
//! can wrap without a visible jump: reading left to right the sequence is
//! `[tail-clones][original][head-clones]`. Every record carries a stable
//! `base_index` — its position in the ORIGINAL ordering — so originals span
//! `[0, N)` and clones sit at negative indexes or at `N` and above.

use swipedeck_core::event::NodeId;

/// One rendered slide in the augmented sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideRecord {
    /// Host element for this slide.
    pub node: NodeId,
    /// Stable identity in the original (pre-clone) ordering.
    pub base_index: i64,
}

/// The clone-padded slide sequence plus the current marker.
///
/// Exactly one record is current at any settled moment; mid-animation the
/// marker still points at the outgoing slide until the commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideStrip {
    records: Vec<SlideRecord>,
    count_base: usize,
    clone_offset: usize,
    current_display: usize,
}

impl SlideStrip {
    /// Build a strip from the augmented record list.
    ///
    /// The initial current slide is the first original, at display position
    /// `clone_offset`.
    #[must_use]
    pub fn new(records: Vec<SlideRecord>, count_base: usize, clone_offset: usize) -> Self {
        Self {
            records,
            count_base,
            clone_offset,
            current_display: clone_offset,
        }
    }

    /// Number of records in the augmented sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the strip holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of original (pre-clone) slides.
    #[must_use]
    pub fn count_base(&self) -> usize {
        self.count_base
    }

    /// Clones mirrored at each end.
    #[must_use]
    pub fn clone_offset(&self) -> usize {
        self.clone_offset
    }

    /// All records, left to right.
    #[must_use]
    pub fn records(&self) -> &[SlideRecord] {
        &self.records
    }

    /// Display position of the current slide.
    #[must_use]
    pub fn current_display(&self) -> usize {
        self.current_display
    }

    /// Base index of the current slide.
    #[must_use]
    pub fn current_base(&self) -> i64 {
        self.records[self.current_display].base_index
    }

    /// Host node at a display position.
    #[must_use]
    pub fn node_at(&self, display: usize) -> NodeId {
        self.records[display].node
    }

    /// Display position of a base index, clones included.
    ///
    /// Valid for `base` in `[-clone_offset, count_base + clone_offset)`.
    #[must_use]
    pub fn display_of_base(&self, base: i64) -> usize {
        (base + self.clone_offset as i64) as usize
    }

    /// Move the current marker to a display position.
    pub fn set_current(&mut self, display: usize) {
        debug_assert!(display < self.records.len());
        self.current_display = display;
    }

    /// Whether a base index refers to a cloned record.
    #[must_use]
    pub fn is_clone_base(&self, base: i64) -> bool {
        base < 0 || base >= self.count_base as i64
    }

    /// Fold a clone base index back onto its original.
    #[must_use]
    pub fn wrap_base(&self, base: i64) -> i64 {
        let n = self.count_base as i64;
        if base < 0 {
            base + n
        } else if base >= n {
            base - n
        } else {
            base
        }
    }
}
