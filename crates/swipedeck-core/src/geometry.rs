#![forbid(unsafe_code)]

//! Pixel-space box-model primitives.
//!
//! The gallery never talks to a layout engine directly; the host hands it a
//! [`ElementMetrics`] snapshot per element and these types turn that into the
//! occupied (outer) size used for step-distance math.

/// How padding and border contribute to an element's occupied size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxSizing {
    /// Padding and border are inside the declared width/height.
    BorderBox,
    /// Padding and border are added on top of the declared width/height.
    #[default]
    ContentBox,
}

/// Per-side pixel extents for margin, padding, or border.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edges {
    /// Top extent in pixels.
    pub top: f64,
    /// Right extent in pixels.
    pub right: f64,
    /// Bottom extent in pixels.
    pub bottom: f64,
    /// Left extent in pixels.
    pub left: f64,
}

impl Edges {
    /// All sides zero.
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Equal extent on every side.
    #[must_use]
    pub const fn uniform(px: f64) -> Self {
        Self {
            top: px,
            right: px,
            bottom: px,
            left: px,
        }
    }

    /// Combined left and right extent.
    #[inline]
    #[must_use]
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Combined top and bottom extent.
    #[inline]
    #[must_use]
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Computed-style snapshot for a single element.
///
/// `width`/`height` are the declared content dimensions as the host's style
/// computation reports them; whether padding and border sit inside those
/// numbers depends on `box_sizing`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementMetrics {
    /// Declared width in pixels.
    pub width: f64,
    /// Declared height in pixels.
    pub height: f64,
    /// Box-model mode governing padding/border accounting.
    pub box_sizing: BoxSizing,
    /// Margin extents.
    pub margin: Edges,
    /// Padding extents.
    pub padding: Edges,
    /// Border extents.
    pub border: Edges,
}

impl ElementMetrics {
    /// Metrics for a plain unstyled element of the given content size.
    #[must_use]
    pub const fn sized(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            box_sizing: BoxSizing::ContentBox,
            margin: Edges::ZERO,
            padding: Edges::ZERO,
            border: Edges::ZERO,
        }
    }

    /// Occupied horizontal size: margins always count; padding and border
    /// only under `ContentBox`.
    #[must_use]
    pub fn outer_width(&self) -> f64 {
        let mut sum = self.width + self.margin.horizontal();
        if self.box_sizing == BoxSizing::ContentBox {
            sum += self.padding.horizontal() + self.border.horizontal();
        }
        sum
    }

    /// Occupied vertical size, with the same box-model rule as
    /// [`outer_width`](Self::outer_width).
    #[must_use]
    pub fn outer_height(&self) -> f64 {
        let mut sum = self.height + self.margin.vertical();
        if self.box_sizing == BoxSizing::ContentBox {
            sum += self.padding.vertical() + self.border.vertical();
        }
        sum
    }

    /// Whether layout has settled enough to trust the width.
    ///
    /// Image-bearing slides report a non-positive width before the images
    /// load; measurement must be retried, not computed with.
    #[inline]
    #[must_use]
    pub fn is_measurable(&self) -> bool {
        self.width > 0.0
    }
}
