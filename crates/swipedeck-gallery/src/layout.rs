#![forbid(unsafe_code)]

//! Measurement and pixel layout.
//!
//! [`Layout::measure`] reads the wrapper and a reference slide through the
//! host and resolves the step unit, per-slide size, and strip width. When
//! layout has not settled yet (images still loading report a non-positive
//! width) it returns [`MeasureRetry`] instead of computing with garbage;
//! the gallery schedules a deferred re-measure.

use std::time::Duration;

use swipedeck_core::event::NodeId;
use swipedeck_core::geometry::ElementMetrics;

use crate::config::{GalleryConfig, Mode};
use crate::host::Host;

/// Fixed delay before re-measuring an unsettled layout.
pub const MEASURE_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Measurement was not possible yet; try again after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureRetry {
    /// How long to wait before the next attempt.
    pub delay: Duration,
}

/// Resolved pixel layout for the current container size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Wrapper width in pixels.
    pub wrap_width: f64,
    /// Step unit: one slide's outer width in center mode, else the wrapper
    /// width.
    pub elem_width: f64,
    /// Content width applied to every slide.
    pub slide_width: f64,
    /// Content height applied to every slide.
    pub slide_height: f64,
    /// Outer height applied to the wrapper and list.
    pub outer_height: f64,
    /// Total strip width, clones included.
    pub list_width: f64,
}

impl Layout {
    /// Measure the wrapper and the reference slide.
    ///
    /// `reference` is the first original slide; `augmented_count` is the
    /// strip length including clones.
    pub fn measure(
        host: &dyn Host,
        config: &GalleryConfig,
        wrap: NodeId,
        reference: NodeId,
        augmented_count: usize,
    ) -> Result<Self, MeasureRetry> {
        let wrap_width = host.metrics(wrap).width;
        let metrics = host.metrics(reference);
        if !metrics.is_measurable() {
            return Err(MeasureRetry {
                delay: MEASURE_RETRY_DELAY,
            });
        }

        let elem_width = if config.center_mode {
            metrics.outer_width()
        } else {
            wrap_width
        };
        let slide_height = Self::slide_height(config, &metrics);

        Ok(Self {
            wrap_width,
            elem_width,
            slide_width: metrics.width,
            slide_height,
            outer_height: metrics.outer_height(),
            list_width: elem_width * augmented_count as f64,
        })
    }

    fn slide_height(config: &GalleryConfig, metrics: &ElementMetrics) -> f64 {
        if config.use_absolute {
            metrics.width * config.aspect_ratio
        } else {
            metrics.height
        }
    }

    /// Half the leftover wrapper width, so a narrower step unit sits
    /// centered with the neighbors peeking in from both sides.
    #[must_use]
    pub fn centering_adjustment(&self) -> f64 {
        (self.wrap_width - self.elem_width) / 2.0
    }

    /// Strip offset that puts `base` in the viewport.
    #[must_use]
    pub fn offset_for(&self, base: i64, clone_offset: usize) -> f64 {
        -self.elem_width * (base + clone_offset as i64) as f64 + self.centering_adjustment()
    }

    /// One third of the step unit: the drag distance past which a release
    /// commits to the neighboring slide.
    #[must_use]
    pub fn release_threshold(&self) -> f64 {
        self.elem_width / 3.0
    }
}
