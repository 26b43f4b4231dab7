#![forbid(unsafe_code)]

//! Host capability descriptor.
//!
//! Capability branching is resolved exactly once, when a gallery is
//! constructed: the host is probed, the answers are captured in a
//! [`Capabilities`] value, and everything downstream consumes that value
//! instead of re-probing per call.

use bitflags::bitflags;

bitflags! {
    /// What the host can do, probed once at construction.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Capabilities: u8 {
        /// 2D translation offsets are supported for positioning.
        const TRANSFORM = 1 << 0;
        /// A frame-rate-driven callback scheduler is available; without it
        /// the host falls back to a fixed ~60 Hz timer for ticks.
        const FRAME_CALLBACK = 1 << 1;
        /// Computed-style queries return live layout values.
        const COMPUTED_STYLE = 1 << 2;
    }
}

impl Default for Capabilities {
    /// A fully capable host.
    fn default() -> Self {
        Self::all()
    }
}

/// How horizontal strip offsets are written to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetWrite {
    /// Preferred: a 2D horizontal translation.
    Translate,
    /// Fallback for hosts without [`Capabilities::TRANSFORM`]: an absolute
    /// left position.
    Left,
}

impl Capabilities {
    /// The offset strategy implied by this capability set.
    #[must_use]
    pub fn offset_write(self) -> OffsetWrite {
        if self.contains(Self::TRANSFORM) {
            OffsetWrite::Translate
        } else {
            OffsetWrite::Left
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_fully_capable() {
        let caps = Capabilities::default();
        assert!(caps.contains(Capabilities::TRANSFORM));
        assert!(caps.contains(Capabilities::FRAME_CALLBACK));
        assert!(caps.contains(Capabilities::COMPUTED_STYLE));
    }

    #[test]
    fn transform_selects_translate() {
        assert_eq!(
            Capabilities::TRANSFORM.offset_write(),
            OffsetWrite::Translate
        );
    }

    #[test]
    fn missing_transform_selects_left() {
        let caps = Capabilities::FRAME_CALLBACK | Capabilities::COMPUTED_STYLE;
        assert_eq!(caps.offset_write(), OffsetWrite::Left);
    }

    #[test]
    fn empty_capability_set_selects_left() {
        assert_eq!(Capabilities::empty().offset_write(), OffsetWrite::Left);
    }
}
