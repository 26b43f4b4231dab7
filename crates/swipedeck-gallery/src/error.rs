#![forbid(unsafe_code)]

//! Gallery construction errors.

use std::fmt;

/// Why a gallery could not be constructed.
///
/// These are precondition failures of [`Gallery::init`](crate::Gallery::init);
/// a running gallery never errors, it degrades silently (dropped navigations,
/// deferred measurement).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryError {
    /// No element matched the init selector. Embedders that want the classic
    /// silent no-op can simply discard this.
    ContainerNotFound,
    /// The container does not satisfy the nesting contract:
    /// container → exactly one wrapper child → exactly one list child →
    /// one or more slide elements.
    InvalidStructure(&'static str),
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContainerNotFound => write!(f, "no element matched the gallery selector"),
            Self::InvalidStructure(detail) => {
                write!(f, "container violates the gallery nesting contract: {detail}")
            }
        }
    }
}

impl std::error::Error for GalleryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_container_not_found() {
        let msg = GalleryError::ContainerNotFound.to_string();
        assert!(msg.contains("selector"));
    }

    #[test]
    fn display_invalid_structure_includes_detail() {
        let msg = GalleryError::InvalidStructure("wrapper has two children").to_string();
        assert!(msg.contains("wrapper has two children"));
    }

    #[test]
    fn implements_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&GalleryError::ContainerNotFound);
    }
}
