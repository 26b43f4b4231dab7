#![forbid(unsafe_code)]

//! SwipeDeck gallery widget.
//!
//! Given a container holding a list of slide elements, produces a touch- and
//! click-navigable slideshow with two visual modes (crossfade, horizontal
//! slide), an optional pager (plain or thumbnail), optional prev/next
//! controls, and optional autoplay.
//!
//! The widget's responsibility stops at the subtree it is given. Element
//! construction, style measurement, event delivery, and frame scheduling all
//! live behind the [`Host`] trait; the gallery itself is a deterministic
//! state machine driven by [`Gallery::handle`] and [`Gallery::tick`].
//!
//! ```
//! use swipedeck_gallery::mock::MockHost;
//! use swipedeck_gallery::{Gallery, GalleryOptions};
//!
//! let mut host = MockHost::new();
//! host.gallery_dom(".deck", 4);
//! let gallery = Gallery::init(&mut host, ".deck", GalleryOptions::default()).unwrap();
//! assert_eq!(gallery.current_base_index(), 0);
//! ```

pub mod autoplay;
pub mod build;
pub mod config;
pub mod engine;
pub mod error;
pub mod gallery;
pub mod host;
pub mod input;
pub mod layout;
pub mod mock;
pub mod pager;
pub mod slides;
pub mod state;

pub use config::{GalleryConfig, GalleryOptions, Mode};
pub use error::GalleryError;
pub use gallery::Gallery;
pub use host::Host;
