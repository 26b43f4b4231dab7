#![forbid(unsafe_code)]

//! Gallery configuration.
//!
//! [`GalleryConfig`] is immutable after init. Embedders pass a
//! [`GalleryOptions`] whose `Some` fields overwrite the corresponding
//! defaults; everything left `None` keeps its default, so an override can
//! never invent an unknown key.

use std::time::Duration;

/// Visual strategy for slide changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Crossfade opacity between slides in place.
    Fade,
    /// Move a clone-padded horizontal strip.
    #[default]
    Slide,
}

/// Immutable gallery configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    /// Display strategy.
    pub mode: Mode,
    /// Enable autoplay.
    pub auto: bool,
    /// Enable touch handling.
    pub swipe: bool,
    /// Show the edges of the previous/next slides; forces the step unit to
    /// a single slide's outer width and `show_slide` to 1.
    pub center_mode: bool,
    /// Slides visible at once. Accepted but only 1 is functionally
    /// supported; values above 1 merely widen the clone buffer.
    pub show_slide: usize,
    /// Animation duration.
    pub transition_speed: Duration,
    /// Extra class applied to the generated pager root.
    pub pager_user_class: String,
    /// Extra class applied to the generated prev/next controls.
    pub arrow_user_class: String,
    /// Compute slide height from width × `aspect_ratio` instead of
    /// measuring, for absolutely-positioned slide contents.
    pub use_absolute: bool,
    /// Height ratio used when `use_absolute` is set.
    pub aspect_ratio: f64,
    /// Selector for the element the aspect-ratio height is based on.
    pub absolute_target: String,
    /// Autoplay interval.
    pub auto_delay: Duration,
    /// Generate the pager.
    pub use_pager: bool,
    /// Give pager entries cover-fit thumbnails from the slide images.
    pub use_thumbnail: bool,
    /// Generate the prev/next controls.
    pub use_arrow: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Slide,
            auto: false,
            swipe: true,
            center_mode: false,
            show_slide: 1,
            transition_speed: Duration::from_millis(400),
            pager_user_class: String::new(),
            arrow_user_class: String::new(),
            use_absolute: false,
            aspect_ratio: 0.525,
            absolute_target: "img".to_owned(),
            auto_delay: Duration::from_millis(4000),
            use_pager: true,
            use_thumbnail: false,
            use_arrow: true,
        }
    }
}

impl GalleryConfig {
    /// Defaults with `options` applied on top.
    #[must_use]
    pub fn with_options(options: &GalleryOptions) -> Self {
        let mut config = Self::default();
        options.apply_to(&mut config);
        config.normalize();
        config
    }

    /// Clamp dependent fields into their supported ranges.
    ///
    /// Center mode needs two clones per end to keep the margins covered, so
    /// it pins `show_slide` back to 1.
    pub(crate) fn normalize(&mut self) {
        if self.center_mode {
            self.show_slide = 1;
        }
        self.show_slide = self.show_slide.max(1);
    }

    /// Clones mirrored at each end of the strip in slide mode.
    #[must_use]
    pub fn clone_offset(&self, count_base: usize) -> usize {
        if self.mode != Mode::Slide || count_base < 2 {
            return 0;
        }
        if self.center_mode { 2 } else { self.show_slide }
    }
}

/// Per-key overrides merged over [`GalleryConfig::default`].
///
/// Each field mirrors one recognized option; `None` leaves the default
/// untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryOptions {
    /// Override [`GalleryConfig::mode`].
    pub mode: Option<Mode>,
    /// Override [`GalleryConfig::auto`].
    pub auto: Option<bool>,
    /// Override [`GalleryConfig::swipe`].
    pub swipe: Option<bool>,
    /// Override [`GalleryConfig::center_mode`].
    pub center_mode: Option<bool>,
    /// Override [`GalleryConfig::show_slide`].
    pub show_slide: Option<usize>,
    /// Override [`GalleryConfig::transition_speed`].
    pub transition_speed: Option<Duration>,
    /// Override [`GalleryConfig::pager_user_class`].
    pub pager_user_class: Option<String>,
    /// Override [`GalleryConfig::arrow_user_class`].
    pub arrow_user_class: Option<String>,
    /// Override [`GalleryConfig::use_absolute`].
    pub use_absolute: Option<bool>,
    /// Override [`GalleryConfig::aspect_ratio`].
    pub aspect_ratio: Option<f64>,
    /// Override [`GalleryConfig::absolute_target`].
    pub absolute_target: Option<String>,
    /// Override [`GalleryConfig::auto_delay`].
    pub auto_delay: Option<Duration>,
    /// Override [`GalleryConfig::use_pager`].
    pub use_pager: Option<bool>,
    /// Override [`GalleryConfig::use_thumbnail`].
    pub use_thumbnail: Option<bool>,
    /// Override [`GalleryConfig::use_arrow`].
    pub use_arrow: Option<bool>,
}

impl GalleryOptions {
    /// No overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display mode.
    #[must_use]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Enable or disable autoplay.
    #[must_use]
    pub fn auto(mut self, auto: bool) -> Self {
        self.auto = Some(auto);
        self
    }

    /// Enable or disable touch handling.
    #[must_use]
    pub fn swipe(mut self, swipe: bool) -> Self {
        self.swipe = Some(swipe);
        self
    }

    /// Enable or disable center mode.
    #[must_use]
    pub fn center_mode(mut self, center_mode: bool) -> Self {
        self.center_mode = Some(center_mode);
        self
    }

    /// Set the slides-visible-at-once count.
    #[must_use]
    pub fn show_slide(mut self, show_slide: usize) -> Self {
        self.show_slide = Some(show_slide);
        self
    }

    /// Set the animation duration.
    #[must_use]
    pub fn transition_speed(mut self, speed: Duration) -> Self {
        self.transition_speed = Some(speed);
        self
    }

    /// Set the user class for the pager root.
    #[must_use]
    pub fn pager_user_class(mut self, class: impl Into<String>) -> Self {
        self.pager_user_class = Some(class.into());
        self
    }

    /// Set the user class for the prev/next controls.
    #[must_use]
    pub fn arrow_user_class(mut self, class: impl Into<String>) -> Self {
        self.arrow_user_class = Some(class.into());
        self
    }

    /// Enable aspect-ratio height computation.
    #[must_use]
    pub fn use_absolute(mut self, use_absolute: bool) -> Self {
        self.use_absolute = Some(use_absolute);
        self
    }

    /// Set the aspect ratio for absolute-height mode.
    #[must_use]
    pub fn aspect_ratio(mut self, ratio: f64) -> Self {
        self.aspect_ratio = Some(ratio);
        self
    }

    /// Set the reference selector for absolute-height mode.
    #[must_use]
    pub fn absolute_target(mut self, target: impl Into<String>) -> Self {
        self.absolute_target = Some(target.into());
        self
    }

    /// Set the autoplay interval.
    #[must_use]
    pub fn auto_delay(mut self, delay: Duration) -> Self {
        self.auto_delay = Some(delay);
        self
    }

    /// Enable or disable the pager.
    #[must_use]
    pub fn use_pager(mut self, use_pager: bool) -> Self {
        self.use_pager = Some(use_pager);
        self
    }

    /// Enable or disable pager thumbnails.
    #[must_use]
    pub fn use_thumbnail(mut self, use_thumbnail: bool) -> Self {
        self.use_thumbnail = Some(use_thumbnail);
        self
    }

    /// Enable or disable the prev/next controls.
    #[must_use]
    pub fn use_arrow(mut self, use_arrow: bool) -> Self {
        self.use_arrow = Some(use_arrow);
        self
    }

    /// Overwrite the `Some` fields onto `config`.
    pub fn apply_to(&self, config: &mut GalleryConfig) {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(auto) = self.auto {
            config.auto = auto;
        }
        if let Some(swipe) = self.swipe {
            config.swipe = swipe;
        }
        if let Some(center_mode) = self.center_mode {
            config.center_mode = center_mode;
        }
        if let Some(show_slide) = self.show_slide {
            config.show_slide = show_slide;
        }
        if let Some(speed) = self.transition_speed {
            config.transition_speed = speed;
        }
        if let Some(ref class) = self.pager_user_class {
            config.pager_user_class = class.clone();
        }
        if let Some(ref class) = self.arrow_user_class {
            config.arrow_user_class = class.clone();
        }
        if let Some(use_absolute) = self.use_absolute {
            config.use_absolute = use_absolute;
        }
        if let Some(ratio) = self.aspect_ratio {
            config.aspect_ratio = ratio;
        }
        if let Some(ref target) = self.absolute_target {
            config.absolute_target = target.clone();
        }
        if let Some(delay) = self.auto_delay {
            config.auto_delay = delay;
        }
        if let Some(use_pager) = self.use_pager {
            config.use_pager = use_pager;
        }
        if let Some(use_thumbnail) = self.use_thumbnail {
            config.use_thumbnail = use_thumbnail;
        }
        if let Some(use_arrow) = self.use_arrow {
            config.use_arrow = use_arrow;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = GalleryConfig::default();
        assert_eq!(config.mode, Mode::Slide);
        assert!(!config.auto);
        assert!(config.swipe);
        assert!(!config.center_mode);
        assert_eq!(config.show_slide, 1);
        assert_eq!(config.transition_speed, Duration::from_millis(400));
        assert_eq!(config.auto_delay, Duration::from_millis(4000));
        assert!((config.aspect_ratio - 0.525).abs() < f64::EPSILON);
        assert_eq!(config.absolute_target, "img");
        assert!(config.use_pager);
        assert!(!config.use_thumbnail);
        assert!(config.use_arrow);
    }

    #[test]
    fn empty_options_keep_defaults() {
        let config = GalleryConfig::with_options(&GalleryOptions::default());
        assert_eq!(config, GalleryConfig::default());
    }

    #[test]
    fn options_overwrite_only_set_fields() {
        let options = GalleryOptions::new()
            .mode(Mode::Fade)
            .auto(true)
            .transition_speed(Duration::from_millis(250));
        let config = GalleryConfig::with_options(&options);
        assert_eq!(config.mode, Mode::Fade);
        assert!(config.auto);
        assert_eq!(config.transition_speed, Duration::from_millis(250));
        // Untouched fields keep their defaults.
        assert!(config.swipe);
        assert!(config.use_pager);
    }

    #[test]
    fn center_mode_pins_show_slide() {
        let options = GalleryOptions::new().center_mode(true).show_slide(3);
        let config = GalleryConfig::with_options(&options);
        assert_eq!(config.show_slide, 1);
    }

    #[test]
    fn show_slide_clamped_to_at_least_one() {
        let options = GalleryOptions::new().show_slide(0);
        let config = GalleryConfig::with_options(&options);
        assert_eq!(config.show_slide, 1);
    }

    #[test]
    fn clone_offset_slide_mode() {
        let config = GalleryConfig::default();
        assert_eq!(config.clone_offset(4), 1);
    }

    #[test]
    fn clone_offset_center_mode_is_two() {
        let config = GalleryConfig::with_options(&GalleryOptions::new().center_mode(true));
        assert_eq!(config.clone_offset(4), 2);
    }

    #[test]
    fn clone_offset_fade_mode_is_zero() {
        let config = GalleryConfig::with_options(&GalleryOptions::new().mode(Mode::Fade));
        assert_eq!(config.clone_offset(4), 0);
    }

    #[test]
    fn clone_offset_single_slide_is_zero() {
        let config = GalleryConfig::default();
        assert_eq!(config.clone_offset(1), 0);
    }
}
