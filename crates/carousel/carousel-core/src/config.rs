//! Carousel configuration: layout policy, animation timing, input thresholds.

use serde::{Deserialize, Serialize};

use crate::error::CarouselError;

/// Which side receives the extra neighbor when the number of side slots is odd.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bias {
    #[default]
    Left,
    Right,
}

/// Rotational direction used by autoplay.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

/// Immutable per-carousel policy and timing. Replaced wholesale via
/// `Engine::set_config`; never mutated incrementally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Number of slides visible at once, active slide included.
    pub visible_count: usize,
    /// Tie-break side for the odd extra neighbor slot.
    pub bias: Bias,
    /// Wrap from the terminal slide back to the start.
    pub looping: bool,
    /// Flip the rotational sense of the ring.
    pub reverse: bool,
    /// Suppress side slots that would point past the ends of the item list.
    pub one_directional: bool,
    /// Render side slides flat: no depth offset, no rotation.
    pub disable_3d: bool,
    /// Total duration of a multi-step walk animation.
    pub animation_duration_ms: u64,
    pub autoplay: bool,
    pub autoplay_interval_ms: u64,
    /// Pause the autoplay countdown while the pointer is over the carousel.
    pub autoplay_hover_pause: bool,
    pub autoplay_direction: Direction,
    /// Minimum horizontal drag distance (px) before a swipe navigates.
    pub swipe_threshold: f32,
    /// Active slide at construction time. Clamped into range.
    pub start_index: usize,
    /// Nominal slide width in px, border excluded.
    pub width: f32,
    /// Nominal slide height in px, border excluded.
    pub height: f32,
    pub border: f32,
    /// Horizontal slot spacing in px; `None` derives spacing from the width.
    pub space: Option<f32>,
    /// Side-slide rotation in degrees.
    pub perspective: f32,
    /// Base depth offset (px) for side slides.
    pub inverse_scaling: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            visible_count: 5,
            bias: Bias::Left,
            looping: false,
            reverse: false,
            one_directional: false,
            disable_3d: false,
            animation_duration_ms: 500,
            autoplay: false,
            autoplay_interval_ms: 2000,
            autoplay_hover_pause: false,
            autoplay_direction: Direction::Ltr,
            swipe_threshold: 10.0,
            start_index: 0,
            width: 360.0,
            height: 270.0,
            border: 1.0,
            space: None,
            perspective: 35.0,
            inverse_scaling: 300.0,
        }
    }
}

impl CarouselConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Strict validation for adapters that prefer an error over clamping.
    /// The engine itself normalizes instead (see `Engine::new`).
    pub fn validate(&self) -> crate::Result<()> {
        if self.visible_count == 0 {
            return Err(CarouselError::invalid_config("visible_count must be >= 1"));
        }
        if self.animation_duration_ms == 0 {
            return Err(CarouselError::invalid_config(
                "animation_duration_ms must be > 0",
            ));
        }
        if self.autoplay && self.autoplay_interval_ms == 0 {
            return Err(CarouselError::invalid_config(
                "autoplay_interval_ms must be > 0 when autoplay is enabled",
            ));
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(CarouselError::invalid_config(
                "swipe_threshold must be finite and non-negative",
            ));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(CarouselError::invalid_config(
                "slide width and height must be positive",
            ));
        }
        if self.border < 0.0 {
            return Err(CarouselError::invalid_config("border must be non-negative"));
        }
        Ok(())
    }

    /// Validate against a concrete item count.
    pub fn validate_for(&self, total: usize) -> crate::Result<()> {
        self.validate()?;
        if total == 0 {
            return Err(CarouselError::EmptyCarousel);
        }
        if self.start_index >= total {
            return Err(CarouselError::IndexOutOfRange {
                index: self.start_index,
                total,
            });
        }
        Ok(())
    }
}
