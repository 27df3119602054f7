//! Output contracts from the carousel engine.
//!
//! Outputs carry one render-ready placement per item plus the semantic events
//! of the tick. The rendering collaborator applies placements verbatim and
//! needs no ring arithmetic of its own.

use serde::{Deserialize, Serialize};

/// Render-ready positioning for one slide this tick.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SlidePlacement {
    pub index: usize,
    pub is_active: bool,
    /// Slot on the left side (0 = nearest) when this slide is a left neighbor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_slot: Option<usize>,
    /// Slot on the right side (0 = nearest) when this slide is a right neighbor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_slot: Option<usize>,
    /// Simulated depth: magnitude of the negative translateZ, in px.
    pub depth_z: f32,
    /// Y-axis rotation in degrees; the sign encodes the side.
    pub rotation_deg: f32,
    /// Horizontal offset from the active slide, in px.
    pub translate_x: f32,
    /// Vertical offset for stacked spacing, in px.
    pub top: f32,
    pub z_index: i32,
    pub opacity: f32,
    pub visible: bool,
}

/// Slide box computed from the viewport measurement and configured aspect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideSize {
    pub width: f32,
    pub height: f32,
}

/// Discrete lifecycle notifications emitted during a tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CarouselEvent {
    /// Fired before the active index mutates.
    BeforeSlideChange { index: usize },
    /// Fired after the active index changed.
    SlideChanged { index: usize },
    /// Fired when navigation steps off the terminal slide.
    LastSlideReached { index: usize },
}

/// Outputs returned by `Engine::update()`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub placements: Vec<SlidePlacement>,
    #[serde(default)]
    pub events: Vec<CarouselEvent>,
    #[serde(default)]
    pub slide_size: SlideSize,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.placements.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_event(&mut self, event: CarouselEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty() && self.events.is_empty()
    }
}
