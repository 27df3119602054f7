//! Input contracts for the carousel engine.
//!
//! The embedding adapter collects raw UI events and navigation commands and
//! passes them into `Engine::update()` each tick.

use serde::{Deserialize, Serialize};

/// Per-tick input batch.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Inputs {
    /// Navigation commands applied before stepping.
    #[serde(default)]
    pub commands: Vec<Command>,
    /// Pointer events applied before commands.
    #[serde(default)]
    pub pointer_events: Vec<PointerEvent>,
}

impl Inputs {
    /// An empty batch for plain time-advance ticks.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn command(command: Command) -> Self {
        Self {
            commands: vec![command],
            ..Self::default()
        }
    }

    pub fn pointer(event: PointerEvent) -> Self {
        Self {
            pointer_events: vec![event],
            ..Self::default()
        }
    }
}

/// Navigation and measurement commands.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Advance one slide in the configured direction.
    Next,
    /// Step back one slide.
    Prev,
    /// Walk to a slide through its intermediate neighbors.
    GoTo { index: usize },
    /// Jump to a slide immediately, without animation.
    JumpTo { index: usize },
    /// Width measurement re-supplied by the embedding viewport.
    SetViewport { width: f32 },
}

/// Unified pointer payload: mouse and touch collapse to one event family
/// before reaching the core.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
    /// Pointer entered the carousel surface (autoplay hover-pause).
    Enter,
    /// Pointer left the carousel surface.
    Leave,
}
