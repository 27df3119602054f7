//! Pointer gesture session: swipe-to-navigate.
//!
//! Mouse and touch collapse to one pointer family before reaching the core;
//! the session only sees `{x, y}` payloads.

use serde::{Deserialize, Serialize};

/// Navigation intent produced by a completed swipe.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SwipeIntent {
    Next,
    Prev,
}

/// Transient drag state between pointer-down and pointer-up.
///
/// Events that do not match the session state (a move or up with no preceding
/// down, a duplicate up) are tolerated as no-ops.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct GestureSession {
    pub active: bool,
    pub start_x: f32,
    pub start_y: f32,
}

impl GestureSession {
    /// Pointer-down: open a session at the given position.
    pub fn begin(&mut self, x: f32, y: f32) {
        self.active = true;
        self.start_x = x;
        self.start_y = y;
    }

    /// Pointer-move: returns an intent once the swipe threshold is crossed on
    /// the dominant horizontal axis. Crossing the threshold ends the session,
    /// so one continuous drag navigates at most once.
    pub fn update(&mut self, x: f32, y: f32, threshold: f32) -> Option<SwipeIntent> {
        if !self.active {
            return None;
        }
        let delta_x = self.start_x - x;
        let delta_y = self.start_y - y;
        // Vertical-dominant movement is scroll intent, not navigation.
        if delta_y.abs() > delta_x.abs() {
            return None;
        }
        if delta_x > threshold {
            self.end();
            Some(SwipeIntent::Next)
        } else if delta_x < -threshold {
            self.end();
            Some(SwipeIntent::Prev)
        } else {
            None
        }
    }

    /// Pointer-up: close the session unconditionally.
    pub fn end(&mut self) {
        self.active = false;
    }
}
