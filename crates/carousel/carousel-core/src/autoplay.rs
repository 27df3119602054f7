//! Autoplay: a pausable countdown that advances the carousel on expiry.

use serde::{Deserialize, Serialize};

use crate::config::Direction;

/// Timed auto-advance state, counted down in engine ticks.
///
/// Once stopped (disabled, or advancing became impossible) the countdown is
/// never re-armed automatically; re-entry happens by replacing the carousel
/// configuration.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Autoplay {
    enabled: bool,
    direction: Direction,
    hover_pause: bool,
    /// Full interval in seconds.
    interval: f32,
    /// Seconds until the next advance; `None` while paused or stopped.
    pending: Option<f32>,
    stopped: bool,
}

impl Autoplay {
    pub fn new(enabled: bool, direction: Direction, interval_ms: u64, hover_pause: bool) -> Self {
        let interval = interval_ms as f32 / 1000.0;
        Self {
            enabled,
            direction,
            hover_pause,
            interval,
            pending: enabled.then_some(interval),
            stopped: !enabled,
        }
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Advance the countdown; `true` means one auto-advance fires this tick.
    /// The countdown re-arms itself after firing.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(left) = self.pending.as_mut() else {
            return false;
        };
        if *left > dt {
            *left -= dt;
            return false;
        }
        self.pending = Some(self.interval);
        true
    }

    /// Pointer entered the carousel surface: pause the pending countdown.
    pub fn pointer_enter(&mut self) {
        if self.enabled && self.hover_pause {
            self.pending = None;
        }
    }

    /// Pointer left: re-arm a full interval, unless autoplay already stopped.
    pub fn pointer_leave(&mut self) {
        if self.enabled && self.hover_pause && !self.stopped {
            self.pending = Some(self.interval);
        }
    }

    /// Advancing became impossible: stop rescheduling for good.
    pub fn stop(&mut self) {
        self.pending = None;
        self.stopped = true;
    }
}
