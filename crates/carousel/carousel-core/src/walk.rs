//! Multi-step walk animation: a far jump decomposed into single ring steps.
//!
//! A walk is an explicit state value ticked by `Engine::update`; there is no
//! timer recursion, and cancellation is dropping the value.

use serde::{Deserialize, Serialize};

use crate::ring::NeighborLayout;

/// In-flight multi-step transition toward a target slide.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Walk {
    /// Steps left to take; the sign encodes the direction (negative = backward).
    remaining: i32,
    /// Seconds between steps.
    step_interval: f32,
    /// Seconds until the next step is due; zero means due now.
    until_next: f32,
}

impl Walk {
    /// Plan a walk of `steps` ring steps spread over `duration_ms` total.
    /// Returns `None` for a zero-step plan. The first step is due immediately.
    pub fn new(steps: i32, duration_ms: u64) -> Option<Self> {
        if steps == 0 {
            return None;
        }
        let step_interval = duration_ms as f32 / 1000.0 / steps.unsigned_abs() as f32;
        Some(Self {
            remaining: steps,
            step_interval,
            until_next: 0.0,
        })
    }

    /// True while the walk still has steps to take.
    #[inline]
    pub fn in_flight(&self) -> bool {
        self.remaining != 0
    }

    /// True when the walk moves in the forward (next) direction.
    #[inline]
    pub fn forward(&self) -> bool {
        self.remaining > 0
    }

    #[inline]
    pub fn remaining_steps(&self) -> i32 {
        self.remaining
    }

    /// Consume `dt` seconds of the cadence, returning how many steps fire now.
    pub fn advance(&mut self, dt: f32) -> u32 {
        let mut fired = 0;
        let mut budget = dt;
        while self.remaining != 0 {
            if self.until_next > budget {
                self.until_next -= budget;
                break;
            }
            budget -= self.until_next;
            self.until_next = self.step_interval;
            self.remaining -= self.remaining.signum();
            fired += 1;
        }
        fired
    }
}

/// Signed step count for a walk from `current` to `target`.
///
/// Without looping the walk runs the straight list distance. With looping the
/// target is resolved against the visible neighbor sets: a slide `k` slots
/// into a side is `k + 1` steps away. A looped target on the hidden far side
/// of the ring falls back to the shortest wrap distance, forward on a tie.
pub fn plan_steps(
    current: usize,
    target: usize,
    total: usize,
    looping: bool,
    reverse: bool,
    layout: &NeighborLayout,
) -> i32 {
    if total == 0 || target == current {
        return 0;
    }
    let sense: i64 = if reverse { -1 } else { 1 };
    if !looping {
        return (sense * (target as i64 - current as i64)) as i32;
    }
    if let Some(pos) = layout.left.iter().position(|&i| i == target) {
        return -(1 + pos as i32);
    }
    if let Some(pos) = layout.right.iter().position(|&i| i == target) {
        return 1 + pos as i32;
    }
    let mut distance = (target as i64 - current as i64).rem_euclid(total as i64);
    if 2 * distance > total as i64 {
        distance -= total as i64;
    }
    (sense * distance) as i32
}
