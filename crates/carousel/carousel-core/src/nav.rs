//! Navigation state: the active index plus the legality rules around it.

use serde::{Deserialize, Serialize};

/// Current position within the ring.
///
/// Owned exclusively by the engine; the gesture and autoplay drivers request
/// moves through engine operations and never write these fields directly.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct NavState {
    pub current_index: usize,
    pub total: usize,
}

impl NavState {
    /// Create navigation state with a clamped start index.
    pub fn new(total: usize, start_index: usize) -> Self {
        let current_index = if total == 0 {
            0
        } else {
            start_index.min(total - 1)
        };
        Self {
            current_index,
            total,
        }
    }

    /// Clamp an index into the valid range. Identity for the empty ring.
    #[inline]
    pub fn clamp(&self, index: usize) -> usize {
        if self.total == 0 {
            0
        } else {
            index.min(self.total - 1)
        }
    }

    /// First slide in the configured direction: index 0, or `total - 1` when
    /// the ring runs in reverse.
    #[inline]
    pub fn is_first_slide(&self, reverse: bool) -> bool {
        if reverse {
            self.current_index == self.total.saturating_sub(1)
        } else {
            self.current_index == 0
        }
    }

    /// Terminal slide in the configured direction.
    #[inline]
    pub fn is_last_slide(&self, reverse: bool) -> bool {
        if reverse {
            self.current_index == 0
        } else {
            self.current_index == self.total.saturating_sub(1)
        }
    }

    #[inline]
    pub fn can_go_next(&self, looping: bool, reverse: bool) -> bool {
        self.total > 0 && (looping || !self.is_last_slide(reverse))
    }

    #[inline]
    pub fn can_go_prev(&self, looping: bool, reverse: bool) -> bool {
        self.total > 0 && (looping || !self.is_first_slide(reverse))
    }

    /// Target of one forward step, wrapping at the terminal slide.
    /// Only meaningful when `can_go_next` held.
    pub fn next_target(&self, reverse: bool) -> usize {
        if self.is_last_slide(reverse) {
            if reverse {
                self.total - 1
            } else {
                0
            }
        } else if reverse {
            self.current_index - 1
        } else {
            self.current_index + 1
        }
    }

    /// Target of one backward step, wrapping at the first slide.
    pub fn prev_target(&self, reverse: bool) -> usize {
        if self.is_first_slide(reverse) {
            if reverse {
                0
            } else {
                self.total - 1
            }
        } else if reverse {
            self.current_index + 1
        } else {
            self.current_index - 1
        }
    }
}
