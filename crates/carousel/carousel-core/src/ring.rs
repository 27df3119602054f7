//! Ring index math: visible-neighbor sets under circular topology.
//!
//! Model:
//! - The ring is the index space `0..total` with Euclidean wrap arithmetic.
//! - `visible = min(visible_count, total)` slots are on screen; the active
//!   slide takes one, the rest split into left/right neighbor runs.
//! - `bias` decides which side gets the extra slot when `visible - 1` is odd.
//! - `reverse` flips which physical side the forward direction lands on.
//! - The out-indices identify the slide one step beyond each visible run,
//!   used to animate entry/exit at the window boundary when `total > visible`.
//!
//! Everything here is pure and deterministic given
//! `(current, total, visible_count, bias, reverse)`.

use serde::{Deserialize, Serialize};

use crate::config::Bias;

/// Derived neighbor layout for one active index.
/// Recomputed on every index or config change; never persisted.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct NeighborLayout {
    /// Left-side neighbor indices, nearest first.
    pub left: Vec<usize>,
    /// Right-side neighbor indices, nearest first.
    pub right: Vec<usize>,
    /// Index one step beyond the farthest left neighbor.
    pub left_out: usize,
    /// Index one step beyond the farthest right neighbor.
    pub right_out: usize,
    /// Slot count actually on screen, active slide included.
    pub visible: usize,
    /// True when the ring is larger than the visible window.
    pub has_hidden: bool,
}

/// Number of slots on screen for a given policy and item count.
#[inline]
pub fn visible_slots(total: usize, visible_count: usize) -> usize {
    visible_count.min(total)
}

/// Split the non-active visible slots between the two sides.
/// Guarantees `left + right == visible - 1`; the bias side wins the odd slot.
pub fn side_counts(visible: usize, bias: Bias) -> (usize, usize) {
    if visible == 0 {
        return (0, 0);
    }
    let n = (visible as f64 - 1.0) / 2.0;
    let left = match bias {
        Bias::Left => n.ceil(),
        Bias::Right => n.floor(),
    } as usize;
    (left, visible - 1 - left)
}

/// Wrap `base + offset` into `[0, total)`. Euclidean modulo keeps negative
/// offsets non-negative, unlike the `%` operator.
#[inline]
fn wrap(base: usize, offset: i64, total: usize) -> usize {
    (base as i64 + offset).rem_euclid(total as i64) as usize
}

/// Left-side neighbor indices, nearest to farthest.
pub fn left_indices(current: usize, total: usize, count: usize, reverse: bool) -> Vec<usize> {
    (1..=count as i64)
        .map(|m| wrap(current, if reverse { m } else { -m }, total))
        .collect()
}

/// Right-side neighbor indices, nearest to farthest.
pub fn right_indices(current: usize, total: usize, count: usize, reverse: bool) -> Vec<usize> {
    (1..=count as i64)
        .map(|m| wrap(current, if reverse { -m } else { m }, total))
        .collect()
}

/// Index one step beyond the farthest left neighbor.
pub fn left_out_index(current: usize, total: usize, left_count: usize, reverse: bool) -> usize {
    let step = left_count as i64 + 1;
    wrap(current, if reverse { step } else { -step }, total)
}

/// Index one step beyond the farthest right neighbor.
pub fn right_out_index(current: usize, total: usize, right_count: usize, reverse: bool) -> usize {
    let step = right_count as i64 + 1;
    wrap(current, if reverse { -step } else { step }, total)
}

/// Compute the full neighbor layout for one active index.
/// `total == 0` yields the empty layout.
pub fn compute_layout(
    current: usize,
    total: usize,
    visible_count: usize,
    bias: Bias,
    reverse: bool,
) -> NeighborLayout {
    if total == 0 {
        return NeighborLayout::default();
    }
    let visible = visible_slots(total, visible_count);
    let (left_count, right_count) = side_counts(visible, bias);
    NeighborLayout {
        left: left_indices(current, total, left_count, reverse),
        right: right_indices(current, total, right_count, reverse),
        left_out: left_out_index(current, total, left_count, reverse),
        right_out: right_out_index(current, total, right_count, reverse),
        visible,
        has_hidden: total > visible,
    }
}
