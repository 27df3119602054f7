//! Per-slide placement math for the pseudo-3D strip.
//!
//! Side slides recede by slot rank: each slot adds depth, keeps the configured
//! rotation, and shifts horizontally by one spacing unit. When the ring is
//! larger than the window, the two out-indices are positioned at the outermost
//! slot of their side but kept invisible, so boundary entry/exit animates
//! instead of popping.

use crate::config::CarouselConfig;
use crate::outputs::{SlidePlacement, SlideSize};
use crate::ring::NeighborLayout;

/// Stacking order of the active slide; side slots count down from here.
const TOP_Z_INDEX: i32 = 999;

/// Pixel spacing between slots; automatic spacing derives from the slide width.
#[inline]
fn slot_spacing(cfg: &CarouselConfig) -> f32 {
    cfg.space.unwrap_or(cfg.width / 1.5)
}

/// Fill depth/rotation/offset for a side slot (0 = nearest to the active slide).
fn apply_side(placement: &mut SlidePlacement, slot: usize, right_side: bool, cfg: &CarouselConfig) {
    let rank = slot as f32 + 1.0;
    placement.depth_z = if cfg.disable_3d {
        0.0
    } else {
        cfg.inverse_scaling + rank * 100.0
    };
    placement.rotation_deg = if cfg.disable_3d {
        0.0
    } else if right_side {
        -cfg.perspective
    } else {
        cfg.perspective
    };
    let offset = rank * slot_spacing(cfg);
    placement.translate_x = if right_side { offset } else { -offset };
    placement.top = match cfg.space {
        Some(space) => rank * space,
        None => 0.0,
    };
    placement.z_index = TOP_Z_INDEX - slot as i32 - 1;
}

/// Left slot for `index`, honoring the one-directional suppression: a slot
/// deeper than the slides actually before the active one is hidden.
fn left_slot(
    layout: &NeighborLayout,
    index: usize,
    current: usize,
    cfg: &CarouselConfig,
) -> Option<usize> {
    let slot = layout.left.iter().position(|&i| i == index)?;
    if cfg.one_directional && slot >= current {
        return None;
    }
    Some(slot)
}

/// Right slot for `index`; the one-directional mirror suppresses slots deeper
/// than the slides after the active one.
fn right_slot(
    layout: &NeighborLayout,
    index: usize,
    current: usize,
    total: usize,
    cfg: &CarouselConfig,
) -> Option<usize> {
    let slot = layout.right.iter().position(|&i| i == index)?;
    if cfg.one_directional && slot + current + 2 > total {
        return None;
    }
    Some(slot)
}

/// Placement for a single slide.
fn place_slide(
    index: usize,
    current: usize,
    total: usize,
    layout: &NeighborLayout,
    cfg: &CarouselConfig,
) -> SlidePlacement {
    let mut placement = SlidePlacement {
        index,
        ..SlidePlacement::default()
    };

    if index == current {
        placement.is_active = true;
        placement.visible = true;
        placement.opacity = 1.0;
        placement.z_index = TOP_Z_INDEX;
        return placement;
    }

    if let Some(slot) = left_slot(layout, index, current, cfg) {
        apply_side(&mut placement, slot, false, cfg);
        placement.left_slot = Some(slot);
        placement.visible = true;
        placement.opacity = 1.0;
        return placement;
    }

    if let Some(slot) = right_slot(layout, index, current, total, cfg) {
        apply_side(&mut placement, slot, true, cfg);
        placement.right_slot = Some(slot);
        placement.visible = true;
        placement.opacity = 1.0;
        return placement;
    }

    if layout.has_hidden {
        // The slide about to enter or exit the window: positioned at the
        // outermost slot of its side, invisible until it moves in.
        if index == layout.left_out && !layout.left.is_empty() {
            apply_side(&mut placement, layout.left.len() - 1, false, cfg);
            return placement;
        }
        if index == layout.right_out && !layout.right.is_empty() {
            apply_side(&mut placement, layout.right.len() - 1, true, cfg);
            return placement;
        }
    }

    placement
}

/// Compute one placement per item for the current neighbor layout.
pub fn compute_placements(
    current: usize,
    total: usize,
    layout: &NeighborLayout,
    cfg: &CarouselConfig,
) -> Vec<SlidePlacement> {
    (0..total)
        .map(|index| place_slide(index, current, total, layout, cfg))
        .collect()
}

/// Slide box from the latest viewport measurement, preserving the configured
/// aspect ratio. An unmeasured viewport (zero width) uses the configured box.
pub fn slide_size(viewport: f32, cfg: &CarouselConfig) -> SlideSize {
    let outer_width = cfg.width + cfg.border * 2.0;
    let outer_height = cfg.height + cfg.border * 2.0;
    let width = if viewport > 0.0 {
        viewport.min(outer_width)
    } else {
        outer_width
    };
    let aspect_ratio = outer_width / outer_height;
    SlideSize {
        width,
        height: width / aspect_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Bias;
    use crate::ring;
    use approx::assert_relative_eq;

    fn layout_10_5(current: usize) -> NeighborLayout {
        ring::compute_layout(current, 10, 5, Bias::Left, false)
    }

    #[test]
    fn active_slide_sits_on_top_unrotated() {
        let cfg = CarouselConfig::default();
        let placements = compute_placements(4, 10, &layout_10_5(4), &cfg);
        let active = &placements[4];
        assert!(active.is_active && active.visible);
        assert_eq!(active.z_index, TOP_Z_INDEX);
        assert_eq!(active.rotation_deg, 0.0);
        assert_eq!(active.translate_x, 0.0);
    }

    #[test]
    fn side_slides_recede_by_slot() {
        let cfg = CarouselConfig::default();
        let placements = compute_placements(4, 10, &layout_10_5(4), &cfg);

        let near_left = &placements[3];
        assert_eq!(near_left.left_slot, Some(0));
        assert_relative_eq!(near_left.depth_z, 400.0);
        assert_relative_eq!(near_left.rotation_deg, 35.0);
        assert_relative_eq!(near_left.translate_x, -240.0);
        assert_eq!(near_left.z_index, TOP_Z_INDEX - 1);

        let far_right = &placements[6];
        assert_eq!(far_right.right_slot, Some(1));
        assert_relative_eq!(far_right.depth_z, 500.0);
        assert_relative_eq!(far_right.rotation_deg, -35.0);
        assert_relative_eq!(far_right.translate_x, 480.0);
        assert_eq!(far_right.z_index, TOP_Z_INDEX - 2);
    }

    #[test]
    fn explicit_space_also_stacks_vertically() {
        let cfg = CarouselConfig {
            space: Some(120.0),
            ..Default::default()
        };
        let placements = compute_placements(4, 10, &layout_10_5(4), &cfg);
        let far_left = &placements[2];
        assert_relative_eq!(far_left.translate_x, -240.0);
        assert_relative_eq!(far_left.top, 240.0);
    }

    #[test]
    fn disable_3d_flattens_side_slides() {
        let cfg = CarouselConfig {
            disable_3d: true,
            ..Default::default()
        };
        let placements = compute_placements(4, 10, &layout_10_5(4), &cfg);
        let side = &placements[5];
        assert_eq!(side.depth_z, 0.0);
        assert_eq!(side.rotation_deg, 0.0);
        assert_ne!(side.translate_x, 0.0);
    }

    #[test]
    fn out_indices_get_invisible_boundary_placements() {
        let cfg = CarouselConfig::default();
        let layout = layout_10_5(4);
        let placements = compute_placements(4, 10, &layout, &cfg);

        let left_ghost = &placements[1];
        assert!(!left_ghost.visible);
        assert_eq!(left_ghost.opacity, 0.0);
        // Parked at the outermost left slot, ready to slide in.
        assert_relative_eq!(left_ghost.translate_x, -480.0);

        let right_ghost = &placements[7];
        assert!(!right_ghost.visible);
        assert_relative_eq!(right_ghost.translate_x, 480.0);

        // Far-side slides get no position at all.
        let hidden = &placements[9];
        assert!(!hidden.visible);
        assert_eq!(hidden.translate_x, 0.0);
    }

    #[test]
    fn one_directional_suppresses_wrapped_slots() {
        let cfg = CarouselConfig {
            one_directional: true,
            looping: true,
            ..Default::default()
        };
        // At index 0 every left neighbor is a wrap; none may show.
        let layout = layout_10_5(0);
        let placements = compute_placements(0, 10, &layout, &cfg);
        assert!(placements[9].left_slot.is_none());
        assert!(!placements[9].visible);
        assert!(placements[8].left_slot.is_none());
        // Right side is genuinely ahead and stays visible.
        assert_eq!(placements[1].right_slot, Some(0));

        // At index 1 exactly one left slot is legitimate.
        let layout = layout_10_5(1);
        let placements = compute_placements(1, 10, &layout, &cfg);
        assert_eq!(placements[0].left_slot, Some(0));
        assert!(placements[9].left_slot.is_none());
    }

    #[test]
    fn slide_size_tracks_viewport_and_aspect() {
        let cfg = CarouselConfig::default();
        // Unmeasured viewport falls back to the configured box.
        let size = slide_size(0.0, &cfg);
        assert_relative_eq!(size.width, 362.0);
        assert_relative_eq!(size.height, 272.0);

        // A narrow viewport shrinks the box, keeping the aspect ratio.
        let size = slide_size(181.0, &cfg);
        assert_relative_eq!(size.width, 181.0);
        assert_relative_eq!(size.height, 181.0 * 272.0 / 362.0);
    }
}
