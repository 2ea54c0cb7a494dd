// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-slide visual pose derived from the focused index.
//!
//! Nothing here is stored. Every render recomputes a [`VisualTransform`] for
//! each slide from its position, the focused index, and the deck length.

use crate::config::LayoutConfig;
use crate::transform::Transform3d;

/// Signed distance from `current` to `position`, folded onto the shorter way
/// around a ring of `len` slides.
///
/// For odd `len` the result lies in `[-len/2, len/2]`. For even `len` the
/// slide directly opposite the focus keeps its unfolded sign, so the result
/// lies in `[-len/2, len/2]` with both ends reachable.
///
/// # Panics
///
/// Debug builds assert that `position` and `current` are below `len`.
#[must_use]
pub fn fold_offset(position: usize, current: usize, len: usize) -> isize {
    debug_assert!(
        position < len && current < len,
        "fold_offset({position}, {current}) out of range for {len} slides"
    );
    let len = len as isize;
    let mut offset = position as isize - current as isize;
    if 2 * offset > len {
        offset -= len;
    } else if 2 * offset < -len {
        offset += len;
    }
    offset
}

/// The pose one slide should take for the current focus.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualTransform {
    /// Folded offset from the focused slide.
    pub offset: isize,
    /// Horizontal translation, CSS pixels.
    pub translate_x: f64,
    /// Depth translation, CSS pixels (negative recedes).
    pub translate_z: f64,
    /// Rotation around the vertical axis, degrees.
    pub rotate_y_deg: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Uniform scale.
    pub scale: f64,
    /// Stacking order; the focused slide is highest.
    pub stack_order: i32,
    /// Whether this is the focused slide.
    pub is_active: bool,
    /// Whether the slide is beyond the visibility cutoff and parked off-stage.
    pub parked: bool,
}

impl VisualTransform {
    /// Computes the pose for the slide at `position` when `current` is focused
    /// in a deck of `len` slides.
    ///
    /// With `o` the folded offset and `m = |o|`:
    ///
    /// ```text
    /// translate_x  = o · translate_x_step
    /// translate_z  = -m · translate_z_step
    /// rotate_y_deg = -sign(o) · min(m · rotation_step_deg, max_rotation_deg)
    /// opacity      = 1 - m · opacity_falloff
    /// scale        = 1 - m · scale_falloff
    /// stack_order  = base_stack_order - m
    /// ```
    ///
    /// Slides with `m > visibility_cutoff` are parked: fully transparent and
    /// pushed to `sign(o) · parked_translate_x`. They stay mounted.
    #[must_use]
    pub fn compute(position: usize, current: usize, len: usize, layout: &LayoutConfig) -> Self {
        let offset = fold_offset(position, current, len);
        let magnitude = offset.unsigned_abs();
        let m = magnitude as f64;
        let sign = offset.signum() as f64;

        let mut translate_x = offset as f64 * layout.translate_x_step;
        let translate_z = -m * layout.translate_z_step;
        let rotate_y_deg = -sign * (m * layout.rotation_step_deg).min(layout.max_rotation_deg);
        let mut opacity = 1.0 - m * layout.opacity_falloff;
        let scale = 1.0 - m * layout.scale_falloff;
        let stack_order = layout
            .base_stack_order
            .saturating_sub(i32::try_from(magnitude).unwrap_or(i32::MAX));

        let parked = magnitude > layout.visibility_cutoff as usize;
        if parked {
            opacity = 0.0;
            translate_x = sign * layout.parked_translate_x;
        }

        Self {
            offset,
            translate_x,
            translate_z,
            rotate_y_deg,
            opacity,
            scale,
            stack_order,
            is_active: position == current,
            parked,
        }
    }

    /// The pose as a single matrix: `translate(x, 0, z) · rotateY(θ) · scale(s)`.
    ///
    /// This is the same composition order as the CSS transform list
    /// `translateX() translateZ() rotateY() scale()`.
    #[must_use]
    pub fn to_matrix(&self) -> Transform3d {
        Transform3d::from_translation(self.translate_x, 0.0, self.translate_z)
            * Transform3d::from_rotation_y(self.rotate_y_deg.to_radians())
            * Transform3d::from_scale_xy(self.scale)
    }
}

#[cfg(test)]
mod tests {
    #[cfg(not(feature = "std"))]
    use kurbo::common::FloatFuncs as _;

    use super::*;

    const EPS: f64 = 1e-9;

    fn pose(position: usize, current: usize, len: usize) -> VisualTransform {
        VisualTransform::compute(position, current, len, &LayoutConfig::standard())
    }

    #[test]
    fn offsets_within_half_ring_are_not_folded() {
        assert_eq!(fold_offset(6, 3, 7), 3);
        assert_eq!(fold_offset(0, 3, 7), -3);
    }

    #[test]
    fn offsets_fold_to_shortest_direction() {
        assert_eq!(fold_offset(6, 0, 7), -1);
        assert_eq!(fold_offset(0, 6, 7), 1);
        assert_eq!(fold_offset(4, 0, 7), -3);
    }

    #[test]
    fn even_ring_opposite_slide_keeps_sign() {
        assert_eq!(fold_offset(3, 0, 6), 3);
        assert_eq!(fold_offset(0, 3, 6), -3);
    }

    #[test]
    fn folded_offsets_stay_within_half_ring() {
        for len in 1..=12_usize {
            for current in 0..len {
                for position in 0..len {
                    let o = fold_offset(position, current, len);
                    assert!(2 * o.unsigned_abs() <= len, "len={len} o={o}");
                    assert_eq!((current as isize + o).rem_euclid(len as isize), position as isize);
                }
            }
        }
    }

    #[test]
    fn focused_slide_is_flat_and_front() {
        let t = pose(3, 3, 7);
        assert!(t.is_active);
        assert!(!t.parked);
        assert_eq!(t.offset, 0);
        assert_eq!(t.translate_x, 0.0);
        assert_eq!(t.translate_z, 0.0);
        assert_eq!(t.rotate_y_deg, 0.0);
        assert_eq!(t.opacity, 1.0);
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.stack_order, 100);
    }

    #[test]
    fn neighbours_recede_and_turn_inward() {
        let right = pose(4, 3, 7);
        assert_eq!(right.translate_x, 220.0);
        assert_eq!(right.translate_z, -200.0);
        assert_eq!(right.rotate_y_deg, -60.0);
        assert!((right.opacity - 0.8).abs() < EPS);
        assert!((right.scale - 0.9).abs() < EPS);
        assert_eq!(right.stack_order, 99);
        assert!(!right.is_active);

        let left = pose(1, 3, 7);
        assert_eq!(left.translate_x, -440.0);
        assert_eq!(left.translate_z, -400.0);
        assert_eq!(left.rotate_y_deg, 60.0, "rotation is capped at 60");
        assert!((left.opacity - 0.6).abs() < EPS);
        assert_eq!(left.stack_order, 98);
    }

    #[test]
    fn cutoff_magnitude_stays_visible() {
        // N=7 never exceeds |o| = 3.
        let t = pose(4, 0, 7);
        assert_eq!(t.offset, -3);
        assert!(!t.parked);
        assert!((t.opacity - 0.4).abs() < EPS);
        assert_eq!(t.translate_x, -660.0);
    }

    #[test]
    fn beyond_cutoff_is_parked_off_stage() {
        // N=9, focus 0: position 4 has offset +4, position 5 folds to -4.
        let right = pose(4, 0, 9);
        assert_eq!(right.offset, 4);
        assert!(right.parked);
        assert_eq!(right.opacity, 0.0);
        assert_eq!(right.translate_x, 800.0);
        assert_eq!(right.translate_z, -800.0);
        assert_eq!(right.stack_order, 96);

        let left = pose(5, 0, 9);
        assert_eq!(left.offset, -4);
        assert!(left.parked);
        assert_eq!(left.translate_x, -800.0);
    }

    #[test]
    fn exactly_one_active_slide() {
        for len in 1..=9 {
            for current in 0..len {
                let active = (0..len).filter(|&p| pose(p, current, len).is_active).count();
                assert_eq!(active, 1);
            }
        }
    }

    #[test]
    fn matrix_carries_translation_and_scale() {
        let t = pose(4, 3, 7);
        let m = t.to_matrix();
        assert_eq!(m.col(3), [220.0, 0.0, -200.0, 1.0]);
        // Y axis is untouched by rotateY, so only the scale shows.
        assert!((m.col(1)[1] - 0.9).abs() < EPS);
        assert!(m.is_finite());
    }

    #[test]
    fn matrix_decomposes_back_into_the_pose() {
        for position in 0..7 {
            let t = pose(position, 3, 7);
            let m = t.to_matrix();
            let [x, y, z, _] = m.col(0);
            let sx = (x * x + y * y + z * z).sqrt();
            assert!((sx - t.scale).abs() < EPS, "position {position}");
            assert!((m.col(1)[1] - t.scale).abs() < EPS);
            assert_eq!(m.col(2)[1], 0.0, "no second rotation axis");
            let turned = (-z).atan2(x).to_degrees();
            assert!((turned - t.rotate_y_deg).abs() < 1e-6, "position {position}");
            assert!(t.rotate_y_deg.abs() < 180.0);
            assert_eq!(m.col(3), [t.translate_x, 0.0, t.translate_z, 1.0]);
        }
    }
}
