// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Initialization-time configuration.
//!
//! Everything here is fixed for the lifetime of a
//! [`CoverflowController`](crate::controller::CoverflowController). The
//! `standard()` constructors carry the values the stock page template was
//! tuned for.

use crate::time::Duration;

/// Maps a folded slide offset to a 3D pose.
///
/// See [`VisualTransform::compute`](crate::visual::VisualTransform::compute)
/// for how each field is used.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Horizontal distance per offset step, in CSS pixels.
    pub translate_x_step: f64,
    /// Depth recession per offset step, in CSS pixels.
    pub translate_z_step: f64,
    /// Rotation per offset step, in degrees.
    pub rotation_step_deg: f64,
    /// Rotation cap, in degrees.
    pub max_rotation_deg: f64,
    /// Opacity lost per offset step.
    pub opacity_falloff: f64,
    /// Scale lost per offset step.
    pub scale_falloff: f64,
    /// Largest offset magnitude that stays on stage.
    pub visibility_cutoff: u32,
    /// Horizontal position of parked (off-stage) slides, in CSS pixels.
    pub parked_translate_x: f64,
    /// Stacking order of the focused slide; neighbours get one less per step.
    pub base_stack_order: i32,
}

impl LayoutConfig {
    /// The stock coverflow layout.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            translate_x_step: 220.0,
            translate_z_step: 200.0,
            rotation_step_deg: 60.0,
            max_rotation_deg: 60.0,
            opacity_falloff: 0.2,
            scale_falloff: 0.1,
            visibility_cutoff: 3,
            parked_translate_x: 800.0,
            base_stack_order: 100,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Controller configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverflowConfig {
    /// Requested initial focus. Clamped to the last slide for short decks.
    pub initial_index: usize,
    /// Autoplay tick period.
    pub autoplay_period: Duration,
    /// How long the animation lock holds after each render. Should match the
    /// CSS transition duration.
    pub settle_delay: Duration,
    /// Start autoplay from [`mount`](crate::controller::CoverflowController::mount).
    pub autoplay_on_mount: bool,
    /// Offset-to-pose mapping.
    pub layout: LayoutConfig,
}

impl CoverflowConfig {
    /// The stock configuration: focus slide 3, 4 s autoplay, 600 ms settle.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            initial_index: 3,
            autoplay_period: Duration::from_millis(4000),
            settle_delay: Duration::from_millis(600),
            autoplay_on_mount: true,
            layout: LayoutConfig::standard(),
        }
    }

    /// Initial focus for a deck of `len` slides.
    #[must_use]
    pub fn initial_index_for(&self, len: usize) -> usize {
        self.initial_index.min(len.saturating_sub(1))
    }
}

impl Default for CoverflowConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_index_clamps_for_short_decks() {
        let config = CoverflowConfig::standard();
        assert_eq!(config.initial_index_for(7), 3);
        assert_eq!(config.initial_index_for(4), 3);
        assert_eq!(config.initial_index_for(3), 2);
        assert_eq!(config.initial_index_for(1), 0);
    }

    #[test]
    fn standard_tick_outlasts_settle() {
        let config = CoverflowConfig::standard();
        assert!(config.autoplay_period > config.settle_delay);
    }
}
