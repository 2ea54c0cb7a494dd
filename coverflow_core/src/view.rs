// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation contract.
//!
//! The controller owns no rendering logic. After every committed render it
//! pushes the complete visual state through [`CoverflowView`]; the view maps
//! that onto whatever it draws with (DOM elements, a terminal, a test
//! recorder).
//!
//! # Call order per render
//!
//! ```rust,ignore
//! for p in 0..len {
//!     view.set_slide_transform(p, &transforms[p]);
//! }
//! view.set_active_slide(current);
//! view.set_dot_active(current);
//! view.set_caption(&slide.title, &slide.description);
//! ```
//!
//! [`set_autoplay_icon`](CoverflowView::set_autoplay_icon) is called on every
//! autoplay start and stop, independently of renders.

use crate::visual::VisualTransform;

/// Receives visual state from a
/// [`CoverflowController`](crate::controller::CoverflowController).
///
/// Implementations are expected to be cheap and infallible; a view that can
/// fail (e.g. a detached DOM node) should swallow the error and keep going.
pub trait CoverflowView {
    /// Sets the pose of the slide at `position`.
    fn set_slide_transform(&mut self, position: usize, transform: &VisualTransform);

    /// Marks `position` as the focused slide and every other slide as not
    /// focused.
    fn set_active_slide(&mut self, position: usize);

    /// Replaces the caption text.
    fn set_caption(&mut self, title: &str, description: &str);

    /// Marks the navigation dot at `position` as current and clears the rest.
    fn set_dot_active(&mut self, position: usize);

    /// Shows the pause icon when `playing`, the play icon otherwise.
    fn set_autoplay_icon(&mut self, playing: bool);
}

/// A view that discards everything.
///
/// Useful for driving the controller purely for its state, e.g. in a
/// simulation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullView;

impl CoverflowView for NullView {
    fn set_slide_transform(&mut self, position: usize, transform: &VisualTransform) {
        _ = (position, transform);
    }

    fn set_active_slide(&mut self, position: usize) {
        _ = position;
    }

    fn set_caption(&mut self, title: &str, description: &str) {
        _ = (title, description);
    }

    fn set_dot_active(&mut self, position: usize) {
        _ = position;
    }

    fn set_autoplay_icon(&mut self, playing: bool) {
        _ = playing;
    }
}

impl<V: CoverflowView + ?Sized> CoverflowView for &mut V {
    fn set_slide_transform(&mut self, position: usize, transform: &VisualTransform) {
        (**self).set_slide_transform(position, transform);
    }

    fn set_active_slide(&mut self, position: usize) {
        (**self).set_active_slide(position);
    }

    fn set_caption(&mut self, title: &str, description: &str) {
        (**self).set_caption(title, description);
    }

    fn set_dot_active(&mut self, position: usize) {
        (**self).set_dot_active(position);
    }

    fn set_autoplay_icon(&mut self, playing: bool) {
        (**self).set_autoplay_icon(playing);
    }
}
