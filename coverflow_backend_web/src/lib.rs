// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for coverflow.
//!
//! This crate binds a [`CoverflowController`] to a browser page:
//!
//! - [`DomView`]: writes slide poses, the active slide and dot, the caption,
//!   and the play/pause icons into the DOM
//! - [`RafLoop`]: `requestAnimationFrame` pump that calls
//!   [`advance`](CoverflowController::advance) every frame
//! - [`bind_carousel`]: keys, clicks, and swipes to [`InputEvent`]s
//! - [`bind_chrome`]: mobile menu, scroll-driven header, smooth scrolling,
//!   contact form
//! - [`bind_images`]: slide image load state and reflections
//! - [`WebCoverflow`]: all of the above in one call
//!
//! [`CoverflowController`]: coverflow_core::controller::CoverflowController
//! [`InputEvent`]: coverflow_core::input::InputEvent

#![no_std]

extern crate alloc;

mod app;
mod bindings;
mod chrome;
mod dom;
mod dom_view;
mod error;
mod images;
mod listener;
mod raf;
mod selectors;

pub use app::{WebCoverflow, WebOptions};
pub use bindings::{SharedController, bind_carousel};
pub use chrome::{FORM_THANK_YOU, bind_chrome};
pub use coverflow_core::view::CoverflowView;
pub use dom_view::DomView;
pub use error::BindError;
pub use images::bind_images;
pub use listener::EventBindings;
pub use raf::RafLoop;
pub use selectors::{DomSelectors, class};

use coverflow_core::time::HostTime;

/// Returns the current host time from `performance.now()`, in milliseconds.
///
/// Shares its origin with `requestAnimationFrame` timestamps, so times from
/// input handlers and from [`RafLoop`] are comparable.
#[must_use]
pub fn now() -> HostTime {
    raf::host_time_from_ms(raf::performance_now())
}
