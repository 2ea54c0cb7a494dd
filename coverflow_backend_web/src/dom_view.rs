// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM-backed [`CoverflowView`].
//!
//! Slide poses are written as a single CSS `matrix3d()` plus `opacity` and
//! `z-index`. The CSS transition on `.coverflow-item` does the animating; the
//! controller's settle delay should match its duration.
//!
//! A transition between two `matrix3d()` values is interpolated by matrix
//! decomposition, not per transform function. For these poses that is the
//! same motion as the `translateX() translateZ() rotateY() scale()` list:
//! each matrix decomposes back into one translation, one Y-axis turn under
//! 180 degrees, and a uniform X/Y scale. A pose that adds a second rotation
//! axis or a skew would animate differently and should be written as a
//! function list instead.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::Cell;
use core::fmt::Write as _;

use coverflow_core::transform::Transform3d;
use coverflow_core::view::CoverflowView;
use coverflow_core::visual::VisualTransform;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement, Window};

use crate::dom::{query, query_all};
use crate::error::BindError;
use crate::selectors::{DomSelectors, class};

/// Caption fade restarted after this many milliseconds.
const CAPTION_RESTART_DELAY_MS: i32 = 10;
const CAPTION_ANIMATION: &str = "fadeIn 0.6s forwards";

/// Writes controller state into the page.
pub struct DomView {
    window: Window,
    container: HtmlElement,
    items: Vec<HtmlElement>,
    dots: Vec<HtmlElement>,
    title: HtmlElement,
    description: HtmlElement,
    play_icon: HtmlElement,
    pause_icon: HtmlElement,
    caption_restart: Closure<dyn FnMut()>,
    pending_restart: Cell<Option<i32>>,
}

impl core::fmt::Debug for DomView {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomView")
            .field("items", &self.items.len())
            .field("dots", &self.dots.len())
            .field("pending_restart", &self.pending_restart.get())
            .finish_non_exhaustive()
    }
}

impl DomView {
    /// Looks up the carousel elements and creates one navigation dot per
    /// slide.
    ///
    /// # Errors
    ///
    /// Fails if a required element is missing or of the wrong type, or if the
    /// page has no slides.
    pub fn new(
        window: Window,
        document: &Document,
        selectors: &DomSelectors,
    ) -> Result<Self, BindError> {
        let container: HtmlElement = query(document, selectors.container)?;
        let items: Vec<HtmlElement> = query_all(document, selectors.items)?;
        if items.is_empty() {
            return Err(BindError::NoSlides);
        }
        let dots_container: HtmlElement = query(document, selectors.dots)?;
        let mut dots = Vec::with_capacity(items.len());
        for _ in &items {
            let dot: HtmlElement = document.create_element("div")?.unchecked_into();
            dot.set_class_name(class::DOT);
            dots_container.append_child(&dot)?;
            dots.push(dot);
        }

        let title: HtmlElement = query(document, selectors.title)?;
        let description: HtmlElement = query(document, selectors.description)?;
        let caption_restart = {
            let title = title.clone();
            let description = description.clone();
            Closure::wrap(Box::new(move || {
                let _ = title.style().set_property("animation", CAPTION_ANIMATION);
                let _ = description
                    .style()
                    .set_property("animation", CAPTION_ANIMATION);
            }) as Box<dyn FnMut()>)
        };

        Ok(Self {
            window,
            container,
            items,
            dots,
            title,
            description,
            play_icon: query(document, selectors.play_icon)?,
            pause_icon: query(document, selectors.pause_icon)?,
            caption_restart,
            pending_restart: Cell::new(None),
        })
    }

    /// The carousel container.
    #[must_use]
    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    /// Slide elements, in deck order.
    #[must_use]
    pub fn items(&self) -> &[HtmlElement] {
        &self.items
    }

    /// Navigation dots, in deck order.
    #[must_use]
    pub fn dots(&self) -> &[HtmlElement] {
        &self.dots
    }

    fn restart_caption_animation(&self) {
        let _ = self.title.style().set_property("animation", "none");
        let _ = self.description.style().set_property("animation", "none");
        if let Some(handle) = self.pending_restart.take() {
            self.window.clear_timeout_with_handle(handle);
        }
        let handle = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                self.caption_restart.as_ref().unchecked_ref::<js_sys::Function>(),
                CAPTION_RESTART_DELAY_MS,
            )
            .ok();
        self.pending_restart.set(handle);
    }
}

impl Drop for DomView {
    fn drop(&mut self) {
        if let Some(handle) = self.pending_restart.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}

impl CoverflowView for DomView {
    fn set_slide_transform(&mut self, position: usize, transform: &VisualTransform) {
        let Some(el) = self.items.get(position) else {
            return;
        };
        let s = el.style();
        let _ = s.set_property("transform", &matrix3d_css(transform.to_matrix()));
        let _ = s.set_property("opacity", &transform.opacity.to_string());
        let _ = s.set_property("z-index", &transform.stack_order.to_string());
    }

    fn set_active_slide(&mut self, position: usize) {
        for (i, el) in self.items.iter().enumerate() {
            let _ = el.class_list().toggle_with_force(class::ACTIVE, i == position);
        }
    }

    fn set_caption(&mut self, title: &str, description: &str) {
        self.title.set_text_content(Some(title));
        self.description.set_text_content(Some(description));
        self.restart_caption_animation();
    }

    fn set_dot_active(&mut self, position: usize) {
        for (i, dot) in self.dots.iter().enumerate() {
            let _ = dot.class_list().toggle_with_force(class::ACTIVE, i == position);
        }
    }

    fn set_autoplay_icon(&mut self, playing: bool) {
        let (play, pause) = if playing {
            ("none", "block")
        } else {
            ("block", "none")
        };
        let _ = self.play_icon.style().set_property("display", play);
        let _ = self.pause_icon.style().set_property("display", pause);
    }
}

/// Formats a transform as a CSS `matrix3d()` value.
pub(crate) fn matrix3d_css(xf: Transform3d) -> String {
    let mut css = String::from("matrix3d(");
    for (i, v) in xf.to_cols_flat().iter().enumerate() {
        if i > 0 {
            css.push(',');
        }
        let _ = write!(css, "{v}");
    }
    css.push(')');
    css
}
