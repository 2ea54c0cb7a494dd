// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide image load state and reflections.
//!
//! A slide whose image fails to load carries the `image-loading` class. Once
//! the image loads, the class is removed and the slide's reflection takes the
//! image as its background. There are no retries.

use alloc::format;
use alloc::string::String;

use web_sys::{Element, HtmlElement, HtmlImageElement};

use crate::dom::query_in;
use crate::error::BindError;
use crate::listener::EventBindings;
use crate::selectors::{DomSelectors, class};

/// CSS `url()` for an image source.
pub(crate) fn css_url(src: &str) -> String {
    format!("url({src})")
}

fn on_loaded(image: &HtmlImageElement, reflection: &HtmlElement) {
    if let Some(parent) = image.parent_element() {
        let _ = parent.class_list().remove_1(class::IMAGE_LOADING);
    }
    let url = css_url(&image.src());
    let s = reflection.style();
    let _ = s.set_property("--bg-image", &url);
    let _ = s.set_property("background-image", &url);
    let _ = s.set_property("background-size", "cover");
    let _ = s.set_property("background-position", "center");
}

fn on_failed(image: &HtmlImageElement) {
    if let Some(parent) = image.parent_element() {
        let _ = parent.class_list().add_1(class::IMAGE_LOADING);
    }
}

/// Watches each slide's image.
///
/// Images that finished loading before binding are handled immediately.
///
/// # Errors
///
/// Fails if a slide has no image or reflection element.
pub fn bind_images(
    items: &[HtmlElement],
    selectors: &DomSelectors,
) -> Result<EventBindings, BindError> {
    let mut bindings = EventBindings::default();
    for item in items {
        let item: &Element = item;
        let image: HtmlImageElement = query_in(item, selectors.item_image)?;
        let reflection: HtmlElement = query_in(item, selectors.item_reflection)?;

        if image.complete() {
            if image.natural_width() > 0 {
                on_loaded(&image, &reflection);
            } else {
                on_failed(&image);
            }
        }

        {
            let image_el = image.clone();
            bindings.listen(&image, "load", move |_| on_loaded(&image_el, &reflection))?;
        }
        let image_el = image.clone();
        bindings.listen(&image, "error", move |_| on_failed(&image_el))?;
    }
    Ok(bindings)
}
