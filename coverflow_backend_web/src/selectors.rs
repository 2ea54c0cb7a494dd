// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page structure the backend binds to.

/// CSS selectors for every element the backend reads or writes.
///
/// Carousel selectors are required; page chrome selectors are optional and
/// their bindings are skipped when nothing matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DomSelectors {
    /// Focusable carousel container; receives keys and touches.
    pub container: &'static str,
    /// One element per slide, in deck order.
    pub items: &'static str,
    /// Image inside a slide.
    pub item_image: &'static str,
    /// Reflection element inside a slide.
    pub item_reflection: &'static str,
    /// Container the navigation dots are created in.
    pub dots: &'static str,
    /// Caption title.
    pub title: &'static str,
    /// Caption description.
    pub description: &'static str,
    /// Previous-slide button.
    pub prev_button: &'static str,
    /// Next-slide button.
    pub next_button: &'static str,
    /// Play/pause button.
    pub play_pause_button: &'static str,
    /// Icon shown while paused.
    pub play_icon: &'static str,
    /// Icon shown while playing.
    pub pause_icon: &'static str,
    /// Mobile menu toggle.
    pub menu_toggle: &'static str,
    /// Mobile menu.
    pub main_menu: &'static str,
    /// Menu links, paired with `sections` by index.
    pub menu_items: &'static str,
    /// Page sections.
    pub sections: &'static str,
    /// Page header.
    pub header: &'static str,
    /// Scroll-to-top button.
    pub scroll_top: &'static str,
    /// Logo; scrolls to top.
    pub logo: &'static str,
    /// Contact form.
    pub contact_form: &'static str,
}

impl DomSelectors {
    /// The stock template's structure.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            container: ".coverflow-container",
            items: ".coverflow-item",
            item_image: "img",
            item_reflection: ".reflection",
            dots: "#dots",
            title: "#current-title",
            description: "#current-description",
            prev_button: ".nav-button.prev",
            next_button: ".nav-button.next",
            play_pause_button: ".play-pause-button",
            play_icon: ".play-icon",
            pause_icon: ".pause-icon",
            menu_toggle: "#menuToggle",
            main_menu: "#mainMenu",
            menu_items: ".menu-item",
            sections: ".section",
            header: "#header",
            scroll_top: "#scrollToTop",
            logo: ".logo-container",
            contact_form: ".contact-form",
        }
    }
}

impl Default for DomSelectors {
    fn default() -> Self {
        Self::standard()
    }
}

/// Class names toggled by the backend.
pub mod class {
    /// Focused slide, current dot, open menu, highlighted menu item.
    pub const ACTIVE: &str = "active";
    /// Navigation dot.
    pub const DOT: &str = "dot";
    /// Menu item linking off-site.
    pub const EXTERNAL: &str = "external";
    /// Header past the scroll threshold.
    pub const SCROLLED: &str = "scrolled";
    /// Visible scroll-to-top button.
    pub const VISIBLE: &str = "visible";
    /// Slide whose image has not loaded.
    pub const IMAGE_LOADING: &str = "image-loading";
}
