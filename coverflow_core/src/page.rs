// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page chrome around the carousel.
//!
//! These are small, DOM-free state holders for the mobile menu, the
//! scroll-driven header and menu highlighting, and smooth-scroll targets. The
//! web backend feeds them measurements and applies the results as CSS classes.

use alloc::string::String;

// ---------------------------------------------------------------------------
// Mobile menu
// ---------------------------------------------------------------------------

/// Open/closed state of the mobile menu. The toggle button and the menu
/// share this state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Whether the menu is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the menu. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Closes the menu.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// A menu item was clicked. Internal links close the menu; external links
    /// leave it alone.
    pub fn on_menu_item_click(&mut self, external: bool) {
        if !external {
            self.close();
        }
    }

    /// A click landed somewhere in the document. Clicks outside both the
    /// toggle and the menu close it.
    pub fn on_document_click(&mut self, inside_toggle: bool, inside_menu: bool) {
        if !inside_toggle && !inside_menu {
            self.close();
        }
    }
}

// ---------------------------------------------------------------------------
// Scroll chrome
// ---------------------------------------------------------------------------

/// Scroll thresholds, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    /// Added to the scroll position before testing which section it is in.
    pub marker_offset: f64,
    /// Header gets its `scrolled` style past this.
    pub header_threshold: f64,
    /// Scroll-to-top button appears past this.
    pub scroll_top_threshold: f64,
}

impl ScrollConfig {
    /// Section marker 100px below the top, header at 50px, scroll-to-top at 500px.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            marker_offset: 100.0,
            header_threshold: 50.0,
            scroll_top_threshold: 500.0,
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Vertical extent of one page section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    /// Offset of the section's top edge from the document top.
    pub top: f64,
    /// Section height.
    pub height: f64,
}

impl SectionBounds {
    /// Whether `y` falls in `[top, top + height)`.
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// One entry of the navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MenuItem {
    /// Links off-site. External items never become active.
    pub external: bool,
}

/// What changed in one [`ScrollChrome::on_scroll`] call. `None` fields are
/// unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChromeUpdate {
    /// New active menu item (`Some(None)` clears it).
    pub active_item: Option<Option<usize>>,
    /// New header `scrolled` state.
    pub header_scrolled: Option<bool>,
    /// New scroll-to-top visibility.
    pub scroll_top_visible: Option<bool>,
}

impl ChromeUpdate {
    /// Whether nothing changed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.active_item.is_none()
            && self.header_scrolled.is_none()
            && self.scroll_top_visible.is_none()
    }
}

/// Scroll-derived chrome state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollChrome {
    config: ScrollConfig,
    active_item: Option<usize>,
    header_scrolled: bool,
    scroll_top_visible: bool,
}

impl ScrollChrome {
    /// Creates chrome state at the top of the page.
    #[must_use]
    pub const fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            active_item: None,
            header_scrolled: false,
            scroll_top_visible: false,
        }
    }

    /// Currently highlighted menu item.
    #[must_use]
    pub const fn active_item(&self) -> Option<usize> {
        self.active_item
    }

    /// Whether the header has its `scrolled` style.
    #[must_use]
    pub const fn header_scrolled(&self) -> bool {
        self.header_scrolled
    }

    /// Whether the scroll-to-top button is shown.
    #[must_use]
    pub const fn scroll_top_visible(&self) -> bool {
        self.scroll_top_visible
    }

    /// Recomputes the chrome for scroll position `scroll_y`.
    ///
    /// Section `i` pairs with menu item `i`. Every section containing the
    /// marker line is visited in order and the last one wins. A matching
    /// section whose menu item is missing or external clears the highlight.
    /// When no section contains the marker, the highlight is kept.
    pub fn on_scroll(
        &mut self,
        scroll_y: f64,
        sections: &[SectionBounds],
        items: &[MenuItem],
    ) -> ChromeUpdate {
        let marker = scroll_y + self.config.marker_offset;
        let mut active = self.active_item;
        for (index, section) in sections.iter().enumerate() {
            if section.contains(marker) {
                active = items
                    .get(index)
                    .filter(|item| !item.external)
                    .map(|_| index);
            }
        }

        let header_scrolled = scroll_y > self.config.header_threshold;
        let scroll_top_visible = scroll_y > self.config.scroll_top_threshold;

        let update = ChromeUpdate {
            active_item: (active != self.active_item).then_some(active),
            header_scrolled: (header_scrolled != self.header_scrolled).then_some(header_scrolled),
            scroll_top_visible: (scroll_top_visible != self.scroll_top_visible)
                .then_some(scroll_top_visible),
        };
        self.active_item = active;
        self.header_scrolled = header_scrolled;
        self.scroll_top_visible = scroll_top_visible;
        update
    }
}

// ---------------------------------------------------------------------------
// Smooth scroll
// ---------------------------------------------------------------------------

/// Where a smooth scroll should go.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScrollTarget {
    /// The element with this id.
    Anchor(String),
    /// The top of the page (logo, scroll-to-top button, bare `#`).
    Top,
}

impl ScrollTarget {
    /// Interprets a link `href`.
    ///
    /// In-page fragments scroll smoothly; anything else returns `None` and the
    /// browser follows the link normally.
    #[must_use]
    pub fn from_href(href: &str) -> Option<Self> {
        let id = href.strip_prefix('#')?;
        if id.is_empty() {
            Some(Self::Top)
        } else {
            Some(Self::Anchor(id.into()))
        }
    }
}
