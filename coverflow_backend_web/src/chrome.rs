// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page chrome bindings: mobile menu, scroll-driven header and menu state,
//! smooth scrolling, and the contact form.
//!
//! Every element here is optional. A page without a menu or a form simply
//! gets no listeners for it.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use coverflow_core::page::{
    ChromeUpdate, MenuItem, MenuState, ScrollChrome, ScrollConfig, ScrollTarget, SectionBounds,
};
use wasm_bindgen::JsCast as _;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlFormElement, Node, ScrollBehavior,
    ScrollIntoViewOptions, ScrollToOptions, Window,
};

use crate::dom::{query_all, query_optional};
use crate::error::BindError;
use crate::listener::EventBindings;
use crate::selectors::{DomSelectors, class};

/// Message shown after the contact form is submitted.
pub const FORM_THANK_YOU: &str = "Thank you for your message! We'll get back to you soon.";

fn scroll_to_top(window: &Window) {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn scroll_to(window: &Window, document: &Document, target: &ScrollTarget) {
    match target {
        ScrollTarget::Top => scroll_to_top(window),
        ScrollTarget::Anchor(id) => {
            if let Some(section) = document.get_element_by_id(id) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    }
}

fn set_class(el: &Element, name: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(name, on);
}

fn event_target_node(event: &Event) -> Option<Node> {
    event.target()?.dyn_into::<Node>().ok()
}

struct Menu {
    state: MenuState,
    toggle: HtmlElement,
    menu: HtmlElement,
}

impl Menu {
    fn apply(&self) {
        let open = self.state.is_open();
        set_class(&self.toggle, class::ACTIVE, open);
        set_class(&self.menu, class::ACTIVE, open);
    }
}

/// Binds the mobile menu, scroll handling, smooth-scroll links, the logo, the
/// scroll-to-top button, and the contact form.
///
/// # Errors
///
/// Fails if a matched element has the wrong type or a listener cannot be
/// attached.
pub fn bind_chrome(
    window: &Window,
    document: &Document,
    selectors: &DomSelectors,
    scroll: ScrollConfig,
) -> Result<EventBindings, BindError> {
    let mut bindings = EventBindings::default();
    let menu_items: Vec<HtmlElement> = query_all(document, selectors.menu_items)?;

    // -- mobile menu -------------------------------------------------------
    let toggle: Option<HtmlElement> = query_optional(document, selectors.menu_toggle)?;
    let main_menu: Option<HtmlElement> = query_optional(document, selectors.main_menu)?;
    let menu = match (toggle, main_menu) {
        (Some(toggle), Some(menu)) => Some(Rc::new(RefCell::new(Menu {
            state: MenuState::default(),
            toggle,
            menu,
        }))),
        _ => None,
    };
    if let Some(menu) = &menu {
        let toggle = menu.borrow().toggle.clone();
        let handle = Rc::clone(menu);
        bindings.listen(&toggle, "click", move |_| {
            let mut m = handle.borrow_mut();
            m.state.toggle();
            m.apply();
        })?;

        let handle = Rc::clone(menu);
        bindings.listen(document, "click", move |event| {
            let Some(node) = event_target_node(&event) else {
                return;
            };
            let mut m = handle.borrow_mut();
            let inside_toggle = m.toggle.contains(Some(&node));
            let inside_menu = m.menu.contains(Some(&node));
            m.state.on_document_click(inside_toggle, inside_menu);
            m.apply();
        })?;
    }

    // -- menu links: close the menu, smooth-scroll in-page targets --------
    for item in &menu_items {
        let external = item.class_list().contains(class::EXTERNAL);
        let menu = menu.clone();
        let item_el = item.clone();
        let window = window.clone();
        let document = document.clone();
        bindings.listen(item, "click", move |event| {
            if let Some(menu) = &menu {
                let mut m = menu.borrow_mut();
                m.state.on_menu_item_click(external);
                m.apply();
            }
            let target = item_el
                .get_attribute("href")
                .and_then(|href| ScrollTarget::from_href(&href));
            if let Some(target) = target {
                event.prevent_default();
                scroll_to(&window, &document, &target);
            }
        })?;
    }

    // -- scroll-driven state -----------------------------------------------
    let sections: Vec<HtmlElement> = query_all(document, selectors.sections)?;
    let items: Vec<MenuItem> = menu_items
        .iter()
        .map(|el| MenuItem {
            external: el.class_list().contains(class::EXTERNAL),
        })
        .collect();
    let header: Option<HtmlElement> = query_optional(document, selectors.header)?;
    let scroll_top: Option<HtmlElement> = query_optional(document, selectors.scroll_top)?;
    {
        let mut chrome = ScrollChrome::new(scroll);
        let window_for_scroll = window.clone();
        let scroll_top = scroll_top.clone();
        bindings.listen(window, "scroll", move |_| {
            let scroll_y = window_for_scroll.scroll_y().unwrap_or(0.0);
            let bounds: Vec<SectionBounds> = sections
                .iter()
                .map(|s| SectionBounds {
                    top: f64::from(s.offset_top()),
                    height: f64::from(s.client_height()),
                })
                .collect();
            let update = chrome.on_scroll(scroll_y, &bounds, &items);
            apply_update(
                &update,
                &menu_items,
                &items,
                header.as_ref(),
                scroll_top.as_ref(),
            );
        })?;
    }

    // -- scroll to top -----------------------------------------------------
    if let Some(logo) = query_optional::<HtmlElement>(document, selectors.logo)? {
        let window = window.clone();
        bindings.listen(&logo, "click", move |event| {
            event.prevent_default();
            scroll_to_top(&window);
        })?;
    }
    if let Some(button) = scroll_top {
        let window = window.clone();
        bindings.listen(&button, "click", move |_| scroll_to_top(&window))?;
    }

    // -- contact form ------------------------------------------------------
    if let Some(form) = query_optional::<HtmlFormElement>(document, selectors.contact_form)? {
        let window = window.clone();
        let form_el = form.clone();
        bindings.listen(&form, "submit", move |event| {
            event.prevent_default();
            let _ = window.alert_with_message(FORM_THANK_YOU);
            form_el.reset();
        })?;
    }

    Ok(bindings)
}

fn apply_update(
    update: &ChromeUpdate,
    menu_items: &[HtmlElement],
    items: &[MenuItem],
    header: Option<&HtmlElement>,
    scroll_top: Option<&HtmlElement>,
) {
    if let Some(active) = update.active_item {
        for (index, (el, item)) in menu_items.iter().zip(items).enumerate() {
            if !item.external {
                set_class(el, class::ACTIVE, active == Some(index));
            }
        }
    }
    if let (Some(on), Some(header)) = (update.header_scrolled, header) {
        set_class(header, class::SCROLLED, on);
    }
    if let (Some(on), Some(button)) = (update.scroll_top_visible, scroll_top) {
        set_class(button, class::VISIBLE, on);
    }
}
