// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel input bindings.
//!
//! Translates DOM `keydown`, `click`, and touch events into
//! [`InputEvent`]s for the shared controller. Handlers hold a weak reference,
//! so a dropped controller silently disables them.

use alloc::rc::{Rc, Weak};
use core::cell::RefCell;

use coverflow_core::controller::CoverflowController;
use coverflow_core::input::{InputEvent, Key, SwipeConfig, SwipeTracker};
use kurbo::Point;
use wasm_bindgen::JsCast as _;
use web_sys::{Document, Event, HtmlElement, KeyboardEvent, TouchEvent};

use crate::dom::query;
use crate::dom_view::DomView;
use crate::error::BindError;
use crate::listener::{EventBindings, Passive};
use crate::selectors::DomSelectors;

/// The controller as shared between the frame loop and DOM handlers.
pub type SharedController = Rc<RefCell<CoverflowController<DomView>>>;

fn dispatch(controller: &Weak<RefCell<CoverflowController<DomView>>>, event: InputEvent) {
    let Some(controller) = controller.upgrade() else {
        return;
    };
    // A handler firing while the controller is mid-update is dropped, the
    // same as input arriving during the animation lock.
    let Ok(mut controller) = controller.try_borrow_mut() else {
        return;
    };
    let _ = controller.handle(event, crate::now());
}

/// First changed touch of a touch event, in screen coordinates.
fn touch_point(event: &Event) -> Option<Point> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
    Some(Point::new(
        f64::from(touch.screen_x()),
        f64::from(touch.screen_y()),
    ))
}

/// Binds keys, slide and dot clicks, the nav and play/pause buttons, and
/// swipes on the carousel container.
///
/// # Errors
///
/// Fails if a button is missing or a listener cannot be attached.
pub fn bind_carousel(
    controller: &SharedController,
    document: &Document,
    selectors: &DomSelectors,
    swipe: SwipeConfig,
) -> Result<EventBindings, BindError> {
    let mut bindings = EventBindings::default();
    let weak = Rc::downgrade(controller);
    let (container, items, dots) = {
        let c = controller.borrow();
        let view = c.view();
        (
            view.container().clone(),
            view.items().to_vec(),
            view.dots().to_vec(),
        )
    };

    {
        let weak = weak.clone();
        bindings.listen(&container, "keydown", move |event: Event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|e| Key::from_name(&e.key()))
            else {
                return;
            };
            if let Some(input) = InputEvent::from_key(key) {
                dispatch(&weak, input);
            }
        })?;
    }

    for (index, el) in items.iter().chain(dots.iter()).enumerate() {
        let position = index % items.len();
        let weak = weak.clone();
        bindings.listen(el, "click", move |_| {
            dispatch(&weak, InputEvent::Select(position));
        })?;
    }

    let buttons = [
        (selectors.prev_button, InputEvent::Prev),
        (selectors.next_button, InputEvent::Next),
        (selectors.play_pause_button, InputEvent::ToggleAutoplay),
    ];
    for (selector, input) in buttons {
        let button: HtmlElement = query(document, selector)?;
        let weak = weak.clone();
        bindings.listen(&button, "click", move |_| dispatch(&weak, input))?;
    }

    let tracker = Rc::new(RefCell::new(SwipeTracker::new(swipe)));
    {
        let tracker = Rc::clone(&tracker);
        bindings.listen_with(&container, "touchstart", Passive::Yes, move |event| {
            if let Some(p) = touch_point(&event) {
                tracker.borrow_mut().touch_start(p);
            }
        })?;
    }
    {
        let tracker = Rc::clone(&tracker);
        bindings.listen_with(&container, "touchmove", Passive::No, move |event| {
            if let Some(p) = touch_point(&event)
                && tracker.borrow_mut().touch_move(p)
            {
                event.prevent_default();
            }
        })?;
    }
    {
        let tracker = Rc::clone(&tracker);
        bindings.listen_with(&container, "touchend", Passive::Yes, move |event| {
            let Some(p) = touch_point(&event) else {
                tracker.borrow_mut().touch_cancel();
                return;
            };
            let swipe = tracker.borrow_mut().touch_end(p);
            if let Some(input) = swipe {
                dispatch(&weak, input);
            }
        })?;
    }
    bindings.listen_with(&container, "touchcancel", Passive::Yes, move |_| {
        tracker.borrow_mut().touch_cancel();
    })?;

    Ok(bindings)
}
