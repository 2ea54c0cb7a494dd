// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event listeners that detach themselves on drop.

use alloc::boxed::Box;
use alloc::vec::Vec;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::error::BindError;

type EventClosure = Closure<dyn FnMut(Event)>;

struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: EventClosure,
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Whether a listener may call `preventDefault()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Passive {
    /// Passive: the browser may scroll without waiting for the handler.
    Yes,
    /// Non-passive: the handler may cancel scrolling.
    No,
}

/// A set of DOM event listeners.
///
/// Each listener's closure lives exactly as long as the set; dropping the set
/// removes every listener from its target.
#[derive(Default)]
pub struct EventBindings {
    listeners: Vec<Listener>,
}

impl core::fmt::Debug for EventBindings {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventBindings")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl EventBindings {
    /// Number of attached listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listeners are attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Moves every listener of `other` into this set.
    pub fn extend(&mut self, mut other: Self) {
        self.listeners.append(&mut other.listeners);
    }

    /// Attaches `handler` with the browser's default options.
    pub(crate) fn listen(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), BindError> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        self.push(target, kind, closure);
        Ok(())
    }

    /// Attaches `handler` with an explicit `passive` flag.
    pub(crate) fn listen_with(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        passive: Passive,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), BindError> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive == Passive::Yes);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        self.push(target, kind, closure);
        Ok(())
    }

    fn push(&mut self, target: &EventTarget, kind: &'static str, closure: EventClosure) {
        self.listeners.push(Listener {
            target: target.clone(),
            kind,
            closure,
        });
    }
}
