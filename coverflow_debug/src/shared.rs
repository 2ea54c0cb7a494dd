// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sink adapters.
//!
//! The controller owns its sink as a `Box<dyn TraceSink>`. [`SharedSink`]
//! keeps a second handle so the caller can read a recording back while the
//! controller is still alive. [`Tee`] sends every event to two sinks.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use coverflow_core::trace::{
    AutoplayEvent, InputTraceEvent, LockReleaseEvent, NavigationEvent, RenderEvent, TraceSink,
};

// ---------------------------------------------------------------------------
// SharedSink
// ---------------------------------------------------------------------------

/// A reference-counted handle to a sink.
///
/// Clones share the same inner sink.
#[derive(Debug, Default)]
pub struct SharedSink<S> {
    inner: Rc<RefCell<S>>,
}

impl<S> Clone for SharedSink<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S> SharedSink<S> {
    /// Wraps a sink.
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self {
            inner: Rc::new(RefCell::new(sink)),
        }
    }

    /// Borrows the inner sink.
    ///
    /// # Panics
    ///
    /// Panics if the sink is currently borrowed mutably, which only happens
    /// while an event is being delivered to it.
    #[must_use]
    pub fn borrow(&self) -> Ref<'_, S> {
        self.inner.borrow()
    }

    /// Mutably borrows the inner sink.
    ///
    /// # Panics
    ///
    /// Panics if the sink is already borrowed.
    #[must_use]
    pub fn borrow_mut(&self) -> RefMut<'_, S> {
        self.inner.borrow_mut()
    }
}

impl<S: TraceSink> TraceSink for SharedSink<S> {
    fn on_input(&mut self, e: &InputTraceEvent) {
        self.inner.borrow_mut().on_input(e);
    }

    fn on_navigation(&mut self, e: &NavigationEvent) {
        self.inner.borrow_mut().on_navigation(e);
    }

    fn on_render(&mut self, e: &RenderEvent) {
        self.inner.borrow_mut().on_render(e);
    }

    fn on_lock_release(&mut self, e: &LockReleaseEvent) {
        self.inner.borrow_mut().on_lock_release(e);
    }

    fn on_autoplay(&mut self, e: &AutoplayEvent) {
        self.inner.borrow_mut().on_autoplay(e);
    }
}

// ---------------------------------------------------------------------------
// Tee
// ---------------------------------------------------------------------------

/// Forwards every event to `A`, then to `B`.
#[derive(Clone, Debug, Default)]
pub struct Tee<A, B> {
    /// First receiver.
    pub first: A,
    /// Second receiver.
    pub second: B,
}

impl<A, B> Tee<A, B> {
    /// Combines two sinks.
    #[must_use]
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: TraceSink, B: TraceSink> TraceSink for Tee<A, B> {
    fn on_input(&mut self, e: &InputTraceEvent) {
        self.first.on_input(e);
        self.second.on_input(e);
    }

    fn on_navigation(&mut self, e: &NavigationEvent) {
        self.first.on_navigation(e);
        self.second.on_navigation(e);
    }

    fn on_render(&mut self, e: &RenderEvent) {
        self.first.on_render(e);
        self.second.on_render(e);
    }

    fn on_lock_release(&mut self, e: &LockReleaseEvent) {
        self.first.on_lock_release(e);
        self.second.on_lock_release(e);
    }

    fn on_autoplay(&mut self, e: &AutoplayEvent) {
        self.first.on_autoplay(e);
        self.second.on_autoplay(e);
    }
}
