// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the controller.
//!
//! This module provides a [`TraceSink`] trait with one method per controller
//! event. All method bodies default to no-ops, so implementing only the events
//! you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::controller::{Direction, NavOutcome};
use crate::input::InputEvent;
use crate::time::{Duration, HostTime};

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// What asked for a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavigationKind {
    /// One step in a direction (keys, buttons, swipes).
    Step(Direction),
    /// Direct selection of a position (slide or dot click).
    Jump(usize),
    /// An autoplay tick. Ticks ignore the animation lock.
    AutoplayTick,
}

/// Emitted when an input event reaches the controller.
#[derive(Clone, Copy, Debug)]
pub struct InputTraceEvent {
    /// Host time the input was handled.
    pub at: HostTime,
    /// The input.
    pub event: InputEvent,
}

/// Emitted for every navigation request, committed or not.
#[derive(Clone, Copy, Debug)]
pub struct NavigationEvent {
    /// Host time of the request.
    pub at: HostTime,
    /// What asked for it.
    pub kind: NavigationKind,
    /// Focused index before the request.
    pub from: usize,
    /// Focused index after the request.
    pub to: usize,
    /// Whether it committed.
    pub outcome: NavOutcome,
}

/// Emitted after a render pass has been pushed to the view.
#[derive(Clone, Copy, Debug)]
pub struct RenderEvent {
    /// Host time of the render.
    pub at: HostTime,
    /// Monotonic render counter.
    pub render_index: u64,
    /// Focused index that was rendered.
    pub current: usize,
    /// Number of slides parked off-stage.
    pub parked: usize,
    /// When the animation lock will release.
    pub settle_until: HostTime,
}

/// Emitted when the animation lock releases.
#[derive(Clone, Copy, Debug)]
pub struct LockReleaseEvent {
    /// The settle deadline that was reached.
    pub at: HostTime,
    /// Focused index at release.
    pub current: usize,
}

/// How autoplay changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AutoplayChange {
    /// A timer was created while none was live.
    Started,
    /// A live timer was replaced.
    Restarted,
    /// A live timer was cancelled.
    Stopped,
}

/// Emitted on autoplay start and stop.
#[derive(Clone, Copy, Debug)]
pub struct AutoplayEvent {
    /// Host time of the change.
    pub at: HostTime,
    /// What happened.
    pub change: AutoplayChange,
    /// Configured tick period.
    pub period: Duration,
    /// Total ticks fired so far in this session.
    pub ticks: u64,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the controller.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when an input event is handled.
    fn on_input(&mut self, e: &InputTraceEvent) {
        _ = e;
    }

    /// Called for every navigation request.
    fn on_navigation(&mut self, e: &NavigationEvent) {
        _ = e;
    }

    /// Called after each render pass.
    fn on_render(&mut self, e: &RenderEvent) {
        _ = e;
    }

    /// Called when the animation lock releases.
    fn on_lock_release(&mut self, e: &LockReleaseEvent) {
        _ = e;
    }

    /// Called on autoplay start and stop.
    fn on_autoplay(&mut self, e: &AutoplayEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits an [`InputTraceEvent`].
    #[inline]
    pub fn input(&mut self, e: &InputTraceEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_input(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`NavigationEvent`].
    #[inline]
    pub fn navigation(&mut self, e: &NavigationEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_navigation(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RenderEvent`].
    #[inline]
    pub fn render(&mut self, e: &RenderEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_render(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LockReleaseEvent`].
    #[inline]
    pub fn lock_release(&mut self, e: &LockReleaseEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_lock_release(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`AutoplayEvent`].
    #[inline]
    pub fn autoplay(&mut self, e: &AutoplayEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_autoplay(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_nav() -> NavigationEvent {
        NavigationEvent {
            at: HostTime(100),
            kind: NavigationKind::Step(Direction::Next),
            from: 3,
            to: 4,
            outcome: NavOutcome::Committed,
        }
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_navigation(&sample_nav());
        sink.on_lock_release(&LockReleaseEvent {
            at: HostTime(700),
            current: 4,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.navigation(&sample_nav());
        tracer.input(&InputTraceEvent {
            at: HostTime(0),
            event: InputEvent::Next,
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            targets: Vec<usize>,
        }
        impl TraceSink for RecordingSink {
            fn on_navigation(&mut self, e: &NavigationEvent) {
                self.targets.push(e.to);
            }
        }

        let mut sink = RecordingSink {
            targets: Vec::new(),
        };
        let mut tracer = Tracer::new(&mut sink);
        tracer.navigation(&sample_nav());
        drop(tracer);
        assert_eq!(sink.targets, &[4]);
    }
}
