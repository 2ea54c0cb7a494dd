// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discrete input events and gesture recognition.
//!
//! Platform glue turns raw key, click, and touch events into [`InputEvent`]s.
//! The controller only ever sees these; it knows nothing about pointers or key
//! codes. [`SwipeTracker`] does the one piece of raw-event interpretation that
//! has state of its own: deciding whether a touch sequence was a horizontal
//! swipe.

use kurbo::Point;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::controller::{CoverflowController, Direction, NavOutcome};
use crate::time::HostTime;
use crate::trace::InputTraceEvent;
use crate::view::CoverflowView;

/// A discrete request from the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Previous slide (left arrow, prev button).
    Prev,
    /// Next slide (right arrow, next button).
    Next,
    /// Focus a specific position (slide click, dot click).
    Select(usize),
    /// Finger travelled left: advance to the next slide.
    SwipeLeft,
    /// Finger travelled right: go back to the previous slide.
    SwipeRight,
    /// Play/pause button.
    ToggleAutoplay,
}

impl InputEvent {
    /// Whether this event is a manual navigation request. Manual navigation
    /// always stops autoplay.
    #[must_use]
    pub const fn is_manual_navigation(self) -> bool {
        !matches!(self, Self::ToggleAutoplay)
    }

    /// Maps a key to an input event, if it is a navigation key.
    #[must_use]
    pub const fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::ArrowLeft => Some(Self::Prev),
            Key::ArrowRight => Some(Self::Next),
            Key::Other => None,
        }
    }
}

/// The keys the carousel reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Anything else.
    Other,
}

impl Key {
    /// Parses a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

/// Swipe recognition thresholds, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Horizontal travel needed at touch end to count as a swipe.
    pub commit_threshold: f64,
    /// Horizontal travel during a move after which page scrolling is
    /// suppressed.
    pub scroll_lock_threshold: f64,
}

impl SwipeConfig {
    /// The stock thresholds: commit past 30px, lock scrolling past 10px.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            commit_threshold: 30.0,
            scroll_lock_threshold: 10.0,
        }
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Tracks one touch sequence at a time and classifies it at touch end.
///
/// Nothing is decided mid-gesture except whether to suppress page scrolling;
/// the swipe itself commits only in [`touch_end`](Self::touch_end).
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    config: SwipeConfig,
    start: Option<Point>,
}

impl SwipeTracker {
    /// Creates a tracker with the given thresholds.
    #[must_use]
    pub const fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            start: None,
        }
    }

    /// Whether a touch sequence is in progress.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Begins a touch sequence at `at`, replacing any sequence in progress.
    pub fn touch_start(&mut self, at: Point) {
        self.start = Some(at);
    }

    /// Reports a move. Returns `true` if the page should not scroll, i.e. the
    /// gesture has travelled far enough horizontally to look like a swipe.
    #[must_use]
    pub fn touch_move(&mut self, at: Point) -> bool {
        match self.start {
            Some(start) => (at.x - start.x).abs() > self.config.scroll_lock_threshold,
            None => false,
        }
    }

    /// Ends the touch sequence at `at` and classifies it.
    ///
    /// A swipe needs horizontal travel that both dominates vertical travel and
    /// exceeds the commit threshold. Returns `None` for taps, vertical drags,
    /// short drags, and ends without a start.
    pub fn touch_end(&mut self, at: Point) -> Option<InputEvent> {
        let start = self.start.take()?;
        let travel = start - at;
        if travel.x.abs() > travel.y.abs() && travel.x.abs() > self.config.commit_threshold {
            if travel.x > 0.0 {
                Some(InputEvent::SwipeLeft)
            } else {
                Some(InputEvent::SwipeRight)
            }
        } else {
            None
        }
    }

    /// Abandons the touch sequence in progress.
    pub fn touch_cancel(&mut self) {
        self.start = None;
    }
}

// ---------------------------------------------------------------------------
// Routing
// ---------------------------------------------------------------------------

impl<V: CoverflowView> CoverflowController<V> {
    /// Routes one input event.
    ///
    /// Manual navigation stops autoplay before it is attempted, so autoplay
    /// stops even when the navigation itself is then rejected by the lock.
    /// Returns the navigation outcome, or `None` for
    /// [`InputEvent::ToggleAutoplay`].
    pub fn handle(&mut self, event: InputEvent, now: HostTime) -> Option<NavOutcome> {
        self.pump(now);
        self.tracer().input(&InputTraceEvent { at: now, event });
        if event.is_manual_navigation() {
            self.stop_autoplay(now);
        }
        match event {
            InputEvent::Prev | InputEvent::SwipeRight => Some(self.navigate(Direction::Prev, now)),
            InputEvent::Next | InputEvent::SwipeLeft => Some(self.navigate(Direction::Next, now)),
            InputEvent::Select(index) => Some(self.go_to_index(index, now)),
            InputEvent::ToggleAutoplay => {
                self.toggle_autoplay(now);
                None
            }
        }
    }
}
