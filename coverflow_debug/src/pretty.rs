// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Times are
//! printed in host milliseconds.

use std::io::Write;

use coverflow_core::controller::Direction;
use coverflow_core::input::InputEvent;
use coverflow_core::trace::{
    AutoplayChange, AutoplayEvent, InputTraceEvent, LockReleaseEvent, NavigationEvent,
    NavigationKind, RenderEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn input_name(e: InputEvent) -> String {
    match e {
        InputEvent::Prev => "prev".into(),
        InputEvent::Next => "next".into(),
        InputEvent::Select(i) => format!("select({i})"),
        InputEvent::SwipeLeft => "swipe-left".into(),
        InputEvent::SwipeRight => "swipe-right".into(),
        InputEvent::ToggleAutoplay => "toggle-autoplay".into(),
    }
}

fn kind_name(k: NavigationKind) -> String {
    match k {
        NavigationKind::Step(Direction::Prev) => "step-prev".into(),
        NavigationKind::Step(Direction::Next) => "step-next".into(),
        NavigationKind::Jump(i) => format!("jump({i})"),
        NavigationKind::AutoplayTick => "autoplay-tick".into(),
    }
}

fn change_name(c: AutoplayChange) -> &'static str {
    match c {
        AutoplayChange::Started => "started",
        AutoplayChange::Restarted => "restarted",
        AutoplayChange::Stopped => "stopped",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_input(&mut self, e: &InputTraceEvent) {
        let _ = writeln!(
            self.writer,
            "[input] {} at {}ms",
            input_name(e.event),
            e.at.as_millis(),
        );
    }

    fn on_navigation(&mut self, e: &NavigationEvent) {
        let _ = writeln!(
            self.writer,
            "[nav] {} {} -> {} {:?} at {}ms",
            kind_name(e.kind),
            e.from,
            e.to,
            e.outcome,
            e.at.as_millis(),
        );
    }

    fn on_render(&mut self, e: &RenderEvent) {
        let _ = writeln!(
            self.writer,
            "[render] #{} current={} parked={} at {}ms settle={}ms",
            e.render_index,
            e.current,
            e.parked,
            e.at.as_millis(),
            e.settle_until.as_millis(),
        );
    }

    fn on_lock_release(&mut self, e: &LockReleaseEvent) {
        let _ = writeln!(
            self.writer,
            "[unlock] current={} at {}ms",
            e.current,
            e.at.as_millis(),
        );
    }

    fn on_autoplay(&mut self, e: &AutoplayEvent) {
        let _ = writeln!(
            self.writer,
            "[autoplay] {} period={}ms ticks={} at {}ms",
            change_name(e.change),
            e.period.as_millis(),
            e.ticks,
            e.at.as_millis(),
        );
    }
}
