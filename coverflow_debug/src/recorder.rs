// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`].

use coverflow_core::controller::{Direction, NavOutcome};
use coverflow_core::input::InputEvent;
use coverflow_core::time::{Duration, HostTime};
use coverflow_core::trace::{
    AutoplayChange, AutoplayEvent, InputTraceEvent, LockReleaseEvent, NavigationEvent,
    NavigationKind, RenderEvent, TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_INPUT: u8 = 1;
const TAG_NAVIGATION: u8 = 2;
const TAG_RENDER: u8 = 3;
const TAG_LOCK_RELEASE: u8 = 4;
const TAG_AUTOPLAY: u8 = 5;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_usize(&mut self, v: usize) {
        self.write_u64(v as u64);
    }

    fn write_time(&mut self, t: HostTime) {
        self.write_u64(t.as_millis());
    }

    /// Input events are a tag byte plus a `u64` payload (the index for
    /// `Select`, zero otherwise).
    fn write_input(&mut self, e: InputEvent) {
        let (tag, payload) = match e {
            InputEvent::Prev => (0, 0),
            InputEvent::Next => (1, 0),
            InputEvent::Select(i) => (2, i),
            InputEvent::SwipeLeft => (3, 0),
            InputEvent::SwipeRight => (4, 0),
            InputEvent::ToggleAutoplay => (5, 0),
        };
        self.write_u8(tag);
        self.write_usize(payload);
    }

    fn write_kind(&mut self, k: NavigationKind) {
        let (tag, payload) = match k {
            NavigationKind::Step(Direction::Prev) => (0, 0),
            NavigationKind::Step(Direction::Next) => (1, 0),
            NavigationKind::Jump(i) => (2, i),
            NavigationKind::AutoplayTick => (3, 0),
        };
        self.write_u8(tag);
        self.write_usize(payload);
    }

    fn write_outcome(&mut self, o: NavOutcome) {
        self.write_u8(match o {
            NavOutcome::Committed => 0,
            NavOutcome::Locked => 1,
            NavOutcome::Unchanged => 2,
            NavOutcome::OutOfRange => 3,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_input(&mut self, e: &InputTraceEvent) {
        self.write_u8(TAG_INPUT);
        self.write_time(e.at);
        self.write_input(e.event);
    }

    fn on_navigation(&mut self, e: &NavigationEvent) {
        self.write_u8(TAG_NAVIGATION);
        self.write_time(e.at);
        self.write_kind(e.kind);
        self.write_usize(e.from);
        self.write_usize(e.to);
        self.write_outcome(e.outcome);
    }

    fn on_render(&mut self, e: &RenderEvent) {
        self.write_u8(TAG_RENDER);
        self.write_time(e.at);
        self.write_u64(e.render_index);
        self.write_usize(e.current);
        self.write_usize(e.parked);
        self.write_time(e.settle_until);
    }

    fn on_lock_release(&mut self, e: &LockReleaseEvent) {
        self.write_u8(TAG_LOCK_RELEASE);
        self.write_time(e.at);
        self.write_usize(e.current);
    }

    fn on_autoplay(&mut self, e: &AutoplayEvent) {
        self.write_u8(TAG_AUTOPLAY);
        self.write_time(e.at);
        self.write_u8(match e.change {
            AutoplayChange::Started => 0,
            AutoplayChange::Restarted => 1,
            AutoplayChange::Stopped => 2,
        });
        self.write_u64(e.period.as_millis());
        self.write_u64(e.ticks);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Copy, Debug)]
pub enum RecordedEvent {
    /// An [`InputTraceEvent`].
    Input(InputTraceEvent),
    /// A [`NavigationEvent`].
    Navigation(NavigationEvent),
    /// A [`RenderEvent`].
    Render(RenderEvent),
    /// A [`LockReleaseEvent`].
    LockRelease(LockReleaseEvent),
    /// An [`AutoplayEvent`].
    Autoplay(AutoplayEvent),
}

impl RecordedEvent {
    /// Host time of the event.
    #[must_use]
    pub fn at(&self) -> HostTime {
        match self {
            Self::Input(e) => e.at,
            Self::Navigation(e) => e.at,
            Self::Render(e) => e.at,
            Self::LockRelease(e) => e.at,
            Self::Autoplay(e) => e.at,
        }
    }
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
///
/// Decoding stops at the first truncated or unknown record.
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn read_u8(&mut self) -> Option<u8> {
        if self.remaining() < 1 {
            return None;
        }
        let v = self.data[self.pos];
        self.pos += 1;
        Some(v)
    }

    fn read_u64(&mut self) -> Option<u64> {
        if self.remaining() < 8 {
            return None;
        }
        let v = u64::from_le_bytes(self.data[self.pos..self.pos + 8].try_into().ok()?);
        self.pos += 8;
        Some(v)
    }

    fn read_usize(&mut self) -> Option<usize> {
        usize::try_from(self.read_u64()?).ok()
    }

    fn read_time(&mut self) -> Option<HostTime> {
        Some(HostTime(self.read_u64()?))
    }

    fn read_input(&mut self) -> Option<InputEvent> {
        let tag = self.read_u8()?;
        let payload = self.read_usize()?;
        Some(match tag {
            0 => InputEvent::Prev,
            1 => InputEvent::Next,
            2 => InputEvent::Select(payload),
            3 => InputEvent::SwipeLeft,
            4 => InputEvent::SwipeRight,
            5 => InputEvent::ToggleAutoplay,
            _ => return None,
        })
    }

    fn read_kind(&mut self) -> Option<NavigationKind> {
        let tag = self.read_u8()?;
        let payload = self.read_usize()?;
        Some(match tag {
            0 => NavigationKind::Step(Direction::Prev),
            1 => NavigationKind::Step(Direction::Next),
            2 => NavigationKind::Jump(payload),
            3 => NavigationKind::AutoplayTick,
            _ => return None,
        })
    }

    fn read_outcome(&mut self) -> Option<NavOutcome> {
        Some(match self.read_u8()? {
            0 => NavOutcome::Committed,
            1 => NavOutcome::Locked,
            2 => NavOutcome::Unchanged,
            3 => NavOutcome::OutOfRange,
            _ => return None,
        })
    }

    fn read_change(&mut self) -> Option<AutoplayChange> {
        Some(match self.read_u8()? {
            0 => AutoplayChange::Started,
            1 => AutoplayChange::Restarted,
            2 => AutoplayChange::Stopped,
            _ => return None,
        })
    }

    fn decode_input(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Input(InputTraceEvent {
            at: self.read_time()?,
            event: self.read_input()?,
        }))
    }

    fn decode_navigation(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Navigation(NavigationEvent {
            at: self.read_time()?,
            kind: self.read_kind()?,
            from: self.read_usize()?,
            to: self.read_usize()?,
            outcome: self.read_outcome()?,
        }))
    }

    fn decode_render(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Render(RenderEvent {
            at: self.read_time()?,
            render_index: self.read_u64()?,
            current: self.read_usize()?,
            parked: self.read_usize()?,
            settle_until: self.read_time()?,
        }))
    }

    fn decode_lock_release(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::LockRelease(LockReleaseEvent {
            at: self.read_time()?,
            current: self.read_usize()?,
        }))
    }

    fn decode_autoplay(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Autoplay(AutoplayEvent {
            at: self.read_time()?,
            change: self.read_change()?,
            period: Duration(self.read_u64()?),
            ticks: self.read_u64()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        let event = match tag {
            TAG_INPUT => self.decode_input(),
            TAG_NAVIGATION => self.decode_navigation(),
            TAG_RENDER => self.decode_render(),
            TAG_LOCK_RELEASE => self.decode_lock_release(),
            TAG_AUTOPLAY => self.decode_autoplay(),
            _ => None,
        };
        if event.is_none() {
            // Corrupt or truncated: stop for good.
            self.pos = self.data.len();
        }
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_recording_decodes_to_nothing() {
        assert_eq!(decode(&[]).count(), 0);
    }

    #[test]
    fn session_events_decode_in_order() {
        let mut rec = RecorderSink::new();
        rec.on_input(&InputTraceEvent {
            at: HostTime(10),
            event: InputEvent::Select(5),
        });
        rec.on_navigation(&NavigationEvent {
            at: HostTime(10),
            kind: NavigationKind::Jump(5),
            from: 3,
            to: 5,
            outcome: NavOutcome::Committed,
        });
        rec.on_render(&RenderEvent {
            at: HostTime(10),
            render_index: 1,
            current: 5,
            parked: 0,
            settle_until: HostTime(610),
        });
        rec.on_autoplay(&AutoplayEvent {
            at: HostTime(10),
            change: AutoplayChange::Stopped,
            period: Duration(4000),
            ticks: 2,
        });

        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(events.len(), 4);
        match events[0] {
            RecordedEvent::Input(e) => assert_eq!(e.event, InputEvent::Select(5)),
            other => panic!("expected input, got {other:?}"),
        }
        match events[1] {
            RecordedEvent::Navigation(e) => {
                assert_eq!(e.kind, NavigationKind::Jump(5));
                assert_eq!((e.from, e.to), (3, 5));
                assert_eq!(e.outcome, NavOutcome::Committed);
            }
            other => panic!("expected navigation, got {other:?}"),
        }
        match events[2] {
            RecordedEvent::Render(e) => assert_eq!(e.settle_until, HostTime(610)),
            other => panic!("expected render, got {other:?}"),
        }
        match events[3] {
            RecordedEvent::Autoplay(e) => {
                assert_eq!(e.change, AutoplayChange::Stopped);
                assert_eq!(e.ticks, 2);
            }
            other => panic!("expected autoplay, got {other:?}"),
        }
    }

    #[test]
    fn truncated_record_stops_decoding() {
        let mut rec = RecorderSink::new();
        rec.on_lock_release(&LockReleaseEvent {
            at: HostTime(600),
            current: 3,
        });
        rec.on_lock_release(&LockReleaseEvent {
            at: HostTime(1200),
            current: 4,
        });
        let bytes = rec.into_bytes();
        let cut = &bytes[..bytes.len() - 3];
        let events: Vec<_> = decode(cut).collect();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].at(), HostTime(600));
    }
}
