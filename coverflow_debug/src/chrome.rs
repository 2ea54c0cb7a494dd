// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][format] JSON to the given writer.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
///
/// Renders become complete (`"X"`) events spanning the slide transition, so
/// the animation lock is visible as a bar. Everything else is an instant.
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();

    for recorded in decode(bytes) {
        match recorded {
            RecordedEvent::Input(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Input",
                    "cat": "Input",
                    "ts": ms_to_us(e.at.as_millis()),
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "event": format!("{:?}", e.event),
                    }
                }));
            }
            RecordedEvent::Navigation(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Navigation",
                    "cat": "Carousel",
                    "ts": ms_to_us(e.at.as_millis()),
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "kind": format!("{:?}", e.kind),
                        "from": e.from,
                        "to": e.to,
                        "outcome": format!("{:?}", e.outcome),
                    }
                }));
            }
            RecordedEvent::Render(e) => {
                events.push(json!({
                    "ph": "X",
                    "name": "Transition",
                    "cat": "Carousel",
                    "ts": ms_to_us(e.at.as_millis()),
                    "dur": ms_to_us(e.settle_until.saturating_duration_since(e.at).as_millis()),
                    "pid": 0,
                    "tid": 1,
                    "args": {
                        "render_index": e.render_index,
                        "current": e.current,
                        "parked": e.parked,
                    }
                }));
            }
            RecordedEvent::LockRelease(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "LockRelease",
                    "cat": "Carousel",
                    "ts": ms_to_us(e.at.as_millis()),
                    "pid": 0,
                    "tid": 1,
                    "s": "t",
                    "args": {
                        "current": e.current,
                    }
                }));
            }
            RecordedEvent::Autoplay(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Autoplay",
                    "cat": "Autoplay",
                    "ts": ms_to_us(e.at.as_millis()),
                    "pid": 0,
                    "tid": 2,
                    "s": "p",
                    "args": {
                        "change": format!("{:?}", e.change),
                        "period_ms": e.period.as_millis(),
                        "ticks": e.ticks,
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn ms_to_us(ms: u64) -> u64 {
    ms.saturating_mul(1000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use coverflow_core::time::HostTime;
    use coverflow_core::controller::{Direction, NavOutcome};
    use coverflow_core::input::InputEvent;
    use coverflow_core::trace::{
        InputTraceEvent, LockReleaseEvent, NavigationEvent, NavigationKind, RenderEvent,
        TraceSink,
    };

    fn export_json(rec: &RecorderSink) -> Vec<Value> {
        let mut out = Vec::new();
        export(rec.as_bytes(), &mut out).expect("export");
        serde_json::from_slice(&out).expect("valid JSON")
    }

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        rec.on_input(&InputTraceEvent {
            at: HostTime(100),
            event: InputEvent::Next,
        });
        rec.on_navigation(&NavigationEvent {
            at: HostTime(100),
            kind: NavigationKind::Step(Direction::Next),
            from: 3,
            to: 4,
            outcome: NavOutcome::Committed,
        });
        rec.on_lock_release(&LockReleaseEvent {
            at: HostTime(700),
            current: 4,
        });

        let events = export_json(&rec);
        assert_eq!(events.len(), 3);
        assert_eq!(events[0]["name"], "Input");
        assert_eq!(events[0]["ts"], 100_000);
        assert_eq!(events[1]["args"]["to"], 4);
        assert_eq!(events[1]["args"]["outcome"], "Committed");
        assert_eq!(events[2]["ph"], "i");
    }

    #[test]
    fn render_spans_the_transition() {
        let mut rec = RecorderSink::new();
        rec.on_render(&RenderEvent {
            at: HostTime(1000),
            render_index: 2,
            current: 5,
            parked: 0,
            settle_until: HostTime(1600),
        });

        let events = export_json(&rec);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["ph"], "X");
        assert_eq!(events[0]["name"], "Transition");
        assert_eq!(events[0]["ts"], 1_000_000);
        assert_eq!(events[0]["dur"], 600_000);
    }

    #[test]
    fn empty_recording_exports_empty_array() {
        let events = export_json(&RecorderSink::new());
        assert!(events.is_empty());
    }
}
