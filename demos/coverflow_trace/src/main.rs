// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated carousel session that exercises the tracing and diagnostics
//! pipeline.
//!
//! Drives a [`CoverflowController`] with a 60 Hz frame pump and a scripted
//! sequence of key presses, a swipe, a dot click, and autoplay toggles.
//! Events go to both a [`PrettyPrintSink`] on stdout and a [`RecorderSink`];
//! the recording is then exported as a Chrome trace JSON file.

use std::fs::File;
use std::io::BufWriter;

use kurbo::Point;

use coverflow_core::config::CoverflowConfig;
use coverflow_core::controller::CoverflowController;
use coverflow_core::input::{InputEvent, Key, SwipeConfig, SwipeTracker};
use coverflow_core::slide::{SlideDeck, SlideRecord};
use coverflow_core::time::HostTime;
use coverflow_core::view::CoverflowView;
use coverflow_core::visual::VisualTransform;

use coverflow_debug::pretty::PrettyPrintSink;
use coverflow_debug::recorder::RecorderSink;
use coverflow_debug::shared::{SharedSink, Tee};

const FRAME_MS: u64 = 16;
const SESSION_END_MS: u64 = 24_000;

const SLIDES: [(&str, &str); 7] = [
    ("Aurora", "Northern lights over a frozen lake"),
    ("Canyon", "Layered sandstone at dusk"),
    ("Harbor", "Fishing boats at first light"),
    ("Summit", "A ridge above the cloud line"),
    ("Meadow", "Wildflowers after the rain"),
    ("Dunes", "Wind-cut sand under a full moon"),
    ("Glacier", "Blue ice calving into the sea"),
];

/// Prints caption changes, the part of the page a reader actually sees.
#[derive(Debug, Default)]
struct CaptionView {
    captions: usize,
}

impl CoverflowView for CaptionView {
    fn set_slide_transform(&mut self, position: usize, transform: &VisualTransform) {
        _ = (position, transform);
    }

    fn set_active_slide(&mut self, position: usize) {
        _ = position;
    }

    fn set_caption(&mut self, title: &str, description: &str) {
        self.captions += 1;
        println!("    caption: {title} / {description}");
    }

    fn set_dot_active(&mut self, position: usize) {
        _ = position;
    }

    fn set_autoplay_icon(&mut self, playing: bool) {
        println!("    icon: {}", if playing { "pause" } else { "play" });
    }
}

/// One scripted user action.
#[derive(Clone, Copy, Debug)]
enum Action {
    Key(&'static str),
    Swipe { from: Point, to: Point },
    Input(InputEvent),
}

fn script() -> Vec<(u64, Action)> {
    vec![
        (9_100, Action::Key("ArrowRight")),
        // Inside the settle window: rejected.
        (9_200, Action::Key("ArrowRight")),
        (10_000, Action::Key("Enter")),
        (
            11_000,
            Action::Swipe {
                from: Point::new(300.0, 200.0),
                to: Point::new(180.0, 215.0),
            },
        ),
        // Mostly vertical: not a swipe.
        (
            12_000,
            Action::Swipe {
                from: Point::new(300.0, 200.0),
                to: Point::new(260.0, 420.0),
            },
        ),
        (13_000, Action::Input(InputEvent::Select(0))),
        (14_000, Action::Input(InputEvent::ToggleAutoplay)),
    ]
}

fn main() {
    let deck = SlideDeck::new(SLIDES.iter().map(|&(t, d)| SlideRecord::new(t, d)))
        .expect("demo deck is not empty");

    // -- sinks -------------------------------------------------------------
    let pretty = PrettyPrintSink::new(Box::new(std::io::stdout()));
    let recorder = SharedSink::new(RecorderSink::new());

    // -- controller --------------------------------------------------------
    let mut controller =
        CoverflowController::new(deck, CoverflowConfig::standard(), CaptionView::default());
    controller.set_trace_sink(Box::new(Tee::new(pretty, recorder.clone())));
    let mut swipe = SwipeTracker::new(SwipeConfig::standard());

    controller.mount(HostTime::ZERO);

    // -- simulated loop ----------------------------------------------------
    let mut script = script().into_iter().peekable();
    let mut now = 0;
    while now <= SESSION_END_MS {
        while let Some((_, action)) = script.next_if(|&(at, _)| at <= now) {
            let at = HostTime(now);
            match action {
                Action::Key(name) => {
                    if let Some(event) = InputEvent::from_key(Key::from_name(name)) {
                        controller.handle(event, at);
                    }
                }
                Action::Swipe { from, to } => {
                    swipe.touch_start(from);
                    _ = swipe.touch_move(to);
                    if let Some(event) = swipe.touch_end(to) {
                        controller.handle(event, at);
                    }
                }
                Action::Input(event) => {
                    controller.handle(event, at);
                }
            }
        }
        controller.advance(HostTime(now));
        now += FRAME_MS;
    }

    let renders = controller.render_count();
    let ticks = controller.autoplay_ticks();
    let captions = controller.view().captions;
    drop(controller.take_trace_sink());

    // -- export Chrome trace -----------------------------------------------
    let path = "coverflow_trace.json";
    let file = File::create(path).expect("failed to create coverflow_trace.json");
    let mut writer = BufWriter::new(file);
    coverflow_debug::chrome::export(recorder.borrow().as_bytes(), &mut writer)
        .expect("failed to write Chrome trace");

    println!("Wrote {path} ({renders} renders, {ticks} autoplay ticks, {captions} captions)");
}
