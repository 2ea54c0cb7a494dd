// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: the stock coverflow page driven by `coverflow_backend_web`.
//!
//! Binds [`WebCoverflow`] to the markup in `index.html`: seven slides, arrow
//! buttons, dots, autoplay, swipes, and the page chrome around the carousel.
//! Controller events are logged to the browser console.
//!
//! Build with: `wasm-pack build --target web demos/web_coverflow`
//!
//! Then serve `demos/web_coverflow/` and open `index.html` in a browser.

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::boxed::Box;
use alloc::format;
use alloc::string::ToString;

use wasm_bindgen::prelude::*;

use coverflow_backend_web::{WebCoverflow, WebOptions};
use coverflow_core::slide::{SlideDeck, SlideRecord};
use coverflow_core::trace::{
    AutoplayEvent, LockReleaseEvent, NavigationEvent, RenderEvent, TraceSink,
};

/// Captions in page order. Must match the number of `.coverflow-item`s.
const SLIDES: [(&str, &str); 7] = [
    ("Mountain Landscape", "Majestic peaks under a clear sky"),
    ("Forest Path", "A quiet trail through tall pines"),
    ("Lake Reflection", "Still water mirroring the shore"),
    ("Ocean Sunset", "Golden light over the waves"),
    ("Desert Dunes", "Wind-shaped sand at dusk"),
    ("Starry Night", "The Milky Way above the hills"),
    ("Waterfall", "A cascade in the rainforest"),
];

/// Logs controller events with `console.debug`.
#[derive(Debug)]
struct ConsoleSink;

fn log(line: &str) {
    web_sys::console::debug_1(&JsValue::from_str(line));
}

impl TraceSink for ConsoleSink {
    fn on_navigation(&mut self, e: &NavigationEvent) {
        log(&format!(
            "[coverflow] {:?} {} -> {} ({:?})",
            e.kind, e.from, e.to, e.outcome
        ));
    }

    fn on_render(&mut self, e: &RenderEvent) {
        log(&format!(
            "[coverflow] render #{} current={} settle={}ms",
            e.render_index,
            e.current,
            e.settle_until.as_millis()
        ));
    }

    fn on_lock_release(&mut self, e: &LockReleaseEvent) {
        log(&format!("[coverflow] unlocked at {}", e.current));
    }

    fn on_autoplay(&mut self, e: &AutoplayEvent) {
        log(&format!(
            "[coverflow] autoplay {:?} after {} ticks",
            e.change, e.ticks
        ));
    }
}

/// Entry point, called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let deck = SlideDeck::new(SLIDES.iter().map(|&(t, d)| SlideRecord::new(t, d)))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let app = WebCoverflow::attach(deck, WebOptions::standard(), Some(Box::new(ConsoleSink)))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    // Keep listeners and the frame loop alive; there is no teardown on the web.
    core::mem::forget(app);

    Ok(())
}
