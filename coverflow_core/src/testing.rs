// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Test doubles shared by the in-crate test modules.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::slide::{SlideDeck, SlideRecord};
use crate::view::CoverflowView;
use crate::visual::VisualTransform;

/// A view that remembers the latest state pushed to it and counts calls.
#[derive(Clone, Debug, Default)]
pub(crate) struct RecordingView {
    pub transforms: Vec<Option<VisualTransform>>,
    pub active: Option<usize>,
    pub dot: Option<usize>,
    pub caption: Option<(String, String)>,
    pub icon: Option<bool>,
    pub icon_calls: usize,
    pub caption_calls: usize,
}

impl RecordingView {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            transforms: vec![None; len],
            ..Self::default()
        }
    }

    pub(crate) fn transform(&self, position: usize) -> VisualTransform {
        self.transforms[position].expect("slide was never rendered")
    }

    pub(crate) fn title(&self) -> &str {
        self.caption.as_ref().map_or("", |(t, _)| t.as_str())
    }
}

impl CoverflowView for RecordingView {
    fn set_slide_transform(&mut self, position: usize, transform: &VisualTransform) {
        self.transforms[position] = Some(*transform);
    }

    fn set_active_slide(&mut self, position: usize) {
        self.active = Some(position);
    }

    fn set_caption(&mut self, title: &str, description: &str) {
        self.caption = Some((title.into(), description.into()));
        self.caption_calls += 1;
    }

    fn set_dot_active(&mut self, position: usize) {
        self.dot = Some(position);
    }

    fn set_autoplay_icon(&mut self, playing: bool) {
        self.icon = Some(playing);
        self.icon_calls += 1;
    }
}

/// A deck of `len` slides titled `"Slide 0"`, `"Slide 1"`, ...
pub(crate) fn numbered_deck(len: usize) -> SlideDeck {
    SlideDeck::new((0..len).map(|i| {
        SlideRecord::new(alloc::format!("Slide {i}"), alloc::format!("Description {i}"))
    }))
    .expect("len must be non-zero")
}

/// Deterministic pseudo-random sequence for property-style tests.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Lcg(pub u64);

impl Lcg {
    pub(crate) fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 33) as u32
    }

    pub(crate) fn below(&mut self, n: u32) -> u32 {
        self.next_u32() % n
    }
}
