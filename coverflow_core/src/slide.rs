// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide records and the ordered deck they live in.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Caption text for one slide.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SlideRecord {
    /// Headline shown under the carousel when this slide is focused.
    pub title: String,
    /// Secondary line shown under the title.
    pub description: String,
}

impl SlideRecord {
    /// Creates a slide record.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Errors from building a [`SlideDeck`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckError {
    /// A deck needs at least one slide.
    Empty,
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("a slide deck needs at least one slide"),
        }
    }
}

impl core::error::Error for DeckError {}

/// A fixed, non-empty, ordered list of slides.
///
/// Position `p` in the deck corresponds to the `p`-th slide element and the
/// `p`-th navigation dot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideDeck {
    slides: Vec<SlideRecord>,
}

impl SlideDeck {
    /// Builds a deck from slides in display order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if `slides` is empty.
    pub fn new(slides: impl IntoIterator<Item = SlideRecord>) -> Result<Self, DeckError> {
        let slides: Vec<_> = slides.into_iter().collect();
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(Self { slides })
    }

    /// Number of slides. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always `false`; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the slide at `position`, if in range.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&SlideRecord> {
        self.slides.get(position)
    }

    /// All slides in display order.
    #[must_use]
    pub fn slides(&self) -> &[SlideRecord] {
        &self.slides
    }
}
