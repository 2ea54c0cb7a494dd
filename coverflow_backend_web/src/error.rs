// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while binding to the page.

use alloc::format;
use alloc::string::String;
use core::fmt;

use wasm_bindgen::JsValue;

/// Failure to attach to the page's DOM.
///
/// Only construction and binding fail. Once bound, DOM writes ignore JS errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindError {
    /// No `window` or `document` (e.g. running in a worker).
    NoDocument,
    /// A required element was not found.
    MissingElement(&'static str),
    /// An element was found but is not of the expected DOM interface.
    WrongElementType {
        /// Selector that matched.
        selector: &'static str,
        /// Interface the element should implement.
        expected: &'static str,
    },
    /// The page had no slides.
    NoSlides,
    /// The deck and the page disagree on the number of slides.
    SlideCountMismatch {
        /// Records in the deck.
        deck: usize,
        /// Slide elements on the page.
        elements: usize,
    },
    /// A DOM call threw.
    Js(String),
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDocument => f.write_str("no window or document available"),
            Self::MissingElement(selector) => write!(f, "no element matches `{selector}`"),
            Self::WrongElementType { selector, expected } => {
                write!(f, "element matching `{selector}` is not an {expected}")
            }
            Self::NoSlides => f.write_str("the page has no carousel slides"),
            Self::SlideCountMismatch { deck, elements } => write!(
                f,
                "deck has {deck} slides but the page has {elements} slide elements"
            ),
            Self::Js(message) => write!(f, "DOM call failed: {message}"),
        }
    }
}

impl core::error::Error for BindError {}

impl From<JsValue> for BindError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_selector() {
        assert_eq!(
            BindError::MissingElement("#dots").to_string(),
            "no element matches `#dots`"
        );
        assert_eq!(
            BindError::WrongElementType {
                selector: ".coverflow-item img",
                expected: "HtmlImageElement",
            }
            .to_string(),
            "element matching `.coverflow-item img` is not an HtmlImageElement"
        );
    }
}
