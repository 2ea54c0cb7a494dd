// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed element lookup.

use alloc::vec::Vec;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, NodeList, Window};

use crate::error::BindError;

/// The global `window` and its `document`.
pub(crate) fn window_and_document() -> Result<(Window, Document), BindError> {
    let window = web_sys::window().ok_or(BindError::NoDocument)?;
    let document = window.document().ok_or(BindError::NoDocument)?;
    Ok((window, document))
}

fn cast<T: JsCast>(el: Element, selector: &'static str) -> Result<T, BindError> {
    el.dyn_into::<T>().map_err(|_| BindError::WrongElementType {
        selector,
        expected: type_name::<T>(),
    })
}

fn type_name<T>() -> &'static str {
    let full = core::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// First match for `selector`, which must exist.
pub(crate) fn query<T: JsCast>(doc: &Document, selector: &'static str) -> Result<T, BindError> {
    query_optional(doc, selector)?.ok_or(BindError::MissingElement(selector))
}

/// First match for `selector`, if any.
pub(crate) fn query_optional<T: JsCast>(
    doc: &Document,
    selector: &'static str,
) -> Result<Option<T>, BindError> {
    doc.query_selector(selector)?
        .map(|el| cast(el, selector))
        .transpose()
}

/// First match for `selector` below `parent`, which must exist.
pub(crate) fn query_in<T: JsCast>(parent: &Element, selector: &'static str) -> Result<T, BindError> {
    let el = parent
        .query_selector(selector)?
        .ok_or(BindError::MissingElement(selector))?;
    cast(el, selector)
}

/// Every match for `selector`, in document order.
pub(crate) fn query_all<T: JsCast>(
    doc: &Document,
    selector: &'static str,
) -> Result<Vec<T>, BindError> {
    collect(&doc.query_selector_all(selector)?, selector)
}

fn collect<T: JsCast>(list: &NodeList, selector: &'static str) -> Result<Vec<T>, BindError> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|node| {
            node.dyn_into::<Element>()
                .map_err(|_| BindError::WrongElementType {
                    selector,
                    expected: "Element",
                })
                .and_then(|el| cast(el, selector))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names_drop_the_module_path() {
        assert_eq!(type_name::<web_sys::HtmlImageElement>(), "HtmlImageElement");
        assert_eq!(type_name::<u32>(), "u32");
    }
}
