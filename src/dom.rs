//! DOM Helpers
//!
//! Thin wrappers for selector lookups and class/style writes, turning markup
//! problems into `MarkupError`s instead of scattering `unwrap`s.

use leptos::prelude::document;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, NodeList};

use crate::error::MarkupError;

fn bad_selector(selector: &str) -> MarkupError {
    MarkupError::BadSelector { selector: selector.to_string() }
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// First match in the document
pub fn query(selector: &str) -> Result<Option<Element>, MarkupError> {
    document().query_selector(selector).map_err(|_| bad_selector(selector))
}

/// All matches in the document, in document order
pub fn query_all(selector: &str) -> Result<Vec<Element>, MarkupError> {
    document().query_selector_all(selector).map(elements).map_err(|_| bad_selector(selector))
}

pub fn query_in(root: &Element, selector: &str) -> Result<Option<Element>, MarkupError> {
    root.query_selector(selector).map_err(|_| bad_selector(selector))
}

pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, MarkupError> {
    root.query_selector_all(selector).map(elements).map_err(|_| bad_selector(selector))
}

/// Like `query_in`, but absence is an error
pub fn require_in(root: &Element, selector: &str) -> Result<Element, MarkupError> {
    query_in(root, selector)?.ok_or_else(|| MarkupError::MissingElement { selector: selector.to_string() })
}

/// Like `query`, but absence is an error
pub fn require(selector: &str) -> Result<Element, MarkupError> {
    query(selector)?.ok_or_else(|| MarkupError::MissingElement { selector: selector.to_string() })
}

/// Downcast an element found with `selector`
pub fn cast<T: JsCast>(el: Element, selector: &str, expected: &'static str) -> Result<T, MarkupError> {
    el.dyn_into::<T>().map_err(|_| MarkupError::WrongElementType {
        selector: selector.to_string(),
        expected,
    })
}

/// Add or remove `class`
pub fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let _ = if on { list.add_1(class) } else { list.remove_1(class) };
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

/// Set an inline style property; no-op for non-HTML elements
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

/// Current value of an input, select or textarea
pub fn control_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(textarea) = el.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else {
        String::new()
    }
}

/// `<body>` overflow lock used while a modal is open
pub fn lock_page_scroll(locked: bool) {
    if let Some(body) = document().body() {
        let _ = body.style().set_property("overflow", if locked { "hidden" } else { "" });
    }
}
