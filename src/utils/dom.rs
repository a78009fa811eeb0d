//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Lookups return
//! `Option` so a missing node turns into an early return at the call site.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the current document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

// =============================================================================
// Queries
// =============================================================================

/// Nodes that support `querySelector` (documents and elements).
pub trait Queryable {
    fn select_one(&self, selector: &str) -> Result<Option<Element>, JsValue>;
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue>;
}

impl Queryable for Document {
    fn select_one(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

impl Queryable for Element {
    fn select_one(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

/// First element under `root` matching `selector`.
pub fn query(root: &impl Queryable, selector: &str) -> Option<Element> {
    root.select_one(selector).ok().flatten()
}

/// All elements under `root` matching `selector`, in document order.
pub fn query_all(root: &impl Queryable, selector: &str) -> Vec<Element> {
    let Ok(list) = root.select_all(selector) else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

// =============================================================================
// Element State
// =============================================================================

/// Add or remove a class.
pub fn set_class(element: &Element, class: &str, present: bool) {
    let _ = element.class_list().toggle_with_force(class, present);
}

/// Set or clear the boolean `disabled` attribute.
pub fn set_disabled(element: &Element, disabled: bool) {
    let _ = element.toggle_attribute_with_force("disabled", disabled);
}

/// Hide an element with `display: none`.
pub fn hide(element: &Element) {
    if let Some(html_element) = element.dyn_ref::<HtmlElement>() {
        let _ = html_element.style().set_property("display", "none");
    }
}

// =============================================================================
// Console
// =============================================================================

/// Log an informational message to the browser console.
pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

/// Log a warning to the browser console.
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

/// Log an error to the browser console.
pub fn error(message: &str) {
    web_sys::console::error_1(&message.into());
}
