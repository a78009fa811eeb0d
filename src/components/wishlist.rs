//! Add-to-wishlist buttons with a non-blocking confirmation toast.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event};

use crate::config::wishlist::{
    ATTR_BOUND, ATTR_PRODUCT_HANDLE, BUTTON, STORAGE_KEY, TOAST_CLASS, TOAST_DURATION_MS,
    TOAST_MESSAGE,
};
use crate::core::wishlist::{AddOutcome, Wishlist};
use crate::utils::{LocalStore, dom};

fn product_handle(button: &Element) -> Option<String> {
    button
        .get_attribute(ATTR_PRODUCT_HANDLE)
        .filter(|handle| !handle.is_empty())
}

fn mark_added(button: &Element) {
    let _ = button.set_attribute("aria-pressed", "true");
}

/// Show `message` in a toast that removes itself.
fn show_toast(message: &str) {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(toast) = document.create_element("div") else {
        return;
    };

    toast.set_class_name(TOAST_CLASS);
    let _ = toast.set_attribute("role", "status");
    toast.set_text_content(Some(message));

    if body.append_child(&toast).is_ok() {
        Timeout::new(TOAST_DURATION_MS, move || toast.remove()).forget();
    }
}

fn on_click(button: &Element) {
    let Some(handle) = product_handle(button) else {
        return;
    };

    match Wishlist::new(LocalStore, STORAGE_KEY).add(&handle) {
        Ok(AddOutcome::Added) => {
            mark_added(button);
            show_toast(TOAST_MESSAGE);
        }
        Ok(AddOutcome::AlreadyPresent) => {}
        Err(e) => dom::warn(&format!("wishlist: could not save {handle}: {e}")),
    }
}

/// Bind every unbound wishlist button in `document`. Returns how many were
/// bound by this call.
///
/// Buttons whose product is already saved start out `aria-pressed`.
pub fn init_wishlist(document: &Document) -> usize {
    let wishlist = Wishlist::new(LocalStore, STORAGE_KEY);
    let saved = wishlist.handles();
    let mut bound = 0;

    for button in dom::query_all(document, BUTTON) {
        if button.has_attribute(ATTR_BOUND) {
            continue;
        }
        if product_handle(&button).is_some_and(|handle| saved.contains(&handle)) {
            mark_added(&button);
        }

        let target = button.clone();
        let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| on_click(&target));
        if button
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .is_ok()
        {
            let _ = button.set_attribute(ATTR_BOUND, "");
            closure.forget();
            bound += 1;
        }
    }

    bound
}
