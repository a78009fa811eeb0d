//! Page boot.
//!
//! Attaches every behavior once the document is parsed and keeps the
//! registry of mounted `<product-paginated>` elements in sync with the
//! document, standing in for custom element attach/detach callbacks.
//!
//! # Architecture
//!
//! - **Boot once**: [`boot`] defers to `DOMContentLoaded` while the document
//!   is still loading
//! - **Registry**: one [`PagedReveal`] per host element, keyed by node identity
//! - **MutationObserver**: inserted hosts are activated, removed hosts are
//!   deactivated and dropped from the registry

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, MutationObserver, MutationObserverInit};

use crate::components::{PagedReveal, init_load_more, init_wishlist};
use crate::config::paginated::HOST_TAG;
use crate::core::LoadMoreConfig;
use crate::utils::dom;

struct Mounted {
    host: Element,
    reveal: PagedReveal,
}

thread_local! {
    static PAGINATED: RefCell<Vec<Mounted>> = const { RefCell::new(Vec::new()) };
}

/// Attach all behaviors, now or when the document finishes parsing.
pub fn boot() {
    let Some(document) = dom::document() else {
        return;
    };

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(attach_all);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref());
    } else {
        attach_all();
    }
}

fn attach_all() {
    let Some(document) = dom::document() else {
        return;
    };

    sync_paginated(&document);
    watch_paginated(&document);
    init_load_more(&document, LoadMoreConfig::default());
    init_wishlist(&document);
}

/// Deactivate hosts that left the document and activate new ones.
///
/// Returns the number of mounted hosts.
pub fn sync_paginated(document: &Document) -> usize {
    PAGINATED.with_borrow_mut(|mounted| {
        mounted.retain_mut(|entry| {
            if entry.host.is_connected() {
                return true;
            }
            entry.reveal.deactivate();
            false
        });

        for host in dom::query_all(document, HOST_TAG) {
            if mounted.iter().any(|entry| entry.host == host) {
                continue;
            }

            let mut reveal = PagedReveal::new();
            reveal.activate(&host, None);
            mounted.push(Mounted { host, reveal });
        }

        mounted.len()
    })
}

fn watch_paginated(document: &Document) {
    let Some(body) = document.body() else {
        return;
    };

    let callback =
        Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::new(move |_records, _observer| {
            if let Some(document) = dom::document() {
                sync_paginated(&document);
            }
        });
    let Ok(observer) = MutationObserver::new(callback.as_ref().unchecked_ref()) else {
        return;
    };

    let options = MutationObserverInit::new();
    options.set_child_list(true);
    options.set_subtree(true);

    if observer.observe_with_options(&body, &options).is_ok() {
        // Observes for the lifetime of the page.
        callback.forget();
    } else {
        dom::warn("paged reveal: could not observe document, detached hosts stay bound");
    }
}
