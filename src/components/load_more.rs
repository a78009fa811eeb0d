//! Load-more trigger bound to the live product grid.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event};

use crate::config::load_more::{
    ATTR_BOUND, ATTR_DEFAULT_NEXT_URL, ATTR_NEXT_URL, GRID, PAGINATION, TRIGGER,
};
use crate::core::load_more::{Activation, IgnoreReason, LoadMore, LoadMoreConfig, LoadMoreSurface};
use crate::utils::{HttpPageSource, dom};

/// The live trigger, grid and pagination indicator.
pub struct DomSurface {
    trigger: Element,
    grid: Element,
    pagination: Option<Element>,
}

impl DomSurface {
    /// Find the trigger and grid in `document`. The pagination indicator
    /// is optional.
    pub fn locate(document: &Document) -> Option<Self> {
        Some(Self {
            trigger: dom::query(document, TRIGGER)?,
            grid: dom::query(document, GRID)?,
            pagination: dom::query(document, PAGINATION),
        })
    }

    #[inline]
    pub fn trigger(&self) -> &Element {
        &self.trigger
    }
}

impl LoadMoreSurface for DomSurface {
    fn next_url(&self) -> Option<String> {
        self.trigger.get_attribute(ATTR_NEXT_URL)
    }

    fn set_next_url(&self, url: &str) {
        let _ = self.trigger.set_attribute(ATTR_NEXT_URL, url);
    }

    fn set_label(&self, label: &str) {
        self.trigger.set_text_content(Some(label));
    }

    fn append_items(&self, html: &str) {
        let _ = self.grid.insert_adjacent_html("beforeend", html);
    }

    fn replace_pagination(&self, html: &str) {
        if let Some(pagination) = &self.pagination {
            pagination.set_inner_html(html);
        }
    }

    fn remove_trigger(&self) {
        self.trigger.remove();
    }
}

fn report(activation: &Activation) {
    match activation {
        Activation::Ignored(IgnoreReason::InFlight) => {
            dom::log("load more: request already in flight, click ignored");
        }
        Activation::Ignored(IgnoreReason::Finished) | Activation::Loaded { .. } => {}
        Activation::Exhausted => dom::log("load more: no further pages"),
        Activation::Failed { url, error } => {
            dom::error(&format!("Load more error ({url}): {error}"));
        }
    }
}

/// Bind the load-more trigger in `document`.
///
/// Returns `false` when the trigger or grid is missing, or when this
/// trigger is already bound. The trigger's `data-default-next-url`
/// overrides `config.default_next_url`.
pub fn init_load_more(document: &Document, config: LoadMoreConfig) -> bool {
    let Some(surface) = DomSurface::locate(document) else {
        return false;
    };
    let trigger = surface.trigger.clone();
    if trigger.has_attribute(ATTR_BOUND) {
        return false;
    }
    let _ = trigger.set_attribute(ATTR_BOUND, "");

    let config =
        config.with_default_next_url(trigger.get_attribute(ATTR_DEFAULT_NEXT_URL).as_deref());
    let state = Rc::new(RefCell::new(LoadMore::new(config)));
    let surface = Rc::new(surface);

    let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let state = Rc::clone(&state);
        let surface = Rc::clone(&surface);
        spawn_local(async move {
            let activation = LoadMore::activate(&state, &HttpPageSource, &*surface).await;
            report(&activation);
        });
    });

    if trigger
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .is_err()
    {
        let _ = trigger.remove_attribute(ATTR_BOUND);
        return false;
    }

    // Lives as long as the trigger; the page never rebinds it.
    closure.forget();
    true
}
