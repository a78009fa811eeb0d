//! Paged reveal of a pre-rendered product group.
//!
//! Shows one page of `.product-paginated__item` nodes at a time and wires
//! previous/next controls. No network access. The element lifecycle is
//! explicit: [`activate`] wires everything and returns a [`Disposer`];
//! dropping or disposing it releases every listener.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event};

use crate::config::paginated::{
    ATTR_PAGINATED_ID, ATTR_PRODUCTS_PER_PAGE, ATTR_TOTAL_PRODUCTS, CONTAINER,
    DEFAULT_PRODUCTS_PER_PAGE, DEFAULT_TOTAL_PRODUCTS, HEADER_NAV, HIDDEN_CLASS, ITEMS,
    NEXT_BUTTON, PREV_BUTTON,
};
use crate::core::pagination::{PageWindow, parse_count};
use crate::utils::dom;

// =============================================================================
// Controls
// =============================================================================

struct Controls {
    prev: Option<Element>,
    next: Option<Element>,
}

impl Controls {
    /// Prefer the header navigation sharing `correlation_id`, else the
    /// controls nested in the container.
    fn resolve(container: &Element, correlation_id: Option<&str>) -> Self {
        let header = correlation_id.and_then(|id| {
            let document = dom::document()?;
            dom::query_all(&document, HEADER_NAV)
                .into_iter()
                .find(|nav| nav.get_attribute(ATTR_PAGINATED_ID).as_deref() == Some(id))
        });
        let scope = header.as_ref().unwrap_or(container);

        Self {
            prev: dom::query(scope, PREV_BUTTON),
            next: dom::query(scope, NEXT_BUTTON),
        }
    }

    fn hide(&self) {
        self.prev.iter().chain(&self.next).for_each(dom::hide);
    }
}

// =============================================================================
// View
// =============================================================================

struct PagedView {
    window: PageWindow,
    items: Vec<Element>,
    controls: Controls,
}

impl PagedView {
    fn render(&self) {
        for (index, item) in self.items.iter().enumerate() {
            dom::set_class(item, HIDDEN_CLASS, !self.window.is_visible(index));
        }

        if let Some(prev) = &self.controls.prev {
            dom::set_disabled(prev, self.window.prev_disabled());
        }
        if let Some(next) = &self.controls.next {
            dom::set_disabled(next, self.window.next_disabled());
        }
    }

    fn step(&mut self, step: fn(&mut PageWindow) -> bool) {
        if step(&mut self.window) {
            self.render();
        }
    }
}

// =============================================================================
// Lifecycle
// =============================================================================

struct Listener {
    target: Element,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &Element,
        view: &Rc<RefCell<PagedView>>,
        step: fn(&mut PageWindow) -> bool,
    ) -> Option<Self> {
        let view = Rc::clone(view);
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            view.borrow_mut().step(step);
        });

        target
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            target: target.clone(),
            closure,
        })
    }
}

/// Releases the listeners of one active instance.
pub struct Disposer {
    view: Rc<RefCell<PagedView>>,
    listeners: Vec<Listener>,
}

impl Disposer {
    /// Zero-based visible page.
    pub fn current_page(&self) -> usize {
        self.view.borrow().window.current()
    }

    pub fn total_pages(&self) -> usize {
        self.view.borrow().window.total_pages()
    }

    /// Release all listeners now.
    pub fn dispose(self) {}
}

impl Drop for Disposer {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            let _ = listener.target.remove_event_listener_with_callback(
                "click",
                listener.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Read a data attribute from the container, falling back to the host.
fn data_attr(container: &Element, host: &Element, name: &str) -> Option<String> {
    container
        .get_attribute(name)
        .or_else(|| host.get_attribute(name))
}

/// Wire paged navigation for `host`.
///
/// Returns `None` when the container is missing or there is at most one
/// page; in the latter case both controls are hidden and nothing is wired.
pub fn activate(host: &Element, correlation_id: Option<&str>) -> Option<Disposer> {
    let container = dom::query(host, CONTAINER)?;
    let controls = Controls::resolve(&container, correlation_id);
    let items = dom::query_all(&container, ITEMS);

    let page_size = parse_count(
        data_attr(&container, host, ATTR_PRODUCTS_PER_PAGE).as_deref(),
        DEFAULT_PRODUCTS_PER_PAGE,
    );
    let declared_total = parse_count(
        data_attr(&container, host, ATTR_TOTAL_PRODUCTS).as_deref(),
        DEFAULT_TOTAL_PRODUCTS,
    );

    let Some(window) = PageWindow::new(declared_total, page_size, items.len()) else {
        controls.hide();
        return None;
    };

    let view = Rc::new(RefCell::new(PagedView {
        window,
        items,
        controls,
    }));
    view.borrow().render();

    let listeners: Vec<Listener> = {
        let current = view.borrow();
        let prev = current
            .controls
            .prev
            .as_ref()
            .and_then(|prev| Listener::attach(prev, &view, PageWindow::prev));
        let next = current
            .controls
            .next
            .as_ref()
            .and_then(|next| Listener::attach(next, &view, PageWindow::next));
        prev.into_iter().chain(next).collect()
    };

    Some(Disposer { view, listeners })
}

// =============================================================================
// JS API
// =============================================================================

/// Explicit lifecycle handle for one `<product-paginated>` element.
#[wasm_bindgen]
#[derive(Default)]
pub struct PagedReveal {
    disposer: Option<Disposer>,
}

#[wasm_bindgen]
impl PagedReveal {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach to `host`. The correlation id defaults to the host's
    /// `data-paginated-id`. Returns `true` when navigation was wired.
    pub fn activate(&mut self, host: &Element, correlation_id: Option<String>) -> bool {
        self.deactivate();

        let correlation_id = correlation_id.or_else(|| host.get_attribute(ATTR_PAGINATED_ID));
        self.disposer = activate(host, correlation_id.as_deref());
        self.disposer.is_some()
    }

    /// Release all listeners. Safe to call more than once.
    pub fn deactivate(&mut self) {
        if let Some(disposer) = self.disposer.take() {
            disposer.dispose();
        }
    }

    #[wasm_bindgen(getter, js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.disposer.is_some()
    }

    #[wasm_bindgen(getter, js_name = currentPage)]
    pub fn current_page(&self) -> Option<u32> {
        self.disposer.as_ref().map(|d| d.current_page() as u32)
    }

    #[wasm_bindgen(getter, js_name = totalPages)]
    pub fn total_pages(&self) -> Option<u32> {
        self.disposer.as_ref().map(|d| d.total_pages() as u32)
    }
}
