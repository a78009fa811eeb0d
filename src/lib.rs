//! In-page storefront behaviors compiled to WebAssembly.
//!
//! - Paged reveal of pre-rendered product groups (`<product-paginated>`)
//! - Load-more trigger that fetches and appends the next product page
//! - Add-only wishlist persisted in localStorage
//!
//! Loading the module attaches all three to the current document. The JS
//! API ([`PagedReveal`], [`init_load_more_js`]) covers markup inserted later.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod utils;

use wasm_bindgen::prelude::*;

pub use components::{PagedReveal, init_load_more, init_wishlist};

/// Module entry point.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub fn start() {
    console_error_panic_hook::set_once();
    app::boot();
}

/// Bind the load-more trigger, optionally overriding the fallback URL.
///
/// Safe to call repeatedly; an already bound trigger is left alone.
#[wasm_bindgen(js_name = initLoadMore)]
pub fn init_load_more_js(default_next_url: Option<String>) -> bool {
    let Some(document) = crate::utils::dom::document() else {
        return false;
    };

    let config =
        crate::core::LoadMoreConfig::default().with_default_next_url(default_next_url.as_deref());
    init_load_more(&document, config)
}

/// Bind wishlist buttons added after page load.
#[wasm_bindgen(js_name = initWishlist)]
pub fn init_wishlist_js() -> usize {
    crate::utils::dom::document().map_or(0, |document| init_wishlist(&document))
}
