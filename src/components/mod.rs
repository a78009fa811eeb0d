//! DOM bindings for the storefront behaviors.
//!
//! - [`PagedReveal`] - Client-side paging of a product group
//! - [`init_load_more`] - Fetch-and-append trigger for the product grid
//! - [`init_wishlist`] - Add-to-wishlist buttons

pub mod load_more;
pub mod paged_reveal;
mod wishlist;

pub use load_more::{DomSurface, init_load_more};
pub use paged_reveal::PagedReveal;
pub use wishlist::init_wishlist;
