//! Browser-independent logic for the storefront behaviors.
//!
//! This module provides:
//! - [`PageWindow`] page slicing for the paged reveal component
//! - [`LoadMore`] activation state machine for the load-more trigger
//! - [`Wishlist`] add-only handle set over a [`KeyValueStore`]

pub mod error;
pub mod load_more;
pub mod pagination;
pub mod wishlist;

pub use load_more::{
    Activation, FetchedPage, IgnoreReason, LoadMore, LoadMoreConfig, LoadMoreSurface, PageSource,
};
pub use pagination::{PageWindow, parse_count};
pub use wishlist::{AddOutcome, KeyValueStore, MemoryStore, Wishlist};
