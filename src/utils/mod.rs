//! Browser utility modules.
//!
//! Provides:
//! - [`dom`] - Window, document and storage access, element queries, console
//! - [`HttpPageSource`] - Fetch and parse the next product page
//! - [`LocalStore`] - localStorage-backed key/value store

pub mod dom;
mod fetch;
mod storage;

pub use fetch::{HttpPageSource, extract_page, fetch_text, parse_html};
pub use storage::LocalStore;
