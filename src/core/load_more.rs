//! Load-more state machine.
//!
//! Grows a product grid one server-rendered page at a time. The live
//! document is reached through [`LoadMoreSurface`] and the network through
//! [`PageSource`], so the whole activation contract runs without a browser.
//!
//! # Lifecycle
//!
//! ```text
//! Idle --click--> InFlight --page with next URL--> Idle
//!                    |------page without next URL--> Finished (trigger removed)
//!                    `------error-------------------> Idle (label: retry)
//! ```
//!
//! Clicks while `InFlight` or `Finished` are ignored.

use std::cell::RefCell;

use crate::config::load_more::{DEFAULT_NEXT_URL, LABEL_IDLE, LABEL_LOADING, LABEL_RETRY};
use crate::core::error::FetchError;

// =============================================================================
// Configuration
// =============================================================================

/// Labels and fallback URL for one trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadMoreConfig {
    /// Fetched when the trigger carries no next URL.
    pub default_next_url: String,
    pub idle_label: String,
    pub loading_label: String,
    pub retry_label: String,
}

impl Default for LoadMoreConfig {
    fn default() -> Self {
        Self {
            default_next_url: DEFAULT_NEXT_URL.to_string(),
            idle_label: LABEL_IDLE.to_string(),
            loading_label: LABEL_LOADING.to_string(),
            retry_label: LABEL_RETRY.to_string(),
        }
    }
}

impl LoadMoreConfig {
    /// Replace the fallback URL, ignoring blank overrides.
    pub fn with_default_next_url(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url.map(str::trim).filter(|url| !url.is_empty()) {
            self.default_next_url = url.to_string();
        }
        self
    }
}

// =============================================================================
// Seams
// =============================================================================

/// Regions harvested from a fetched page.
///
/// Each field holds the inner HTML of the matching region, or `None` when
/// the region is missing from the response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedPage {
    /// Product cards to append to the live grid.
    pub items: Option<String>,
    /// Replacement content for the pagination indicator.
    pub pagination: Option<String>,
    /// Next URL carried by the response's own trigger. `None` means there
    /// are no further pages.
    pub next_url: Option<String>,
}

/// Source of the next page (HTTP in the browser, fakes in tests).
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn fetch_page(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

/// The live document regions a loader mutates.
pub trait LoadMoreSurface {
    /// Next URL currently stored on the trigger.
    fn next_url(&self) -> Option<String>;
    fn set_next_url(&self, url: &str);
    fn set_label(&self, label: &str);
    /// Append markup to the end of the product grid.
    fn append_items(&self, html: &str);
    /// Replace the pagination indicator's content. No-op when the live
    /// document has no indicator.
    fn replace_pagination(&self, html: &str);
    /// Remove the trigger from the document.
    fn remove_trigger(&self);
}

// =============================================================================
// State
// =============================================================================

/// Why an activation did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    InFlight,
    Finished,
}

/// Result of one trigger activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Another request is running, or the last page was already loaded.
    Ignored(IgnoreReason),
    /// Page merged; the trigger now points at `next_url`.
    Loaded { next_url: String },
    /// Page merged and no further pages exist; the trigger was removed.
    Exhausted,
    /// Fetch failed; the trigger shows the retry label and keeps its URL.
    Failed { url: String, error: FetchError },
}

/// Per-trigger loader state.
#[derive(Debug, Clone, Default)]
pub struct LoadMore {
    config: LoadMoreConfig,
    in_flight: bool,
    finished: bool,
}

impl LoadMore {
    pub fn new(config: LoadMoreConfig) -> Self {
        Self {
            config,
            in_flight: false,
            finished: false,
        }
    }

    #[inline]
    pub fn config(&self) -> &LoadMoreConfig {
        &self.config
    }

    #[inline]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Claim the trigger for a new request.
    ///
    /// Returns the URL to fetch, or why the activation must be ignored.
    pub fn begin(&mut self, stored_url: Option<String>) -> Result<String, IgnoreReason> {
        if self.finished {
            return Err(IgnoreReason::Finished);
        }
        if self.in_flight {
            return Err(IgnoreReason::InFlight);
        }

        self.in_flight = true;
        Ok(stored_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| self.config.default_next_url.clone()))
    }

    /// Merge a fetch outcome into the surface and release the trigger.
    pub fn complete(
        &mut self,
        url: String,
        outcome: Result<FetchedPage, FetchError>,
        surface: &impl LoadMoreSurface,
    ) -> Activation {
        self.in_flight = false;

        let page = match outcome {
            Ok(page) => page,
            Err(error) => {
                surface.set_label(&self.config.retry_label);
                return Activation::Failed { url, error };
            }
        };

        if let Some(items) = &page.items {
            surface.append_items(items);
        }
        if let Some(pagination) = &page.pagination {
            surface.replace_pagination(pagination);
        }

        match page.next_url {
            Some(next_url) => {
                surface.set_next_url(&next_url);
                surface.set_label(&self.config.idle_label);
                Activation::Loaded { next_url }
            }
            None => {
                self.finished = true;
                surface.remove_trigger();
                Activation::Exhausted
            }
        }
    }

    /// Run one full activation: claim, fetch, merge.
    ///
    /// The state is borrowed only around the synchronous steps so a click
    /// arriving while the fetch is pending sees `in_flight` and is ignored.
    pub async fn activate(
        state: &RefCell<LoadMore>,
        source: &impl PageSource,
        surface: &impl LoadMoreSurface,
    ) -> Activation {
        let url = {
            let mut loader = state.borrow_mut();
            match loader.begin(surface.next_url()) {
                Ok(url) => {
                    surface.set_label(&loader.config.loading_label);
                    url
                }
                Err(reason) => return Activation::Ignored(reason),
            }
        };

        let outcome = source.fetch_page(&url).await;

        state.borrow_mut().complete(url, outcome, surface)
    }
}
