//! Fetching the next product page.
//!
//! Issues a plain GET through `gloo-net`, parses the body with the
//! browser's `DOMParser` and harvests the regions the load-more trigger
//! merges. No timeout is applied beyond the transport's own.

use gloo_net::http::Request;
use web_sys::{Document, DomParser, SupportedType};

use crate::config::load_more::{ATTR_NEXT_URL, GRID, PAGINATION, TRIGGER};
use crate::core::error::FetchError;
use crate::core::load_more::{FetchedPage, PageSource};
use crate::utils::dom;

/// Fetch text from a URL.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Http(response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| FetchError::ResponseRead(e.to_string()))
}

/// Parse an HTML string into a detached document.
pub fn parse_html(html: &str) -> Result<Document, FetchError> {
    let parser = DomParser::new().map_err(|e| FetchError::Parse(format!("{e:?}")))?;
    parser
        .parse_from_string(html, SupportedType::TextHtml)
        .map_err(|e| FetchError::Parse(format!("{e:?}")))
}

/// Harvest the grid, pagination and trigger regions from a fetched page.
pub fn extract_page(document: &Document) -> FetchedPage {
    FetchedPage {
        items: dom::query(document, GRID).map(|grid| grid.inner_html()),
        pagination: dom::query(document, PAGINATION).map(|wrapper| wrapper.inner_html()),
        next_url: dom::query(document, TRIGGER)
            .and_then(|trigger| trigger.get_attribute(ATTR_NEXT_URL))
            .filter(|url| !url.is_empty()),
    }
}

/// [`PageSource`] backed by the Fetch API.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpPageSource;

impl PageSource for HttpPageSource {
    async fn fetch_page(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let html = fetch_text(url).await?;
        let document = parse_html(&html)?;
        Ok(extract_page(&document))
    }
}
