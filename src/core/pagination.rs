//! Page window arithmetic for the paged reveal component.
//!
//! A [`PageWindow`] slices a fixed list of pre-rendered items into pages of
//! `page_size` and tracks which page is visible. It never moves by more than
//! one page at a time and never leaves `[0, total_pages)`.

use std::ops::Range;

use crate::config::paginated::DEFAULT_PRODUCTS_PER_PAGE;

/// Parse a count attribute the way the theme markup expects.
///
/// Leading whitespace and a `+` sign are accepted, then the longest run of
/// ASCII digits is taken (`"12px"` parses as 12). Missing, empty, negative
/// or non-numeric input yields `default`.
pub fn parse_count(raw: Option<&str>, default: usize) -> usize {
    let Some(raw) = raw else {
        return default;
    };

    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();

    unsigned[..digits_len].parse().unwrap_or(default)
}

/// Visible-page state of one paged reveal instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page_size: usize,
    total_pages: usize,
    rendered: usize,
    current: usize,
}

impl PageWindow {
    /// Build the window for a group of items.
    ///
    /// `declared_total` drives the page count; `rendered` is the number of
    /// item nodes actually present and bounds every slice. Returns `None`
    /// when there is nothing to paginate (no rendered items, or at most one
    /// page), in which case navigation stays hidden.
    ///
    /// A `page_size` of zero is replaced by the default page size.
    pub fn new(declared_total: usize, page_size: usize, rendered: usize) -> Option<Self> {
        let page_size = if page_size == 0 {
            DEFAULT_PRODUCTS_PER_PAGE
        } else {
            page_size
        };
        let total_pages = declared_total.div_ceil(page_size);

        if rendered == 0 || total_pages <= 1 {
            return None;
        }

        Some(Self {
            page_size,
            total_pages,
            rendered,
            current: 0,
        })
    }

    #[inline]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[inline]
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Zero-based index of the visible page.
    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Indices of the items shown on the current page.
    ///
    /// Clamped to the rendered nodes; empty when the declared total promised
    /// more pages than were rendered.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self
            .current
            .saturating_mul(self.page_size)
            .min(self.rendered);
        let end = start.saturating_add(self.page_size).min(self.rendered);
        start..end
    }

    #[inline]
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible_range().contains(&index)
    }

    /// Step back one page. Returns `false` (and does nothing) on the first page.
    pub fn prev(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Step forward one page. Returns `false` (and does nothing) on the last page.
    pub fn next(&mut self) -> bool {
        if self.current + 1 >= self.total_pages {
            return false;
        }
        self.current += 1;
        true
    }

    #[inline]
    pub fn prev_disabled(&self) -> bool {
        self.current == 0
    }

    #[inline]
    pub fn next_disabled(&self) -> bool {
        self.current + 1 >= self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible(window: &PageWindow, rendered: usize) -> Vec<usize> {
        (0..rendered).filter(|&i| window.is_visible(i)).collect()
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(Some("4"), 9), 4);
        assert_eq!(parse_count(Some("  12"), 9), 12);
        assert_eq!(parse_count(Some("+7"), 9), 7);
        assert_eq!(parse_count(Some("8px"), 9), 8);
        assert_eq!(parse_count(Some("0"), 9), 0);
    }

    #[test]
    fn test_parse_count_falls_back_to_default() {
        assert_eq!(parse_count(None, 4), 4);
        assert_eq!(parse_count(Some(""), 4), 4);
        assert_eq!(parse_count(Some("abc"), 4), 4);
        assert_eq!(parse_count(Some("-3"), 4), 4);
        assert_eq!(parse_count(Some("99999999999999999999999"), 4), 4);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        for page_size in 1..=6 {
            for total in 0..=20usize {
                let expected = total.div_ceil(page_size);
                match PageWindow::new(total, page_size, total) {
                    Some(window) => assert_eq!(window.total_pages(), expected),
                    None => assert!(expected <= 1),
                }
            }
        }
    }

    #[test]
    fn test_visible_slice_per_page() {
        for page_size in 1..=5 {
            for total in 2..=17 {
                let Some(mut window) = PageWindow::new(total, page_size, total) else {
                    continue;
                };
                for page in 0..window.total_pages() {
                    assert_eq!(window.current(), page);
                    let expected: Vec<usize> =
                        (page * page_size..((page + 1) * page_size).min(total)).collect();
                    assert_eq!(visible(&window, total), expected);
                    window.next();
                }
            }
        }
    }

    #[test]
    fn test_ten_items_four_per_page() {
        let mut window = PageWindow::new(10, 4, 10).unwrap();
        assert_eq!(window.total_pages(), 3);
        assert_eq!(window.visible_range(), 0..4);

        assert!(window.next());
        assert_eq!(window.visible_range(), 4..8);

        assert!(window.next());
        assert_eq!(window.visible_range(), 8..10);

        assert!(!window.next());
        assert_eq!(window.current(), 2);
        assert_eq!(window.visible_range(), 8..10);
    }

    #[test]
    fn test_prev_on_first_page_is_noop() {
        let mut window = PageWindow::new(10, 4, 10).unwrap();
        assert!(!window.prev());
        assert_eq!(window.current(), 0);

        window.next();
        assert!(window.prev());
        assert_eq!(window.current(), 0);
    }

    #[test]
    fn test_disabled_states() {
        let mut window = PageWindow::new(10, 4, 10).unwrap();
        assert!(window.prev_disabled());
        assert!(!window.next_disabled());

        window.next();
        assert!(!window.prev_disabled());
        assert!(!window.next_disabled());

        window.next();
        assert!(!window.prev_disabled());
        assert!(window.next_disabled());
    }

    #[test]
    fn test_single_page_is_inert() {
        assert_eq!(PageWindow::new(4, 4, 4), None);
        assert_eq!(PageWindow::new(1, 4, 1), None);
        assert_eq!(PageWindow::new(0, 4, 0), None);
    }

    #[test]
    fn test_no_rendered_items_is_inert() {
        assert_eq!(PageWindow::new(10, 4, 0), None);
    }

    #[test]
    fn test_default_total_hides_navigation() {
        // Markup without data-total-products declares zero items.
        assert_eq!(PageWindow::new(0, 4, 12), None);
    }

    #[test]
    fn test_zero_page_size_uses_default() {
        let window = PageWindow::new(10, 0, 10).unwrap();
        assert_eq!(window.page_size(), DEFAULT_PRODUCTS_PER_PAGE);
        assert_eq!(window.total_pages(), 3);
    }

    #[test]
    fn test_declared_total_exceeds_rendered() {
        // Twelve declared, five rendered: the third page has nothing to show.
        let mut window = PageWindow::new(12, 4, 5).unwrap();
        assert_eq!(window.total_pages(), 3);
        window.next();
        assert_eq!(window.visible_range(), 4..5);
        window.next();
        assert!(window.visible_range().is_empty());
        assert!(visible(&window, 5).is_empty());
    }

    #[test]
    fn test_huge_page_size_does_not_overflow() {
        let mut window = PageWindow::new(usize::MAX, usize::MAX - 1, 5).unwrap();
        assert_eq!(window.total_pages(), 2);
        assert_eq!(window.visible_range(), 0..5);

        assert!(window.next());
        assert!(window.visible_range().is_empty());
        assert!(!window.is_visible(4));
    }

    #[test]
    fn test_rendered_exceeds_declared_total() {
        // Items past the declared total are never shown.
        let mut window = PageWindow::new(6, 3, 9).unwrap();
        assert_eq!(window.total_pages(), 2);
        window.next();
        assert!(!window.next());
        assert_eq!(visible(&window, 9), vec![3, 4, 5]);
    }
}
