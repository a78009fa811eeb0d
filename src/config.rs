//! Storefront configuration.
//!
//! Centralizes the markup contract (selectors, data attributes, classes),
//! user-facing labels, and defaults shared by every behavior.

// =============================================================================
// Paged Reveal
// =============================================================================

/// Markup contract for the `<product-paginated>` element.
pub mod paginated {
    /// Tag name of the host element.
    pub const HOST_TAG: &str = "product-paginated";
    /// Wrapper holding the items and the inline navigation fallback.
    pub const CONTAINER: &str = ".product-paginated-wrap";
    /// Individual product cards.
    pub const ITEMS: &str = ".product-paginated__item";
    pub const PREV_BUTTON: &str = ".product-paginated__nav-button--prev";
    pub const NEXT_BUTTON: &str = ".product-paginated__nav-button--next";
    /// External header region carrying navigation for a given group.
    pub const HEADER_NAV: &str = ".featured-collection-paginated__header-navigation";

    /// Class applied to items outside the current page.
    pub const HIDDEN_CLASS: &str = "product-paginated__item--hidden";

    /// Correlation id shared by the host and its header navigation.
    pub const ATTR_PAGINATED_ID: &str = "data-paginated-id";
    pub const ATTR_PRODUCTS_PER_PAGE: &str = "data-products-per-page";
    pub const ATTR_TOTAL_PRODUCTS: &str = "data-total-products";

    pub const DEFAULT_PRODUCTS_PER_PAGE: usize = 4;
    pub const DEFAULT_TOTAL_PRODUCTS: usize = 0;
}

// =============================================================================
// Load More
// =============================================================================

/// Markup contract and labels for the load-more trigger.
pub mod load_more {
    pub const TRIGGER: &str = "[js-load-more]";
    pub const GRID: &str = "[js-product-grid]";
    pub const PAGINATION: &str = ".pagination-wrapper";

    /// Attribute holding the next page URL on the trigger.
    pub const ATTR_NEXT_URL: &str = "data-next-url";
    /// Per-trigger override of [`DEFAULT_NEXT_URL`].
    pub const ATTR_DEFAULT_NEXT_URL: &str = "data-default-next-url";
    /// Marks a trigger whose click handler is already attached.
    pub const ATTR_BOUND: &str = "data-load-more-bound";

    /// Fallback URL used when the trigger carries no next URL.
    pub const DEFAULT_NEXT_URL: &str = "/collections/shop-tops?page=2";

    pub const LABEL_IDLE: &str = "Load more";
    pub const LABEL_LOADING: &str = "Loading...";
    pub const LABEL_RETRY: &str = "Try again";
}

// =============================================================================
// Wishlist
// =============================================================================

/// Wishlist buttons, persistence slot and toast.
pub mod wishlist {
    pub const BUTTON: &str = ".add-to-wishlist";
    pub const ATTR_PRODUCT_HANDLE: &str = "data-product-handle";
    /// Marks a button whose click handler is already attached.
    pub const ATTR_BOUND: &str = "data-wishlist-bound";

    /// localStorage key holding the JSON array of product handles.
    pub const STORAGE_KEY: &str = "wishlist";

    pub const TOAST_CLASS: &str = "wishlist-toast";
    pub const TOAST_MESSAGE: &str = "Added to wishlist!";
    /// How long the toast stays on screen, in milliseconds.
    pub const TOAST_DURATION_MS: u32 = 2500;
}
