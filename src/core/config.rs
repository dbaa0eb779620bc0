//! Configuration constants and settings

// Home anchor
pub const HOME_ID: &str = "home";
pub const HOME_LABEL: &str = "Home";
pub const HOME_ROUTE: &str = "home";

// Top-level sections recognised in a location
pub const PRODUCTS_SEGMENT: &str = "products";
pub const PRODUCTS_LABEL: &str = "Products";
pub const APPLICATIONS_SEGMENT: &str = "applications";
pub const APPLICATIONS_LABEL: &str = "Applications";

// Route names for parameterised entries
pub const CATEGORY_ROUTE: &str = "category";
pub const PRODUCT_ROUTE: &str = "product";

// Id prefixes for nodes routed by their own slug
pub const APPLICATION_ID_PREFIX: &str = "application";
pub const PAGE_ID_PREFIX: &str = "page";

/// Pages that may appear as the sole segment of a location
pub const STANDALONE_PAGES: &[&str] = &["about", "contact"];

/// Placeholder prefix for the slug in a parameterised route path
pub const ROUTE_PARAM_PREFIX: char = ':';

// Display defaults
pub const DEFAULT_MAX_ITEMS: usize = 4;
pub const DEFAULT_SEPARATOR: &str = " / ";
pub const COLLAPSED_MARKER: &str = "…";
pub const DEFAULT_BASE_URL: &str = "https://shop.example.com";

// Configuration file lookup
pub const CONFIG_ENV_VAR: &str = "STOREFRONT_TRAIL_CONFIG";
pub const CONFIG_DIR_NAME: &str = "storefront-trail";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolves the display budget for truncation
///
/// Priority order:
/// 1. --max-items N flag → N
/// 2. `[display] max_items` from the catalog file
/// 3. DEFAULT_MAX_ITEMS
///
/// A budget of zero is passed through unchanged; truncation defines it.
pub fn get_max_items(flag: Option<usize>, configured: Option<usize>) -> usize {
    flag.or(configured).unwrap_or(DEFAULT_MAX_ITEMS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_configured() {
        assert_eq!(get_max_items(Some(2), Some(6)), 2);
    }

    #[test]
    fn test_configured_used_without_flag() {
        assert_eq!(get_max_items(None, Some(6)), 6);
    }

    #[test]
    fn test_default_budget() {
        assert_eq!(get_max_items(None, None), DEFAULT_MAX_ITEMS);
    }
}
