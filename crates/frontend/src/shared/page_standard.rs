//! Page category constants.
//!
//! Every page declares an HTML `id` of the form `{entity}--{category}`
//! (e.g. `"a004_product--list"`) and a `data-page-category` taken from below.

/// Table of records with a toolbar
pub const PAGE_CAT_LIST: &str = "list";

/// Tiles and charts
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Settings and other system pages
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DASHBOARD, PAGE_CAT_SYSTEM];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_user--list"));
        assert!(is_valid_page_id("d400_overview--dashboard"));
        assert!(!is_valid_page_id("a001_user"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_user--detail"));
    }
}
