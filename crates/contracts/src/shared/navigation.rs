//! Pages reachable from the sidebar

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Dashboard,
    Users,
    Products,
    Landing,
    Blogs,
    Orders,
    Settings,
}

impl Page {
    /// Sidebar order
    pub const ALL: [Page; 7] = [
        Page::Dashboard,
        Page::Users,
        Page::Products,
        Page::Landing,
        Page::Blogs,
        Page::Orders,
        Page::Settings,
    ];

    /// Key used in the `?page=` query parameter
    pub fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Users => "users",
            Page::Products => "products",
            Page::Landing => "landing",
            Page::Blogs => "blogs",
            Page::Orders => "orders",
            Page::Settings => "settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Users => "Users",
            Page::Products => "Products",
            Page::Landing => "Landing",
            Page::Blogs => "Blogs",
            Page::Orders => "Orders",
            Page::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "layout-dashboard",
            Page::Users => "users",
            Page::Products => "products",
            Page::Landing => "target",
            Page::Blogs => "file-text",
            Page::Orders => "orders",
            Page::Settings => "settings",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        let key = key.trim();
        Page::ALL.into_iter().find(|page| page.key() == key)
    }

    /// Page for a query value, `fallback` when it is missing or unknown
    pub fn resolve(key: Option<&str>, fallback: Page) -> Page {
        key.and_then(Page::from_key).unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique_and_resolvable() {
        for page in Page::ALL {
            assert_eq!(Page::from_key(page.key()), Some(page));
        }
    }

    #[test]
    fn test_unknown_key_falls_back() {
        assert_eq!(Page::resolve(Some("reports"), Page::Dashboard), Page::Dashboard);
        assert_eq!(Page::resolve(None, Page::Users), Page::Users);
        assert_eq!(Page::resolve(Some(" orders "), Page::Dashboard), Page::Orders);
    }
}
