use serde::{Deserialize, Serialize};

/// UI configuration. Every field has a default, so a partial TOML document
/// only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppSection,
    pub ui: UiSection,
    pub confirm: ConfirmSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSection {
    pub title: String,
    /// Page key opened when the URL carries none
    pub default_page: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSection {
    pub sidebar_open: bool,
    pub currency: String,
    /// Rows in the "New products" table of the overview
    pub latest_products: usize,
}

/// Prompts shown before destructive actions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfirmSection {
    pub delete_user: String,
    pub ban_user: String,
    pub delete_product: String,
    pub delete_brand: String,
    pub delete_category: String,
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[app]
title = "Admin Dashboard"
default_page = "dashboard"

[ui]
sidebar_open = true
currency = "$"
latest_products = 5

[confirm]
delete_user = "Are you sure you want to delete this user?"
ban_user = "Are you sure you want to ban this user?"
delete_product = "Are you sure you want to delete this product?"
delete_brand = "Are you sure you want to delete this brand?"
delete_category = "Are you sure you want to delete this category?"
"#;

impl Default for AppSection {
    fn default() -> Self {
        Self {
            title: "Admin Dashboard".to_string(),
            default_page: "dashboard".to_string(),
        }
    }
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            currency: "$".to_string(),
            latest_products: 5,
        }
    }
}

impl Default for ConfirmSection {
    fn default() -> Self {
        Self {
            delete_user: "Are you sure you want to delete this user?".to_string(),
            ban_user: "Are you sure you want to ban this user?".to_string(),
            delete_product: "Are you sure you want to delete this product?".to_string(),
            delete_brand: "Are you sure you want to delete this brand?".to_string(),
            delete_category: "Are you sure you want to delete this category?".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSection::default(),
            ui: UiSection::default(),
            confirm: ConfirmSection::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        Ok(config)
    }
}

/// Load the embedded configuration, falling back to built-in defaults
pub fn load_config() -> AppConfig {
    match AppConfig::from_toml_str(DEFAULT_CONFIG) {
        Ok(config) => {
            log::info!("Using embedded configuration: {}", config.app.title);
            config
        }
        Err(e) => {
            log::error!("Embedded configuration is invalid, using defaults: {}", e);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::from_toml_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = AppConfig::from_toml_str("[ui]\ncurrency = \"€\"\n").unwrap();
        assert_eq!(config.ui.currency, "€");
        assert!(config.ui.sidebar_open);
        assert_eq!(config.app.default_page, "dashboard");
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(AppConfig::from_toml_str("[ui\ncurrency = 1").is_err());
        assert!(AppConfig::from_toml_str("[ui]\nsidebar_open = \"yes\"").is_err());
    }
}
