//! Static mock data every page seeds its stores from

use once_cell::sync::{Lazy, OnceCell};
use serde::{Deserialize, Serialize};

use crate::domain::a001_user::User;
use crate::domain::a002_brand::Brand;
use crate::domain::a003_category::Category;
use crate::domain::a004_product::{Catalog, Product};
use crate::domain::a005_order::Order;
use crate::domain::a006_blog_post::BlogPost;
use crate::domain::common::EntityStore;

const SEED_JSON: &str = include_str!("../../data/seed.json");

static SEED: OnceCell<SeedData> = OnceCell::new();
static EMPTY: Lazy<SeedData> = Lazy::new(SeedData::default);

/// Aggregate blog counters shown on the overview
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogMetrics {
    pub posts: u64,
    pub categories: u64,
    pub views: u64,
    pub comments: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingMetrics {
    pub page_views: u64,
    pub conversions: u64,
    pub cta_clicks: u64,
}

impl LandingMetrics {
    /// Conversions per page view, in percent; 0 when there were no views
    pub fn conversion_rate(&self) -> f64 {
        if self.page_views == 0 {
            return 0.0;
        }
        self.conversions as f64 * 100.0 / self.page_views as f64
    }

    /// CTA clicks per page view, in percent
    pub fn click_through_rate(&self) -> f64 {
        if self.page_views == 0 {
            return 0.0;
        }
        self.cta_clicks as f64 * 100.0 / self.page_views as f64
    }
}

/// Monthly visitor counts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Traffic {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeedData {
    pub users: Vec<User>,
    pub brands: Vec<Brand>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub blog_posts: Vec<BlogPost>,
    pub blog: BlogMetrics,
    pub landing: LandingMetrics,
    pub traffic: Traffic,
}

impl SeedData {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let seed: SeedData = serde_json::from_str(json)?;
        Ok(seed)
    }

    pub fn user_store(&self) -> EntityStore<User> {
        EntityStore::seeded(self.users.clone())
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::new(
            EntityStore::seeded(self.products.clone()),
            EntityStore::seeded(self.brands.clone()),
            EntityStore::seeded(self.categories.clone()),
        )
    }

    pub fn order_store(&self) -> EntityStore<Order> {
        EntityStore::seeded(self.orders.clone())
    }

    pub fn blog_store(&self) -> EntityStore<BlogPost> {
        EntityStore::seeded(self.blog_posts.clone())
    }
}

/// Embedded seed, parsed on first use and cached for the process
pub fn seed_data() -> anyhow::Result<&'static SeedData> {
    SEED.get_or_try_init(|| {
        let seed = SeedData::from_json(SEED_JSON)?;
        log::info!(
            "Seed data loaded: {} users, {} products, {} orders",
            seed.users.len(),
            seed.products.len(),
            seed.orders.len()
        );
        Ok(seed)
    })
}

/// Like [`seed_data`], but an unreadable seed yields empty stores
pub fn seed_or_empty() -> &'static SeedData {
    match seed_data() {
        Ok(seed) => seed,
        Err(e) => {
            log::error!("Failed to parse seed data, starting empty: {}", e);
            &EMPTY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_brand::BrandId;

    #[test]
    fn test_embedded_seed_parses() {
        let seed = seed_data().unwrap();
        assert_eq!(seed.brands.len(), 3);
        assert_eq!(seed.traffic.labels.len(), seed.traffic.values.len());
        assert_eq!(seed.catalog().brand_name(BrandId(2)), "Komatsu");
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let seed = SeedData::from_json(r#"{ "brands": [{ "id": 1, "name": "Toyota" }] }"#).unwrap();
        assert!(seed.users.is_empty());
        assert_eq!(seed.landing.conversion_rate(), 0.0);
    }

    #[test]
    fn test_conversion_rate() {
        let landing = LandingMetrics {
            page_views: 25000,
            conversions: 3200,
            cta_clicks: 7800,
        };
        assert!((landing.conversion_rate() - 12.8).abs() < 1e-9);
        assert!((landing.click_through_rate() - 31.2).abs() < 1e-9);
    }
}
