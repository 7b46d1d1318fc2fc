use serde::{Deserialize, Serialize};

use crate::domain::a001_user::User;
use crate::domain::a005_order::{Order, OrderStatus};
use crate::domain::common::EntityStore;
use crate::shared::indicators::{ChartSeries, IndicatorStatus, StatTile, ValueFormat};
use crate::shared::seed::{BlogMetrics, LandingMetrics, SeedData, Traffic};

/// Blog views are plotted next to counts two orders of magnitude smaller
pub const VIEWS_SCALE: f64 = 100.0;

/// Everything the overview page renders, computed once from the stores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewSummary {
    pub blog_tiles: Vec<StatTile>,
    pub user_tiles: Vec<StatTile>,
    pub landing_tiles: Vec<StatTile>,
    pub order_tiles: Vec<StatTile>,
    pub blog_chart: ChartSeries,
    pub user_chart: ChartSeries,
    pub traffic_chart: ChartSeries,
}

impl OverviewSummary {
    pub fn build(
        users: &EntityStore<User>,
        orders: &EntityStore<Order>,
        blog: &BlogMetrics,
        landing: &LandingMetrics,
        traffic: &Traffic,
        currency: &str,
    ) -> Self {
        let banned = users.banned_count();
        let pending = orders.count_by_status(OrderStatus::Pending);

        let blog_tiles = vec![
            StatTile::new("Blog Posts", "file-text", blog.posts as f64),
            StatTile::new("Categories", "layers", blog.categories as f64),
            StatTile::new("Total Views", "eye", blog.views as f64),
            StatTile::new("Comments", "message-square", blog.comments as f64),
        ];

        let user_tiles = vec![
            StatTile::new("Total Users", "users", users.len() as f64),
            StatTile::new("Admins", "shield", users.admin_count() as f64),
            StatTile::new("Active", "check", users.active_count() as f64)
                .with_status(IndicatorStatus::Good),
            StatTile::new("Banned", "ban", banned as f64).with_status(if banned > 0 {
                IndicatorStatus::Bad
            } else {
                IndicatorStatus::Neutral
            }),
        ];

        let landing_tiles = vec![
            StatTile::new("Page Views", "bar-chart", landing.page_views as f64),
            StatTile::new("Conversions", "target", landing.conversions as f64),
            StatTile::new("CTA Clicks", "mouse-pointer", landing.cta_clicks as f64),
            StatTile::new("Conversion Rate", "percent", landing.conversion_rate())
                .with_format(ValueFormat::Percent { decimals: 1 })
                .with_status(IndicatorStatus::Good),
        ];

        let order_tiles = vec![
            StatTile::new("Total Orders", "receipt", orders.len() as f64),
            StatTile::new("Pending", "clock", pending as f64).with_status(if pending > 0 {
                IndicatorStatus::Warning
            } else {
                IndicatorStatus::Neutral
            }),
            StatTile::new(
                "Completed",
                "check",
                orders.count_by_status(OrderStatus::Completed) as f64,
            )
            .with_status(IndicatorStatus::Good),
            StatTile::new(
                "Cancelled",
                "x",
                orders.count_by_status(OrderStatus::Cancelled) as f64,
            ),
            StatTile::new("Revenue", "dollar-sign", orders.revenue()).with_format(
                ValueFormat::Money {
                    currency: currency.to_string(),
                },
            ),
        ];

        let blog_chart = ChartSeries::new("Blog Statistics")
            .point("Posts", blog.posts as f64)
            .point("Categories", blog.categories as f64)
            .point("Views (x100)", blog.views as f64 / VIEWS_SCALE)
            .point("Comments", blog.comments as f64);

        let user_chart = ChartSeries::new("User Distribution")
            .point("Admins", users.admin_count() as f64)
            .point("Users", (users.len() - users.admin_count()) as f64)
            .point("Active", users.active_count() as f64)
            .point("Banned", banned as f64);

        let traffic_chart = traffic.labels.iter().zip(&traffic.values).fold(
            ChartSeries::new("Monthly Traffic"),
            |series, (label, value)| series.point(label.clone(), *value),
        );

        Self {
            blog_tiles,
            user_tiles,
            landing_tiles,
            order_tiles,
            blog_chart,
            user_chart,
            traffic_chart,
        }
    }

    pub fn from_seed(seed: &SeedData, currency: &str) -> Self {
        Self::build(
            &seed.user_store(),
            &seed.order_store(),
            &seed.blog,
            &seed.landing,
            &seed.traffic,
            currency,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile<'a>(tiles: &'a [StatTile], label: &str) -> &'a StatTile {
        tiles.iter().find(|t| t.label == label).unwrap()
    }

    #[test]
    fn test_blog_views_are_scaled_in_chart_only() {
        let blog = BlogMetrics {
            posts: 45,
            categories: 8,
            views: 12340,
            comments: 560,
        };
        let summary = OverviewSummary::build(
            &EntityStore::new(),
            &EntityStore::new(),
            &blog,
            &LandingMetrics::default(),
            &Traffic::default(),
            "$",
        );

        assert_eq!(tile(&summary.blog_tiles, "Total Views").display_value(), "12,340");
        assert_eq!(summary.blog_chart.points[2].1, 123.4);
        assert!(summary.traffic_chart.points.is_empty());
        assert_eq!(tile(&summary.landing_tiles, "Conversion Rate").value, 0.0);
    }

    #[test]
    fn test_counts_follow_seed() {
        let seed = SeedData::from_json(
            r#"{
                "users": [
                    { "id": 1, "name": "Ann", "email": "ann@example.com", "role": "Admin", "status": "Active" },
                    { "id": 2, "name": "Ben", "email": "ben@example.com", "role": "User", "status": "Banned" }
                ],
                "orders": [
                    { "id": 1, "customer": "Ben", "total": 10.0, "status": "Pending", "placedOn": "2024-01-01" }
                ],
                "landing": { "pageViews": 25000, "conversions": 3200, "ctaClicks": 7800 }
            }"#,
        )
        .unwrap();
        let summary = OverviewSummary::from_seed(&seed, "$");

        assert_eq!(tile(&summary.user_tiles, "Total Users").value, 2.0);
        assert_eq!(tile(&summary.user_tiles, "Banned").status, IndicatorStatus::Bad);
        assert_eq!(tile(&summary.order_tiles, "Pending").value, 1.0);
        assert_eq!(tile(&summary.order_tiles, "Revenue").display_value(), "$0.00");
        assert_eq!(
            tile(&summary.landing_tiles, "Conversion Rate").display_value(),
            "12.8%"
        );
    }
}
