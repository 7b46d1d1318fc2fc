use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregate_id;
use crate::domain::common::{AggregateRoot, EntityKind, EntityStore};

aggregate_id!(
    /// Unique order identifier
    OrderId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

/// Customer order. Shown read-only; there is no order form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: String,
    pub total: f64,
    pub status: OrderStatus,
    #[serde(rename = "placedOn")]
    pub placed_on: NaiveDate,
}

impl Order {
    /// Display number, e.g. `#1004`
    pub fn number(&self) -> String {
        format!("#{}", 1000 + self.id.0)
    }
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.customer
    }

    fn element_name() -> &'static str {
        "Order"
    }

    fn list_name() -> &'static str {
        "Orders"
    }

    fn kind() -> EntityKind {
        EntityKind::Order
    }
}

impl EntityStore<Order> {
    pub fn count_by_status(&self, status: OrderStatus) -> usize {
        self.iter().filter(|order| order.status == status).count()
    }

    /// Sum of completed orders
    pub fn revenue(&self) -> f64 {
        self.iter()
            .filter(|order| order.status == OrderStatus::Completed)
            .map(|order| order.total)
            .sum()
    }

    /// Orders with `status`, or all of them for `None`, newest first
    pub fn filtered(&self, status: Option<OrderStatus>) -> Vec<&Order> {
        let mut orders: Vec<&Order> = self
            .iter()
            .filter(|order| status.map_or(true, |s| order.status == s))
            .collect();
        orders.sort_by(|a, b| b.placed_on.cmp(&a.placed_on).then(b.id.cmp(&a.id)));
        orders
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: i64, total: f64, status: OrderStatus, day: u32) -> Order {
        Order {
            id: OrderId(id),
            customer: format!("Customer {}", id),
            total,
            status,
            placed_on: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
        }
    }

    #[test]
    fn test_revenue_counts_completed_only() {
        let store = EntityStore::seeded(vec![
            order(1, 100.0, OrderStatus::Completed, 1),
            order(2, 50.0, OrderStatus::Pending, 2),
            order(3, 25.5, OrderStatus::Completed, 3),
        ]);
        assert_eq!(store.revenue(), 125.5);
        assert_eq!(store.count_by_status(OrderStatus::Pending), 1);
        assert_eq!(store.count_by_status(OrderStatus::Cancelled), 0);
    }

    #[test]
    fn test_filtered_is_newest_first() {
        let store = EntityStore::seeded(vec![
            order(1, 1.0, OrderStatus::Completed, 1),
            order(2, 1.0, OrderStatus::Pending, 9),
            order(3, 1.0, OrderStatus::Completed, 5),
        ]);
        let ids: Vec<i64> = store.filtered(None).iter().map(|o| o.id.0).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        let completed = store.filtered(Some(OrderStatus::Completed));
        assert_eq!(completed.len(), 2);
        assert_eq!(completed[0].number(), "#1003");
    }
}
