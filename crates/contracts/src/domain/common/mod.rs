//! Common types and traits for all aggregates

pub mod aggregate_id;
pub mod aggregate_root;
pub mod confirm;
pub mod entity_kind;
pub mod errors;
pub mod store;

// Re-exports
pub use aggregate_id::AggregateId;
pub use aggregate_root::{AggregateRoot, EditableAggregate};
pub use confirm::{ConfirmPort, Confirmed, FixedAnswer};
pub use entity_kind::EntityKind;
pub use errors::StoreError;
pub use store::EntityStore;
