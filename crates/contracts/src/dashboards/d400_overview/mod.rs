pub mod dto;

pub use dto::OverviewSummary;
