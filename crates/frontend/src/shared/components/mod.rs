pub mod bar_chart;
pub mod field_error;
pub mod schema_form;
pub mod stat_card;
