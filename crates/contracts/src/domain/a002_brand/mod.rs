pub mod aggregate;

pub use aggregate::{Brand, BrandForm, BrandId, BRAND_SCHEMA};
