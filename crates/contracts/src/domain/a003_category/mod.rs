pub mod aggregate;

pub use aggregate::{Category, CategoryForm, CategoryId, CATEGORY_SCHEMA};
