pub mod aggregate;
pub mod catalog;

pub use aggregate::{Product, ProductForm, ProductId, PRODUCT_SCHEMA};
pub use catalog::{Catalog, CatalogForm, CatalogTarget, ProductRow, Saved};
