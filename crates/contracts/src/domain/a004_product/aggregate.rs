use serde::{Deserialize, Serialize};

use crate::aggregate_id;
use crate::domain::a002_brand::BrandId;
use crate::domain::a003_category::CategoryId;
use crate::domain::common::{AggregateId, AggregateRoot, EditableAggregate, EntityKind};
use crate::shared::metadata::{
    FieldMetadata, FieldType, FormModel, FormSchema, FormValues, ValidationRules,
};

// ============================================================================
// ID Type
// ============================================================================

aggregate_id!(
    /// Unique product identifier
    ProductId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Catalog item. `brand_id`/`category_id` are soft references: they are
/// checked when the product is saved but nothing cascades on delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(rename = "brandId")]
    pub brand_id: BrandId,
    #[serde(rename = "categoryId")]
    pub category_id: CategoryId,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Price as shown in tables, e.g. `$1200.00`
    pub fn format_price(&self, currency: &str) -> String {
        format!("{}{:.2}", currency, self.price)
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }

    fn kind() -> EntityKind {
        EntityKind::Product
    }
}

impl EditableAggregate for Product {
    type Form = ProductForm;

    fn from_form(id: ProductId, form: ProductForm) -> Self {
        Self {
            id,
            name: form.name,
            brand_id: form.brand_id,
            category_id: form.category_id,
            price: form.price,
            description: form.description,
        }
    }

    fn apply_form(&mut self, form: ProductForm) {
        self.name = form.name;
        self.brand_id = form.brand_id;
        self.category_id = form.category_id;
        self.price = form.price;
        self.description = form.description;
    }

    fn to_form(&self) -> ProductForm {
        ProductForm {
            name: self.name.clone(),
            brand_id: self.brand_id,
            category_id: self.category_id,
            price: self.price,
            description: self.description.clone(),
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

pub const FIELD_NAME: &str = "name";
pub const FIELD_BRAND_ID: &str = "brand_id";
pub const FIELD_CATEGORY_ID: &str = "category_id";
pub const FIELD_PRICE: &str = "price";
pub const FIELD_DESCRIPTION: &str = "description";

const PRODUCT_FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new(FIELD_NAME, "Product name", FieldType::Text)
        .rules(
            ValidationRules::required()
                .with_min_length(2)
                .with_message("Product name must be at least 2 characters"),
        )
        .placeholder("Enter product name..."),
    FieldMetadata::new(FIELD_BRAND_ID, "Brand", FieldType::AggregateRef)
        .rules(
            ValidationRules::required()
                .with_min(1.0)
                .with_message("Please select a brand"),
        )
        .references("brand"),
    FieldMetadata::new(FIELD_CATEGORY_ID, "Category", FieldType::AggregateRef)
        .rules(
            ValidationRules::required()
                .with_min(1.0)
                .with_message("Please select a category"),
        )
        .references("category"),
    FieldMetadata::new(FIELD_PRICE, "Price", FieldType::Number)
        .rules(
            ValidationRules::required()
                .with_min_exclusive(0.0)
                .with_message("Price must be greater than 0"),
        )
        .placeholder("0.00"),
    FieldMetadata::new(FIELD_DESCRIPTION, "Description", FieldType::Text)
        .rules(ValidationRules::none().with_max_length(500))
        .placeholder("Optional description..."),
];

pub static PRODUCT_SCHEMA: FormSchema = FormSchema {
    entity: "product",
    fields: PRODUCT_FIELDS,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub brand_id: BrandId,
    pub category_id: CategoryId,
    pub price: f64,
    pub description: Option<String>,
}

impl FormModel for ProductForm {
    fn schema() -> &'static FormSchema {
        &PRODUCT_SCHEMA
    }

    fn from_valid_values(values: &FormValues) -> Self {
        Self {
            name: values.text(FIELD_NAME),
            brand_id: BrandId::new(values.id(FIELD_BRAND_ID)),
            category_id: CategoryId::new(values.id(FIELD_CATEGORY_ID)),
            price: values.number(FIELD_PRICE),
            description: values.optional_text(FIELD_DESCRIPTION),
        }
    }

    fn to_values(&self) -> FormValues {
        FormValues::new()
            .with(FIELD_NAME, self.name.clone())
            .with(FIELD_BRAND_ID, self.brand_id.as_string())
            .with(FIELD_CATEGORY_ID, self.category_id.as_string())
            .with(FIELD_PRICE, self.price.to_string())
            .with(FIELD_DESCRIPTION, self.description.clone().unwrap_or_default())
    }
}

/// Blank product form: nothing selected yet
pub fn empty_product_values() -> FormValues {
    FormValues::new()
        .with(FIELD_NAME, "")
        .with(FIELD_BRAND_ID, "0")
        .with(FIELD_CATEGORY_ID, "0")
        .with(FIELD_PRICE, "")
        .with(FIELD_DESCRIPTION, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> FormValues {
        FormValues::from([
            (FIELD_NAME, "Forklift Engine"),
            (FIELD_BRAND_ID, "1"),
            (FIELD_CATEGORY_ID, "1"),
            (FIELD_PRICE, "5000"),
        ])
    }

    #[test]
    fn test_valid_product_parses() {
        let form = ProductForm::parse(&valid()).unwrap();
        assert_eq!(form.brand_id, BrandId(1));
        assert_eq!(form.price, 5000.0);
        assert_eq!(form.description, None);
    }

    #[test]
    fn test_unselected_brand_fails() {
        let values = valid().with(FIELD_BRAND_ID, "0");
        let errors = ProductForm::parse(&values).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FIELD_BRAND_ID), Some("Please select a brand"));
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let errors = ProductForm::parse(&empty_product_values()).unwrap_err();
        assert_eq!(errors.get(FIELD_CATEGORY_ID), Some("Please select a category"));
        assert_eq!(errors.get(FIELD_PRICE), Some("Price must be greater than 0"));
        assert!(errors.get(FIELD_NAME).is_some());
        assert!(errors.get(FIELD_DESCRIPTION).is_none());
    }

    #[test]
    fn test_price_must_be_positive_number() {
        for raw in ["0", "-5", "abc"] {
            let values = valid().with(FIELD_PRICE, raw);
            assert!(ProductForm::parse(&values).is_err(), "price {:?}", raw);
        }
    }

    #[test]
    fn test_fractional_price_below_one_cent_is_accepted() {
        let form = ProductForm::parse(&valid().with(FIELD_PRICE, "0.005")).unwrap();
        assert_eq!(form.price, 0.005);
        for raw in ["0", "-1"] {
            let errors = ProductForm::parse(&valid().with(FIELD_PRICE, raw)).unwrap_err();
            assert_eq!(errors.get(FIELD_PRICE), Some("Price must be greater than 0"));
        }
    }

    #[test]
    fn test_format_price() {
        let product = Product::from_form(ProductId(3), ProductForm::parse(&valid()).unwrap());
        assert_eq!(product.format_price("$"), "$5000.00");
    }
}
