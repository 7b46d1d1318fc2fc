//! Products together with the brands and categories they reference

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::aggregate::{
    empty_product_values, Product, ProductForm, ProductId, FIELD_BRAND_ID, FIELD_CATEGORY_ID,
    PRODUCT_SCHEMA,
};
use crate::domain::a002_brand::{Brand, BrandId, BRAND_SCHEMA};
use crate::domain::a003_category::{Category, CategoryId, CATEGORY_SCHEMA};
use crate::domain::common::{
    AggregateId, AggregateRoot, ConfirmPort, Confirmed, EntityKind, EntityStore, StoreError,
};
use crate::shared::metadata::{FormModel, FormSchema, FormValues, ValidationError};
use crate::shared::modal::FormMode;

/// Shown instead of a brand/category name whose record no longer exists
pub const MISSING_REFERENCE: &str = "N/A";

/// The three forms of the products page.
///
/// Brand, category and product ids overlap, so the form kind is always
/// carried explicitly instead of being guessed from the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogForm {
    Product(FormMode<ProductId>),
    Brand(FormMode<BrandId>),
    Category(FormMode<CategoryId>),
}

impl CatalogForm {
    pub fn kind(&self) -> EntityKind {
        match self {
            CatalogForm::Product(_) => EntityKind::Product,
            CatalogForm::Brand(_) => EntityKind::Brand,
            CatalogForm::Category(_) => EntityKind::Category,
        }
    }

    /// Schema the modal renders and validates for this form
    pub fn schema(&self) -> &'static FormSchema {
        match self {
            CatalogForm::Product(_) => &PRODUCT_SCHEMA,
            CatalogForm::Brand(_) => &BRAND_SCHEMA,
            CatalogForm::Category(_) => &CATEGORY_SCHEMA,
        }
    }

    pub fn is_edit(&self) -> bool {
        match self {
            CatalogForm::Product(mode) => mode.is_edit(),
            CatalogForm::Brand(mode) => mode.is_edit(),
            CatalogForm::Category(mode) => mode.is_edit(),
        }
    }

    /// Modal title, e.g. "Update Brand"
    pub fn title(&self) -> String {
        let verb = if self.is_edit() { "Update" } else { "Create" };
        let noun = match self {
            CatalogForm::Product(_) => Product::element_name(),
            CatalogForm::Brand(_) => Brand::element_name(),
            CatalogForm::Category(_) => Category::element_name(),
        };
        format!("{} {}", verb, noun)
    }
}

/// Existing record addressed by a row action of the products page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogTarget {
    Product(ProductId),
    Brand(BrandId),
    Category(CategoryId),
}

impl CatalogTarget {
    pub fn kind(&self) -> EntityKind {
        match self {
            CatalogTarget::Product(_) => EntityKind::Product,
            CatalogTarget::Brand(_) => EntityKind::Brand,
            CatalogTarget::Category(_) => EntityKind::Category,
        }
    }

    /// Edit form for this record
    pub fn edit_form(&self) -> CatalogForm {
        match *self {
            CatalogTarget::Product(id) => CatalogForm::Product(FormMode::Edit(id)),
            CatalogTarget::Brand(id) => CatalogForm::Brand(FormMode::Edit(id)),
            CatalogTarget::Category(id) => CatalogForm::Category(FormMode::Edit(id)),
        }
    }
}

/// Record written by a successful [`Catalog::submit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Saved {
    Product(ProductId),
    Brand(BrandId),
    Category(CategoryId),
}

/// Product row with its references resolved for display
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow<'a> {
    pub product: &'a Product,
    pub brand: &'a str,
    pub category: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub products: EntityStore<Product>,
    pub brands: EntityStore<Brand>,
    pub categories: EntityStore<Category>,
}

impl Catalog {
    pub fn new(
        products: EntityStore<Product>,
        brands: EntityStore<Brand>,
        categories: EntityStore<Category>,
    ) -> Self {
        Self {
            products,
            brands,
            categories,
        }
    }

    pub fn brand_name(&self, id: BrandId) -> &str {
        self.brands
            .get(id)
            .map(|brand| brand.name.as_str())
            .unwrap_or(MISSING_REFERENCE)
    }

    pub fn category_name(&self, id: CategoryId) -> &str {
        self.categories
            .get(id)
            .map(|category| category.name.as_str())
            .unwrap_or(MISSING_REFERENCE)
    }

    pub fn rows(&self) -> Vec<ProductRow<'_>> {
        self.products
            .iter()
            .map(|product| ProductRow {
                product,
                brand: self.brand_name(product.brand_id),
                category: self.category_name(product.category_id),
            })
            .collect()
    }

    /// Most recently added products first
    pub fn latest(&self, limit: usize) -> Vec<ProductRow<'_>> {
        let mut rows = self.rows();
        rows.reverse();
        rows.truncate(limit);
        rows
    }

    /// Products that still point at `id`
    pub fn products_of_brand(&self, id: BrandId) -> usize {
        self.products.iter().filter(|p| p.brand_id == id).count()
    }

    pub fn products_in_category(&self, id: CategoryId) -> usize {
        self.products.iter().filter(|p| p.category_id == id).count()
    }

    /// `(id, name)` choices for a reference select pointing at `kind`
    pub fn reference_options(&self, kind: EntityKind) -> Vec<(String, String)> {
        match kind {
            EntityKind::Brand => self
                .brands
                .iter()
                .map(|b| (b.id.as_string(), b.name.clone()))
                .collect(),
            EntityKind::Category => self
                .categories
                .iter()
                .map(|c| (c.id.as_string(), c.name.clone()))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Values a freshly opened form starts with
    pub fn initial_values(&self, form: CatalogForm) -> FormValues {
        let prefill = match form {
            CatalogForm::Product(FormMode::Edit(id)) => self.products.form_values(id),
            CatalogForm::Brand(FormMode::Edit(id)) => self.brands.form_values(id),
            CatalogForm::Category(FormMode::Edit(id)) => self.categories.form_values(id),
            CatalogForm::Product(FormMode::Create) => Some(empty_product_values()),
            _ => None,
        };
        prefill.unwrap_or_default()
    }

    /// Remove `target` once the operator confirmed; returns the removed record's name
    pub fn remove_confirmed(
        &mut self,
        target: CatalogTarget,
        port: &dyn ConfirmPort,
        message: &str,
    ) -> Result<Confirmed<String>, StoreError> {
        let outcome = match target {
            CatalogTarget::Product(id) => removed_name(&mut self.products, id, port, message)?,
            CatalogTarget::Brand(id) => removed_name(&mut self.brands, id, port, message)?,
            CatalogTarget::Category(id) => removed_name(&mut self.categories, id, port, message)?,
        };
        if let Confirmed::Done(name) = &outcome {
            info!("catalog: deleted {} '{}'", target.kind(), name);
        }
        Ok(outcome)
    }

    /// Schema check plus existence of the referenced brand and category
    fn parse_product(&self, values: &FormValues) -> Result<ProductForm, ValidationError> {
        let form = ProductForm::parse(values)?;

        let mut errors = ValidationError::default();
        if !self.brands.contains(form.brand_id) {
            errors.insert(FIELD_BRAND_ID, "Selected brand does not exist");
        }
        if !self.categories.contains(form.category_id) {
            errors.insert(FIELD_CATEGORY_ID, "Selected category does not exist");
        }
        errors.into_result()?;

        Ok(form)
    }

    /// Validate and save whichever form was submitted
    pub fn submit(&mut self, form: CatalogForm, values: &FormValues) -> Result<Saved, StoreError> {
        debug!("catalog: submit {} form {:?}", form.kind(), form);
        let saved = match form {
            CatalogForm::Product(mode) => {
                let parsed = self.parse_product(values)?;
                let id = match mode {
                    FormMode::Create => self.products.insert(parsed).id,
                    FormMode::Edit(id) => self.products.replace(id, parsed)?.id,
                };
                Saved::Product(id)
            }
            CatalogForm::Brand(mode) => {
                let id = match mode {
                    FormMode::Create => self.brands.create(values)?.id,
                    FormMode::Edit(id) => self.brands.update(id, values)?.id,
                };
                Saved::Brand(id)
            }
            CatalogForm::Category(mode) => {
                let id = match mode {
                    FormMode::Create => self.categories.create(values)?.id,
                    FormMode::Edit(id) => self.categories.update(id, values)?.id,
                };
                Saved::Category(id)
            }
        };
        info!("catalog: {} saved ({:?})", form.title(), saved);
        Ok(saved)
    }
}

fn removed_name<T: AggregateRoot>(
    store: &mut EntityStore<T>,
    id: T::Id,
    port: &dyn ConfirmPort,
    message: &str,
) -> Result<Confirmed<String>, StoreError> {
    Ok(match store.remove_confirmed(id, port, message)? {
        Confirmed::Done(removed) => Confirmed::Done(removed.description().to_string()),
        Confirmed::Declined => Confirmed::Declined,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_brand::BrandForm;
    use crate::domain::a003_category::CategoryForm;
    use crate::domain::common::FixedAnswer;

    #[test]
    fn test_form_schema_matches_kind() {
        let forms = [
            CatalogForm::Product(FormMode::Create),
            CatalogForm::Brand(FormMode::Edit(BrandId(1))),
            CatalogForm::Category(FormMode::Edit(CategoryId(1))),
        ];
        for form in forms {
            assert_eq!(form.schema().entity, form.kind().as_str());
        }
    }

    #[test]
    fn test_reference_options_follow_product_fields() {
        let catalog = catalog();
        let brand_ref = PRODUCT_SCHEMA
            .field(FIELD_BRAND_ID)
            .and_then(|field| field.ref_aggregate)
            .and_then(EntityKind::from_collection)
            .unwrap();
        assert_eq!(brand_ref, EntityKind::Brand);
        assert_eq!(
            catalog.reference_options(brand_ref),
            vec![
                ("1".to_string(), "Toyota".to_string()),
                ("2".to_string(), "Komatsu".to_string()),
            ]
        );
        assert_eq!(catalog.reference_options(EntityKind::Category).len(), 2);
        assert!(catalog.reference_options(EntityKind::Order).is_empty());
    }

    #[test]
    fn test_remove_target_only_touches_its_store() {
        let mut catalog = catalog();
        let removed = catalog
            .remove_confirmed(
                CatalogTarget::Brand(BrandId(1)),
                &FixedAnswer(true),
                "Delete?",
            )
            .unwrap();
        assert_eq!(removed, Confirmed::Done("Toyota".to_string()));
        assert_eq!(catalog.brands.len(), 1);
        assert_eq!(catalog.categories.len(), 2);

        let declined = catalog
            .remove_confirmed(
                CatalogTarget::Category(CategoryId(1)),
                &FixedAnswer(false),
                "Delete?",
            )
            .unwrap();
        assert_eq!(declined, Confirmed::Declined);
        assert_eq!(catalog.categories.len(), 2);

        let missing = catalog
            .remove_confirmed(
                CatalogTarget::Product(ProductId(7)),
                &FixedAnswer(true),
                "Delete?",
            )
            .unwrap_err();
        assert!(missing.is_not_found());
    }

    #[test]
    fn test_target_opens_matching_edit_form() {
        let target = CatalogTarget::Category(CategoryId(2));
        assert_eq!(
            target.edit_form(),
            CatalogForm::Category(FormMode::Edit(CategoryId(2)))
        );
        assert_eq!(target.kind(), target.edit_form().kind());
    }

    fn catalog() -> Catalog {
        let mut catalog = Catalog::default();
        for name in ["Toyota", "Komatsu"] {
            catalog.brands.insert(BrandForm { name: name.into() });
        }
        for name in ["Engine Parts", "Hydraulic Systems"] {
            catalog.categories.insert(CategoryForm { name: name.into() });
        }
        catalog
    }

    fn product_values(brand: &str, category: &str) -> FormValues {
        FormValues::from([
            ("name", "Hydraulic Pump"),
            ("brand_id", brand),
            ("category_id", category),
            ("price", "1200"),
        ])
    }

    #[test]
    fn test_edit_brand_does_not_touch_category_with_same_id() {
        let mut catalog = catalog();
        let saved = catalog
            .submit(
                CatalogForm::Brand(FormMode::Edit(BrandId(1))),
                &FormValues::from([("name", "Komatsu Ltd")]),
            )
            .unwrap();

        assert_eq!(saved, Saved::Brand(BrandId(1)));
        assert_eq!(catalog.brand_name(BrandId(1)), "Komatsu Ltd");
        assert_eq!(catalog.category_name(CategoryId(1)), "Engine Parts");
    }

    #[test]
    fn test_create_product_with_valid_references() {
        let mut catalog = catalog();
        let saved = catalog
            .submit(
                CatalogForm::Product(FormMode::Create),
                &product_values("2", "2"),
            )
            .unwrap();

        assert_eq!(saved, Saved::Product(ProductId(1)));
        let row = &catalog.rows()[0];
        assert_eq!(row.brand, "Komatsu");
        assert_eq!(row.category, "Hydraulic Systems");
    }

    #[test]
    fn test_unknown_reference_is_a_field_error() {
        let mut catalog = catalog();
        let err = catalog
            .submit(
                CatalogForm::Product(FormMode::Create),
                &product_values("9", "1"),
            )
            .unwrap_err();

        let errors = err.validation().unwrap();
        assert_eq!(errors.get("brand_id"), Some("Selected brand does not exist"));
        assert!(errors.get("category_id").is_none());
        assert!(catalog.products.is_empty());
    }

    #[test]
    fn test_deleted_brand_shows_placeholder() {
        let mut catalog = catalog();
        catalog
            .submit(
                CatalogForm::Product(FormMode::Create),
                &product_values("1", "1"),
            )
            .unwrap();
        catalog
            .brands
            .remove_confirmed(BrandId(1), &FixedAnswer(true), "Delete?")
            .unwrap();

        assert_eq!(catalog.rows()[0].brand, MISSING_REFERENCE);
        assert_eq!(catalog.products_of_brand(BrandId(1)), 1);
    }

    #[test]
    fn test_initial_values_by_mode() {
        let catalog = catalog();
        let edit = catalog.initial_values(CatalogForm::Category(FormMode::Edit(CategoryId(2))));
        assert_eq!(edit.get("name"), "Hydraulic Systems");

        let create = catalog.initial_values(CatalogForm::Product(FormMode::Create));
        assert_eq!(create.get("brand_id"), "0");
        assert_eq!(
            CatalogForm::Brand(FormMode::Create).title(),
            "Create Brand"
        );
    }
}
