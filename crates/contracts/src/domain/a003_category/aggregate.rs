use serde::{Deserialize, Serialize};

use crate::aggregate_id;
use crate::domain::common::{AggregateRoot, EditableAggregate, EntityKind};
use crate::shared::metadata::{
    FieldMetadata, FieldType, FormModel, FormSchema, FormValues, ValidationRules,
};

aggregate_id!(
    /// Unique product category identifier
    CategoryId
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl AggregateRoot for Category {
    type Id = CategoryId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn element_name() -> &'static str {
        "Category"
    }

    fn list_name() -> &'static str {
        "Categories"
    }

    fn kind() -> EntityKind {
        EntityKind::Category
    }
}

impl EditableAggregate for Category {
    type Form = CategoryForm;

    fn from_form(id: CategoryId, form: CategoryForm) -> Self {
        Self {
            id,
            name: form.name,
        }
    }

    fn apply_form(&mut self, form: CategoryForm) {
        self.name = form.name;
    }

    fn to_form(&self) -> CategoryForm {
        CategoryForm {
            name: self.name.clone(),
        }
    }
}

pub const FIELD_NAME: &str = "name";

const CATEGORY_FIELDS: &[FieldMetadata] =
    &[FieldMetadata::new(FIELD_NAME, "Category name", FieldType::Text)
        .rules(
            ValidationRules::required()
                .with_min_length(2)
                .with_message("Category name must be at least 2 characters"),
        )
        .placeholder("Enter category name...")];

pub static CATEGORY_SCHEMA: FormSchema = FormSchema {
    entity: "category",
    fields: CATEGORY_FIELDS,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryForm {
    pub name: String,
}

impl FormModel for CategoryForm {
    fn schema() -> &'static FormSchema {
        &CATEGORY_SCHEMA
    }

    fn from_valid_values(values: &FormValues) -> Self {
        Self {
            name: values.text(FIELD_NAME),
        }
    }

    fn to_values(&self) -> FormValues {
        FormValues::new().with(FIELD_NAME, self.name.clone())
    }
}
