use serde::{Deserialize, Serialize};

use crate::aggregate_id;
use crate::domain::common::{AggregateRoot, EditableAggregate, EntityKind};
use crate::shared::metadata::{
    FieldMetadata, FieldType, FormModel, FormSchema, FormValues, ValidationRules,
};

aggregate_id!(
    /// Unique brand identifier
    BrandId
);

/// Manufacturer a product is sold under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
}

impl AggregateRoot for Brand {
    type Id = BrandId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn element_name() -> &'static str {
        "Brand"
    }

    fn list_name() -> &'static str {
        "Brands"
    }

    fn kind() -> EntityKind {
        EntityKind::Brand
    }
}

impl EditableAggregate for Brand {
    type Form = BrandForm;

    fn from_form(id: BrandId, form: BrandForm) -> Self {
        Self {
            id,
            name: form.name,
        }
    }

    fn apply_form(&mut self, form: BrandForm) {
        self.name = form.name;
    }

    fn to_form(&self) -> BrandForm {
        BrandForm {
            name: self.name.clone(),
        }
    }
}

pub const FIELD_NAME: &str = "name";

const BRAND_FIELDS: &[FieldMetadata] =
    &[FieldMetadata::new(FIELD_NAME, "Brand name", FieldType::Text)
        .rules(
            ValidationRules::required()
                .with_min_length(2)
                .with_message("Brand name must be at least 2 characters"),
        )
        .placeholder("Enter brand name...")];

pub static BRAND_SCHEMA: FormSchema = FormSchema {
    entity: "brand",
    fields: BRAND_FIELDS,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandForm {
    pub name: String,
}

impl FormModel for BrandForm {
    fn schema() -> &'static FormSchema {
        &BRAND_SCHEMA
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
