//! Form metadata: field descriptions, validation rules and typed form models
//!
//! Every editable aggregate declares a static `FormSchema`; the UI renders
//! widgets from it and the stores validate submissions against it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::shared::metadata::{FormModel, FormValues};
//! use contracts::domain::a002_brand::BrandForm;
//!
//! let values = FormValues::new().with("name", "Komatsu");
//! let form = BrandForm::parse(&values)?;
//! ```

mod field_type;
mod form;
mod types;
mod validation;

pub use field_type::FieldType;
pub use form::{FormModel, FormValues, ValidationError};
pub use types::{FieldMetadata, FormSchema};
pub use validation::{is_valid_email, ValidationRules};
