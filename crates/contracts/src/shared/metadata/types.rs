//! Field and form schema types
//!
//! All types use 'static lifetimes so every schema is a compile-time constant.

use super::field_type::FieldType;
use super::form::{FormValues, ValidationError};
use super::validation::ValidationRules;

/// Static description of one form field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMetadata {
    /// Key in `FormValues`
    pub name: &'static str,
    /// Human readable label, also used in generated messages
    pub label: &'static str,
    pub field_type: FieldType,
    pub validation: ValidationRules,
    pub placeholder: Option<&'static str>,
    pub enum_values: Option<&'static [&'static str]>,
    /// Collection name of the referenced aggregate (for `AggregateRef`)
    pub ref_aggregate: Option<&'static str>,
}

impl FieldMetadata {
    pub const fn new(name: &'static str, label: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            label,
            field_type,
            validation: ValidationRules::none(),
            placeholder: None,
            enum_values: None,
            ref_aggregate: None,
        }
    }

    pub const fn rules(self, validation: ValidationRules) -> Self {
        Self { validation, ..self }
    }

    pub const fn placeholder(self, placeholder: &'static str) -> Self {
        Self {
            placeholder: Some(placeholder),
            ..self
        }
    }

    pub const fn one_of(self, values: &'static [&'static str]) -> Self {
        Self {
            enum_values: Some(values),
            ..self
        }
    }

    pub const fn references(self, aggregate: &'static str) -> Self {
        Self {
            ref_aggregate: Some(aggregate),
            ..self
        }
    }

    /// Validate the raw string the UI collected for this field
    pub fn validate(&self, raw: &str) -> Result<(), String> {
        let raw = raw.trim();
        match self.field_type {
            FieldType::Text | FieldType::Email | FieldType::Password => {
                self.validation.validate_string(raw, self.label)
            }
            FieldType::Number => {
                if raw.is_empty() {
                    return if self.validation.required {
                        Err(self
                            .validation
                            .custom_error
                            .map(str::to_string)
                            .unwrap_or_else(|| format!("{} is required", self.label)))
                    } else {
                        Ok(())
                    };
                }
                match raw.parse::<f64>() {
                    Ok(value) => self.validation.validate_number(value, self.label),
                    Err(_) => Err(format!("{} must be a number", self.label)),
                }
            }
            FieldType::AggregateRef => {
                // Unselected dropdowns arrive as "" or "0"; both map onto the 0 sentinel
                let id = raw.parse::<i64>().unwrap_or(0);
                if self.validation.required && id <= 0 {
                    return Err(self
                        .validation
                        .custom_error
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("Please select {}", self.label)));
                }
                self.validation.validate_number(id as f64, self.label)
            }
            FieldType::Enum => {
                self.validation.validate_string(raw, self.label)?;
                match self.enum_values {
                    Some(allowed) if !raw.is_empty() && !allowed.contains(&raw) => Err(format!(
                        "{} must be one of: {}",
                        self.label,
                        allowed.join(", ")
                    )),
                    _ => Ok(()),
                }
            }
        }
    }
}

/// Ordered set of field definitions for one form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormSchema {
    /// Collection name of the aggregate the form edits
    pub entity: &'static str,
    pub fields: &'static [FieldMetadata],
}

impl FormSchema {
    pub fn field(&self, name: &str) -> Option<&'static FieldMetadata> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validate every field and collect the first failure of each
    pub fn validate(&self, values: &FormValues) -> Result<(), ValidationError> {
        let mut errors = ValidationError::default();
        for field in self.fields {
            if let Err(message) = field.validate(values.get(field.name)) {
                errors.insert(field.name, message);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRICE: FieldMetadata = FieldMetadata::new("price", "Price", FieldType::Number)
        .rules(ValidationRules::required().with_min(1.0));
    const BRAND: FieldMetadata = FieldMetadata::new("brand_id", "Brand", FieldType::AggregateRef)
        .rules(
            ValidationRules::required()
                .with_min(1.0)
                .with_message("Please select a brand"),
        )
        .references("brand");
    const ROLE: FieldMetadata = FieldMetadata::new("role", "Role", FieldType::Enum)
        .rules(ValidationRules::required())
        .one_of(&["User", "Admin"]);

    #[test]
    fn test_number_field_rejects_text() {
        assert_eq!(
            PRICE.validate("abc"),
            Err("Price must be a number".to_string())
        );
        assert_eq!(PRICE.validate(""), Err("Price is required".to_string()));
        assert!(PRICE.validate("0").is_err());
        assert!(PRICE.validate(" 12.5 ").is_ok());
    }

    #[test]
    fn test_reference_sentinel_is_unselected() {
        for raw in ["", "0", "-3", "x"] {
            assert_eq!(
                BRAND.validate(raw),
                Err("Please select a brand".to_string()),
                "raw value {:?}",
                raw
            );
        }
        assert!(BRAND.validate("2").is_ok());
    }

    #[test]
    fn test_enum_membership() {
        assert!(ROLE.validate("Admin").is_ok());
        assert!(ROLE.validate("Root").is_err());
        assert!(ROLE.validate("").is_err());
    }

    #[test]
    fn test_schema_collects_per_field_errors() {
        const FIELDS: &[FieldMetadata] = &[PRICE, BRAND, ROLE];
        let schema = FormSchema {
            entity: "test",
            fields: FIELDS,
        };
        let values = FormValues::new().with("role", "Admin");
        let errors = schema.validate(&values).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.get("price").is_some());
        assert_eq!(errors.get("brand_id"), Some("Please select a brand"));
        assert!(errors.get("role").is_none());
    }
}
