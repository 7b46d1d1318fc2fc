//! Raw form values, per-field validation errors and the typed form model trait

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::types::FormSchema;

/// Raw string values collected by a form, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Raw value, empty string when the field was never set
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    /// Trimmed text value
    pub fn text(&self, key: &str) -> String {
        self.get(key).trim().to_string()
    }

    /// Optional trimmed text, `None` when blank
    pub fn optional_text(&self, key: &str) -> Option<String> {
        let value = self.get(key).trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    /// Numeric value, `0.0` when missing or unparsable
    pub fn number(&self, key: &str) -> f64 {
        self.get(key).trim().parse().unwrap_or(0.0)
    }

    /// Integer id value, `0` (the unselected sentinel) when missing or unparsable
    pub fn id(&self, key: &str) -> i64 {
        self.get(key).trim().parse().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<const N: usize> From<[(&str, &str); N]> for FormValues {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs
            .into_iter()
            .fold(Self::new(), |values, (k, v)| values.with(k, v))
    }
}

/// Human readable messages keyed by field name.
///
/// Recoverable: shown inline next to the offending field, never mutates a store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    errors: BTreeMap<String, String>,
}

impl ValidationError {
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut error = Self::default();
        error.insert(field, message);
        error
    }

    /// Keep the first message recorded for a field
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationError {}

/// Typed field set produced by a successfully validated form
pub trait FormModel: Sized + Clone {
    fn schema() -> &'static FormSchema;

    /// Build the model from values the schema already accepted
    fn from_valid_values(values: &FormValues) -> Self;

    /// Raw values used to pre-fill an edit form
    fn to_values(&self) -> FormValues;

    /// Validate against the schema and build the typed model
    fn parse(values: &FormValues) -> Result<Self, ValidationError> {
        Self::schema().validate(values)?;
        Ok(Self::from_valid_values(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_values_accessors() {
        let values = FormValues::from([("name", "  Komatsu "), ("brand_id", "2"), ("price", "x")]);
        assert_eq!(values.text("name"), "Komatsu");
        assert_eq!(values.id("brand_id"), 2);
        assert_eq!(values.number("price"), 0.0);
        assert_eq!(values.get("missing"), "");
        assert_eq!(values.optional_text("missing"), None);
    }

    #[test]
    fn test_validation_error_keeps_first_message() {
        let mut error = ValidationError::single("name", "first");
        error.insert("name", "second");
        assert_eq!(error.get("name"), Some("first"));
        assert_eq!(error.to_string(), "name: first");
        assert!(ValidationError::default().into_result().is_ok());
    }
}
