//! Field type enumeration for metadata system

/// Category of form field, drives both parsing and the widget the UI renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldType {
    #[default]
    Text,
    Email,
    Password,
    Number,
    /// Id of another aggregate picked from a select; `0` or empty means unselected
    AggregateRef,
    /// One of `FieldMetadata::enum_values`
    Enum,
}

impl FieldType {
    /// HTML input type for text-like fields
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            _ => "text",
        }
    }
}
