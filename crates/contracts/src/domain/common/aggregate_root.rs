use super::{AggregateId, EntityKind};
use crate::shared::metadata::FormModel;

/// Trait for the root of an aggregate
///
/// Defines the identity and the static UI metadata every managed entity carries
pub trait AggregateRoot: Clone {
    /// Aggregate identifier type
    type Id: AggregateId;

    // ============================================================================
    // Instance methods
    // ============================================================================

    /// Record id
    fn id(&self) -> Self::Id;

    /// Display name/title of the record
    fn description(&self) -> &str;

    // ============================================================================
    // Aggregate class metadata
    // ============================================================================

    /// Singular UI name (e.g. "User")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Users")
    fn list_name() -> &'static str;

    fn kind() -> EntityKind;

    // ============================================================================
    // Default implementations
    // ============================================================================

    /// Collection name used in logs and errors (e.g. "user")
    fn collection_name() -> &'static str {
        Self::kind().as_str()
    }
}

/// Aggregate that is created and edited through a validated form
pub trait EditableAggregate: AggregateRoot {
    type Form: FormModel;

    /// Build a new record from a validated form and a freshly assigned id
    fn from_form(id: Self::Id, form: Self::Form) -> Self;

    /// Replace the form-owned fields, keeping id and any non-form state
    fn apply_form(&mut self, form: Self::Form);

    /// Current field values, used to pre-fill edit forms
    fn to_form(&self) -> Self::Form;
}
