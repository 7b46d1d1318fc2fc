use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::aggregate_id;
use crate::domain::common::{
    AggregateRoot, ConfirmPort, Confirmed, EditableAggregate, EntityKind, EntityStore, StoreError,
};
use crate::shared::metadata::{
    FieldMetadata, FieldType, FormModel, FormSchema, FormValues, ValidationRules,
};

// ============================================================================
// ID Type
// ============================================================================

aggregate_id!(
    /// Unique user identifier
    UserId
);

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    pub const ALL: [&'static str; 2] = ["User", "Admin"];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "User",
            UserRole::Admin => "Admin",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UserRole::User => "Basic access: can view and interact with permitted content.",
            UserRole::Admin => {
                "Full control over the system, users and content. Assign with care."
            }
        }
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "User" => Ok(UserRole::User),
            "Admin" => Ok(UserRole::Admin),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// Account status. Both states are reachable from each other at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UserStatus {
    #[default]
    Active,
    Banned,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Banned => "Banned",
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub status: UserStatus,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// First letter of the name, upper-cased, for the avatar bubble
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Case-insensitive match on name or email
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.name.to_lowercase().contains(&query)
            || self.email.to_lowercase().contains(&query)
    }
}

impl AggregateRoot for User {
    type Id = UserId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn element_name() -> &'static str {
        "User"
    }

    fn list_name() -> &'static str {
        "Users"
    }

    fn kind() -> EntityKind {
        EntityKind::User
    }
}

impl EditableAggregate for User {
    type Form = UserForm;

    fn from_form(id: UserId, form: UserForm) -> Self {
        Self {
            id,
            name: form.name,
            email: form.email,
            role: form.role,
            status: UserStatus::Active,
        }
    }

    fn apply_form(&mut self, form: UserForm) {
        self.name = form.name;
        self.email = form.email;
        self.role = form.role;
    }

    fn to_form(&self) -> UserForm {
        UserForm {
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

// ============================================================================
// Status transitions
// ============================================================================

impl EntityStore<User> {
    /// Set the status unconditionally; the previous status is not checked
    pub fn set_status(&mut self, id: UserId, status: UserStatus) -> Result<&User, StoreError> {
        let user = self.get_mut(id)?;
        user.status = status;
        log::debug!("user: id {} is now {}", id, status.as_str());
        Ok(&*user)
    }

    /// Ban after confirmation; a declined prompt changes nothing
    pub fn ban(
        &mut self,
        id: UserId,
        port: &dyn ConfirmPort,
        message: &str,
    ) -> Result<Confirmed<&User>, StoreError> {
        self.get_mut(id)?;
        if !port.confirm(message) {
            return Ok(Confirmed::Declined);
        }
        self.set_status(id, UserStatus::Banned).map(Confirmed::Done)
    }

    /// Re-activate; no confirmation needed
    pub fn activate(&mut self, id: UserId) -> Result<&User, StoreError> {
        self.set_status(id, UserStatus::Active)
    }

    pub fn active_count(&self) -> usize {
        self.iter().filter(|u| u.is_active()).count()
    }

    pub fn banned_count(&self) -> usize {
        self.iter().filter(|u| !u.is_active()).count()
    }

    pub fn admin_count(&self) -> usize {
        self.iter().filter(|u| u.is_admin()).count()
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_ROLE: &str = "role";

const USER_FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new(FIELD_NAME, "Name", FieldType::Text)
        .rules(
            ValidationRules::required()
                .with_min_length(2)
                .with_message("Name must be at least 2 characters"),
        )
        .placeholder("Enter user name..."),
    FieldMetadata::new(FIELD_EMAIL, "Email", FieldType::Email)
        .rules(
            ValidationRules::required()
                .with_email()
                .with_message("Invalid email address"),
        )
        .placeholder("example@email.com"),
    FieldMetadata::new(FIELD_ROLE, "Role", FieldType::Enum)
        .rules(ValidationRules::required())
        .one_of(&UserRole::ALL),
];

pub static USER_SCHEMA: FormSchema = FormSchema {
    entity: "user",
    fields: USER_FIELDS,
};

/// Validated field set of the user form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: UserRole::User,
        }
    }
}

impl FormModel for UserForm {
    fn schema() -> &'static FormSchema {
        &USER_SCHEMA
    }

    fn from_valid_values(values: &FormValues) -> Self {
        Self {
            name: values.text(FIELD_NAME),
            email: values.text(FIELD_EMAIL),
            role: values.get(FIELD_ROLE).parse().unwrap_or_default(),
        }
    }

    fn to_values(&self) -> FormValues {
        FormValues::new()
            .with(FIELD_NAME, self.name.clone())
            .with(FIELD_EMAIL, self.email.clone())
            .with(FIELD_ROLE, self.role.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::FixedAnswer;

    fn alice() -> User {
        User {
            id: UserId(1),
            name: "Alice".into(),
            email: "alice@example.com".into(),
            role: UserRole::Admin,
            status: UserStatus::Active,
        }
    }

    fn values(name: &str, email: &str, role: &str) -> FormValues {
        FormValues::from([(FIELD_NAME, name), (FIELD_EMAIL, email), (FIELD_ROLE, role)])
    }

    #[test]
    fn test_create_defaults_to_active() {
        let mut store = EntityStore::<User>::new();
        let user = store
            .create(&values("Bob", "bob@example.com", "User"))
            .unwrap();
        assert_eq!(user.id, UserId(1));
        assert_eq!(user.status, UserStatus::Active);
        assert_eq!(user.role, UserRole::User);
    }

    #[test]
    fn test_form_errors_are_per_field() {
        let mut store = EntityStore::<User>::new();
        let err = store.create(&values("B", "not-an-email", "Root")).unwrap_err();
        let errors = err.validation().unwrap();
        assert_eq!(errors.get(FIELD_NAME), Some("Name must be at least 2 characters"));
        assert_eq!(errors.get(FIELD_EMAIL), Some("Invalid email address"));
        assert!(errors.get(FIELD_ROLE).is_some());
        assert!(store.is_empty());
    }

    #[test]
    fn test_ban_then_activate_restores_user() {
        let mut store = EntityStore::seeded(vec![alice()]);
        let before = store.get(UserId(1)).cloned().unwrap();

        let banned = store.ban(UserId(1), &FixedAnswer(true), "Ban?").unwrap();
        assert_eq!(banned.done().map(|u| u.status), Some(UserStatus::Banned));

        store.activate(UserId(1)).unwrap();
        assert_eq!(store.get(UserId(1)), Some(&before));
    }

    #[test]
    fn test_declined_ban_changes_nothing() {
        let mut store = EntityStore::seeded(vec![alice()]);
        let outcome = store.ban(UserId(1), &FixedAnswer(false), "Ban?").unwrap();
        assert_eq!(outcome, Confirmed::Declined);
        assert!(store.get(UserId(1)).unwrap().is_active());
    }

    #[test]
    fn test_ban_missing_user_never_prompts() {
        let mut store = EntityStore::seeded(vec![alice()]);
        let asked = std::cell::Cell::new(false);
        let port = |_: &str| {
            asked.set(true);
            true
        };
        let err = store.ban(UserId(9), &port, "Ban?").unwrap_err();
        assert!(err.is_not_found());
        assert!(!asked.get());
    }

    struct WarnRecorder(std::sync::Mutex<Vec<String>>);

    impl log::Log for WarnRecorder {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                if let Ok(mut lines) = self.0.lock() {
                    lines.push(record.args().to_string());
                }
            }
        }

        fn flush(&self) {}
    }

    static WARNINGS: WarnRecorder = WarnRecorder(std::sync::Mutex::new(Vec::new()));

    #[test]
    fn test_ban_missing_user_logs_warning() {
        let _ = log::set_logger(&WARNINGS);
        log::set_max_level(log::LevelFilter::Warn);

        let mut store = EntityStore::seeded(vec![alice()]);
        let err = store.ban(UserId(4242), &FixedAnswer(true), "Ban?").unwrap_err();
        assert_eq!(
            err,
            StoreError::NotFound {
                entity: "user",
                id: 4242
            }
        );
        let lines = WARNINGS.0.lock().unwrap();
        assert!(lines.iter().any(|line| line == "user: id 4242 not found"));
    }

    #[test]
    fn test_update_keeps_status() {
        let mut store = EntityStore::seeded(vec![alice()]);
        store.set_status(UserId(1), UserStatus::Banned).unwrap();
        let updated = store
            .update(UserId(1), &values("Alicia", "alicia@example.com", "User"))
            .unwrap();
        assert_eq!(updated.name, "Alicia");
        assert_eq!(updated.role, UserRole::User);
        assert_eq!(updated.status, UserStatus::Banned);
    }

    #[test]
    fn test_counts_and_search() {
        let mut bob = alice();
        bob.id = UserId(2);
        bob.name = "Bob".into();
        bob.email = "bob@corp.io".into();
        bob.role = UserRole::User;
        bob.status = UserStatus::Banned;
        let store = EntityStore::seeded(vec![alice(), bob]);
        assert_eq!(store.admin_count(), 1);
        assert_eq!(store.active_count(), 1);
        assert_eq!(store.banned_count(), 1);
        assert!(store.get(UserId(2)).unwrap().matches("CORP"));
        assert!(!store.get(UserId(1)).unwrap().matches("corp"));
    }

    #[test]
    fn test_form_prefill_round_trip() {
        let store = EntityStore::seeded(vec![alice()]);
        let prefill = store.form_values(UserId(1)).unwrap();
        assert_eq!(prefill.get(FIELD_ROLE), "Admin");
        assert_eq!(UserForm::parse(&prefill).unwrap(), alice().to_form());
    }
}
