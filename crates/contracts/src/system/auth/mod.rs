use serde::{Deserialize, Serialize};

use crate::shared::metadata::{
    FieldMetadata, FieldType, FormModel, FormSchema, FormValues, ValidationError, ValidationRules,
};

pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password";

const EMAIL_FIELD: FieldMetadata = FieldMetadata::new(FIELD_EMAIL, "Email", FieldType::Email)
    .rules(
        ValidationRules::required()
            .with_email()
            .with_message("Invalid email address"),
    )
    .placeholder("admin@example.com");

const LOGIN_FIELDS: &[FieldMetadata] = &[
    EMAIL_FIELD,
    FieldMetadata::new(FIELD_PASSWORD, "Password", FieldType::Password).rules(
        ValidationRules::required()
            .with_min_length(6)
            .with_message("Password must be at least 6 characters"),
    ),
];

pub static LOGIN_SCHEMA: FormSchema = FormSchema {
    entity: "login",
    fields: LOGIN_FIELDS,
};

const RESET_FIELDS: &[FieldMetadata] = &[EMAIL_FIELD];

pub static RESET_PASSWORD_SCHEMA: FormSchema = FormSchema {
    entity: "reset_password",
    fields: RESET_FIELDS,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl FormModel for LoginForm {
    fn schema() -> &'static FormSchema {
        &LOGIN_SCHEMA
    }

    fn from_valid_values(values: &FormValues) -> Self {
        Self {
            email: values.text(FIELD_EMAIL),
            // Passwords are taken verbatim
            password: values.get(FIELD_PASSWORD).to_string(),
        }
    }

    fn to_values(&self) -> FormValues {
        FormValues::new()
            .with(FIELD_EMAIL, self.email.clone())
            .with(FIELD_PASSWORD, self.password.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordForm {
    pub email: String,
}

impl ResetPasswordForm {
    /// Notice shown after a valid reset request
    pub fn notice(&self) -> String {
        format!("If an account exists for {}, a reset link has been sent.", self.email)
    }
}

impl FormModel for ResetPasswordForm {
    fn schema() -> &'static FormSchema {
        &RESET_PASSWORD_SCHEMA
    }

    fn from_valid_values(values: &FormValues) -> Self {
        Self {
            email: values.text(FIELD_EMAIL),
        }
    }

    fn to_values(&self) -> FormValues {
        FormValues::new().with(FIELD_EMAIL, self.email.clone())
    }
}

/// Signed-in operator. Held in memory only; a reload signs out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub email: String,
}

impl AuthSession {
    /// Open a session from the login form. Credentials are not checked
    /// against anything; a well-formed form is enough.
    pub fn login(values: &FormValues) -> Result<Self, ValidationError> {
        let form = LoginForm::parse(values)?;
        log::info!("Signed in as {}", form.email);
        Ok(Self { email: form.email })
    }

    /// Local part of the email, used as the header greeting
    pub fn display_name(&self) -> &str {
        self.email
            .split_once('@')
            .map(|(local, _)| local)
            .unwrap_or(&self.email)
    }

    pub fn initial(&self) -> String {
        self.email
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_email_and_long_password() {
        let errors = AuthSession::login(&FormValues::from([
            (FIELD_EMAIL, "admin"),
            (FIELD_PASSWORD, "12345"),
        ]))
        .unwrap_err();
        assert_eq!(errors.get(FIELD_EMAIL), Some("Invalid email address"));
        assert_eq!(
            errors.get(FIELD_PASSWORD),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn test_login_opens_session() {
        let session = AuthSession::login(&FormValues::from([
            (FIELD_EMAIL, " admin@example.com "),
            (FIELD_PASSWORD, "secret1"),
        ]))
        .unwrap();
        assert_eq!(session.email, "admin@example.com");
        assert_eq!(session.display_name(), "admin");
        assert_eq!(session.initial(), "A");
    }

    #[test]
    fn test_reset_password_checks_only_email() {
        let form = ResetPasswordForm::parse(&FormValues::from([(FIELD_EMAIL, "ops@example.com")]))
            .unwrap();
        assert!(form.notice().contains("ops@example.com"));
        assert!(ResetPasswordForm::parse(&FormValues::new()).is_err());
    }
}
