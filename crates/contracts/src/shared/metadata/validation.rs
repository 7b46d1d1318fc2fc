//! Validation rules for metadata fields

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    /// Strict lower bound: the value must be greater than this
    pub min_exclusive: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub email: bool,
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            min_exclusive: None,
            max: None,
            min_length: None,
            max_length: None,
            email: false,
            custom_error: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn with_min_length(self, min_length: usize) -> Self {
        Self {
            min_length: Some(min_length),
            ..self
        }
    }

    pub const fn with_max_length(self, max_length: usize) -> Self {
        Self {
            max_length: Some(max_length),
            ..self
        }
    }

    pub const fn with_min(self, min: f64) -> Self {
        Self {
            min: Some(min),
            ..self
        }
    }

    pub const fn with_min_exclusive(self, bound: f64) -> Self {
        Self {
            min_exclusive: Some(bound),
            ..self
        }
    }

    pub const fn with_email(self) -> Self {
        Self {
            email: true,
            ..self
        }
    }

    /// Message shown instead of the generated one for any failed constraint
    pub const fn with_message(self, message: &'static str) -> Self {
        Self {
            custom_error: Some(message),
            ..self
        }
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    fn fail(&self, generated: String) -> Result<(), String> {
        Err(self
            .custom_error
            .map(str::to_string)
            .unwrap_or(generated))
    }

    /// Validate a string value against the rules.
    ///
    /// Lengths are counted in characters on the trimmed value.
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let value = value.trim();

        if self.required && value.is_empty() {
            return self.fail(format!("{} must not be empty", field_label));
        }

        let len = value.chars().count();

        if let Some(min) = self.min_length {
            if len < min {
                return self.fail(format!(
                    "{} must be at least {} characters",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return self.fail(format!(
                    "{} must be at most {} characters",
                    field_label, max
                ));
            }
        }

        if self.email && !value.is_empty() && !is_valid_email(value) {
            return self.fail(format!("{} is not a valid email address", field_label));
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if !value.is_finite() {
            return self.fail(format!("{} must be a number", field_label));
        }

        if let Some(min) = self.min {
            if value < min {
                return self.fail(format!("{} must be at least {}", field_label, min));
            }
        }

        if let Some(bound) = self.min_exclusive {
            if value <= bound {
                return self.fail(format!("{} must be greater than {}", field_label, bound));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return self.fail(format!("{} must be at most {}", field_label, max));
            }
        }

        Ok(())
    }
}

/// Structural email check: one `@`, a non-empty local part, and a dotted domain
/// whose labels are non-empty. No whitespace anywhere.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length_counts_trimmed_chars() {
        let rules = ValidationRules::required().with_min_length(2);
        assert!(rules.validate_string("ab", "Name").is_ok());
        assert!(rules.validate_string(" a ", "Name").is_err());
        // Two cyrillic letters are two characters, not four bytes
        assert!(rules.validate_string("яб", "Name").is_ok());
    }

    #[test]
    fn test_required_rejects_blank() {
        let rules = ValidationRules::required();
        assert_eq!(
            rules.validate_string("   ", "Name"),
            Err("Name must not be empty".to_string())
        );
    }

    #[test]
    fn test_custom_error_overrides_message() {
        let rules = ValidationRules::required()
            .with_min_length(2)
            .with_message("Name needs at least 2 characters");
        assert_eq!(
            rules.validate_string("a", "Name"),
            Err("Name needs at least 2 characters".to_string())
        );
    }

    #[test]
    fn test_number_bounds() {
        let rules = ValidationRules::required().with_min(1.0);
        assert!(rules.validate_number(1.0, "Price").is_ok());
        assert!(rules.validate_number(0.0, "Price").is_err());
        assert!(rules.validate_number(f64::NAN, "Price").is_err());
    }

    #[test]
    fn test_exclusive_lower_bound() {
        let rules = ValidationRules::required().with_min_exclusive(0.0);
        assert!(rules.validate_number(0.005, "Price").is_ok());
        assert_eq!(
            rules.validate_number(0.0, "Price"),
            Err("Price must be greater than 0".to_string())
        );
        assert!(rules.validate_number(-1.0, "Price").is_err());
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("admin@example.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("admin"));
        assert!(!is_valid_email("admin@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("admin@example"));
        assert!(!is_valid_email("admin@example..com"));
        assert!(!is_valid_email("ad min@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
    }
}
