//! The signup form schema
//!
//! Four fields arrive form-encoded: an optional `plan` number, `email`,
//! `password` and `passwordConfirmation`. One cross-field rule compares
//! the two password fields and attaches its message to
//! `passwordConfirmation` specifically.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{FieldErrors, Schema, rules};

pub const FIELD_PLAN: &str = "plan";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_PASSWORD_CONFIRMATION: &str = "passwordConfirmation";

pub const PASSWORD_MIN_LEN: usize = 8;

pub const MSG_EMAIL_INVALID: &str = "Enter a valid email address.";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters.";
pub const MSG_CONFIRMATION_REQUIRED: &str = "Enter the password confirmation.";
pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match.";
pub const MSG_PLAN_POSITIVE: &str = "Plan must be a positive number.";

/// Raw submitted values, exactly as they came off the wire.
///
/// Missing fields default to empty so a partial submission still
/// validates as a whole rather than failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmittedValues {
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, rename = "passwordConfirmation")]
    pub password_confirmation: String,
}

/// Values that passed the schema, with the plan parsed.
#[derive(Debug, Clone, Serialize)]
pub struct ValidatedValues {
    pub plan: Option<i64>,
    pub email: String,
    pub password: String,
    #[serde(rename = "passwordConfirmation")]
    pub password_confirmation: String,
}

fn passwords_match(values: &SubmittedValues, errors: &mut FieldErrors) {
    if values.password != values.password_confirmation {
        errors.push(FIELD_PASSWORD_CONFIRMATION, MSG_PASSWORD_MISMATCH);
    }
}

static SCHEMA: Lazy<Schema<SubmittedValues>> = Lazy::new(|| {
    Schema::new()
        .field(FIELD_EMAIL, |v: &SubmittedValues| {
            rules::email(&v.email, MSG_EMAIL_INVALID)
        })
        .field(FIELD_PASSWORD, |v| {
            rules::min_len(&v.password, PASSWORD_MIN_LEN, MSG_PASSWORD_TOO_SHORT)
        })
        .field(FIELD_PASSWORD_CONFIRMATION, |v| {
            rules::required(&v.password_confirmation, MSG_CONFIRMATION_REQUIRED)
        })
        .field(FIELD_PLAN, |v| {
            rules::optional_positive_int(v.plan.as_deref(), MSG_PLAN_POSITIVE)
        })
        .refine(passwords_match)
});

/// Validate a submission against the signup schema
///
/// All failing field rules report at once; the cross-field password check
/// only runs after every field rule has passed.
pub fn validate(values: &SubmittedValues) -> Result<ValidatedValues, FieldErrors> {
    SCHEMA.validate(values)?;

    Ok(ValidatedValues {
        // the schema already proved this parses when present
        plan: values
            .plan
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse().ok()),
        email: values.email.clone(),
        password: values.password.clone(),
        password_confirmation: values.password_confirmation.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_values() -> SubmittedValues {
        SubmittedValues {
            plan: Some("2".to_string()),
            email: "you@example.com".to_string(),
            password: "longenough".to_string(),
            password_confirmation: "longenough".to_string(),
        }
    }

    #[test]
    fn test_well_formed_values_pass() {
        let validated = validate(&valid_values()).unwrap();
        assert_eq!(validated.plan, Some(2));
        assert_eq!(validated.email, "you@example.com");
        assert_eq!(validated.password, "longenough");
    }

    #[test]
    fn test_mismatch_attaches_to_confirmation_field() {
        let mut values = valid_values();
        values.password_confirmation = "different1".to_string();

        let errors = validate(&values).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FIELD_PASSWORD_CONFIRMATION),
            Some(&[MSG_PASSWORD_MISMATCH.to_string()][..])
        );
        assert!(errors.get(FIELD_PASSWORD).is_none());
    }

    #[test]
    fn test_invalid_email_attaches_to_email_field() {
        let mut values = valid_values();
        values.email = "not-an-email".to_string();

        let errors = validate(&values).unwrap_err();
        assert_eq!(
            errors.get(FIELD_EMAIL),
            Some(&[MSG_EMAIL_INVALID.to_string()][..])
        );
    }

    #[test]
    fn test_short_password_rejected() {
        let mut values = valid_values();
        values.password = "short".to_string();
        values.password_confirmation = "short".to_string();

        let errors = validate(&values).unwrap_err();
        assert_eq!(
            errors.get(FIELD_PASSWORD),
            Some(&[MSG_PASSWORD_TOO_SHORT.to_string()][..])
        );
    }

    #[test]
    fn test_empty_confirmation_reports_required_not_mismatch() {
        let mut values = valid_values();
        values.password_confirmation = String::new();

        let errors = validate(&values).unwrap_err();
        assert_eq!(
            errors.get(FIELD_PASSWORD_CONFIRMATION),
            Some(&[MSG_CONFIRMATION_REQUIRED.to_string()][..])
        );
    }

    #[test]
    fn test_plan_is_optional() {
        let mut values = valid_values();
        values.plan = None;
        assert_eq!(validate(&values).unwrap().plan, None);

        values.plan = Some(String::new());
        assert_eq!(validate(&values).unwrap().plan, None);
    }

    #[test]
    fn test_zero_and_negative_plan_rejected() {
        for bad in ["0", "-1"] {
            let mut values = valid_values();
            values.plan = Some(bad.to_string());
            let errors = validate(&values).unwrap_err();
            assert_eq!(
                errors.get(FIELD_PLAN),
                Some(&[MSG_PLAN_POSITIVE.to_string()][..])
            );
        }
    }

    #[test]
    fn test_multiple_fields_report_together() {
        let values = SubmittedValues {
            plan: Some("0".to_string()),
            email: "bad".to_string(),
            password: "short".to_string(),
            password_confirmation: String::new(),
        };

        let errors = validate(&values).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
