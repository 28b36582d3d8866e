use actix_web::{HttpResponse, Responder, web};
use tracing::{debug, error, info};

use super::render::{escape_html, render};
use super::templates;
use crate::validation::signup::{
    self, FIELD_EMAIL, FIELD_PASSWORD, FIELD_PASSWORD_CONFIRMATION, FIELD_PLAN, SubmittedValues,
    ValidatedValues,
};
use crate::validation::FieldErrors;

/// Outcome of one submission, consumed directly by the renderer.
#[derive(Debug, Clone)]
pub enum ActionData {
    Success {
        values: ValidatedValues,
    },
    Failure {
        values: SubmittedValues,
        errors: FieldErrors,
    },
}

pub struct FormService;

impl FormService {
    /// 表单页：空表单
    pub async fn show() -> impl Responder {
        debug!("Rendering empty form page");
        respond(None)
    }

    /// 表单提交：同步校验一次，成功回显、失败带字段错误重新渲染
    ///
    /// Validation failures are ordinary page data, never an error status:
    /// the form re-renders with messages next to the inputs.
    pub async fn submit(form: web::Form<SubmittedValues>) -> impl Responder {
        let values = form.into_inner();

        let action = match signup::validate(&values) {
            Ok(validated) => {
                info!("Form submission accepted for {}", validated.email);
                ActionData::Success { values: validated }
            }
            Err(errors) => {
                info!("Form submission rejected, {} field(s) invalid", errors.len());
                ActionData::Failure { values, errors }
            }
        };

        respond(Some(&action))
    }
}

fn respond(action: Option<&ActionData>) -> HttpResponse {
    match render_form_page(action) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            error!("Failed to render form page: {}", e);
            HttpResponse::InternalServerError().body("Internal Server Error")
        }
    }
}

/// Render the form page for the given submission outcome
///
/// Inputs repopulate from the submitted values on failure, except the two
/// password fields, which never round-trip into HTML attributes.
fn render_form_page(action: Option<&ActionData>) -> crate::Result<String> {
    let empty = FieldErrors::new();
    let (plan_value, email_value, errors) = match action {
        Some(ActionData::Failure { values, errors }) => (
            values.plan.clone().unwrap_or_default(),
            values.email.clone(),
            errors,
        ),
        _ => (String::new(), String::new(), &empty),
    };

    render(
        templates::FORM,
        &[
            ("%PLAN_VALUE%", escape_html(&plan_value)),
            ("%EMAIL_VALUE%", escape_html(&email_value)),
            ("%PLAN_ERROR%", field_error_html(errors, FIELD_PLAN)),
            ("%EMAIL_ERROR%", field_error_html(errors, FIELD_EMAIL)),
            ("%PASSWORD_ERROR%", field_error_html(errors, FIELD_PASSWORD)),
            (
                "%PASSWORD_CONFIRMATION_ERROR%",
                field_error_html(errors, FIELD_PASSWORD_CONFIRMATION),
            ),
            ("%RESULT_BLOCK%", result_block_html(action)?),
        ],
    )
}

/// Inline error messages for one field, or an empty string
fn field_error_html(errors: &FieldErrors, field: &str) -> String {
    match errors.get(field) {
        Some(messages) => messages
            .iter()
            .map(|m| format!(r#"<span class="error">{}</span>"#, escape_html(m)))
            .collect::<Vec<_>>()
            .join(""),
        None => String::new(),
    }
}

/// The "submitted data" debug panel
fn result_block_html(action: Option<&ActionData>) -> crate::Result<String> {
    let html = match action {
        None => "<pre>Nothing submitted yet.</pre>".to_string(),
        Some(ActionData::Success { values }) => {
            let json = serde_json::to_string_pretty(values)?;
            format!(
                "<p class=\"ok\">Submission accepted.</p><pre>{}</pre>",
                escape_html(&json)
            )
        }
        Some(ActionData::Failure { values, errors }) => {
            let values_json = serde_json::to_string_pretty(values)?;
            let errors_json = serde_json::to_string_pretty(errors)?;
            format!(
                "<p class=\"bad\">Submission rejected.</p><pre>{}</pre>\
                 <div class=\"errors\"><p>Field errors</p><pre>{}</pre></div>",
                escape_html(&values_json),
                escape_html(&errors_json)
            )
        }
    };
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_renders_without_errors() {
        let html = render_form_page(None).unwrap();
        assert!(html.contains("Nothing submitted yet."));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_failure_renders_messages_and_repopulates_email() {
        let values = SubmittedValues {
            plan: None,
            email: "someone@example.com".to_string(),
            password: "secretsecret".to_string(),
            password_confirmation: "different1".to_string(),
        };
        let errors = signup::validate(&values).unwrap_err();
        let html = render_form_page(Some(&ActionData::Failure { values, errors })).unwrap();

        assert!(html.contains(signup::MSG_PASSWORD_MISMATCH));
        assert!(html.contains(r#"value="someone@example.com""#));
        // passwords never round-trip into the markup attributes
        assert!(!html.contains(r#"value="secretsecret""#));
    }

    #[test]
    fn test_success_echoes_validated_json() {
        let values = SubmittedValues {
            plan: Some("3".to_string()),
            email: "someone@example.com".to_string(),
            password: "secretsecret".to_string(),
            password_confirmation: "secretsecret".to_string(),
        };
        let validated = signup::validate(&values).unwrap();
        let html = render_form_page(Some(&ActionData::Success { values: validated })).unwrap();

        assert!(html.contains("Submission accepted."));
        assert!(html.contains("&quot;plan&quot;: 3"));
        assert!(html.contains("someone@example.com"));
    }
}
