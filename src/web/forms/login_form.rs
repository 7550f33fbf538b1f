//! Login form: field rules and error collection.

use serde::Deserialize;
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::Credentials;
use crate::web::csrf::CsrfProtection;
use crate::web::forms::email_address::email_syntax;

const REQUIRED_MESSAGE: &str = "This field is required.";

/// A login form submission as posted by the browser.
///
/// Missing fields deserialize as empty strings so they surface as
/// "required" errors instead of extractor rejections.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginForm {
    #[serde(default)]
    #[validate(custom(function = "required_email"))]
    #[validate(length(
        min = 6,
        max = 30,
        message = "Field must be between 6 and 30 characters long."
    ))]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "required"))]
    #[validate(length(
        min = 8,
        max = 30,
        message = "Field must be between 8 and 30 characters long."
    ))]
    pub password: String,

    #[serde(default)]
    pub csrf_token: String,
}

/// Per-field error messages, in the order they are displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub email: Vec<String>,
    pub password: Vec<String>,
    pub csrf_token: Vec<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.password.is_empty() && self.csrf_token.is_empty()
    }

    /// Fields with at least one error, for logging.
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if !self.email.is_empty() {
            fields.push("email");
        }
        if !self.password.is_empty() {
            fields.push("password");
        }
        if !self.csrf_token.is_empty() {
            fields.push("csrf_token");
        }
        fields
    }
}

impl From<&ValidationErrors> for FormErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let fields = errors.field_errors();
        let messages_for = |name: &str| {
            fields
                .get(name)
                .map(|errors| field_messages(errors))
                .unwrap_or_default()
        };

        Self {
            email: messages_for("email"),
            password: messages_for("password"),
            csrf_token: Vec::new(),
        }
    }
}

impl LoginForm {
    /// Runs every field rule and the CSRF check.
    ///
    /// # Errors
    ///
    /// Returns all collected [`FormErrors`] if any rule fails. The caller
    /// re-renders the form with them.
    pub fn validate_on_submit(&self, csrf: &CsrfProtection) -> Result<Credentials, FormErrors> {
        let checked = self.validate_fields();

        let Err(csrf_error) = csrf.verify(&self.csrf_token) else {
            return checked;
        };

        let mut errors = checked.err().unwrap_or_default();
        errors.csrf_token.push(csrf_error.to_string());
        Err(errors)
    }

    /// Runs the field rules only, without a CSRF token.
    ///
    /// Used by tooling that checks credentials outside a browser.
    pub fn validate_fields(&self) -> Result<Credentials, FormErrors> {
        match self.validate() {
            Ok(()) => Ok(Credentials {
                email: self.email.clone(),
                password: self.password.clone(),
            }),
            Err(e) => Err(FormErrors::from(&e)),
        }
    }
}

/// Empty or whitespace-only values fail.
fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed(REQUIRED_MESSAGE)));
    }
    Ok(())
}

/// `required`, then email syntax; the first failure wins.
fn required_email(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    email_syntax(value)
}

/// Orders a field's errors by rule and drops the rest when `required` failed.
fn field_messages(errors: &[ValidationError]) -> Vec<String> {
    if let Some(required) = errors.iter().find(|e| e.code == "required") {
        return vec![message_of(required)];
    }

    let mut ordered: Vec<&ValidationError> = errors.iter().collect();
    ordered.sort_by_key(|e| rule_rank(&e.code));
    ordered.into_iter().map(message_of).collect()
}

fn rule_rank(code: &str) -> u8 {
    match code {
        "required" => 0,
        "email" => 1,
        "length" => 2,
        _ => 3,
    }
}

fn message_of(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| error.code.to_string())
}
