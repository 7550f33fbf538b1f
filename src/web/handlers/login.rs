//! Login form handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::{IntoResponse, Response},
};

use crate::domain::LoginOutcome;
use crate::state::AppState;
use crate::web::forms::{FormErrors, LoginForm};

/// Template for the login page.
///
/// Renders `templates/login.html` with:
/// - Email and password inputs
/// - Inline error messages per field
/// - Hidden CSRF token
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    /// Previously submitted email. The password is never echoed back.
    pub email: String,
    pub errors: FormErrors,
    pub csrf_token: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "success.html")]
pub struct SuccessTemplate {}

#[derive(Template, WebTemplate)]
#[template(path = "denied.html")]
pub struct DeniedTemplate {}

/// Renders an empty login form.
///
/// # Endpoint
///
/// `GET /login`
///
/// Never compares credentials.
pub async fn login_page_handler(State(state): State<AppState>) -> impl IntoResponse {
    LoginTemplate {
        email: String::new(),
        errors: FormErrors::default(),
        csrf_token: state.csrf.generate(),
    }
}

/// Handles a login form submission.
///
/// # Endpoint
///
/// `POST /login` (form-encoded `email`, `password`, `csrf_token`)
///
/// # Responses
///
/// All outcomes answer `200 OK` without redirects or cookies:
///
/// - validation failure: the login form again, with inline errors
/// - validated pair equals the demo account: the success page
/// - any other validated pair: the denied page
///
/// A body that cannot be decoded as a form is treated as an empty submission.
pub async fn login_submit_handler(
    State(state): State<AppState>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!(%rejection, "Undecodable login form, treating as empty");
            LoginForm::default()
        }
    };

    let credentials = match form.validate_on_submit(&state.csrf) {
        Ok(credentials) => credentials,
        Err(errors) => {
            tracing::debug!(fields = ?errors.fields(), "Login form failed validation");
            return LoginTemplate {
                email: form.email,
                errors,
                csrf_token: state.csrf.generate(),
            }
            .into_response();
        }
    };

    match state.login_service.authenticate(&credentials) {
        LoginOutcome::Granted => SuccessTemplate {}.into_response(),
        LoginOutcome::Denied => DeniedTemplate {}.into_response(),
    }
}
