//! HTTP Handlers
//!
//! Every mutation answers with a 303 redirect plus a flash cookie; only GET
//! handlers render. User-level failures become flash messages on the
//! originating form, everything else falls through to an error response.

use axum::Form;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use std::sync::Arc;

use platform::credential::CredentialScheme;
use platform::flash::{self, Flash};
use platform::render::{Context, Renderer};

use crate::application::config::AuthConfig;
use crate::application::{
    LoginInput, LoginUseCase, LogoutUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::forms::{LoginForm, RegisterForm};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub renderer: Arc<Renderer>,
    pub credentials: Arc<dyn CredentialScheme>,
}

// ============================================================================
// Index
// ============================================================================

/// GET /
pub async fn index() -> Redirect {
    Redirect::to("/login")
}

// ============================================================================
// Register
// ============================================================================

/// GET /register
pub async fn register_page<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Response>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    render_page(&state.renderer, "register.html", &headers)
}

/// POST /register
pub async fn register_submit<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<RegisterForm>,
) -> Response
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let secure = state.config.cookie_secure;

    let username = form.username.trim();
    let email = form.email.trim();
    let password = form.password.trim();

    if username.is_empty() || email.is_empty() || password.is_empty() {
        return flash::redirect_with_flash(
            "/register",
            Flash::error("All fields are required."),
            secure,
        );
    }

    let use_case = RegisterUseCase::new(state.repo.clone(), state.credentials.clone());

    let input = RegisterInput {
        user_name: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };

    match use_case.execute(input).await {
        Ok(_) => flash::redirect_with_flash(
            "/login",
            Flash::success("Account created. Please log in."),
            secure,
        ),
        Err(err) if err.is_user_error() => {
            flash::redirect_with_flash("/register", Flash::error(err.to_string()), secure)
        }
        Err(err) => err.into_response(),
    }
}

// ============================================================================
// Login
// ============================================================================

/// GET /login
pub async fn login_page<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Response>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    render_page(&state.renderer, "login.html", &headers)
}

/// POST /login
pub async fn login_submit<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<LoginForm>,
) -> Response
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let secure = state.config.cookie_secure;

    let email = form.email.trim();
    let password = form.password.trim();

    if email.is_empty() || password.is_empty() {
        return flash::redirect_with_flash(
            "/login",
            Flash::error("Email and password are required."),
            secure,
        );
    }

    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
        state.credentials.clone(),
    );

    let input = LoginInput {
        email: email.to_string(),
        password: password.to_string(),
    };

    match use_case.execute(input).await {
        Ok(output) => {
            let cookie = state
                .config
                .session_cookie()
                .build_set_cookie(&output.session_token);

            let mut response = flash::redirect_with_flash(
                "/home",
                Flash::success("Logged in successfully."),
                secure,
            );
            append_set_cookie(&mut response, &cookie);
            response
        }
        Err(err) if err.is_user_error() => {
            flash::redirect_with_flash("/login", Flash::error(err.to_string()), secure)
        }
        Err(err) => err.into_response(),
    }
}

// ============================================================================
// Logout
// ============================================================================

/// GET /logout
///
/// Idempotent: logging out while already logged out still succeeds.
pub async fn logout<R>(State(state): State<AuthAppState<R>>, headers: HeaderMap) -> Response
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    if let Some(token) = extract_session_cookie(&headers, &state.config.session_cookie_name) {
        let use_case = LogoutUseCase::new(state.repo.clone(), state.config.clone());
        // Ignore errors - just clear the cookie
        let _ = use_case.execute(&token).await;
    }

    let mut response = flash::redirect_with_flash(
        "/login",
        Flash::success("You have been logged out."),
        state.config.cookie_secure,
    );
    append_set_cookie(
        &mut response,
        &state.config.session_cookie().build_delete_cookie(),
    );
    response
}

// ============================================================================
// Helper Functions
// ============================================================================

fn extract_session_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    platform::cookie::extract_cookie(headers, name)
}

fn append_set_cookie(response: &mut Response, cookie: &str) {
    if let Ok(value) = HeaderValue::from_str(cookie) {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
}

/// Render a page with the pending flash message, clearing its cookie.
fn render_page(renderer: &Renderer, template: &str, headers: &HeaderMap) -> AuthResult<Response> {
    let flash = flash::pop(headers);

    let mut context = Context::new();
    context.insert("flash", &flash);

    let html = renderer
        .render(template, &context)
        .map_err(|e| AuthError::Internal(e.to_string()))?;

    let mut response = Html(html).into_response();
    if flash.is_some() {
        append_set_cookie(&mut response, &flash::clear_cookie());
    }
    Ok(response)
}
