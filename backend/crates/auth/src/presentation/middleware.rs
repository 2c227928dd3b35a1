//! Session Middleware
//!
//! Gate for routes that require an authenticated user. Browser-facing, so
//! failure is a redirect to the login form rather than a bare 401.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use crate::application::CurrentSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::SessionRepository;
use kernel::id::UserId;

/// Middleware state
#[derive(Clone)]
pub struct SessionGate<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub sessions: Arc<S>,
    pub config: Arc<AuthConfig>,
}

/// Authenticated user, stored in request extensions by [`require_session`]
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub user_id: UserId,
}

/// Middleware that requires a valid session.
///
/// On success the request gains a [`CurrentUser`] extension; otherwise the
/// browser is redirected to `/login` without touching the store further.
pub async fn require_session<S>(
    State(gate): State<SessionGate<S>>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let token =
        platform::cookie::extract_cookie(req.headers(), &gate.config.session_cookie_name);

    let use_case = CurrentSessionUseCase::new(gate.sessions.clone(), gate.config.clone());

    let session = match token {
        Some(token) => use_case.get(&token).await.ok(),
        None => None,
    };

    match session {
        Some(session) => {
            req.extensions_mut().insert(CurrentUser {
                user_id: session.user_id,
            });
            next.run(req).await
        }
        None => Redirect::to("/login").into_response(),
    }
}
