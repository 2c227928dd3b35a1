//! Auth Router

use axum::{Router, routing::get};
use std::sync::Arc;

use platform::credential::CredentialScheme;
use platform::render::Renderer;

use crate::application::config::AuthConfig;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::infra::sqlite::SqliteAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the auth router with the SQLite repository
pub fn auth_router(
    repo: SqliteAuthRepository,
    config: Arc<AuthConfig>,
    renderer: Arc<Renderer>,
    credentials: Arc<dyn CredentialScheme>,
) -> Router {
    auth_router_generic(repo, config, renderer, credentials)
}

/// Create a generic auth router for any repository implementation
pub fn auth_router_generic<R>(
    repo: R,
    config: Arc<AuthConfig>,
    renderer: Arc<Renderer>,
    credentials: Arc<dyn CredentialScheme>,
) -> Router
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config,
        renderer,
        credentials,
    };

    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/register",
            get(handlers::register_page::<R>).post(handlers::register_submit::<R>),
        )
        .route(
            "/login",
            get(handlers::login_page::<R>).post(handlers::login_submit::<R>),
        )
        .route("/logout", get(handlers::logout::<R>))
        .with_state(state)
}
