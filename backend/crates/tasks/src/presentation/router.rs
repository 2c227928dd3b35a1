//! Tasks Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use auth::application::config::AuthConfig;
use auth::domain::repository::SessionRepository;
use auth::infra::sqlite::SqliteAuthRepository;
use auth::presentation::middleware::{SessionGate, require_session};
use platform::render::Renderer;

use crate::domain::repository::TaskRepository;
use crate::infra::sqlite::SqliteTaskRepository;
use crate::presentation::handlers::{self, TasksAppState};

/// Create the tasks router with the SQLite repositories
pub fn tasks_router(
    repo: SqliteTaskRepository,
    gate: SessionGate<SqliteAuthRepository>,
    config: Arc<AuthConfig>,
    renderer: Arc<Renderer>,
) -> Router {
    tasks_router_generic(repo, gate, config, renderer)
}

/// Create a generic tasks router for any repository implementations
pub fn tasks_router_generic<T, S>(
    repo: T,
    gate: SessionGate<S>,
    config: Arc<AuthConfig>,
    renderer: Arc<Renderer>,
) -> Router
where
    T: TaskRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let state = TasksAppState {
        repo: Arc::new(repo),
        config,
        renderer,
    };

    Router::new()
        .route(
            "/home",
            get(handlers::home_page::<T>).post(handlers::create_task::<T>),
        )
        .route("/delete/{task_id}", get(handlers::delete_task::<T>))
        .route("/edit/{task_id}", post(handlers::edit_task::<T>))
        .layer(middleware::from_fn_with_state(gate, require_session::<S>))
        .with_state(state)
}
