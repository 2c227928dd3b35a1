//! HTTP Handlers
//!
//! The session middleware has already resolved [`CurrentUser`] before any
//! of these run. Mutations follow GET-after-POST: success and user-level
//! failure both answer with a flash + redirect to `/home`; a missing task
//! id is the one hard failure.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{Html, IntoResponse, Response};
use axum::{Extension, Form};
use serde::Serialize;
use std::sync::Arc;

use auth::application::config::AuthConfig;
use auth::presentation::middleware::CurrentUser;
use platform::flash::{self, Flash};
use platform::render::{Context, Renderer};

use crate::application::{
    CreateTaskInput, CreateTaskUseCase, DeleteTaskUseCase, EditTaskInput, EditTaskUseCase,
    ListTasksUseCase,
};
use crate::domain::entity::task::Task;
use crate::domain::repository::TaskRepository;
use crate::error::{TaskError, TaskResult};
use crate::presentation::forms::TaskForm;
use kernel::id::TaskId;

/// Shared state for task handlers
#[derive(Clone)]
pub struct TasksAppState<T>
where
    T: TaskRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<T>,
    pub config: Arc<AuthConfig>,
    pub renderer: Arc<Renderer>,
}

/// Template-facing view of a task row
#[derive(Debug, Serialize)]
struct TaskView {
    task_id: i64,
    title: String,
    description: String,
    created_at: String,
    is_complete: bool,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            task_id: task.task_id.as_i64(),
            title: task.title.as_str().to_string(),
            description: task.description.clone().unwrap_or_default(),
            created_at: task.created_at.format("%Y-%m-%d %H:%M").to_string(),
            is_complete: task.is_complete,
        }
    }
}

// ============================================================================
// Home
// ============================================================================

/// GET /home
pub async fn home_page<T>(
    State(state): State<TasksAppState<T>>,
    Extension(user): Extension<CurrentUser>,
    headers: HeaderMap,
) -> TaskResult<Response>
where
    T: TaskRepository + Clone + Send + Sync + 'static,
{
    let tasks = ListTasksUseCase::new(state.repo.clone())
        .execute(user.user_id)
        .await?;

    let views: Vec<TaskView> = tasks.iter().map(TaskView::from).collect();

    let mut context = Context::new();
    context.insert("tasks", &views);

    render_page_with(&state.renderer, "home.html", &headers, context)
}

/// POST /home (create task)
pub async fn create_task<T>(
    State(state): State<TasksAppState<T>>,
    Extension(user): Extension<CurrentUser>,
    Form(form): Form<TaskForm>,
) -> Response
where
    T: TaskRepository + Clone + Send + Sync + 'static,
{
    let secure = state.config.cookie_secure;

    let use_case = CreateTaskUseCase::new(state.repo.clone());
    let input = CreateTaskInput {
        title: form.title,
        description: form.description,
    };

    match use_case.execute(user.user_id, input).await {
        Ok(_) => flash::redirect_with_flash("/home", Flash::success("Task added."), secure),
        Err(err) => task_error_response(err, secure),
    }
}

// ============================================================================
// Delete
// ============================================================================

/// GET /delete/{task_id}
pub async fn delete_task<T>(
    State(state): State<TasksAppState<T>>,
    Extension(user): Extension<CurrentUser>,
    Path(task_id): Path<i64>,
) -> Response
where
    T: TaskRepository + Clone + Send + Sync + 'static,
{
    let secure = state.config.cookie_secure;

    let use_case = DeleteTaskUseCase::new(state.repo.clone());

    match use_case.execute(user.user_id, TaskId::from_i64(task_id)).await {
        Ok(()) => flash::redirect_with_flash("/home", Flash::success("Task deleted."), secure),
        Err(err) => task_error_response(err, secure),
    }
}

// ============================================================================
// Edit
// ============================================================================

/// POST /edit/{task_id}
pub async fn edit_task<T>(
    State(state): State<TasksAppState<T>>,
    Extension(user): Extension<CurrentUser>,
    Path(task_id): Path<i64>,
    Form(form): Form<TaskForm>,
) -> Response
where
    T: TaskRepository + Clone + Send + Sync + 'static,
{
    let secure = state.config.cookie_secure;

    let use_case = EditTaskUseCase::new(state.repo.clone());
    let input = EditTaskInput {
        title: form.title,
        description: form.description,
    };

    match use_case
        .execute(user.user_id, TaskId::from_i64(task_id), input)
        .await
    {
        Ok(()) => flash::redirect_with_flash("/home", Flash::success("Task updated."), secure),
        Err(err) => task_error_response(err, secure),
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// User-level failures go back to `/home` as a flash; not-found and
/// server failures become error responses.
fn task_error_response(err: TaskError, secure: bool) -> Response {
    if err.is_user_error() {
        flash::redirect_with_flash("/home", Flash::error(err.to_string()), secure)
    } else {
        err.into_response()
    }
}

/// Render a page with the pending flash message, clearing its cookie.
fn render_page_with(
    renderer: &Renderer,
    template: &str,
    headers: &HeaderMap,
    mut context: Context,
) -> TaskResult<Response> {
    let flash = flash::pop(headers);
    context.insert("flash", &flash);

    let html = renderer
        .render(template, &context)
        .map_err(|e| TaskError::Internal(e.to_string()))?;

    let mut response = Html(html).into_response();
    if flash.is_some() {
        if let Ok(value) = HeaderValue::from_str(&flash::clear_cookie()) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }
    Ok(response)
}
