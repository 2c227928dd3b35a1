//! Tasks Module
//!
//! The to-do CRUD behind the session gate:
//! - `domain/` - Task entity, title value object, repository trait
//! - `application/` - Create/list/edit/delete use cases
//! - `infra/` - SQLite repository
//! - `presentation/` - HTML handlers, forms, router
//!
//! Every mutating operation re-verifies ownership server-side: the acting
//! session's user id must match the task row's `user_id` regardless of what
//! the client claims.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{TaskError, TaskResult};
pub use infra::sqlite::SqliteTaskRepository;
pub use presentation::router::{tasks_router, tasks_router_generic};
