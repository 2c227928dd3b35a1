//! Application Layer
//!
//! Use cases for the task CRUD.

pub mod create_task;
pub mod delete_task;
pub mod edit_task;
pub mod list_tasks;

// Re-exports
pub use create_task::{CreateTaskInput, CreateTaskUseCase};
pub use delete_task::DeleteTaskUseCase;
pub use edit_task::{EditTaskInput, EditTaskUseCase};
pub use list_tasks::ListTasksUseCase;
