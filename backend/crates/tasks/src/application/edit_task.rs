//! Edit Task Use Case
//!
//! Lookup, then ownership, then validation - failing the earliest check
//! wins, and nothing is written on any failure.

use std::sync::Arc;

use crate::domain::entity::task::normalize_description;
use crate::domain::repository::TaskRepository;
use crate::domain::value_object::title::TaskTitle;
use crate::error::{TaskError, TaskResult};
use kernel::id::{TaskId, UserId};

/// Edit task input
pub struct EditTaskInput {
    pub title: String,
    pub description: String,
}

/// Edit task use case
pub struct EditTaskUseCase<T>
where
    T: TaskRepository,
{
    task_repo: Arc<T>,
}

impl<T> EditTaskUseCase<T>
where
    T: TaskRepository,
{
    pub fn new(task_repo: Arc<T>) -> Self {
        Self { task_repo }
    }

    pub async fn execute(
        &self,
        user_id: UserId,
        task_id: TaskId,
        input: EditTaskInput,
    ) -> TaskResult<()> {
        let mut task = self
            .task_repo
            .find_by_id(task_id)
            .await?
            .ok_or(TaskError::NotFound)?;

        if !task.is_owned_by(user_id) {
            tracing::warn!(
                task_id = %task_id,
                user_id = %user_id,
                owner_id = %task.user_id,
                "Blocked edit of another user's task"
            );
            return Err(TaskError::NotOwner);
        }

        let title =
            TaskTitle::new(&input.title).map_err(|e| TaskError::Validation(e.to_string()))?;

        task.edit(title, normalize_description(&input.description));
        self.task_repo.update(&task).await?;

        tracing::info!(task_id = %task_id, user_id = %user_id, "Task updated");

        Ok(())
    }
}
