//! Delete Task Use Case

use std::sync::Arc;

use crate::domain::repository::TaskRepository;
use crate::error::{TaskError, TaskResult};
use kernel::id::{TaskId, UserId};

/// Delete task use case
pub struct DeleteTaskUseCase<T>
where
    T: TaskRepository,
{
    task_repo: Arc<T>,
}

impl<T> DeleteTaskUseCase<T>
where
    T: TaskRepository,
{
    pub fn new(task_repo: Arc<T>) -> Self {
        Self { task_repo }
    }

    pub async fn execute(&self, user_id: UserId, task_id: TaskId) -> TaskResult<()> {
        let task = self
            .task_repo
            .find_by_id(task_id)
            .await?
            .ok_or(TaskError::NotFound)?;

        if !task.is_owned_by(user_id) {
            tracing::warn!(
                task_id = %task_id,
                user_id = %user_id,
                owner_id = %task.user_id,
                "Blocked delete of another user's task"
            );
            return Err(TaskError::NotOwner);
        }

        self.task_repo.delete(task_id).await?;

        tracing::info!(task_id = %task_id, user_id = %user_id, "Task deleted");

        Ok(())
    }
}
