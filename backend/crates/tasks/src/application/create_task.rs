//! Create Task Use Case

use std::sync::Arc;

use crate::domain::entity::task::{NewTask, Task, normalize_description};
use crate::domain::repository::TaskRepository;
use crate::domain::value_object::title::TaskTitle;
use crate::error::{TaskError, TaskResult};
use kernel::id::UserId;

/// Create task input
pub struct CreateTaskInput {
    pub title: String,
    pub description: String,
}

/// Create task use case
pub struct CreateTaskUseCase<T>
where
    T: TaskRepository,
{
    task_repo: Arc<T>,
}

impl<T> CreateTaskUseCase<T>
where
    T: TaskRepository,
{
    pub fn new(task_repo: Arc<T>) -> Self {
        Self { task_repo }
    }

    pub async fn execute(&self, user_id: UserId, input: CreateTaskInput) -> TaskResult<Task> {
        let title =
            TaskTitle::new(&input.title).map_err(|e| TaskError::Validation(e.to_string()))?;

        let task = self
            .task_repo
            .create(&NewTask::new(
                user_id,
                title,
                normalize_description(&input.description),
            ))
            .await?;

        tracing::info!(
            task_id = %task.task_id,
            user_id = %user_id,
            "Task created"
        );

        Ok(task)
    }
}
