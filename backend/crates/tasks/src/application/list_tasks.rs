//! List Tasks Use Case

use std::sync::Arc;

use crate::domain::entity::task::Task;
use crate::domain::repository::TaskRepository;
use crate::error::TaskResult;
use kernel::id::UserId;

/// List tasks use case
pub struct ListTasksUseCase<T>
where
    T: TaskRepository,
{
    task_repo: Arc<T>,
}

impl<T> ListTasksUseCase<T>
where
    T: TaskRepository,
{
    pub fn new(task_repo: Arc<T>) -> Self {
        Self { task_repo }
    }

    /// The current user's tasks, newest first. Other users' rows are
    /// filtered at the query, not in handler code.
    pub async fn execute(&self, user_id: UserId) -> TaskResult<Vec<Task>> {
        self.task_repo.list_for_user(user_id).await
    }
}
