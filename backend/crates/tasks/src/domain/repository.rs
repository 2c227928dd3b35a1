//! Repository Trait
//!
//! Interface for task persistence. Implementation is in infrastructure layer.

use crate::domain::entity::task::{NewTask, Task};
use crate::error::TaskResult;
use kernel::id::{TaskId, UserId};

/// Task repository trait
#[trait_variant::make(TaskRepository: Send)]
pub trait LocalTaskRepository {
    /// Insert a new task and return it with the store-assigned id
    async fn create(&self, task: &NewTask) -> TaskResult<Task>;

    /// Find a task by id
    async fn find_by_id(&self, task_id: TaskId) -> TaskResult<Option<Task>>;

    /// All tasks owned by a user, newest first
    async fn list_for_user(&self, user_id: UserId) -> TaskResult<Vec<Task>>;

    /// Update title and description of an existing task
    async fn update(&self, task: &Task) -> TaskResult<()>;

    /// Delete a task
    async fn delete(&self, task_id: TaskId) -> TaskResult<()>;
}
