//! SQLite Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::entity::task::{NewTask, Task};
use crate::domain::repository::TaskRepository;
use crate::domain::value_object::title::TaskTitle;
use crate::error::TaskResult;
use kernel::id::{TaskId, UserId};

/// SQLite-backed task repository
#[derive(Clone)]
pub struct SqliteTaskRepository {
    pool: SqlitePool,
}

impl SqliteTaskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl TaskRepository for SqliteTaskRepository {
    async fn create(&self, task: &NewTask) -> TaskResult<Task> {
        let result = sqlx::query(
            r#"
            INSERT INTO tasks (
                user_id,
                title,
                description,
                is_complete,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(task.user_id.as_i64())
        .bind(task.title.as_str())
        .bind(&task.description)
        .bind(task.is_complete)
        .bind(task.created_at)
        .execute(&self.pool)
        .await?;

        Ok(Task {
            task_id: TaskId::from_i64(result.last_insert_rowid()),
            user_id: task.user_id,
            title: task.title.clone(),
            description: task.description.clone(),
            is_complete: task.is_complete,
            created_at: task.created_at,
        })
    }

    async fn find_by_id(&self, task_id: TaskId) -> TaskResult<Option<Task>> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT
                task_id,
                user_id,
                title,
                description,
                is_complete,
                created_at
            FROM tasks
            WHERE task_id = ?1
            "#,
        )
        .bind(task_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_task()))
    }

    async fn list_for_user(&self, user_id: UserId) -> TaskResult<Vec<Task>> {
        // task_id breaks ties between rows created in the same instant
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT
                task_id,
                user_id,
                title,
                description,
                is_complete,
                created_at
            FROM tasks
            WHERE user_id = ?1
            ORDER BY created_at DESC, task_id DESC
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_task()).collect())
    }

    async fn update(&self, task: &Task) -> TaskResult<()> {
        sqlx::query(
            r#"
            UPDATE tasks SET
                title = ?2,
                description = ?3,
                is_complete = ?4
            WHERE task_id = ?1
            "#,
        )
        .bind(task.task_id.as_i64())
        .bind(task.title.as_str())
        .bind(&task.description)
        .bind(task.is_complete)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, task_id: TaskId) -> TaskResult<()> {
        sqlx::query("DELETE FROM tasks WHERE task_id = ?1")
            .bind(task_id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row Type for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct TaskRow {
    task_id: i64,
    user_id: i64,
    title: String,
    description: Option<String>,
    is_complete: bool,
    created_at: DateTime<Utc>,
}

impl TaskRow {
    fn into_task(self) -> Task {
        Task {
            task_id: TaskId::from_i64(self.task_id),
            user_id: UserId::from_i64(self.user_id),
            title: TaskTitle::from_db(self.title),
            description: self.description,
            is_complete: self.is_complete,
            created_at: self.created_at,
        }
    }
}
