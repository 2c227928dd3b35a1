//! Use-case tests for the tasks crate
//!
//! Run against an in-memory SQLite database with the real schema so the
//! repository implementation is exercised too.

use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;

use crate::application::{
    CreateTaskInput, CreateTaskUseCase, DeleteTaskUseCase, EditTaskInput, EditTaskUseCase,
    ListTasksUseCase,
};
use crate::domain::repository::TaskRepository;
use crate::error::TaskError;
use crate::infra::sqlite::SqliteTaskRepository;
use kernel::id::{TaskId, UserId};

const SCHEMA: &str = include_str!("../../../../database/migrations/0001_init.sql");

fn alice() -> UserId {
    UserId::from_i64(1)
}

fn bob() -> UserId {
    UserId::from_i64(2)
}

async fn setup_repo() -> Arc<SqliteTaskRepository> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect in-memory sqlite");

    sqlx::raw_sql(SCHEMA)
        .execute(&pool)
        .await
        .expect("apply schema");

    // Two accounts to exercise ownership boundaries
    sqlx::raw_sql(
        r#"
        INSERT INTO users (user_name, email, password, created_at)
        VALUES ('alicealice', 'alice@example.com', 'Passw0rd!', '2026-01-01T00:00:00Z');
        INSERT INTO users (user_name, email, password, created_at)
        VALUES ('bobbybobby', 'bob@example.com', 'Passw0rd!', '2026-01-01T00:00:00Z');
        "#,
    )
    .execute(&pool)
    .await
    .expect("seed users");

    Arc::new(SqliteTaskRepository::new(pool))
}

fn task_input(title: &str, description: &str) -> CreateTaskInput {
    CreateTaskInput {
        title: title.to_string(),
        description: description.to_string(),
    }
}

#[cfg(test)]
mod create_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_ids_in_order() {
        let repo = setup_repo().await;
        let use_case = CreateTaskUseCase::new(repo.clone());

        let first = use_case
            .execute(alice(), task_input("Buy milk", ""))
            .await
            .unwrap();
        let second = use_case
            .execute(alice(), task_input("Buy bread", "rye"))
            .await
            .unwrap();

        assert_eq!(first.task_id, TaskId::from_i64(1));
        assert_eq!(second.task_id, TaskId::from_i64(2));
        assert!(!first.is_complete);
        assert_eq!(second.description.as_deref(), Some("rye"));
    }

    #[tokio::test]
    async fn test_empty_title_creates_no_row() {
        let repo = setup_repo().await;
        let use_case = CreateTaskUseCase::new(repo.clone());

        let err = use_case
            .execute(alice(), task_input("   ", "whatever"))
            .await
            .unwrap_err();

        assert!(matches!(err, TaskError::Validation(_)));
        let tasks = ListTasksUseCase::new(repo).execute(alice()).await.unwrap();
        assert!(tasks.is_empty());
    }

    #[tokio::test]
    async fn test_blank_description_stored_as_null() {
        let repo = setup_repo().await;

        let task = CreateTaskUseCase::new(repo.clone())
            .execute(alice(), task_input("Buy milk", "   "))
            .await
            .unwrap();
        assert!(task.description.is_none());

        let reloaded = repo
            .find_by_id(task.task_id)
            .await
            .unwrap()
            .expect("task exists");
        assert!(reloaded.description.is_none());
    }
}

#[cfg(test)]
mod list_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let repo = setup_repo().await;
        let create = CreateTaskUseCase::new(repo.clone());

        create.execute(alice(), task_input("first", "")).await.unwrap();
        create.execute(alice(), task_input("second", "")).await.unwrap();
        create.execute(alice(), task_input("third", "")).await.unwrap();

        let titles: Vec<String> = ListTasksUseCase::new(repo)
            .execute(alice())
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title.into_inner())
            .collect();

        assert_eq!(titles, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_list_never_shows_other_users_tasks() {
        let repo = setup_repo().await;
        let create = CreateTaskUseCase::new(repo.clone());

        create.execute(alice(), task_input("mine", "")).await.unwrap();
        create.execute(bob(), task_input("theirs", "")).await.unwrap();

        let list = ListTasksUseCase::new(repo.clone()).execute(alice()).await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].title.as_str(), "mine");

        let list = ListTasksUseCase::new(repo).execute(bob()).await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].title.as_str(), "theirs");
    }
}

#[cfg(test)]
mod ownership_tests {
    use super::*;

    #[tokio::test]
    async fn test_delete_foreign_task_blocked() {
        let repo = setup_repo().await;
        let task = CreateTaskUseCase::new(repo.clone())
            .execute(alice(), task_input("Buy milk", ""))
            .await
            .unwrap();

        let err = DeleteTaskUseCase::new(repo.clone())
            .execute(bob(), task.task_id)
            .await
            .unwrap_err();

        assert!(matches!(err, TaskError::NotOwner));
        // Row untouched
        assert!(repo.find_by_id(task.task_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_edit_foreign_task_blocked() {
        let repo = setup_repo().await;
        let task = CreateTaskUseCase::new(repo.clone())
            .execute(alice(), task_input("Buy milk", ""))
            .await
            .unwrap();

        let err = EditTaskUseCase::new(repo.clone())
            .execute(
                bob(),
                task.task_id,
                EditTaskInput {
                    title: "Hijacked".to_string(),
                    description: String::new(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, TaskError::NotOwner));

        let unchanged = repo.find_by_id(task.task_id).await.unwrap().unwrap();
        assert_eq!(unchanged.title.as_str(), "Buy milk");
    }

    #[tokio::test]
    async fn test_owner_can_delete() {
        let repo = setup_repo().await;
        let task = CreateTaskUseCase::new(repo.clone())
            .execute(alice(), task_input("Buy milk", ""))
            .await
            .unwrap();

        DeleteTaskUseCase::new(repo.clone())
            .execute(alice(), task.task_id)
            .await
            .unwrap();

        assert!(repo.find_by_id(task.task_id).await.unwrap().is_none());
    }
}

#[cfg(test)]
mod edit_tests {
    use super::*;

    #[tokio::test]
    async fn test_edit_updates_in_place() {
        let repo = setup_repo().await;
        let task = CreateTaskUseCase::new(repo.clone())
            .execute(alice(), task_input("Buy milk", "2 liters"))
            .await
            .unwrap();

        EditTaskUseCase::new(repo.clone())
            .execute(
                alice(),
                task.task_id,
                EditTaskInput {
                    title: "  Buy oat milk  ".to_string(),
                    description: String::new(),
                },
            )
            .await
            .unwrap();

        let updated = repo.find_by_id(task.task_id).await.unwrap().unwrap();
        assert_eq!(updated.title.as_str(), "Buy oat milk");
        assert!(updated.description.is_none());
        // Identity and ordering fields are untouched
        assert_eq!(updated.user_id, alice());
        assert_eq!(updated.created_at.timestamp(), task.created_at.timestamp());
    }

    #[tokio::test]
    async fn test_edit_empty_title_rejected() {
        let repo = setup_repo().await;
        let task = CreateTaskUseCase::new(repo.clone())
            .execute(alice(), task_input("Buy milk", ""))
            .await
            .unwrap();

        let err = EditTaskUseCase::new(repo.clone())
            .execute(
                alice(),
                task.task_id,
                EditTaskInput {
                    title: "   ".to_string(),
                    description: String::new(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, TaskError::Validation(_)));

        let unchanged = repo.find_by_id(task.task_id).await.unwrap().unwrap();
        assert_eq!(unchanged.title.as_str(), "Buy milk");
    }
}

#[cfg(test)]
mod not_found_tests {
    use super::*;

    #[tokio::test]
    async fn test_delete_missing_task() {
        let repo = setup_repo().await;

        let err = DeleteTaskUseCase::new(repo)
            .execute(alice(), TaskId::from_i64(999))
            .await
            .unwrap_err();

        assert!(matches!(err, TaskError::NotFound));
    }

    #[tokio::test]
    async fn test_edit_missing_task() {
        let repo = setup_repo().await;

        let err = EditTaskUseCase::new(repo)
            .execute(
                alice(),
                TaskId::from_i64(999),
                EditTaskInput {
                    title: "x".to_string(),
                    description: String::new(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, TaskError::NotFound));
    }
}
