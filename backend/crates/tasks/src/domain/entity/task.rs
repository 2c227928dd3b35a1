//! Task Entity

use chrono::{DateTime, Utc};
use kernel::id::{TaskId, UserId};

use crate::domain::value_object::title::TaskTitle;

/// Task data before the store has assigned an id
#[derive(Debug, Clone)]
pub struct NewTask {
    pub user_id: UserId,
    pub title: TaskTitle,
    pub description: Option<String>,
    pub is_complete: bool,
    pub created_at: DateTime<Utc>,
}

impl NewTask {
    pub fn new(user_id: UserId, title: TaskTitle, description: Option<String>) -> Self {
        Self {
            user_id,
            title,
            description,
            is_complete: false,
            created_at: Utc::now(),
        }
    }
}

/// Persisted task entity
#[derive(Debug, Clone)]
pub struct Task {
    /// Store-assigned integer identifier
    pub task_id: TaskId,
    /// Owning user; immutable after creation
    pub user_id: UserId,
    /// Required, non-empty title
    pub title: TaskTitle,
    /// Optional free text
    pub description: Option<String>,
    /// Completion flag. Stored and displayed; no route toggles it.
    pub is_complete: bool,
    /// Creation timestamp; drives the default newest-first ordering
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Replace title and description in place
    pub fn edit(&mut self, title: TaskTitle, description: Option<String>) {
        self.title = title;
        self.description = description;
    }

    /// Ownership check used before every mutation
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

/// Normalize a free-text description: trimmed, empty becomes `None`.
pub fn normalize_description(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
