//! Task Title Value Object
//!
//! ## Invariants
//! - Non-empty after trimming whitespace
//! - At most 200 characters

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum title length (in characters)
pub const TITLE_MAX_LENGTH: usize = 200;

/// Error returned when title validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleError {
    /// Title is empty after trimming
    Empty,

    /// Title is too long (maximum: TITLE_MAX_LENGTH)
    TooLong { length: usize, max: usize },
}

impl fmt::Display for TitleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Title cannot be empty"),
            Self::TooLong { length, max } => {
                write!(f, "Title is too long ({length} chars, maximum {max})")
            }
        }
    }
}

impl std::error::Error for TitleError {}

/// Validated task title
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Create a new title from raw input, trimming surrounding whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TitleError> {
        let title = input.as_ref().trim().to_string();

        if title.is_empty() {
            return Err(TitleError::Empty);
        }

        let length = title.chars().count();
        if length > TITLE_MAX_LENGTH {
            return Err(TitleError::TooLong {
                length,
                max: TITLE_MAX_LENGTH,
            });
        }

        Ok(Self(title))
    }

    /// Get the title as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskTitle {
    type Error = TitleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskTitle> for String {
    fn from(title: TaskTitle) -> Self {
        title.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_title() {
        let title = TaskTitle::new("Buy milk").unwrap();
        assert_eq!(title.as_str(), "Buy milk");
    }

    #[test]
    fn test_title_is_trimmed() {
        let title = TaskTitle::new("  Buy milk  ").unwrap();
        assert_eq!(title.as_str(), "Buy milk");
    }

    #[test]
    fn test_empty_fails() {
        assert_eq!(TaskTitle::new("").unwrap_err(), TitleError::Empty);
        assert_eq!(TaskTitle::new("   ").unwrap_err(), TitleError::Empty);
        assert_eq!(TaskTitle::new("\t\n").unwrap_err(), TitleError::Empty);
    }

    #[test]
    fn test_maximum_length() {
        let input = "a".repeat(TITLE_MAX_LENGTH);
        assert!(TaskTitle::new(&input).is_ok());
    }

    #[test]
    fn test_too_long() {
        let input = "a".repeat(TITLE_MAX_LENGTH + 1);
        assert!(matches!(
            TaskTitle::new(&input),
            Err(TitleError::TooLong { length: 201, max: 200 })
        ));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 200 multibyte characters is within the limit
        let input = "あ".repeat(TITLE_MAX_LENGTH);
        assert!(TaskTitle::new(&input).is_ok());
    }
}
