//! HTML Form Payloads

use serde::Deserialize;

/// Fields shared by the create and edit forms
#[derive(Debug, Clone, Deserialize)]
pub struct TaskForm {
    pub title: String,
    #[serde(default)]
    pub description: String,
}
