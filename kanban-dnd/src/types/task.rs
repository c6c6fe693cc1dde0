//! Task type

use super::ids::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// A task/card on the kanban board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// Owning column; always names a column on the board
    pub column_id: ColumnId,
    #[serde(default)]
    pub content: String,
}

impl Task {
    /// Create a new task with a fresh id and empty content
    pub fn new(column_id: impl Into<ColumnId>) -> Self {
        Self {
            id: TaskId::new(),
            column_id: column_id.into(),
            content: String::new(),
        }
    }

    /// Create a task with an explicit id
    pub fn with_id(id: impl Into<TaskId>, column_id: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            column_id: column_id.into(),
            content: String::new(),
        }
    }

    /// Set the content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}
