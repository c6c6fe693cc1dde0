//! Built-in seed data for a new board.
//!
//! `default_columns()` and `demo_tasks()` describe the board a fresh session
//! starts with when no configuration overrides it. `BoardConfig` and
//! `Board::default()` both build from these.

use crate::types::{Column, Task};

/// Placeholder shown for a task whose content is empty
pub const UNTITLED_TASK: &str = "Untitled Task";

/// The three workflow columns, in display order.
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new("todo", "Todo"),
        Column::new("doing", "In Progress"),
        Column::new("done", "Done"),
    ]
}

/// Demo tasks spread across the default columns.
pub fn demo_tasks() -> Vec<Task> {
    [
        ("1", "todo", "Create initial project plan"),
        ("2", "todo", "Design landing page"),
        ("3", "todo", "Review codebase structure"),
        ("4", "doing", "Implement authentication"),
        ("5", "doing", "Set up database schema"),
        ("6", "doing", "Fix navbar bugs"),
        ("7", "done", "Organize project repository"),
        ("8", "done", "Write API documentation"),
    ]
    .into_iter()
    .map(|(id, column, content)| Task::with_id(id, column).with_content(content))
    .collect()
}

/// Text to display for a task, substituting a placeholder for empty content.
pub fn display_content(task: &Task) -> &str {
    if task.content.is_empty() {
        UNTITLED_TASK
    } else {
        &task.content
    }
}
