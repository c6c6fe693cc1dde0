//! The board model: canonical column and task sequences.
//!
//! A board holds one ordered list of columns and one flat ordered list of
//! tasks. A column's visible task order is the relative order, within the
//! flat list, of the tasks tagged with that column. Relative order across
//! different columns carries no meaning on its own.
//!
//! Every mutation keeps two invariants: task ids are pairwise distinct, and
//! every `task.column_id` names a column on the board. `move_task` is the
//! only way to reorder tasks and checks both before it writes.

use crate::defaults;
use crate::error::{KanbanError, Result};
use crate::types::{Column, ColumnId, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// A kanban board held entirely in memory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardSnapshot")]
pub struct Board {
    columns: Vec<Column>,
    tasks: Vec<Task>,
    /// Content given to tasks created by `add_task`
    #[serde(skip)]
    default_content: String,
}

/// Unvalidated wire form of a board
#[derive(Deserialize)]
struct BoardSnapshot {
    columns: Vec<Column>,
    #[serde(default)]
    tasks: Vec<Task>,
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = KanbanError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self> {
        Board::with_tasks(snapshot.columns, snapshot.tasks)
    }
}

impl Board {
    /// Create an empty board with the given columns
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        Self::with_tasks(columns, Vec::new())
    }

    /// Create a board from columns and tasks, validating both
    pub fn with_tasks(columns: Vec<Column>, tasks: Vec<Task>) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(&column.id) {
                return Err(KanbanError::duplicate_id("column", column.id.as_str()));
            }
        }

        let mut seen = HashSet::new();
        for task in &tasks {
            if !seen.insert(&task.id) {
                return Err(KanbanError::duplicate_id("task", task.id.as_str()));
            }
        }
        check_columns(&columns, &tasks)?;

        Ok(Self {
            columns,
            tasks,
            default_content: String::new(),
        })
    }

    /// Set the content given to newly added tasks
    pub fn with_default_content(mut self, content: impl Into<String>) -> Self {
        self.default_content = content.into();
        self
    }

    /// Columns in display order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The flat task sequence
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a column by id
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Check whether a column exists
    pub fn has_column(&self, id: &ColumnId) -> bool {
        self.column(id).is_some()
    }

    /// Look up a task by id
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Index of a task in the flat sequence
    pub fn task_index(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    /// Tasks of one column, in display order
    pub fn tasks_in_column(&self, column_id: &ColumnId) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| &t.column_id == column_id)
            .collect()
    }

    /// Append a new task to the end of the flat sequence.
    ///
    /// The task shows up last in its column.
    pub fn add_task(&mut self, column_id: &ColumnId) -> Result<Task> {
        if !self.has_column(column_id) {
            return Err(KanbanError::ColumnNotFound {
                id: column_id.to_string(),
            });
        }

        let task = Task::new(column_id.clone()).with_content(self.default_content.clone());
        debug!(task = %task.id, column = %column_id, "added task");
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Remove a task, returning it if it was present
    pub fn delete_task(&mut self, id: &TaskId) -> Option<Task> {
        let index = self.task_index(id)?;
        debug!(task = %id, index, "deleted task");
        Some(self.tasks.remove(index))
    }

    /// Replace a task's content. Returns whether the task exists.
    pub fn update_task_content(&mut self, id: &TaskId, content: impl Into<String>) -> bool {
        match self.tasks.iter_mut().find(|t| &t.id == id) {
            Some(task) => {
                task.content = content.into();
                true
            }
            None => false,
        }
    }

    /// Rename a column
    pub fn rename_column(&mut self, id: &ColumnId, title: impl Into<String>) -> Result<()> {
        let column = self
            .columns
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| KanbanError::ColumnNotFound { id: id.to_string() })?;
        column.title = title.into();
        Ok(())
    }

    /// Replace the whole flat task sequence.
    ///
    /// The new sequence must be a permutation of the current task ids and
    /// every task must name an existing column. On rejection the board is
    /// left exactly as it was.
    pub fn move_task(&mut self, new_ordered_tasks: Vec<Task>) -> Result<()> {
        if new_ordered_tasks.len() != self.tasks.len() {
            return Err(KanbanError::invariant(format!(
                "expected {} tasks, got {}",
                self.tasks.len(),
                new_ordered_tasks.len()
            )));
        }

        let current: HashSet<&TaskId> = self.tasks.iter().map(|t| &t.id).collect();
        let mut seen = HashSet::with_capacity(new_ordered_tasks.len());
        for task in &new_ordered_tasks {
            if !current.contains(&task.id) {
                return Err(KanbanError::invariant(format!(
                    "task {} is not on the board",
                    task.id
                )));
            }
            if !seen.insert(&task.id) {
                return Err(KanbanError::invariant(format!(
                    "task {} appears more than once",
                    task.id
                )));
            }
        }
        check_columns(&self.columns, &new_ordered_tasks)?;

        self.tasks = new_ordered_tasks;
        Ok(())
    }
}

impl Default for Board {
    /// The seed board: default columns with the demo tasks
    fn default() -> Self {
        Self {
            columns: defaults::default_columns(),
            tasks: defaults::demo_tasks(),
            default_content: String::new(),
        }
    }
}

fn check_columns(columns: &[Column], tasks: &[Task]) -> Result<()> {
    let known: HashSet<&ColumnId> = columns.iter().map(|c| &c.id).collect();
    match tasks.iter().find(|t| !known.contains(&t.column_id)) {
        Some(task) => Err(KanbanError::invariant(format!(
            "task {} references unknown column {}",
            task.id, task.column_id
        ))),
        None => Ok(()),
    }
}
