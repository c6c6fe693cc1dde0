//! KanbanContext: the owner of one board and its drag controller.
//!
//! Rendering code reads through the query methods, user actions go through
//! the CRUD methods, and the gesture provider feeds [`DragEvent`]s to
//! [`KanbanContext::handle`]. Nothing else holds a mutable reference to the
//! board.

use crate::board::Board;
use crate::config::BoardConfig;
use crate::drag::{DragController, DragEvent, DragKind, DragOutcome};
use crate::error::{KanbanError, Result};
use crate::types::{Column, ColumnId, DragId, Task, TaskId};
use tracing::debug;

/// A board together with the drag session acting on it
#[derive(Debug, Clone, Default)]
pub struct KanbanContext {
    board: Board,
    drag: DragController,
}

impl KanbanContext {
    /// Create a context around an existing board
    pub fn new(board: Board) -> Self {
        Self {
            board,
            drag: DragController::new(),
        }
    }

    /// Build the board described by a configuration
    pub fn from_config(config: &BoardConfig) -> Result<Self> {
        Ok(Self::new(config.build_board()?))
    }

    /// The underlying board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The drag controller
    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Columns in display order
    pub fn list_columns(&self) -> &[Column] {
        self.board.columns()
    }

    /// Tasks of a column in display order
    pub fn list_tasks(&self, column_id: &ColumnId) -> Vec<&Task> {
        self.board.tasks_in_column(column_id)
    }

    /// The task being dragged, as it currently sits on the board.
    ///
    /// Used to render the floating preview; reflects any column change made
    /// by live reordering.
    pub fn currently_dragged_task(&self) -> Option<&Task> {
        self.drag
            .dragged_task_id()
            .and_then(|id| self.board.task(id))
    }

    // ------------------------------------------------------------------
    // CRUD
    // ------------------------------------------------------------------

    /// Append a new task to a column
    pub fn create_task(&mut self, column_id: &ColumnId) -> Result<Task> {
        self.board.add_task(column_id)
    }

    /// Delete a task.
    ///
    /// Deleting the task that is being dragged also ends the drag.
    pub fn delete_task(&mut self, id: &TaskId) -> Result<Task> {
        let task = self
            .board
            .delete_task(id)
            .ok_or_else(|| KanbanError::TaskNotFound { id: id.to_string() })?;

        if self.drag.dragged_task_id() == Some(id) {
            debug!(task = %id, "dragged task deleted, ending drag");
            self.drag.on_drag_end(&DragId::from(id), None);
        }
        Ok(task)
    }

    /// Replace a task's content
    pub fn rename_task(&mut self, id: &TaskId, content: impl Into<String>) -> Result<()> {
        if self.board.update_task_content(id, content) {
            Ok(())
        } else {
            Err(KanbanError::TaskNotFound { id: id.to_string() })
        }
    }

    /// Replace a column's title
    pub fn rename_column(&mut self, id: &ColumnId, title: impl Into<String>) -> Result<()> {
        self.board.rename_column(id, title)
    }

    // ------------------------------------------------------------------
    // Drag events
    // ------------------------------------------------------------------

    /// Feed one drag event to the controller
    pub fn handle(&mut self, event: &DragEvent) -> DragOutcome {
        self.drag.handle(&mut self.board, event)
    }

    /// Begin a drag
    pub fn drag_start(&mut self, active_id: &DragId, active_kind: DragKind) -> DragOutcome {
        self.drag.on_drag_start(&self.board, active_id, active_kind)
    }

    /// Hover the dragged element over a target (or nothing)
    pub fn drag_over(
        &mut self,
        active_id: &DragId,
        over_id: Option<&DragId>,
        over_kind: DragKind,
    ) -> DragOutcome {
        self.drag
            .on_drag_over(&mut self.board, active_id, over_id, over_kind)
    }

    /// Finish a drag
    pub fn drag_end(&mut self, active_id: &DragId, over_id: Option<&DragId>) -> DragOutcome {
        self.drag.on_drag_end(active_id, over_id)
    }
}
