//! Drag session state

use crate::types::TaskId;

/// The ephemeral record of an in-progress drag.
///
/// `None` is the Idle state. A session only lives between a drag start and
/// the matching drag end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    dragged_task_id: Option<TaskId>,
}

impl DragSession {
    /// An idle session
    pub fn idle() -> Self {
        Self::default()
    }

    /// The task being dragged, if any
    pub fn dragged_task_id(&self) -> Option<&TaskId> {
        self.dragged_task_id.as_ref()
    }

    /// Whether a task drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.dragged_task_id.is_some()
    }

    /// Enter DraggingTask. Returns false if a drag was already in progress.
    pub(crate) fn begin(&mut self, task_id: TaskId) -> bool {
        if self.dragged_task_id.is_some() {
            return false;
        }
        self.dragged_task_id = Some(task_id);
        true
    }

    /// Return to Idle, yielding the task that was being dragged
    pub(crate) fn finish(&mut self) -> Option<TaskId> {
        self.dragged_task_id.take()
    }
}
