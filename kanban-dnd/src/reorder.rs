//! Pure sequence functions used to compute new task orderings.
//!
//! Neither function touches the board; the drag controller composes them and
//! commits the result through [`Board::move_task`](crate::Board::move_task).

use crate::types::{ColumnId, Task};

/// Relocate the element at `from` so it occupies `to` in the result.
///
/// Every other element keeps its relative order. `from == to` is the
/// identity. An out-of-range index leaves the sequence unchanged.
pub fn move_element<T: Clone>(sequence: &[T], from: usize, to: usize) -> Vec<T> {
    let mut result = sequence.to_vec();
    if from == to || from >= result.len() || to >= result.len() {
        return result;
    }

    let element = result.remove(from);
    result.insert(to, element);
    result
}

/// Copy `sequence` with only the task at `task_index` moved to another column.
///
/// Order and every other field stay as they were. An out-of-range index
/// leaves the sequence unchanged.
pub fn with_column_reassigned(
    sequence: &[Task],
    task_index: usize,
    new_column_id: &ColumnId,
) -> Vec<Task> {
    let mut result = sequence.to_vec();
    if let Some(task) = result.get_mut(task_index) {
        task.column_id = new_column_id.clone();
    }
    result
}
