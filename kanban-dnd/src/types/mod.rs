//! Core types for the kanban engine

mod column;
mod ids;
mod task;

// Re-export all types
pub use column::Column;
pub use ids::{ColumnId, DragId, TaskId};
pub use task::Task;
