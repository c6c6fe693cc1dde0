//! In-memory kanban board with a drag-session reconciliation engine
//!
//! This crate keeps a board of columns and tasks and reorders it live while
//! the user drags a task around. An external gesture provider reports drag
//! start, a stream of drag over events and drag end; the engine turns each
//! hover into a new task ordering and commits it immediately.
//!
//! ## Overview
//!
//! - **One flat task list** - A column's task order is the relative order of
//!   its tasks within a single flat sequence
//! - **Live-preview reordering** - Every hover writes the board; drag end only
//!   closes the session
//! - **One commit gateway** - `Board::move_task` checks that each write is a
//!   permutation with no dangling column reference
//! - **Never stalls a gesture** - Malformed drag events are ignored, not
//!   reported
//!
//! ## Basic Usage
//!
//! ```rust
//! use kanban_dnd::{DragEvent, DragKind, KanbanContext};
//!
//! // The seed board: todo = 1, 2, 3; doing = 4, 5, 6; done = 7, 8
//! let mut ctx = KanbanContext::default();
//!
//! ctx.handle(&DragEvent::start("1", DragKind::Task));
//! ctx.handle(&DragEvent::over("1", "3", DragKind::Task));
//! ctx.handle(&DragEvent::end("1", Some("3".into())));
//!
//! let todo: Vec<&str> = ctx
//!     .list_tasks(&"todo".into())
//!     .iter()
//!     .map(|t| t.id.as_str())
//!     .collect();
//! assert_eq!(todo, ["2", "3", "1"]);
//! ```
//!
//! ## Modules
//!
//! ```text
//! board     Board model and the move_task commit gateway
//! reorder   Pure sequence functions (move_element, with_column_reassigned)
//! drag      Drag events, session state and the controller
//! context   KanbanContext: queries, CRUD and event dispatch
//! config    Figment-based board configuration
//! script    Replayable gesture scripts
//! ```

pub mod board;
pub mod config;
mod context;
pub mod defaults;
pub mod drag;
mod error;
pub mod reorder;
pub mod script;
pub mod types;

pub use board::Board;
pub use config::BoardConfig;
pub use context::KanbanContext;
pub use drag::{DragController, DragEvent, DragKind, DragOutcome, DragSession};
pub use error::{KanbanError, Result};
pub use script::{ReplayReport, Script, Step, StepResult};

// Re-export commonly used types
pub use types::{Column, ColumnId, DragId, Task, TaskId};
