//! Drag-and-drop reconciliation: events, session state and the controller

mod controller;
mod event;
mod session;

pub use controller::{DragController, DragOutcome};
pub use event::{DragEvent, DragKind};
pub use session::DragSession;
