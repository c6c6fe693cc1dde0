//! Inbound drag events reported by the gesture provider

use crate::types::DragId;
use serde::{Deserialize, Serialize};

/// What kind of element a drag event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragKind {
    #[serde(alias = "Task")]
    Task,
    #[serde(alias = "Column")]
    Column,
    /// Anything the engine does not reorder
    #[default]
    #[serde(other)]
    Other,
}

/// One event of a drag gesture: start, any number of overs, end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DragEvent {
    DragStart {
        active_id: DragId,
        active_kind: DragKind,
    },
    /// Fired repeatedly while the pointer moves. `over_id` is `None` when
    /// the pointer is over no droppable target.
    DragOver {
        active_id: DragId,
        #[serde(default)]
        over_id: Option<DragId>,
        #[serde(default)]
        over_kind: DragKind,
    },
    DragEnd {
        active_id: DragId,
        #[serde(default)]
        over_id: Option<DragId>,
    },
}

impl DragEvent {
    /// Start dragging an element
    pub fn start(active_id: impl Into<DragId>, active_kind: DragKind) -> Self {
        Self::DragStart {
            active_id: active_id.into(),
            active_kind,
        }
    }

    /// Hover the dragged element over another one
    pub fn over(
        active_id: impl Into<DragId>,
        over_id: impl Into<DragId>,
        over_kind: DragKind,
    ) -> Self {
        Self::DragOver {
            active_id: active_id.into(),
            over_id: Some(over_id.into()),
            over_kind,
        }
    }

    /// Hover the dragged element over empty space
    pub fn over_nothing(active_id: impl Into<DragId>) -> Self {
        Self::DragOver {
            active_id: active_id.into(),
            over_id: None,
            over_kind: DragKind::Other,
        }
    }

    /// Release the dragged element
    pub fn end(active_id: impl Into<DragId>, over_id: Option<DragId>) -> Self {
        Self::DragEnd {
            active_id: active_id.into(),
            over_id,
        }
    }
}
