//! Column type

use super::ids::ColumnId;
use serde::{Deserialize, Serialize};

/// A named, ordered bucket that groups tasks.
///
/// Column order on the board is display order (left to right) and is kept
/// separately from task order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
}

impl Column {
    /// Create a new column
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}
