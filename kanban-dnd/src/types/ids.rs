//! Identifier newtypes

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing string identifier
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the inner string value
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifies a task; unique across the whole board
    TaskId
);

define_id!(
    /// Identifies a column; unique within the board
    ColumnId
);

define_id!(
    /// Identifier carried by a drag event.
    ///
    /// The gesture provider reports the element under the pointer without
    /// knowing which collection it belongs to, so this stays untyped until
    /// the controller resolves it against the board.
    DragId
);

impl TaskId {
    /// Generate a fresh ULID-based task id
    pub fn new() -> Self {
        Self(Ulid::new().to_string())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl DragId {
    /// Interpret this id as a task id
    pub fn to_task_id(&self) -> TaskId {
        TaskId::from_string(self.0.as_str())
    }

    /// Interpret this id as a column id
    pub fn to_column_id(&self) -> ColumnId {
        ColumnId::from_string(self.0.as_str())
    }

    /// Check whether this id refers to the given task
    pub fn is_task(&self, id: &TaskId) -> bool {
        self.0 == id.as_str()
    }
}

impl From<&TaskId> for DragId {
    fn from(id: &TaskId) -> Self {
        Self(id.as_str().to_string())
    }
}

impl From<&ColumnId> for DragId {
    fn from(id: &ColumnId) -> Self {
        Self(id.as_str().to_string())
    }
}
