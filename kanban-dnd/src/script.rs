//! Gesture scripts: recorded sequences of board actions and drag events.
//!
//! A script is a YAML or JSON list of steps. Replaying it against a
//! [`KanbanContext`] applies each step in order and records what happened,
//! which makes whole drag gestures reproducible outside a UI.
//!
//! ```yaml
//! - op: drag_start
//!   active: "1"
//! - op: drag_over
//!   active: "1"
//!   over: "3"
//!   kind: task
//! - op: drag_end
//!   active: "1"
//!   over: "3"
//! ```

use crate::context::KanbanContext;
use crate::drag::{DragEvent, DragKind, DragOutcome};
use crate::error::Result;
use crate::types::{ColumnId, DragId, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

fn task_kind() -> DragKind {
    DragKind::Task
}

/// One scripted action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Create {
        column: ColumnId,
    },
    Delete {
        id: TaskId,
    },
    Rename {
        id: TaskId,
        content: String,
    },
    DragStart {
        active: DragId,
        #[serde(default = "task_kind")]
        kind: DragKind,
    },
    DragOver {
        active: DragId,
        #[serde(default)]
        over: Option<DragId>,
        #[serde(default = "task_kind")]
        kind: DragKind,
    },
    DragEnd {
        active: DragId,
        #[serde(default)]
        over: Option<DragId>,
    },
}

impl Step {
    /// The drag event this step stands for, if it is a drag step
    pub fn to_event(&self) -> Option<DragEvent> {
        match self {
            Self::DragStart { active, kind } => Some(DragEvent::DragStart {
                active_id: active.clone(),
                active_kind: *kind,
            }),
            Self::DragOver { active, over, kind } => Some(DragEvent::DragOver {
                active_id: active.clone(),
                over_id: over.clone(),
                over_kind: *kind,
            }),
            Self::DragEnd { active, over } => Some(DragEvent::DragEnd {
                active_id: active.clone(),
                over_id: over.clone(),
            }),
            Self::Create { .. } | Self::Delete { .. } | Self::Rename { .. } => None,
        }
    }
}

/// Result of replaying one step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepResult {
    Created { task: Task },
    Deleted { task: Task },
    Renamed { id: TaskId },
    Drag { outcome: DragOutcome },
    Failed { error: String },
}

/// Per-step results of a replay, in script order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    pub steps: Vec<StepResult>,
}

impl ReplayReport {
    /// Number of steps that failed
    pub fn failures(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, StepResult::Failed { .. }))
            .count()
    }

    /// Number of drag steps that wrote the board
    pub fn mutations(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, StepResult::Drag { outcome } if outcome.is_mutation()))
            .count()
    }
}

/// An ordered list of steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Script {
    pub steps: Vec<Step>,
}

impl Script {
    /// Create a script from steps
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Parse a YAML script
    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(source)?)
    }

    /// Parse a JSON script
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Read a script file; `.json` is parsed as JSON, anything else as YAML
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&source),
            _ => Self::from_yaml(&source),
        }
    }

    /// Apply every step to the context.
    ///
    /// CRUD failures are recorded and replay continues, the same way a UI
    /// keeps running after a rejected action.
    pub fn replay(&self, ctx: &mut KanbanContext) -> ReplayReport {
        let mut report = ReplayReport::default();

        for (index, step) in self.steps.iter().enumerate() {
            let result = match step {
                Step::Create { column } => match ctx.create_task(column) {
                    Ok(task) => StepResult::Created { task },
                    Err(e) => StepResult::Failed { error: e.to_string() },
                },
                Step::Delete { id } => match ctx.delete_task(id) {
                    Ok(task) => StepResult::Deleted { task },
                    Err(e) => StepResult::Failed { error: e.to_string() },
                },
                Step::Rename { id, content } => match ctx.rename_task(id, content.as_str()) {
                    Ok(()) => StepResult::Renamed { id: id.clone() },
                    Err(e) => StepResult::Failed { error: e.to_string() },
                },
                Step::DragStart { .. } | Step::DragOver { .. } | Step::DragEnd { .. } => {
                    StepResult::Drag {
                        outcome: step
                            .to_event()
                            .map_or(DragOutcome::Ignored, |event| ctx.handle(&event)),
                    }
                }
            };
            debug!(step = index, ?result, "replayed step");
            report.steps.push(result);
        }

        info!(
            steps = report.steps.len(),
            failures = report.failures(),
            mutations = report.mutations(),
            "replay finished"
        );
        report
    }
}
