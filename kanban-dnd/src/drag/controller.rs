//! Drag session controller.
//!
//! Consumes the drag events of one gesture and reorders the board live: each
//! hover computes a new flat task sequence with the functions in
//! [`crate::reorder`] and commits it immediately through
//! [`Board::move_task`]. Drag end only clears the session; whatever the last
//! hover produced is the final state.
//!
//! Events that do not make sense (unknown ids, wrong state, a different
//! active element) are ignored rather than reported, so a pointer-tracking
//! loop never stops mid-gesture.

use super::event::{DragEvent, DragKind};
use super::session::DragSession;
use crate::board::Board;
use crate::reorder::{move_element, with_column_reassigned};
use crate::types::{ColumnId, DragId, Task, TaskId};
use serde::Serialize;
use tracing::{debug, trace, warn};

/// What a drag handler did with an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DragOutcome {
    /// The event did not apply in the current state
    Ignored,
    /// A task drag began
    Started { task_id: TaskId },
    /// The dragged task moved to another index, possibly into another column
    Reordered {
        task_id: TaskId,
        from: usize,
        to: usize,
        column_id: ColumnId,
    },
    /// The dragged task joined a column without changing its index
    Reassigned { task_id: TaskId, column_id: ColumnId },
    /// A valid hover that required no change
    Unchanged,
    /// The drag finished
    Ended { task_id: TaskId },
}

impl DragOutcome {
    /// Whether the board was written
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Reordered { .. } | Self::Reassigned { .. })
    }
}

/// State machine driving live reordering during a task drag
#[derive(Debug, Clone, Default)]
pub struct DragController {
    session: DragSession,
}

impl DragController {
    /// Create an idle controller
    pub fn new() -> Self {
        Self::default()
    }

    /// The task being dragged, if any
    pub fn dragged_task_id(&self) -> Option<&TaskId> {
        self.session.dragged_task_id()
    }

    /// Whether a task drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    /// Dispatch one event
    pub fn handle(&mut self, board: &mut Board, event: &DragEvent) -> DragOutcome {
        match event {
            DragEvent::DragStart {
                active_id,
                active_kind,
            } => self.on_drag_start(board, active_id, *active_kind),
            DragEvent::DragOver {
                active_id,
                over_id,
                over_kind,
            } => self.on_drag_over(board, active_id, over_id.as_ref(), *over_kind),
            DragEvent::DragEnd { active_id, over_id } => {
                self.on_drag_end(active_id, over_id.as_ref())
            }
        }
    }

    /// Begin dragging. Only tasks present on the board start a session.
    pub fn on_drag_start(
        &mut self,
        board: &Board,
        active_id: &DragId,
        active_kind: DragKind,
    ) -> DragOutcome {
        if active_kind != DragKind::Task {
            trace!(active = %active_id, ?active_kind, "ignoring drag start of non-task");
            return DragOutcome::Ignored;
        }

        let task_id = active_id.to_task_id();
        if board.task(&task_id).is_none() {
            debug!(active = %active_id, "ignoring drag start of unknown task");
            return DragOutcome::Ignored;
        }

        if !self.session.begin(task_id.clone()) {
            debug!(active = %active_id, "drag start while already dragging");
            return DragOutcome::Ignored;
        }

        debug!(task = %task_id, "drag started");
        DragOutcome::Started { task_id }
    }

    /// Apply a live-preview reorder for the element under the pointer.
    pub fn on_drag_over(
        &mut self,
        board: &mut Board,
        active_id: &DragId,
        over_id: Option<&DragId>,
        over_kind: DragKind,
    ) -> DragOutcome {
        let Some(dragged) = self.session.dragged_task_id() else {
            trace!(active = %active_id, "ignoring drag over while idle");
            return DragOutcome::Ignored;
        };
        if !active_id.is_task(dragged) {
            debug!(
                active = %active_id,
                dragged = %dragged,
                "ignoring drag over for another element"
            );
            return DragOutcome::Ignored;
        }
        let Some(over_id) = over_id else {
            return DragOutcome::Ignored;
        };
        // Hovering over itself must not move anything, or a stationary
        // pointer would oscillate.
        if over_id.is_task(dragged) {
            return DragOutcome::Unchanged;
        }
        let Some(active_index) = board.task_index(dragged) else {
            debug!(task = %dragged, "dragged task is no longer on the board");
            return DragOutcome::Ignored;
        };
        let dragged = dragged.clone();

        if over_kind == DragKind::Task && board.task_index(&over_id.to_task_id()).is_some() {
            return task_over_task(board, dragged, active_index, over_id);
        }
        let column_id = over_id.to_column_id();
        if over_kind == DragKind::Column || board.has_column(&column_id) {
            return task_over_column(board, dragged, active_index, column_id);
        }

        trace!(over = %over_id, ?over_kind, "ignoring drag over unsupported target");
        DragOutcome::Ignored
    }

    /// Finish the drag. The board is left as the last hover made it.
    pub fn on_drag_end(&mut self, active_id: &DragId, over_id: Option<&DragId>) -> DragOutcome {
        match self.session.finish() {
            Some(task_id) => {
                debug!(
                    task = %task_id,
                    active = %active_id,
                    over = over_id.map(DragId::as_str).unwrap_or("<none>"),
                    "drag ended"
                );
                DragOutcome::Ended { task_id }
            }
            None => {
                trace!(active = %active_id, "ignoring drag end while idle");
                DragOutcome::Ignored
            }
        }
    }
}

fn task_over_task(
    board: &mut Board,
    dragged: TaskId,
    active_index: usize,
    over_id: &DragId,
) -> DragOutcome {
    let Some(over_index) = board.task_index(&over_id.to_task_id()) else {
        debug!(over = %over_id, "ignoring drag over unknown task");
        return DragOutcome::Ignored;
    };

    let tasks = board.tasks();
    let over_column = tasks[over_index].column_id.clone();
    let next = if tasks[active_index].column_id != over_column {
        let reassigned = with_column_reassigned(tasks, active_index, &over_column);
        move_element(&reassigned, active_index, over_index)
    } else {
        move_element(tasks, active_index, over_index)
    };

    if !commit(board, next) {
        return DragOutcome::Ignored;
    }

    debug!(
        task = %dragged,
        from = active_index,
        to = over_index,
        column = %over_column,
        "reordered"
    );
    DragOutcome::Reordered {
        task_id: dragged,
        from: active_index,
        to: over_index,
        column_id: over_column,
    }
}

// The task keeps its flat index, so it lands wherever that index falls in
// the target column rather than at the end.
fn task_over_column(
    board: &mut Board,
    dragged: TaskId,
    active_index: usize,
    column_id: ColumnId,
) -> DragOutcome {
    if !board.has_column(&column_id) {
        debug!(column = %column_id, "ignoring drag over unknown column");
        return DragOutcome::Ignored;
    }
    if board.tasks()[active_index].column_id == column_id {
        return DragOutcome::Unchanged;
    }

    let next = with_column_reassigned(board.tasks(), active_index, &column_id);
    if !commit(board, next) {
        return DragOutcome::Ignored;
    }

    debug!(task = %dragged, column = %column_id, "reassigned column");
    DragOutcome::Reassigned {
        task_id: dragged,
        column_id,
    }
}

// A rejection here means a reorder broke the permutation or column invariant,
// which valid hovers never do.
fn commit(board: &mut Board, next: Vec<Task>) -> bool {
    match board.move_task(next) {
        Ok(()) => true,
        Err(error) => {
            warn!(%error, "rejected live reorder");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(board: &Board, column: &str) -> Vec<String> {
        board
            .tasks_in_column(&column.into())
            .iter()
            .map(|t| t.id.to_string())
            .collect()
    }

    fn dragging(id: &str) -> (Board, DragController) {
        let board = Board::default();
        let mut controller = DragController::new();
        controller.on_drag_start(&board, &id.into(), DragKind::Task);
        (board, controller)
    }

    #[test]
    fn test_start_only_for_tasks() {
        let board = Board::default();
        let mut controller = DragController::new();

        assert_eq!(
            controller.on_drag_start(&board, &"todo".into(), DragKind::Column),
            DragOutcome::Ignored
        );
        assert!(!controller.is_dragging());

        assert_eq!(
            controller.on_drag_start(&board, &"1".into(), DragKind::Task),
            DragOutcome::Started { task_id: "1".into() }
        );
        assert_eq!(
            controller.on_drag_start(&board, &"2".into(), DragKind::Task),
            DragOutcome::Ignored
        );
        assert_eq!(controller.dragged_task_id(), Some(&TaskId::from("1")));
    }

    #[test]
    fn test_start_unknown_task_ignored() {
        let board = Board::default();
        let mut controller = DragController::new();
        assert_eq!(
            controller.on_drag_start(&board, &"99".into(), DragKind::Task),
            DragOutcome::Ignored
        );
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_over_while_idle_ignored() {
        let mut board = Board::default();
        let before = board.clone();
        let mut controller = DragController::new();
        let outcome = controller.on_drag_over(
            &mut board,
            &"1".into(),
            Some(&"3".into()),
            DragKind::Task,
        );
        assert_eq!(outcome, DragOutcome::Ignored);
        assert_eq!(board, before);
    }

    #[test]
    fn test_same_column_reorder() {
        let (mut board, mut controller) = dragging("1");
        let outcome = controller.on_drag_over(
            &mut board,
            &"1".into(),
            Some(&"3".into()),
            DragKind::Task,
        );
        assert!(outcome.is_mutation());
        assert_eq!(order(&board, "todo"), ["2", "3", "1"]);
    }

    #[test]
    fn test_cross_column_task_over_task() {
        let (mut board, mut controller) = dragging("1");
        let outcome = controller.on_drag_over(
            &mut board,
            &"5".into(),
            Some(&"5".into()),
            DragKind::Task,
        );
        assert_eq!(outcome, DragOutcome::Ignored);

        let outcome = controller.on_drag_over(
            &mut board,
            &"1".into(),
            Some(&"5".into()),
            DragKind::Task,
        );
        assert_eq!(
            outcome,
            DragOutcome::Reordered {
                task_id: "1".into(),
                from: 0,
                to: 4,
                column_id: "doing".into(),
            }
        );
        assert_eq!(order(&board, "todo"), ["2", "3"]);
        assert_eq!(order(&board, "doing"), ["4", "5", "1", "6"]);
    }

    #[test]
    fn test_task_over_column_keeps_index() {
        let (mut board, mut controller) = dragging("4");
        let outcome = controller.on_drag_over(
            &mut board,
            &"4".into(),
            Some(&"done".into()),
            DragKind::Column,
        );
        assert_eq!(
            outcome,
            DragOutcome::Reassigned {
                task_id: "4".into(),
                column_id: "done".into(),
            }
        );
        assert_eq!(board.task_index(&"4".into()), Some(3));
        assert_eq!(order(&board, "done"), ["4", "7", "8"]);
    }

    #[test]
    fn test_column_id_with_other_kind_counts_as_column() {
        let (mut board, mut controller) = dragging("4");
        let outcome = controller.on_drag_over(
            &mut board,
            &"4".into(),
            Some(&"todo".into()),
            DragKind::Other,
        );
        assert!(matches!(outcome, DragOutcome::Reassigned { .. }));
        assert_eq!(order(&board, "todo"), ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_column_id_with_task_kind_counts_as_column() {
        let (mut board, mut controller) = dragging("2");
        let outcome =
            controller.on_drag_over(&mut board, &"2".into(), Some(&"done".into()), DragKind::Task);
        assert!(matches!(outcome, DragOutcome::Reassigned { .. }));
        assert_eq!(order(&board, "done"), ["2", "7", "8"]);
    }

    #[test]
    fn test_commit_rejects_broken_sequence() {
        let mut board = Board::default();
        let before = board.clone();
        let mut next = board.tasks().to_vec();
        next[0].column_id = "archive".into();

        assert!(!commit(&mut board, next));
        assert_eq!(board, before);
    }

    #[test]
    fn test_over_own_column_unchanged() {
        let (mut board, mut controller) = dragging("4");
        let before = board.clone();
        let outcome = controller.on_drag_over(
            &mut board,
            &"4".into(),
            Some(&"doing".into()),
            DragKind::Column,
        );
        assert_eq!(outcome, DragOutcome::Unchanged);
        assert_eq!(board, before);
    }

    #[test]
    fn test_unknown_targets_ignored() {
        let (mut board, mut controller) = dragging("1");
        let before = board.clone();

        for (over, kind) in [
            ("99", DragKind::Task),
            ("archive", DragKind::Column),
            ("somewhere", DragKind::Other),
        ] {
            let outcome = controller.on_drag_over(
                &mut board,
                &"1".into(),
                Some(&over.into()),
                kind,
            );
            assert_eq!(outcome, DragOutcome::Ignored, "hovering {over}");
        }
        assert_eq!(board, before);
        assert!(controller.is_dragging());
    }

    #[test]
    fn test_self_hover_is_idempotent() {
        let (mut board, mut controller) = dragging("2");
        let before = board.clone();
        for _ in 0..3 {
            let outcome = controller.on_drag_over(
                &mut board,
                &"2".into(),
                Some(&"2".into()),
                DragKind::Task,
            );
            assert_eq!(outcome, DragOutcome::Unchanged);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_end_clears_session_without_rollback() {
        let (mut board, mut controller) = dragging("1");
        controller.on_drag_over(&mut board, &"1".into(), Some(&"3".into()), DragKind::Task);
        let after_over = board.clone();

        let outcome = controller.on_drag_end(&"1".into(), None);
        assert_eq!(outcome, DragOutcome::Ended { task_id: "1".into() });
        assert!(!controller.is_dragging());
        assert_eq!(board, after_over);

        assert_eq!(controller.on_drag_end(&"1".into(), None), DragOutcome::Ignored);
    }

    #[test]
    fn test_handle_dispatches_events() {
        let mut board = Board::default();
        let mut controller = DragController::new();

        let events = [
            DragEvent::start("3", DragKind::Task),
            DragEvent::over("3", "1", DragKind::Task),
            DragEvent::over_nothing("3"),
            DragEvent::end("3", None),
        ];
        let outcomes: Vec<DragOutcome> = events
            .iter()
            .map(|event| controller.handle(&mut board, event))
            .collect();

        assert!(matches!(outcomes[0], DragOutcome::Started { .. }));
        assert!(outcomes[1].is_mutation());
        assert_eq!(outcomes[2], DragOutcome::Ignored);
        assert!(matches!(outcomes[3], DragOutcome::Ended { .. }));
        assert_eq!(order(&board, "todo"), ["3", "1", "2"]);
    }
}
