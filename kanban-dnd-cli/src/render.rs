//! Plain-text rendering of boards and replay reports

use kanban_dnd::defaults::display_content;
use kanban_dnd::{Board, DragOutcome, ReplayReport, StepResult};
use std::fmt::Write;

/// Render a board as one block per column: a `Title (count)` header, then
/// one line per task in column order.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for (i, column) in board.columns().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let tasks = board.tasks_in_column(&column.id);
        let _ = writeln!(out, "{} ({})", column.title, tasks.len());
        for task in tasks {
            let _ = writeln!(out, "  [{}] {}", task.id, display_content(task));
        }
    }
    out
}

/// Render replay results, one numbered line per step
pub fn render_report(report: &ReplayReport) -> String {
    let mut out = String::new();
    for (i, step) in report.steps.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", i + 1, describe_step(step));
    }
    let _ = writeln!(
        out,
        "{} steps, {} board writes, {} failed",
        report.steps.len(),
        report.mutations(),
        report.failures()
    );
    out
}

fn describe_step(step: &StepResult) -> String {
    match step {
        StepResult::Created { task } => format!("created {} in {}", task.id, task.column_id),
        StepResult::Deleted { task } => format!("deleted {}", task.id),
        StepResult::Renamed { id } => format!("renamed {id}"),
        StepResult::Drag { outcome } => describe_outcome(outcome),
        StepResult::Failed { error } => format!("failed: {error}"),
    }
}

fn describe_outcome(outcome: &DragOutcome) -> String {
    match outcome {
        DragOutcome::Ignored => "ignored".to_string(),
        DragOutcome::Started { task_id } => format!("drag started on {task_id}"),
        DragOutcome::Reordered {
            task_id,
            from,
            to,
            column_id,
        } => format!("moved {task_id} from {from} to {to} in {column_id}"),
        DragOutcome::Reassigned { task_id, column_id } => {
            format!("moved {task_id} into {column_id}")
        }
        DragOutcome::Unchanged => "unchanged".to_string(),
        DragOutcome::Ended { task_id } => format!("drag ended on {task_id}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanban_dnd::{Column, KanbanContext, Script, Task};

    #[test]
    fn test_render_seed_board() {
        let text = render_board(&Board::default());
        assert!(text.starts_with("Todo (3)\n  [1] Create initial project plan\n"));
        assert!(text.contains("In Progress (3)\n"));
        assert!(text.contains("Done (2)\n  [7] Organize project repository\n"));
    }

    #[test]
    fn test_render_empty_content_and_empty_column() {
        let board = Board::with_tasks(
            vec![Column::new("a", "Inbox"), Column::new("b", "Later")],
            vec![Task::with_id("x", "a")],
        )
        .unwrap();

        assert_eq!(
            render_board(&board),
            "Inbox (1)\n  [x] Untitled Task\n\nLater (0)\n"
        );
    }

    #[test]
    fn test_render_report() {
        let script = Script::from_yaml(
            r#"
- op: drag_start
  active: "1"
- op: drag_over
  active: "1"
  over: "3"
  kind: task
- op: delete
  id: "404"
"#,
        )
        .unwrap();
        let report = script.replay(&mut KanbanContext::default());

        let text = render_report(&report);
        assert!(text.contains("  1. drag started on 1\n"));
        assert!(text.contains("  2. moved 1 from 0 to 2 in todo\n"));
        assert!(text.contains("  3. failed: "));
        assert!(text.ends_with("3 steps, 1 board writes, 1 failed\n"));
    }
}
