//! Command implementations. Each returns the text to print on stdout.

use crate::cli::OutputFormat;
use crate::render::{render_board, render_report};
use anyhow::{Context, Result};
use kanban_dnd::{Board, BoardConfig, KanbanContext, Script, StepResult};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Board state and step results after a replay
#[derive(Debug, Serialize)]
pub struct ReplayOutput<'a> {
    pub board: &'a Board,
    pub steps: &'a [StepResult],
}

/// Load the board configuration from an explicit file or by discovery
pub fn load_config(path: Option<&Path>) -> Result<BoardConfig> {
    let config = match path {
        Some(path) => BoardConfig::load_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => BoardConfig::load().context("failed to load configuration")?,
    };
    debug!(
        columns = config.columns.len(),
        tasks = config.tasks.len(),
        "loaded configuration"
    );
    Ok(config)
}

/// Print the configured board
pub fn run_show(config: &BoardConfig, format: OutputFormat) -> Result<String> {
    let ctx = KanbanContext::from_config(config).context("invalid board configuration")?;
    format_value(ctx.board(), format, render_board)
}

/// Replay a script file against the configured board
pub fn run_replay(config: &BoardConfig, script: &Path, format: OutputFormat) -> Result<String> {
    let mut ctx = KanbanContext::from_config(config).context("invalid board configuration")?;
    let script = Script::load(script)
        .with_context(|| format!("failed to read script {}", script.display()))?;

    let report = script.replay(&mut ctx);
    let output = ReplayOutput {
        board: ctx.board(),
        steps: &report.steps,
    };
    format_value(&output, format, |o| {
        format!("{}\n{}", render_report(&report), render_board(o.board))
    })
}

fn format_value<T: Serialize>(
    value: &T,
    format: OutputFormat,
    text: impl FnOnce(&T) -> String,
) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => text(value),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(value)?;
            json.push('\n');
            json
        }
        OutputFormat::Yaml => serde_yaml_ng::to_string(value)?,
    })
}
