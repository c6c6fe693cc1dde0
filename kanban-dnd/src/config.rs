//! Board configuration loaded with Figment.
//!
//! Sources are merged in precedence order (later sources override earlier
//! ones):
//! 1. Built-in defaults (the seed board)
//! 2. A configuration file (`kanban-dnd.toml`, `.yaml`, `.yml` or `.json`)
//! 3. Environment variables prefixed with `KANBAN_DND_`

use crate::board::Board;
use crate::defaults;
use crate::error::{KanbanError, Result};
use crate::types::{Column, Task, TaskId};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "KANBAN_DND_";

/// File stem searched for during discovery
pub const CONFIG_FILE_STEM: &str = "kanban-dnd";

const CONFIG_EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];

/// A column as written in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub id: String,
    pub title: String,
}

/// A task as written in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskConfig {
    /// Explicit id; a fresh one is generated when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub column: String,
    #[serde(default)]
    pub content: String,
}

/// Everything needed to build the starting board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub columns: Vec<ColumnConfig>,
    pub tasks: Vec<TaskConfig>,
    /// Seed the demo tasks when `tasks` is empty
    pub seed_demo_tasks: bool,
    /// Content given to newly created tasks
    pub default_content: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: defaults::default_columns()
                .into_iter()
                .map(|c| ColumnConfig {
                    id: c.id.to_string(),
                    title: c.title,
                })
                .collect(),
            tasks: Vec::new(),
            seed_demo_tasks: true,
            default_content: String::new(),
        }
    }
}

impl BoardConfig {
    /// Load configuration, discovering a config file in the current directory
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::extract(Self::figment(discover_config_file(&cwd).as_deref())?)
    }

    /// Load configuration from an explicit file (plus defaults and env)
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(KanbanError::config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        Self::extract(Self::figment(Some(path))?)
    }

    /// Build the figment with all sources in precedence order
    pub fn figment(file: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = file {
            debug!("Loading config file: {}", path.display());
            figment = match path.extension().and_then(|e| e.to_str()) {
                Some("toml") => figment.merge(Toml::file(path)),
                Some("yaml") | Some("yml") => figment.merge(Yaml::file(path)),
                Some("json") => figment.merge(Json::file(path)),
                _ => {
                    return Err(KanbanError::config(format!(
                        "unsupported config format: {}",
                        path.display()
                    )))
                }
            };
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: Self = figment
            .extract()
            .map_err(|e| KanbanError::config(e.to_string()))?;
        trace!(?config, "extracted board config");
        Ok(config)
    }

    /// Build and validate the board this configuration describes
    pub fn build_board(&self) -> Result<Board> {
        let columns: Vec<Column> = self
            .columns
            .iter()
            .map(|c| Column::new(c.id.as_str(), c.title.as_str()))
            .collect();

        let tasks: Vec<Task> = if self.tasks.is_empty() && self.seed_demo_tasks {
            defaults::demo_tasks()
                .into_iter()
                .filter(|t| columns.iter().any(|c| c.id == t.column_id))
                .collect()
        } else {
            self.tasks
                .iter()
                .map(|t| Task {
                    id: t
                        .id
                        .as_deref()
                        .map(TaskId::from)
                        .unwrap_or_else(TaskId::new),
                    column_id: t.column.as_str().into(),
                    content: t.content.clone(),
                })
                .collect()
        };

        debug!(
            columns = columns.len(),
            tasks = tasks.len(),
            "building board from config"
        );
        Ok(Board::with_tasks(columns, tasks)?.with_default_content(self.default_content.clone()))
    }
}

/// Find `kanban-dnd.{toml,yaml,yml,json}` in a directory
pub fn discover_config_file(dir: &Path) -> Option<PathBuf> {
    CONFIG_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{CONFIG_FILE_STEM}.{ext}")))
        .find(|path| path.is_file())
}
