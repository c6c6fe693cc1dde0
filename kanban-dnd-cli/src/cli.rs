use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

#[derive(Parser, Debug)]
#[command(name = "kanban-dnd")]
#[command(version)]
#[command(about = "Inspect kanban boards and replay drag gestures")]
#[command(long_about = "
kanban-dnd loads a kanban board from configuration and replays recorded
drag gestures against it, printing the resulting column orderings.

Configuration is read from defaults, then kanban-dnd.{toml,yaml,yml,json}
in the current directory (or --config PATH), then KANBAN_DND_* environment
variables.

Example usage:
  kanban-dnd show                          # Print the seed board
  kanban-dnd --config board.toml show      # Print a configured board
  kanban-dnd replay gesture.yaml           # Replay a gesture script
  kanban-dnd replay gesture.json --format json
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Board configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the configured board
    Show {
        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Replay a gesture script against the configured board
    #[command(long_about = "
Replay a YAML or JSON gesture script against the configured board.

Each step is one of create, delete, rename, drag_start, drag_over or
drag_end. Failed steps are reported, not fatal.

Example script:
  - op: drag_start
    active: \"1\"
  - op: drag_over
    active: \"1\"
    over: \"3\"
    kind: task
  - op: drag_end
    active: \"1\"
    over: \"3\"
")]
    Replay {
        /// Script file (.yaml, .yml or .json)
        script: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

impl Cli {
    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_help_works() {
        let error = Cli::try_parse_from_args(["kanban-dnd", "--help"]).unwrap_err();
        assert_eq!(error.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from_args(["kanban-dnd"]).is_err());
    }

    #[test]
    fn test_cli_show_defaults_to_text() {
        let cli = Cli::try_parse_from_args(["kanban-dnd", "show"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Show {
                format: OutputFormat::Text
            }
        );
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_replay_with_global_flags() {
        let cli = Cli::try_parse_from_args([
            "kanban-dnd",
            "replay",
            "gesture.yaml",
            "--format",
            "json",
            "--config",
            "board.toml",
            "--debug",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Commands::Replay {
                script: PathBuf::from("gesture.yaml"),
                format: OutputFormat::Json
            }
        );
        assert_eq!(cli.config, Some(PathBuf::from("board.toml")));
        assert!(cli.debug);
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from_args(["kanban-dnd", "show", "--format", "xml"]).is_err());
    }
}
