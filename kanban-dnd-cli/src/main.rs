use std::process;

use clap::error::ErrorKind;
use kanban_dnd_cli::cli::{Cli, Commands};
use kanban_dnd_cli::commands;
use kanban_dnd_cli::exit_codes::{EXIT_ERROR, EXIT_SUCCESS};
use kanban_dnd_cli::logging::configure_logging;

fn main() {
    let cli = match Cli::try_parse_from_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{e}");
                process::exit(EXIT_SUCCESS);
            }
            _ => {
                eprint!("{e}");
                process::exit(EXIT_ERROR);
            }
        },
    };

    configure_logging(cli.verbose, cli.debug, cli.quiet);

    process::exit(run(cli));
}

fn run(cli: Cli) -> i32 {
    let result = commands::load_config(cli.config.as_deref()).and_then(|config| {
        match &cli.command {
            Commands::Show { format } => commands::run_show(&config, *format),
            Commands::Replay { script, format } => {
                commands::run_replay(&config, script, *format)
            }
        }
    });

    match result {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            EXIT_ERROR
        }
    }
}
