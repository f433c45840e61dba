//! oscrec binary entry point

mod commands;

use std::process;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use oscrec::cli::{Cli, Commands};
use oscrec::{logging, Config};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => process::exit(report_usage(e)),
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    };

    if let Err(e) = logging::init(&config.logging.level) {
        eprintln!("Warning: {:#}", e);
    }

    let result = match cli.command {
        Commands::Record(args) => commands::record::handle(args, &config),
        Commands::Play(args) => commands::play::handle(args),
        Commands::Config(command) => commands::config::handle(command, &config),
        Commands::Completions { shell } => commands::completions::handle(shell),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Print a parse outcome and pick the exit status.
///
/// Help and version go to stdout with status 0 (including a bare `oscrec`);
/// every argument error goes to stderr with status 1.
fn report_usage(error: clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = error.print();
            0
        }
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            let _ = Cli::command().print_help();
            println!();
            0
        }
        _ => {
            let _ = error.print();
            1
        }
    }
}
