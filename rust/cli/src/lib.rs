//! # Elemental CLI Library
//!
//! Command-line interface for the elemental poker engine: play hands against
//! AI opponents, run simulations that write hand histories, and inspect the
//! results.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments, installs logging and dispatches to a subcommand.
//! Output streams are injected so every command can be driven from tests.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["elemental", "play", "--vs", "ai", "--hands", "10"];
//! let code = elemental_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play hands against AI opponents or watch an all-AI table
//! - `sim`: Run AI-only hands and write JSONL hand records
//! - `deal`: Deal one hand and show every reveal and effective value
//! - `stats`: Aggregate JSONL hand histories and check chip conservation
//! - `elements`: Print the element bonus table
//! - `cfg`: Display the resolved configuration with value sources

use clap::Parser;
use std::io::Write;

#[macro_use]
mod macros;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, ElementalCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_elements_command, handle_play_command,
    handle_sim_command, handle_stats_command,
};

pub use cli::Vs;
pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "deal", "stats", "elements", "cfg"];

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` when a run was cut short
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["elemental", "deal", "--seed", "42"];
/// let code = elemental_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ElementalCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    logging::init_logging(cli.verbose);

    let result = match cli.cmd {
        Commands::Play { vs, hands, seed } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(vs, hands, seed, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            hands,
            output,
            seed,
        } => handle_sim_command(hands, output, seed, out, err),
        Commands::Deal { seed } => handle_deal_command(seed, out, err),
        Commands::Stats { input } => handle_stats_command(input, out, err),
        Commands::Elements => handle_elements_command(out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout with success
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        if write!(out, "{}", e).is_err() {
            return exit_code::ERROR;
        }
        return exit_code::SUCCESS;
    }

    write_or_exit!(err, "{}", e);
    write_or_exit!(err, "Elemental Poker CLI");
    write_or_exit!(err, "Usage: elemental <command> [options]\n");
    write_or_exit!(err, "Commands:");
    for c in COMMANDS {
        write_or_exit!(err, "  {}", c);
    }
    write_or_exit!(err, "\nFor full help, run: elemental --help");
    exit_code::ERROR
}
