//! # felt CLI Library
//!
//! This library provides the command-line interface for the felt blackjack
//! engine. It exposes subcommands for playing, simulating, analyzing, and
//! inspecting table sessions.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["felt", "sim", "--rounds", "10", "--seed", "42"];
//! let code = felt_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play interactive rounds at the table, optionally with AI seats
//! - `sim`: Run automated simulations and generate round histories
//! - `stats`: Aggregate statistics from JSONL round history files
//! - `leaderboard`: Show or clear the published leaderboard
//! - `achievements`: Show or reset unlocked achievements
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod ui;

use cli::{Commands, FeltCli};
use commands::{
    handle_achievements_command, handle_cfg_command, handle_leaderboard_command,
    handle_play_command, handle_sim_command, handle_stats_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand
/// handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "stats", "leaderboard", "achievements", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = FeltCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err).is_err()
                        || writeln!(err, "felt blackjack CLI").is_err()
                        || writeln!(err, "Usage: felt <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    if writeln!(err, "\nFor full help, run: felt --help").is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => match cli.cmd {
            Commands::Play {
                rounds,
                ai,
                seed,
                name,
            } => {
                // Use stdin for real input (supports both TTY and piped stdin)
                let stdin = std::io::stdin();
                let mut stdin_lock = stdin.lock();
                match handle_play_command(rounds, ai, seed, name, out, err, &mut stdin_lock) {
                    Ok(()) => exit_code::SUCCESS,
                    Err(e) => {
                        if writeln!(err, "Error: {}", e).is_err() {
                            return exit_code::ERROR;
                        }
                        exit_code::ERROR
                    }
                }
            }
            Commands::Sim {
                rounds,
                seats,
                bet,
                seed,
                output,
            } => match handle_sim_command(rounds, seats, bet, seed, output, out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            },
            Commands::Stats { input } => match handle_stats_command(input, out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            },
            Commands::Leaderboard { clear } => match handle_leaderboard_command(clear, out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            },
            Commands::Achievements { reset } => {
                match handle_achievements_command(reset, out, err) {
                    Ok(()) => exit_code::SUCCESS,
                    Err(e) => {
                        if writeln!(err, "Error: {}", e).is_err() {
                            return exit_code::ERROR;
                        }
                        exit_code::ERROR
                    }
                }
            }
            Commands::Cfg => match handle_cfg_command(out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cfg_command_dispatch() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_cfg_command(&mut out, &mut err);
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("starting_bankroll"));
    }

    #[test]
    fn test_stats_command_dispatch_missing_file() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_stats_command("nonexistent.jsonl".to_string(), &mut out, &mut err);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_unknown_subcommand_exits_2() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(vec!["felt", "shuffleboard"], &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);

        let errors = String::from_utf8(err).unwrap();
        assert!(errors.contains("Commands:"), "got: {}", errors);
    }

    #[test]
    fn test_run_help_exits_0_on_stdout() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(vec!["felt", "--help"], &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("play"), "got: {}", output);
        assert!(output.contains("sim"), "got: {}", output);
    }

    #[test]
    fn test_run_sim_dispatch() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(
            vec!["felt", "sim", "--rounds", "2", "--seed", "42"],
            &mut out,
            &mut err,
        );
        assert_eq!(code, exit_code::SUCCESS);

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("rounds=2"), "got: {}", output);
    }

    #[test]
    fn test_run_sim_invalid_bet_exits_2() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(
            vec!["felt", "sim", "--rounds", "1", "--bet", "0"],
            &mut out,
            &mut err,
        );
        assert_eq!(code, exit_code::ERROR);
    }
}
