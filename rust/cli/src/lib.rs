//! # Grand Prix CLI Library
//!
//! Interactive, line-command driven controller for running a tournament:
//! creating it through a guided wizard, registering players, pairing rounds,
//! entering results and reporting standings. Pairing and scoring are
//! delegated to `grandprix_engine`.
//!
//! ## Main Entry Point
//!
//! [`run`] parses process arguments, opens the [`session::Session`] and runs
//! the command loop on stdin. [`run_with_input`] and [`run_session`] take any
//! `BufRead`/`Write` pair so the whole loop can be driven from tests.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io::{self, Cursor};
//! let mut input = Cursor::new(b"help\nq\ny\n".to_vec());
//! let code = grandprix_cli::run_with_input(
//!     vec!["grandprix", "--config", "grandprix.toml"],
//!     &mut input,
//!     &mut io::stdout(),
//!     &mut io::stderr(),
//! );
//! assert_eq!(code, 0);
//! ```
//!
//! ## Command Families
//!
//! - Tournament: `tn`, `tl`, `ts`, `tx`, `t?`
//! - Player: `pn`, `pr`, `pl`, `ps`, `p?`
//! - Match: `m`, `ml`, `m?`
//! - Session: `s`, `sb`, `sa`, `sl`
//! - `q`/`quit` and `help`

use clap::Parser;
use std::io::{BufRead, Write};
use tracing::debug;

pub mod cli;
pub mod command;
pub mod commands;
pub mod config;
pub mod console;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
#[macro_use]
mod macros;
pub mod persistence;
pub mod session;
pub mod ui;
pub mod validation;
pub mod views;
pub mod wizard;

use cli::GrandPrixCli;
use command::parse_command;
use commands::{Flow, dispatch};
use console::Console;
use session::Session;

pub use error::CliError;

const PROMPT: &str = "> ";

/// Main entry point: parses arguments and runs the session on stdin.
///
/// # Returns
///
/// Exit code: `0` after a confirmed quit or end of input, `2` when the
/// session could not be opened
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`] with the command input supplied by the caller.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match GrandPrixCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "For full help, run: grandprix --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let config_path = config::resolve_path(cli.config);
    let mut session = match Session::open(&config_path, cli.save_dir) {
        Ok(session) => session,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            return exit_code::ERROR;
        }
    };

    write_or_exit!(out, "Grand Prix");
    write_or_exit!(out, "Version {}\n", env!("CARGO_PKG_VERSION"));
    if ui::warn_placeholder_pairing(err).is_err() {
        return exit_code::ERROR;
    }

    match run_session(&mut session, input, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

/// The command loop: read a line, dispatch it, report any failure, repeat.
///
/// Returns after a confirmed quit or at end of input. Only a failure to
/// talk to the console itself ends the loop with an error.
pub fn run_session(
    session: &mut Session,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut console = Console::new(input, out, err);
    loop {
        let Some(line) = console.read_line(PROMPT)? else {
            writeln!(console.out)?;
            debug!("input closed");
            return Ok(());
        };
        let outcome = parse_command(&line).and_then(|parsed| match parsed {
            Some(command) => dispatch(session, &command, &mut console),
            None => Ok(Flow::Continue),
        });
        match outcome {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => return Ok(()),
            Err(e) => {
                debug!(error = %e, line = %line, "command failed");
                ui::write_error(console.err, &e.to_string())?;
            }
        }
    }
}
