//! Tournament lifecycle: create, load, start, advance and describe.

use grandprix_engine::tournament::RoundOutcome;
use std::io::Write;

use crate::command::Command;
use crate::commands::{after_mutation, required_arg};
use crate::console::Console;
use crate::error::CliError;
use crate::persistence;
use crate::session::Session;
use crate::views;
use crate::wizard::run_wizard;

/// Handle `tn`: run the wizard, create the tournament, make it active and
/// write it to its path.
///
/// A wizard abort or engine rejection leaves the session as it was.
pub fn handle_create_command(
    session: &mut Session,
    console: &mut Console<'_>,
) -> Result<(), CliError> {
    let save_dir = session.save_dir().to_path_buf();
    let answers = run_wizard(console, &save_dir)?;
    let tournament = session
        .manager()
        .create_tournament(&answers.name, answers.settings)?;
    session.set_tournament(tournament);
    writeln!(console.out, "Tournament has been created")?;

    let active = session.active()?;
    persistence::write_tournament(active.path(), active)
}

/// Handle `tl (file name)`.
pub fn handle_load_command(
    session: &mut Session,
    command: &Command,
    console: &mut Console<'_>,
) -> Result<(), CliError> {
    let name = required_arg(command, "tl (file name)")?;
    persistence::load(session, name)?;
    writeln!(console.out, "Tournament has been loaded")?;
    Ok(())
}

pub fn handle_start_command(
    session: &mut Session,
    console: &mut Console<'_>,
) -> Result<(), CliError> {
    session.active_mut()?.start()?;
    writeln!(console.out, "Tournament has started")?;
    after_mutation(session)
}

pub fn handle_next_command(
    session: &mut Session,
    console: &mut Console<'_>,
) -> Result<(), CliError> {
    match session.active_mut()?.next()? {
        RoundOutcome::Paired(round) => writeln!(console.out, "Next round created (round {})", round)?,
        RoundOutcome::StageTwoStarted(round) => {
            writeln!(console.out, "Stage two has started (round {})", round)?
        }
        RoundOutcome::Complete => writeln!(console.out, "Tournament is complete")?,
    }
    after_mutation(session)
}

/// Handle `t?`: the tournament document with counts instead of lists.
pub fn handle_tournament_details_command(
    session: &mut Session,
    console: &mut Console<'_>,
) -> Result<(), CliError> {
    let details = views::tournament_details(session.active()?)?;
    writeln!(console.out, "{}", details)?;
    Ok(())
}
