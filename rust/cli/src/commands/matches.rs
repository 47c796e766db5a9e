//! Match commands: report, list and details.

use grandprix_engine::matches::Match;
use grandprix_engine::tournament::Tournament;
use std::io::Write;

use crate::command::Command;
use crate::commands::{after_mutation, required_arg};
use crate::console::Console;
use crate::error::CliError;
use crate::session::Session;
use crate::validation::{MatchRef, ResultEntry, parse_match_ref, parse_result};
use crate::views;

/// Looks a reference up in the tournament. Bare numbers use the current round.
pub fn resolve_match<'t>(tournament: &'t Tournament, reference: &MatchRef) -> Result<&'t Match, CliError> {
    let round = reference.round(tournament.round());
    tournament
        .matches()
        .iter()
        .find(|m| m.round() == round && m.number() == reference.number())
        .ok_or_else(|| CliError::NotFound("No match exists with that match number".to_string()))
}

/// Handle `m (r#m# || #) (p1-p2[-d] || clear)`.
///
/// Both arguments are parsed before the match is resolved, so malformed
/// input never reaches the engine.
pub fn handle_report_command(
    session: &mut Session,
    command: &Command,
    console: &mut Console<'_>,
) -> Result<(), CliError> {
    const USAGE: &str = "m (r#m# || #) (p1-p2[-d] || clear)";
    let reference = parse_match_ref(required_arg(command, USAGE)?)?;
    let entry = parse_result(
        command
            .arg(1)
            .ok_or_else(|| CliError::InvalidInput(format!("Usage: {}", USAGE)))?,
    )?;

    let match_id = resolve_match(session.active()?, &reference)?.id().to_string();
    let tournament = session.active_mut()?;
    match entry {
        ResultEntry::Clear => {
            tournament.clear_result(&match_id)?;
            writeln!(console.out, "Result cleared")?;
        }
        ResultEntry::Score { win, loss, draw } => {
            tournament.enter_result(&match_id, win, loss, draw)?;
            writeln!(console.out, "Result recorded")?;
        }
    }
    after_mutation(session)
}

/// Handle `ml [round] [active]`.
///
/// A first argument that is not a number is only checked for `active`. A
/// round of 0 falls back to the current round.
pub fn handle_list_matches_command(
    session: &mut Session,
    command: &Command,
    console: &mut Console<'_>,
) -> Result<(), CliError> {
    let tournament = session.active()?;
    let (round, active_only) = list_arguments(command, tournament.round());
    let table = views::matches_table(tournament, round, active_only);
    write!(console.out, "{}", table.render())?;
    Ok(())
}

fn list_arguments(command: &Command, current_round: u32) -> (u32, bool) {
    match command.arg(0) {
        None => (current_round, false),
        Some(first) => match first.parse::<u32>() {
            Ok(0) => (current_round, command.arg(1) == Some("active")),
            Ok(round) => (round, command.arg(1) == Some("active")),
            Err(_) => (current_round, first == "active"),
        },
    }
}

pub fn handle_match_details_command(
    session: &mut Session,
    command: &Command,
    console: &mut Console<'_>,
) -> Result<(), CliError> {
    let reference = parse_match_ref(required_arg(command, "m? (r#m#)")?)?;
    let m = resolve_match(session.active()?, &reference)?;
    writeln!(console.out, "{}", views::match_details(m)?)?;
    Ok(())
}
