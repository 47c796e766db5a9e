//! Command handlers for the interactive session.
//!
//! Each command is implemented in the module for its family with a consistent
//! pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Session passed by reference, console streams injected through [`Console`]
//! - Engine rejections and I/O failures propagated as `CliError`; the command
//!   loop reports them and keeps going
//! - Handlers that change the tournament finish with [`after_mutation`]

mod help;
mod matches;
mod player;
mod session;
mod tournament;

pub use help::handle_help_command;
pub use matches::{
    handle_list_matches_command, handle_match_details_command, handle_report_command,
    resolve_match,
};
pub use player::{
    handle_list_players_command, handle_new_player_command, handle_player_details_command,
    handle_remove_player_command, handle_standings_command, resolve_player,
};
pub use session::{
    handle_auto_save_command, handle_backup_command, handle_save_command,
    handle_save_dir_command,
};
pub use tournament::{
    handle_create_command, handle_load_command, handle_next_command, handle_start_command,
    handle_tournament_details_command,
};

use tracing::debug;

use crate::command::{Command, CommandTag};
use crate::console::Console;
use crate::error::CliError;
use crate::persistence;
use crate::session::Session;

/// Whether the command loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Routes one parsed command to its handler.
///
/// Player and match commands are refused up front when no tournament is
/// active; every other family is always reachable.
pub fn dispatch(
    session: &mut Session,
    command: &Command,
    console: &mut Console<'_>,
) -> Result<Flow, CliError> {
    debug!(tag = command.tag.token(), args = ?command.args, "dispatch");
    if command.tag.family().requires_tournament() && !session.has_tournament() {
        return Err(CliError::NoActiveTournament);
    }

    match command.tag {
        CommandTag::NewTournament => handle_create_command(session, console)?,
        CommandTag::LoadTournament => handle_load_command(session, command, console)?,
        CommandTag::StartTournament => handle_start_command(session, console)?,
        CommandTag::NextRound => handle_next_command(session, console)?,
        CommandTag::TournamentDetails => handle_tournament_details_command(session, console)?,
        CommandTag::NewPlayer => handle_new_player_command(session, command, console)?,
        CommandTag::RemovePlayer => handle_remove_player_command(session, command, console)?,
        CommandTag::ListPlayers => handle_list_players_command(session, command, console)?,
        CommandTag::Standings => handle_standings_command(session, command, console)?,
        CommandTag::PlayerDetails => handle_player_details_command(session, command, console)?,
        CommandTag::ReportResult => handle_report_command(session, command, console)?,
        CommandTag::ListMatches => handle_list_matches_command(session, command, console)?,
        CommandTag::MatchDetails => handle_match_details_command(session, command, console)?,
        CommandTag::Save => handle_save_command(session, console)?,
        CommandTag::Backup => handle_backup_command(session, command, console)?,
        CommandTag::AutoSave => handle_auto_save_command(session, console)?,
        CommandTag::SaveDirectory => handle_save_dir_command(session, command, console)?,
        CommandTag::Help => handle_help_command(console)?,
        CommandTag::Quit => {
            if console.confirm("Do you want to quit?")? {
                return Ok(Flow::Quit);
            }
        }
    }
    Ok(Flow::Continue)
}

/// Auto-saves after a successful mutation. The mutation stands even if the
/// write fails; the failure is returned for reporting.
pub(crate) fn after_mutation(session: &Session) -> Result<(), CliError> {
    persistence::auto_save(session).map(|_| ())
}

/// First argument or a usage error.
pub(crate) fn required_arg<'c>(command: &'c Command, usage: &str) -> Result<&'c str, CliError> {
    command
        .arg(0)
        .ok_or_else(|| CliError::InvalidInput(format!("Usage: {}", usage)))
}
