//! Player commands: add, remove, list, standings and details.

use grandprix_engine::player::Player;
use grandprix_engine::settings::Sorting;
use grandprix_engine::tournament::Tournament;
use std::io::Write;

use crate::command::Command;
use crate::commands::{after_mutation, required_arg};
use crate::console::Console;
use crate::error::CliError;
use crate::session::Session;
use crate::validation::parse_seed;
use crate::views;

/// Finds a player by engine ID, falling back to the first exact name match.
pub fn resolve_player<'t>(tournament: &'t Tournament, key: &str) -> Result<&'t Player, CliError> {
    let players = tournament.players();
    players
        .iter()
        .find(|p| p.id() == key)
        .or_else(|| players.iter().find(|p| p.name() == key))
        .ok_or_else(|| CliError::NotFound(format!("No player exists with name or ID of {}", key)))
}

/// Handle `pn (name) [value]`.
///
/// The seed value is only attached when the tournament sorts players and the
/// value is positive.
pub fn handle_new_player_command(
    session: &mut Session,
    command: &Command,
    console: &mut Console<'_>,
) -> Result<(), CliError> {
    let name = required_arg(command, "pn (name) [value]")?;
    let seed = parse_seed(command.arg(1))?;

    let tournament = session.active_mut()?;
    let id = tournament.create_player(name)?.id().to_string();
    if let Some(value) = seed {
        if tournament.sorting() != Sorting::None {
            tournament.set_player_value(&id, value)?;
        }
    }
    writeln!(console.out, "{} has been created", name)?;
    after_mutation(session)
}

/// Handle `pr (id)`. Nothing happens unless the removal is confirmed.
pub fn handle_remove_player_command(
    session: &mut Session,
    command: &Command,
    console: &mut Console<'_>,
) -> Result<(), CliError> {
    let key = required_arg(command, "pr (id)")?;
    let player = resolve_player(session.active()?, key)?;
    let (id, name) = (player.id().to_string(), player.name().to_string());

    if !console.confirm(&format!("Are you sure you want to remove {}?", name))? {
        return Ok(());
    }
    session.active_mut()?.remove_player(&id)?;
    writeln!(console.out, "Successfully removed {}", name)?;
    after_mutation(session)
}

pub fn handle_list_players_command(
    session: &mut Session,
    command: &Command,
    console: &mut Console<'_>,
) -> Result<(), CliError> {
    let active_only = command.arg(0) == Some("active");
    let table = views::players_table(session.active()?, active_only);
    write!(console.out, "{}", table.render())?;
    Ok(())
}

pub fn handle_standings_command(
    session: &mut Session,
    command: &Command,
    console: &mut Console<'_>,
) -> Result<(), CliError> {
    let active_only = command.arg(0) == Some("active");
    let report = views::standings_report(session.active()?, active_only);
    write!(console.out, "{}", report)?;
    Ok(())
}

/// Handle `p? (id)`: the player's standings entry as JSON.
pub fn handle_player_details_command(
    session: &mut Session,
    command: &Command,
    console: &mut Console<'_>,
) -> Result<(), CliError> {
    let key = required_arg(command, "p? (id)")?;
    let tournament = session.active()?;
    let id = resolve_player(tournament, key)?.id().to_string();
    let standing = tournament
        .standings()
        .into_iter()
        .find(|s| s.player.id() == id)
        .ok_or_else(|| CliError::NotFound(format!("No player exists with name or ID of {}", key)))?;
    writeln!(console.out, "{}", views::standing_details(&standing)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use grandprix_engine::manager::Manager;
    use grandprix_engine::settings::TournamentSettings;

    fn tournament() -> Tournament {
        let mut t = Manager::new()
            .create_tournament("Open", TournamentSettings::default())
            .unwrap();
        t.create_player("Ada").unwrap();
        t.create_player("Grace").unwrap();
        // A display name that collides with another player's ID.
        t.create_player("1").unwrap();
        t
    }

    #[test]
    fn id_wins_over_name() {
        let t = tournament();
        assert_eq!(resolve_player(&t, "1").unwrap().name(), "Ada");
    }

    #[test]
    fn falls_back_to_exact_name() {
        let t = tournament();
        assert_eq!(resolve_player(&t, "Grace").unwrap().id(), "2");
        assert!(resolve_player(&t, "grace").is_err());
    }

    #[test]
    fn resolution_is_repeatable() {
        let t = tournament();
        let first = resolve_player(&t, "Grace").unwrap().id().to_string();
        let second = resolve_player(&t, "Grace").unwrap().id().to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_reference_is_not_found() {
        let t = tournament();
        match resolve_player(&t, "Linus") {
            Err(CliError::NotFound(msg)) => {
                assert_eq!(msg, "No player exists with name or ID of Linus")
            }
            other => panic!("unexpected {:?}", other.map(|p| p.name().to_string())),
        }
    }
}
