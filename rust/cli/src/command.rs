//! Command grammar.
//!
//! An input line is split on whitespace into a tag and verbatim arguments.
//! The tag is matched case-exactly against a fixed table; arguments are left
//! for the handlers to validate.

use crate::error::CliError;

/// Handler group a command belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandFamily {
    Tournament,
    Player,
    Match,
    Session,
    Quit,
    Help,
}

impl CommandFamily {
    /// Player and match commands only make sense against an active tournament.
    pub fn requires_tournament(&self) -> bool {
        matches!(self, CommandFamily::Player | CommandFamily::Match)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandTag {
    NewTournament,
    LoadTournament,
    StartTournament,
    NextRound,
    TournamentDetails,
    NewPlayer,
    RemovePlayer,
    ListPlayers,
    Standings,
    PlayerDetails,
    ReportResult,
    ListMatches,
    MatchDetails,
    Save,
    Backup,
    AutoSave,
    SaveDirectory,
    Quit,
    Help,
}

impl CommandTag {
    pub const ALL: [CommandTag; 19] = [
        CommandTag::NewTournament,
        CommandTag::LoadTournament,
        CommandTag::StartTournament,
        CommandTag::NextRound,
        CommandTag::TournamentDetails,
        CommandTag::NewPlayer,
        CommandTag::RemovePlayer,
        CommandTag::ListPlayers,
        CommandTag::Standings,
        CommandTag::PlayerDetails,
        CommandTag::ReportResult,
        CommandTag::ListMatches,
        CommandTag::MatchDetails,
        CommandTag::Save,
        CommandTag::Backup,
        CommandTag::AutoSave,
        CommandTag::SaveDirectory,
        CommandTag::Quit,
        CommandTag::Help,
    ];

    pub fn from_token(token: &str) -> Option<Self> {
        let tag = match token {
            "tn" => CommandTag::NewTournament,
            "tl" => CommandTag::LoadTournament,
            "ts" => CommandTag::StartTournament,
            "tx" => CommandTag::NextRound,
            "t?" => CommandTag::TournamentDetails,
            "pn" => CommandTag::NewPlayer,
            "pr" => CommandTag::RemovePlayer,
            "pl" => CommandTag::ListPlayers,
            "ps" => CommandTag::Standings,
            "p?" => CommandTag::PlayerDetails,
            "m" => CommandTag::ReportResult,
            "ml" => CommandTag::ListMatches,
            "m?" => CommandTag::MatchDetails,
            "s" => CommandTag::Save,
            "sb" => CommandTag::Backup,
            "sa" => CommandTag::AutoSave,
            "sl" => CommandTag::SaveDirectory,
            "q" | "quit" => CommandTag::Quit,
            "help" => CommandTag::Help,
            _ => return None,
        };
        Some(tag)
    }

    pub fn token(&self) -> &'static str {
        match self {
            CommandTag::NewTournament => "tn",
            CommandTag::LoadTournament => "tl",
            CommandTag::StartTournament => "ts",
            CommandTag::NextRound => "tx",
            CommandTag::TournamentDetails => "t?",
            CommandTag::NewPlayer => "pn",
            CommandTag::RemovePlayer => "pr",
            CommandTag::ListPlayers => "pl",
            CommandTag::Standings => "ps",
            CommandTag::PlayerDetails => "p?",
            CommandTag::ReportResult => "m",
            CommandTag::ListMatches => "ml",
            CommandTag::MatchDetails => "m?",
            CommandTag::Save => "s",
            CommandTag::Backup => "sb",
            CommandTag::AutoSave => "sa",
            CommandTag::SaveDirectory => "sl",
            CommandTag::Quit => "q",
            CommandTag::Help => "help",
        }
    }

    pub fn family(&self) -> CommandFamily {
        match self {
            CommandTag::NewTournament
            | CommandTag::LoadTournament
            | CommandTag::StartTournament
            | CommandTag::NextRound
            | CommandTag::TournamentDetails => CommandFamily::Tournament,
            CommandTag::NewPlayer
            | CommandTag::RemovePlayer
            | CommandTag::ListPlayers
            | CommandTag::Standings
            | CommandTag::PlayerDetails => CommandFamily::Player,
            CommandTag::ReportResult | CommandTag::ListMatches | CommandTag::MatchDetails => {
                CommandFamily::Match
            }
            CommandTag::Save
            | CommandTag::Backup
            | CommandTag::AutoSave
            | CommandTag::SaveDirectory => CommandFamily::Session,
            CommandTag::Quit => CommandFamily::Quit,
            CommandTag::Help => CommandFamily::Help,
        }
    }
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub tag: CommandTag,
    pub args: Vec<String>,
}

impl Command {
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}

/// Parses one input line. Blank lines yield `Ok(None)`.
///
/// # Example
///
/// ```rust
/// # use grandprix_cli::command::{parse_command, CommandTag};
/// let cmd = parse_command("pn Ada 1500").unwrap().unwrap();
/// assert_eq!(cmd.tag, CommandTag::NewPlayer);
/// assert_eq!(cmd.args, vec!["Ada", "1500"]);
///
/// assert!(parse_command("PN Ada").is_err());
/// assert_eq!(parse_command("   ").unwrap(), None);
/// ```
pub fn parse_command(line: &str) -> Result<Option<Command>, CliError> {
    let mut words = line.split_whitespace();
    let Some(token) = words.next() else {
        return Ok(None);
    };
    let tag = CommandTag::from_token(token).ok_or_else(|| {
        CliError::InvalidInput("That is not a valid command. Type help if you need help".into())
    })?;
    Ok(Some(Command {
        tag,
        args: words.map(str::to_string).collect(),
    }))
}
