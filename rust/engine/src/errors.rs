use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
    #[error("Tournament has already started")]
    AlreadyStarted,
    #[error("Tournament has not started")]
    NotStarted,
    #[error("Tournament is complete")]
    Complete,
    #[error("A player named {0} already exists")]
    DuplicateName(String),
    #[error("Player name can not be empty")]
    EmptyName,
    #[error("Tournament is full (maximum {0} players)")]
    TournamentFull(u32),
    #[error("Not enough players to start (need at least {minimum}, have {actual})")]
    NotEnoughPlayers { minimum: usize, actual: usize },
    #[error("No player exists with ID {0}")]
    UnknownPlayer(String),
    #[error("No match exists with ID {0}")]
    UnknownMatch(String),
    #[error("Player {0} is already inactive")]
    PlayerInactive(String),
    #[error("Match {0} is a bye")]
    ByeMatch(String),
    #[error("Result {games} exceeds best of {best_of}")]
    ResultOutOfRange { games: u32, best_of: u32 },
    #[error("Round {round} still has {remaining} active match(es)")]
    RoundIncomplete { round: u32, remaining: usize },
    #[error("Results from round {0} can no longer be changed")]
    RoundLocked(u32),
    #[error("Invalid tournament document: {0}")]
    InvalidDocument(String),
}
