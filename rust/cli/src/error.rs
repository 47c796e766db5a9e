//! Error types for the session controller.
//!
//! Every handler returns `Result<(), CliError>`. The command loop reports the
//! error and keeps running, so none of these variants end the session.

use grandprix_engine::errors::EngineError;
use std::fmt;

use crate::config::ConfigError;

/// Custom error type for command handling.
///
/// The variants follow the ways a command can fail: malformed input, a
/// reference that resolves to nothing, a missing active tournament, a
/// rejection from the engine, or a failed file operation.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (tournament files, config file, console streams)
    Io(std::io::Error),

    /// Malformed command or argument syntax
    InvalidInput(String),

    /// Unknown player or match reference
    NotFound(String),

    /// Command needs an active tournament and there is none
    NoActiveTournament,

    /// Rejection from the tournament engine, reported verbatim
    Engine(EngineError),

    /// Tournament document could not be encoded or decoded
    Serialization(String),

    /// Configuration error
    Config(String),

    /// Input ended in the middle of an interactive prompt
    Interrupted(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "{}", msg),
            CliError::NotFound(msg) => write!(f, "{}", msg),
            CliError::NoActiveTournament => write!(
                f,
                "There is no active tournament. Use tn to create a new tournament, or tl to load a tournament"
            ),
            CliError::Engine(e) => write!(f, "{}", e),
            CliError::Serialization(msg) => write!(f, "Invalid tournament file: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Interrupted(msg) => write!(f, "Interrupted: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<EngineError> for CliError {
    fn from(error: EngineError) -> Self {
        CliError::Engine(error)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        CliError::Serialization(error.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_active_tournament_names_create_and_load() {
        let msg = CliError::NoActiveTournament.to_string();
        assert!(msg.contains("tn"));
        assert!(msg.contains("tl"));
    }

    #[test]
    fn engine_errors_are_reported_verbatim() {
        let err = CliError::from(EngineError::DuplicateName("Ada".into()));
        assert_eq!(err.to_string(), EngineError::DuplicateName("Ada".into()).to_string());
    }

    #[test]
    fn io_error_keeps_source() {
        use std::error::Error;
        let err = CliError::from(std::io::Error::other("disk full"));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("disk full"));
    }
}
