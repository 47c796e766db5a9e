use tracing::info;

use crate::errors::EngineError;
use crate::settings::TournamentSettings;
use crate::tournament::Tournament;

/// Entry point for creating tournaments and restoring saved ones.
#[derive(Debug, Default, Clone, Copy)]
pub struct Manager;

impl Manager {
    pub fn new() -> Self {
        Self
    }

    pub fn create_tournament(
        &self,
        name: &str,
        settings: TournamentSettings,
    ) -> Result<Tournament, EngineError> {
        if name.trim().is_empty() {
            return Err(EngineError::InvalidSettings(
                "tournament name can not be empty".to_string(),
            ));
        }
        settings.validate()?;
        info!(tournament = name, format = ?settings.stage_one.format, "tournament created");
        Ok(Tournament::new(name, settings))
    }

    /// Rebuilds a tournament from a previously serialized document.
    pub fn reload_tournament(&self, document: serde_json::Value) -> Result<Tournament, EngineError> {
        let tournament: Tournament = serde_json::from_value(document)
            .map_err(|e| EngineError::InvalidDocument(e.to_string()))?;
        tournament.check_integrity()?;
        info!(tournament = tournament.name(), round = tournament.round(), "tournament reloaded");
        Ok(tournament)
    }
}
