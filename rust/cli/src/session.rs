//! Process-lifetime session state.
//!
//! One [`Session`] exists per run. It owns the active tournament (if any) and
//! the persisted configuration, and is passed by reference to every handler.

use grandprix_engine::manager::Manager;
use grandprix_engine::tournament::Tournament;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::{self, Config};
use crate::error::CliError;

#[derive(Debug)]
pub struct Session {
    manager: Manager,
    tournament: Option<Tournament>,
    config: Config,
    config_path: PathBuf,
    /// Process-only save directory from `--save-dir`; cleared by `sl`.
    save_dir_override: Option<PathBuf>,
}

impl Session {
    /// Reads (or creates) the config file and makes sure the save directory
    /// exists.
    pub fn open(config_path: &Path, save_dir_override: Option<PathBuf>) -> Result<Self, CliError> {
        let config = config::load_or_init(config_path)?;
        let session = Self {
            manager: Manager::new(),
            tournament: None,
            config,
            config_path: config_path.to_path_buf(),
            save_dir_override,
        };
        std::fs::create_dir_all(session.save_dir())?;
        debug!(
            config = %config_path.display(),
            save_dir = %session.save_dir().display(),
            "session opened"
        );
        Ok(session)
    }

    pub fn manager(&self) -> &Manager {
        &self.manager
    }

    pub fn has_tournament(&self) -> bool {
        self.tournament.is_some()
    }

    pub fn active(&self) -> Result<&Tournament, CliError> {
        self.tournament.as_ref().ok_or(CliError::NoActiveTournament)
    }

    pub fn active_mut(&mut self) -> Result<&mut Tournament, CliError> {
        self.tournament.as_mut().ok_or(CliError::NoActiveTournament)
    }

    /// Replaces the active tournament.
    pub fn set_tournament(&mut self, tournament: Tournament) {
        info!(tournament = tournament.name(), "active tournament set");
        self.tournament = Some(tournament);
    }

    pub fn save_dir(&self) -> &Path {
        self.save_dir_override
            .as_deref()
            .unwrap_or(self.config.save_directory.as_path())
    }

    pub fn auto_save(&self) -> bool {
        self.config.auto_save
    }

    /// Sets the auto-save flag. The config file is rewritten first; if that
    /// fails the flag keeps its old value.
    pub fn set_auto_save(&mut self, enabled: bool) -> Result<(), CliError> {
        let updated = Config {
            auto_save: enabled,
            ..self.config.clone()
        };
        self.persist(updated)
    }

    /// Points the session at an existing directory and persists it.
    pub fn set_save_dir(&mut self, dir: &Path) -> Result<(), CliError> {
        if !dir.is_dir() {
            return Err(CliError::NotFound(format!("{} does not exist", dir.display())));
        }
        let updated = Config {
            save_directory: dir.to_path_buf(),
            ..self.config.clone()
        };
        self.persist(updated)?;
        self.save_dir_override = None;
        Ok(())
    }

    fn persist(&mut self, updated: Config) -> Result<(), CliError> {
        config::save(&self.config_path, &updated)?;
        info!(
            config = %self.config_path.display(),
            auto_save = updated.auto_save,
            save_dir = %updated.save_directory.display(),
            "config written"
        );
        self.config = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn open_creates_config_and_save_dir() {
        let dir = tempdir().unwrap();
        let cfg = dir.path().join("grandprix.toml");
        let session = Session::open(&cfg, None).unwrap();
        assert!(cfg.exists());
        assert!(session.save_dir().is_dir());
        assert!(!session.has_tournament());
        assert!(matches!(session.active(), Err(CliError::NoActiveTournament)));
    }

    #[test]
    fn override_is_not_persisted() {
        let dir = tempdir().unwrap();
        let cfg = dir.path().join("grandprix.toml");
        let scratch = dir.path().join("scratch");
        let session = Session::open(&cfg, Some(scratch.clone())).unwrap();
        assert_eq!(session.save_dir(), scratch.as_path());
        assert!(scratch.is_dir());
        assert_eq!(
            config::load(&cfg).unwrap().save_directory,
            dir.path().join("tournaments")
        );
    }

    #[test]
    fn set_save_dir_requires_existing_directory() {
        let dir = tempdir().unwrap();
        let cfg = dir.path().join("grandprix.toml");
        let mut session = Session::open(&cfg, None).unwrap();
        let missing = dir.path().join("missing");
        match session.set_save_dir(&missing) {
            Err(CliError::NotFound(msg)) => assert!(msg.ends_with("does not exist")),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(session.save_dir(), dir.path().join("tournaments").as_path());
    }

    #[test]
    fn config_changes_are_written_immediately() {
        let dir = tempdir().unwrap();
        let cfg = dir.path().join("grandprix.toml");
        let mut session = Session::open(&cfg, None).unwrap();
        session.set_auto_save(true).unwrap();
        session.set_save_dir(dir.path()).unwrap();

        let reread = config::load(&cfg).unwrap();
        assert!(reread.auto_save);
        assert_eq!(reread.save_directory, dir.path());
    }
}
