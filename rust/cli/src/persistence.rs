//! Tournament documents on disk.
//!
//! Every write (save, backup, auto-save, create, load) serializes the whole
//! tournament as one pretty-printed JSON document. A failed write is reported
//! to the caller and never touches the in-memory tournament.

use chrono::{Local, NaiveDateTime};
use grandprix_engine::tournament::Tournament;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::CliError;
use crate::io_utils::{ensure_parent_dir, read_text};
use crate::session::Session;

const DOCUMENT_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP: &str = "%Y%m%d-%H%M";

/// Writes the full tournament document to `path`.
pub fn write_tournament(path: &Path, tournament: &Tournament) -> Result<(), CliError> {
    let document = serde_json::to_string_pretty(tournament)?;
    ensure_parent_dir(path)?;
    fs::write(path, document)?;
    info!(
        tournament = tournament.name(),
        path = %path.display(),
        "tournament written"
    );
    Ok(())
}

/// Explicit save to the tournament's recorded path.
pub fn save(session: &Session) -> Result<PathBuf, CliError> {
    let tournament = session.active()?;
    let path = tournament.path().to_path_buf();
    write_tournament(&path, tournament)?;
    Ok(path)
}

/// Backup file name. Without a label the name carries the minute it was
/// taken, so two unlabeled backups in the same minute share a path and the
/// later one replaces the earlier.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use std::path::Path;
/// # use grandprix_cli::persistence::backup_path;
///
/// let at = NaiveDate::from_ymd_opt(2024, 3, 7)
///     .unwrap()
///     .and_hms_opt(9, 5, 0)
///     .unwrap();
/// let dir = Path::new("saves");
/// assert_eq!(
///     backup_path(dir, "Club Night", None, at),
///     dir.join("Club Night-20240307-0905.json")
/// );
/// assert_eq!(
///     backup_path(dir, "Club Night", Some("before-top8"), at),
///     dir.join("Club Night-before-top8.json")
/// );
/// ```
pub fn backup_path(save_dir: &Path, name: &str, label: Option<&str>, now: NaiveDateTime) -> PathBuf {
    let suffix = match label {
        Some(label) => label.to_string(),
        None => now.format(BACKUP_TIMESTAMP).to_string(),
    };
    save_dir.join(format!("{}-{}.{}", name, suffix, DOCUMENT_EXTENSION))
}

/// Writes a copy into the save directory without changing the recorded path.
pub fn backup(session: &Session, label: Option<&str>) -> Result<PathBuf, CliError> {
    let tournament = session.active()?;
    let path = backup_path(
        session.save_dir(),
        tournament.name(),
        label,
        Local::now().naive_local(),
    );
    write_tournament(&path, tournament)?;
    Ok(path)
}

/// Saves after a mutating command when auto-save is on. Returns whether a
/// write happened.
pub fn auto_save(session: &Session) -> Result<bool, CliError> {
    if !session.auto_save() {
        return Ok(false);
    }
    save(session)?;
    debug!("auto save complete");
    Ok(true)
}

/// Path of a newly created tournament: `<save dir>/<name>.json`.
pub fn tournament_path(save_dir: &Path, name: &str) -> PathBuf {
    save_dir.join(format!("{}.{}", name, DOCUMENT_EXTENSION))
}

/// Resolves a `tl` argument against the save directory, adding `.json` when
/// the name has no extension.
pub fn resolve_load_path(save_dir: &Path, name: &str) -> PathBuf {
    let path = save_dir.join(name);
    if path.extension().is_some() {
        path
    } else {
        save_dir.join(format!("{}.{}", name, DOCUMENT_EXTENSION))
    }
}

/// Reads and rebuilds a tournament, records where it came from, and writes
/// it back. The session is only updated once all of that succeeded.
pub fn load(session: &mut Session, name: &str) -> Result<PathBuf, CliError> {
    let path = resolve_load_path(session.save_dir(), name);
    let text = read_text(&path)?;
    let document: serde_json::Value = serde_json::from_str(&text)?;
    let mut tournament = session.manager().reload_tournament(document)?;
    tournament.set_meta_path(path.clone());
    write_tournament(&path, &tournament)?;
    session.set_tournament(tournament);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use grandprix_engine::manager::Manager;
    use grandprix_engine::settings::TournamentSettings;
    use tempfile::tempdir;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn unlabeled_backups_in_the_same_minute_collide() {
        let dir = Path::new("saves");
        let first = backup_path(dir, "Open", None, at(14, 3, 1));
        let second = backup_path(dir, "Open", None, at(14, 3, 59));
        assert_eq!(first, second);
        assert_eq!(first, dir.join("Open-20250102-1403.json"));
        assert_ne!(first, backup_path(dir, "Open", None, at(14, 4, 0)));
    }

    #[test]
    fn load_path_gets_default_extension() {
        let dir = Path::new("saves");
        assert_eq!(resolve_load_path(dir, "open"), dir.join("open.json"));
        assert_eq!(resolve_load_path(dir, "open.bak"), dir.join("open.bak"));
    }

    #[test]
    fn written_document_reloads_to_the_same_state() {
        let dir = tempdir().unwrap();
        let path = tournament_path(dir.path(), "Open");
        let mut settings = TournamentSettings::default();
        settings.meta.path = path.clone();
        let mut t = Manager::new().create_tournament("Open", settings).unwrap();
        t.create_player("Ada").unwrap();

        write_tournament(&path, &t).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let reloaded = Manager::new()
            .reload_tournament(serde_json::from_str(&text).unwrap())
            .unwrap();
        assert_eq!(reloaded, t);
    }
}
