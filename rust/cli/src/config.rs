use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::io_utils::ensure_parent_dir;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "GRANDPRIX_CONFIG";
/// Config file used when neither the flag nor the environment names one.
pub const DEFAULT_CONFIG_FILE: &str = "grandprix.toml";
const DEFAULT_SAVE_DIR: &str = "tournaments";

/// Settings persisted between runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub save_directory: PathBuf,
    pub auto_save: bool,
}

impl Config {
    /// Defaults for a config stored at `config_path`: saves go next to it.
    pub fn default_for(config_path: &Path) -> Self {
        let base = config_path.parent().unwrap_or_else(|| Path::new(""));
        Self {
            save_directory: base.join(DEFAULT_SAVE_DIR),
            auto_save: false,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Write(toml::ser::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}
impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        ConfigError::Write(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "{}", e),
            ConfigError::Parse(e) => write!(f, "{}", e),
            ConfigError::Write(e) => write!(f, "{}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

/// Picks the config file: explicit flag, then environment, then the default.
pub fn resolve_path(flag: Option<PathBuf>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }
    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_CONFIG_FILE)
}

/// Reads the config at `path`, writing defaults there first if it is missing.
pub fn load_or_init(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        let cfg = Config::default_for(path);
        save(path, &cfg)?;
        return Ok(cfg);
    }
    load(path)
}

pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let s = fs::read_to_string(path)?;
    let f: FileConfig = toml::from_str(&s)?;
    let defaults = Config::default_for(path);
    let cfg = Config {
        save_directory: f.save_directory.unwrap_or(defaults.save_directory),
        auto_save: f.auto_save.unwrap_or(defaults.auto_save),
    };
    validate(&cfg)?;
    Ok(cfg)
}

pub fn save(path: &Path, cfg: &Config) -> Result<(), ConfigError> {
    validate(cfg)?;
    ensure_parent_dir(path)?;
    fs::write(path, toml::to_string_pretty(cfg)?)?;
    Ok(())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileConfig {
    #[serde(default)]
    save_directory: Option<PathBuf>,
    #[serde(default)]
    auto_save: Option<bool>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.save_directory.as_os_str().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: saveDirectory can not be empty".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn first_run_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grandprix.toml");
        let cfg = load_or_init(&path).unwrap();
        assert!(path.exists());
        assert_eq!(cfg.save_directory, dir.path().join("tournaments"));
        assert!(!cfg.auto_save);
    }

    #[test]
    fn saved_values_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grandprix.toml");
        let cfg = Config {
            save_directory: dir.path().join("elsewhere"),
            auto_save: true,
        };
        save(&path, &cfg).unwrap();
        assert_eq!(load_or_init(&path).unwrap(), cfg);
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("saveDirectory"));
        assert!(text.contains("autoSave = true"));
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grandprix.toml");
        fs::write(&path, "autoSave = true\n").unwrap();
        let cfg = load(&path).unwrap();
        assert!(cfg.auto_save);
        assert_eq!(cfg.save_directory, dir.path().join("tournaments"));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grandprix.toml");
        fs::write(&path, "autoSave = maybe\n").unwrap();
        assert!(matches!(load(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    #[serial]
    fn flag_beats_environment() {
        unsafe { std::env::set_var(CONFIG_ENV, "/tmp/from-env.toml") };
        assert_eq!(
            resolve_path(Some(PathBuf::from("flag.toml"))),
            PathBuf::from("flag.toml")
        );
        assert_eq!(resolve_path(None), PathBuf::from("/tmp/from-env.toml"));
        unsafe { std::env::remove_var(CONFIG_ENV) };
        assert_eq!(resolve_path(None), PathBuf::from(DEFAULT_CONFIG_FILE));
    }
}
