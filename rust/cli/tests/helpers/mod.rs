//! Shared fixtures for driving a whole session from a script.
//!
//! Every test gets its own temporary directory holding the config file and
//! the save directory, so tests never see each other's tournaments.

#![allow(dead_code)]

use grandprix_cli::run_with_input;
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;

/// Wizard answers for a Swiss tournament named `Open` with computed rounds,
/// no sorting, no stage two, default scoring and no tiebreaks.
pub const SWISS_OPEN: &[&str] = &[
    "tn", "Open", "4", "", "", "", "n", "3", "0", "", "", "", "", "", "0",
];

/// Same as [`SWISS_OPEN`] but players are sorted ascending by value.
pub const SWISS_SORTED: &[&str] = &[
    "tn", "Sorted", "4", "", "", "", "n", "1", "0", "", "", "", "", "", "0",
];

#[derive(Debug)]
pub struct RunResult {
    pub code: i32,
    pub out: String,
    pub err: String,
}

#[derive(Debug)]
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("temp dir"),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("grandprix.toml")
    }

    pub fn save_dir(&self) -> PathBuf {
        self.dir.path().join("tournaments")
    }

    /// Runs a session fed with `lines`, one command or answer per line.
    pub fn run(&self, lines: &[&str]) -> RunResult {
        let config = self.config_path();
        let config = config.to_string_lossy();
        self.run_with_args(&["grandprix", "--config", &*config], lines)
    }

    pub fn run_with_args(&self, args: &[&str], lines: &[&str]) -> RunResult {
        let mut script = lines.join("\n");
        script.push('\n');
        let mut input = Cursor::new(script.into_bytes());
        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        let code = run_with_input(args.iter().copied(), &mut input, &mut out, &mut err);
        RunResult {
            code,
            out: String::from_utf8_lossy(&out).into_owned(),
            err: String::from_utf8_lossy(&err).into_owned(),
        }
    }

    pub fn read_document(&self, file: &str) -> serde_json::Value {
        let text = std::fs::read_to_string(self.save_dir().join(file)).expect("tournament file");
        serde_json::from_str(&text).expect("valid json")
    }
}

/// Joins script fragments into one input script.
pub fn script(parts: &[&[&'static str]]) -> Vec<&'static str> {
    parts.concat()
}
