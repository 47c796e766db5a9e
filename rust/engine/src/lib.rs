//! # grandprix-engine: Tournament Engine
//!
//! Owns tournaments, players and matches. Everything that changes tournament
//! state goes through a method on [`tournament::Tournament`] that either
//! succeeds or returns an [`errors::EngineError`] and leaves the state as it
//! was.
//!
//! ## Core Modules
//!
//! - [`manager`] - Creating tournaments and reloading serialized ones
//! - [`tournament`] - Round progression, results and player management
//! - [`settings`] - Formats, scoring and tiebreak configuration
//! - [`standings`] - Match points and tiebreak computation
//! - [`player`] / [`matches`] - Entities owned by a tournament
//! - [`errors`] - Error types for engine operations
//!
//! Pairing is a deliberately simple placeholder: active players are paired
//! in seed or standings order and the odd player out receives a bye.
//!
//! ## Quick Start
//!
//! ```rust
//! use grandprix_engine::manager::Manager;
//! use grandprix_engine::settings::{Format, TournamentSettings};
//!
//! let mut settings = TournamentSettings::default();
//! settings.stage_one.format = Format::Swiss;
//!
//! let mut tournament = Manager::new().create_tournament("Club Night", settings).unwrap();
//! tournament.create_player("Ada").unwrap();
//! tournament.create_player("Grace").unwrap();
//! tournament.start().unwrap();
//!
//! let id = tournament.matches()[0].id().to_string();
//! tournament.enter_result(&id, 1, 0, 0).unwrap();
//! assert_eq!(tournament.standings()[0].player.name(), "Ada");
//! ```

pub mod errors;
pub mod manager;
pub mod matches;
pub mod player;
pub mod settings;
pub mod standings;
pub mod tournament;
