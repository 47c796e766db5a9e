use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::EngineError;
use crate::matches::Match;
use crate::player::Player;
use crate::settings::{AdvanceMethod, Format, Meta, Scoring, Sorting, TournamentSettings};
use crate::standings::{self, Standing};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Setup,
    StageOne,
    StageTwo,
    Complete,
}

/// What happened when the tournament was asked for its next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Paired(u32),
    StageTwoStarted(u32),
    Complete,
}

/// Full tournament state. Serializes to the document written on every save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    name: String,
    status: Status,
    round: u32,
    /// First round of the current stage.
    stage_start: u32,
    settings: TournamentSettings,
    players: Vec<Player>,
    matches: Vec<Match>,
    next_player_id: u32,
    next_match_id: u32,
}

impl Tournament {
    pub(crate) fn new(name: &str, settings: TournamentSettings) -> Self {
        Self {
            name: name.to_string(),
            status: Status::Setup,
            round: 0,
            stage_start: 0,
            settings,
            players: Vec::new(),
            matches: Vec::new(),
            next_player_id: 1,
            next_match_id: 1,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn status(&self) -> Status {
        self.status
    }
    /// Current round number; zero before the tournament starts.
    pub fn round(&self) -> u32 {
        self.round
    }
    pub fn settings(&self) -> &TournamentSettings {
        &self.settings
    }
    pub fn sorting(&self) -> Sorting {
        self.settings.sorting
    }
    pub fn scoring(&self) -> &Scoring {
        &self.settings.scoring
    }
    pub fn meta(&self) -> &Meta {
        &self.settings.meta
    }
    pub fn path(&self) -> &Path {
        &self.settings.meta.path
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    pub fn set_meta_path(&mut self, path: PathBuf) {
        self.settings.meta.path = path;
    }

    /// Format governing the round currently being played.
    pub fn current_format(&self) -> Format {
        match (self.status, self.settings.stage_two.format) {
            (Status::StageTwo, Some(format)) => format,
            _ => self.settings.stage_one.format,
        }
    }

    pub fn create_player(&mut self, name: &str) -> Result<&Player, EngineError> {
        if name.trim().is_empty() {
            return Err(EngineError::EmptyName);
        }
        if self.status != Status::Setup {
            return Err(EngineError::AlreadyStarted);
        }
        if self.players.iter().any(|p| p.name() == name) {
            return Err(EngineError::DuplicateName(name.to_string()));
        }
        let max = self.settings.stage_one.max_players;
        if max > 0 && self.players.len() >= max as usize {
            return Err(EngineError::TournamentFull(max));
        }
        let id = self.next_player_id.to_string();
        self.next_player_id += 1;
        debug!(player_id = %id, player = name, "player created");
        self.players.push(Player::new(id, name.to_string()));
        Ok(&self.players[self.players.len() - 1])
    }

    pub fn set_player_value(&mut self, id: &str, value: i64) -> Result<(), EngineError> {
        if self.status != Status::Setup {
            return Err(EngineError::AlreadyStarted);
        }
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or_else(|| EngineError::UnknownPlayer(id.to_string()))?;
        player.set_value(value);
        Ok(())
    }

    /// Removes a player before the start, or drops them once play is underway.
    /// Dropping forfeits their unfinished match in the current round.
    pub fn remove_player(&mut self, id: &str) -> Result<(), EngineError> {
        let index = self
            .players
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| EngineError::UnknownPlayer(id.to_string()))?;
        match self.status {
            Status::Setup => {
                self.players.remove(index);
            }
            Status::Complete => return Err(EngineError::Complete),
            Status::StageOne | Status::StageTwo => {
                if !self.players[index].is_active() {
                    return Err(EngineError::PlayerInactive(id.to_string()));
                }
                self.players[index].deactivate();
                let forfeit = self.settings.scoring.best_of / 2 + 1;
                let round = self.round;
                for m in self
                    .matches
                    .iter_mut()
                    .filter(|m| m.round() == round && m.is_active() && m.involves(id))
                {
                    if m.player1().id.as_deref() == Some(id) {
                        m.record(0, forfeit, 0);
                    } else {
                        m.record(forfeit, 0, 0);
                    }
                }
            }
        }
        debug!(player_id = id, "player removed");
        Ok(())
    }

    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.status != Status::Setup {
            return Err(EngineError::AlreadyStarted);
        }
        if self.players.len() < 2 {
            return Err(EngineError::NotEnoughPlayers {
                minimum: 2,
                actual: self.players.len(),
            });
        }
        match self.settings.sorting {
            Sorting::Ascending => self
                .players
                .sort_by_key(|p| (p.value().is_none(), p.value().unwrap_or_default())),
            Sorting::Descending => self
                .players
                .sort_by_key(|p| (p.value().is_none(), Reverse(p.value().unwrap_or_default()))),
            Sorting::None => {}
        }
        let count = self.players.len();
        let stage_one = &mut self.settings.stage_one;
        if stage_one.rounds == 0 {
            stage_one.rounds = match stage_one.format {
                Format::Swiss => ceil_log2(count),
                Format::RoundRobin => round_robin_rounds(count),
                Format::DoubleRoundRobin => 2 * round_robin_rounds(count),
                _ => 0,
            };
        }
        self.status = Status::StageOne;
        self.round = self.settings.stage_one.initial_round;
        self.stage_start = self.round;
        self.pair_round(true);
        debug!(round = self.round, players = count, "tournament started");
        Ok(())
    }

    pub fn next(&mut self) -> Result<RoundOutcome, EngineError> {
        match self.status {
            Status::Setup => return Err(EngineError::NotStarted),
            Status::Complete => return Err(EngineError::Complete),
            Status::StageOne | Status::StageTwo => {}
        }
        let remaining = self
            .matches
            .iter()
            .filter(|m| m.round() == self.round && m.is_active())
            .count();
        if remaining > 0 {
            return Err(EngineError::RoundIncomplete {
                round: self.round,
                remaining,
            });
        }

        let format = self.current_format();
        if format.is_elimination() {
            self.eliminate(format);
            if self.active_count() <= 1 {
                self.status = Status::Complete;
                return Ok(RoundOutcome::Complete);
            }
            self.round += 1;
            self.pair_round(false);
            return Ok(RoundOutcome::Paired(self.round));
        }

        let played = self.round.saturating_sub(self.stage_start) + 1;
        if played < self.settings.stage_one.rounds {
            self.round += 1;
            self.pair_round(false);
            return Ok(RoundOutcome::Paired(self.round));
        }
        if self.settings.stage_two.format.is_none() || !self.advance_to_stage_two() {
            self.status = Status::Complete;
            return Ok(RoundOutcome::Complete);
        }
        self.status = Status::StageTwo;
        self.round += 1;
        self.stage_start = self.round;
        self.pair_round(true);
        Ok(RoundOutcome::StageTwoStarted(self.round))
    }

    pub fn enter_result(
        &mut self,
        match_id: &str,
        win: u32,
        loss: u32,
        draw: u32,
    ) -> Result<(), EngineError> {
        let best_of = self.settings.scoring.best_of;
        let m = self.playable_match(match_id)?;
        let games = total_games(win, loss, draw)
            .ok_or(EngineError::ResultOutOfRange { games: u32::MAX, best_of })?;
        if games > best_of {
            return Err(EngineError::ResultOutOfRange { games, best_of });
        }
        m.record(win, loss, draw);
        debug!(match_id, win, loss, draw, "result entered");
        Ok(())
    }

    pub fn clear_result(&mut self, match_id: &str) -> Result<(), EngineError> {
        self.playable_match(match_id)?.clear();
        debug!(match_id, "result cleared");
        Ok(())
    }

    pub fn standings(&self) -> Vec<Standing> {
        standings::compute(&self.players, &self.matches, &self.settings.scoring)
    }

    /// Sanity checks applied to documents loaded from disk.
    pub(crate) fn check_integrity(&self) -> Result<(), EngineError> {
        self.settings.validate()?;
        let mut ids = HashSet::new();
        for p in &self.players {
            if !ids.insert(p.id()) {
                return Err(EngineError::InvalidDocument(format!(
                    "duplicate player id {}",
                    p.id()
                )));
            }
        }
        if let Some(id) = ids.iter().filter_map(|id| id.parse::<u32>().ok()).max() {
            if id >= self.next_player_id {
                return Err(EngineError::InvalidDocument(format!(
                    "next player id {} is not above existing id {}",
                    self.next_player_id, id
                )));
            }
        }
        if self.stage_start > self.round {
            return Err(EngineError::InvalidDocument(format!(
                "stage start {} is after round {}",
                self.stage_start, self.round
            )));
        }
        let best_of = self.settings.scoring.best_of;
        let mut match_ids = HashSet::new();
        for m in &self.matches {
            if !match_ids.insert(m.id()) {
                return Err(EngineError::InvalidDocument(format!(
                    "duplicate match id {}",
                    m.id()
                )));
            }
            if let Some(n) = m.id().strip_prefix('m').and_then(|n| n.parse::<u32>().ok()) {
                if n >= self.next_match_id {
                    return Err(EngineError::InvalidDocument(format!(
                        "next match id {} is not above existing id {}",
                        self.next_match_id,
                        m.id()
                    )));
                }
            }
            if m.round() > self.round {
                return Err(EngineError::InvalidDocument(format!(
                    "match {} is in round {} after the current round {}",
                    m.id(),
                    m.round(),
                    self.round
                )));
            }
            let p1 = m.player1();
            let games = total_games(p1.win, p1.loss, p1.draw);
            if !m.is_bye() && games.is_none_or(|g| g > best_of) {
                return Err(EngineError::InvalidDocument(format!(
                    "match {} records more than {} games",
                    m.id(),
                    best_of
                )));
            }
            for slot in [m.player1(), m.player2()] {
                if let Some(id) = slot.id.as_deref() {
                    if !ids.contains(id) {
                        return Err(EngineError::InvalidDocument(format!(
                            "match {} refers to unknown player {}",
                            m.id(),
                            id
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    fn playable_match(&mut self, match_id: &str) -> Result<&mut Match, EngineError> {
        match self.status {
            Status::Setup => return Err(EngineError::NotStarted),
            Status::Complete => return Err(EngineError::Complete),
            Status::StageOne | Status::StageTwo => {}
        }
        let locked = self.current_format().is_elimination();
        let round = self.round;
        let m = self
            .matches
            .iter_mut()
            .find(|m| m.id() == match_id)
            .ok_or_else(|| EngineError::UnknownMatch(match_id.to_string()))?;
        if m.is_bye() {
            return Err(EngineError::ByeMatch(match_id.to_string()));
        }
        if locked && m.round() != round {
            return Err(EngineError::RoundLocked(m.round()));
        }
        Ok(m)
    }

    fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    fn eliminate(&mut self, format: Format) {
        let lives = if format == Format::DoubleElimination { 2 } else { 1 };
        let stage_start = self.stage_start;
        let out: Vec<String> = self
            .players
            .iter()
            .filter(|p| p.is_active())
            .filter(|p| {
                let losses = self
                    .matches
                    .iter()
                    .filter(|m| m.round() >= stage_start)
                    .filter(|m| m.loser() == Some(p.id()))
                    .count();
                losses >= lives
            })
            .map(|p| p.id().to_string())
            .collect();
        for p in self.players.iter_mut().filter(|p| out.iter().any(|id| id == p.id())) {
            p.deactivate();
        }
    }

    /// Applies the stage two cut. Returns false when fewer than two players qualify.
    fn advance_to_stage_two(&mut self) -> bool {
        let advance = self.settings.stage_two.advance.clone();
        let table: Vec<Standing> = self
            .standings()
            .into_iter()
            .filter(|s| s.player.is_active())
            .collect();
        let qualified: Vec<String> = table
            .iter()
            .enumerate()
            .filter(|(rank, s)| match advance.method {
                AdvanceMethod::Points => s.match_points >= advance.value as f64,
                AdvanceMethod::Rank => (*rank as i64) < advance.value,
                AdvanceMethod::All => true,
            })
            .map(|(_, s)| s.player.id().to_string())
            .collect();
        if qualified.len() < 2 {
            return false;
        }
        // Stage two seeds follow the stage one ranking.
        let mut seeded: Vec<Player> = Vec::with_capacity(self.players.len());
        for id in &qualified {
            if let Some(p) = self.players.iter().find(|p| p.id() == id) {
                seeded.push(p.clone());
            }
        }
        for p in &self.players {
            if !qualified.iter().any(|id| id == p.id()) {
                let mut dropped = p.clone();
                dropped.deactivate();
                seeded.push(dropped);
            }
        }
        self.players = seeded;
        true
    }

    /// Placeholder pairing: adjacent active players in seed or standings
    /// order, with a bye for the odd player out.
    fn pair_round(&mut self, by_seed: bool) {
        let order: Vec<String> = if by_seed {
            self.players
                .iter()
                .filter(|p| p.is_active())
                .map(|p| p.id().to_string())
                .collect()
        } else {
            self.standings()
                .into_iter()
                .filter(|s| s.player.is_active())
                .map(|s| s.player.id().to_string())
                .collect()
        };
        let mut number = 1;
        for pair in order.chunks(2) {
            let id = format!("m{}", self.next_match_id);
            self.next_match_id += 1;
            let m = match pair {
                [a, b] => Match::paired(id, self.round, number, a, b),
                [a] => Match::bye(id, self.round, number, a),
                _ => continue,
            };
            self.matches.push(m);
            number += 1;
        }
        debug!(round = self.round, matches = number - 1, "round paired");
    }
}

fn total_games(win: u32, loss: u32, draw: u32) -> Option<u32> {
    win.checked_add(loss)?.checked_add(draw)
}

fn ceil_log2(n: usize) -> u32 {
    if n <= 1 {
        1
    } else {
        usize::BITS - (n - 1).leading_zeros()
    }
}

fn round_robin_rounds(n: usize) -> u32 {
    if n % 2 == 0 {
        (n - 1) as u32
    } else {
        n as u32
    }
}
