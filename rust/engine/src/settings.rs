use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::errors::EngineError;

/// Pairing format used by a tournament stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    SingleElimination,
    DoubleElimination,
    Stepladder,
    Swiss,
    RoundRobin,
    DoubleRoundRobin,
}

impl Format {
    /// Formats offered for stage one, in menu order.
    pub const STAGE_ONE: [Format; 6] = [
        Format::SingleElimination,
        Format::DoubleElimination,
        Format::Stepladder,
        Format::Swiss,
        Format::RoundRobin,
        Format::DoubleRoundRobin,
    ];

    /// Formats offered for stage two, in menu order.
    pub const STAGE_TWO: [Format; 3] = [
        Format::SingleElimination,
        Format::DoubleElimination,
        Format::Stepladder,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Format::SingleElimination => "Single elimination",
            Format::DoubleElimination => "Double elimination",
            Format::Stepladder => "Stepladder",
            Format::Swiss => "Swiss",
            Format::RoundRobin => "Round-Robin",
            Format::DoubleRoundRobin => "Double Round-Robin",
        }
    }

    /// Bracket formats where players drop out instead of accumulating rounds.
    pub fn is_elimination(&self) -> bool {
        matches!(
            self,
            Format::SingleElimination | Format::DoubleElimination | Format::Stepladder
        )
    }

    /// Multi-round formats that rank every player and can feed a second stage.
    pub fn supports_advancement(&self) -> bool {
        !self.is_elimination()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sorting {
    Ascending,
    Descending,
    None,
}

impl Sorting {
    pub const ALL: [Sorting; 3] = [Sorting::Ascending, Sorting::Descending, Sorting::None];

    pub fn label(&self) -> &'static str {
        match self {
            Sorting::Ascending => "Ascending",
            Sorting::Descending => "Descending",
            Sorting::None => "None",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvanceMethod {
    Points,
    Rank,
    All,
}

impl AdvanceMethod {
    pub const ALL: [AdvanceMethod; 3] = [AdvanceMethod::Points, AdvanceMethod::Rank, AdvanceMethod::All];

    pub fn label(&self) -> &'static str {
        match self {
            AdvanceMethod::Points => "Points",
            AdvanceMethod::Rank => "Rank",
            AdvanceMethod::All => "All",
        }
    }
}

/// Secondary ranking criteria, in the order they are offered for selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tiebreak {
    #[serde(rename = "median buchholz")]
    MedianBuchholz,
    #[serde(rename = "solkoff")]
    Solkoff,
    #[serde(rename = "sonneborn berger")]
    SonnebornBerger,
    #[serde(rename = "cumulative")]
    Cumulative,
    #[serde(rename = "versus")]
    Versus,
    #[serde(rename = "game win percentage")]
    GameWinPercentage,
    #[serde(rename = "opponent game win percentage")]
    OpponentGameWinPercentage,
    #[serde(rename = "opponent match win percentage")]
    OpponentMatchWinPercentage,
    #[serde(rename = "opponent opponent match win percentage")]
    OpponentOpponentMatchWinPercentage,
}

impl Tiebreak {
    pub const ALL: [Tiebreak; 9] = [
        Tiebreak::MedianBuchholz,
        Tiebreak::Solkoff,
        Tiebreak::SonnebornBerger,
        Tiebreak::Cumulative,
        Tiebreak::Versus,
        Tiebreak::GameWinPercentage,
        Tiebreak::OpponentGameWinPercentage,
        Tiebreak::OpponentMatchWinPercentage,
        Tiebreak::OpponentOpponentMatchWinPercentage,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tiebreak::MedianBuchholz => "Median Buchholz",
            Tiebreak::Solkoff => "Solkoff",
            Tiebreak::SonnebornBerger => "Sonneborn-Berger",
            Tiebreak::Cumulative => "Cumulative",
            Tiebreak::Versus => "Versus",
            Tiebreak::GameWinPercentage => "Game win percentage",
            Tiebreak::OpponentGameWinPercentage => "Opponent game win percentage",
            Tiebreak::OpponentMatchWinPercentage => "Opponent match win percentage",
            Tiebreak::OpponentOpponentMatchWinPercentage => {
                "Opponent opponent match win percentage"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageOne {
    pub format: Format,
    pub consolation: bool,
    pub initial_round: u32,
    /// Zero means no maximum.
    pub max_players: u32,
    /// Zero means the engine computes the count when the tournament starts.
    pub rounds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advance {
    pub method: AdvanceMethod,
    pub value: i64,
}

impl Default for Advance {
    fn default() -> Self {
        Self {
            method: AdvanceMethod::All,
            value: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageTwo {
    pub format: Option<Format>,
    pub consolation: bool,
    pub advance: Advance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scoring {
    pub best_of: u32,
    pub win: f64,
    pub draw: f64,
    pub loss: f64,
    pub bye: f64,
    pub tiebreaks: Vec<Tiebreak>,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            best_of: 1,
            win: 1.0,
            draw: 0.5,
            loss: 0.0,
            bye: 1.0,
            tiebreaks: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub path: PathBuf,
}

/// Everything needed to create a tournament.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSettings {
    pub colored: bool,
    pub sorting: Sorting,
    pub stage_one: StageOne,
    pub stage_two: StageTwo,
    pub scoring: Scoring,
    pub meta: Meta,
}

impl Default for TournamentSettings {
    fn default() -> Self {
        Self {
            colored: false,
            sorting: Sorting::None,
            stage_one: StageOne {
                format: Format::SingleElimination,
                consolation: false,
                initial_round: 1,
                max_players: 0,
                rounds: 0,
            },
            stage_two: StageTwo::default(),
            scoring: Scoring::default(),
            meta: Meta::default(),
        }
    }
}

impl TournamentSettings {
    /// Rejects parameter combinations the engine can not run.
    pub fn validate(&self) -> Result<(), EngineError> {
        let invalid = |msg: &str| Err(EngineError::InvalidSettings(msg.to_string()));

        if self.scoring.best_of == 0 {
            return invalid("best of must be at least 1");
        }
        let points = [
            self.scoring.win,
            self.scoring.draw,
            self.scoring.loss,
            self.scoring.bye,
        ];
        if points.iter().any(|p| !p.is_finite()) {
            return invalid("point values must be finite numbers");
        }
        if let Some(format) = self.stage_two.format {
            if !self.stage_one.format.supports_advancement() {
                return invalid("a second stage requires a Swiss or round-robin first stage");
            }
            if format.supports_advancement() {
                return invalid("stage two must be an elimination format");
            }
            match self.stage_two.advance.method {
                AdvanceMethod::Points if self.stage_two.advance.value < 0 => {
                    return invalid("minimum points to advance can not be negative");
                }
                AdvanceMethod::Rank if self.stage_two.advance.value < 2 => {
                    return invalid("at least 2 players must advance to stage two");
                }
                _ => {}
            }
        }
        if !self.scoring.tiebreaks.is_empty() && !self.stage_one.format.supports_advancement() {
            return invalid("tiebreaks are only used by Swiss and round-robin formats");
        }
        let mut seen = Vec::with_capacity(self.scoring.tiebreaks.len());
        for tb in &self.scoring.tiebreaks {
            if seen.contains(tb) {
                return Err(EngineError::InvalidSettings(format!(
                    "tiebreak {} chosen more than once",
                    tb.label()
                )));
            }
            seen.push(*tb);
        }
        Ok(())
    }
}
