//! Read-only renderings of the active tournament.

use grandprix_engine::matches::{Match, MatchSlot};
use grandprix_engine::settings::Tiebreak;
use grandprix_engine::standings::{Standing, TiebreakValues};
use grandprix_engine::tournament::Tournament;
use serde_json::Value;

use crate::error::CliError;
use crate::formatters::{Table, format_number};

/// A computed standings column. Configured tiebreaks map to zero, one or two
/// of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiebreakColumn {
    MedianBuchholz,
    Solkoff,
    SonnebornBerger,
    Cumulative,
    OppCumulative,
    GameWinPct,
    OppGameWinPct,
    OppMatchWinPct,
    OppOppMatchWinPct,
}

impl TiebreakColumn {
    pub fn legend(&self) -> &'static str {
        match self {
            TiebreakColumn::MedianBuchholz => "Median Buchholz",
            TiebreakColumn::Solkoff => "Solkoff",
            TiebreakColumn::SonnebornBerger => "Sonneborn-Berger",
            TiebreakColumn::Cumulative => "Cumulative",
            TiebreakColumn::OppCumulative => "Opponent's Cumulative",
            TiebreakColumn::GameWinPct => "Game Win Percentage",
            TiebreakColumn::OppGameWinPct => "Opponent's Game Win Percentage",
            TiebreakColumn::OppMatchWinPct => "Opponent's Match Win Percentage",
            TiebreakColumn::OppOppMatchWinPct => "Opponent's Opponent's Match Win Percentage",
        }
    }

    pub fn value(&self, values: &TiebreakValues) -> f64 {
        match self {
            TiebreakColumn::MedianBuchholz => values.median_buchholz,
            TiebreakColumn::Solkoff => values.solkoff,
            TiebreakColumn::SonnebornBerger => values.sonneborn_berger,
            TiebreakColumn::Cumulative => values.cumulative,
            TiebreakColumn::OppCumulative => values.opp_cumulative,
            TiebreakColumn::GameWinPct => values.game_win_pct,
            TiebreakColumn::OppGameWinPct => values.opp_game_win_pct,
            TiebreakColumn::OppMatchWinPct => values.opp_match_win_pct,
            TiebreakColumn::OppOppMatchWinPct => values.opp_opp_match_win_pct,
        }
    }
}

/// Columns for the configured tiebreaks, in configured order.
///
/// ```rust
/// use grandprix_engine::settings::Tiebreak;
/// # use grandprix_cli::views::{tiebreak_columns, TiebreakColumn};
///
/// let columns = tiebreak_columns(&[Tiebreak::Versus, Tiebreak::Cumulative, Tiebreak::Solkoff]);
/// assert_eq!(
///     columns,
///     vec![
///         TiebreakColumn::Cumulative,
///         TiebreakColumn::OppCumulative,
///         TiebreakColumn::Solkoff,
///     ]
/// );
/// ```
pub fn tiebreak_columns(tiebreaks: &[Tiebreak]) -> Vec<TiebreakColumn> {
    tiebreaks
        .iter()
        .flat_map(|tb| match tb {
            Tiebreak::MedianBuchholz => vec![TiebreakColumn::MedianBuchholz],
            Tiebreak::Solkoff => vec![TiebreakColumn::Solkoff],
            Tiebreak::SonnebornBerger => vec![TiebreakColumn::SonnebornBerger],
            Tiebreak::Cumulative => vec![TiebreakColumn::Cumulative, TiebreakColumn::OppCumulative],
            Tiebreak::Versus => vec![],
            Tiebreak::GameWinPercentage => vec![TiebreakColumn::GameWinPct],
            Tiebreak::OpponentGameWinPercentage => vec![TiebreakColumn::OppGameWinPct],
            Tiebreak::OpponentMatchWinPercentage => vec![TiebreakColumn::OppMatchWinPct],
            Tiebreak::OpponentOpponentMatchWinPercentage => vec![TiebreakColumn::OppOppMatchWinPct],
        })
        .collect()
}

pub fn players_table(tournament: &Tournament, active_only: bool) -> Table {
    let mut table = Table::new(["ID", "Name", "Active"]);
    for p in tournament
        .players()
        .iter()
        .filter(|p| !active_only || p.is_active())
    {
        table.push_row([p.id().to_string(), p.name().to_string(), p.is_active().to_string()]);
    }
    table
}

/// Standings table followed by one legend line per tiebreak column.
pub fn standings_report(tournament: &Tournament, active_only: bool) -> String {
    let columns = tiebreak_columns(&tournament.scoring().tiebreaks);
    let mut heading = vec!["Rank".to_string(), "Name".to_string(), "Points".to_string()];
    heading.extend((1..=columns.len()).map(|i| format!("TB#{}", i)));

    let mut table = Table::new(heading);
    let standings = tournament.standings();
    let shown = standings
        .iter()
        .filter(|s| !active_only || s.player.is_active());
    for (rank, s) in shown.enumerate() {
        let mut row = vec![
            (rank + 1).to_string(),
            s.player.name().to_string(),
            format_number(s.match_points),
        ];
        row.extend(columns.iter().map(|c| format_number(c.value(&s.tiebreaks))));
        table.push_row(row);
    }

    let mut out = table.render();
    for (i, column) in columns.iter().enumerate() {
        out.push_str(&format!("TB#{} - {}\n", i + 1, column.legend()));
    }
    out
}

pub fn matches_table(tournament: &Tournament, round: u32, active_only: bool) -> Table {
    let mut table = Table::new(["Match", "Player 1", "Player 2", "Result", "Active"])
        .with_title(format!("Round {}", round));
    for m in tournament
        .matches()
        .iter()
        .filter(|m| m.round() == round && (!active_only || m.is_active()))
    {
        table.push_row([
            m.number().to_string(),
            slot_name(tournament, m.player1()),
            slot_name(tournament, m.player2()),
            result_text(m),
            m.is_active().to_string(),
        ]);
    }
    table
}

fn slot_name(tournament: &Tournament, slot: &MatchSlot) -> String {
    match slot.id.as_deref() {
        None => "Bye".to_string(),
        Some(id) => tournament
            .player(id)
            .map(|p| p.name().to_string())
            .unwrap_or_else(|| id.to_string()),
    }
}

/// `w1-w2`, with `-d` appended only when there were draws.
pub fn result_text(m: &Match) -> String {
    let (p1, p2) = (m.player1(), m.player2());
    if p1.draw > 0 {
        format!("{}-{}-{}", p1.win, p2.win, p1.draw)
    } else {
        format!("{}-{}", p1.win, p2.win)
    }
}

/// Tournament document with the player and match lists replaced by counts.
pub fn tournament_details(tournament: &Tournament) -> Result<String, CliError> {
    let mut value = serde_json::to_value(tournament)?;
    if let Some(fields) = value.as_object_mut() {
        fields.insert("players".into(), Value::from(tournament.players().len()));
        fields.insert("matches".into(), Value::from(tournament.matches().len()));
    }
    Ok(serde_json::to_string_pretty(&value)?)
}

pub fn standing_details(standing: &Standing) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(standing)?)
}

pub fn match_details(m: &Match) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(m)?)
}
