use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use crate::matches::{Match, Outcome};
use crate::player::Player;
use crate::settings::{Scoring, Tiebreak};

/// Opponent percentages are floored so one weak opponent can not sink a score.
const PERCENTAGE_FLOOR: f64 = 1.0 / 3.0;

/// Every tiebreak the engine computes, whether or not it is configured.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TiebreakValues {
    pub median_buchholz: f64,
    pub solkoff: f64,
    pub sonneborn_berger: f64,
    pub cumulative: f64,
    pub opp_cumulative: f64,
    pub game_win_pct: f64,
    pub opp_game_win_pct: f64,
    pub opp_match_win_pct: f64,
    pub opp_opp_match_win_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub player: Player,
    pub match_points: f64,
    pub matches_played: u32,
    pub games_played: u32,
    pub match_win_pct: f64,
    pub tiebreaks: TiebreakValues,
}

#[derive(Default)]
struct Tally {
    match_points: f64,
    matches: u32,
    games: u32,
    game_points: f64,
    points_by_round: BTreeMap<u32, f64>,
    opponents: Vec<String>,
    /// (opponent, points earned against them) for Sonneborn-Berger.
    results: Vec<(String, f64)>,
}

/// Ranks players by match points, then by the configured tiebreaks in order.
pub fn compute(players: &[Player], matches: &[Match], scoring: &Scoring) -> Vec<Standing> {
    let mut tallies: HashMap<&str, Tally> = players
        .iter()
        .map(|p| (p.id(), Tally::default()))
        .collect();

    for m in matches.iter().filter(|m| !m.is_active()) {
        if m.is_bye() {
            if let Some(tally) = m.player1().id.as_deref().and_then(|id| tallies.get_mut(id)) {
                tally.match_points += scoring.bye;
                tally.matches += 1;
                *tally.points_by_round.entry(m.round()).or_default() += scoring.bye;
            }
            continue;
        }
        let Some(outcome) = m.outcome() else { continue };
        for (id, won, lost) in [
            (m.player1().id.as_deref(), Outcome::Player1, Outcome::Player2),
            (m.player2().id.as_deref(), Outcome::Player2, Outcome::Player1),
        ] {
            let Some(id) = id else { continue };
            let Some((own, opp)) = m.slots_for(id) else { continue };
            let opponent = opp.id.clone().unwrap_or_default();
            let Some(tally) = tallies.get_mut(id) else { continue };
            let (points, sb_share) = if outcome == won {
                (scoring.win, 1.0)
            } else if outcome == lost {
                (scoring.loss, 0.0)
            } else {
                (scoring.draw, 0.5)
            };
            tally.match_points += points;
            tally.matches += 1;
            tally.games += own.win + own.loss + own.draw;
            tally.game_points += own.win as f64 + own.draw as f64 * 0.5;
            *tally.points_by_round.entry(m.round()).or_default() += points;
            tally.opponents.push(opponent.clone());
            tally.results.push((opponent, sb_share));
        }
    }

    let match_win_pct = |t: &Tally| {
        if t.matches == 0 || scoring.win <= 0.0 {
            0.0
        } else {
            t.match_points / (t.matches as f64 * scoring.win)
        }
    };
    let game_win_pct = |t: &Tally| {
        if t.games == 0 {
            0.0
        } else {
            t.game_points / t.games as f64
        }
    };
    let cumulative = |t: &Tally| {
        let mut running = 0.0;
        let mut total = 0.0;
        for points in t.points_by_round.values() {
            running += points;
            total += running;
        }
        total
    };

    // First pass: values that only depend on a player's own results.
    let mut base: HashMap<&str, (f64, f64, f64, f64)> = HashMap::new();
    for (id, t) in &tallies {
        base.insert(
            *id,
            (t.match_points, match_win_pct(t), game_win_pct(t), cumulative(t)),
        );
    }

    let mean = |values: Vec<f64>| {
        if values.is_empty() {
            0.0
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        }
    };
    let opp_match_pct = |t: &Tally| {
        mean(
            t.opponents
                .iter()
                .filter_map(|o| base.get(o.as_str()))
                .map(|b| b.1.max(PERCENTAGE_FLOOR))
                .collect(),
        )
    };

    let mut standings: Vec<Standing> = players
        .iter()
        .map(|player| {
            let t = &tallies[player.id()];
            let opp_points: Vec<f64> = t
                .opponents
                .iter()
                .filter_map(|o| base.get(o.as_str()))
                .map(|b| b.0)
                .collect();
            let solkoff: f64 = opp_points.iter().sum();
            let median_buchholz = if opp_points.len() > 2 {
                let max = opp_points.iter().cloned().fold(f64::MIN, f64::max);
                let min = opp_points.iter().cloned().fold(f64::MAX, f64::min);
                solkoff - max - min
            } else {
                solkoff
            };
            let sonneborn_berger: f64 = t
                .results
                .iter()
                .filter_map(|(o, share)| base.get(o.as_str()).map(|b| b.0 * share))
                .sum();
            let opp_opp_match_win_pct = mean(
                t.opponents
                    .iter()
                    .filter_map(|o| tallies.get(o.as_str()))
                    .map(opp_match_pct)
                    .collect(),
            );
            let (match_points, mwp, gwp, cumulative) = base[player.id()];
            Standing {
                player: player.clone(),
                match_points,
                matches_played: t.matches,
                games_played: t.games,
                match_win_pct: mwp,
                tiebreaks: TiebreakValues {
                    median_buchholz,
                    solkoff,
                    sonneborn_berger,
                    cumulative,
                    opp_cumulative: mean(
                        t.opponents
                            .iter()
                            .filter_map(|o| base.get(o.as_str()))
                            .map(|b| b.3)
                            .collect(),
                    ),
                    game_win_pct: gwp,
                    opp_game_win_pct: mean(
                        t.opponents
                            .iter()
                            .filter_map(|o| base.get(o.as_str()))
                            .map(|b| b.2.max(PERCENTAGE_FLOOR))
                            .collect(),
                    ),
                    opp_match_win_pct: opp_match_pct(t),
                    opp_opp_match_win_pct,
                },
            }
        })
        .collect();

    standings.sort_by(|a, b| desc(a.match_points, b.match_points));
    let groups = split_ties(standings, |a, b| {
        desc(a.match_points, b.match_points) == Ordering::Equal
    });
    groups
        .into_iter()
        .flat_map(|group| break_ties(group, &scoring.tiebreaks, matches))
        .collect()
}

/// Orders a group tied on everything so far by the first tiebreak, then
/// recurses into whatever is still tied. Versus only separates a pair; a
/// larger group can hold a cycle of direct wins, so it falls through to the
/// next tiebreak. Stable sorting keeps seed order as the last resort.
fn break_ties(
    mut group: Vec<Standing>,
    tiebreaks: &[Tiebreak],
    matches: &[Match],
) -> Vec<Standing> {
    let Some((&first, rest)) = tiebreaks.split_first() else {
        return group;
    };
    if group.len() < 2 {
        return group;
    }
    if first == Tiebreak::Versus {
        if group.len() == 2 {
            match head_to_head(group[0].player.id(), group[1].player.id(), matches) {
                Ordering::Greater => group.swap(0, 1),
                Ordering::Less => {}
                Ordering::Equal => return break_ties(group, rest, matches),
            }
            return group;
        }
        return break_ties(group, rest, matches);
    }
    group.sort_by(|a, b| compare_tiebreak(first, a, b));
    let mut ranked = Vec::with_capacity(group.len());
    for tied in split_ties(group, |a, b| compare_tiebreak(first, a, b) == Ordering::Equal) {
        ranked.extend(break_ties(tied, rest, matches));
    }
    ranked
}

/// Splits a sorted list into runs of adjacent equal entries.
fn split_ties<F>(sorted: Vec<Standing>, same: F) -> Vec<Vec<Standing>>
where
    F: Fn(&Standing, &Standing) -> bool,
{
    let mut runs: Vec<Vec<Standing>> = Vec::new();
    for s in sorted {
        match runs.last_mut() {
            Some(run) if same(&run[run.len() - 1], &s) => run.push(s),
            _ => runs.push(vec![s]),
        }
    }
    runs
}

fn desc(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

fn compare_tiebreak(tb: Tiebreak, a: &Standing, b: &Standing) -> Ordering {
    let (x, y) = (&a.tiebreaks, &b.tiebreaks);
    match tb {
        Tiebreak::MedianBuchholz => desc(x.median_buchholz, y.median_buchholz),
        Tiebreak::Solkoff => desc(x.solkoff, y.solkoff),
        Tiebreak::SonnebornBerger => desc(x.sonneborn_berger, y.sonneborn_berger),
        Tiebreak::Cumulative => desc(x.cumulative, y.cumulative)
            .then_with(|| desc(x.opp_cumulative, y.opp_cumulative)),
        Tiebreak::Versus => Ordering::Equal,
        Tiebreak::GameWinPercentage => desc(x.game_win_pct, y.game_win_pct),
        Tiebreak::OpponentGameWinPercentage => desc(x.opp_game_win_pct, y.opp_game_win_pct),
        Tiebreak::OpponentMatchWinPercentage => desc(x.opp_match_win_pct, y.opp_match_win_pct),
        Tiebreak::OpponentOpponentMatchWinPercentage => {
            desc(x.opp_opp_match_win_pct, y.opp_opp_match_win_pct)
        }
    }
}

/// Orders `a` first when they won more of their direct encounters with `b`.
fn head_to_head(a: &str, b: &str, matches: &[Match]) -> Ordering {
    let mut balance = 0i32;
    for m in matches.iter().filter(|m| m.involves(a) && m.involves(b)) {
        match m.loser() {
            Some(loser) if loser == b => balance += 1,
            Some(loser) if loser == a => balance -= 1,
            _ => {}
        }
    }
    0.cmp(&balance)
}
