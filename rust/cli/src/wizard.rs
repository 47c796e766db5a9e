//! Guided tournament creation.
//!
//! The wizard only collects answers. It never touches the session; the `tn`
//! handler decides what to do with the settings it returns.

use grandprix_engine::settings::{
    Advance, AdvanceMethod, Format, Meta, Scoring, Sorting, StageOne, StageTwo, Tiebreak,
    TournamentSettings,
};
use std::path::Path;

use crate::console::Console;
use crate::error::CliError;
use crate::persistence::tournament_path;

const DEFAULT_NAME: &str = "Tournament";

/// Everything the wizard collected.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTournament {
    pub name: String,
    pub settings: TournamentSettings,
}

/// Runs the full prompt sequence. End of input aborts with
/// [`CliError::Interrupted`].
pub fn run_wizard(console: &mut Console<'_>, save_dir: &Path) -> Result<NewTournament, CliError> {
    let name = console.ask_text("Name of the tournament", DEFAULT_NAME)?;

    let format = pick(console, &Format::STAGE_ONE, Format::label, "Stage one format?")?;
    let consolation = if format == Format::SingleElimination {
        console.confirm("Consolation match for third place?")?
    } else {
        false
    };
    let initial_round = console.ask_number("Initial round number", 1u32)?;
    let rounds = if format == Format::Swiss {
        console.ask_number("Number of rounds (0 to be determined by number of players)", 0u32)?
    } else {
        0
    };
    let max_players = console.ask_number("Maximum number of players (0 for no maximum)", 0u32)?;
    let colored = if format == Format::Swiss {
        console.confirm("Are players assigned colors?")?
    } else {
        false
    };
    let sorting = pick(console, &Sorting::ALL, Sorting::label, "Are players sorted by a value?")?;

    let stage_two = if format.supports_advancement() {
        ask_stage_two(console)?
    } else {
        StageTwo::default()
    };

    let scoring = Scoring {
        win: console.ask_number("Number of points for a win", 1.0f64)?,
        draw: console.ask_number("Number of points for a draw", 0.5f64)?,
        loss: console.ask_number("Number of points for a loss", 0.0f64)?,
        bye: console.ask_number("Number of points for a bye", 1.0f64)?,
        best_of: console.ask_number("Maximum number of games in a match", 1u32)?,
        tiebreaks: if format.supports_advancement() {
            ask_tiebreaks(console)?
        } else {
            Vec::new()
        },
    };

    let settings = TournamentSettings {
        colored,
        sorting,
        stage_one: StageOne {
            format,
            consolation,
            initial_round,
            max_players,
            rounds,
        },
        stage_two,
        scoring,
        meta: Meta {
            path: tournament_path(save_dir, &name),
        },
    };
    Ok(NewTournament { name, settings })
}

fn ask_stage_two(console: &mut Console<'_>) -> Result<StageTwo, CliError> {
    let labels: Vec<&str> = Format::STAGE_TWO.iter().map(Format::label).collect();
    let Some(index) = console.select(&labels, "Stage two format?", Some("None"))? else {
        return Ok(StageTwo::default());
    };
    let format = Format::STAGE_TWO[index];
    let consolation = if format == Format::SingleElimination {
        console.confirm("Consolation match for third place?")?
    } else {
        false
    };
    let method = pick(
        console,
        &AdvanceMethod::ALL,
        AdvanceMethod::label,
        "How to determine who makes stage two?",
    )?;
    let value = match method {
        AdvanceMethod::Points => console.ask_number("Minimum number of points to make stage two", 0i64)?,
        AdvanceMethod::Rank => console.ask_number("Lowest rank to make stage two", 0i64)?,
        AdvanceMethod::All => 0,
    };
    Ok(StageTwo {
        format: Some(format),
        consolation,
        advance: Advance { method, value },
    })
}

/// Picks tiebreaks one at a time from a shrinking list until the user stops
/// or nothing is left. Pick order is priority order.
fn ask_tiebreaks(console: &mut Console<'_>) -> Result<Vec<Tiebreak>, CliError> {
    let mut remaining = Tiebreak::ALL.to_vec();
    let mut chosen = Vec::new();
    while !remaining.is_empty() {
        let labels: Vec<&str> = remaining.iter().map(Tiebreak::label).collect();
        let question = format!("Pick tiebreaker #{}", chosen.len() + 1);
        match console.select(&labels, &question, Some("Selection complete"))? {
            Some(index) => chosen.push(remaining.remove(index)),
            None => break,
        }
    }
    Ok(chosen)
}

/// Menu without a cancel entry.
fn pick<T: Copy>(
    console: &mut Console<'_>,
    options: &[T],
    label: fn(&T) -> &'static str,
    question: &str,
) -> Result<T, CliError> {
    let labels: Vec<&str> = options.iter().map(label).collect();
    match console.select(&labels, question, None)? {
        Some(index) => Ok(options[index]),
        None => Err(CliError::InvalidInput(format!("{} needs an answer", question))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn wizard(answers: &[&str]) -> Result<NewTournament, CliError> {
        let mut input = Cursor::new(format!("{}\n", answers.join("\n")).into_bytes());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut console = Console::new(&mut input, &mut out, &mut err);
        run_wizard(&mut console, Path::new("saves"))
    }

    #[test]
    fn single_elimination_skips_stage_two_and_tiebreaks() {
        let t = wizard(&[
            "Cup", // name
            "1",   // single elimination
            "n",   // consolation
            "",    // initial round
            "",    // max players
            "3",   // sorting: none
            "", "", "", "", "", // scoring defaults
        ])
        .unwrap();
        assert_eq!(t.name, "Cup");
        assert!(!t.settings.stage_one.consolation);
        assert_eq!(t.settings.stage_two.format, None);
        assert!(t.settings.scoring.tiebreaks.is_empty());
        assert_eq!(t.settings.meta.path, Path::new("saves").join("Cup.json"));
    }

    #[test]
    fn swiss_with_computed_rounds_and_ordered_tiebreaks() {
        let t = wizard(&[
            "",  // default name
            "4", // swiss
            "",  // initial round
            "0", // rounds computed
            "16", "y", // max players, colored
            "2", // descending
            "1", // stage two: single elimination
            "y", // consolation
            "2", "4", // rank, top 4
            "3", "1", "0", "0", "3", // win/draw/loss/bye/best-of
            "3", // Sonneborn-Berger
            "1", // Median Buchholz
            "0", // done
        ])
        .unwrap();
        let s = &t.settings;
        assert_eq!(t.name, "Tournament");
        assert_eq!(s.stage_one.format, Format::Swiss);
        assert_eq!(s.stage_one.rounds, 0);
        assert_eq!(s.stage_one.max_players, 16);
        assert!(s.colored);
        assert_eq!(s.sorting, Sorting::Descending);
        assert_eq!(s.stage_two.format, Some(Format::SingleElimination));
        assert!(s.stage_two.consolation);
        assert_eq!(s.stage_two.advance, Advance { method: AdvanceMethod::Rank, value: 4 });
        assert_eq!(s.scoring.win, 3.0);
        assert_eq!(s.scoring.best_of, 3);
        assert_eq!(
            s.scoring.tiebreaks,
            vec![Tiebreak::SonnebornBerger, Tiebreak::MedianBuchholz]
        );
    }

    #[test]
    fn advancing_all_forces_zero_threshold() {
        let t = wizard(&[
            "RR", "5", "", "", "3", // round robin, defaults, no sorting
            "3", "3", // stepladder, advance all
            "", "", "", "", "", "0",
        ])
        .unwrap();
        assert_eq!(t.settings.stage_two.format, Some(Format::Stepladder));
        assert!(!t.settings.stage_two.consolation);
        assert_eq!(t.settings.stage_two.advance, Advance::default());
    }

    #[test]
    fn tiebreak_selection_stops_when_list_is_exhausted() {
        let mut answers = vec!["RR", "5", "", "", "3", "0", "", "", "", "", ""];
        answers.extend(std::iter::repeat_n("1", Tiebreak::ALL.len()));
        let t = wizard(&answers).unwrap();
        assert_eq!(t.settings.scoring.tiebreaks, Tiebreak::ALL.to_vec());
    }

    #[test]
    fn end_of_input_aborts() {
        assert!(matches!(wizard(&["Cup", "1"]), Err(CliError::Interrupted(_))));
    }
}
