//! Argument parsing for player and match commands.
//!
//! The command grammar leaves arguments verbatim; handlers run them through
//! these parsers before any engine call so a malformed token never reaches
//! the tournament.
//!
//! - Match references: `#` for the current round or `r#m#`
//! - Results: `W-L`, `W-L-D` or `clear`
//! - Seed values for `pn`

use crate::error::CliError;

const MATCH_REF_HELP: &str = "Input must either be a match number or round and match number (r#m#)";
const RESULT_HELP: &str = "Results must be entered as W-L or W-L-D (relative to player 1)";

/// Where a match lives, before it is looked up in a tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRef {
    /// Match number within the tournament's current round.
    Current(u32),
    /// Explicit round and match number.
    Explicit { round: u32, number: u32 },
}

impl MatchRef {
    /// Round this reference points at, given the tournament's current round.
    pub fn round(&self, current_round: u32) -> u32 {
        match self {
            MatchRef::Current(_) => current_round,
            MatchRef::Explicit { round, .. } => *round,
        }
    }

    pub fn number(&self) -> u32 {
        match self {
            MatchRef::Current(number) | MatchRef::Explicit { number, .. } => *number,
        }
    }
}

/// Parses `#` or `r#m#`.
///
/// # Example
///
/// ```rust
/// # use grandprix_cli::validation::{parse_match_ref, MatchRef};
/// assert_eq!(parse_match_ref("3").unwrap(), MatchRef::Current(3));
/// assert_eq!(
///     parse_match_ref("r2m4").unwrap(),
///     MatchRef::Explicit { round: 2, number: 4 }
/// );
/// assert!(parse_match_ref("m4").is_err());
/// ```
pub fn parse_match_ref(input: &str) -> Result<MatchRef, CliError> {
    let invalid = || CliError::InvalidInput(MATCH_REF_HELP.to_string());

    if let Some(number) = parse_digits(input) {
        return Ok(MatchRef::Current(number));
    }
    let rest = input.strip_prefix('r').ok_or_else(invalid)?;
    let (round, number) = rest.split_once('m').ok_or_else(invalid)?;
    match (parse_digits(round), parse_digits(number)) {
        (Some(round), Some(number)) => Ok(MatchRef::Explicit { round, number }),
        _ => Err(invalid()),
    }
}

/// A parsed result argument for the `m` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultEntry {
    Clear,
    /// Games won, lost and drawn by the first player of the match.
    Score { win: u32, loss: u32, draw: u32 },
}

/// Parses `clear`, `W-L` or `W-L-D`.
///
/// # Example
///
/// ```rust
/// # use grandprix_cli::validation::{parse_result, ResultEntry};
/// assert_eq!(
///     parse_result("2-1").unwrap(),
///     ResultEntry::Score { win: 2, loss: 1, draw: 0 }
/// );
/// assert_eq!(parse_result("clear").unwrap(), ResultEntry::Clear);
/// assert!(parse_result("x-1").is_err());
/// ```
pub fn parse_result(input: &str) -> Result<ResultEntry, CliError> {
    if input == "clear" {
        return Ok(ResultEntry::Clear);
    }
    let parts: Vec<Option<u32>> = input.split('-').map(parse_digits).collect();
    match parts.as_slice() {
        [Some(win), Some(loss)] => Ok(ResultEntry::Score {
            win: *win,
            loss: *loss,
            draw: 0,
        }),
        [Some(win), Some(loss), Some(draw)] => Ok(ResultEntry::Score {
            win: *win,
            loss: *loss,
            draw: *draw,
        }),
        _ => Err(CliError::InvalidInput(RESULT_HELP.to_string())),
    }
}

/// Parses the optional seed argument of `pn`.
///
/// Absent or non-positive values mean "no seed". Anything that is not an
/// integer is rejected.
pub fn parse_seed(input: Option<&str>) -> Result<Option<i64>, CliError> {
    let Some(raw) = input else {
        return Ok(None);
    };
    let value: i64 = raw
        .parse()
        .map_err(|_| CliError::InvalidInput(format!("Seed value must be a whole number, got {}", raw)))?;
    Ok((value > 0).then_some(value))
}

/// Digits only: no sign, no whitespace, no empty string.
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_match_ref_current_round() {
        assert_eq!(parse_match_ref("1").unwrap(), MatchRef::Current(1));
        assert_eq!(parse_match_ref("12").unwrap().round(4), 4);
    }

    #[test]
    fn test_parse_match_ref_explicit() {
        let r = parse_match_ref("r10m2").unwrap();
        assert_eq!(r.round(4), 10);
        assert_eq!(r.number(), 2);
    }

    #[test]
    fn test_parse_match_ref_rejects_malformed() {
        for bad in ["", "r", "rm", "r1", "r1m", "m1", "R1M1", "r1m1x", "-1", "+2", "r-1m2"] {
            match parse_match_ref(bad) {
                Err(CliError::InvalidInput(msg)) => assert!(msg.contains("r#m#"), "{}", bad),
                other => panic!("expected rejection for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_parse_result_scores() {
        assert_eq!(
            parse_result("2-1").unwrap(),
            ResultEntry::Score { win: 2, loss: 1, draw: 0 }
        );
        assert_eq!(
            parse_result("1-1-1").unwrap(),
            ResultEntry::Score { win: 1, loss: 1, draw: 1 }
        );
    }

    #[test]
    fn test_parse_result_rejects_non_numeric() {
        for bad in ["x-1", "1-x", "1-1-x", "1", "1-1-1-1", "-1-1", "1--1", "CLEAR", ""] {
            assert!(
                matches!(parse_result(bad), Err(CliError::InvalidInput(_))),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed(None).unwrap(), None);
        assert_eq!(parse_seed(Some("1500")).unwrap(), Some(1500));
        assert_eq!(parse_seed(Some("0")).unwrap(), None);
        assert_eq!(parse_seed(Some("-3")).unwrap(), None);
        assert!(parse_seed(Some("fast")).is_err());
    }
}
