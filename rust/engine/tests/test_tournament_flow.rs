use grandprix_engine::errors::EngineError;
use grandprix_engine::manager::Manager;
use grandprix_engine::settings::{Advance, AdvanceMethod, Format, Tiebreak, TournamentSettings};
use grandprix_engine::tournament::{RoundOutcome, Status};

fn swiss_with_stage_two() -> TournamentSettings {
    let mut settings = TournamentSettings::default();
    settings.stage_one.format = Format::Swiss;
    settings.stage_one.rounds = 2;
    settings.stage_two.format = Some(Format::SingleElimination);
    settings.stage_two.advance = Advance {
        method: AdvanceMethod::Rank,
        value: 2,
    };
    settings.scoring.tiebreaks = vec![Tiebreak::Solkoff, Tiebreak::Cumulative];
    settings
}

fn finish_round(t: &mut grandprix_engine::tournament::Tournament) {
    let open: Vec<String> = t
        .matches()
        .iter()
        .filter(|m| m.round() == t.round() && m.is_active())
        .map(|m| m.id().to_string())
        .collect();
    for id in open {
        t.enter_result(&id, 1, 0, 0).unwrap();
    }
}

#[test]
fn swiss_feeds_top_two_into_elimination_final() {
    let mut t = Manager::new()
        .create_tournament("Open", swiss_with_stage_two())
        .unwrap();
    for name in ["A", "B", "C", "D"] {
        t.create_player(name).unwrap();
    }
    t.start().unwrap();
    finish_round(&mut t);
    assert_eq!(t.next().unwrap(), RoundOutcome::Paired(2));
    finish_round(&mut t);
    assert_eq!(t.next().unwrap(), RoundOutcome::StageTwoStarted(3));
    assert_eq!(t.status(), Status::StageTwo);
    assert_eq!(t.players().iter().filter(|p| p.is_active()).count(), 2);

    finish_round(&mut t);
    assert_eq!(t.next().unwrap(), RoundOutcome::Complete);
    assert_eq!(t.next(), Err(EngineError::Complete));
}

#[test]
fn players_can_not_join_after_start() {
    let mut t = Manager::new()
        .create_tournament("Open", TournamentSettings::default())
        .unwrap();
    t.create_player("A").unwrap();
    t.create_player("B").unwrap();
    t.start().unwrap();
    assert_eq!(t.create_player("C").unwrap_err(), EngineError::AlreadyStarted);
    assert_eq!(t.start(), Err(EngineError::AlreadyStarted));
}

#[test]
fn max_players_is_enforced() {
    let mut settings = TournamentSettings::default();
    settings.stage_one.max_players = 2;
    let mut t = Manager::new().create_tournament("Small", settings).unwrap();
    t.create_player("A").unwrap();
    t.create_player("B").unwrap();
    assert_eq!(t.create_player("C").unwrap_err(), EngineError::TournamentFull(2));
}

#[test]
fn start_needs_two_players() {
    let mut t = Manager::new()
        .create_tournament("Lonely", TournamentSettings::default())
        .unwrap();
    t.create_player("A").unwrap();
    assert_eq!(
        t.start(),
        Err(EngineError::NotEnoughPlayers {
            minimum: 2,
            actual: 1
        })
    );
    assert_eq!(t.status(), Status::Setup);
}

#[test]
fn round_robin_round_count_depends_on_parity() {
    let mut settings = TournamentSettings::default();
    settings.stage_one.format = Format::DoubleRoundRobin;
    let mut t = Manager::new().create_tournament("League", settings).unwrap();
    for name in ["A", "B", "C"] {
        t.create_player(name).unwrap();
    }
    t.start().unwrap();
    assert_eq!(t.settings().stage_one.rounds, 6);
}

#[test]
fn bye_matches_reject_results() {
    let mut settings = TournamentSettings::default();
    settings.stage_one.format = Format::Swiss;
    let mut t = Manager::new().create_tournament("Odd", settings).unwrap();
    for name in ["A", "B", "C"] {
        t.create_player(name).unwrap();
    }
    t.start().unwrap();
    let bye = t.matches().iter().find(|m| m.is_bye()).unwrap().id().to_string();
    assert_eq!(t.enter_result(&bye, 1, 0, 0), Err(EngineError::ByeMatch(bye.clone())));
    assert_eq!(t.standings().iter().find(|s| s.player.name() == "C").unwrap().match_points, 1.0);
}
