use grandprix_engine::errors::EngineError;
use grandprix_engine::manager::Manager;
use grandprix_engine::settings::{Format, TournamentSettings};

#[test]
fn serialized_tournament_reloads_identically() {
    let manager = Manager::new();
    let mut settings = TournamentSettings::default();
    settings.stage_one.format = Format::Swiss;
    settings.meta.path = "saves/weekly.json".into();
    let mut t = manager.create_tournament("Weekly", settings).unwrap();
    t.create_player("A").unwrap();
    t.create_player("B").unwrap();
    t.start().unwrap();
    t.enter_result("m1", 1, 0, 0).unwrap();

    let doc = serde_json::to_value(&t).unwrap();
    let restored = manager.reload_tournament(doc).unwrap();
    assert_eq!(restored, t);
}

#[test]
fn document_uses_camel_case_fields() {
    let t = Manager::new()
        .create_tournament("Weekly", TournamentSettings::default())
        .unwrap();
    let doc = serde_json::to_value(&t).unwrap();
    assert!(doc["settings"]["stageOne"]["format"] == "single-elimination");
    assert!(doc["settings"]["stageTwo"]["format"].is_null());
    assert!(doc["settings"]["scoring"]["bestOf"] == 1);
}

#[test]
fn malformed_document_is_rejected() {
    let err = Manager::new()
        .reload_tournament(serde_json::json!({ "name": "Broken" }))
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidDocument(_)));
}

#[test]
fn dangling_player_reference_is_rejected() {
    let mut t = Manager::new()
        .create_tournament("Weekly", TournamentSettings::default())
        .unwrap();
    t.create_player("A").unwrap();
    t.create_player("B").unwrap();
    t.start().unwrap();
    let mut doc = serde_json::to_value(&t).unwrap();
    doc["players"].as_array_mut().unwrap().pop();
    let err = Manager::new().reload_tournament(doc).unwrap_err();
    assert!(matches!(err, EngineError::InvalidDocument(msg) if msg.contains("unknown player")));
}

fn started_swiss() -> grandprix_engine::tournament::Tournament {
    let mut settings = TournamentSettings::default();
    settings.stage_one.format = Format::Swiss;
    let mut t = Manager::new().create_tournament("Weekly", settings).unwrap();
    for name in ["A", "B", "C", "D"] {
        t.create_player(name).unwrap();
    }
    t.start().unwrap();
    t
}

fn rejection(doc: serde_json::Value) -> String {
    match Manager::new().reload_tournament(doc) {
        Err(EngineError::InvalidDocument(msg)) => msg,
        other => panic!("expected InvalidDocument, got {:?}", other),
    }
}

#[test]
fn stage_start_after_current_round_is_rejected() {
    let mut doc = serde_json::to_value(started_swiss()).unwrap();
    doc["stageStart"] = serde_json::json!(5);
    assert!(rejection(doc).contains("stage start 5"));
}

#[test]
fn duplicate_match_id_is_rejected() {
    let mut doc = serde_json::to_value(started_swiss()).unwrap();
    let matches = doc["matches"].as_array_mut().unwrap();
    let first = matches[0]["id"].clone();
    matches[1]["id"] = first;
    assert!(rejection(doc).contains("duplicate match id"));
}

#[test]
fn stale_id_counters_are_rejected() {
    let mut doc = serde_json::to_value(started_swiss()).unwrap();
    doc["nextPlayerId"] = serde_json::json!(2);
    assert!(rejection(doc).contains("next player id"));

    let mut doc = serde_json::to_value(started_swiss()).unwrap();
    doc["nextMatchId"] = serde_json::json!(1);
    assert!(rejection(doc).contains("next match id"));
}

#[test]
fn recorded_games_beyond_best_of_are_rejected() {
    let mut doc = serde_json::to_value(started_swiss()).unwrap();
    let m = &mut doc["matches"][0];
    m["active"] = serde_json::json!(false);
    m["player1"]["win"] = serde_json::json!(u32::MAX);
    m["player1"]["loss"] = serde_json::json!(1);
    assert!(rejection(doc).contains("more than 1 games"));
}

#[test]
fn valid_document_still_advances_after_reload() {
    let mut t = started_swiss();
    t.enter_result("m1", 1, 0, 0).unwrap();
    t.enter_result("m2", 0, 1, 0).unwrap();
    let doc = serde_json::to_value(&t).unwrap();
    let mut restored = Manager::new().reload_tournament(doc).unwrap();
    assert_eq!(
        restored.next(),
        Ok(grandprix_engine::tournament::RoundOutcome::Paired(2))
    );
}
