//! High score file store wired into the engine

use std::fs;

use classic_tetris::core::{GameState, HighScoreStore};
use classic_tetris::store::JsonFileStore;

#[test]
fn engine_reads_existing_high_score() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("high_score.json");
    fs::write(&path, r#"{"high_score": 12800}"#).unwrap();

    let game = GameState::new(1, Box::new(JsonFileStore::new(&path)));
    assert_eq!(game.high_score(), 12800);
}

#[test]
fn missing_file_means_no_high_score() {
    let dir = tempfile::tempdir().unwrap();
    let game = GameState::new(1, Box::new(JsonFileStore::new(dir.path().join("absent.json"))));
    assert_eq!(game.high_score(), 0);
}

#[test]
fn corrupt_file_does_not_stop_the_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("high_score.json");
    fs::write(&path, "garbage").unwrap();

    let mut game = GameState::new(1, Box::new(JsonFileStore::new(&path)));
    assert_eq!(game.high_score(), 0);
    assert!(game.start());
}

#[test]
fn saved_value_survives_a_new_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deep").join("high_score.json");

    let mut store: Box<dyn HighScoreStore> = Box::new(JsonFileStore::new(&path));
    store.save(640).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json, serde_json::json!({ "high_score": 640 }));

    let game = GameState::new(1, Box::new(JsonFileStore::new(&path)));
    assert_eq!(game.high_score(), 640);
}
