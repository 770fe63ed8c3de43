//! Integration test: highscore file handling at the end of a round

use flappy::audio::Silent;
use flappy::constants::HIGHSCORE_FILE;
use flappy::game::{FlappyGame, GameStatus, Obstacle, Overlay, Trigger};
use flappy::highscore::{FileHighscore, HighscoreStore};
use flappy::settings::Settings;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;

/// Start a round, force the score and crash into the ground.
fn finish_with_score(store: &mut FileHighscore, score: u32) -> FlappyGame {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut game = FlappyGame::new(Settings::new(), &mut rng);
    game.handle(Trigger::Jump, &mut rng, &mut Silent, store);
    game.stats.score = score;
    game.collide(Obstacle::Ground, &mut Silent, store);
    assert_eq!(game.status(), GameStatus::Over);
    game
}

#[test]
fn test_higher_score_rewrites_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(HIGHSCORE_FILE);
    fs::write(&path, "5").unwrap();
    let mut store = FileHighscore::at(&path);

    let game = finish_with_score(&mut store, 7);

    assert_eq!(fs::read_to_string(&path).unwrap(), "7");
    assert_eq!(
        game.scene().overlay,
        Overlay::Over {
            score: 7,
            highscore: 7,
            new_record: true
        }
    );
}

#[test]
fn test_lower_score_leaves_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(HIGHSCORE_FILE);
    fs::write(&path, "5").unwrap();
    let mut store = FileHighscore::at(&path);

    let game = finish_with_score(&mut store, 3);

    assert_eq!(fs::read_to_string(&path).unwrap(), "5");
    assert_eq!(game.highscore, 5);
    assert!(!game.new_record);
}

#[test]
fn test_missing_file_is_created_on_first_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(HIGHSCORE_FILE);
    let mut store = FileHighscore::at(&path);

    finish_with_score(&mut store, 1);

    assert_eq!(store.load().unwrap(), Some(1));
}

#[test]
fn test_trailing_newline_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(HIGHSCORE_FILE);
    fs::write(&path, "12\n").unwrap();
    let mut store = FileHighscore::at(&path);

    let game = finish_with_score(&mut store, 4);

    assert_eq!(game.highscore, 12);
    assert_eq!(fs::read_to_string(&path).unwrap(), "12\n");
}

#[test]
fn test_unwritable_location_does_not_break_round() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the file should be makes both read and write fail
    let path = dir.path().join(HIGHSCORE_FILE);
    fs::create_dir(&path).unwrap();
    let mut store = FileHighscore::at(&path);

    let game = finish_with_score(&mut store, 6);

    assert_eq!(game.highscore, 6);
    assert!(game.new_record);
}
