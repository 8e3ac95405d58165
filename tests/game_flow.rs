//! End-to-end games through the public API

use mastermind::core::{Alphabet, Code, Feedback, Symbol};
use mastermind::game::{
    BoardView, GameConfig, GameSetup, GameStatus, GuessError, JsonSnapshot, Presenter,
    RoundEngine, ScriptedGuesser, SourceError,
};

fn letters(text: &str) -> Alphabet {
    Alphabet::new(text.chars().map(Symbol::new))
}

#[derive(Default)]
struct Transcript {
    boards: Vec<(GameStatus, Option<String>)>,
    rejected: Vec<usize>,
}

impl Presenter for Transcript {
    fn render(&mut self, view: &BoardView) {
        self.boards
            .push((view.status, view.solution.map(ToString::to_string)));
    }

    fn reject(&mut self, round: usize, _error: &GuessError) {
        self.rejected.push(round);
    }
}

#[test]
fn won_in_second_round_leaves_third_unplayed() {
    let setup = GameSetup::new(letters("ABCDEF"), Code::parse("ABCD"), 3).unwrap();
    let mut engine = RoundEngine::new(setup);
    let mut source = ScriptedGuesser::new(["ABDC", "ABCD"]);
    let mut transcript = Transcript::default();

    let status = engine.play(&mut source, &mut transcript).unwrap();

    assert_eq!(status, GameStatus::Won(2));
    let rounds = engine.rounds();
    assert_eq!(rounds[0].feedback(), Feedback::new(2, 2, 0));
    assert_eq!(rounds[1].feedback(), Feedback::new(4, 0, 0));
    assert!(!rounds[2].is_played());

    // Initial board, after round 1, final board with the solution
    assert_eq!(transcript.boards.len(), 3);
    assert_eq!(transcript.boards[0], (GameStatus::Playing(1), None));
    assert_eq!(
        transcript.boards[2],
        (GameStatus::Won(2), Some("ABCD".to_string()))
    );
}

#[test]
fn rejected_guesses_repeat_the_round() {
    let setup = GameSetup::new(letters("ABCDEF"), Code::parse("ABCD"), 2).unwrap();
    let mut engine = RoundEngine::new(setup);
    let mut source = ScriptedGuesser::new(["ABC", "ABCZ", "FEDC", "ABCD"]);
    let mut transcript = Transcript::default();

    let status = engine.play(&mut source, &mut transcript).unwrap();

    assert_eq!(status, GameStatus::Won(2));
    assert_eq!(transcript.rejected, vec![1, 1]);
    assert_eq!(engine.played_rounds().count(), 2);
}

#[test]
fn running_out_of_guesses_is_a_source_error() {
    let setup = GameSetup::new(letters("ABCDEF"), Code::parse("ABCD"), 5).unwrap();
    let mut engine = RoundEngine::new(setup);
    let mut source = ScriptedGuesser::new(["EEEE"]);
    let mut transcript = Transcript::default();

    let result = engine.play(&mut source, &mut transcript);

    assert!(matches!(result, Err(SourceError::Closed)));
    assert_eq!(engine.status(), GameStatus::Playing(2));
    assert_eq!(engine.solution(), None);
}

#[test]
fn lost_game_reveals_solution() {
    let setup = GameSetup::new(letters("ABCDEF"), Code::parse("ABCD"), 2).unwrap();
    let mut engine = RoundEngine::new(setup);
    let mut source = ScriptedGuesser::new(["AACC", "AAAA"]);
    let mut transcript = Transcript::default();

    assert_eq!(
        engine.play(&mut source, &mut transcript).unwrap(),
        GameStatus::Lost
    );
    assert_eq!(engine.rounds()[0].feedback(), Feedback::new(2, 0, 2));
    assert_eq!(engine.rounds()[1].feedback(), Feedback::new(1, 0, 3));
    assert_eq!(engine.solution(), Some(&Code::parse("ABCD")));
}

#[test]
fn snapshot_tracks_the_last_round() {
    let path = std::env::temp_dir().join(format!(
        "mastermind-flow-{}.json",
        std::process::id()
    ));
    let config = GameConfig {
        solution: Some("face".to_string()),
        seed: Some(9),
        ..GameConfig::default()
    };
    let mut engine = RoundEngine::new(config.build().unwrap())
        .with_observer(JsonSnapshot::new(&path));
    engine.start();

    engine.submit(Code::parse("ACEF")).unwrap();
    let state = JsonSnapshot::read(&path).unwrap();
    assert_eq!(state.status, GameStatus::Playing(2));
    assert_eq!(state.rounds[0].guess(), Some(&Code::parse("ACEF")));

    engine.submit(Code::parse("FACE")).unwrap();
    let state = JsonSnapshot::read(&path).unwrap();
    assert_eq!(state.status, GameStatus::Won(2));
    assert_eq!(state.solution, Code::parse("FACE"));
    assert!(engine.persist_failures().is_empty());

    let _ = std::fs::remove_file(&path);
}
