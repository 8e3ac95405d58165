//! Solve command
//!
//! Lets the random guesser play one game and reports the path it took.

use crate::core::{Code, Feedback};
use crate::game::{
    GameSetup, GameStatus, JsonSnapshot, NullPresenter, RandomGuesser, RoundEngine, SourceError,
};

/// Configuration for one computer-played game
pub struct SolveConfig {
    pub setup: GameSetup,
    /// Seed for the guesser
    pub seed: Option<u64>,
    /// Write a snapshot after every round
    pub snapshot: Option<JsonSnapshot>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(setup: GameSetup) -> Self {
        Self {
            setup,
            seed: None,
            snapshot: None,
        }
    }
}

/// Outcome of a finished (or abandoned) game
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub max_rounds: usize,
    /// Known once the game is over
    pub solution: Option<Code>,
    pub persist_failures: Vec<String>,
}

/// A single scored round
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
}

impl SolveResult {
    /// Collect the played rounds of an engine
    #[must_use]
    pub fn from_engine(engine: &RoundEngine) -> Self {
        let steps = engine
            .played_rounds()
            .filter_map(|round| {
                round.guess().map(|guess| GuessStep {
                    guess: guess.clone(),
                    feedback: round.feedback(),
                })
            })
            .collect();

        Self {
            success: matches!(engine.status(), GameStatus::Won(_)),
            steps,
            max_rounds: engine.max_rounds(),
            solution: engine.solution().cloned(),
            persist_failures: engine.persist_failures().to_vec(),
        }
    }
}

/// Play one game with the random guesser
///
/// # Errors
///
/// Returns `SourceError` if the guesser stops early; the random guesser never does.
pub fn solve_game(config: SolveConfig) -> Result<SolveResult, SourceError> {
    let mut engine = RoundEngine::new(config.setup);
    if let Some(snapshot) = config.snapshot {
        engine.add_observer(Box::new(snapshot));
    }

    let mut guesser = RandomGuesser::new(config.seed);
    engine.play(&mut guesser, &mut NullPresenter)?;

    Ok(SolveResult::from_engine(&engine))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Alphabet, Symbol};

    fn setup(values: &str, solution: &str, rounds: usize) -> GameSetup {
        let alphabet = Alphabet::new(values.chars().map(Symbol::new));
        GameSetup::new(alphabet, Code::parse(solution), rounds).unwrap()
    }

    #[test]
    fn solve_trivial_alphabet_wins_first_round() {
        // One symbol, one position: every guess is the solution
        let mut config = SolveConfig::new(setup("A", "A", 5));
        config.seed = Some(1);

        let result = solve_game(config).unwrap();
        assert!(result.success);
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.solution, Some(Code::parse("A")));
    }

    #[test]
    fn solve_respects_round_limit() {
        let mut config = SolveConfig::new(setup("ABCDEFGHIJ", "ABCDE", 3));
        config.seed = Some(2);

        let result = solve_game(config).unwrap();
        assert!(result.steps.len() <= 3);
        if !result.success {
            assert_eq!(result.steps.len(), 3);
        }
    }

    #[test]
    fn solve_records_feedback_for_each_step() {
        let mut config = SolveConfig::new(setup("ABCDEF", "ABCD", 10));
        config.seed = Some(3);

        let result = solve_game(config).unwrap();
        let solution = result.solution.clone().unwrap();
        for step in &result.steps {
            assert_eq!(step.feedback, Feedback::score(&step.guess, &solution));
            assert_eq!(step.feedback.positions(), 4);
        }
        // Only the last step may be perfect
        let perfect = result.steps.iter().filter(|s| s.feedback.is_perfect()).count();
        assert_eq!(perfect, usize::from(result.success));
    }

    #[test]
    fn solve_is_reproducible_with_seed() {
        let run = || {
            let mut config = SolveConfig::new(setup("ABCDEF", "FACE", 6));
            config.seed = Some(99);
            solve_game(config)
                .unwrap()
                .steps
                .into_iter()
                .map(|s| s.guess)
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }
}
