//! Simple line-mode game
//!
//! The board is printed to the terminal and guesses come from stdin or from the
//! random guesser.

use super::solve::SolveResult;
use crate::game::{
    GameSetup, GuessSource, JsonSnapshot, RandomGuesser, RoundEngine, SourceError, SourceType,
    TerminalGuessSource,
};
use crate::output::{TerminalPresenter, print_warning};

/// Run one line-mode game
///
/// A human game redraws the board in place; a random game prints every board so
/// the whole path stays visible. Lost board output is reported once, after the game.
///
/// # Errors
///
/// Returns `SourceError` if the player quits or input closes before the game ends.
pub fn run_simple(
    setup: GameSetup,
    source: SourceType,
    seed: Option<u64>,
    snapshot: Option<JsonSnapshot>,
) -> Result<SolveResult, SourceError> {
    let mut engine = RoundEngine::new(setup);
    if let Some(snapshot) = snapshot {
        engine.add_observer(Box::new(snapshot));
    }

    let mut presenter = TerminalPresenter::stdout(source == SourceType::Human);
    let mut guesser: Box<dyn GuessSource> = match source {
        SourceType::Human => Box::new(TerminalGuessSource::stdio()),
        SourceType::Random => Box::new(RandomGuesser::new(seed)),
    };

    let outcome = engine.play(guesser.as_mut(), &mut presenter);
    if let Some(e) = presenter.failure() {
        print_warning(&format!("board output lost: {e}"));
    }
    outcome?;
    Ok(SolveResult::from_engine(&engine))
}
