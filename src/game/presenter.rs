//! Presenter interface
//!
//! Presenters only observe. The engine hands them an immutable view after each
//! step and never reads anything back.

use super::engine::{GameStatus, GuessError, Round};
use crate::core::{Alphabet, Code};

/// Immutable snapshot of the board
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    pub rounds: &'a [Round],
    pub alphabet: &'a Alphabet,
    /// `Some` once the game is over
    pub solution: Option<&'a Code>,
    pub status: GameStatus,
}

impl BoardView<'_> {
    /// Code length of the game being shown
    #[must_use]
    pub fn positions(&self) -> usize {
        self.rounds
            .first()
            .map_or(0, |round| usize::from(round.feedback().positions()))
    }
}

/// Something that displays the game
pub trait Presenter {
    /// Draw the board
    fn render(&mut self, view: &BoardView<'_>);

    /// A guess for `round` was refused
    fn reject(&mut self, _round: usize, _error: &GuessError) {}
}

/// Presenter that shows nothing, for headless games
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn render(&mut self, _view: &BoardView<'_>) {}
}
