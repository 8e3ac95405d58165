//! Round engine
//!
//! Owns one game's state and moves it through
//! `NotStarted -> Playing(round) -> Won(round) | Lost`.

use super::config::GameSetup;
use super::presenter::{BoardView, Presenter};
use super::snapshot::RoundObserver;
use super::source::{GuessSource, SourceError};
use crate::core::{Alphabet, Code, Feedback, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    NotStarted,
    /// Waiting for the guess of this round (1-based)
    Playing(usize),
    /// Solved in this round
    Won(usize),
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won(_) | Self::Lost)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "not started"),
            Self::Playing(round) => write!(f, "playing round {round}"),
            Self::Won(round) => write!(f, "won in round {round}"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// A guess the engine refused; the round is not consumed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    WrongLength { expected: usize, got: usize },
    UnknownSymbol(Symbol),
    /// The game is not waiting for a guess
    NotAccepting(GameStatus),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, got } => {
                write!(f, "Guess must have {expected} symbols, got {got}")
            }
            Self::UnknownSymbol(s) => write!(f, "'{s}' is not one of the options"),
            Self::NotAccepting(status) => write!(f, "Not accepting guesses: game {status}"),
        }
    }
}

impl std::error::Error for GuessError {}

/// One guess-and-feedback slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    number: usize,
    guess: Option<Code>,
    feedback: Feedback,
}

impl Round {
    fn unplayed(number: usize, positions: usize) -> Self {
        Self {
            number,
            guess: None,
            feedback: Feedback::unplayed(positions as u8),
        }
    }

    #[inline]
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> Option<&Code> {
        self.guess.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }

    #[inline]
    #[must_use]
    pub const fn is_played(&self) -> bool {
        self.guess.is_some()
    }
}

/// Everything one game owns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub rounds: Vec<Round>,
    pub alphabet: Alphabet,
    pub solution: Code,
    pub status: GameStatus,
}

/// Runs a single game
pub struct RoundEngine {
    state: GameState,
    observers: Vec<Box<dyn RoundObserver>>,
    persist_failures: Vec<String>,
}

impl RoundEngine {
    /// Create an engine with every round allocated and unplayed
    #[must_use]
    pub fn new(setup: GameSetup) -> Self {
        let positions = setup.positions();
        let rounds = (1..=setup.max_rounds())
            .map(|number| Round::unplayed(number, positions))
            .collect();

        Self {
            state: GameState {
                rounds,
                alphabet: setup.alphabet().clone(),
                solution: setup.solution().clone(),
                status: GameStatus::NotStarted,
            },
            observers: Vec::new(),
            persist_failures: Vec::new(),
        }
    }

    /// Notify `observer` after every scored round
    #[must_use]
    pub fn with_observer(mut self, observer: impl RoundObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    pub fn add_observer(&mut self, observer: Box<dyn RoundObserver>) {
        self.observers.push(observer);
    }

    /// Begin round 1; does nothing once the game has started
    pub fn start(&mut self) -> GameStatus {
        if let GameStatus::NotStarted = self.state.status {
            self.state.status = GameStatus::Playing(1);
        }
        self.state.status
    }

    /// Check a guess against the alphabet and code length without playing it
    ///
    /// # Errors
    /// Returns `GuessError::WrongLength` or `GuessError::UnknownSymbol`.
    pub fn validate(&self, guess: &Code) -> Result<(), GuessError> {
        let expected = self.positions();
        if guess.len() != expected {
            return Err(GuessError::WrongLength {
                expected,
                got: guess.len(),
            });
        }
        if let Some(&symbol) = guess
            .symbols()
            .iter()
            .find(|&&s| !self.state.alphabet.contains(s))
        {
            return Err(GuessError::UnknownSymbol(symbol));
        }
        Ok(())
    }

    /// Play `guess` in the current round
    ///
    /// On success the round's guess and feedback are stored, observers are notified
    /// and the game advances, ends in a win, or ends in a loss after the last round.
    /// On error nothing changes and the same round is still open.
    ///
    /// # Errors
    /// Returns `GuessError` if the game is not in progress or the guess is invalid.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Alphabet, Code, Symbol};
    /// use mastermind::game::{GameSetup, GameStatus, RoundEngine};
    ///
    /// let alphabet = Alphabet::new("ABCDEF".chars().map(Symbol::new));
    /// let setup = GameSetup::new(alphabet, Code::parse("ABCD"), 3).unwrap();
    /// let mut engine = RoundEngine::new(setup);
    /// engine.start();
    ///
    /// let feedback = engine.submit(Code::parse("ABDC")).unwrap();
    /// assert_eq!((feedback.exact(), feedback.present()), (2, 2));
    /// assert_eq!(engine.status(), GameStatus::Playing(2));
    ///
    /// engine.submit(Code::parse("ABCD")).unwrap();
    /// assert_eq!(engine.status(), GameStatus::Won(2));
    /// ```
    pub fn submit(&mut self, guess: Code) -> Result<Feedback, GuessError> {
        let GameStatus::Playing(round) = self.state.status else {
            return Err(GuessError::NotAccepting(self.state.status));
        };
        self.validate(&guess)?;

        let feedback = Feedback::score(&guess, &self.state.solution);
        let slot = &mut self.state.rounds[round - 1];
        slot.guess = Some(guess);
        slot.feedback = feedback;

        self.state.status = if feedback.is_perfect() {
            GameStatus::Won(round)
        } else if round == self.max_rounds() {
            GameStatus::Lost
        } else {
            GameStatus::Playing(round + 1)
        };

        self.notify_observers();
        Ok(feedback)
    }

    fn notify_observers(&mut self) {
        for observer in &mut self.observers {
            if let Err(e) = observer.on_round_scored(&self.state) {
                self.persist_failures.push(e.to_string());
            }
        }
    }

    /// Play the game to the end, pulling guesses from `source`
    ///
    /// Invalid guesses are passed to `presenter.reject` and the same round is asked
    /// for again. The board is rendered before the first guess, after every scored
    /// round that leaves the game open, and once at the end with the solution shown.
    ///
    /// # Errors
    /// Returns `SourceError` if the guess source gives up (quit, closed input, I/O).
    pub fn play<G, P>(&mut self, source: &mut G, presenter: &mut P) -> Result<GameStatus, SourceError>
    where
        G: GuessSource + ?Sized,
        P: Presenter + ?Sized,
    {
        self.start();
        presenter.render(&self.view());

        while let GameStatus::Playing(round) = self.state.status {
            let guess = source.next_guess(round, &self.state.alphabet, self.positions())?;
            match self.submit(guess) {
                Ok(_) if !self.state.status.is_over() => presenter.render(&self.view()),
                Ok(_) => {}
                Err(error) => presenter.reject(round, &error),
            }
        }

        presenter.render(&self.view());
        Ok(self.state.status)
    }

    /// Read-only snapshot for presenters; the solution is only included once the game is over
    #[must_use]
    pub fn view(&self) -> BoardView<'_> {
        BoardView {
            rounds: &self.state.rounds,
            alphabet: &self.state.alphabet,
            solution: self.solution(),
            status: self.state.status,
        }
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.state.status
    }

    /// The round waiting for a guess, if any
    #[must_use]
    pub const fn current_round(&self) -> Option<usize> {
        match self.state.status {
            GameStatus::Playing(round) => Some(round),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.state.rounds
    }

    /// Rounds that have a guess, in order
    pub fn played_rounds(&self) -> impl Iterator<Item = &Round> {
        self.state.rounds.iter().filter(|r| r.is_played())
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.state.alphabet
    }

    #[inline]
    #[must_use]
    pub fn positions(&self) -> usize {
        self.state.solution.len()
    }

    #[inline]
    #[must_use]
    pub fn max_rounds(&self) -> usize {
        self.state.rounds.len()
    }

    /// The solution, revealed only after a win or loss
    #[must_use]
    pub const fn solution(&self) -> Option<&Code> {
        if self.state.status.is_over() {
            Some(&self.state.solution)
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Errors reported by observers; these never stop the game
    #[must_use]
    pub fn persist_failures(&self) -> &[String] {
        &self.persist_failures
    }
}
