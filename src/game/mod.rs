//! Game orchestration
//!
//! Configuration, the round engine, and the traits its collaborators implement:
//! guess sources, presenters and round observers.

pub mod config;
mod engine;
pub mod presenter;
pub mod snapshot;
pub mod source;

pub use config::{ConfigError, GameConfig, GameSetup};
pub use engine::{GameState, GameStatus, GuessError, Round, RoundEngine};
pub use presenter::{BoardView, NullPresenter, Presenter};
pub use snapshot::{JsonSnapshot, RoundObserver};
pub use source::{
    GuessSource, RandomGuesser, ScriptedGuesser, SourceError, SourceType, TerminalGuessSource,
};
