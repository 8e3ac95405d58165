//! Mastermind
//!
//! A code-breaking game: a hidden code of distinct letters, guesses scored with exact and
//! misplaced pegs, played in a TUI, in line mode, or by a random guesser.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, Feedback};
//!
//! let solution = Code::parse("ABCD");
//! let guess = Code::parse("abdc");
//!
//! let feedback = Feedback::score(&guess, &solution);
//! assert_eq!((feedback.exact(), feedback.present(), feedback.absent()), (2, 2, 0));
//! assert_eq!(feedback.pegs(), "●●○○");
//! ```

// Core domain types
pub mod core;

// Round engine, configuration and collaborators
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
