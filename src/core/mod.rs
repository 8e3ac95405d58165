//! Core domain types for Mastermind
//!
//! Symbols, codes and the feedback scorer. Everything here is pure: no I/O and no
//! game state.

mod feedback;
mod symbol;

pub use feedback::{ABSENT_PEG, EXACT_PEG, Feedback, PRESENT_PEG};
pub use symbol::{Alphabet, Code, Symbol};
