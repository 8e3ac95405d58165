//! Terminal output formatting
//!
//! Display utilities for CLI results, diagnostics and the line-mode board.

pub mod display;
pub mod formatters;
mod terminal;

pub use display::{print_benchmark_result, print_error, print_solve_result, print_warning};
pub use terminal::TerminalPresenter;
