//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkError, BenchmarkResult, run_benchmark, run_benchmark_with};
pub use simple::run_simple;
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_game};
