//! Benchmark command
//!
//! Plays many independent games with the random guesser and collects statistics.

use crate::game::{
    ConfigError, GameConfig, GameStatus, GuessSource, NullPresenter, RandomGuesser, RoundEngine,
    SourceError,
};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

/// Salt separating the guesser's seed from the setup's seed
const GUESSER_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Why a benchmark could not finish
#[derive(Debug)]
pub enum BenchmarkError {
    Config(ConfigError),
    /// A guesser gave up before its game ended
    Source(SourceError),
}

impl fmt::Display for BenchmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Invalid game configuration: {e}"),
            Self::Source(e) => write!(f, "Guesser stopped early: {e}"),
        }
    }
}

impl std::error::Error for BenchmarkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Source(e) => Some(e),
        }
    }
}

impl From<ConfigError> for BenchmarkError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SourceError> for BenchmarkError {
    fn from(e: SourceError) -> Self {
        Self::Source(e)
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub won: usize,
    pub lost: usize,
    pub max_rounds: usize,
    /// Average rounds over won games
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds_used: usize,
    /// Winning round -> number of games
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.won as f64 / self.total_games as f64
        }
    }
}

/// Play `games` games with fresh setups from `config`
///
/// Each game gets its own engine and guesser. With a seed in `config`, game `i` uses
/// seed `seed + i`, so runs are reproducible.
///
/// # Errors
///
/// Returns `BenchmarkError::Config` if `config` is invalid; it is checked before any
/// game runs.
pub fn run_benchmark(
    config: &GameConfig,
    games: usize,
    show_progress: bool,
) -> Result<BenchmarkResult, BenchmarkError> {
    run_benchmark_with(config, games, show_progress, RandomGuesser::new)
}

/// Like [`run_benchmark`], with guessers built by `make_guesser`
///
/// `make_guesser` receives the per-game guesser seed. Every game is played through
/// [`RoundEngine::play`], so a rejected guess is asked for again rather than ending
/// the game.
///
/// # Errors
///
/// Returns `BenchmarkError::Config` for an invalid `config` and
/// `BenchmarkError::Source` if a guesser stops before its game is over.
pub fn run_benchmark_with<F, G>(
    config: &GameConfig,
    games: usize,
    show_progress: bool,
    make_guesser: F,
) -> Result<BenchmarkResult, BenchmarkError>
where
    F: Fn(Option<u64>) -> G + Sync,
    G: GuessSource,
{
    config.build()?;

    let pb = if show_progress {
        let pb = ProgressBar::new(games as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let outcomes: Vec<GameStatus> = (0..games)
        .into_par_iter()
        .map(|i| -> Result<GameStatus, BenchmarkError> {
            let seed = config.seed.map(|s| s.wrapping_add(i as u64));
            let game_config = GameConfig {
                seed,
                ..config.clone()
            };
            let setup = game_config.build()?;

            let mut engine = RoundEngine::new(setup);
            let mut guesser = make_guesser(seed.map(|s| s ^ GUESSER_SALT));
            let status = engine.play(&mut guesser, &mut NullPresenter)?;

            pb.inc(1);
            Ok(status)
        })
        .collect::<Result<_, _>>()?;

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for status in &outcomes {
        if let GameStatus::Won(round) = status {
            *distribution.entry(*round).or_insert(0) += 1;
        }
    }

    let won: usize = distribution.values().sum();
    let total_rounds: usize = distribution.iter().map(|(round, n)| round * n).sum();
    let average_rounds = if won > 0 {
        total_rounds as f64 / won as f64
    } else {
        0.0
    };

    Ok(BenchmarkResult {
        total_games: outcomes.len(),
        won,
        lost: outcomes.len() - won,
        max_rounds: config.max_rounds,
        average_rounds,
        min_rounds: distribution.keys().copied().min().unwrap_or(0),
        max_rounds_used: distribution.keys().copied().max().unwrap_or(0),
        distribution,
        duration,
        games_per_second: outcomes.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
