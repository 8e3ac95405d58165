//! Mastermind - CLI
//!
//! Crack a hidden code of distinct letters in a TUI, in line mode, or watch the random
//! guesser try.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{SolveConfig, run_benchmark, run_simple, solve_game},
    game::{
        GameConfig, JsonSnapshot, SourceError, SourceType,
        config::{DEFAULT_POSITIONS, DEFAULT_ROUNDS},
    },
    output::{print_benchmark_result, print_error, print_solve_result, print_warning},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind: guess the hidden code, scored with exact and misplaced pegs",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Code length, 1-12 [default: 4]
    #[arg(short, long, global = true)]
    width: Option<usize>,

    /// Number of rounds
    #[arg(short, long, global = true, default_value_t = DEFAULT_ROUNDS)]
    tries: usize,

    /// Fixed solution, e.g. ABCD (letters, no repeats)
    #[arg(short, long, global = true)]
    solution: Option<String>,

    /// Alphabet size [default: twice the code length]
    #[arg(short = 'n', long, global = true)]
    values: Option<usize>,

    /// Guesser for simple mode: human (default) or random
    #[arg(long, global = true, default_value = "human", value_parser = SourceType::from_name)]
    algo: SourceType,

    /// Seed for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write a JSON snapshot of the game after every round
    #[arg(long, global = true, value_name = "PATH")]
    save: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line mode: the board is printed and guesses are read from stdin
    Simple,

    /// Let the random guesser play one game and print its path
    Solve,

    /// Play many random games and print statistics
    Benchmark {
        /// Number of games to play
        #[arg(short, long, default_value = "1000")]
        count: usize,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        if let (Some(width), Some(solution)) = (self.width, &self.solution) {
            let length = solution.chars().filter(|c| !c.is_whitespace()).count();
            if width != length {
                print_warning(&format!(
                    "--width {width} ignored: the solution has {length} symbols"
                ));
            }
        }

        GameConfig {
            positions: self.width.unwrap_or(DEFAULT_POSITIONS),
            value_count: self.values,
            max_rounds: self.tries,
            solution: self.solution.clone(),
            seed: self.seed,
        }
    }

    fn snapshot(&self) -> Option<JsonSnapshot> {
        self.save.clone().map(JsonSnapshot::new)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.game_config();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        Commands::Play => run_play_command(config, cli.snapshot()),
        Commands::Simple => run_simple_command(&config, cli.algo, cli.snapshot()),
        Commands::Solve => run_solve_command(&config, cli.snapshot()),
        Commands::Benchmark { count } => run_benchmark_command(&config, *count),
    }
}

fn run_play_command(config: GameConfig, snapshot: Option<JsonSnapshot>) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let app = App::new(config, snapshot).context("invalid game configuration")?;
    run_tui(app)
}

fn run_simple_command(
    config: &GameConfig,
    source: SourceType,
    snapshot: Option<JsonSnapshot>,
) -> Result<()> {
    let setup = config.build().context("invalid game configuration")?;

    match run_simple(setup, source, config.seed, snapshot) {
        Ok(result) => {
            for failure in &result.persist_failures {
                print_warning(&format!("snapshot not written: {failure}"));
            }
            Ok(())
        }
        Err(SourceError::Quit) => {
            println!("Bye!");
            Ok(())
        }
        Err(SourceError::Closed) => {
            print_error("input closed before the game ended");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn run_solve_command(config: &GameConfig, snapshot: Option<JsonSnapshot>) -> Result<()> {
    let setup = config.build().context("invalid game configuration")?;
    println!(
        "Solving a {}-symbol code over {} options in at most {} rounds...",
        setup.positions(),
        setup.alphabet().len(),
        setup.max_rounds()
    );

    let mut solve = SolveConfig::new(setup);
    solve.seed = config.seed;
    solve.snapshot = snapshot;

    let result = solve_game(solve)?;
    print_solve_result(&result);
    Ok(())
}

fn run_benchmark_command(config: &GameConfig, count: usize) -> Result<()> {
    println!("Running benchmark on {count} random games...");

    let result = run_benchmark(config, count, true).context("benchmark failed")?;
    print_benchmark_result(&result);
    Ok(())
}
