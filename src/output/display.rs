//! Display functions for command results and diagnostics

use super::formatters::create_progress_bar;
use crate::commands::{BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the path of a finished game
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    match &result.solution {
        Some(solution) => println!(
            "Solution: {}",
            solution.to_string().bright_yellow().bold()
        ),
        None => println!("Solution: {}", "hidden".bright_black()),
    }
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "Round {:>2}: {}  {}",
            i + 1,
            step.guess.to_string().bright_white().bold(),
            step.feedback.pegs()
        );
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!(
                "✅ Solved in {} of {} rounds!",
                result.steps.len(),
                result.max_rounds
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved in {} rounds", result.steps.len())
                .red()
                .bold()
        );
    }

    for failure in &result.persist_failures {
        print_warning(&format!("snapshot not written: {failure}"));
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Won:              {} ({})",
        format!("{}", result.won).green(),
        format!("{:.1}%", result.win_rate() * 100.0).bright_yellow()
    );
    println!("   Lost:             {}", format!("{}", result.lost).red());
    if result.won > 0 {
        println!(
            "   Average rounds:   {}",
            format!("{:.2}", result.average_rounds)
                .bright_yellow()
                .bold()
        );
        println!(
            "   Best case:        {}",
            format!("{}", result.min_rounds).green()
        );
        println!(
            "   Worst case:       {}",
            format!("{}", result.max_rounds_used).yellow()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.won == 0 {
        return;
    }

    println!("\n📈 {}", "Winning round:".bright_cyan().bold());
    for round in 1..=result.max_rounds {
        if let Some(&count) = result.distribution.get(&round) {
            let pct = (count as f64 / result.won as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {round:>2}: {} {count:6} ({pct:5.1}%)", bar.green());
        }
    }
}

/// Print a non-fatal problem to stderr
pub fn print_warning(message: &str) {
    eprintln!("{} {message}", "warning:".yellow().bold());
}

/// Print a fatal problem to stderr
pub fn print_error(message: &str) {
    eprintln!("{} {message}", "error:".red().bold());
}
