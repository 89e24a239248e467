//! Display functions for command results

use super::formatters::feedback_to_emoji;
use crate::commands::{BenchResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            step.word.to_uppercase(),
            feedback_to_emoji(step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.solved {
        println!(
            "{}",
            format!("✅ Solved in {} rounds!", result.rounds())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} rounds", result.rounds())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_bench_result(result: &BenchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} {}",
        result.solved,
        format!(
            "({:.1}%)",
            result.solved as f64 / result.total_words.max(1) as f64 * 100.0
        )
        .green()
    );
    if result.failed > 0 {
        println!(
            "   Failed:           {} {}",
            result.failed,
            format!(
                "({:.1}%)",
                result.failed as f64 / result.total_words.max(1) as f64 * 100.0
            )
            .red()
        );
    }
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
        format!("{}", result.max_rounds).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Round Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(1);
    for rounds in 1..=6 {
        let count = result.distribution.get(&rounds).copied().unwrap_or(0);
        if result.solved > 0 {
            let percentage = count as f64 / result.solved as f64 * 100.0;
            let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );
            println!("   {rounds} rounds: {bar} {count:4} ({percentage:5.1}%)");
        }
    }
}
