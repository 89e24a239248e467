//! Interactive assistant mode
//!
//! Text-based helper for a game played elsewhere: suggests a guess, reads
//! the feedback the real game produced, and narrows the candidate pool.

use crate::core::{Feedback, Word};
use crate::solver::{Policy, filter_candidates};
use std::io::{self, Write};

/// Run the interactive assistant loop
///
/// Candidates are recomputed from the full dictionary after every change to
/// the history, which is what makes `undo` possible.
///
/// # Errors
///
/// Returns an error on I/O failure reading user input.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_assist<P: Policy>(policy: P, dictionary: &[Word]) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wordle Assist - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest guesses ranked by letter frequency.");
    println!("After each guess, enter the feedback pattern:\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use -/_/⬛ for gray (not in word)");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    let mut history: Vec<(Word, Feedback)> = Vec::new();
    let mut turn = 1;

    loop {
        let candidates = narrow(dictionary, &history);

        if candidates.is_empty() {
            println!("\n❌ No candidates remain! Your feedback may be incorrect.");
            println!("Type 'undo' to go back, or 'new' to start over.\n");

            match read_input("Command")?.as_str() {
                "undo" => {
                    if history.pop().is_some() {
                        turn -= 1;
                        println!("✓ Undone! Back to turn {turn}\n");
                    } else {
                        println!("Nothing to undo!\n");
                    }
                }
                "new" => {
                    history.clear();
                    turn = 1;
                    println!("\n🔄 New game started!\n");
                }
                _ => {}
            }
            continue;
        }

        let Some(guess) = policy.select_guess(&candidates) else {
            return Err("No valid guesses available".to_string());
        };
        let guess = guess.clone();

        println!("────────────────────────────────────────────────────────────");
        println!("Turn {turn}: {} candidates remaining", candidates.len());
        println!("────────────────────────────────────────────────────────────");

        println!("\n📊 Suggested guess: {}", guess.text().to_uppercase());

        // Show remaining candidates once the pool is small
        if candidates.len() <= 10 {
            println!("\nRemaining candidates:");
            for candidate in &candidates {
                println!("  • {}", candidate.text().to_uppercase());
            }
        }
        println!();

        let feedback = loop {
            let input = read_input("Enter feedback (G/Y/-, 'win', or command)")?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    history.clear();
                    turn = 0; // Will be incremented to 1
                    println!("\n🔄 New game started!\n");
                    break None;
                }
                "undo" | "u" => {
                    if history.pop().is_some() {
                        turn -= 1;
                        println!("✓ Undone! Back to turn {turn}\n");
                        break None;
                    }
                    println!("Nothing to undo!\n");
                }
                "win" | "correct" | "yes" | "solved" => {
                    break Some(Feedback::SOLVED);
                }
                _ => {
                    if let Some(feedback) = Feedback::parse(&input) {
                        break Some(feedback);
                    }
                    println!("❌ Invalid pattern! Use G/Y/-, 'win', or '🟩🟨⬛🟩🟨'\n");
                }
            }
        };

        if let Some(feedback) = feedback {
            history.push((guess.clone(), feedback));

            if feedback.is_solved() {
                use colored::Colorize;

                println!("\n{}", "═".repeat(70).bright_cyan());
                println!(
                    "{}",
                    "    🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉    "
                        .bright_green()
                        .bold()
                );
                println!("{}", "═".repeat(70).bright_cyan());

                let performance = match turn {
                    1 => ("🏆 Perfect!", "Incredible hole-in-one!"),
                    2 => ("⭐ Excellent!", "Outstanding performance!"),
                    3 => ("💫 Great!", "Very well played!"),
                    4 => ("✨ Good!", "Nice work!"),
                    5 => ("👍 Solved!", "Got it!"),
                    _ => ("✓ Complete!", "Success!"),
                };

                println!("\n  {}", performance.0.bright_yellow().bold());
                println!("  {}", performance.1.bright_white());
                println!(
                    "\n  Solution found in {} {}",
                    turn.to_string().bright_cyan().bold(),
                    if turn == 1 { "guess" } else { "guesses" }
                );

                println!("\n  Guess history:");
                for (i, (word, fb)) in history.iter().enumerate() {
                    use crate::output::formatters::feedback_to_emoji;
                    println!(
                        "    {}. {} {}",
                        (i + 1).to_string().bright_black(),
                        word.text().to_uppercase().bright_white().bold(),
                        feedback_to_emoji(*fb)
                    );
                }

                println!("\n{}", "═".repeat(70).bright_cyan());
                println!();

                match read_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                    "yes" | "y" => {
                        history.clear();
                        turn = 0;
                        println!("\n🔄 New game started!\n");
                    }
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }

            turn += 1;
        }
    }
}

/// Re-apply every recorded round against the full dictionary
fn narrow(dictionary: &[Word], history: &[(Word, Feedback)]) -> Vec<Word> {
    let mut candidates = dictionary.to_vec();
    for (guess, feedback) in history {
        candidates = filter_candidates(&candidates, guess, *feedback);
    }
    candidates
}

/// Get user input with a prompt
fn read_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
