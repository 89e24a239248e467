//! Wordle Assist - CLI
//!
//! Interactive assistant, automated solve, and benchmark modes over an
//! embedded dictionary or a custom word list.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_assist::{
    commands::{SolveConfig, run_assist, run_bench, solve_word},
    core::Word,
    output::{print_bench_result, print_solve_result, share_text},
    solver::PolicyType,
    wordlists::{WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Wordle assistant using letter-frequency scoring and constraint filtering",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Scoring policy: coverage (default) or balanced
    #[arg(short, long, global = true, default_value = "coverage")]
    policy: String,

    /// Wordlist: 'embedded' (default) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant mode (default)
    Assist,

    /// Solve a specific target word automatically
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,

        /// Print the shareable emoji summary
        #[arg(long)]
        share: bool,
    },

    /// Benchmark assistant performance
    Bench {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Test every word in the dictionary
        #[arg(long)]
        all: bool,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist_mode: &str) -> Result<Vec<Word>> {
    use wordle_assist::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;
    let policy = PolicyType::from_name(&cli.policy);

    // Default to the interactive assistant if no command given
    let command = cli.command.unwrap_or(Commands::Assist);

    match command {
        Commands::Assist => run_assist(&policy, &dictionary).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve {
            word,
            verbose,
            share,
        } => {
            let config = SolveConfig::new(word);
            let result =
                solve_word(&config, &policy, &dictionary).map_err(|e| anyhow::anyhow!(e))?;

            print_solve_result(&result, verbose);
            if share {
                println!("\n{}", share_text(&result, config.max_rounds));
            }
            Ok(())
        }
        Commands::Bench { count, all } => {
            let sample = if all { None } else { Some(count.min(dictionary.len())) };
            if let Some(n) = sample {
                println!("Running benchmark on {n} random words...");
            } else {
                println!("Running benchmark on all {} words...", dictionary.len());
            }

            let result = run_bench(&policy, &dictionary, sample);
            print_bench_result(&result);
            Ok(())
        }
    }
}
