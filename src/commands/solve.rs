//! Word solving command
//!
//! Solves a specific target word and returns the solution path.

use crate::core::{Feedback, Word};
use crate::solver::{Policy, Session, SessionState};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_rounds: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_rounds: 6,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub solved: bool,
    pub steps: Vec<GuessStep>,
    pub target: String,
}

impl SolveResult {
    /// Number of rounds taken
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.steps.len()
    }
}

/// A single guess step in the solution path
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific word with the given policy over `dictionary`
///
/// # Errors
///
/// Returns an error if the target word is invalid (not 5 letters or contains
/// non-ASCII characters).
pub fn solve_word<P: Policy>(
    config: &SolveConfig,
    policy: P,
    dictionary: &[Word],
) -> Result<SolveResult, String> {
    let target = Word::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;

    let mut session = Session::with_budget(policy, dictionary, config.max_rounds);
    let mut steps: Vec<GuessStep> = Vec::new();

    while let Some(guess) = session.suggest() {
        let candidates_before = session.candidates().len();
        let feedback = Feedback::compare(&guess, &target);

        let Ok(state) = session.record(feedback) else {
            break;
        };

        let candidates_after = if state == SessionState::Solved {
            1
        } else {
            session.candidates().len()
        };

        steps.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            candidates_before,
            candidates_after,
        });

        if state == SessionState::Solved {
            break;
        }
    }

    Ok(SolveResult {
        solved: session.state() == SessionState::Solved,
        steps,
        target: config.target.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::FrequencyPolicy;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn solve_word_finds_the_target() {
        let dictionary = words_from_slice(WORDS);
        let config = SolveConfig::new("gorge".to_string());

        let result = solve_word(&config, FrequencyPolicy::default(), &dictionary).unwrap();

        assert!(result.solved);
        assert!(result.rounds() <= 6);
        assert_eq!(result.steps.last().unwrap().word, "gorge");
    }

    #[test]
    fn solve_path_is_deterministic() {
        let dictionary = words_from_slice(WORDS);
        let config = SolveConfig::new("gorge".to_string());

        let result = solve_word(&config, FrequencyPolicy::default(), &dictionary).unwrap();
        let path: Vec<&str> = result.steps.iter().map(|s| s.word.as_str()).collect();

        assert_eq!(path, vec!["stare", "grope", "gorge"]);
    }

    #[test]
    fn solve_records_candidate_reduction() {
        let dictionary = words_from_slice(WORDS);
        let config = SolveConfig::new("crane".to_string());

        let result = solve_word(&config, FrequencyPolicy::default(), &dictionary).unwrap();

        assert!(!result.steps.is_empty());
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let dictionary = words_from_slice(&WORDS[..50]);
        let config = SolveConfig::new("toolong".to_string());

        assert!(solve_word(&config, FrequencyPolicy::default(), &dictionary).is_err());
    }

    #[test]
    fn solve_unknown_target_completes_unsolved() {
        // A valid word missing from the dictionary is never guessed
        let dictionary = words_from_slice(&WORDS[..50]);
        let config = SolveConfig::new("zzzzz".to_string());

        let result = solve_word(&config, FrequencyPolicy::default(), &dictionary).unwrap();

        assert!(!result.solved);
    }

    #[test]
    fn solve_respects_max_rounds() {
        let dictionary = words_from_slice(WORDS);
        let mut config = SolveConfig::new("gorge".to_string());
        config.max_rounds = 2;

        let result = solve_word(&config, FrequencyPolicy::default(), &dictionary).unwrap();

        assert!(result.rounds() <= 2);
    }

    #[test]
    fn solve_single_word_dictionary_solves_in_one() {
        let dictionary = words_from_slice(&["gorge"]);
        let config = SolveConfig::new("gorge".to_string());

        let result = solve_word(&config, FrequencyPolicy::default(), &dictionary).unwrap();

        assert!(result.solved);
        assert_eq!(result.rounds(), 1);
    }
}
