//! Guess selection policies
//!
//! Defines the Policy trait and the frequency-based implementation.
//!
//! Scoring convention: letter ranks ascend from most frequent (0) to least
//! frequent (25), a word's score is the sum of its letter ranks minus the
//! number of distinct letters times the uniqueness weight, and the lowest
//! score wins. Common letters and broad letter coverage both pull the score
//! down, so the selected guess probes as much of the candidate set as
//! possible. The two known weightings are 10 (coverage, the default) and 5
//! (balanced, leaning harder on raw letter frequency).

use super::ranking::LetterRanks;
use crate::core::Word;

/// A policy for selecting the best guess from the current candidates
pub trait Policy {
    /// Select the best guess from `candidates`
    ///
    /// Returns `None` only when `candidates` is empty.
    fn select_guess<'a>(&self, candidates: &'a [Word]) -> Option<&'a Word>;
}

impl<P: Policy + ?Sized> Policy for &P {
    fn select_guess<'a>(&self, candidates: &'a [Word]) -> Option<&'a Word> {
        (**self).select_guess(candidates)
    }
}

/// Letter-frequency scoring with a configurable distinct-letter bonus
pub struct FrequencyPolicy {
    uniqueness_weight: i32,
}

impl FrequencyPolicy {
    /// Weight favoring words that cover many distinct letters (default)
    pub const COVERAGE_WEIGHT: i32 = 10;

    /// Weight leaning harder on raw letter frequency
    pub const BALANCED_WEIGHT: i32 = 5;

    /// Create a policy with the given uniqueness weight
    #[must_use]
    pub const fn new(uniqueness_weight: i32) -> Self {
        Self { uniqueness_weight }
    }

    /// The distinct-letter weight this policy applies
    #[must_use]
    pub const fn uniqueness_weight(&self) -> i32 {
        self.uniqueness_weight
    }
}

impl Default for FrequencyPolicy {
    fn default() -> Self {
        Self::new(Self::COVERAGE_WEIGHT)
    }
}

impl Policy for FrequencyPolicy {
    fn select_guess<'a>(&self, candidates: &'a [Word]) -> Option<&'a Word> {
        // Ranks are recomputed from the current candidates on every call
        let ranks = LetterRanks::compute(candidates);

        // min_by_key keeps the first of equal minima, so ties resolve to the
        // earliest candidate in scan order
        candidates
            .iter()
            .min_by_key(|word| word_score(word, &ranks, self.uniqueness_weight))
    }
}

/// Sum of letter ranks minus the distinct-letter bonus; lower is better
fn word_score(word: &Word, ranks: &LetterRanks, uniqueness_weight: i32) -> i32 {
    let rank_sum: i32 = word
        .chars()
        .iter()
        .map(|&letter| i32::from(ranks.rank(letter)))
        .sum();

    rank_sum - unique_letter_count(word) * uniqueness_weight
}

fn unique_letter_count(word: &Word) -> i32 {
    let mut seen = 0u32;
    let mut count = 0i32;
    for &letter in word.chars() {
        let bit = 1 << (letter - b'a');
        if seen & bit == 0 {
            seen |= bit;
            count += 1;
        }
    }
    count
}

/// Enum wrapper for the known policy variants
///
/// Allows runtime selection of policy while maintaining static dispatch.
pub enum PolicyType {
    /// Coverage weighting (default)
    Coverage(FrequencyPolicy),
    /// Balanced weighting
    Balanced(FrequencyPolicy),
}

impl PolicyType {
    /// Create a policy from a name string
    ///
    /// Supported names: "coverage", "balanced". Defaults to coverage if the
    /// name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "balanced" => Self::Balanced(FrequencyPolicy::new(FrequencyPolicy::BALANCED_WEIGHT)),
            _ => Self::Coverage(FrequencyPolicy::default()),
        }
    }
}

impl Policy for PolicyType {
    fn select_guess<'a>(&self, candidates: &'a [Word]) -> Option<&'a Word> {
        match self {
            Self::Coverage(p) | Self::Balanced(p) => p.select_guess(candidates),
        }
    }
}
