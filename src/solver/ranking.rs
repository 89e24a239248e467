//! Letter frequency ranking
//!
//! Ranks all 26 letters by how often they occur across the current candidate
//! set. Rank 0 is the most frequent letter, rank 25 the least; letters that do
//! not appear at all count as frequency zero. Ties break alphabetically so the
//! table is deterministic for a given candidate set.

use crate::core::Word;
use std::cmp::Reverse;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// Frequency-derived rank of each letter within a candidate set
///
/// Recomputed fresh from the candidate set on every selection; never cached
/// across rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterRanks([u8; ALPHABET_LEN]);

impl LetterRanks {
    /// Compute ranks from the letter frequencies of `candidates`
    ///
    /// Every occurrence counts, including repeats within a single word.
    #[must_use]
    pub fn compute(candidates: &[Word]) -> Self {
        let mut frequencies = [0u32; ALPHABET_LEN];
        for word in candidates {
            for &letter in word.chars() {
                frequencies[usize::from(letter - b'a')] += 1;
            }
        }

        // Most frequent letter first, alphabetical on ties
        let mut order: [u8; ALPHABET_LEN] = std::array::from_fn(|i| i as u8);
        order.sort_by_key(|&index| (Reverse(frequencies[usize::from(index)]), index));

        let mut ranks = [0u8; ALPHABET_LEN];
        for (rank, &index) in order.iter().enumerate() {
            ranks[usize::from(index)] = rank as u8;
        }

        Self(ranks)
    }

    /// Rank of a lowercase ASCII letter (0 = most frequent, 25 = least)
    ///
    /// # Panics
    /// Panics if `letter` is not in `b'a'..=b'z'`
    #[inline]
    #[must_use]
    pub fn rank(&self, letter: u8) -> u8 {
        self.0[usize::from(letter - b'a')]
    }
}
