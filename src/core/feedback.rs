//! Per-letter feedback for a guess against a target
//!
//! Each position is judged independently: Correct (right letter, right
//! position), Present (letter in the word, wrong position), or Absent (letter
//! not in the word once already-matched duplicates are accounted for). The
//! ordinal encoding 0/1/2 matches the compact external wire form.

use super::{WORD_LEN, Word};

/// Verdict for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LetterFeedback {
    Absent = 0,
    Present = 1,
    Correct = 2,
}

impl LetterFeedback {
    /// Compact ordinal encoding (0 = absent, 1 = present, 2 = correct)
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Decode an ordinal value back to a verdict
    #[inline]
    #[must_use]
    pub const fn from_ordinal(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Absent),
            1 => Some(Self::Present),
            2 => Some(Self::Correct),
            _ => None,
        }
    }
}

/// Feedback for a full guess, one verdict per letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; WORD_LEN]);

impl Feedback {
    /// All correct (the guess is the target)
    pub const SOLVED: Self = Self([LetterFeedback::Correct; WORD_LEN]);

    /// Create feedback from explicit per-position verdicts
    #[inline]
    #[must_use]
    pub const fn new(marks: [LetterFeedback; WORD_LEN]) -> Self {
        Self(marks)
    }

    /// Calculate the feedback when `guess` is compared against `target`
    ///
    /// Implements the exact duplicate-letter rules: exact matches are claimed
    /// first against a multiset of the target's letter counts, then remaining
    /// counts satisfy misplaced letters left to right. A guess with more
    /// copies of a letter than the target gets Present only for as many
    /// copies as the target holds.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Feedback, LetterFeedback, Word};
    ///
    /// let guess = Word::new("great").unwrap();
    /// let target = Word::new("gorge").unwrap();
    /// let feedback = Feedback::compare(&guess, &target);
    ///
    /// assert_eq!(feedback.get(0), LetterFeedback::Correct); // G
    /// assert_eq!(feedback.get(1), LetterFeedback::Present); // R
    /// assert_eq!(feedback.get(4), LetterFeedback::Absent); // T
    /// ```
    #[must_use]
    pub fn compare(guess: &Word, target: &Word) -> Self {
        let mut marks = [LetterFeedback::Absent; WORD_LEN];
        let mut remaining = target.char_counts();

        // First pass: exact position matches claim their letter
        // Allow: index needed to access guess[i], target[i], and set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.char_at(i) == target.char_at(i) {
                marks[i] = LetterFeedback::Correct;

                if let Some(count) = remaining.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters consume what the target has left
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if marks[i] == LetterFeedback::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&guess.char_at(i)) {
                if *count > 0 {
                    marks[i] = LetterFeedback::Present;
                    *count -= 1;
                }
            }
        }

        Self(marks)
    }

    /// Get the verdict at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn get(self, position: usize) -> LetterFeedback {
        self.0[position]
    }

    /// All per-position verdicts in order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[LetterFeedback; WORD_LEN] {
        &self.0
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_solved(self) -> bool {
        self.0 == [LetterFeedback::Correct; WORD_LEN]
    }

    /// Encode as ordinal values for compact transmission
    #[must_use]
    pub fn ordinals(self) -> [u8; WORD_LEN] {
        self.0.map(LetterFeedback::ordinal)
    }

    /// Decode from a sequence of ordinal values
    ///
    /// Returns `None` unless `values` holds exactly 5 entries in 0..=2.
    #[must_use]
    pub fn from_ordinals(values: &[u8]) -> Option<Self> {
        let values: [u8; WORD_LEN] = values.try_into().ok()?;

        let mut marks = [LetterFeedback::Absent; WORD_LEN];
        for (mark, value) in marks.iter_mut().zip(values) {
            *mark = LetterFeedback::from_ordinal(value)?;
        }

        Some(Self(marks))
    }

    /// Parse feedback from a string like "GY-GY", "21021", or "🟩🟨⬛🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/'2'/🟩 for correct
    /// - 'Y'/'y'/'1'/🟨 for present
    /// - '-'/'_'/'0'/⬛/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Feedback;
    ///
    /// let f1 = Feedback::parse("GY-GY").unwrap();
    /// let f2 = Feedback::parse("🟩🟨⬛🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LEN {
            return None;
        }

        let mut marks = [LetterFeedback::Absent; WORD_LEN];
        for (mark, ch) in marks.iter_mut().zip(chars) {
            *mark = match ch {
                'G' | 'g' | '2' | '🟩' => LetterFeedback::Correct,
                'Y' | 'y' | '1' | '🟨' => LetterFeedback::Present,
                '-' | '_' | '0' | '⬛' | '⬜' => LetterFeedback::Absent,
                _ => return None,
            };
        }

        Some(Self(marks))
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}
