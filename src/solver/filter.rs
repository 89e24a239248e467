//! Candidate filtering from guess feedback
//!
//! Removes every candidate that could not have produced the observed feedback
//! for the guess. The subtle part is duplicate letters: a letter that shows
//! an Absent verdict anywhere in the guess pins the candidate's count of that
//! letter to exactly the number of Correct plus Present verdicts it earned,
//! while a letter with no Absent verdict only sets a lower bound.

use crate::core::{Feedback, LetterFeedback, WORD_LEN, Word};
use rustc_hash::FxHashMap;

/// Keep only the candidates consistent with `feedback` for `guess`
///
/// Preserves the relative order of surviving words. An empty input or
/// feedback that eliminates everything both legally yield an empty set; the
/// latter signals feedback inconsistent with the dictionary, not a fault.
#[must_use]
pub fn filter_candidates(candidates: &[Word], guess: &Word, feedback: Feedback) -> Vec<Word> {
    let demands = letter_demands(guess, feedback);

    candidates
        .iter()
        .filter(|word| admits(word, guess, feedback, &demands))
        .cloned()
        .collect()
}

/// Occurrence constraint for one distinct guess letter
struct LetterDemand {
    /// Correct + Present verdicts for this letter
    required: usize,
    /// True when the letter also got an Absent verdict, capping the count
    capped: bool,
}

fn letter_demands(guess: &Word, feedback: Feedback) -> FxHashMap<u8, LetterDemand> {
    let mut demands: FxHashMap<u8, LetterDemand> = FxHashMap::default();

    for i in 0..WORD_LEN {
        let demand = demands.entry(guess.char_at(i)).or_insert(LetterDemand {
            required: 0,
            capped: false,
        });
        match feedback.get(i) {
            LetterFeedback::Correct | LetterFeedback::Present => demand.required += 1,
            LetterFeedback::Absent => demand.capped = true,
        }
    }

    demands
}

fn admits(
    word: &Word,
    guess: &Word,
    feedback: Feedback,
    demands: &FxHashMap<u8, LetterDemand>,
) -> bool {
    for i in 0..WORD_LEN {
        let letter = guess.char_at(i);
        match feedback.get(i) {
            // Correct positions must match exactly
            LetterFeedback::Correct => {
                if word.char_at(i) != letter {
                    return false;
                }
            }
            // Misplaced letters must exist, but not in this position
            LetterFeedback::Present => {
                if word.char_at(i) == letter || !word.has_letter(letter) {
                    return false;
                }
            }
            LetterFeedback::Absent => {}
        }
    }

    for (&letter, demand) in demands {
        let occurrences = word.count_of(letter);
        if demand.capped {
            if occurrences != demand.required {
                return false;
            }
        } else if occurrences < demand.required {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| word(t)).collect()
    }

    fn texts(candidates: &[Word]) -> Vec<&str> {
        candidates.iter().map(Word::text).collect()
    }

    #[test]
    fn correct_positions_must_match() {
        // g correct at position 0, everything else absent; the second g in
        // the guess is absent too, so survivors hold exactly one g
        let candidates = words(&["gaudy", "forge", "gorge", "windy"]);
        let guess = word("gorge");
        let feedback = Feedback::parse("g----").unwrap();

        let kept = filter_candidates(&candidates, &guess, feedback);
        assert_eq!(texts(&kept), vec!["gaudy"]);
    }

    #[test]
    fn survivors_keep_input_order() {
        let candidates = words(&["gouge", "gorge", "gaged"]);
        let guess = word("gaged");
        let feedback = Feedback::compare(&guess, &word("gorge"));

        let kept = filter_candidates(&candidates, &guess, feedback);
        assert_eq!(texts(&kept), vec!["gouge", "gorge"]);
    }

    #[test]
    fn duplicate_letters_exact_and_positional() {
        // gaged vs gorge gives [Correct, Absent, Present, Present, Absent]:
        // the candidate needs g at position 0, a second g elsewhere, an e
        // away from position 3, no a, and no d
        let candidates = words(&["gorge", "gauge", "gaged", "golem", "gouge"]);
        let guess = word("gaged");
        let feedback = Feedback::compare(&guess, &word("gorge"));
        assert_eq!(feedback.ordinals(), [2, 0, 1, 1, 0]);

        let kept = filter_candidates(&candidates, &guess, feedback);
        assert_eq!(texts(&kept), vec!["gorge", "gouge"]);
    }

    #[test]
    fn absent_duplicate_caps_letter_count_exactly() {
        // egged vs gorge: e is present once and absent once, so survivors
        // must hold exactly one e; g is never absent, so two g's are a floor
        let candidates = words(&["gorge", "geese", "genre", "elegy", "segue"]);
        let guess = word("egged");
        let feedback = Feedback::compare(&guess, &word("gorge"));
        assert_eq!(feedback.ordinals(), [1, 1, 1, 0, 0]);

        let kept = filter_candidates(&candidates, &guess, feedback);
        assert_eq!(texts(&kept), vec!["gorge"]);
    }

    #[test]
    fn uncapped_letter_sets_a_floor_not_a_ceiling() {
        // Two present g's demand at least two g's; one is not enough
        let guess = word("egged");
        let feedback = Feedback::new([
            LetterFeedback::Present,
            LetterFeedback::Present,
            LetterFeedback::Present,
            LetterFeedback::Absent,
            LetterFeedback::Absent,
        ]);

        let kept = filter_candidates(&words(&["genre"]), &guess, feedback);
        assert!(kept.is_empty());
    }

    #[test]
    fn misplaced_letter_must_move() {
        // e marked present at position 0 cannot stay at position 0
        let guess = word("eagle");
        let feedback = Feedback::parse("y----").unwrap();

        let kept = filter_candidates(&words(&["endow", "ombre"]), &guess, feedback);
        assert_eq!(texts(&kept), vec!["ombre"]);
    }

    #[test]
    fn empty_candidates_yield_empty_result() {
        let guess = word("gorge");
        let feedback = Feedback::SOLVED;
        assert!(filter_candidates(&[], &guess, feedback).is_empty());
    }

    #[test]
    fn impossible_feedback_yields_empty_result() {
        // All-correct for zzzzz eliminates every real word
        let candidates = words(&["gorge", "forge", "eagle"]);
        let kept = filter_candidates(&candidates, &word("zzzzz"), Feedback::SOLVED);
        assert!(kept.is_empty());
    }

    #[test]
    fn honest_feedback_never_eliminates_the_target() {
        let dictionary = words(&[
            "gorge", "forge", "eagle", "great", "egged", "gaged", "speed", "erase", "robot",
            "floor", "crane", "slate", "aaaaa", "ababa", "geese", "level", "onion",
        ]);

        for target in &dictionary {
            for guess in &dictionary {
                let feedback = Feedback::compare(guess, target);
                let kept = filter_candidates(&dictionary, guess, feedback);
                assert!(
                    kept.contains(target),
                    "target {target} eliminated by honest feedback for guess {guess}"
                );
            }
        }
    }

    #[test]
    fn filtering_never_grows_the_set() {
        let dictionary = words(&["gorge", "forge", "eagle", "great", "speed", "erase"]);
        for target in &dictionary {
            for guess in &dictionary {
                let feedback = Feedback::compare(guess, target);
                let kept = filter_candidates(&dictionary, guess, feedback);
                assert!(kept.len() <= dictionary.len());
            }
        }
    }

    #[test]
    fn wrong_guess_is_always_eliminated() {
        // A guess that is not the target cannot survive its own feedback
        let dictionary = words(&["gorge", "forge", "eagle", "egged", "geese"]);
        for target in &dictionary {
            for guess in &dictionary {
                if guess == target {
                    continue;
                }
                let feedback = Feedback::compare(guess, target);
                let kept = filter_candidates(&dictionary, guess, feedback);
                assert!(!kept.contains(guess), "{guess} survived vs {target}");
            }
        }
    }
}
