//! Formatting utilities for terminal output

use crate::commands::SolveResult;
use crate::core::{Feedback, LetterFeedback};

/// Format feedback as an emoji row
#[must_use]
pub fn feedback_to_emoji(feedback: Feedback) -> String {
    feedback
        .marks()
        .iter()
        .map(|mark| match mark {
            LetterFeedback::Absent => '⬛',
            LetterFeedback::Present => '🟨',
            LetterFeedback::Correct => '🟩',
        })
        .collect()
}

/// Build the shareable summary of a solve: a score line followed by one
/// emoji row per round, never revealing the guessed words
#[must_use]
pub fn share_text(result: &SolveResult, round_budget: usize) -> String {
    let score = if result.solved {
        result.rounds().to_string()
    } else {
        "X".to_string()
    };

    let mut text = format!("Wordle Assist {score}/{round_budget}\n");
    for step in &result.steps {
        text.push('\n');
        text.push_str(&feedback_to_emoji(step.feedback));
    }
    text
}
