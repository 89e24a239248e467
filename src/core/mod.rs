//! Core domain types
//!
//! This module contains the fundamental domain types with no hidden state.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterFeedback};
pub use word::{Word, WordError};

/// Fixed word length for the game
pub const WORD_LEN: usize = 5;
