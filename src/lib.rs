//! Wordle Assist
//!
//! A Wordle assistant using letter-frequency scoring and constraint
//! filtering: suggest a guess, narrow candidates from the feedback, repeat.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_assist::core::{Feedback, Word};
//!
//! // Create words
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("slate").unwrap();
//!
//! // Compare them the way the game would
//! let feedback = Feedback::compare(&guess, &answer);
//! println!("Solved: {}", feedback.is_solved());
//! ```

// Core domain types
pub mod core;

// Guess selection and candidate filtering
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
