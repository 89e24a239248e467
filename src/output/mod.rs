//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_bench_result, print_solve_result};
pub use formatters::{feedback_to_emoji, share_text};
