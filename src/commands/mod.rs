//! Command implementations

pub mod assist;
pub mod bench;
pub mod solve;

pub use assist::run_assist;
pub use bench::{BenchResult, run_bench};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
