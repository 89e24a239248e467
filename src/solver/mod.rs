//! Guess selection and candidate narrowing
//!
//! The engine behind each round: rank letters by frequency, pick the most
//! informative guess, and shrink the candidate set with the feedback received.

mod filter;
mod policy;
mod ranking;
mod session;

pub use filter::filter_candidates;
pub use policy::{FrequencyPolicy, Policy, PolicyType};
pub use ranking::{ALPHABET_LEN, LetterRanks};
pub use session::{DEFAULT_ROUND_BUDGET, Round, Session, SessionError, SessionState};
