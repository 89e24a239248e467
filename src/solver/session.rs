//! Play session state machine
//!
//! Drives the guess/feedback/filter loop for one game. The session owns its
//! candidate set, so concurrent games never share mutable state.

use super::filter::filter_candidates;
use super::policy::Policy;
use crate::core::{Feedback, Word};
use std::fmt;

/// Rounds allowed before a session is exhausted
pub const DEFAULT_ROUND_BUDGET: usize = 6;

/// Where a session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Ready to produce the next guess
    AwaitingGuess,
    /// A guess is pending feedback
    AwaitingFeedback,
    /// The last feedback was all correct
    Solved,
    /// No candidates remain, or the round budget ran out
    Exhausted,
}

/// One completed round: the guess made and the feedback received
#[derive(Debug, Clone)]
pub struct Round {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Error type for session contract violations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Feedback was recorded with no guess pending
    NoPendingGuess,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPendingGuess => write!(f, "feedback recorded without a pending guess"),
        }
    }
}

impl std::error::Error for SessionError {}

/// A single game driven round by round
///
/// The caller supplies feedback either from [`Feedback::compare`] against a
/// known target or from an external source (a human reading the real board).
pub struct Session<P: Policy> {
    policy: P,
    candidates: Vec<Word>,
    history: Vec<Round>,
    pending: Option<Word>,
    state: SessionState,
    round_budget: usize,
}

impl<P: Policy> Session<P> {
    /// Start a session over a snapshot of `dictionary` with the default
    /// six-round budget
    #[must_use]
    pub fn new(policy: P, dictionary: &[Word]) -> Self {
        Self::with_budget(policy, dictionary, DEFAULT_ROUND_BUDGET)
    }

    /// Start a session with an explicit round budget
    #[must_use]
    pub fn with_budget(policy: P, dictionary: &[Word], round_budget: usize) -> Self {
        let candidates = dictionary.to_vec();
        let state = if candidates.is_empty() {
            SessionState::Exhausted
        } else {
            SessionState::AwaitingGuess
        };

        Self {
            policy,
            candidates,
            history: Vec::new(),
            pending: None,
            state,
            round_budget,
        }
    }

    /// Current state of the session
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Candidates still consistent with every recorded round
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Completed rounds in order
    #[must_use]
    pub fn history(&self) -> &[Round] {
        &self.history
    }

    /// Number of rounds played so far
    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }

    /// Produce the next guess
    ///
    /// Moves the session to `AwaitingFeedback`. Returns the already-pending
    /// guess if feedback has not arrived yet, and `None` once the session is
    /// solved or exhausted. An empty candidate set exhausts the session.
    pub fn suggest(&mut self) -> Option<Word> {
        match self.state {
            SessionState::AwaitingGuess => {
                if let Some(word) = self.policy.select_guess(&self.candidates).cloned() {
                    self.pending = Some(word.clone());
                    self.state = SessionState::AwaitingFeedback;
                    Some(word)
                } else {
                    self.state = SessionState::Exhausted;
                    None
                }
            }
            SessionState::AwaitingFeedback => self.pending.clone(),
            SessionState::Solved | SessionState::Exhausted => None,
        }
    }

    /// Record the feedback for the pending guess
    ///
    /// All-correct feedback solves the session; otherwise the candidates are
    /// filtered, and the session exhausts when none survive or the round
    /// budget is spent.
    ///
    /// # Errors
    /// Returns `SessionError::NoPendingGuess` if no guess is awaiting
    /// feedback.
    pub fn record(&mut self, feedback: Feedback) -> Result<SessionState, SessionError> {
        let guess = self.pending.take().ok_or(SessionError::NoPendingGuess)?;
        self.history.push(Round {
            guess: guess.clone(),
            feedback,
        });

        if feedback.is_solved() {
            self.state = SessionState::Solved;
        } else {
            self.candidates = filter_candidates(&self.candidates, &guess, feedback);
            self.state = if self.candidates.is_empty() || self.history.len() >= self.round_budget {
                SessionState::Exhausted
            } else {
                SessionState::AwaitingGuess
            };
        }

        Ok(self.state)
    }

    /// Play the session to completion against a known target
    ///
    /// The automated mode: each suggested guess is compared against `target`
    /// and the resulting feedback recorded, until the session solves or
    /// exhausts.
    pub fn run_auto(&mut self, target: &Word) -> SessionState {
        while let Some(guess) = self.suggest() {
            let feedback = Feedback::compare(&guess, target);
            if self.record(feedback).is_err() {
                break;
            }
        }
        self.state
    }
}
