//! Error types for the reading engine.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while driving a reading session.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The spread costs more credits than the user has.
    #[error("not enough credits: need {needed}, have {available}")]
    InsufficientCredits {
        /// Credits the spread costs.
        needed: u32,
        /// Credits currently available.
        available: u32,
    },

    /// A reading needs a non-empty question.
    #[error("the question cannot be empty")]
    EmptyQuestion,

    /// An operation was attempted in the wrong session phase.
    #[error("cannot {operation} while {phase}")]
    InvalidPhase {
        /// What the caller tried to do.
        operation: &'static str,
        /// The phase the session was in.
        phase: &'static str,
    },

    /// Interpretation was requested before every card was revealed.
    #[error("only {revealed} of {total} cards are revealed")]
    RevealIncomplete {
        /// Cards revealed so far.
        revealed: usize,
        /// Cards in the spread.
        total: usize,
    },

    /// The card at this index is still face down.
    #[error("card {0} is still face down")]
    HiddenCard(usize),

    /// No card exists at this index in the current spread.
    #[error("no card at index {0}")]
    NoSuchCard(usize),

    /// Drawing cards failed.
    #[error(transparent)]
    Draw(#[from] arcana_core::DrawError),

    /// Persisting the user state failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
