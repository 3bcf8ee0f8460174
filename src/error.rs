//! Error types for advisor operations.

use thiserror::Error;

/// The token is not one of the thirteen rank labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid card rank")]
pub struct ParseRankError;

/// Errors in the cards supplied for a recommendation.
///
/// These are user-correctable; callers are expected to re-prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdviceError {
    /// The player hand has fewer than two cards.
    #[error("player needs at least 2 cards, got {found}")]
    TooFewCards {
        /// Number of valid cards supplied.
        found: usize,
    },
    /// No dealer upcard was supplied.
    #[error("dealer needs 1 card")]
    MissingUpcard,
    /// More than one dealer upcard was supplied.
    #[error("dealer needs exactly 1 card, got {found}")]
    TooManyUpcards {
        /// Number of valid cards supplied.
        found: usize,
    },
}

/// Errors that can occur while updating the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CountError {
    /// No recorded card is left to undo.
    #[error("no card to undo")]
    NothingToUndo,
}
