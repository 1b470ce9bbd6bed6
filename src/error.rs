//! Error types for round operations.

use thiserror::Error;

/// Errors that can occur during round operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Wager is zero or exceeds the available balance. Recoverable: the
    /// round state is unchanged and the caller should re-prompt.
    #[error("wager must be positive and no greater than the balance")]
    InvalidWager,
    /// Operation invoked outside its lifecycle state. Recoverable: signals
    /// that the caller is out of sync with the round.
    #[error("operation is not valid in the current round state")]
    InvalidState,
    /// A draw was requested from an empty deck. A full round consumes at
    /// most about 20 of the 52 cards, so this is an unrecoverable invariant
    /// violation, not a game event.
    #[error("deck exhausted")]
    DeckExhausted,
}
