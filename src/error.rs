//! Error types for move selection.

use crate::position::Position;

/// Errors from asking the board to play a move it does not offer.
///
/// These are the only failures the public API signals; board state is
/// untouched when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The index does not refer to an entry in the current move list.
    #[error("move index {index} out of range ({available} moves available)")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of legal moves currently available.
        available: usize,
    },
    /// No available move has this (from, to) pair.
    #[error("no available move from {from} to {to}")]
    NoSuchMove {
        /// Requested source square.
        from: Position,
        /// Requested destination square.
        to: Position,
    },
}
