//! Chess move representation: a (from, to) pair plus a side-effect tag.
//!
//! The effect tag is the closed set of mutations a move can carry beyond
//! relocating the mover and removing a captured occupant. It is interpreted
//! by `Board::make_move` and deliberately not exposed to callers: consumers
//! of the move list see only where a move goes.

use std::fmt;

use crate::piece::PieceKind;
use crate::position::Position;

/// A side-effect applied by `make_move` after the moving piece is relocated
/// and any occupant of the destination is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MoveEffect {
    /// No extra mutation.
    None,
    /// The mover (a rook or king) loses its castling rights.
    ClearCastleRights,
    /// The mover (a pawn that advanced two squares) becomes en-passant-capturable.
    SetEnPassant,
    /// Remove the pawn on the given square (captured in passing).
    EnPassantCapture(Position),
    /// Relocate the castling rook and clear both participants' rights.
    CastleRookMove { from: Position, to: Position },
    /// Replace the mover's kind (pawn reaching the final rank).
    Promote(PieceKind),
}

/// A legal-move candidate: source and destination squares plus the
/// side-effect that completes the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub(crate) effect: MoveEffect,
}

impl Move {
    /// Create a move with no side-effect.
    pub(crate) const fn new(from: Position, to: Position) -> Move {
        Move {
            from,
            to,
            effect: MoveEffect::None,
        }
    }

    /// Create a move carrying a side-effect.
    pub(crate) const fn with_effect(from: Position, to: Position, effect: MoveEffect) -> Move {
        Move { from, to, effect }
    }

    /// Return `true` if this move captures in passing.
    pub const fn is_en_passant(self) -> bool {
        matches!(self.effect, MoveEffect::EnPassantCapture(_))
    }

    /// Return `true` if this move castles.
    pub const fn is_castle(self) -> bool {
        matches!(self.effect, MoveEffect::CastleRookMove { .. })
    }

    /// Return `true` if this move promotes the mover.
    pub const fn is_promotion(self) -> bool {
        matches!(self.effect, MoveEffect::Promote(_))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
