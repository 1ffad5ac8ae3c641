//! Pieces as a closed tagged union, with the per-variant state the rules
//! depend on (castling rights, en passant vulnerability) carried on the
//! variant itself.

use std::fmt;
use std::mem;

use crate::color::Color;
use crate::position::Position;

/// The kind of a chess piece, including kind-specific rule state.
///
/// `can_castle` on rooks and kings is a right, not a location: it is true
/// until the piece moves, and a rook that returns to its home square does
/// not regain it. `en_passant_capturable` on a pawn is set by a two-square
/// advance and cleared at the start of the owning side's next turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn { en_passant_capturable: bool },
    Knight,
    Bishop,
    Rook { can_castle: bool },
    Queen,
    King { can_castle: bool },
}

impl PieceKind {
    /// Return the notation letter: P, N, B, R, Q, or K.
    pub const fn notation(self) -> char {
        match self {
            PieceKind::Pawn { .. } => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook { .. } => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King { .. } => 'K',
        }
    }

    /// Return `true` if both values are the same kind, ignoring variant state.
    #[inline]
    pub fn same_kind(self, other: PieceKind) -> bool {
        mem::discriminant(&self) == mem::discriminant(&other)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation())
    }
}

/// A piece on the board: its color, square, and kind-specific state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub position: Position,
    pub kind: PieceKind,
}

impl Piece {
    /// A pawn that has not yet been made en-passant-capturable.
    pub const fn pawn(color: Color, position: Position) -> Piece {
        Piece {
            color,
            position,
            kind: PieceKind::Pawn {
                en_passant_capturable: false,
            },
        }
    }

    /// A knight.
    pub const fn knight(color: Color, position: Position) -> Piece {
        Piece {
            color,
            position,
            kind: PieceKind::Knight,
        }
    }

    /// A bishop.
    pub const fn bishop(color: Color, position: Position) -> Piece {
        Piece {
            color,
            position,
            kind: PieceKind::Bishop,
        }
    }

    /// A rook that still holds its castling rights.
    pub const fn rook(color: Color, position: Position) -> Piece {
        Piece {
            color,
            position,
            kind: PieceKind::Rook { can_castle: true },
        }
    }

    /// A queen.
    pub const fn queen(color: Color, position: Position) -> Piece {
        Piece {
            color,
            position,
            kind: PieceKind::Queen,
        }
    }

    /// A king that still holds its castling rights.
    pub const fn king(color: Color, position: Position) -> Piece {
        Piece {
            color,
            position,
            kind: PieceKind::King { can_castle: true },
        }
    }

    /// Return the notation letter of this piece's kind.
    #[inline]
    pub const fn notation(&self) -> char {
        self.kind.notation()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.color, self.kind, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::{Piece, PieceKind};
    use crate::color::Color;
    use crate::position::Position;

    fn pos(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    #[test]
    fn notation_letters() {
        assert_eq!(Piece::pawn(Color::White, pos("e2")).notation(), 'P');
        assert_eq!(Piece::knight(Color::White, pos("b1")).notation(), 'N');
        assert_eq!(Piece::bishop(Color::Black, pos("c8")).notation(), 'B');
        assert_eq!(Piece::rook(Color::Black, pos("a8")).notation(), 'R');
        assert_eq!(Piece::queen(Color::White, pos("d1")).notation(), 'Q');
        assert_eq!(Piece::king(Color::Black, pos("e8")).notation(), 'K');
    }

    #[test]
    fn same_kind_ignores_state() {
        let fresh = PieceKind::Rook { can_castle: true };
        let moved = PieceKind::Rook { can_castle: false };
        assert!(fresh.same_kind(moved));
        assert!(!fresh.same_kind(PieceKind::Queen));
        assert!(
            PieceKind::Pawn {
                en_passant_capturable: true
            }
            .same_kind(PieceKind::Pawn {
                en_passant_capturable: false
            })
        );
    }

    #[test]
    fn constructors_grant_rights() {
        assert_eq!(
            Piece::rook(Color::White, pos("a1")).kind,
            PieceKind::Rook { can_castle: true }
        );
        assert_eq!(
            Piece::king(Color::White, pos("e1")).kind,
            PieceKind::King { can_castle: true }
        );
        assert_eq!(
            Piece::pawn(Color::White, pos("a2")).kind,
            PieceKind::Pawn {
                en_passant_capturable: false
            }
        );
    }

    #[test]
    fn display() {
        let piece = Piece::queen(Color::White, pos("d1"));
        assert_eq!(format!("{piece}"), "white Q on d1");
    }
}
