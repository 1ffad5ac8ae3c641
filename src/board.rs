//! The chess board: piece arena, turn order, and the authoritative legal-move list.

use std::fmt;

use tracing::trace;

use crate::attacks;
use crate::chess_move::{Move, MoveEffect};
use crate::color::Color;
use crate::file::File;
use crate::movegen;
use crate::piece::{Piece, PieceKind};
use crate::position::Position;
use crate::rank::Rank;

/// Outcome of looking up the side's royal piece (the piece whose capture
/// would end the game — the king in standard chess).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RoyalSlot {
    /// Exactly one royal piece, at this arena slot.
    One(usize),
    /// Zero or multiple royal pieces: check and pin semantics do not apply.
    Degenerate,
}

/// Complete game state.
///
/// Pieces live in an arena of owned slots; a captured piece leaves a `None`
/// behind, so slot indices stay stable for the lifetime of a game. The
/// cached [`available_moves`](Board::available_moves) list is rebuilt in
/// full after every mutation and swapped in as one assignment — it is never
/// observable in a partially updated state.
#[derive(Clone)]
pub struct Board {
    pieces: Vec<Option<Piece>>,
    turn_order: Vec<Color>,
    current_turn: usize,
    royal_notation: char,
    available_moves: Vec<Move>,
}

impl Board {
    /// Create a board holding the standard starting position, White to move.
    pub fn new() -> Board {
        let mut board = Board {
            pieces: Vec::new(),
            turn_order: Vec::new(),
            current_turn: 0,
            royal_notation: 'K',
            available_moves: Vec::new(),
        };
        board.set_default_game();
        board
    }

    /// Create a board from an arbitrary piece set and turn order.
    ///
    /// Intended for custom or variant setups; positions with zero or
    /// multiple royal pieces for the side to move fall back to raw
    /// (unfiltered) move generation. An empty `turn_order` defaults to
    /// White then Black.
    pub fn from_pieces(pieces: Vec<Piece>, turn_order: Vec<Color>) -> Board {
        let turn_order = if turn_order.is_empty() {
            vec![Color::White, Color::Black]
        } else {
            turn_order
        };
        let mut board = Board {
            pieces: pieces.into_iter().map(Some).collect(),
            turn_order,
            current_turn: 0,
            royal_notation: 'K',
            available_moves: Vec::new(),
        };
        board.publish_available_moves();
        board
    }

    /// Reset to the standard 32-piece game: White to move, kings royal.
    pub fn set_default_game(&mut self) {
        self.turn_order = vec![Color::White, Color::Black];
        self.current_turn = 0;
        self.royal_notation = 'K';

        let back_rank = |color: Color, rank: Rank| {
            [
                Piece::rook(color, Position::new(File::A, rank)),
                Piece::knight(color, Position::new(File::B, rank)),
                Piece::bishop(color, Position::new(File::C, rank)),
                Piece::queen(color, Position::new(File::D, rank)),
                Piece::king(color, Position::new(File::E, rank)),
                Piece::bishop(color, Position::new(File::F, rank)),
                Piece::knight(color, Position::new(File::G, rank)),
                Piece::rook(color, Position::new(File::H, rank)),
            ]
        };
        let pawn_rank =
            |color: Color, rank: Rank| File::ALL.map(|file| Piece::pawn(color, Position::new(file, rank)));

        let mut pieces = Vec::with_capacity(32);
        pieces.extend(back_rank(Color::White, Rank::R1));
        pieces.extend(pawn_rank(Color::White, Rank::R2));
        pieces.extend(pawn_rank(Color::Black, Rank::R7));
        pieces.extend(back_rank(Color::Black, Rank::R8));
        self.pieces = pieces.into_iter().map(Some).collect();

        self.publish_available_moves();
    }

    /// Return `(notation, color, position)` for every piece, in arena slot order.
    pub fn pieces(&self) -> Vec<(char, Color, Position)> {
        self.pieces
            .iter()
            .flatten()
            .map(|piece| (piece.notation(), piece.color, piece.position))
            .collect()
    }

    /// Return the color whose turn it is.
    pub fn current_turn(&self) -> Color {
        self.turn_order[self.current_turn]
    }

    /// Return the complete legal move list for the side to move.
    ///
    /// The list is recomputed after every successful [`make_move`]
    /// (Board::make_move) and is never stale. Order is deterministic: arena
    /// slot order, then each piece's generation order.
    pub fn available_moves(&self) -> &[Move] {
        &self.available_moves
    }

    /// Return `true` if `color`'s royal piece is attacked by the opponent.
    ///
    /// With zero or multiple royal pieces (non-standard boards) there is no
    /// check to report and this returns `false`.
    pub fn in_check(&self, color: Color) -> bool {
        match self.royal_slot(color) {
            RoyalSlot::One(slot) => {
                let position = self.pieces[slot]
                    .as_ref()
                    .map(|piece| piece.position)
                    .expect("royal slot holds a piece");
                !attacks::attackers_of(self, position, color.flip(), None).is_empty()
            }
            RoyalSlot::Degenerate => false,
        }
    }

    /// Return `true` if the side to move has no legal moves.
    ///
    /// The game result is then read through [`in_check`](Board::in_check):
    /// check means the side to move is checkmated, otherwise stalemate.
    pub fn is_terminal(&self) -> bool {
        self.available_moves.is_empty()
    }

    /// Return an ASCII renderer for the board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }

    // --- crate-internal accessors ---

    /// The raw arena: `None` marks a captured slot.
    pub(crate) fn slots(&self) -> &[Option<Piece>] {
        &self.pieces
    }

    /// The piece standing on `position`, if any.
    pub(crate) fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.pieces
            .iter()
            .flatten()
            .find(|piece| piece.position == position)
    }

    /// The color holding `position`, if occupied.
    pub(crate) fn color_at(&self, position: Position) -> Option<Color> {
        self.piece_at(position).map(|piece| piece.color)
    }

    /// The arena slot of the piece on `position`, if occupied.
    pub(crate) fn slot_at(&self, position: Position) -> Option<usize> {
        self.pieces
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|piece| piece.position == position))
    }

    /// Locate `color`'s royal piece.
    pub(crate) fn royal_slot(&self, color: Color) -> RoyalSlot {
        let mut found = None;
        for (slot, piece) in self.pieces.iter().enumerate() {
            let Some(piece) = piece else { continue };
            if piece.color == color && piece.notation() == self.royal_notation {
                if found.is_some() {
                    return RoyalSlot::Degenerate;
                }
                found = Some(slot);
            }
        }
        match found {
            Some(slot) => RoyalSlot::One(slot),
            None => RoyalSlot::Degenerate,
        }
    }

    pub(crate) fn set_position(&mut self, slot: usize, position: Position) {
        if let Some(piece) = self.pieces[slot].as_mut() {
            piece.position = position;
        }
    }

    pub(crate) fn set_kind(&mut self, slot: usize, kind: PieceKind) {
        if let Some(piece) = self.pieces[slot].as_mut() {
            piece.kind = kind;
        }
    }

    pub(crate) fn clear_slot(&mut self, slot: usize) {
        self.pieces[slot] = None;
    }

    /// Revoke the castling rights of the rook or king in `slot`.
    pub(crate) fn clear_castle_rights(&mut self, slot: usize) {
        if let Some(piece) = self.pieces[slot].as_mut() {
            match piece.kind {
                PieceKind::Rook { .. } => piece.kind = PieceKind::Rook { can_castle: false },
                PieceKind::King { .. } => piece.kind = PieceKind::King { can_castle: false },
                _ => {}
            }
        }
    }

    /// Mark the pawn in `slot` as capturable in passing.
    pub(crate) fn mark_en_passant_capturable(&mut self, slot: usize) {
        if let Some(piece) = self.pieces[slot].as_mut()
            && let PieceKind::Pawn { .. } = piece.kind
        {
            piece.kind = PieceKind::Pawn {
                en_passant_capturable: true,
            };
        }
    }

    /// Cyclically advance to the next entry of the turn order.
    pub(crate) fn advance_turn(&mut self) {
        self.current_turn = (self.current_turn + 1) % self.turn_order.len();
    }

    /// Clear `en_passant_capturable` on every pawn of `color`. Called when
    /// `color` comes back on move: the vulnerability lasts exactly one
    /// enemy turn.
    pub(crate) fn expire_en_passant(&mut self, color: Color) {
        for piece in self.pieces.iter_mut().flatten() {
            if piece.color == color
                && let PieceKind::Pawn { en_passant_capturable } = &mut piece.kind
            {
                *en_passant_capturable = false;
            }
        }
    }

    /// Rebuild the legal move list and swap it in as one assignment.
    pub(crate) fn publish_available_moves(&mut self) {
        let moves = movegen::legal_moves(self);
        trace!(
            side = %self.current_turn(),
            count = moves.len(),
            "recomputed available moves"
        );
        self.available_moves = moves;
    }

    /// Scratch copy with `mv`'s relocation (and en passant removal) applied
    /// but no move-list recomputation. Used to test whether a candidate
    /// leaves the royal piece attacked.
    pub(crate) fn preview(&self, mv: Move) -> Board {
        let mut next = self.clone();
        if let MoveEffect::EnPassantCapture(square) = mv.effect
            && let Some(slot) = next.slot_at(square)
        {
            next.clear_slot(slot);
        }
        if let Some(slot) = next.slot_at(mv.to) {
            next.clear_slot(slot);
        }
        if let Some(slot) = next.slot_at(mv.from) {
            next.set_position(slot, mv.to);
        }
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ {} to move }}", self.current_turn())?;
        write!(f, "{}", self.pretty())
    }
}

/// ASCII board renderer: ranks 8 down to 1, uppercase White, lowercase
/// Black, `.` for empty squares.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "{rank}  ")?;
            for file in File::ALL {
                let c = match board.piece_at(Position::new(file, rank)) {
                    Some(piece) if piece.color == Color::White => piece.notation(),
                    Some(piece) => piece.notation().to_ascii_lowercase(),
                    None => '.',
                };
                if file < File::H {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, RoyalSlot};
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::position::Position;

    fn pos(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    #[test]
    fn default_game_has_32_pieces() {
        let board = Board::new();
        let pieces = board.pieces();
        assert_eq!(pieces.len(), 32);
        assert_eq!(board.current_turn(), Color::White);
        assert_eq!(
            pieces.iter().filter(|(_, color, _)| *color == Color::White).count(),
            16
        );
    }

    #[test]
    fn default_game_piece_placement() {
        let board = Board::new();
        assert_eq!(board.piece_at(pos("e1")).map(|p| p.notation()), Some('K'));
        assert_eq!(board.piece_at(pos("d8")).map(|p| p.notation()), Some('Q'));
        assert_eq!(board.piece_at(pos("a1")).map(|p| p.notation()), Some('R'));
        assert_eq!(board.piece_at(pos("g8")).map(|p| p.notation()), Some('N'));
        assert_eq!(board.piece_at(pos("e2")).map(|p| p.notation()), Some('P'));
        assert!(board.piece_at(pos("e4")).is_none());
    }

    #[test]
    fn royal_slot_standard_and_degenerate() {
        let board = Board::new();
        assert!(matches!(board.royal_slot(Color::White), RoyalSlot::One(_)));
        assert!(matches!(board.royal_slot(Color::Black), RoyalSlot::One(_)));

        let no_king = Board::from_pieces(
            vec![Piece::rook(Color::White, pos("a1"))],
            vec![Color::White, Color::Black],
        );
        assert_eq!(no_king.royal_slot(Color::White), RoyalSlot::Degenerate);

        let two_kings = Board::from_pieces(
            vec![
                Piece::king(Color::White, pos("a1")),
                Piece::king(Color::White, pos("h8")),
            ],
            vec![Color::White, Color::Black],
        );
        assert_eq!(two_kings.royal_slot(Color::White), RoyalSlot::Degenerate);
    }

    #[test]
    fn in_check_detects_attack_on_king() {
        let board = Board::from_pieces(
            vec![
                Piece::king(Color::White, pos("e1")),
                Piece::king(Color::Black, pos("e8")),
                Piece::rook(Color::Black, pos("e5")),
            ],
            vec![Color::White, Color::Black],
        );
        assert!(board.in_check(Color::White));
        assert!(!board.in_check(Color::Black));
    }

    #[test]
    fn in_check_false_without_a_king() {
        let board = Board::from_pieces(
            vec![
                Piece::rook(Color::White, pos("a1")),
                Piece::rook(Color::Black, pos("a8")),
            ],
            vec![Color::White, Color::Black],
        );
        assert!(!board.in_check(Color::White));
        assert!(!board.in_check(Color::Black));
    }

    #[test]
    fn starting_position_not_in_check_or_terminal() {
        let board = Board::new();
        assert!(!board.in_check(Color::White));
        assert!(!board.in_check(Color::Black));
        assert!(!board.is_terminal());
    }

    #[test]
    fn clone_is_independent() {
        let original = Board::new();
        let mut copy = original.clone();
        copy.make_move(0).unwrap();

        assert_eq!(original.pieces().len(), 32);
        assert_eq!(original.current_turn(), Color::White);
        assert_eq!(original.available_moves().len(), 20);
        assert_eq!(copy.current_turn(), Color::Black);
    }

    #[test]
    fn pretty_renders_starting_position() {
        let board = Board::new();
        let rendered = format!("{}", board.pretty());
        let expected = "\
8  r n b q k b n r
7  p p p p p p p p
6  . . . . . . . .
5  . . . . . . . .
4  . . . . . . . .
3  . . . . . . . .
2  P P P P P P P P
1  R N B Q K B N R
   a b c d e f g h";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn from_pieces_empty_turn_order_defaults() {
        let board = Board::from_pieces(vec![Piece::king(Color::White, pos("e1"))], vec![]);
        assert_eq!(board.current_turn(), Color::White);
    }
}
