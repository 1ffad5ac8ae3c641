//! Move application: selecting from the legal move list, interpreting the
//! move's side-effect, and advancing the turn.

use tracing::debug;

use crate::board::Board;
use crate::chess_move::{Move, MoveEffect};
use crate::error::MoveError;
use crate::position::Position;

impl Board {
    /// Play the move at `index` in [`available_moves`](Board::available_moves).
    ///
    /// On success the moving piece is relocated, any captured piece is
    /// removed, the move's side-effect runs, the turn advances, en passant
    /// vulnerability expires for the side now to move, and the legal move
    /// list is recomputed in full.
    ///
    /// # Errors
    ///
    /// [`MoveError::IndexOutOfRange`] when `index` does not refer to an
    /// available move (including any index once the game is over); the
    /// board is unchanged.
    pub fn make_move(&mut self, index: usize) -> Result<(), MoveError> {
        let Some(mv) = self.available_moves().get(index).copied() else {
            return Err(MoveError::IndexOutOfRange {
                index,
                available: self.available_moves().len(),
            });
        };
        debug!(%mv, side = %self.current_turn(), "applying move");
        self.apply(mv);
        Ok(())
    }

    /// Play the available move with this (from, to) pair.
    ///
    /// Convenience for callers that resolve user input to squares rather
    /// than list indices.
    ///
    /// # Errors
    ///
    /// [`MoveError::NoSuchMove`] when no available move matches; the board
    /// is unchanged.
    pub fn make_move_from_to(&mut self, from: Position, to: Position) -> Result<(), MoveError> {
        let index = self
            .available_moves()
            .iter()
            .position(|mv| mv.from == from && mv.to == to)
            .ok_or(MoveError::NoSuchMove { from, to })?;
        self.make_move(index)
    }

    fn apply(&mut self, mv: Move) {
        let mover = self
            .slot_at(mv.from)
            .expect("available move originates from an occupied square");

        if let Some(captured) = self.slot_at(mv.to) {
            self.clear_slot(captured);
        }
        self.set_position(mover, mv.to);

        match mv.effect {
            MoveEffect::None => {}
            MoveEffect::ClearCastleRights => self.clear_castle_rights(mover),
            MoveEffect::SetEnPassant => self.mark_en_passant_capturable(mover),
            MoveEffect::EnPassantCapture(square) => {
                if let Some(slot) = self.slot_at(square) {
                    self.clear_slot(slot);
                }
            }
            MoveEffect::CastleRookMove { from, to } => {
                self.clear_castle_rights(mover);
                if let Some(rook) = self.slot_at(from) {
                    self.set_position(rook, to);
                    self.clear_castle_rights(rook);
                }
            }
            MoveEffect::Promote(kind) => self.set_kind(mover, kind),
        }

        self.advance_turn();
        self.expire_en_passant(self.current_turn());
        self.publish_available_moves();
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::color::Color;
    use crate::error::MoveError;
    use crate::piece::{Piece, PieceKind};
    use crate::position::Position;

    fn pos(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    fn play(board: &mut Board, from: &str, to: &str) {
        board
            .make_move_from_to(pos(from), pos(to))
            .unwrap_or_else(|err| panic!("{from}{to} should be legal: {err}"));
    }

    #[test]
    fn out_of_range_index_is_rejected_without_state_change() {
        let mut board = Board::new();
        let before = board.pieces();

        let err = board.make_move(20).unwrap_err();
        assert_eq!(
            err,
            MoveError::IndexOutOfRange {
                index: 20,
                available: 20
            }
        );
        assert_eq!(board.pieces(), before);
        assert_eq!(board.current_turn(), Color::White);
    }

    #[test]
    fn unavailable_pair_is_rejected_without_state_change() {
        let mut board = Board::new();
        let err = board.make_move_from_to(pos("e2"), pos("e5")).unwrap_err();
        assert_eq!(
            err,
            MoveError::NoSuchMove {
                from: pos("e2"),
                to: pos("e5")
            }
        );
        assert_eq!(board.current_turn(), Color::White);
        assert_eq!(board.available_moves().len(), 20);
    }

    #[test]
    fn move_relocates_and_advances_turn() {
        let mut board = Board::new();
        play(&mut board, "e2", "e4");

        assert!(board.piece_at(pos("e2")).is_none());
        assert_eq!(board.piece_at(pos("e4")).map(|p| p.notation()), Some('P'));
        assert_eq!(board.current_turn(), Color::Black);
        assert_eq!(board.available_moves().len(), 20);
    }

    #[test]
    fn capture_removes_the_occupant() {
        let mut board = Board::new();
        play(&mut board, "e2", "e4");
        play(&mut board, "d7", "d5");
        play(&mut board, "e4", "d5");

        assert_eq!(board.pieces().len(), 31);
        let on_d5 = board.piece_at(pos("d5")).unwrap();
        assert_eq!(on_d5.color, Color::White);
        assert_eq!(on_d5.notation(), 'P');
    }

    #[test]
    fn double_step_marks_pawn_en_passant_capturable() {
        let mut board = Board::new();
        play(&mut board, "e2", "e4");

        let pawn = board.piece_at(pos("e4")).unwrap();
        assert_eq!(
            pawn.kind,
            PieceKind::Pawn {
                en_passant_capturable: true
            }
        );
    }

    #[test]
    fn en_passant_flag_expires_when_owner_comes_back_on_move() {
        let mut board = Board::new();
        play(&mut board, "e2", "e4");
        play(&mut board, "g8", "f6");

        // Black has replied; once White moves again the e4 pawn's
        // vulnerability is gone.
        play(&mut board, "d2", "d3");
        let pawn = board.piece_at(pos("e4")).unwrap();
        assert_eq!(
            pawn.kind,
            PieceKind::Pawn {
                en_passant_capturable: false
            }
        );
    }

    #[test]
    fn en_passant_capture_removes_the_passed_pawn() {
        let mut board = Board::new();
        play(&mut board, "e2", "e4");
        play(&mut board, "a7", "a6");
        play(&mut board, "e4", "e5");
        play(&mut board, "d7", "d5");

        // White captures in passing: e5xd6 removes the d5 pawn.
        play(&mut board, "e5", "d6");
        assert!(board.piece_at(pos("d5")).is_none());
        assert_eq!(board.piece_at(pos("d6")).map(|p| p.notation()), Some('P'));
        assert_eq!(board.pieces().len(), 31);
    }

    #[test]
    fn kingside_castle_moves_both_pieces_and_clears_rights() {
        let mut board = Board::from_pieces(
            vec![
                Piece::king(Color::White, pos("e1")),
                Piece::rook(Color::White, pos("h1")),
                Piece::king(Color::Black, pos("e8")),
            ],
            vec![Color::White, Color::Black],
        );
        play(&mut board, "e1", "g1");

        assert_eq!(board.piece_at(pos("g1")).map(|p| p.notation()), Some('K'));
        assert_eq!(board.piece_at(pos("f1")).map(|p| p.notation()), Some('R'));
        assert!(board.piece_at(pos("e1")).is_none());
        assert!(board.piece_at(pos("h1")).is_none());
        assert_eq!(
            board.piece_at(pos("g1")).unwrap().kind,
            PieceKind::King { can_castle: false }
        );
        assert_eq!(
            board.piece_at(pos("f1")).unwrap().kind,
            PieceKind::Rook { can_castle: false }
        );
    }

    #[test]
    fn king_move_forfeits_castling_rights() {
        let mut board = Board::new();
        play(&mut board, "e2", "e4");
        play(&mut board, "e7", "e5");
        play(&mut board, "e1", "e2");

        assert_eq!(
            board.piece_at(pos("e2")).unwrap().kind,
            PieceKind::King { can_castle: false }
        );
    }

    #[test]
    fn rook_rights_do_not_return_with_the_rook() {
        let mut board = Board::new();
        play(&mut board, "h2", "h4");
        play(&mut board, "h7", "h5");
        play(&mut board, "h1", "h3");
        play(&mut board, "a7", "a6");
        play(&mut board, "h3", "h1");

        assert_eq!(
            board.piece_at(pos("h1")).unwrap().kind,
            PieceKind::Rook { can_castle: false }
        );
    }

    #[test]
    fn promotion_replaces_pawn_with_queen_in_place() {
        let mut board = Board::from_pieces(
            vec![
                Piece::king(Color::White, pos("e1")),
                Piece::pawn(Color::White, pos("a7")),
                Piece::king(Color::Black, pos("h8")),
            ],
            vec![Color::White, Color::Black],
        );
        play(&mut board, "a7", "a8");

        let promoted = board.piece_at(pos("a8")).unwrap();
        assert_eq!(promoted.kind, PieceKind::Queen);
        assert_eq!(promoted.color, Color::White);
        assert_eq!(board.pieces().len(), 3);
    }

    #[test]
    fn no_moves_accepted_in_terminal_state() {
        // Fool's mate
        let mut board = Board::new();
        play(&mut board, "f2", "f3");
        play(&mut board, "e7", "e5");
        play(&mut board, "g2", "g4");
        play(&mut board, "d8", "h4");

        assert!(board.is_terminal());
        assert!(board.in_check(Color::White));
        assert_eq!(
            board.make_move(0),
            Err(MoveError::IndexOutOfRange {
                index: 0,
                available: 0
            })
        );
    }

    #[test]
    fn set_default_game_leaves_terminal_state() {
        let mut board = Board::new();
        play(&mut board, "f2", "f3");
        play(&mut board, "e7", "e5");
        play(&mut board, "g2", "g4");
        play(&mut board, "d8", "h4");
        assert!(board.is_terminal());

        board.set_default_game();
        assert!(!board.is_terminal());
        assert_eq!(board.available_moves().len(), 20);
        assert_eq!(board.pieces().len(), 32);
    }
}
