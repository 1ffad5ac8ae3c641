//! Sliding move generation shared by bishops, rooks, and queens.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;

/// Walk each ray until the edge of the board or the first occupied square,
/// which is included only when it holds an enemy piece.
pub(super) fn moves(board: &Board, piece: &Piece, steps: &[(i8, i8)]) -> Vec<Move> {
    let mut out = Vec::new();
    for &(df, dr) in steps {
        let mut cursor = piece.position;
        while let Some(target) = cursor.offset(df, dr) {
            match board.color_at(target) {
                None => out.push(Move::new(piece.position, target)),
                Some(owner) => {
                    if owner != piece.color {
                        out.push(Move::new(piece.position, target));
                    }
                    break;
                }
            }
            cursor = target;
        }
    }
    out
}
