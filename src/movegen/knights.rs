//! Knight move generation.

use crate::attacks::KNIGHT_JUMPS;
use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;

pub(super) fn moves(board: &Board, piece: &Piece) -> Vec<Move> {
    KNIGHT_JUMPS
        .iter()
        .filter_map(|&(df, dr)| piece.position.offset(df, dr))
        .filter(|&target| board.color_at(target) != Some(piece.color))
        .map(|target| Move::new(piece.position, target))
        .collect()
}
