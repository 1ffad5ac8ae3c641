//! Pawn move generation: pushes, double pushes, captures, capture in
//! passing, and promotion.

use crate::attacks;
use crate::board::Board;
use crate::chess_move::{Move, MoveEffect};
use crate::piece::{Piece, PieceKind};
use crate::position::Position;
use crate::rank::Rank;

pub(super) fn moves(board: &Board, piece: &Piece) -> Vec<Move> {
    let mut out = Vec::new();
    let from = piece.position;
    let dir = attacks::pawn_direction(piece.color);
    let (start_rank, promotion_rank) = match dir {
        1 => (Rank::R2, Rank::R8),
        _ => (Rank::R7, Rank::R1),
    };

    if let Some(forward) = from.offset(0, dir)
        && board.piece_at(forward).is_none()
    {
        out.push(advance(from, forward, promotion_rank));
        if from.rank() == start_rank
            && let Some(double) = forward.offset(0, dir)
            && board.piece_at(double).is_none()
        {
            out.push(Move::with_effect(from, double, MoveEffect::SetEnPassant));
        }
    }

    for side in [-1, 1] {
        let Some(target) = from.offset(side, dir) else {
            continue;
        };
        match board.color_at(target) {
            Some(owner) if owner != piece.color => {
                out.push(advance(from, target, promotion_rank));
            }
            Some(_) => {}
            None => {
                // Capture in passing: an enemy pawn beside us whose double
                // step has not yet expired.
                if let Some(beside) = from.offset(side, 0)
                    && let Some(neighbor) = board.piece_at(beside)
                    && neighbor.color != piece.color
                    && matches!(
                        neighbor.kind,
                        PieceKind::Pawn {
                            en_passant_capturable: true
                        }
                    )
                {
                    out.push(Move::with_effect(
                        from,
                        target,
                        MoveEffect::EnPassantCapture(beside),
                    ));
                }
            }
        }
    }

    out
}

fn advance(from: Position, to: Position, promotion_rank: Rank) -> Move {
    if to.rank() == promotion_rank {
        Move::with_effect(from, to, MoveEffect::Promote(PieceKind::Queen))
    } else {
        Move::new(from, to)
    }
}
