//! King move generation, including castling.

use crate::attacks::{self, KING_STEPS};
use crate::board::Board;
use crate::chess_move::{Move, MoveEffect};
use crate::piece::{Piece, PieceKind};

pub(super) fn moves(board: &Board, piece: &Piece) -> Vec<Move> {
    let from = piece.position;
    let mut out: Vec<Move> = KING_STEPS
        .iter()
        .filter_map(|&(df, dr)| from.offset(df, dr))
        .filter(|&target| board.color_at(target) != Some(piece.color))
        .map(|target| Move::with_effect(from, target, MoveEffect::ClearCastleRights))
        .collect();

    let PieceKind::King { can_castle: true } = piece.kind else {
        return out;
    };
    let danger = attacks::attacked_squares(board, piece.color.flip(), None);
    if danger.contains(&from) {
        return out;
    }

    // Castle toward either rook still carrying its rights: the king slides
    // two squares, the rook lands on the square the king crossed. Both
    // transit squares must be empty, in bounds, and unattacked.
    for dir in [-1, 1] {
        let Some(crossed) = from.offset(dir, 0) else {
            continue;
        };
        let Some(destination) = crossed.offset(dir, 0) else {
            continue;
        };

        // Nearest occupied square along the rank must be our castling rook.
        let mut cursor = crossed;
        let rook_pos = loop {
            if board.piece_at(cursor).is_some() {
                break Some(cursor);
            }
            match cursor.offset(dir, 0) {
                Some(next) => cursor = next,
                None => break None,
            }
        };
        let Some(rook_pos) = rook_pos else { continue };
        if rook_pos == crossed || rook_pos == destination {
            continue;
        }
        let rook = board
            .piece_at(rook_pos)
            .expect("rank scan stopped on an occupied square");
        if rook.color != piece.color
            || !matches!(rook.kind, PieceKind::Rook { can_castle: true })
        {
            continue;
        }
        if danger.contains(&crossed) || danger.contains(&destination) {
            continue;
        }

        out.push(Move::with_effect(
            from,
            destination,
            MoveEffect::CastleRookMove {
                from: rook_pos,
                to: crossed,
            },
        ));
    }

    out
}
