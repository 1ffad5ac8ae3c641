//! Legal move generation.
//!
//! Each piece kind contributes raw candidate moves (movement geometry
//! only); this module filters them down to fully legal moves for the side
//! to move: check resolution, double check, pins, and king safety.

mod king;
mod knights;
mod pawns;
mod pins;
mod sliders;

use std::collections::HashSet;

use crate::attacks;
use crate::board::{Board, RoyalSlot};
use crate::chess_move::{Move, MoveEffect};
use crate::piece::{Piece, PieceKind};
use crate::position::Position;

/// Raw candidate moves for one piece, ignoring check and pin legality.
pub(crate) fn raw_moves(board: &Board, piece: &Piece) -> Vec<Move> {
    match piece.kind {
        PieceKind::Pawn { .. } => pawns::moves(board, piece),
        PieceKind::Knight => knights::moves(board, piece),
        PieceKind::Bishop => sliders::moves(board, piece, &attacks::DIAGONAL_STEPS),
        PieceKind::Rook { .. } => {
            let mut moves = sliders::moves(board, piece, &attacks::ORTHOGONAL_STEPS);
            // Any rook move forfeits that rook's castling rights.
            for mv in &mut moves {
                mv.effect = MoveEffect::ClearCastleRights;
            }
            moves
        }
        PieceKind::Queen => {
            let mut moves = sliders::moves(board, piece, &attacks::ORTHOGONAL_STEPS);
            moves.extend(sliders::moves(board, piece, &attacks::DIAGONAL_STEPS));
            moves
        }
        PieceKind::King { .. } => king::moves(board, piece),
    }
}

/// Generate the complete legal move list for the side to move.
///
/// When the side to move does not have exactly one royal piece, check and
/// pin semantics do not apply and the raw moves are returned unfiltered
/// (compatibility mode for non-standard boards).
pub(crate) fn legal_moves(board: &Board) -> Vec<Move> {
    let us = board.current_turn();
    let them = us.flip();

    let RoyalSlot::One(royal) = board.royal_slot(us) else {
        return board
            .slots()
            .iter()
            .flatten()
            .filter(|piece| piece.color == us)
            .flat_map(|piece| raw_moves(board, piece))
            .collect();
    };
    let royal_pos = board.slots()[royal]
        .as_ref()
        .map(|piece| piece.position)
        .expect("royal slot holds a piece");

    let checkers = attacks::attackers_of(board, royal_pos, them, None);

    // In single check, non-royal moves must land here: on the checker or on
    // a square blocking its line. In double check the mask is empty.
    let check_mask: Option<HashSet<Position>> = match checkers.as_slice() {
        [] => None,
        [checker] => {
            let mut mask: HashSet<Position> =
                attacks::between(*checker, royal_pos).into_iter().collect();
            mask.insert(*checker);
            Some(mask)
        }
        _ => Some(HashSet::new()),
    };

    // Squares the royal piece may not step onto, with its own square treated
    // as empty so a checking slider's ray extends through it.
    let royal_danger = attacks::attacked_squares(board, them, Some(royal_pos));

    let mut result = Vec::new();
    for (slot, piece) in board.slots().iter().enumerate() {
        let Some(piece) = piece else { continue };
        if piece.color != us {
            continue;
        }

        if slot == royal {
            for mv in raw_moves(board, piece) {
                if !royal_danger.contains(&mv.to) {
                    result.push(mv);
                }
            }
            continue;
        }

        // Double check: only the royal piece can resolve it.
        if checkers.len() >= 2 {
            continue;
        }

        let pin_mask = pins::pin_mask(board, piece.position, royal_pos, them);
        for mv in raw_moves(board, piece) {
            if let Some(mask) = &check_mask {
                // Capturing the checking pawn in passing resolves the check
                // even though the destination lies behind it.
                let resolves = mask.contains(&mv.to)
                    || matches!(mv.effect, MoveEffect::EnPassantCapture(square) if checkers.contains(&square));
                if !resolves {
                    continue;
                }
            }
            if let Some(mask) = &pin_mask
                && !mask.contains(&mv.to)
            {
                continue;
            }
            if mv.is_en_passant() {
                // The capture removes a pawn other than the mover, which the
                // pin probe cannot see; verify on a scratch copy.
                let preview = board.preview(mv);
                if !attacks::attackers_of(&preview, royal_pos, them, None).is_empty() {
                    continue;
                }
            }
            result.push(mv);
        }
    }
    result
}
