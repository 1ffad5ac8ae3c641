//! Attack-square computation.
//!
//! Attack sets use capture geometry, not raw move sets: a pawn attacks its
//! two forward diagonals whether or not they are occupied (and never the
//! square it pushes to), and a square holding a piece of the attacking side
//! still counts as attacked (defended). Sliding rays stop at the first
//! occupied square, inclusive.
//!
//! Every function takes an optional `ignore` square that is treated as
//! empty. The legality filter uses it to let rays extend through the king
//! (a king cannot retreat along the ray that checks it) and to probe pins
//! without mutating the arena.

use std::collections::HashSet;

use crate::board::Board;
use crate::color::Color;
use crate::piece::{Piece, PieceKind};
use crate::position::Position;

/// Rook / file-and-rank directions.
pub(crate) const ORTHOGONAL_STEPS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Bishop / diagonal directions.
pub(crate) const DIAGONAL_STEPS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The eight knight jumps.
pub(crate) const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// The eight king steps.
pub(crate) const KING_STEPS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Rank a pawn of `color` advances toward.
#[inline]
pub(crate) const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

fn occupied(board: &Board, position: Position, ignore: Option<Position>) -> bool {
    if ignore == Some(position) {
        return false;
    }
    board.piece_at(position).is_some()
}

fn ray_attacks(
    board: &Board,
    from: Position,
    steps: &[(i8, i8)],
    ignore: Option<Position>,
    out: &mut Vec<Position>,
) {
    for &(df, dr) in steps {
        let mut cursor = from;
        while let Some(next) = cursor.offset(df, dr) {
            out.push(next);
            if occupied(board, next, ignore) {
                break;
            }
            cursor = next;
        }
    }
}

/// Squares `piece` attacks (could capture on), given the current occupancy.
pub(crate) fn piece_attacks(board: &Board, piece: &Piece, ignore: Option<Position>) -> Vec<Position> {
    let mut out = Vec::new();
    let from = piece.position;
    match piece.kind {
        PieceKind::Pawn { .. } => {
            let dir = pawn_direction(piece.color);
            for df in [-1, 1] {
                if let Some(target) = from.offset(df, dir) {
                    out.push(target);
                }
            }
        }
        PieceKind::Knight => {
            for (df, dr) in KNIGHT_JUMPS {
                if let Some(target) = from.offset(df, dr) {
                    out.push(target);
                }
            }
        }
        PieceKind::Bishop => ray_attacks(board, from, &DIAGONAL_STEPS, ignore, &mut out),
        PieceKind::Rook { .. } => ray_attacks(board, from, &ORTHOGONAL_STEPS, ignore, &mut out),
        PieceKind::Queen => {
            ray_attacks(board, from, &ORTHOGONAL_STEPS, ignore, &mut out);
            ray_attacks(board, from, &DIAGONAL_STEPS, ignore, &mut out);
        }
        PieceKind::King { .. } => {
            for (df, dr) in KING_STEPS {
                if let Some(target) = from.offset(df, dr) {
                    out.push(target);
                }
            }
        }
    }
    out
}

/// Union of all squares attacked by pieces of `by`.
pub(crate) fn attacked_squares(
    board: &Board,
    by: Color,
    ignore: Option<Position>,
) -> HashSet<Position> {
    let mut result = HashSet::new();
    for piece in board.slots().iter().flatten() {
        if piece.color != by || ignore == Some(piece.position) {
            continue;
        }
        result.extend(piece_attacks(board, piece, ignore));
    }
    result
}

/// Positions of the pieces of `by` that attack `target`.
pub(crate) fn attackers_of(
    board: &Board,
    target: Position,
    by: Color,
    ignore: Option<Position>,
) -> Vec<Position> {
    let mut result = Vec::new();
    for piece in board.slots().iter().flatten() {
        if piece.color != by || ignore == Some(piece.position) {
            continue;
        }
        if piece_attacks(board, piece, ignore).contains(&target) {
            result.push(piece.position);
        }
    }
    result
}

/// Squares strictly between `a` and `b` along a shared rank, file, or
/// diagonal. Empty when the squares are not aligned (or adjacent).
pub(crate) fn between(a: Position, b: Position) -> Vec<Position> {
    let df = b.file().index() as i8 - a.file().index() as i8;
    let dr = b.rank().index() as i8 - a.rank().index() as i8;
    let aligned = df == 0 || dr == 0 || df.abs() == dr.abs();
    if !aligned || (df == 0 && dr == 0) {
        return Vec::new();
    }

    let step = (df.signum(), dr.signum());
    let mut result = Vec::new();
    let mut cursor = a;
    loop {
        match cursor.offset(step.0, step.1) {
            Some(next) if next != b => {
                result.push(next);
                cursor = next;
            }
            _ => break,
        }
    }
    result
}
