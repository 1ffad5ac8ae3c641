//! Pin detection.
//!
//! A piece is pinned when lifting it off the board exposes its royal piece
//! to a new attacker. The probe re-runs the attacker query with the piece's
//! square treated as empty and compares against the baseline.

use std::collections::HashSet;

use crate::attacks;
use crate::board::Board;
use crate::color::Color;
use crate::position::Position;

/// Squares a pinned piece may still move to, or `None` when unpinned.
///
/// A single exposed attacker restricts the piece to the attacker's line
/// (capture included). More than one leaves no legal square at all.
pub(super) fn pin_mask(
    board: &Board,
    piece_pos: Position,
    royal_pos: Position,
    them: Color,
) -> Option<HashSet<Position>> {
    let baseline = attacks::attackers_of(board, royal_pos, them, None);
    let exposed: Vec<Position> = attacks::attackers_of(board, royal_pos, them, Some(piece_pos))
        .into_iter()
        .filter(|attacker| !baseline.contains(attacker))
        .collect();

    match exposed.as_slice() {
        [] => None,
        [attacker] => {
            let mut mask: HashSet<Position> =
                attacks::between(*attacker, royal_pos).into_iter().collect();
            mask.insert(*attacker);
            Some(mask)
        }
        _ => Some(HashSet::new()),
    }
}
