//! Perft: exhaustive legal move path counting, used to validate move
//! generation against known node counts.

use crate::board::Board;

/// Count the leaf nodes of the legal move tree to `depth` plies.
pub fn perft(board: &Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }
    let count = board.available_moves().len();
    if depth == 1 {
        return count as u64;
    }

    let mut nodes = 0;
    for index in 0..count {
        let mut child = board.clone();
        child
            .make_move(index)
            .expect("index is within the published move list");
        nodes += perft(&child, depth - 1);
    }
    nodes
}

/// Per-root-move breakdown of `perft`, for pinpointing divergences.
pub fn divide(board: &Board, depth: usize) -> Vec<(String, u64)> {
    let mut out = Vec::new();
    for (index, mv) in board.available_moves().iter().enumerate() {
        let mut child = board.clone();
        child
            .make_move(index)
            .expect("index is within the published move list");
        out.push((mv.to_string(), perft(&child, depth.saturating_sub(1))));
    }
    out
}
