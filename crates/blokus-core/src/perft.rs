//! Perft (performance test) for move generation correctness verification.

use crate::board::Board;
use crate::movegen::generate_legal_moves;

/// Count placement sequences of length `depth` from `board`, in turn order.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves for the player to move. A player with no placement ends
/// the line, contributing 0 at any remaining depth.
pub fn perft(board: &Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let player = board.to_move();
    let moves = generate_legal_moves(board, player);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves.as_slice() {
        let child = board.apply(*mv, player);
        nodes += perft(&child, depth - 1);
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(wire_move, node_count)` pairs in enumeration order.
pub fn divide(board: &Board, depth: usize) -> Vec<(String, u64)> {
    let player = board.to_move();
    generate_legal_moves(board, player)
        .as_slice()
        .iter()
        .map(|mv| {
            let child = board.apply(*mv, player);
            let count = if depth <= 1 { 1 } else { perft(&child, depth - 1) };
            (mv.to_string(), count)
        })
        .collect()
}
