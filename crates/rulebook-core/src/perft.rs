//! Perft (performance test) for move generation correctness verification.
//!
//! Counts are walked with apply/undo on a single [`GameState`], so every node also
//! exercises the reversibility of move application.

use crate::game_state::GameState;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number of legal moves.
/// The state is restored before returning.
pub fn perft(state: &mut GameState, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = state.legal_moves();

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        state.apply(mv);
        nodes += perft(state, depth - 1);
        state.undo();
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(move, node_count)` pairs sorted by coordinate notation, e.g. `("e2e4", 20)`.
pub fn divide(state: &mut GameState, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = state
        .legal_moves()
        .into_iter()
        .map(|mv| {
            state.apply(mv);
            let count = if depth <= 1 { 1 } else { perft(state, depth - 1) };
            state.undo();
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
