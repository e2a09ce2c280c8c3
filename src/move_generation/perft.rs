//! Pseudo-legal perft node counting.
//!
//! Counts leaf positions reachable in exactly `depth` plies through any
//! `MoveGenerator`. Used as a movegen regression check and as a benchmark
//! workload.

use crate::game_state::game_state::GameState;
use crate::move_generation::move_apply::make_move;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::ChessMove;

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generator.generate_moves(game_state);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|mv| perft(generator, &make_move(game_state, mv), depth - 1))
        .sum()
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> Vec<(ChessMove, u64)> {
    generator
        .generate_moves(game_state)
        .into_iter()
        .map(|mv| {
            let nodes = perft(generator, &make_move(game_state, mv), depth.saturating_sub(1));
            (mv, nodes)
        })
        .collect()
}
