//! Pseudo-legal move generation entry points.
//!
//! Moves obey piece movement patterns and occupancy only. Nothing here checks
//! whether a move leaves the mover's own king attacked, so "no moves" is the
//! closest the engine gets to recognizing mate or stalemate.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::pseudo_moves_king::generate_castling_moves;
use crate::move_generation::pseudo_moves_pawn::generate_pawn_moves;
use crate::move_generation::pseudo_moves_stepping::generate_stepping_moves;
use crate::moves::chess_move::ChessMove;

/// Source of candidate moves for search and perft.
pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, game_state: &GameState) -> Vec<ChessMove>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, game_state: &GameState) -> Vec<ChessMove> {
        pseudo_legal_moves(game_state)
    }
}

/// All moves for the side to move, in square order from a8 to h1.
pub fn pseudo_legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(64);

    for (square, piece) in game_state.occupied_squares() {
        if piece.color == game_state.side_to_move {
            generate_piece_moves(game_state, square, piece, &mut out);
        }
    }

    out
}

/// Moves of whichever piece stands on `square`; empty for an empty square.
pub fn pseudo_legal_moves_from_square(game_state: &GameState, square: Square) -> Vec<ChessMove> {
    let mut out = Vec::new();

    if let Some(piece) = game_state.piece_at(square) {
        generate_piece_moves(game_state, square, piece, &mut out);
    }

    out
}

fn generate_piece_moves(game_state: &GameState, from: Square, piece: Piece, out: &mut Vec<ChessMove>) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, piece.color, out),
        PieceKind::King => {
            generate_stepping_moves(game_state, from, piece, out);
            generate_castling_moves(game_state, from, piece.color, out);
        }
        _ => generate_stepping_moves(game_state, from, piece, out),
    }
}
