//! Crate root module declarations for the pseudo-legal chess engine.
//!
//! Exposes the position model, pseudo-legal move generation and application,
//! heuristic scoring, iterative-deepening search, engine wrappers, and
//! notation helpers so the binary, benches, and tests share stable paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod chess_move;
    pub mod movement_rules;
}

pub mod move_generation {
    pub mod move_apply;
    pub mod move_generator;
    pub mod perft;
    pub mod pseudo_moves_king;
    pub mod pseudo_moves_pawn;
    pub mod pseudo_moves_stepping;
}

pub mod search {
    pub mod board_scoring;
    pub mod iterative_deepening;
}

pub mod engines {
    pub mod engine_iterative;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}
