//! Pawn move generation: pushes, double pushes, captures, en-passant, and
//! promotion fan-out.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::ChessMove;
use crate::moves::movement_rules::offset_square;

pub fn generate_pawn_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<ChessMove>) {
    let step = color.pawn_row_step();

    if let Some(one_step) = offset_square(from, (step, 0), 1) {
        if game_state.is_empty(one_step) {
            push_pawn_move(from, one_step, color, out);

            if square_row(from) == color.pawn_start_row() {
                if let Some(two_step) = offset_square(from, (step, 0), 2) {
                    if game_state.is_empty(two_step) {
                        out.push(ChessMove::new(from, two_step));
                    }
                }
            }
        }
    }

    for file_step in [-1i8, 1i8] {
        let Some(to) = offset_square(from, (step, file_step), 1) else {
            continue;
        };

        match game_state.piece_at(to) {
            Some(target) if target.color != color => push_pawn_move(from, to, color, out),
            Some(_) => {}
            None if color == game_state.side_to_move && game_state.en_passant_square == Some(to) => {
                out.push(ChessMove::new(from, to));
            }
            None => {}
        }
    }
}

/// Emit the move, fanning out into the four promotions on the last row.
fn push_pawn_move(from: Square, to: Square, color: Color, out: &mut Vec<ChessMove>) {
    if square_row(to) == color.promotion_row() {
        for kind in PROMOTION_KINDS {
            out.push(ChessMove::with_promotion(from, to, kind));
        }
    } else {
        out.push(ChessMove::new(from, to));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::algebraic_to_square;

    fn pawn_moves(fen: &str, square: &str) -> Vec<String> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let from = algebraic_to_square(square).expect("square should parse");
        let color = game.piece_at(from).expect("pawn should be present").color;
        let mut out = Vec::new();
        generate_pawn_moves(&game, from, color, &mut out);
        out.iter().map(|mv| mv.to_string()).collect()
    }

    #[test]
    fn start_rank_pawn_has_single_and_double_push() {
        assert_eq!(
            pawn_moves(crate::game_state::chess_rules::STARTING_POSITION_FEN, "e2"),
            vec!["e2e3", "e2e4"]
        );
        assert_eq!(
            pawn_moves("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1", "d7"),
            vec!["d7d6", "d7d5"]
        );
    }

    #[test]
    fn double_push_needs_both_squares_empty() {
        assert_eq!(pawn_moves("8/8/8/8/4n3/8/4P3/8 w - - 0 1", "e2"), vec!["e2e3"]);
        assert!(pawn_moves("8/8/8/8/8/4n3/4P3/8 w - - 0 1", "e2").is_empty());
    }

    #[test]
    fn captures_only_enemy_pieces() {
        assert_eq!(
            pawn_moves("8/8/8/8/8/3p1N2/4P3/8 w - - 0 1", "e2"),
            vec!["e2e3", "e2e4", "e2d3"]
        );
    }

    #[test]
    fn en_passant_capture_onto_target_square() {
        assert_eq!(
            pawn_moves("8/8/8/3pP3/8/8/8/8 w - d6 0 1", "e5"),
            vec!["e5e6", "e5d6"]
        );
        // Target not diagonally adjacent: no en-passant.
        assert_eq!(pawn_moves("8/8/8/1p2P3/8/8/8/8 w - b6 0 1", "e5"), vec!["e5e6"]);
    }

    #[test]
    fn en_passant_belongs_to_side_to_move_only() {
        use crate::move_generation::move_generator::pseudo_legal_moves_from_square;

        let game = GameState::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
            .expect("FEN should parse");
        let d2 = algebraic_to_square("d2").expect("square should parse");
        let moves: Vec<String> = pseudo_legal_moves_from_square(&game, d2)
            .iter()
            .map(|mv| mv.to_string())
            .collect();
        assert_eq!(moves, vec!["d2d3", "d2d4"]);
    }

    #[test]
    fn promotion_generates_four_moves_per_destination() {
        let moves = pawn_moves("1n6/P7/8/8/8/8/8/8 w - - 0 1", "a7");
        assert_eq!(
            moves,
            vec!["a7a8q", "a7a8r", "a7a8b", "a7a8n", "a7b8q", "a7b8r", "a7b8b", "a7b8n"]
        );

        let black = pawn_moves("8/8/8/8/8/8/3p4/8 b - - 0 1", "d2");
        assert_eq!(black, vec!["d2d1q", "d2d1r", "d2d1b", "d2d1n"]);
    }

    #[test]
    fn edge_file_pawn_has_single_capture_direction() {
        let game = GameState::from_fen("8/8/8/8/8/1p6/P7/8 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&game, 48, Color::White, &mut out);
        assert_eq!(out.len(), 3);
    }
}
