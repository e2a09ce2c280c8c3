//! Castling move generation.
//!
//! Castling is pseudo-legal here: it needs the right and empty squares
//! between king and rook, but the rook itself and attacked squares are not
//! checked.

use crate::game_state::chess_rules::KING_START_FILE;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::ChessMove;

pub fn generate_castling_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<ChessMove>) {
    let home_row = color.home_row();
    if from != square_at(home_row, KING_START_FILE) {
        return;
    }

    let files_empty = |files: &[u8]| {
        files
            .iter()
            .all(|&file| game_state.is_empty(square_at(home_row, file)))
    };

    if game_state.has_castling_right(kingside_right(color)) && files_empty(&[5, 6]) {
        out.push(ChessMove::new(from, square_at(home_row, 6)));
    }

    if game_state.has_castling_right(queenside_right(color)) && files_empty(&[1, 2, 3]) {
        out.push(ChessMove::new(from, square_at(home_row, 2)));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_castling_moves;
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;

    fn castles(fen: &str, from: u8, color: Color) -> Vec<String> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let mut out = Vec::new();
        generate_castling_moves(&game, from, color, &mut out);
        out.iter().map(|mv| mv.to_string()).collect()
    }

    #[test]
    fn both_wings_when_rights_and_space() {
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", 60, Color::White),
            vec!["e1g1", "e1c1"]
        );
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", 4, Color::Black),
            vec!["e8g8", "e8c8"]
        );
    }

    #[test]
    fn blocked_or_revoked_wings_are_skipped() {
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/RN2K2R w Qk - 0 1", 60, Color::White),
            Vec::<String>::new()
        );
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3KB1R w KQ - 0 1", 60, Color::White),
            vec!["e1c1"]
        );
    }

    #[test]
    fn rook_presence_and_attacks_are_not_verified() {
        // No rook on h1 and a black rook eyeing f1: still generated.
        assert_eq!(
            castles("4kr2/8/8/8/8/8/8/4K3 w K - 0 1", 60, Color::White),
            vec!["e1g1"]
        );
    }

    #[test]
    fn king_away_from_home_square_does_not_castle() {
        assert!(castles("4k3/8/8/8/8/8/8/3K3R w K - 0 1", 59, Color::White).is_empty());
    }
}
