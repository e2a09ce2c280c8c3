//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search remains modular by delegating static position scoring to this trait.
//! Scores are always taken from `GameState::root_side`, not from the side to
//! move, so a min node and a max node score the same position identically.

use crate::game_state::{chess_types::*, game_state::GameState};

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of `game_state.root_side`.
    fn score(&self, game_state: &GameState) -> f64;
}

/// d5, e5, d4, e4.
pub const CENTER_SQUARES: [Square; 4] = [27, 28, 35, 36];

pub const CENTER_CONTROL_BONUS: f64 = 0.3;
pub const DEVELOPMENT_BONUS: f64 = 0.2;
pub const TEMPO_BONUS: f64 = 0.05;

#[inline]
pub const fn piece_value(kind: PieceKind) -> f64 {
    match kind {
        PieceKind::Pawn => 1.0,
        PieceKind::Knight => 3.0,
        PieceKind::Bishop => 3.0,
        PieceKind::Rook => 5.0,
        PieceKind::Queen => 9.0,
        PieceKind::King => 0.0,
    }
}

/// Round to 6 decimals so equal-looking branches compare equal.
#[inline]
pub fn round_score(score: f64) -> f64 {
    (score * 1_000_000.0).round() / 1_000_000.0
}

#[inline]
fn signed_for_root(game_state: &GameState, color: Color, value: f64) -> f64 {
    if color == game_state.root_side {
        value
    } else {
        -value
    }
}

fn material_balance(game_state: &GameState) -> f64 {
    game_state
        .occupied_squares()
        .map(|(_, piece)| signed_for_root(game_state, piece.color, piece_value(piece.kind)))
        .sum()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> f64 {
        round_score(material_balance(game_state))
    }
}

/// Material, center occupation, minor-piece development, and a tempo bonus.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicScorer;

impl HeuristicScorer {
    fn center_control(game_state: &GameState) -> f64 {
        CENTER_SQUARES
            .iter()
            .filter_map(|&square| game_state.piece_at(square))
            .map(|piece| signed_for_root(game_state, piece.color, CENTER_CONTROL_BONUS))
            .sum()
    }

    /// Root-side knights and bishops standing off their side's two home rows.
    fn development(game_state: &GameState) -> f64 {
        let root = game_state.root_side;
        let developed = game_state
            .occupied_squares()
            .filter(|(_, piece)| {
                piece.color == root && matches!(piece.kind, PieceKind::Knight | PieceKind::Bishop)
            })
            .filter(|(square, _)| match root {
                Color::White => square_row(*square) <= 5,
                Color::Black => square_row(*square) >= 2,
            })
            .count();

        developed as f64 * DEVELOPMENT_BONUS
    }
}

impl BoardScorer for HeuristicScorer {
    fn score(&self, game_state: &GameState) -> f64 {
        let score = material_balance(game_state)
            + Self::center_control(game_state)
            + Self::development(game_state)
            + TEMPO_BONUS;
        round_score(score)
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardScorer, HeuristicScorer, MaterialScorer};
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;

    #[test]
    fn starting_position_is_tempo_only() {
        let game = GameState::new_game();
        assert_eq!(HeuristicScorer.score(&game), 0.05);
        assert_eq!(HeuristicScorer.score(&game.with_root_side(Color::Black)), 0.05);
        assert_eq!(MaterialScorer.score(&GameState::new_game()), 0.0);
    }

    #[test]
    fn material_is_antisymmetric_under_root_swap() {
        let fens = [
            "4k3/8/8/8/8/8/4Q3/4K3 w - - 0 1",
            "r3k3/pp6/8/8/8/8/PPP5/4K2R b - - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/8/4K3 w - - 0 1",
        ];

        for fen in fens {
            let game = GameState::from_fen(fen).expect("FEN should parse");
            let white = MaterialScorer.score(&game.clone().with_root_side(Color::White));
            let black = MaterialScorer.score(&game.with_root_side(Color::Black));
            assert_eq!(white, -black, "material not antisymmetric for {fen}");
        }
    }

    #[test]
    fn queen_up_scores_nine() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/4Q3/4K3 b - - 0 1")
            .expect("FEN should parse")
            .with_root_side(Color::White);
        assert_eq!(MaterialScorer.score(&game), 9.0);
        assert_eq!(HeuristicScorer.score(&game), 9.05);
    }

    #[test]
    fn center_occupation_counts_for_both_sides() {
        // White pawn e4 and black pawn d5 cancel; white knight f3 is developed.
        let game = GameState::from_fen("4k3/8/8/3p4/4P3/5N2/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        assert_eq!(HeuristicScorer.score(&game), 3.25);

        let black_view = game.with_root_side(Color::Black);
        // Material -3, center 0, no black development, tempo.
        assert_eq!(HeuristicScorer.score(&black_view), -2.95);
    }

    #[test]
    fn undeveloped_minor_pieces_earn_nothing() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/3B4/1N2K3 w - - 0 1")
            .expect("FEN should parse");
        assert_eq!(HeuristicScorer.score(&game), 6.05);

        let black = GameState::from_fen("4k3/2b5/1n6/8/8/8/8/4K3 b - - 0 1")
            .expect("FEN should parse");
        // Knight on b6 is developed, bishop on c7 is not.
        assert_eq!(HeuristicScorer.score(&black), 6.25);
    }
}
