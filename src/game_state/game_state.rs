//! Core board state representation.
//!
//! `GameState` is the central model for the engine: a 64-square mailbox plus
//! turn, castling, en-passant, and clock metadata. It owns every field by
//! value, so `clone()` always yields a fully independent position that search
//! branches can mutate without affecting their siblings.

use crate::errors::ChessResult;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Mailbox board, `0 == a8` through `63 == h1`.
    pub squares: [Option<Piece>; 64],

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    /// Side the evaluation is computed for, independent of whose turn it is.
    pub root_side: Color,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            squares: [None; 64],

            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,

            halfmove_clock: 0,
            fullmove_number: 1,

            root_side: Color::White,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// The standard starting position, evaluated for White.
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    /// Parse a six-field FEN. The root side is set to the side to move.
    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn with_root_side(mut self, root_side: Color) -> Self {
        self.root_side = root_side;
        self
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares.get(square as usize).copied().flatten()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square as usize] = piece;
    }

    /// Remove and return whatever stands on `square`.
    #[inline]
    pub fn take_piece(&mut self, square: Square) -> Option<Piece> {
        self.squares[square as usize].take()
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        (self.castling_rights & right) != 0
    }

    /// Occupied squares with their pieces, in index order.
    pub fn occupied_squares(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(index, piece)| piece.map(|piece| (index as Square, piece)))
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_types::*;

    #[test]
    fn clone_is_independent_of_original() {
        let original = GameState::new_game();
        let mut copy = original.clone();

        copy.set_piece(52, None);
        copy.set_piece(36, Some(Piece::new(Color::White, PieceKind::Pawn)));
        copy.side_to_move = Color::Black;
        copy.castling_rights = 0;
        copy.en_passant_square = Some(44);
        copy.halfmove_clock = 7;
        copy.fullmove_number = 9;
        copy.root_side = Color::Black;

        assert_eq!(original, GameState::new_game());
        assert_eq!(
            original.piece_at(52),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert!(original.is_empty(36));
        assert_eq!(original.castling_rights, CASTLE_ALL);
        assert_eq!(original.en_passant_square, None);
    }

    #[test]
    fn starting_position_layout() {
        let game = GameState::new_game();

        assert_eq!(game.piece_at(0), Some(Piece::new(Color::Black, PieceKind::Rook)));
        assert_eq!(game.piece_at(4), Some(Piece::new(Color::Black, PieceKind::King)));
        assert_eq!(game.piece_at(60), Some(Piece::new(Color::White, PieceKind::King)));
        assert_eq!(game.piece_at(63), Some(Piece::new(Color::White, PieceKind::Rook)));
        assert_eq!(game.occupied_squares().count(), 32);
        assert_eq!(game.root_side, Color::White);
        assert_eq!(game.piece_at(64), None);
    }

    #[test]
    fn with_root_side_overrides_perspective() {
        let game = GameState::new_game().with_root_side(Color::Black);
        assert_eq!(game.root_side, Color::Black);
        assert_eq!(game.side_to_move, Color::White);
    }
}
