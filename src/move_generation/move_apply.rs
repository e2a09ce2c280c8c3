//! Applying a move to a position.
//!
//! `apply_move` mutates a position the caller owns. Special moves are
//! inferred from the moving piece: a pawn landing on the en-passant square
//! captures the pawn behind it, and a king moving two files castles. The
//! update steps run in a fixed order because later steps read state the
//! earlier ones wrote.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::ChessMove;
use crate::moves::movement_rules::offset_square;

/// Clone `game_state` and apply `mv` to the copy.
#[inline]
pub fn make_move(game_state: &GameState, mv: ChessMove) -> GameState {
    let mut next = game_state.clone();
    apply_move(&mut next, mv);
    next
}

/// Apply `mv` in place. A move from an empty square leaves the position untouched.
pub fn apply_move(game_state: &mut GameState, mv: ChessMove) {
    let ChessMove { from, to, promotion } = mv;
    let Some(moving) = game_state.piece_at(from) else {
        return;
    };

    let placed = match promotion {
        Some(kind) => Piece::new(moving.color, kind),
        None => moving,
    };
    let mut is_capture = game_state.piece_at(to).is_some();
    game_state.set_piece(to, Some(placed));
    game_state.set_piece(from, None);

    let is_pawn = moving.kind == PieceKind::Pawn;

    if is_pawn && game_state.en_passant_square == Some(to) && square_file(from) != square_file(to) {
        let behind = offset_square(to, (-moving.color.pawn_row_step(), 0), 1);
        if let Some(captured_square) = behind {
            if game_state.take_piece(captured_square).is_some() {
                is_capture = true;
            }
        }
    }

    game_state.en_passant_square = None;
    if is_pawn && square_row(from).abs_diff(square_row(to)) == 2 {
        game_state.en_passant_square = Some((from + to) / 2);
    }

    if moving.kind == PieceKind::King {
        game_state.castling_rights &= !(kingside_right(moving.color) | queenside_right(moving.color));

        if square_file(from).abs_diff(square_file(to)) == 2 {
            let row = square_row(to);
            let (rook_from, rook_to) = if square_file(to) > square_file(from) {
                (square_at(row, 7), square_at(row, 5))
            } else {
                (square_at(row, 0), square_at(row, 3))
            };
            let rook = game_state.take_piece(rook_from);
            game_state.set_piece(rook_to, rook);
        }
    }

    if moving.kind == PieceKind::Rook {
        let home_row = moving.color.home_row();
        if from == square_at(home_row, 7) {
            game_state.castling_rights &= !kingside_right(moving.color);
        } else if from == square_at(home_row, 0) {
            game_state.castling_rights &= !queenside_right(moving.color);
        }
    }

    game_state.side_to_move = moving.color.opposite();
    if moving.color == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    if is_pawn || is_capture {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
}
