//! Table-driven move generation for knights, bishops, rooks, queens and kings.
//!
//! Sliding pieces walk each direction until the board edge, a friendly piece,
//! or an enemy piece (whose square is included as a capture). Non-sliding
//! pieces take exactly one step per direction.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::ChessMove;
use crate::moves::movement_rules::{movement_rule, offset_square};

pub fn generate_stepping_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    out: &mut Vec<ChessMove>,
) {
    let Some(rule) = movement_rule(piece.kind) else {
        return;
    };

    for &direction in rule.directions {
        let mut distance = 1i8;

        while let Some(to) = offset_square(from, direction, distance) {
            match game_state.piece_at(to) {
                None => out.push(ChessMove::new(from, to)),
                Some(target) if target.color != piece.color => {
                    out.push(ChessMove::new(from, to));
                    break;
                }
                Some(_) => break,
            }

            if !rule.sliding {
                break;
            }
            distance += 1;
        }
    }
}
