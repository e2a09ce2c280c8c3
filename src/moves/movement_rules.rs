//! Movement-rule table for the non-pawn pieces.
//!
//! Each kind maps to a direction set and a sliding flag. Generators index
//! this table by `PieceKind::index()` instead of branching per piece.

use crate::game_state::chess_types::{square_at, square_file, square_row, PieceKind, Square};

/// `(row_step, file_step)` pairs; positive rows head toward rank 1.
pub type Direction = (i8, i8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementRule {
    pub directions: &'static [Direction],
    pub sliding: bool,
}

const ORTHOGONAL: [Direction; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ALL_DIRECTIONS: [Direction; 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];
const KNIGHT_JUMPS: [Direction; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Indexed by `PieceKind::index()`; pawns have no table entry.
pub const MOVEMENT_RULES: [Option<MovementRule>; 6] = [
    None,
    Some(MovementRule {
        directions: &KNIGHT_JUMPS,
        sliding: false,
    }),
    Some(MovementRule {
        directions: &DIAGONAL,
        sliding: true,
    }),
    Some(MovementRule {
        directions: &ORTHOGONAL,
        sliding: true,
    }),
    Some(MovementRule {
        directions: &ALL_DIRECTIONS,
        sliding: true,
    }),
    Some(MovementRule {
        directions: &ALL_DIRECTIONS,
        sliding: false,
    }),
];

#[inline]
pub fn movement_rule(kind: PieceKind) -> Option<&'static MovementRule> {
    MOVEMENT_RULES[kind.index()].as_ref()
}

/// Square reached by stepping `distance` times along `direction`, if on the board.
#[inline]
pub fn offset_square(square: Square, direction: Direction, distance: i8) -> Option<Square> {
    let row = square_row(square) as i8 + direction.0 * distance;
    let file = square_file(square) as i8 + direction.1 * distance;

    if (0..8).contains(&row) && (0..8).contains(&file) {
        Some(square_at(row as u8, file as u8))
    } else {
        None
    }
}
