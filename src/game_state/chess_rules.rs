//! Canonical chess-rule constants.
//!
//! Static rule literals used to set up positions and bound game lines.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Halfmove clock value at which a line counts as drawn by the fifty-move rule.
pub const FIFTY_MOVE_HALFMOVE_LIMIT: u16 = 100;

/// File the king stands on before castling.
pub const KING_START_FILE: u8 = 4;
