//! Move value type and its UCI-style text form.
//!
//! A move is only `(from, to, promotion)`. Castling and en-passant are not
//! tagged; the applicator infers them from the moving piece and destination.

use std::fmt;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }

    /// Render as `<from><to>[promotion]`, for example `e2e4` or `e7e8q`.
    pub fn to_uci(&self) -> ChessResult<String> {
        let mut out = String::with_capacity(5);
        out.push_str(&square_to_algebraic(self.from)?);
        out.push_str(&square_to_algebraic(self.to)?);

        if let Some(kind) = self.promotion {
            out.push(promotion_to_char(kind)?);
        }

        Ok(out)
    }

    /// Parse `<from><to>[promotion]` text. Board context is not consulted.
    pub fn from_uci(text: &str) -> ChessResult<Self> {
        if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
            return Err(ChessError::InvalidMoveText(text.to_owned()));
        }

        let invalid = |_: ChessError| ChessError::InvalidMoveText(text.to_owned());
        let from = algebraic_to_square(&text[0..2]).map_err(invalid)?;
        let to = algebraic_to_square(&text[2..4]).map_err(invalid)?;

        let promotion = match text[4..].chars().next() {
            Some(ch) => Some(
                char_to_promotion(ch).ok_or_else(|| ChessError::InvalidMoveText(text.to_owned()))?,
            ),
            None => None,
        };

        Ok(Self {
            from,
            to,
            promotion,
        })
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_uci() {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(f, "{}->{}", self.from, self.to),
        }
    }
}

fn promotion_to_char(kind: PieceKind) -> ChessResult<char> {
    match kind {
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            Ok(kind.fen_char())
        }
        _ => Err(ChessError::InvalidMoveText(format!(
            "invalid promotion piece: {kind:?}"
        ))),
    }
}

fn char_to_promotion(ch: char) -> Option<PieceKind> {
    match PieceKind::from_fen_char(ch)? {
        kind @ (PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen) => {
            Some(kind)
        }
        _ => None,
    }
}
