//! Error types for position parsing, notation handling, and search.

use thiserror::Error;

/// Errors surfaced by the engine's public operations.
///
/// An empty square or a side without moves is not an error for move
/// generation; those return empty move lists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The position description could not be parsed or is structurally inconsistent.
    #[error("Malformed position: {0}")]
    MalformedPosition(String),

    /// Search was asked for a move but the side to move has no pseudo-legal moves.
    #[error("No legal move available for the side to move")]
    NoLegalMove,

    /// An algebraic square name was invalid (for example `i9`).
    #[error("Invalid square: {0}")]
    InvalidSquare(String),

    /// A move in UCI-style text (for example `e2e4`) could not be parsed.
    #[error("Invalid move text: {0}")]
    InvalidMoveText(String),

    /// An engine option name is not recognized.
    #[error("Unknown engine option: {0}")]
    UnknownOption(String),

    /// An engine option value could not be parsed.
    #[error("Invalid value '{value}' for engine option {name}")]
    InvalidOptionValue { name: String, value: String },
}

/// Result type alias for engine operations.
pub type ChessResult<T> = Result<T, ChessError>;
