//! Error types for chess board operations.

use std::fmt;

use super::types::{Color, Move};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// A required field is absent or empty
    MissingField { field: &'static str },
    /// A rank of the board field does not describe exactly 8 cells
    RankLength { rank: usize, cells: usize },
    /// The board field does not contain exactly 8 ranks
    RankCount { found: usize },
    /// Invalid piece character in the board field
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Malformed en passant square
    InvalidEnPassant { found: String },
    /// En passant square on a rank that cannot follow a double step
    EnPassantRank { found: String, side_to_move: Color },
    /// A side has no king or more than one
    KingCount { color: Color, found: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::MissingField { field } => {
                write!(f, "FEN is missing the {field} field")
            }
            FenError::RankLength { rank, cells } => {
                write!(f, "Rank {rank} describes {cells} cells, expected 8")
            }
            FenError::RankCount { found } => {
                write!(f, "FEN board has {found} ranks, expected 8")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::EnPassantRank {
                found,
                side_to_move,
            } => {
                write!(
                    f,
                    "En passant square '{found}' is impossible with {side_to_move} to move"
                )
            }
            FenError::KingCount { color, found } => {
                write!(f, "{color} has {found} kings, expected exactly 1")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Which generated move set a consistency check compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSetKind {
    Valid,
    Legal,
}

impl fmt::Display for MoveSetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveSetKind::Valid => write!(f, "valid"),
            MoveSetKind::Legal => write!(f, "legal"),
        }
    }
}

/// Error type for position self-consistency failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyError {
    /// The move generator and the brute-force scan disagree
    MoveSetMismatch {
        kind: MoveSetKind,
        color: Color,
        missing: Vec<Move>,
        unexpected: Vec<Move>,
    },
    /// Writing the position to FEN and reading it back changed it
    FenRoundTrip { fen: String },
}

impl fmt::Display for ConsistencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsistencyError::MoveSetMismatch {
                kind,
                color,
                missing,
                unexpected,
            } => {
                write!(
                    f,
                    "{color} {kind} moves differ: generator missed {missing:?}, generator added {unexpected:?}"
                )
            }
            ConsistencyError::FenRoundTrip { fen } => {
                write!(f, "FEN round trip changed the position '{fen}'")
            }
        }
    }
}

impl std::error::Error for ConsistencyError {}
