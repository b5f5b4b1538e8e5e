//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_core::board::prelude::*;
//!
//! let position = Position::new();
//! assert_eq!(position.side_to_move(), Color::White);
//! ```

pub use super::{
    Board, CastlingRights, Color, FenError, Move, MoveList, MoveParseError, Piece, Position,
    PositionBuilder, Square, SquareError,
};
