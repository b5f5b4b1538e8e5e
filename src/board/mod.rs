//! Chess rules: board grid, positions, move validation and generation.
//!
//! A [`Position`] is a [`Board`] plus side to move, castling rights and the
//! en passant file. Moves are checked with [`Position::is_valid`] (movement
//! rules only) and [`Position::is_legal`] (also not leaving the mover in
//! check), and generated through visitors.
//!
//! # Example
//! ```
//! use chess_core::board::Position;
//!
//! let position = Position::new();
//! let moves = position.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attacks;
mod consistency;
mod error;
mod fen;
mod grid;
mod make_move;
mod movegen;
mod perft;
mod position;
pub mod prelude;
mod san;
mod types;
mod validate;
mod zobrist;

#[cfg(test)]
mod tests;

pub use error::{ConsistencyError, FenError, MoveParseError, MoveSetKind, SquareError};
pub use grid::{Board, Cell};
pub use position::{Position, PositionBuilder};
pub use types::{
    CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece, Square, PROMOTION_PIECES,
};
