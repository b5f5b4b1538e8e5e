//! Core chess types.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - bounds-checked board square
//! - `Move` and `MoveList` - move representation
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece, PROMOTION_PIECES};
pub use square::Square;
