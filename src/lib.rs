pub mod board;
pub mod engine;
pub mod game;

pub use board::{Board, Color, Move, Piece, Position, Square};
pub use engine::{MoveSelector, PositionCache, Session};
pub use game::{Game, GameStatus};
