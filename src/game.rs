//! Playing whole games between two move selectors.
//!
//! A [`Game`] keeps the position history for repetition detection together
//! with the half-move clock and full-move number, and reports a
//! [`GameStatus`] after every move.

use std::fmt;

use crate::board::{Color, FenError, Move, Position};
use crate::engine::{MoveSelector, Session};

/// Outcome of a game so far
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    WhiteWonByCheckmate,
    BlackWonByCheckmate,
    DrawnByStalemate,
    DrawnByInsufficientMaterial,
    DrawnByRepetition,
    DrawnByFiftyMoveRule,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Winning color, `None` for draws and unfinished games
    #[must_use]
    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::WhiteWonByCheckmate => Some(Color::White),
            GameStatus::BlackWonByCheckmate => Some(Color::Black),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::InProgress => "in progress",
            GameStatus::WhiteWonByCheckmate => "White wins by checkmate",
            GameStatus::BlackWonByCheckmate => "Black wins by checkmate",
            GameStatus::DrawnByStalemate => "Draw by stalemate",
            GameStatus::DrawnByInsufficientMaterial => "Draw by insufficient material",
            GameStatus::DrawnByRepetition => "Draw by threefold repetition",
            GameStatus::DrawnByFiftyMoveRule => "Draw by fifty-move rule",
        };
        f.write_str(text)
    }
}

/// A game in progress: the live session plus move history and clocks.
#[derive(Clone, Debug)]
pub struct Game {
    session: Session,
    position_history: Vec<Position>,
    move_history: Vec<Move>,
    halfmove_clock: u32,
    fullmove_number: u32,
    status: GameStatus,
}

impl Game {
    /// A game from the standard starting position
    #[must_use]
    pub fn new() -> Self {
        Self::from_position(Position::new())
    }

    #[must_use]
    pub fn from_position(position: Position) -> Self {
        Self::with_clocks(position, 0, 1)
    }

    fn with_clocks(position: Position, halfmove_clock: u32, fullmove_number: u32) -> Self {
        let mut game = Game {
            session: Session::new(position),
            position_history: Vec::new(),
            move_history: Vec::new(),
            halfmove_clock,
            fullmove_number,
            status: GameStatus::InProgress,
        };
        game.status = game.compute_status();
        game
    }

    /// Parse a FEN string, reading the half-move clock and full-move number
    /// when present. Missing or non-numeric clocks default to 0 and 1.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let position = Position::from_fen(fen)?;
        let mut clocks = fen.split_whitespace().skip(4);
        let halfmove_clock = clocks.next().and_then(|s| s.parse().ok()).unwrap_or(0);
        let fullmove_number = clocks.next().and_then(|s| s.parse().ok()).unwrap_or(1);
        Ok(Self::with_clocks(position, halfmove_clock, fullmove_number))
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> &Position {
        self.session.position()
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Moves played so far
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.move_history
    }

    /// Positions before each move played so far
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.position_history
    }

    pub fn legal_moves(&mut self) -> Vec<Move> {
        self.session.legal_moves()
    }

    /// Full six-field FEN including the clocks
    #[must_use]
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {}",
            self.position().to_fen(),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Play `mv` and update clocks, history and status.
    ///
    /// The move must be legal in the current position.
    pub fn make_move(&mut self, mv: Move) {
        #[cfg(feature = "logging")]
        {
            if self.status.is_over() {
                log::warn!("move {mv} played in a finished game ({})", self.status);
            }
        }
        let current = self.session.position().clone();
        if current.is_capture_or_pawn_move(mv) {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        self.session.make_move(mv);
        if current.side_to_move() == Color::Black {
            self.fullmove_number += 1;
        }
        self.position_history.push(current);
        self.move_history.push(mv);
        self.status = self.compute_status();
    }

    /// Parse a long algebraic move such as `e2e4` and play it.
    pub fn make_move_text(&mut self, text: &str) -> Result<Move, crate::board::MoveParseError> {
        let mv = self.position().parse_move(text)?;
        self.make_move(mv);
        Ok(mv)
    }

    fn compute_status(&mut self) -> GameStatus {
        let current = self.session.position();
        let repetitions = self
            .position_history
            .iter()
            .filter(|&previous| previous == current)
            .count();
        if repetitions >= 2 {
            return GameStatus::DrawnByRepetition;
        }
        if self.session.is_checkmate() {
            return match self.session.side_to_move() {
                Color::White => GameStatus::BlackWonByCheckmate,
                Color::Black => GameStatus::WhiteWonByCheckmate,
            };
        }
        if self.session.is_stalemate() {
            return GameStatus::DrawnByStalemate;
        }
        if self.session.position().board().has_insufficient_material() {
            return GameStatus::DrawnByInsufficientMaterial;
        }
        if self.halfmove_clock >= 100 {
            return GameStatus::DrawnByFiftyMoveRule;
        }
        GameStatus::InProgress
    }

    /// Let `white` and `black` alternate until the game ends.
    ///
    /// Returns the winner, or `None` for a draw.
    pub fn run(&mut self, white: &mut dyn MoveSelector, black: &mut dyn MoveSelector) -> Option<Color> {
        while !self.status.is_over() {
            let selector: &mut dyn MoveSelector = match self.session.side_to_move() {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };
            let Some(mv) = selector.pick_move(&mut self.session) else {
                break;
            };
            #[cfg(feature = "logging")]
            log::debug!(
                "{}{} {} ({})",
                self.fullmove_number,
                if self.session.side_to_move() == Color::White { "." } else { "..." },
                self.position().san(mv),
                selector.name()
            );
            self.make_move(mv);
        }
        #[cfg(feature = "logging")]
        log::info!("{} vs {}: {}", white.name(), black.name(), self.status);
        self.status.winner()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.halfmove_clock(), 0);
        assert_eq!(game.fullmove_number(), 1);
        assert!(game.moves().is_empty());
        assert_eq!(
            game.to_fen(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        );
    }

    #[test]
    fn test_clocks() {
        let mut game = Game::new();
        game.make_move_text("g1f3").unwrap();
        assert_eq!(game.halfmove_clock(), 1);
        assert_eq!(game.fullmove_number(), 1);
        game.make_move_text("e7e5").unwrap();
        assert_eq!(game.halfmove_clock(), 0);
        assert_eq!(game.fullmove_number(), 2);
        game.make_move_text("f3e5").unwrap();
        assert_eq!(game.halfmove_clock(), 0);
        assert_eq!(game.moves().len(), 3);
        assert_eq!(game.positions().len(), 3);
        assert_eq!(game.positions()[0], Position::new());
    }

    #[test]
    fn test_from_fen_reads_clocks() {
        let game = Game::from_fen("8/8/8/4k3/8/8/4P3/4K3 w - - 57 30").unwrap();
        assert_eq!(game.halfmove_clock(), 57);
        assert_eq!(game.fullmove_number(), 30);
        let game = Game::from_fen("8/8/8/4k3/8/8/4P3/4K3 w - -").unwrap();
        assert_eq!(game.halfmove_clock(), 0);
        assert_eq!(game.fullmove_number(), 1);
        assert!(Game::from_fen("8/8/8 w - -").is_err());
    }

    #[test]
    fn test_status_winner() {
        assert_eq!(GameStatus::WhiteWonByCheckmate.winner(), Some(Color::White));
        assert_eq!(GameStatus::BlackWonByCheckmate.winner(), Some(Color::Black));
        assert_eq!(GameStatus::DrawnByRepetition.winner(), None);
        assert!(!GameStatus::InProgress.is_over());
        assert!(GameStatus::DrawnByStalemate.is_over());
    }
}
