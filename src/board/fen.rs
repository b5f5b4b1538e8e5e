//! FEN reading and writing.
//!
//! Positions use the first four FEN fields: board, side to move, castling
//! rights and en passant square. Any trailing fields (half-move clock,
//! full-move number) are accepted and ignored here; [`Game`](crate::game::Game)
//! reads them.

use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{Board, CastlingRights, Color, Move, Piece, Position, Square};

impl Board {
    /// Parse the board field of a FEN string, rank 8 first.
    pub fn from_fen_board(field: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let rows: Vec<&str> = field.split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::RankCount { found: rows.len() });
        }

        for (row_idx, row) in rows.iter().enumerate() {
            let rank = 7 - row_idx;
            let mut file = 0;
            for c in row.chars() {
                if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += run as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if let Some(sq) = Square::new(file, rank) {
                        board.put(sq, color, piece);
                    }
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::RankLength {
                        rank: rank + 1,
                        cells: file,
                    });
                }
            }
            if file != 8 {
                return Err(FenError::RankLength {
                    rank: rank + 1,
                    cells: file,
                });
            }
        }
        Ok(board)
    }

    /// The board field of a FEN string, with runs of empty squares as digits.
    #[must_use]
    pub fn to_fen_board(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for sq in (0..8).filter_map(|file| Square::new(file, rank)) {
                if let Some((color, piece)) = self.piece_at(sq) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }
}

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// Returns an error if the FEN string is invalid; no partially parsed
    /// position is ever produced.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut fields = fen.split_whitespace();
        let mut next_field = |field: &'static str| fields.next().ok_or(FenError::MissingField { field });

        let board = Board::from_fen_board(next_field("board")?)?;

        let side_to_move = match next_field("side to move")? {
            "w" | "W" => Color::White,
            "b" | "B" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let castling_rights: CastlingRights = next_field("castling")?.parse()?;

        let ep_field = next_field("en passant")?;
        let en_passant_file = parse_en_passant(ep_field, side_to_move)?;

        Position::from_parts(board, side_to_move, castling_rights, en_passant_file)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen_str(fen: &str) -> Self {
        Self::from_fen(fen).expect("Invalid FEN string")
    }

    /// Replace this position with one read from FEN.
    ///
    /// On error the position is left untouched.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), FenError> {
        *self = Position::from_fen(fen)?;
        Ok(())
    }

    /// Convert the position to its four-field FEN.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let active = match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        };
        let ep = self
            .en_passant_square()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());
        format!(
            "{} {} {} {}",
            self.board.to_fen_board(),
            active,
            self.castling_rights,
            ep
        )
    }

    /// Parse a move in long algebraic notation (e.g., "e2e4", "e7e8q").
    ///
    /// Returns the matching legal move if found, or an error describing why parsing failed.
    ///
    /// # Example
    /// ```
    /// use chess_core::board::Position;
    ///
    /// let position = Position::new();
    /// let mv = position.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        if !text.is_ascii() || text.len() < 4 || text.len() > 5 {
            return Err(MoveParseError::InvalidLength {
                len: text.chars().count(),
            });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: text.to_string(),
        };
        let from: Square = text[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = text[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match text[4..].chars().next() {
            Some(c) => match Piece::from_char(c) {
                Some(piece) if piece.is_promotion_target() => Some(piece),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
            None => None,
        };

        let mv = Move::with_promotion(from, to, promotion);
        if self.is_legal(mv) {
            Ok(mv)
        } else {
            Err(MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
        }
    }

    /// Parse a long algebraic move and make it in one call.
    pub fn make_move_text(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(text)?;
        self.make_move(mv);
        Ok(mv)
    }
}

/// The en passant square must sit on the rank a double step passes over,
/// seen from the side to move: rank 6 with white to move, rank 3 with black.
fn parse_en_passant(field: &str, side_to_move: Color) -> Result<Option<u8>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    let bytes = field.as_bytes();
    if bytes.len() != 2 {
        return Err(FenError::InvalidEnPassant {
            found: field.to_string(),
        });
    }
    let expected_rank = match side_to_move {
        Color::White => b'6',
        Color::Black => b'3',
    };
    if bytes[1] != expected_rank {
        return Err(FenError::EnPassantRank {
            found: field.to_string(),
            side_to_move,
        });
    }
    match bytes[0] {
        file @ b'a'..=b'h' => Ok(Some(file - b'a')),
        _ => Err(FenError::InvalidEnPassant {
            found: field.to_string(),
        }),
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}
