//! Game position: board plus side to move, castling rights and en passant.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::error::FenError;
use super::zobrist::ZOBRIST;
use super::{Board, CastlingRights, Color, Piece, Square};

/// A complete chess position.
///
/// Positions are mutated in place by [`make_move`](Position::make_move);
/// exploring a line means cloning first. Two positions are equal when every
/// field matches, and hashing uses a Zobrist key over the same fields, so
/// transpositions land on the same entry in a `HashMap`.
#[derive(Clone, PartialEq, Eq)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) en_passant_file: Option<u8>,
    pub(crate) castling_rights: CastlingRights,
    // kept in sync with the board by make_move
    pub(crate) white_king: Square,
    pub(crate) black_king: Square,
}

impl Position {
    /// The standard starting position
    #[must_use]
    pub fn new() -> Self {
        Position {
            board: Board::starting(),
            side_to_move: Color::White,
            en_passant_file: None,
            castling_rights: CastlingRights::all(),
            white_king: Square::E1,
            black_king: Square::E8,
        }
    }

    /// Assemble a position from its parts, locating both kings.
    ///
    /// Fails with [`FenError::KingCount`] unless each side has exactly one king.
    pub fn from_parts(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_file: Option<u8>,
    ) -> Result<Self, FenError> {
        let white_king = unique_king(&board, Color::White)?;
        let black_king = unique_king(&board, Color::Black)?;
        Ok(Position {
            board,
            side_to_move,
            en_passant_file: en_passant_file.filter(|&file| file < 8),
            castling_rights,
            white_king,
            black_king,
        })
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// File of the pawn that just made a double step, if any
    #[inline]
    #[must_use]
    pub fn en_passant_file(&self) -> Option<usize> {
        self.en_passant_file.map(usize::from)
    }

    /// The square a capturing pawn would land on when taking en passant.
    ///
    /// This is on rank 6 when white is to move and rank 3 when black is.
    #[must_use]
    pub fn en_passant_square(&self) -> Option<Square> {
        let rank = match self.side_to_move {
            Color::White => 5,
            Color::Black => 2,
        };
        self.en_passant_file()
            .and_then(|file| Square::new(file, rank))
    }

    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    /// King square of the side to move
    #[inline]
    #[must_use]
    pub fn king_location(&self) -> Square {
        self.king_square(self.side_to_move)
    }

    /// King square of the side not to move
    #[inline]
    #[must_use]
    pub fn enemy_king_location(&self) -> Square {
        self.king_square(!self.side_to_move)
    }

    #[inline]
    #[must_use]
    pub fn can_short_castle(&self, color: Color) -> bool {
        self.castling_rights.has(color, true)
    }

    #[inline]
    #[must_use]
    pub fn can_long_castle(&self, color: Color) -> bool {
        self.castling_rights.has(color, false)
    }

    /// Returns true if the king of `color` is attacked
    #[inline]
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board
            .is_attacked_by(!color, self.king_square(color))
    }

    /// Returns true if the side to move is in check
    #[inline]
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.is_in_check(self.side_to_move)
    }

    /// Signed material balance, positive when white is ahead
    #[must_use]
    pub fn material_balance(&self) -> i32 {
        self.board.material_balance()
    }

    /// 64-bit Zobrist key over every field that takes part in equality.
    #[must_use]
    pub fn zobrist_key(&self) -> u64 {
        let keys = &*ZOBRIST;
        let mut key = 0;
        for (sq, color, piece) in self.board.pieces() {
            key ^= keys.piece_keys[piece.index()][color.index()][sq.index()];
        }
        if self.side_to_move == Color::Black {
            key ^= keys.black_to_move_key;
        }
        for color in Color::BOTH {
            if self.can_short_castle(color) {
                key ^= keys.castling_keys[color.index()][0];
            }
            if self.can_long_castle(color) {
                key ^= keys.castling_keys[color.index()][1];
            }
        }
        if let Some(file) = self.en_passant_file() {
            key ^= keys.en_passant_keys[file];
        }
        key
    }
}

fn unique_king(board: &Board, color: Color) -> Result<Square, FenError> {
    match board.find_king(color) {
        (1, Some(sq)) => Ok(sq),
        (found, _) => Err(FenError::KingCount { color, found }),
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.zobrist_key());
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self.to_fen())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{}", self.to_fen())
    }
}

/// A fluent builder for constructing positions piece by piece.
///
/// # Example
/// ```
/// use chess_core::board::{Color, Piece, PositionBuilder, Square};
///
/// let sq = |s: &str| s.parse::<Square>().unwrap();
/// let position = PositionBuilder::new()
///     .piece(sq("e1"), Color::White, Piece::King)
///     .piece(sq("e8"), Color::Black, Piece::King)
///     .piece(sq("a2"), Color::White, Piece::Pawn)
///     .side_to_move(Color::White)
///     .build()
///     .unwrap();
/// assert_eq!(position.to_fen(), "4k3/8/8/8/8/8/P7/4K3 w - -");
/// ```
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    board: Board,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_file: Option<u8>,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a builder with an empty board.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_file: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        PositionBuilder {
            board: Board::starting(),
            castling_rights: CastlingRights::all(),
            ..Self::new()
        }
    }

    /// Place a piece, replacing whatever was on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.board.put(square, color, piece);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.clear(square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Mark the file of a pawn that just made a double step.
    #[must_use]
    pub const fn en_passant_file(mut self, file: u8) -> Self {
        self.en_passant_file = Some(file);
        self
    }

    /// Build the position; fails unless each side has exactly one king.
    pub fn build(self) -> Result<Position, FenError> {
        Position::from_parts(
            self.board,
            self.side_to_move,
            self.castling_rights,
            self.en_passant_file,
        )
    }
}
