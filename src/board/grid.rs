//! The 8x8 piece grid.

use std::fmt;

use super::{Color, Piece, Square};

/// Contents of one board cell: `None` for an empty square.
pub type Cell = Option<(Color, Piece)>;

/// Piece placement on an 8x8 board.
///
/// A board knows nothing about whose turn it is or which special moves are
/// available; that lives in [`Position`](super::Position).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    // cells[rank][file]
    cells: [[Cell; 8]; 8],
}

impl Board {
    /// A board with no pieces
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// The standard starting arrangement
    #[must_use]
    pub fn starting() -> Self {
        const BACK_RANK: [Piece; 8] = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        let mut board = Board::empty();
        for color in Color::BOTH {
            for (file, &piece) in BACK_RANK.iter().enumerate() {
                board.cells[color.back_rank()][file] = Some((color, piece));
                board.cells[color.pawn_start_rank()][file] = Some((color, Piece::Pawn));
            }
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Cell {
        self.cells[sq.rank()][sq.file()]
    }

    #[inline]
    pub fn set_piece(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.rank()][sq.file()] = cell;
    }

    #[inline]
    pub fn put(&mut self, sq: Square, color: Color, piece: Piece) {
        self.set_piece(sq, Some((color, piece)));
    }

    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.set_piece(sq, None);
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Returns true if `sq` holds `piece` of `color`
    #[inline]
    #[must_use]
    pub fn has(&self, sq: Square, color: Color, piece: Piece) -> bool {
        self.piece_at(sq) == Some((color, piece))
    }

    /// Iterate over every occupied square and its piece, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|(c, p)| (sq, c, p)))
    }

    /// Number of pieces of the given kind
    #[must_use]
    pub fn count(&self, color: Color, piece: Piece) -> usize {
        self.pieces()
            .filter(|&(_, c, p)| c == color && p == piece)
            .count()
    }

    /// Locate the king of `color`.
    ///
    /// Returns the number of kings found along with the first one, so callers
    /// can reject boards without exactly one king.
    #[must_use]
    pub fn find_king(&self, color: Color) -> (usize, Option<Square>) {
        let mut count = 0;
        let mut first = None;
        for (sq, _, _) in self
            .pieces()
            .filter(|&(_, c, p)| c == color && p == Piece::King)
        {
            count += 1;
            first.get_or_insert(sq);
        }
        (count, first)
    }

    /// Signed material balance in centipawns, positive when white is ahead
    #[must_use]
    pub fn material_balance(&self) -> i32 {
        self.pieces()
            .map(|(_, color, piece)| color.sign() * piece.material_value())
            .sum()
    }

    /// Returns true if neither side can possibly deliver mate: no queens,
    /// rooks or pawns anywhere and at most one minor piece on the board.
    #[must_use]
    pub fn has_insufficient_material(&self) -> bool {
        let mut minors = 0;
        for (_, _, piece) in self.pieces() {
            match piece {
                Piece::Queen | Piece::Rook | Piece::Pawn => return false,
                Piece::Bishop | Piece::Knight => minors += 1,
                Piece::King => {}
            }
        }
        minors <= 1
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting()
    }
}

/// ASCII diagram with rank 8 at the top.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = match self.cells[rank][file] {
                    Some((color, piece)) => piece.to_fen_char(color),
                    None => '.',
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen_board())
    }
}
