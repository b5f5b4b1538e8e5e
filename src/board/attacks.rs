//! Attack queries on a board.
//!
//! Attacks are computed by looking outward from the target square: pawn and
//! leaper offsets are probed directly and slider rays are walked until the
//! first occupied square.

use super::{Board, Color, Piece, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub(crate) const DIAGONAL_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const ORTHOGONAL_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl Board {
    /// Returns true if any piece of `color` attacks `sq`.
    ///
    /// The square's own contents are ignored, so this also answers whether a
    /// king would be safe on an empty square.
    #[must_use]
    pub fn is_attacked_by(&self, color: Color, sq: Square) -> bool {
        self.pawn_attackers(color, sq) > 0
            || self.leaper_attackers(color, sq, Piece::Knight, &KNIGHT_OFFSETS) > 0
            || self.slider_attackers(color, sq, &DIAGONAL_DIRECTIONS, Piece::attacks_diagonally) > 0
            || self.slider_attackers(color, sq, &ORTHOGONAL_DIRECTIONS, Piece::attacks_straight) > 0
            || self.leaper_attackers(color, sq, Piece::King, &KING_OFFSETS) > 0
    }

    /// Number of pieces of `color` attacking `sq`.
    ///
    /// Each slider direction contributes at most one attacker: a rook behind
    /// a rook on the same file is not counted.
    #[must_use]
    pub fn count_attacks_by(&self, color: Color, sq: Square) -> usize {
        self.pawn_attackers(color, sq)
            + self.leaper_attackers(color, sq, Piece::Knight, &KNIGHT_OFFSETS)
            + self.slider_attackers(color, sq, &DIAGONAL_DIRECTIONS, Piece::attacks_diagonally)
            + self.slider_attackers(color, sq, &ORTHOGONAL_DIRECTIONS, Piece::attacks_straight)
            + self.leaper_attackers(color, sq, Piece::King, &KING_OFFSETS)
    }

    /// Number of squares attacked by at least one piece of `color`
    #[must_use]
    pub fn attacked_square_count(&self, color: Color) -> usize {
        Square::all()
            .filter(|&sq| self.is_attacked_by(color, sq))
            .count()
    }

    fn pawn_attackers(&self, color: Color, sq: Square) -> usize {
        // a pawn of `color` attacks from one rank behind the target
        let rank_delta = -color.pawn_direction();
        [-1, 1]
            .into_iter()
            .filter_map(|file_delta| sq.offset(file_delta, rank_delta))
            .filter(|&from| self.has(from, color, Piece::Pawn))
            .count()
    }

    fn leaper_attackers(
        &self,
        color: Color,
        sq: Square,
        piece: Piece,
        offsets: &[(isize, isize)],
    ) -> usize {
        offsets
            .iter()
            .filter_map(|&(df, dr)| sq.offset(df, dr))
            .filter(|&from| self.has(from, color, piece))
            .count()
    }

    /// Count rays from `sq` whose first piece is a `color` piece that `slides`
    /// along them.
    fn slider_attackers(
        &self,
        color: Color,
        sq: Square,
        directions: &[(isize, isize)],
        slides: fn(Piece) -> bool,
    ) -> usize {
        directions
            .iter()
            .filter(|&&(df, dr)| match self.first_piece_along(sq, df, dr) {
                Some((c, p)) => c == color && slides(p),
                None => false,
            })
            .count()
    }

    fn first_piece_along(&self, sq: Square, df: isize, dr: isize) -> Option<(Color, Piece)> {
        let mut current = sq;
        while let Some(next) = current.offset(df, dr) {
            if let Some(cell) = self.piece_at(next) {
                return Some(cell);
            }
            current = next;
        }
        None
    }
}
