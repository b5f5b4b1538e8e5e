//! Visitor-based move generation.
//!
//! Generators call a visitor once per move instead of building lists, so
//! perft and search can consume moves without allocating. The collecting
//! helpers (`valid_moves`, `legal_moves`) are thin wrappers over the
//! visitors.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attacks::{DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};
use super::{Color, Move, MoveList, Piece, Position, Square};

impl Position {
    /// Call `visit` with every valid move for the pieces of `color`.
    ///
    /// Valid moves obey the movement rules but may leave the mover in check.
    pub fn visit_valid_moves<F: FnMut(Move)>(&self, color: Color, mut visit: F) {
        for (from, piece_color, piece) in self.board.pieces() {
            if piece_color != color {
                continue;
            }
            match piece {
                Piece::King => self.visit_king_moves(from, color, &mut visit),
                Piece::Queen => {
                    self.visit_slider_moves(from, color, &ORTHOGONAL_DIRECTIONS, &mut visit);
                    self.visit_slider_moves(from, color, &DIAGONAL_DIRECTIONS, &mut visit);
                }
                Piece::Rook => self.visit_slider_moves(from, color, &ORTHOGONAL_DIRECTIONS, &mut visit),
                Piece::Bishop => self.visit_slider_moves(from, color, &DIAGONAL_DIRECTIONS, &mut visit),
                Piece::Knight => self.visit_knight_moves(from, color, &mut visit),
                Piece::Pawn => self.visit_pawn_moves(from, color, &mut visit),
            }
        }
    }

    /// Call `visit` with every legal move for `color` and the position it
    /// leads to.
    pub fn visit_legal_moves<F: FnMut(Move, &Position)>(&self, color: Color, mut visit: F) {
        self.visit_valid_moves(color, |mv| {
            let mut next = self.clone();
            next.make_move(mv);
            if !next.is_in_check(color) {
                visit(mv, &next);
            }
        });
    }

    /// All valid moves for `color`
    #[must_use]
    pub fn valid_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        self.visit_valid_moves(color, |mv| moves.push(mv));
        moves
    }

    /// All legal moves for `color`
    #[must_use]
    pub fn legal_moves_for(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        self.visit_legal_moves(color, |mv, _| moves.push(mv));
        moves
    }

    /// All legal moves for the side to move
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.legal_moves_for(self.side_to_move)
    }

    /// Returns true if `color` has at least one legal move
    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        let mut found = false;
        self.visit_valid_moves(color, |mv| {
            if !found {
                found = !self.after(mv).is_in_check(color);
            }
        });
        found
    }

    #[must_use]
    pub fn is_checkmate_for(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    #[must_use]
    pub fn is_stalemate_for(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Returns true if the side to move is checkmated
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_checkmate_for(self.side_to_move)
    }

    /// Returns true if the side to move is stalemated
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.is_stalemate_for(self.side_to_move)
    }

    /// A destination a piece of `color` may move to: empty or an enemy
    /// piece other than the king.
    #[inline]
    pub(crate) fn is_valid_destination(&self, sq: Square, color: Color) -> bool {
        match self.board.piece_at(sq) {
            None => true,
            Some((c, p)) => c != color && p != Piece::King,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_move_counts() {
        let position = Position::new();
        assert_eq!(position.legal_moves().len(), 20);
        assert_eq!(position.valid_moves(Color::Black).len(), 20);
        assert_eq!(position.legal_moves_for(Color::Black).len(), 20);
    }

    #[test]
    fn test_every_generated_move_is_valid() {
        let position =
            Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
                .unwrap();
        for color in Color::BOTH {
            for &mv in &position.valid_moves(color) {
                assert!(position.is_valid(mv), "{mv}");
            }
        }
        assert_eq!(position.legal_moves().len(), 48);
    }

    #[test]
    fn test_checkmate_and_stalemate() {
        let mate = Position::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - -").unwrap();
        assert!(mate.is_checkmate());
        assert!(!mate.is_stalemate());
        assert!(mate.legal_moves().is_empty());

        let stalemate = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - -").unwrap();
        assert!(stalemate.is_stalemate());
        assert!(!stalemate.is_checkmate());

        let start = Position::new();
        assert!(!start.is_checkmate());
        assert!(!start.is_stalemate());
    }

    #[test]
    fn test_check_evasions_only() {
        let position = Position::from_fen("4k3/8/8/8/8/8/3q4/4K3 w - -").unwrap();
        let moves = position.legal_moves();
        assert!(moves.iter().all(|&mv| mv.from() == position.king_square(Color::White)
            || mv.to() == "d2".parse::<Square>().unwrap()));
        // Kxd2 and Kf1
        assert_eq!(moves.len(), 2);
    }
}
