//! Move validation.
//!
//! A move is *valid* when the moving piece may make it under the movement
//! rules, ignoring whether it leaves its own king in check. A move is *legal*
//! when it is valid and the mover's king is safe afterwards.

use super::{Color, Move, Piece, Position, Square};

impl Position {
    /// Returns true if `mv` obeys the movement rules for the piece on its
    /// source square.
    ///
    /// This works for either color's pieces; only en passant additionally
    /// requires the mover to be the side to move.
    #[must_use]
    pub fn is_valid(&self, mv: Move) -> bool {
        let Some((color, piece)) = self.board.piece_at(mv.from()) else {
            return false;
        };
        if mv.from() == mv.to() {
            return false;
        }
        if let Some((target_color, target_piece)) = self.board.piece_at(mv.to()) {
            if target_color == color || target_piece == Piece::King {
                return false;
            }
        }
        if piece != Piece::Pawn && mv.promotion().is_some() {
            return false;
        }

        match piece {
            Piece::King => mv.distance() == 1 || self.is_valid_castle(mv),
            Piece::Queen => (mv.is_orthogonal() || mv.is_diagonal()) && self.is_path_clear(mv),
            Piece::Rook => mv.is_orthogonal() && self.is_path_clear(mv),
            Piece::Bishop => mv.is_diagonal() && self.is_path_clear(mv),
            Piece::Knight => mv.distance() == 2 && !mv.is_orthogonal() && !mv.is_diagonal(),
            Piece::Pawn => self.is_valid_pawn_move(mv, color),
        }
    }

    /// Returns true if `mv` is valid and does not leave the mover in check.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        let Some(color) = self.moving_color(mv) else {
            return false;
        };
        if !self.is_valid(mv) {
            return false;
        }
        let mut next = self.clone();
        next.make_move(mv);
        !next.is_in_check(color)
    }

    /// Color of the piece on the move's source square
    #[inline]
    #[must_use]
    pub fn moving_color(&self, mv: Move) -> Option<Color> {
        self.board.piece_at(mv.from()).map(|(color, _)| color)
    }

    /// Returns true if `mv` is a king's two-square castling step.
    ///
    /// Only the shape is checked; use `is_valid` for the full castling rules.
    #[must_use]
    pub fn is_castle(&self, mv: Move) -> bool {
        matches!(self.board.piece_at(mv.from()), Some((_, Piece::King)))
            && mv.from().file() == 4
            && mv.rank_delta() == 0
            && mv.file_delta().abs() == 2
    }

    /// Returns true if `mv` is a valid en passant capture
    #[must_use]
    pub fn is_en_passant(&self, mv: Move) -> bool {
        self.is_valid_en_passant(mv)
    }

    /// Returns true if `mv` removes an enemy piece, en passant included
    #[must_use]
    pub fn is_capture(&self, mv: Move) -> bool {
        !self.board.is_empty(mv.to()) || self.is_valid_en_passant(mv)
    }

    /// Returns true if `mv` resets the fifty-move counter
    #[must_use]
    pub fn is_capture_or_pawn_move(&self, mv: Move) -> bool {
        matches!(self.board.piece_at(mv.from()), Some((_, Piece::Pawn))) || self.is_capture(mv)
    }

    fn is_valid_pawn_move(&self, mv: Move, color: Color) -> bool {
        let promotion_ok = if mv.to().rank() == color.pawn_promotion_rank() {
            mv.promotion().is_some_and(Piece::is_promotion_target)
        } else {
            mv.promotion().is_none()
        };
        if !promotion_ok {
            return false;
        }

        // pawns capture diagonally and only diagonally
        let is_capture = !self.board.is_empty(mv.to()) || self.is_valid_en_passant(mv);
        if mv.is_diagonal() != is_capture {
            return false;
        }

        let direction = color.pawn_direction();
        if mv.rank_delta() == 2 * direction {
            return mv.file_delta() == 0
                && mv.from().rank() == color.pawn_start_rank()
                && mv
                    .from()
                    .offset(0, direction)
                    .is_some_and(|sq| self.board.is_empty(sq))
                && self.board.is_empty(mv.to());
        }
        mv.rank_delta() == direction && mv.distance() == 1
    }

    pub(crate) fn is_valid_castle(&self, mv: Move) -> bool {
        let Some((color, Piece::King)) = self.board.piece_at(mv.from()) else {
            return false;
        };
        let home = color.back_rank();
        if mv.distance() != 2
            || mv.from().rank() != home
            || mv.to().rank() != home
            || mv.from().file() != 4
        {
            return false;
        }
        match mv.to().file() {
            6 => self.can_short_castle(color) && self.castle_path_ok(color, 7, &[5, 6], &[4, 5, 6]),
            2 => {
                self.can_long_castle(color) && self.castle_path_ok(color, 0, &[1, 2, 3], &[2, 3, 4])
            }
            _ => false,
        }
    }

    /// Rook in its corner, the squares between empty, and the king's start,
    /// transit and landing squares not attacked.
    pub(crate) fn castle_path_ok(
        &self,
        color: Color,
        rook_file: usize,
        empty_files: &[usize],
        safe_files: &[usize],
    ) -> bool {
        let home = color.back_rank();
        let on_home = |file: usize| Square::new(file, home);
        let rook_home = on_home(rook_file).is_some_and(|sq| self.board.has(sq, color, Piece::Rook));
        rook_home
            && empty_files
                .iter()
                .filter_map(|&f| on_home(f))
                .all(|sq| self.board.is_empty(sq))
            && safe_files
                .iter()
                .filter_map(|&f| on_home(f))
                .all(|sq| !self.board.is_attacked_by(!color, sq))
    }

    pub(crate) fn is_valid_en_passant(&self, mv: Move) -> bool {
        let Some((color, Piece::Pawn)) = self.board.piece_at(mv.from()) else {
            return false;
        };
        if color != self.side_to_move
            || mv.rank_delta() != color.pawn_direction()
            || mv.file_delta().abs() != 1
            || !self.board.is_empty(mv.to())
            || self.en_passant_square() != Some(mv.to())
        {
            return false;
        }
        Square::new(mv.to().file(), mv.from().rank())
            .is_some_and(|sq| self.board.has(sq, !color, Piece::Pawn))
    }

    /// Every square strictly between source and destination is empty.
    /// Only meaningful for orthogonal or diagonal moves.
    fn is_path_clear(&self, mv: Move) -> bool {
        let df = mv.file_delta().signum();
        let dr = mv.rank_delta().signum();
        let mut current = mv.from();
        loop {
            match current.offset(df, dr) {
                Some(next) if next == mv.to() => return true,
                Some(next) if self.board.is_empty(next) => current = next,
                _ => return false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(text: &str) -> Move {
        let from = text[0..2].parse().unwrap();
        let to = text[2..4].parse().unwrap();
        let promotion = text[4..].chars().next().and_then(Piece::from_char);
        Move::with_promotion(from, to, promotion)
    }

    #[test]
    fn test_basic_validity_from_start() {
        let position = Position::new();
        assert!(position.is_valid(mv("e2e4")));
        assert!(position.is_valid(mv("e2e3")));
        assert!(position.is_valid(mv("g1f3")));
        assert!(!position.is_valid(mv("e2e5")));
        assert!(!position.is_valid(mv("e3e4")), "empty source square");
        assert!(!position.is_valid(mv("e1e2")), "friendly destination");
        assert!(!position.is_valid(mv("f1c4")), "blocked bishop");
        assert!(!position.is_valid(mv("e2e2")));
    }

    #[test]
    fn test_validity_for_side_not_to_move() {
        let position = Position::new();
        assert!(position.is_valid(mv("e7e5")));
        assert!(position.is_valid(mv("b8c6")));
        assert!(position.is_legal(mv("e7e6")));
    }

    #[test]
    fn test_cannot_capture_king() {
        let attacked = Position::from_fen("k7/8/8/8/8/8/8/R3K3 w - -").unwrap();
        assert!(!attacked.is_valid(mv("a1a8")));
    }

    #[test]
    fn test_knight_shape() {
        let position = Position::from_fen("4k3/8/8/8/3N4/8/8/4K3 w - -").unwrap();
        for target in ["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"] {
            assert!(position.is_valid(mv(&format!("d4{target}"))), "{target}");
        }
        assert!(!position.is_valid(mv("d4d6")));
        assert!(!position.is_valid(mv("d4f6")));
    }

    #[test]
    fn test_promotion_required_exactly_on_last_rank() {
        let position = Position::from_fen("4k3/1P6/8/8/8/8/4P3/4K3 w - -").unwrap();
        assert!(position.is_valid(mv("b7b8q")));
        assert!(position.is_valid(mv("b7b8n")));
        assert!(!position.is_valid(mv("b7b8")));
        assert!(!position.is_valid(mv("b7b8k")));
        assert!(!position.is_valid(mv("b7b8p")));
        assert!(!position.is_valid(mv("e2e3q")));
        assert!(!position.is_valid(mv("e1d1q")));
    }

    #[test]
    fn test_pawn_capture_rules() {
        let position = Position::from_fen("4k3/8/8/3p1p2/4P3/8/8/4K3 w - -").unwrap();
        assert!(position.is_valid(mv("e4d5")));
        assert!(position.is_valid(mv("e4f5")));
        assert!(position.is_valid(mv("e4e5")));
        assert!(position.is_capture(mv("e4d5")));
        assert!(!position.is_capture(mv("e4e5")));

        let blocked = Position::from_fen("4k3/8/8/4p3/4P3/8/8/4K3 w - -").unwrap();
        assert!(!blocked.is_valid(mv("e4e5")), "pawns cannot capture forward");
        assert!(!blocked.is_valid(mv("e4d5")), "no diagonal step without capture");
    }

    #[test]
    fn test_double_step_needs_clear_path() {
        let position = Position::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - -").unwrap();
        assert!(!position.is_valid(mv("e2e4")));
        assert!(!position.is_valid(mv("e2e3")));
    }

    #[test]
    fn test_en_passant_validity() {
        let position =
            Position::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6").unwrap();
        assert!(position.is_en_passant(mv("e5f6")));
        assert!(position.is_valid(mv("e5f6")));
        assert!(position.is_capture(mv("e5f6")));
        assert!(!position.is_en_passant(mv("e5d6")), "only the recorded file");
        assert!(!position.is_valid(mv("e5d6")));
    }

    #[test]
    fn test_castle_validity() {
        let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq -").unwrap();
        assert!(position.is_castle(mv("e1g1")));
        assert!(position.is_valid(mv("e1g1")));
        assert!(position.is_valid(mv("e1c1")));
        assert!(position.is_valid(mv("e8g8")));
        assert!(position.is_valid(mv("e8c8")));
        assert!(!position.is_castle(mv("e1f1")));

        let no_rights = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w - -").unwrap();
        assert!(!no_rights.is_valid(mv("e1g1")));
        assert!(!no_rights.is_valid(mv("e1c1")));
    }

    #[test]
    fn test_castle_blocked_or_attacked() {
        // b1 occupied blocks long castling but is not a transit square for the king
        let blocked = Position::from_fen("4k3/8/8/8/8/8/8/RN2K2R w KQ -").unwrap();
        assert!(!blocked.is_valid(mv("e1c1")));
        assert!(blocked.is_valid(mv("e1g1")));

        // rook on f8 attacks f1
        let attacked = Position::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ -").unwrap();
        assert!(!attacked.is_valid(mv("e1g1")));
        assert!(attacked.is_valid(mv("e1c1")));

        // b1 attacked does not prevent long castling
        let b_file = Position::from_fen("1r2k3/8/8/8/8/8/8/R3K2R w KQ -").unwrap();
        assert!(b_file.is_valid(mv("e1c1")));

        let in_check = Position::from_fen("4r1k1/8/8/8/8/8/8/R3K2R w KQ -").unwrap();
        assert!(!in_check.is_valid(mv("e1g1")));
        assert!(!in_check.is_valid(mv("e1c1")));
    }

    #[test]
    fn test_legality_rejects_pins() {
        let position = Position::from_fen("4k3/4r3/8/8/8/8/4B3/4K3 w - -").unwrap();
        assert!(position.is_valid(mv("e2d3")));
        assert!(!position.is_legal(mv("e2d3")));
        assert!(position.is_legal(mv("e1d1")));
    }

    #[test]
    fn test_capture_or_pawn_move() {
        let position = Position::new();
        assert!(position.is_capture_or_pawn_move(mv("a2a3")));
        assert!(!position.is_capture_or_pawn_move(mv("g1f3")));
    }
}
