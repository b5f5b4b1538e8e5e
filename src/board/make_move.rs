//! Applying moves to a position.

use super::{Color, Move, Piece, Position, Square};

impl Position {
    /// Play `mv`, mutating the position in place.
    ///
    /// The move must be valid (see [`is_valid`](Position::is_valid)); this is
    /// checked with a debug assertion only. Moves that leave the mover in
    /// check are applied as given.
    pub fn make_move(&mut self, mv: Move) {
        debug_assert!(
            self.is_valid(mv),
            "invalid move {mv} in position {}",
            self.to_fen()
        );
        let Some((color, piece)) = self.board.piece_at(mv.from()) else {
            return;
        };
        let is_castle = self.is_castle(mv);
        let is_en_passant = self.is_valid_en_passant(mv);

        // rights go with the king or with any move touching a rook corner,
        // whether the rook moves away or is captured there
        if piece == Piece::King {
            self.castling_rights.remove_color(color);
        }
        for (corner, owner, short) in [
            (Square::H1, Color::White, true),
            (Square::A1, Color::White, false),
            (Square::H8, Color::Black, true),
            (Square::A8, Color::Black, false),
        ] {
            if mv.affects(corner) {
                self.castling_rights.remove(owner, short);
            }
        }

        if is_en_passant {
            if let Some(victim) = Square::new(mv.to().file(), mv.from().rank()) {
                self.board.clear(victim);
            }
        }

        if is_castle {
            let home = mv.from().rank();
            let (rook_from, rook_to) = if mv.to().file() == 6 { (7, 5) } else { (0, 3) };
            if let (Some(from), Some(to)) = (Square::new(rook_from, home), Square::new(rook_to, home)) {
                let rook = self.board.piece_at(from);
                self.board.clear(from);
                self.board.set_piece(to, rook);
            }
        }

        let placed = mv.promotion().unwrap_or(piece);
        self.board.clear(mv.from());
        self.board.put(mv.to(), color, placed);

        if piece == Piece::King {
            match color {
                Color::White => self.white_king = mv.to(),
                Color::Black => self.black_king = mv.to(),
            }
        }

        self.en_passant_file = if piece == Piece::Pawn && mv.rank_delta().abs() == 2 {
            Some(mv.from().file() as u8)
        } else {
            None
        };
        self.side_to_move = !color;
    }

    /// A copy of this position with `mv` played
    #[must_use]
    pub fn after(&self, mv: Move) -> Position {
        let mut next = self.clone();
        next.make_move(mv);
        next
    }
}
