//! Standard Algebraic Notation (SAN) move names.
//!
//! Examples: "e4", "Nf3", "Rae1", "exd6", "O-O", "e8=Q#"

use super::{Move, Piece, Position};

impl Position {
    /// Name `mv` in algebraic notation.
    ///
    /// `legal_moves` are the legal moves of this position and are used to
    /// decide how much of the source square is needed to disambiguate. With
    /// `suffix`, a check gets `+` and a checkmate `#`.
    #[must_use]
    pub fn move_name(&self, legal_moves: &[Move], mv: Move, suffix: bool) -> String {
        debug_assert!(self.is_valid(mv), "invalid move {mv}");
        let mut name = String::new();

        if self.is_castle(mv) {
            name.push_str(if mv.to().file() == 6 { "O-O" } else { "O-O-O" });
        } else if let Some((_, piece)) = self.board.piece_at(mv.from()) {
            if piece == Piece::Pawn {
                if self.is_capture(mv) {
                    name.push(file_char(mv.from().file()));
                }
            } else {
                name.push(piece.to_char().to_ascii_uppercase());
                self.push_disambiguation(&mut name, legal_moves, mv, piece);
            }
            if self.is_capture(mv) {
                name.push('x');
            }
            name.push_str(&mv.to().to_string());
        }

        if let Some(promotion) = mv.promotion() {
            name.push('=');
            name.push(promotion.to_char().to_ascii_uppercase());
        }

        if suffix {
            let next = self.after(mv);
            if next.in_check() {
                name.push(if next.has_legal_move(next.side_to_move()) { '+' } else { '#' });
            }
        }
        name
    }

    /// Algebraic name of `mv` with check suffix, computing the legal moves.
    #[must_use]
    pub fn san(&self, mv: Move) -> String {
        let legal = self.legal_moves();
        self.move_name(legal.as_slice(), mv, true)
    }

    fn push_disambiguation(&self, name: &mut String, legal_moves: &[Move], mv: Move, piece: Piece) {
        let mut same_file = false;
        let mut same_rank = false;
        let mut other_line = false;
        for other in legal_moves {
            let same_piece = matches!(self.board.piece_at(other.from()), Some((_, p)) if p == piece);
            if !same_piece || other.to() != mv.to() {
                continue;
            }
            let file_match = other.from().file() == mv.from().file();
            let rank_match = other.from().rank() == mv.from().rank();
            same_file |= file_match && !rank_match;
            same_rank |= !file_match && rank_match;
            other_line |= !file_match && !rank_match;
        }
        if !(same_file || same_rank || other_line) {
            return;
        }
        if !same_file {
            name.push(file_char(mv.from().file()));
        } else if !same_rank {
            name.push(rank_char(mv.from().rank()));
        } else {
            name.push_str(&mv.from().to_string());
        }
    }
}

fn file_char(file: usize) -> char {
    (b'a' + file as u8) as char
}

fn rank_char(rank: usize) -> char {
    (b'1' + rank as u8) as char
}
