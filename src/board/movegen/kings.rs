use super::super::attacks::KING_OFFSETS;
use super::super::{Color, Move, Position, Square};

impl Position {
    pub(super) fn visit_king_moves<F: FnMut(Move)>(&self, from: Square, color: Color, visit: &mut F) {
        for &(df, dr) in &KING_OFFSETS {
            if let Some(to) = from.offset(df, dr) {
                if self.is_valid_destination(to, color) {
                    visit(Move::new(from, to));
                }
            }
        }
        self.visit_castling_moves(from, color, visit);
    }

    fn visit_castling_moves<F: FnMut(Move)>(&self, from: Square, color: Color, visit: &mut F) {
        let home = color.back_rank();
        if from.rank() != home || from.file() != 4 {
            return;
        }
        if self.can_short_castle(color) && self.castle_path_ok(color, 7, &[5, 6], &[4, 5, 6]) {
            if let Some(to) = Square::new(6, home) {
                visit(Move::new(from, to));
            }
        }
        if self.can_long_castle(color) && self.castle_path_ok(color, 0, &[1, 2, 3], &[2, 3, 4]) {
            if let Some(to) = Square::new(2, home) {
                visit(Move::new(from, to));
            }
        }
    }
}
