use super::super::attacks::KNIGHT_OFFSETS;
use super::super::{Color, Move, Position, Square};

impl Position {
    pub(super) fn visit_knight_moves<F: FnMut(Move)>(&self, from: Square, color: Color, visit: &mut F) {
        for &(df, dr) in &KNIGHT_OFFSETS {
            if let Some(to) = from.offset(df, dr) {
                if self.is_valid_destination(to, color) {
                    visit(Move::new(from, to));
                }
            }
        }
    }
}
