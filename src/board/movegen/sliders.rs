use super::super::{Color, Move, Position, Square};

impl Position {
    /// Walk each ray until blocked; the blocking square is included when it
    /// holds a capturable piece.
    pub(super) fn visit_slider_moves<F: FnMut(Move)>(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
        visit: &mut F,
    ) {
        for &(df, dr) in directions {
            let mut current = from;
            while let Some(to) = current.offset(df, dr) {
                if self.board.is_empty(to) {
                    visit(Move::new(from, to));
                    current = to;
                    continue;
                }
                if self.is_valid_destination(to, color) {
                    visit(Move::new(from, to));
                }
                break;
            }
        }
    }
}
