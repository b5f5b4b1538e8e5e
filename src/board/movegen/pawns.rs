use super::super::{Color, Move, Piece, Position, Square, PROMOTION_PIECES};

impl Position {
    pub(super) fn visit_pawn_moves<F: FnMut(Move)>(&self, from: Square, color: Color, visit: &mut F) {
        let direction = color.pawn_direction();

        if let Some(one) = from.offset(0, direction) {
            if self.board.is_empty(one) {
                visit_with_promotions(from, one, color, visit);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(two) = one.offset(0, direction) {
                        if self.board.is_empty(two) {
                            visit(Move::new(from, two));
                        }
                    }
                }
            }
        }

        for file_delta in [-1, 1] {
            let Some(to) = from.offset(file_delta, direction) else {
                continue;
            };
            match self.board.piece_at(to) {
                Some((c, p)) if c != color && p != Piece::King => {
                    visit_with_promotions(from, to, color, visit);
                }
                None if color == self.side_to_move && self.en_passant_square() == Some(to) => {
                    let mv = Move::new(from, to);
                    if self.is_valid_en_passant(mv) {
                        visit(mv);
                    }
                }
                _ => {}
            }
        }
    }
}

/// A pawn reaching the last rank fans out into one move per promotion piece.
fn visit_with_promotions<F: FnMut(Move)>(from: Square, to: Square, color: Color, visit: &mut F) {
    if to.rank() == color.pawn_promotion_rank() {
        for piece in PROMOTION_PIECES {
            visit(Move::with_promotion(from, to, Some(piece)));
        }
    } else {
        visit(Move::new(from, to));
    }
}
