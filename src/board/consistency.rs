//! Self-consistency oracle for the move generator.
//!
//! Compares the fast visitor-based generators against a brute-force scan of
//! every (from, to, promotion) triple through `is_valid`, for both colors,
//! and checks that FEN output reads back to the same position.

use super::error::{ConsistencyError, MoveSetKind};
use super::{Color, Move, Position, Square, PROMOTION_PIECES};

impl Position {
    /// Verify that generated move sets agree with brute-force validation and
    /// that the FEN round trip is lossless.
    ///
    /// This is slow (over 20,000 `is_valid` calls) and meant for tests.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        let promotions: Vec<_> = std::iter::once(None)
            .chain(PROMOTION_PIECES.iter().copied().map(Some))
            .collect();

        let mut brute_valid: [Vec<Move>; 2] = [Vec::new(), Vec::new()];
        for from in Square::all() {
            let Some(color) = self.board.piece_at(from).map(|(c, _)| c) else {
                continue;
            };
            for to in Square::all() {
                for &promotion in &promotions {
                    let mv = Move::with_promotion(from, to, promotion);
                    if self.is_valid(mv) {
                        brute_valid[color.index()].push(mv);
                    }
                }
            }
        }

        for color in Color::BOTH {
            let valid = std::mem::take(&mut brute_valid[color.index()]);
            let legal: Vec<Move> = valid
                .iter()
                .copied()
                .filter(|&mv| !self.after(mv).is_in_check(color))
                .collect();
            compare_move_sets(MoveSetKind::Valid, color, valid, self.valid_moves(color).to_vec())?;
            compare_move_sets(
                MoveSetKind::Legal,
                color,
                legal,
                self.legal_moves_for(color).to_vec(),
            )?;
        }

        let fen = self.to_fen();
        match Position::from_fen(&fen) {
            Ok(round_trip) if round_trip == *self => Ok(()),
            _ => Err(ConsistencyError::FenRoundTrip { fen }),
        }
    }
}

fn compare_move_sets(
    kind: MoveSetKind,
    color: Color,
    mut expected: Vec<Move>,
    mut generated: Vec<Move>,
) -> Result<(), ConsistencyError> {
    expected.sort_unstable();
    generated.sort_unstable();
    if expected == generated {
        return Ok(());
    }
    let missing = expected
        .iter()
        .filter(|mv| !generated.contains(mv))
        .copied()
        .collect();
    let unexpected = generated
        .iter()
        .filter(|mv| !expected.contains(mv))
        .copied()
        .collect();
    Err(ConsistencyError::MoveSetMismatch {
        kind,
        color,
        missing,
        unexpected,
    })
}
