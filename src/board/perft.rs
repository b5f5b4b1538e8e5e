//! Perft: count the leaf nodes of the legal move tree.

use super::{Move, Position};

impl Position {
    /// Number of leaf positions reachable in exactly `depth` plies.
    ///
    /// `perft(0)` is 1; `perft(1)` is the number of legal moves.
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let mut nodes = 0;
        if depth == 1 {
            self.visit_legal_moves(self.side_to_move, |_, _| nodes += 1);
        } else {
            self.visit_legal_moves(self.side_to_move, |_, next| nodes += next.perft(depth - 1));
        }
        nodes
    }

    /// Perft split by root move, sorted by move.
    #[must_use]
    pub fn perft_divide(&self, depth: u32) -> Vec<(Move, u64)> {
        let mut counts = Vec::new();
        if depth == 0 {
            return counts;
        }
        self.visit_legal_moves(self.side_to_move, |mv, next| {
            counts.push((mv, next.perft(depth - 1)));
        });
        counts.sort_unstable_by_key(|&(mv, _)| mv);
        counts
    }
}
