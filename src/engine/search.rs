//! Material minimax with alpha-beta pruning.
//!
//! Scores are from white's point of view. Checkmates score just inside the
//! `i32` range ([`WHITE_MATED`], [`BLACK_MATED`]) and every ply between the
//! root and a mate pulls the score one unit towards zero, so quicker mates
//! rank higher.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::cache::PositionCache;
use super::params::SearchParams;
use super::selector::{maximal_elements, minimal_elements, random_choice, MoveSelector};
use super::session::Session;
use crate::board::{Color, Move, Position};

/// Scores within this distance of `i32::MIN`/`i32::MAX` are mate scores.
pub const MATE_THRESHOLD: i32 = 1000;

/// Score of a position where white is checkmated
pub const WHITE_MATED: i32 = i32::MIN + 1;

/// Score of a position where black is checkmated
pub const BLACK_MATED: i32 = i32::MAX - 1;

#[derive(Clone, Copy, Debug)]
struct MemoEntry {
    value: i32,
    depth: u32,
}

/// Depth-limited minimax over material with a position memo.
///
/// The memo keeps one entry per position and is reused across moves; a
/// stored value answers any query at the same or lower depth.
pub struct TreeSearch<R: Rng = StdRng> {
    params: SearchParams,
    memo: HashMap<Position, MemoEntry>,
    rng: R,
}

impl TreeSearch<StdRng> {
    /// Default parameters, seeded from the operating system's entropy source
    #[must_use]
    pub fn new() -> Self {
        Self::with_params(SearchParams::default())
    }

    #[must_use]
    pub fn with_params(params: SearchParams) -> Self {
        Self::with_params_and_rng(params, StdRng::from_entropy())
    }
}

impl Default for TreeSearch<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> TreeSearch<R> {
    pub fn with_rng(rng: R) -> Self {
        Self::with_params_and_rng(SearchParams::default(), rng)
    }

    pub fn with_params_and_rng(params: SearchParams, rng: R) -> Self {
        TreeSearch {
            params,
            memo: HashMap::new(),
            rng,
        }
    }

    #[must_use]
    pub fn params(&self) -> SearchParams {
        self.params
    }

    /// Number of memoized positions
    #[must_use]
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    pub fn clear_memo(&mut self) {
        self.memo.clear();
    }

    /// Minimax value of `position` searched `depth` plies deep within the
    /// window (`alpha`, `beta`).
    pub fn evaluate(
        &mut self,
        cache: &mut PositionCache,
        position: &Position,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        let info = cache.lookup(position);
        if info.legal_moves().is_empty() {
            if !info.in_check() {
                return 0;
            }
            return match position.side_to_move() {
                Color::White => WHITE_MATED,
                Color::Black => BLACK_MATED,
            };
        }
        if depth == 0 {
            return position.material_balance();
        }
        if let Some(entry) = self.memo.get(position) {
            if entry.depth >= depth {
                return entry.value;
            }
        }

        let moves = info.legal_moves().to_vec();
        let mut result;
        match position.side_to_move() {
            Color::White => {
                result = i32::MIN;
                for mv in moves {
                    let child = position.after(mv);
                    let value = adjust(self.evaluate(cache, &child, depth - 1, alpha, beta));
                    result = result.max(value);
                    if result > beta {
                        break;
                    }
                    alpha = alpha.max(result);
                }
            }
            Color::Black => {
                result = i32::MAX;
                for mv in moves {
                    let child = position.after(mv);
                    let value = adjust(self.evaluate(cache, &child, depth - 1, alpha, beta));
                    result = result.min(value);
                    if result < alpha {
                        break;
                    }
                    beta = beta.min(result);
                }
            }
        }

        self.memo.insert(position.clone(), MemoEntry { value: result, depth });
        result
    }

    /// Every legal root move with the full-window value of its successor.
    pub fn score_moves(&mut self, cache: &mut PositionCache, position: &Position) -> Vec<(Move, i32)> {
        let depth = self.params.depth;
        let moves = cache.legal_moves(position).to_vec();
        moves
            .into_iter()
            .map(|mv| {
                let value = self.evaluate(cache, &position.after(mv), depth, i32::MIN, i32::MAX);
                #[cfg(feature = "logging")]
                log::debug!("considering {mv}: {value}");
                (mv, value)
            })
            .collect()
    }
}

/// One ply of distance from a mate, towards zero.
fn adjust(value: i32) -> i32 {
    if value >= i32::MAX - MATE_THRESHOLD {
        value - 1
    } else if value <= i32::MIN + MATE_THRESHOLD {
        value + 1
    } else {
        value
    }
}

impl<R: Rng> MoveSelector for TreeSearch<R> {
    fn name(&self) -> &str {
        "TreeSearch"
    }

    fn pick_move(&mut self, session: &mut Session) -> Option<Move> {
        let (position, cache) = session.parts_mut();
        let scored = self.score_moves(cache, position);
        let best = match position.side_to_move() {
            Color::White => maximal_elements(&scored, |(_, value)| value),
            Color::Black => minimal_elements(&scored, |(_, value)| value),
        };
        #[cfg(feature = "logging")]
        log::trace!(
            "{} of {} moves tied, memo holds {} positions, cache {}",
            best.len(),
            scored.len(),
            self.memo.len(),
            cache.len()
        );
        random_choice(&best, &mut self.rng).map(|&(mv, _)| mv)
    }
}
