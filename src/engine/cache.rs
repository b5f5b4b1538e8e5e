//! Memoized per-position facts: legal moves and whether the mover is in check.

use std::collections::HashMap;

use crate::board::{Move, Position};

/// Facts derived once per position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionInfo {
    legal_moves: Vec<Move>,
    in_check: bool,
}

impl PositionInfo {
    fn compute(position: &Position) -> Self {
        PositionInfo {
            legal_moves: position.legal_moves().to_vec(),
            in_check: position.in_check(),
        }
    }

    /// Legal moves of the side to move, in generation order
    #[inline]
    #[must_use]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    #[inline]
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    #[inline]
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.in_check && self.legal_moves.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.in_check && self.legal_moves.is_empty()
    }
}

/// Lazily filled map from position to [`PositionInfo`].
///
/// Entries are never evicted; call [`clear`](PositionCache::clear) between
/// games to bound memory.
#[derive(Clone, Debug, Default)]
pub struct PositionCache {
    entries: HashMap<Position, PositionInfo>,
}

impl PositionCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Facts for `position`, computing them on first use.
    pub fn lookup(&mut self, position: &Position) -> &PositionInfo {
        self.entries
            .entry(position.clone())
            .or_insert_with(|| PositionInfo::compute(position))
    }

    pub fn legal_moves(&mut self, position: &Position) -> &[Move] {
        self.lookup(position).legal_moves()
    }

    pub fn in_check(&mut self, position: &Position) -> bool {
        self.lookup(position).in_check()
    }

    pub fn is_checkmate(&mut self, position: &Position) -> bool {
        self.lookup(position).is_checkmate()
    }

    pub fn is_stalemate(&mut self, position: &Position) -> bool {
        self.lookup(position).is_stalemate()
    }

    /// Number of cached positions
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
