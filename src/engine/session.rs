//! The live position a selector plays from, plus its cache.

use crate::board::{Color, Move, Position};

use super::cache::PositionCache;

/// A position being played together with the cache selectors consult.
///
/// Selectors receive `&mut Session` so they can fill the cache while
/// exploring hypothetical positions; only the game driver advances it.
#[derive(Clone, Debug, Default)]
pub struct Session {
    position: Position,
    cache: PositionCache,
}

impl Session {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Session {
            position,
            cache: PositionCache::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    /// Legal moves of the current position
    pub fn legal_moves(&mut self) -> Vec<Move> {
        self.cache.legal_moves(&self.position).to_vec()
    }

    pub fn in_check(&mut self) -> bool {
        self.cache.in_check(&self.position)
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.cache.is_checkmate(&self.position)
    }

    pub fn is_stalemate(&mut self) -> bool {
        self.cache.is_stalemate(&self.position)
    }

    /// Advance the live position. The cache is kept.
    pub fn make_move(&mut self, mv: Move) {
        debug_assert!(self.position.is_legal(mv), "illegal move {mv}");
        self.position.make_move(mv);
    }

    /// Replace the live position, keeping the cache.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn cache_mut(&mut self) -> &mut PositionCache {
        &mut self.cache
    }

    /// The live position and the cache, borrowed together.
    pub fn parts_mut(&mut self) -> (&Position, &mut PositionCache) {
        (&self.position, &mut self.cache)
    }
}
