//! The move selector interface and the tie helpers selectors share.

use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::Rng;

use super::session::Session;
use crate::board::Move;

/// Something that chooses a move for the side to move.
pub trait MoveSelector {
    /// Display name, e.g. `"TreeSearch"` or a preference code string
    fn name(&self) -> &str;

    /// Pick a legal move in the session's current position, or `None` when
    /// the side to move has no legal moves.
    ///
    /// Implementations may fill the session cache but must not advance the
    /// session.
    fn pick_move(&mut self, session: &mut Session) -> Option<Move>;
}

impl<T: MoveSelector + ?Sized> MoveSelector for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn pick_move(&mut self, session: &mut Session) -> Option<Move> {
        (**self).pick_move(session)
    }
}

/// All items whose key is the largest, in their original order.
pub fn maximal_elements<T, K, F>(items: &[T], key: F) -> Vec<T>
where
    T: Copy,
    K: Ord,
    F: FnMut(T) -> K,
{
    extreme_elements(items, key, Ordering::Greater)
}

/// All items whose key is the smallest, in their original order.
pub fn minimal_elements<T, K, F>(items: &[T], key: F) -> Vec<T>
where
    T: Copy,
    K: Ord,
    F: FnMut(T) -> K,
{
    extreme_elements(items, key, Ordering::Less)
}

fn extreme_elements<T, K, F>(items: &[T], mut key: F, better: Ordering) -> Vec<T>
where
    T: Copy,
    K: Ord,
    F: FnMut(T) -> K,
{
    let mut best = Vec::new();
    let mut best_key: Option<K> = None;
    for &item in items {
        let k = key(item);
        let ordering = best_key.as_ref().map(|current| k.cmp(current));
        match ordering {
            Some(Ordering::Equal) => best.push(item),
            Some(o) if o != better => {}
            _ => {
                best.clear();
                best.push(item);
                best_key = Some(k);
            }
        }
    }
    best
}

/// A uniformly chosen element, `None` for an empty slice.
pub fn random_choice<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    items.choose(rng)
}
