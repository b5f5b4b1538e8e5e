//! Move selection on top of the rules in [`crate::board`].
//!
//! A [`Session`] owns the live position together with a [`PositionCache`]
//! of derived facts. Move selectors implement [`MoveSelector`] and pick a
//! move for the side to move in a session:
//! - [`TreeSearch`] - material minimax with alpha-beta pruning
//! - [`RandomMover`] - uniform choice among the legal moves
//! - [`PreferenceChain`] - successive heuristic filters, then a random pick

mod cache;
mod params;
mod preference;
mod random;
mod search;
mod selector;
mod session;

pub use cache::{PositionCache, PositionInfo};
pub use params::SearchParams;
pub use preference::{Preference, PreferenceChain, PreferenceParseError};
pub use random::RandomMover;
pub use search::{TreeSearch, BLACK_MATED, MATE_THRESHOLD, WHITE_MATED};
pub use selector::{maximal_elements, minimal_elements, random_choice, MoveSelector};
pub use session::Session;
