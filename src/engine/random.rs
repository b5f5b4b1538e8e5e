use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::selector::{random_choice, MoveSelector};
use super::session::Session;
use crate::board::Move;

/// Plays a uniformly random legal move.
#[derive(Debug)]
pub struct RandomMover<R: Rng = StdRng> {
    rng: R,
}

impl RandomMover<StdRng> {
    /// Seeded from the operating system's entropy source
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for RandomMover<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomMover<R> {
    pub fn with_rng(rng: R) -> Self {
        RandomMover { rng }
    }
}

impl<R: Rng> MoveSelector for RandomMover<R> {
    fn name(&self) -> &str {
        "Random"
    }

    fn pick_move(&mut self, session: &mut Session) -> Option<Move> {
        let moves = session.legal_moves();
        random_choice(&moves, &mut self.rng).copied()
    }
}
