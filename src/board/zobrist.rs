//! Zobrist keys used to hash positions.

use once_cell::sync::Lazy;
use rand::prelude::*;

pub(crate) struct ZobristKeys {
    // piece_keys[piece][color][square]
    pub(crate) piece_keys: [[[u64; 64]; 2]; 6],
    pub(crate) black_to_move_key: u64,
    // castling_keys[color][0 = short, 1 = long]
    pub(crate) castling_keys: [[u64; 2]; 2],
    pub(crate) en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        // fixed seed so keys are identical across runs
        let mut rng = StdRng::seed_from_u64(1234567890_u64);
        let mut piece_keys = [[[0; 64]; 2]; 6];
        for key in piece_keys.iter_mut().flatten().flatten() {
            *key = rng.gen();
        }
        let black_to_move_key = rng.gen();
        let mut castling_keys = [[0; 2]; 2];
        for key in castling_keys.iter_mut().flatten() {
            *key = rng.gen();
        }
        let mut en_passant_keys = [0; 8];
        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);
