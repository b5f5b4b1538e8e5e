//! Search tests to verify the selectors find sensible moves.

use rand::rngs::StdRng;
use rand::SeedableRng;

use chess_core::board::Position;
use chess_core::engine::{
    MoveSelector, PositionCache, PreferenceChain, RandomMover, SearchParams, Session, TreeSearch,
    BLACK_MATED,
};

fn pick(fen: &str, depth: u32, seed: u64) -> String {
    let position = Position::from_fen(fen).unwrap();
    let mut search = TreeSearch::with_params_and_rng(SearchParams { depth }, StdRng::seed_from_u64(seed));
    let mv = search.pick_move(&mut Session::new(position)).expect("Should find a move");
    mv.to_string()
}

/// Test that the engine finds a simple mate in 1
#[test]
fn finds_mate_in_one_back_rank() {
    assert_eq!(pick("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1", 2, 1), "e1e8");
}

/// Test that black finds mate as the minimizing side
#[test]
fn finds_mate_in_one_for_black() {
    assert_eq!(pick("r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1", 2, 1), "a8a1");
}

/// Test that the engine avoids giving away material
#[test]
fn avoids_hanging_queen() {
    for seed in 0..4 {
        assert_ne!(pick("4k3/8/2p5/8/8/8/8/3QK3 w - - 0 1", 1, seed), "d1d5");
    }
}

/// Test that the engine captures free material
#[test]
fn captures_free_piece() {
    assert_eq!(pick("4k3/8/8/8/8/1n6/8/3QK3 w - - 0 1", 1, 3), "d1b3");
}

/// Quicker mates score higher than slower ones
#[test]
fn mate_scores_shrink_with_distance() {
    let mut search = TreeSearch::with_params_and_rng(SearchParams { depth: 2 }, StdRng::seed_from_u64(0));
    let mut cache = PositionCache::new();
    let mated = Position::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - -").unwrap();
    assert_eq!(search.evaluate(&mut cache, &mated, 2, i32::MIN, i32::MAX), BLACK_MATED);
    let one_move_away = Position::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - -").unwrap();
    assert_eq!(search.evaluate(&mut cache, &one_move_away, 1, i32::MIN, i32::MAX), BLACK_MATED - 1);
}

/// Same seed, same choices
#[test]
fn seeded_selectors_are_deterministic() {
    let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";
    assert_eq!(pick(fen, 1, 42), pick(fen, 1, 42));

    let mut a = RandomMover::with_rng(StdRng::seed_from_u64(9));
    let mut b = RandomMover::with_rng(StdRng::seed_from_u64(9));
    let mut session_a = Session::default();
    let mut session_b = Session::default();
    for _ in 0..20 {
        let (Some(x), Some(y)) = (a.pick_move(&mut session_a), b.pick_move(&mut session_b)) else {
            break;
        };
        assert_eq!(x, y);
        session_a.make_move(x);
        session_b.make_move(y);
    }
}

/// Boxed selectors of different kinds behind one interface
#[test]
fn boxed_selectors_pick_legal_moves() {
    let mut selectors: Vec<Box<dyn MoveSelector>> = vec![
        Box::new(TreeSearch::with_params_and_rng(SearchParams { depth: 1 }, StdRng::seed_from_u64(1))),
        Box::new(RandomMover::with_rng(StdRng::seed_from_u64(2))),
        Box::new(PreferenceChain::from_codes_with_rng("CapChkSwm", StdRng::seed_from_u64(3)).unwrap()),
    ];
    let mut session = Session::default();
    for ply in 0..9 {
        let selector = &mut selectors[ply % 3];
        let mv = selector.pick_move(&mut session).expect("a legal move");
        assert!(session.position().is_legal(mv), "{} picked {mv}", selector.name());
        session.make_move(mv);
    }
}
