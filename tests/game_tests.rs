//! Whole-game tests: clocks, draw rules and selector matches.

use rand::rngs::StdRng;
use rand::SeedableRng;

use chess_core::board::Color;
use chess_core::engine::{MoveSelector, PreferenceChain, RandomMover, SearchParams, TreeSearch};
use chess_core::game::{Game, GameStatus};

fn play(game: &mut Game, moves: &[&str]) {
    for text in moves {
        game.make_move_text(text)
            .unwrap_or_else(|err| panic!("{text}: {err}"));
    }
}

#[test]
fn fools_mate() {
    let mut game = Game::new();
    play(&mut game, &["f2f3", "e7e5", "g2g4"]);
    assert_eq!(game.status(), GameStatus::InProgress);
    play(&mut game, &["d8h4"]);
    assert_eq!(game.status(), GameStatus::BlackWonByCheckmate);
    assert_eq!(game.status().winner(), Some(Color::Black));
    assert_eq!(game.fullmove_number(), 3);
}

#[test]
fn threefold_repetition() {
    let mut game = Game::new();
    let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];
    play(&mut game, &shuffle);
    play(&mut game, &shuffle[..3]);
    assert_eq!(game.status(), GameStatus::InProgress);
    play(&mut game, &shuffle[3..]);
    assert_eq!(game.status(), GameStatus::DrawnByRepetition);
}

#[test]
fn fifty_move_rule() {
    let mut game = Game::from_fen("8/8/8/4k3/8/8/8/R3K3 w - - 99 80").unwrap();
    assert_eq!(game.status(), GameStatus::InProgress);
    play(&mut game, &["a1a2"]);
    assert_eq!(game.halfmove_clock(), 100);
    assert_eq!(game.status(), GameStatus::DrawnByFiftyMoveRule);

    let game = Game::from_fen("8/8/8/4k3/8/8/8/R3K3 w - - 100 80").unwrap();
    assert_eq!(game.status(), GameStatus::DrawnByFiftyMoveRule);
}

#[test]
fn halfmove_resets_on_pawn_move() {
    let mut game = Game::from_fen("8/8/8/4k3/8/8/4P3/R3K3 w - - 99 1").unwrap();
    play(&mut game, &["e2e4"]);
    assert_eq!(game.halfmove_clock(), 0);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn stalemate() {
    let mut game = Game::from_fen("7k/8/6K1/8/8/8/8/5Q2 w - - 0 1").unwrap();
    play(&mut game, &["f1f7"]);
    assert_eq!(game.status(), GameStatus::DrawnByStalemate);
    assert_eq!(game.status().winner(), None);
}

#[test]
fn insufficient_material_after_capture() {
    let mut game = Game::from_fen("4k3/8/8/8/8/8/3r4/4K3 w - - 0 1").unwrap();
    play(&mut game, &["e1d2"]);
    assert_eq!(game.status(), GameStatus::DrawnByInsufficientMaterial);
}

#[test]
fn random_game_finishes() {
    let mut white = RandomMover::with_rng(StdRng::seed_from_u64(1));
    let mut black = RandomMover::with_rng(StdRng::seed_from_u64(2));
    let mut game = Game::new();
    let winner = game.run(&mut white, &mut black);
    assert!(game.status().is_over());
    assert_eq!(winner, game.status().winner());

    // the recorded moves replay to the final position
    let mut replay = Game::new();
    for &mv in game.moves() {
        assert!(replay.position().is_legal(mv));
        replay.make_move(mv);
    }
    assert_eq!(replay.position(), game.position());
    assert_eq!(replay.status(), game.status());
}

#[test]
fn search_beats_random_from_mating_position() {
    let mut white = TreeSearch::with_params_and_rng(SearchParams { depth: 1 }, StdRng::seed_from_u64(4));
    let mut black = RandomMover::with_rng(StdRng::seed_from_u64(5));
    let mut game = Game::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
    assert_eq!(game.run(&mut white, &mut black), Some(Color::White));
    assert_eq!(game.moves().len(), 1);
}

#[test]
fn boxed_preference_chains_play_a_game() {
    let mut white: Box<dyn MoveSelector> =
        Box::new(PreferenceChain::from_codes_with_rng("Ma1CapChk", StdRng::seed_from_u64(6)).unwrap());
    let mut black: Box<dyn MoveSelector> =
        Box::new(PreferenceChain::from_codes_with_rng("Ma1GrdSwm", StdRng::seed_from_u64(7)).unwrap());
    let mut game = Game::new();
    let winner = game.run(white.as_mut(), black.as_mut());
    assert!(game.status().is_over());
    assert_eq!(winner, game.status().winner());
}
