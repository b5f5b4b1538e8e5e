//! Edge case tests for special chess positions and moves.

use crate::board::{Color, Move, Piece, Position, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn test_stalemate_position() {
    let position = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(!position.is_checkmate());
    assert!(position.is_stalemate());
    assert!(position.legal_moves().is_empty());
}

#[test]
fn test_underpromotions_generated() {
    let position = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    let moves = position.legal_moves();
    for piece in [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight] {
        assert!(
            moves.contains(Move::with_promotion(sq("a7"), sq("a8"), Some(piece))),
            "{piece:?} promotion should be available"
        );
    }
    assert!(!moves.contains(Move::new(sq("a7"), sq("a8"))));

    let next = position.after(Move::with_promotion(sq("a7"), sq("a8"), Some(Piece::Knight)));
    assert!(next.board().has(sq("a8"), Color::White, Piece::Knight));
}

#[test]
fn test_promotion_to_king_or_pawn_is_invalid() {
    let position = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    assert!(!position.is_valid(Move::with_promotion(sq("a7"), sq("a8"), Some(Piece::King))));
    assert!(!position.is_valid(Move::with_promotion(sq("a7"), sq("a8"), Some(Piece::Pawn))));
}

#[test]
fn test_en_passant_only_for_side_to_move() {
    let fen = "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1";
    let position = Position::from_fen(fen).unwrap();
    let ep = Move::new(sq("e5"), sq("d6"));
    assert!(position.is_en_passant(ep));
    assert!(position.legal_moves().contains(ep));

    let next = position.after(ep);
    assert!(next.board().is_empty(sq("d5")));
    assert!(next.board().has(sq("d6"), Color::White, Piece::Pawn));

    // the right lapses after any other move
    let later = position.after(Move::new(sq("g1"), sq("f3"))).after(Move::new(sq("g8"), sq("f6")));
    assert!(!later.is_valid(ep));
}

#[test]
fn test_castling_blocked_by_check() {
    let position = Position::from_fen("r3k2r/8/8/8/4Q3/8/8/R3K2R b KQkq - 0 1").unwrap();
    let moves = position.legal_moves();
    assert!(!moves.iter().any(|&mv| position.is_castle(mv)));
}

#[test]
fn test_castling_through_attacked_square() {
    let position = Position::from_fen("r4rk1/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    let moves = position.legal_moves();
    assert!(moves.contains(Move::new(sq("e1"), sq("c1"))));
    assert!(!moves.contains(Move::new(sq("e1"), sq("g1"))));
}

#[test]
fn test_double_check_only_king_can_move() {
    let position = Position::from_fen("k7/8/8/4r3/1b6/8/R7/4K3 w - - 0 1").unwrap();
    let moves = position.legal_moves();
    assert!(!moves.is_empty());
    for mv in &moves {
        assert_eq!(mv.from(), sq("e1"), "only the king may move in double check");
    }
}

#[test]
fn test_checkmate_back_rank() {
    let position = Position::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
    let mate = Move::new(sq("a1"), sq("a8"));
    assert!(position.is_legal(mate));
    let next = position.after(mate);
    assert!(next.is_checkmate());
    assert!(next.is_checkmate_for(Color::Black));
    assert!(!next.is_checkmate_for(Color::White));
}

#[test]
fn test_pieces_never_capture_kings() {
    // white to move with the black king en prise
    let position = Position::from_fen("4k3/8/8/8/8/8/8/4R1K1 w - - 0 1").unwrap();
    assert!(!position.is_valid(Move::new(sq("e1"), sq("e8"))));
    assert!(position.is_in_check(Color::Black));
}

#[test]
fn test_insufficient_material() {
    for fen in [
        "8/8/8/4k3/8/8/8/4K3 w - -",
        "8/8/8/4k3/8/8/8/4KB2 w - -",
        "8/8/8/4k3/8/8/8/4KN2 w - -",
    ] {
        let position = Position::from_fen(fen).unwrap();
        assert!(position.board().has_insufficient_material(), "{fen}");
    }
    for fen in [
        "8/8/8/4k3/8/8/8/4KNN1 w - -",
        "8/8/8/2b1k3/8/8/8/4KB2 w - -",
        "8/8/8/4k3/8/8/4P3/4K3 w - -",
        "8/8/8/4k3/8/8/8/4KR2 w - -",
    ] {
        let position = Position::from_fen(fen).unwrap();
        assert!(!position.board().has_insufficient_material(), "{fen}");
    }
}

#[test]
fn test_position_from_str() {
    let position: Position = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        .parse()
        .unwrap();
    assert_eq!(position, Position::new());

    let result: Result<Position, _> = "invalid fen".parse();
    assert!(result.is_err());
}

#[test]
fn test_crowded_board_move_lists_grow() {
    let position =
        Position::from_fen("QQQQQQQQ/Q6Q/Q6Q/Q6Q/Q6Q/Q6Q/QQQQQQQQ/k6K w - -").unwrap();
    let moves = position.legal_moves();
    assert!(moves.len() > 256, "only {} moves", moves.len());
    assert_eq!(moves.len(), position.valid_moves(Color::White).len());
    assert_eq!(position.perft(1), moves.len() as u64);

    let position =
        Position::from_fen("QQQQQQQ1/Q6Q/Q6Q/Q6Q/3Q3Q/QQ5Q/ppQ3Q1/kpQ1QQ1K w - -").unwrap();
    assert!(!position.is_in_check(Color::Black));
    for &mv in &position.legal_moves() {
        assert!(position.is_legal(mv), "{mv}");
    }
}
