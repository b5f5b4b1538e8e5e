//! Benchmarks for move generation and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use chess_core::board::Position;
use chess_core::engine::{MoveSelector, PositionCache, SearchParams, Session, TreeSearch};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let startpos = Position::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| startpos.perft(black_box(depth)))
        });
    }

    let kiwipete = Position::from_fen_str(KIWIPETE);
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let positions = [
        ("startpos", Position::new()),
        (
            "middlegame",
            Position::from_fen_str("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4"),
        ),
        ("kiwipete", Position::from_fen_str(KIWIPETE)),
    ];
    for (name, position) in &positions {
        group.bench_with_input(BenchmarkId::new("legal", name), position, |b, position| {
            b.iter(|| black_box(position.legal_moves()))
        });
        group.bench_with_input(BenchmarkId::new("valid", name), position, |b, position| {
            b.iter(|| black_box(position.valid_moves(position.side_to_move())))
        });
    }

    group.bench_function("consistency/kiwipete", |b| {
        let position = Position::from_fen_str(KIWIPETE);
        b.iter(|| black_box(position.check_consistency()))
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    for depth in [1, 2, 3] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut search =
                    TreeSearch::with_params_and_rng(SearchParams { depth }, StdRng::seed_from_u64(1));
                let mut session = Session::default();
                search.pick_move(&mut session)
            })
        });
    }

    let tactical = Position::from_fen_str("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 0 4");
    group.bench_function("evaluate/tactical", |b| {
        b.iter(|| {
            let mut search = TreeSearch::with_params_and_rng(SearchParams { depth: 2 }, StdRng::seed_from_u64(1));
            let mut cache = PositionCache::new();
            search.evaluate(&mut cache, &tactical, 2, i32::MIN, i32::MAX)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_search);
criterion_main!(benches);
