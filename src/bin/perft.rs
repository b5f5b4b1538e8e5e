//! Perft with per-move breakdown.
//!
//! Usage: `perft <depth> [fen...]`. The FEN may be split across several
//! arguments; the standard starting position is used when it is omitted.

use std::env;
use std::process;
use std::time::Instant;

use chess_core::board::Position;

fn main() {
    let args: Vec<String> = env::args().collect();
    let Some(depth_arg) = args.get(1) else {
        eprintln!("usage: perft <depth> [fen...]");
        process::exit(2);
    };
    let depth: u32 = match depth_arg.parse() {
        Ok(depth) => depth,
        Err(_) => {
            eprintln!("invalid depth '{depth_arg}'");
            process::exit(2);
        }
    };

    let position = if args.len() > 2 {
        match Position::from_fen(&args[2..].join(" ")) {
            Ok(position) => position,
            Err(err) => {
                eprintln!("invalid FEN: {err}");
                process::exit(1);
            }
        }
    } else {
        Position::new()
    };

    let start = Instant::now();
    let divide = position.perft_divide(depth);
    let mut total: u64 = 0;
    for (mv, nodes) in &divide {
        println!("{mv}: {nodes}");
        total += *nodes;
    }
    if depth == 0 {
        total = 1;
    }
    println!();
    println!("Nodes searched: {total}");
    println!("Time: {:?}", start.elapsed());
}
