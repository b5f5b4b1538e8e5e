//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation node counts
//! - `castling.rs` - Castling validity and rights bookkeeping
//! - `consistency.rs` - Generators against brute-force validation
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

mod edge_cases;
