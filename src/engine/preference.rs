//! Heuristic move filters and the selector that chains them.
//!
//! Each [`Preference`] scores the allowed moves and keeps only the best
//! scoring ones. A [`PreferenceChain`] applies its preferences in order and
//! picks at random among whatever survives.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::cache::PositionCache;
use super::selector::{maximal_elements, minimal_elements, random_choice, MoveSelector};
use super::session::Session;
use crate::board::{Move, Piece, Position, Square};

/// A single move filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Preference {
    /// Give checkmate when possible
    MateInOne,
    /// Avoid moves after which the opponent can mate at once
    PreventMateInOne,
    /// Avoid stalemating the opponent or leaving insufficient material
    PreventDraw,
    Check,
    Capture,
    /// Capture pieces on squares the enemy does not attack
    CaptureHanging,
    /// Capture where own attackers outnumber enemy defenders
    SmartCapture,
    /// Castle, otherwise keep castling rights
    Castle,
    First,
    Last,
    /// Maximize the opponent's legal replies
    Extend,
    /// Minimize the opponent's legal replies
    Reduce,
    /// Capture the most valuable piece
    Greedy,
    Generous,
    /// Move towards the enemy king
    Swarm,
    /// Move towards the own king
    Huddle,
    /// Longest moves
    Sniper,
    /// Shortest moves
    Sloth,
    /// Maximize the squares attacked by own pieces
    Conqueror,
    /// Minimize the squares attacked by enemy pieces
    Constrictor,
    /// Land on squares defended by own pieces
    Reinforced,
    /// Land on squares the enemy does not attack
    Outpost,
    /// Land on squares attacked by both sides
    Gambit,
    /// Land on squares attacked by neither side
    Explore,
    /// Move pieces that are under attack
    Coward,
    /// Move pieces that are not under attack
    Hero,
}

impl Preference {
    pub const ALL: [Preference; 26] = [
        Preference::MateInOne,
        Preference::PreventMateInOne,
        Preference::PreventDraw,
        Preference::Check,
        Preference::Capture,
        Preference::CaptureHanging,
        Preference::SmartCapture,
        Preference::Castle,
        Preference::First,
        Preference::Last,
        Preference::Extend,
        Preference::Reduce,
        Preference::Greedy,
        Preference::Generous,
        Preference::Swarm,
        Preference::Huddle,
        Preference::Sniper,
        Preference::Sloth,
        Preference::Conqueror,
        Preference::Constrictor,
        Preference::Reinforced,
        Preference::Outpost,
        Preference::Gambit,
        Preference::Explore,
        Preference::Coward,
        Preference::Hero,
    ];

    /// Three-letter code used in chain names
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Preference::MateInOne => "Ma1",
            Preference::PreventMateInOne => "PM1",
            Preference::PreventDraw => "PDr",
            Preference::Check => "Chk",
            Preference::Capture => "Cap",
            Preference::CaptureHanging => "CHa",
            Preference::SmartCapture => "SCp",
            Preference::Castle => "Cst",
            Preference::First => "Fst",
            Preference::Last => "Lst",
            Preference::Extend => "Ext",
            Preference::Reduce => "Red",
            Preference::Greedy => "Grd",
            Preference::Generous => "Gen",
            Preference::Swarm => "Swm",
            Preference::Huddle => "Hud",
            Preference::Sniper => "Sni",
            Preference::Sloth => "Slo",
            Preference::Conqueror => "Cnq",
            Preference::Constrictor => "Cns",
            Preference::Reinforced => "Rei",
            Preference::Outpost => "Out",
            Preference::Gambit => "Gam",
            Preference::Explore => "Exp",
            Preference::Coward => "Cow",
            Preference::Hero => "Hro",
        }
    }

    /// The subset of `allowed` this preference likes best, in the original
    /// order. Never empty unless `allowed` is.
    pub fn filter(self, position: &Position, cache: &mut PositionCache, allowed: &[Move]) -> Vec<Move> {
        let me = position.side_to_move();
        let enemy = !me;
        let board = position.board();
        match self {
            Preference::MateInOne => maximal_elements(allowed, |mv| cache.is_checkmate(&position.after(mv))),
            Preference::PreventMateInOne => maximal_elements(allowed, |mv| {
                let next = position.after(mv);
                let replies = cache.legal_moves(&next).to_vec();
                !replies
                    .into_iter()
                    .any(|reply| cache.is_checkmate(&next.after(reply)))
            }),
            Preference::PreventDraw => minimal_elements(allowed, |mv| {
                let next = position.after(mv);
                cache.is_stalemate(&next) || next.board().has_insufficient_material()
            }),
            Preference::Check => maximal_elements(allowed, |mv| position.after(mv).in_check()),
            Preference::Capture => maximal_elements(allowed, |mv| position.is_capture(mv)),
            Preference::CaptureHanging => maximal_elements(allowed, |mv| {
                position.is_capture(mv) && !board.is_attacked_by(enemy, mv.to())
            }),
            Preference::SmartCapture => maximal_elements(allowed, |mv| {
                if !position.is_capture(mv) {
                    return 0;
                }
                board.count_attacks_by(me, mv.to()) as i32 - board.count_attacks_by(enemy, mv.to()) as i32
            }),
            Preference::Castle => maximal_elements(allowed, |mv| {
                if position.is_castle(mv) {
                    return 2;
                }
                let next = position.after(mv);
                let loses_short = position.can_short_castle(me) && !next.can_short_castle(me);
                let loses_long = position.can_long_castle(me) && !next.can_long_castle(me);
                if loses_short || loses_long {
                    0
                } else {
                    1
                }
            }),
            Preference::First => allowed.first().copied().into_iter().collect(),
            Preference::Last => allowed.last().copied().into_iter().collect(),
            Preference::Extend => maximal_elements(allowed, |mv| cache.legal_moves(&position.after(mv)).len()),
            Preference::Reduce => minimal_elements(allowed, |mv| cache.legal_moves(&position.after(mv)).len()),
            Preference::Greedy => minimal_elements(allowed, |mv| target_rank(position, mv.to())),
            Preference::Generous => maximal_elements(allowed, |mv| target_rank(position, mv.to())),
            Preference::Swarm => {
                let king = position.enemy_king_location();
                minimal_elements(allowed, |mv| approach(king, mv))
            }
            Preference::Huddle => {
                let king = position.king_location();
                minimal_elements(allowed, |mv| approach(king, mv))
            }
            Preference::Sniper => maximal_elements(allowed, |mv| mv.distance()),
            Preference::Sloth => minimal_elements(allowed, |mv| mv.distance()),
            Preference::Conqueror => {
                maximal_elements(allowed, |mv| position.after(mv).board().attacked_square_count(me))
            }
            Preference::Constrictor => {
                minimal_elements(allowed, |mv| position.after(mv).board().attacked_square_count(enemy))
            }
            Preference::Reinforced => {
                maximal_elements(allowed, |mv| position.after(mv).board().is_attacked_by(me, mv.to()))
            }
            Preference::Outpost => minimal_elements(allowed, |mv| board.is_attacked_by(enemy, mv.to())),
            Preference::Gambit => maximal_elements(allowed, |mv| {
                board.is_attacked_by(me, mv.to()) && board.is_attacked_by(enemy, mv.to())
            }),
            Preference::Explore => minimal_elements(allowed, |mv| {
                board.is_attacked_by(me, mv.to()) || board.is_attacked_by(enemy, mv.to())
            }),
            Preference::Coward => maximal_elements(allowed, |mv| board.is_attacked_by(enemy, mv.from())),
            Preference::Hero => minimal_elements(allowed, |mv| board.is_attacked_by(enemy, mv.from())),
        }
    }
}

/// King 1 through pawn 6, empty squares 7
fn target_rank(position: &Position, square: Square) -> usize {
    match position.board().piece_at(square) {
        None => 7,
        Some((_, piece)) => match piece {
            Piece::King => 1,
            Piece::Queen => 2,
            Piece::Rook => 3,
            Piece::Bishop => 4,
            Piece::Knight => 5,
            Piece::Pawn => 6,
        },
    }
}

/// Change in distance to `king`; negative when the move gets closer.
fn approach(king: Square, mv: Move) -> isize {
    king.distance(mv.to()) as isize - king.distance(mv.from()) as isize
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error parsing a preference or a chain of preference codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceParseError {
    UnknownCode { code: String },
}

impl fmt::Display for PreferenceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferenceParseError::UnknownCode { code } => {
                write!(f, "Unknown preference code '{code}'")
            }
        }
    }
}

impl std::error::Error for PreferenceParseError {}

impl FromStr for Preference {
    type Err = PreferenceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preference::ALL
            .into_iter()
            .find(|p| p.code() == s)
            .ok_or_else(|| PreferenceParseError::UnknownCode { code: s.to_string() })
    }
}

/// Applies preferences in order, then picks at random among the survivors.
pub struct PreferenceChain<R: Rng = StdRng> {
    preferences: Vec<Preference>,
    name: String,
    rng: R,
}

impl PreferenceChain<StdRng> {
    /// Seeded from the operating system's entropy source
    #[must_use]
    pub fn new(preferences: Vec<Preference>) -> Self {
        Self::with_rng(preferences, StdRng::from_entropy())
    }

    /// Parse concatenated three-letter codes such as `"Ma1PM1Cap"`.
    pub fn from_codes(codes: &str) -> Result<Self, PreferenceParseError> {
        Ok(Self::new(parse_codes(codes)?))
    }
}

impl<R: Rng> PreferenceChain<R> {
    pub fn with_rng(preferences: Vec<Preference>, rng: R) -> Self {
        let name = preferences.iter().map(|p| p.code()).collect();
        PreferenceChain { preferences, name, rng }
    }

    pub fn from_codes_with_rng(codes: &str, rng: R) -> Result<Self, PreferenceParseError> {
        Ok(Self::with_rng(parse_codes(codes)?, rng))
    }

    #[must_use]
    pub fn preferences(&self) -> &[Preference] {
        &self.preferences
    }
}

fn parse_codes(codes: &str) -> Result<Vec<Preference>, PreferenceParseError> {
    let chars: Vec<char> = codes.chars().collect();
    chars
        .chunks(3)
        .map(|chunk| chunk.iter().collect::<String>().parse())
        .collect()
}

impl<R: Rng> MoveSelector for PreferenceChain<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn pick_move(&mut self, session: &mut Session) -> Option<Move> {
        let (position, cache) = session.parts_mut();
        let mut allowed = cache.legal_moves(position).to_vec();
        for preference in &self.preferences {
            if allowed.len() <= 1 {
                break;
            }
            allowed = preference.filter(position, cache, &allowed);
        }
        match allowed.as_slice() {
            [only] => Some(*only),
            many => random_choice(many, &mut self.rng).copied(),
        }
    }
}
