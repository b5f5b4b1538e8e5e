//! Castling rights type.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use crate::board::error::FenError;

const CASTLE_WHITE_K: u8 = 1 << 0;
const CASTLE_WHITE_Q: u8 = 1 << 1;
const CASTLE_BLACK_K: u8 = 1 << 2;
const CASTLE_BLACK_Q: u8 = 1 << 3;

const ALL_CASTLING_RIGHTS: u8 = CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Castling rights represented as a bitmask.
///
/// Short castling is toward the h-file, long castling toward the a-file.
/// During play rights are only ever removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle short and long)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, short: bool) -> bool {
        self.0 & Self::bit_for(color, short) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, short: bool) {
        self.0 |= Self::bit_for(color, short);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, short: bool) {
        self.0 &= !Self::bit_for(color, short);
    }

    /// Remove both rights of one color
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, true);
        self.remove(color, false);
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if every right in `self` is also held by `other`
    #[inline]
    #[must_use]
    pub const fn is_subset_of(self, other: CastlingRights) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    const fn bit_for(color: Color, short: bool) -> u8 {
        match (color, short) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }
}

/// FEN castling field: `KQkq`, any subset in that order, or `-`.
impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (bit, c) in [
            (CASTLE_WHITE_K, 'K'),
            (CASTLE_WHITE_Q, 'Q'),
            (CASTLE_BLACK_K, 'k'),
            (CASTLE_BLACK_Q, 'q'),
        ] {
            if self.0 & bit != 0 {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for CastlingRights {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rights = CastlingRights::none();
        if s == "-" {
            return Ok(rights);
        }
        if s.is_empty() {
            return Err(FenError::MissingField { field: "castling" });
        }
        for c in s.chars() {
            match c {
                'K' => rights.set(Color::White, true),
                'Q' => rights.set(Color::White, false),
                'k' => rights.set(Color::Black, true),
                'q' => rights.set(Color::Black, false),
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }
        Ok(rights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_castling_set_and_remove() {
        let mut rights = CastlingRights::all();
        rights.remove(Color::White, true);
        assert!(!rights.has(Color::White, true));
        assert!(rights.has(Color::White, false));
        rights.remove_color(Color::Black);
        assert!(!rights.has(Color::Black, true));
        assert!(!rights.has(Color::Black, false));
        assert!(rights.is_subset_of(CastlingRights::all()));
        assert!(!CastlingRights::all().is_subset_of(rights));
    }

    #[test]
    fn test_castling_fen_text() {
        assert_eq!(CastlingRights::all().to_string(), "KQkq");
        assert_eq!(CastlingRights::none().to_string(), "-");
        let rights: CastlingRights = "qK".parse().unwrap();
        assert_eq!(rights.to_string(), "Kq");
        assert_eq!(
            "KX".parse::<CastlingRights>(),
            Err(FenError::InvalidCastling { char: 'X' })
        );
    }
}
