//! Square type and coordinate helpers.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board.
///
/// Files and ranks are both zero based: file 0 is the a-file and rank 0 is
/// white's back rank. The fields are private so a `Square` is always on the
/// board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    pub const A1: Square = Square { file: 0, rank: 0 };
    pub const E1: Square = Square { file: 4, rank: 0 };
    pub const H1: Square = Square { file: 7, rank: 0 };
    pub const A8: Square = Square { file: 0, rank: 7 };
    pub const E8: Square = Square { file: 4, rank: 7 };
    pub const H8: Square = Square { file: 7, rank: 7 };

    /// Create a square with bounds checking
    #[inline]
    #[must_use]
    pub const fn new(file: usize, rank: usize) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Create a square from an index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        Square::new(idx % 8, idx / 8)
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.file as usize
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.rank as usize
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// Shift the square by a file and rank offset.
    ///
    /// Returns `None` when the result would fall off the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, file_delta: isize, rank_delta: isize) -> Option<Self> {
        let file = self.file as isize + file_delta;
        let rank = self.rank as isize + rank_delta;
        if file < 0 || rank < 0 {
            return None;
        }
        Square::new(file as usize, rank as usize)
    }

    /// Chebyshev (king-move) distance between two squares
    #[inline]
    #[must_use]
    pub fn distance(self, other: Square) -> usize {
        let df = self.file.abs_diff(other.file);
        let dr = self.rank.abs_diff(other.rank);
        df.max(dr) as usize
    }

    /// Iterate over all 64 squares, a1 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file + b'a') as char, self.rank + 1)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index().cmp(&other.index())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    /// Build a square from a `(file, rank)` pair.
    fn try_from((file, rank): (usize, usize)) -> Result<Self, Self::Error> {
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        Ok(Square {
            file: file as u8,
            rank: rank as u8,
        })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = match bytes[0] {
            b @ b'a'..=b'h' => (b - b'a') as usize,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b @ b'1'..=b'8' => (b - b'1') as usize,
            _ => return Err(invalid()),
        };
        Square::new(file, rank).ok_or_else(invalid)
    }
}
