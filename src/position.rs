//! Board squares as (file, rank) pairs with the geometric relations the
//! rules engine is built on.

use std::fmt;

use crate::file::File;
use crate::rank::Rank;

/// A square on the chess board.
///
/// A `Position` is always in bounds by construction; arithmetic that would
/// leave the board ([`Position::offset`]) yields `None` instead.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    file: File,
    rank: Rank,
}

impl Position {
    /// Create a position from a file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Position {
        Position { file, rank }
    }

    /// Parse an algebraic notation string (e.g. "e4") into a position.
    pub fn from_algebraic(s: &str) -> Option<Position> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        if !bytes[0].is_ascii_lowercase() || !bytes[1].is_ascii_digit() {
            return None;
        }
        let file = File::from_index(bytes[0] as i8 - b'a' as i8)?;
        let rank = Rank::from_index(bytes[1] as i8 - b'1' as i8)?;
        Some(Position::new(file, rank))
    }

    /// Return the file of this position.
    #[inline]
    pub const fn file(self) -> File {
        self.file
    }

    /// Return the rank of this position.
    #[inline]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Shift by `(file_delta, rank_delta)`, returning `None` when the result
    /// leaves the board.
    #[inline]
    pub const fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Position> {
        match (self.file.offset(file_delta), self.rank.offset(rank_delta)) {
            (Some(file), Some(rank)) => Some(Position { file, rank }),
            _ => None,
        }
    }

    /// Return `true` if both positions share a file (column).
    #[inline]
    pub const fn same_file(self, other: Position) -> bool {
        self.file.index() == other.file.index()
    }

    /// Return `true` if both positions share a rank (row).
    #[inline]
    pub const fn same_rank(self, other: Position) -> bool {
        self.rank.index() == other.rank.index()
    }

    /// Return `true` if both positions share a main diagonal (file + rank constant).
    #[inline]
    pub const fn same_main_diagonal(self, other: Position) -> bool {
        self.file.index() + self.rank.index() == other.file.index() + other.rank.index()
    }

    /// Return `true` if both positions share an anti-diagonal (file − rank constant).
    #[inline]
    pub const fn same_anti_diagonal(self, other: Position) -> bool {
        self.file.index() as i8 - self.rank.index() as i8
            == other.file.index() as i8 - other.rank.index() as i8
    }

    /// Iterate over all 64 positions, rank-major from a1 to h8.
    pub fn all() -> impl Iterator<Item = Position> {
        Rank::ALL
            .into_iter()
            .flat_map(|rank| File::ALL.into_iter().map(move |file| Position::new(file, rank)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self)
    }
}
