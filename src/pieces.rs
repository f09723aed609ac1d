use serde::{Deserialize, Serialize};

use crate::core::square::Square;

/// Side to move. White owns the pawns, Black the queen.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::White, Side::Black];

    #[inline]
    pub fn other(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }
}

/// Game-theoretic value of a position, from the point of view of the side to move.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Win,
    Draw,
    Lose,
}

/// Rank stored for a file with no pawn.
const EMPTY: u8 = 0;

/// White's pawns, at most one per file.
///
/// Stored as one rank per file (`0` = no pawn), so the whole set is `Copy` and every
/// position owns an independent snapshot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pawns {
    ranks: [u8; 8],
}

impl Pawns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_squares(squares: impl IntoIterator<Item = Square>) -> Self {
        let mut pawns = Self::new();
        for sq in squares {
            pawns.set(sq);
        }
        pawns
    }

    /// Put a pawn on `sq`, evicting any pawn already on that file.
    #[inline]
    pub fn set(&mut self, sq: Square) {
        assert!(sq.rank() >= 2, "pawn on {sq:?}: pawns never stand on rank 1");
        self.ranks[sq.file() as usize - 1] = sq.rank();
    }

    #[inline]
    pub fn remove_file(&mut self, file: u8) {
        self.ranks[file as usize - 1] = EMPTY;
    }

    /// Remove the pawn on `sq`, if there is exactly one there. Returns whether one was removed.
    #[inline]
    pub fn remove_if_occupied_at(&mut self, sq: Square) -> bool {
        if self.occupies(sq) {
            self.remove_file(sq.file());
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn occupies(&self, sq: Square) -> bool {
        self.ranks[sq.file() as usize - 1] == sq.rank()
    }

    /// True iff some pawn guards `sq`, i.e. stands one file aside and one rank below.
    pub fn attacks(&self, sq: Square) -> bool {
        if sq.rank() == 1 {
            return false;
        }
        let below = sq.rank() - 1;
        let left = sq.file() > 1 && self.ranks[sq.file() as usize - 2] == below;
        let right = sq.file() < 8 && self.ranks[sq.file() as usize] == below;
        left || right
    }

    #[inline]
    pub fn pawn_on_file(&self, file: u8) -> Option<Square> {
        match self.ranks[file as usize - 1] {
            EMPTY => None,
            rank => Some(Square::new(file, rank)),
        }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.ranks.iter().filter(|&&r| r != EMPTY).count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    #[inline]
    pub fn promoted_count(&self) -> usize {
        self.ranks.iter().filter(|&&r| r == 8).count()
    }

    /// The promoted pawn when exactly one exists.
    pub fn promoted_pawn(&self) -> Option<Square> {
        if self.promoted_count() != 1 {
            return None;
        }
        self.iter().find(|sq| sq.rank() == 8)
    }

    /// Pawn squares, a-file first.
    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        (1..=8u8).filter_map(move |file| self.pawn_on_file(file))
    }

    /// Per-file ranks with `-1` for an empty file, a-file first.
    pub fn encoded_ranks(&self) -> [i8; 8] {
        let mut out = [-1i8; 8];
        for (slot, &r) in out.iter_mut().zip(self.ranks.iter()) {
            if r != EMPTY {
                *slot = r as i8;
            }
        }
        out
    }

    /// Sum of the ranks of all pawns.
    pub fn rank_sum(&self) -> u32 {
        self.ranks.iter().map(|&r| r as u32).sum()
    }

    pub fn mirrored(&self) -> Self {
        let mut ranks = self.ranks;
        ranks.reverse();
        Self { ranks }
    }
}
