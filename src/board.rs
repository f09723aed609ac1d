use std::sync::Arc;

use crate::core::direction::Direction;
use crate::core::square::Square;

/// The 8×8 board with a precomputed neighbour table.
///
/// Built once and shared read-only (`Arc<Board>`) by every position. `neighbor` is a
/// single table lookup: `None` marks the board edge in that direction.
#[derive(Clone, Debug)]
pub struct Board {
    squares: Vec<Square>,
    neighbors: Vec<[Option<Square>; 8]>,
}

impl Board {
    pub fn new() -> Self {
        let squares: Vec<Square> = Square::all().collect();
        let mut neighbors = vec![[None; 8]; squares.len()];

        for sq in &squares {
            for dir in Direction::ALL {
                let (df, dr) = dir.delta();
                neighbors[sq.index()][dir.index()] =
                    Square::checked(sq.file() as i32 + df, sq.rank() as i32 + dr);
            }
        }

        Self { squares, neighbors }
    }

    /// A fresh board behind an `Arc`, ready to hand to positions.
    pub fn shared() -> Arc<Board> {
        Arc::new(Self::new())
    }

    #[inline]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    #[inline]
    pub fn neighbor(&self, sq: Square, dir: Direction) -> Option<Square> {
        self.neighbors[sq.index()][dir.index()]
    }

    /// Squares strictly beyond `from` in `dir`, nearest first, up to the edge.
    pub fn ray(&self, from: Square, dir: Direction) -> Ray<'_> {
        Ray {
            board: self,
            cur: from,
            dir,
        }
    }

    /// Squares a pawn may stand on (ranks 2..=8).
    pub fn pawn_squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.squares.iter().copied().filter(|sq| sq.rank() >= 2)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the squares of a ray; see [`Board::ray`].
pub struct Ray<'a> {
    board: &'a Board,
    cur: Square,
    dir: Direction,
}

impl Iterator for Ray<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let nxt = self.board.neighbor(self.cur, self.dir)?;
        self.cur = nxt;
        Some(nxt)
    }
}
