use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::pieces::{Side, Status};
use crate::position::{Position, PositionCode};

/// Number of pawn-count buckets per side (0..=8 pawns).
pub const PAWN_BUCKETS: usize = 9;

/// Transposition table of solved positions.
///
/// Partitioned by side to move and pawn count; within a bucket, positions are keyed by
/// their canonical [`PositionCode`].
#[derive(Debug, Clone)]
pub struct Store {
    buckets: [[FxHashMap<PositionCode, Status>; PAWN_BUCKETS]; 2],
}

impl Store {
    pub fn new() -> Self {
        Self {
            buckets: std::array::from_fn(|_| std::array::from_fn(|_| FxHashMap::default())),
        }
    }

    #[inline]
    fn bucket(&self, side: Side, pawns: usize) -> &FxHashMap<PositionCode, Status> {
        &self.buckets[side.index()][pawns]
    }

    #[inline]
    pub fn get(&self, pos: &Position) -> Option<Status> {
        self.bucket(pos.side(), pos.pawns().count())
            .get(&pos.code())
            .copied()
    }

    /// Record a verdict.
    ///
    /// Panics if the position is already stored: the evaluator only saves after a miss, so
    /// a second save means the table and the search disagree.
    pub fn save(&mut self, pos: &Position, status: Status) {
        let bucket = &mut self.buckets[pos.side().index()][pos.pawns().count()];
        let code = pos.code();
        if let Some(prev) = bucket.get(&code) {
            panic!("position already in store: {pos} (had {prev:?}, saving {status:?})");
        }
        bucket.insert(code, status);
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().flatten().map(|b| b.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn bucket_len(&self, side: Side, pawns: usize) -> usize {
        self.bucket(side, pawns).len()
    }

    /// Codes in one bucket holding the given verdict.
    pub fn codes_with(
        &self,
        side: Side,
        pawns: usize,
        status: Status,
    ) -> impl Iterator<Item = PositionCode> + '_ {
        self.bucket(side, pawns)
            .iter()
            .filter(move |&(_, &s)| s == status)
            .map(|(&code, _)| code)
    }

    pub fn stats(&self) -> StoreStats {
        let mut buckets = Vec::new();
        for side in Side::BOTH {
            for pawns in 0..PAWN_BUCKETS {
                let bucket = self.bucket(side, pawns);
                if bucket.is_empty() {
                    continue;
                }
                let mut counts = BucketStats {
                    side,
                    pawns,
                    win: 0,
                    draw: 0,
                    lose: 0,
                };
                for status in bucket.values() {
                    match status {
                        Status::Win => counts.win += 1,
                        Status::Draw => counts.draw += 1,
                        Status::Lose => counts.lose += 1,
                    }
                }
                buckets.push(counts);
            }
        }
        StoreStats {
            total: self.len(),
            buckets,
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Verdict counts for one `(side, pawn count)` bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BucketStats {
    pub side: Side,
    pub pawns: usize,
    pub win: usize,
    pub draw: usize,
    pub lose: usize,
}

impl BucketStats {
    pub fn total(&self) -> usize {
        self.win + self.draw + self.lose
    }
}

/// Per-bucket verdict counts; empty buckets are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub total: usize,
    pub buckets: Vec<BucketStats>,
}

impl StoreStats {
    pub fn bucket(&self, side: Side, pawns: usize) -> Option<&BucketStats> {
        self.buckets
            .iter()
            .find(|b| b.side == side && b.pawns == pawns)
    }
}
