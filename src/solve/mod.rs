//! Exact evaluation: the memoized minimax ([`evaluate`]) over a partitioned
//! transposition table ([`store`]).

pub mod evaluate;
pub mod store;
