//! Whole-table analyses built on the evaluator: exhaustive sweeps and retrograde draw layers.

pub mod draws;
pub mod sweep;
