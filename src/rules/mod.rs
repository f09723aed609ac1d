//! Move generation for both sides, forwards ([`movegen`]) and backwards ([`retro`]).

pub mod movegen;
pub mod retro;
