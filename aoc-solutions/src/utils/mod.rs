//! Shared loading and parsing helpers for the puzzle solutions

pub mod grid;
pub mod input;
