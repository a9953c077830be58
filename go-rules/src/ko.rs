use std::collections::HashMap;

use crate::board::Board;

/// Every position produced by an accepted placement, kept by value.
///
/// A placement may not recreate any of these positions, which makes the
/// rule stricter than a single-position ko (a positional superko).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KoHistory {
    positions: HashMap<Board, usize>,
    recorded: usize,
}

impl KoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, board: Board) {
        *self.positions.entry(board).or_default() += 1;
        self.recorded += 1;
    }

    pub fn contains(&self, board: &Board) -> bool {
        self.positions.contains_key(board)
    }

    /// How many times `board` has been recorded.
    pub fn occurrences(&self, board: &Board) -> usize {
        self.positions.get(board).copied().unwrap_or(0)
    }

    /// Total number of recorded snapshots, repeats included.
    pub fn len(&self) -> usize {
        self.recorded
    }

    pub fn is_empty(&self) -> bool {
        self.recorded == 0
    }
}
