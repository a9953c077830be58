use serde::{Deserialize, Serialize};
use std::fmt;

use crate::stone::Stone;

/// A single move, tagged with the stone color of the player making it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Move {
    Place { stone: Stone, index: usize },
    Pass { stone: Stone },
}

impl Move {
    pub fn place(stone: Stone, index: usize) -> Self {
        Move::Place { stone, index }
    }

    pub fn pass(stone: Stone) -> Self {
        Move::Pass { stone }
    }

    /// A placement addressed by row and column on a `dim` x `dim` board.
    /// Returns `None` when the coordinates fall outside the board.
    pub fn place_at(stone: Stone, row: usize, col: usize, dim: usize) -> Option<Self> {
        (row < dim && col < dim).then(|| Move::place(stone, row * dim + col))
    }

    pub fn stone(&self) -> Stone {
        match *self {
            Move::Place { stone, .. } | Move::Pass { stone } => stone,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match *self {
            Move::Place { index, .. } => Some(index),
            Move::Pass { .. } => None,
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass { .. })
    }

    pub fn is_place(&self) -> bool {
        matches!(self, Move::Place { .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place { stone, index } => write!(f, "{stone} {index}"),
            Move::Pass { stone } => write!(f, "{stone} pass"),
        }
    }
}
