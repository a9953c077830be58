use std::fmt;

use crate::moves::Move;

/// Why a move was turned down. Diagnostic only: every rejection is the
/// same `InvalidMove` as far as the rules are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    NotOnBoard,
    Overwrite,
    OutOfTurn,
    KoViolation,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::NotOnBoard => write!(f, "not on board"),
            Reason::Overwrite => write!(f, "overwrite"),
            Reason::OutOfTurn => write!(f, "out of turn"),
            Reason::KoViolation => write!(f, "ko violation"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidMove {
    attempted: Move,
    reason: Reason,
}

impl InvalidMove {
    pub fn new(attempted: Move, reason: Reason) -> Self {
        InvalidMove { attempted, reason }
    }

    pub fn attempted(&self) -> Move {
        self.attempted
    }

    pub fn reason(&self) -> Reason {
        self.reason
    }
}

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid move {}: {}", self.attempted, self.reason)
    }
}

impl std::error::Error for InvalidMove {}
