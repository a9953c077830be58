//! Rules engine for the game of Go on a square board: stone placement,
//! chain and capture resolution, area scoring, a positional ko rule and
//! the turn/pass state machine that ends a match.

pub mod board;
pub mod chain;
pub mod engine;
pub mod error;
pub mod ko;
pub mod moves;
pub mod player;
pub mod stone;

pub use board::Board;
pub use engine::{GameEngine, GameState, Stage};
pub use error::{InvalidMove, Reason};
pub use ko::KoHistory;
pub use moves::Move;
pub use player::{Player, PlayerHandle};
pub use stone::Stone;
