use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{InvalidMove, Reason};
use crate::ko::KoHistory;
use crate::moves::Move;
use crate::player::{Player, PlayerHandle};
use crate::stone::Stone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Active,
    GameOver,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Active => write!(f, "active"),
            Stage::GameOver => write!(f, "game_over"),
        }
    }
}

/// Read-only view of a match for presentation and transport layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub dim: usize,
    pub board: Vec<Stone>,
    pub turn: Stone,
    pub stage: Stage,
    pub black_score: usize,
    pub white_score: usize,
    pub last_move: Option<Move>,
}

/// Rules state machine for one match.
///
/// State only changes through [`GameEngine::do_move`], and a rejected
/// move changes nothing. Cloning yields an independent copy of the board
/// and ko history for lookahead; only the player handles are shared.
///
/// The engine is not synchronized. Callers serialize access per match.
#[derive(Clone)]
pub struct GameEngine<P = PlayerHandle> {
    player1: P,
    player2: P,
    board: Board,
    ko: KoHistory,
    last_moves: ArrayVec<Move, 2>,
    turn_is_player1: bool,
}

impl<P: Player> GameEngine<P> {
    /// Start a match on an empty `dim` x `dim` board with `player1` to move.
    pub fn new(player1: P, player2: P, dim: usize) -> Self {
        Self::with_board(player1, player2, Board::new(dim))
    }

    /// Start from a set-up position with `player1` to move.
    pub fn with_board(player1: P, player2: P, board: Board) -> Self {
        Self::with_position(player1, player2, board, true)
    }

    pub fn with_position(player1: P, player2: P, board: Board, turn_is_player1: bool) -> Self {
        GameEngine {
            player1,
            player2,
            board,
            ko: KoHistory::new(),
            last_moves: ArrayVec::new(),
            turn_is_player1,
        }
    }

    // -- Accessors --

    pub fn players(&self) -> (&P, &P) {
        (&self.player1, &self.player2)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ko_history(&self) -> &KoHistory {
        &self.ko
    }

    /// The player expected to move next.
    pub fn turn(&self) -> &P {
        if self.turn_is_player1 {
            &self.player1
        } else {
            &self.player2
        }
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_moves.last().copied()
    }

    pub fn score(&self, stone: Stone) -> usize {
        self.board.score(stone)
    }

    // -- Move validation --

    /// Every legal placement for the player to move, followed by a pass.
    pub fn valid_moves(&self) -> Vec<Move> {
        let stone = self.turn().stone();
        let mut moves: Vec<Move> = (0..self.board.len())
            .map(|index| Move::place(stone, index))
            .filter(|mv| self.is_valid_move(mv))
            .collect();
        moves.push(Move::pass(stone));
        moves
    }

    pub fn is_valid_move(&self, mv: &Move) -> bool {
        self.check_move(mv).is_ok()
    }

    /// Like [`GameEngine::is_valid_move`], with the reason on rejection.
    pub fn check_move(&self, mv: &Move) -> Result<(), InvalidMove> {
        self.resolve(mv).map(|_| ())
    }

    /// Validate `mv` and compute the position it leads to. Passes are
    /// always accepted and leave the position alone (`None`).
    fn resolve(&self, mv: &Move) -> Result<Option<Board>, InvalidMove> {
        let (stone, index) = match *mv {
            Move::Pass { .. } => return Ok(None),
            Move::Place { stone, index } => (stone, index),
        };
        let reject = |reason| -> Result<Option<Board>, InvalidMove> {
            Err(InvalidMove::new(*mv, reason))
        };

        if !self.board.is_field(index) {
            return reject(Reason::NotOnBoard);
        }
        if !self.board.is_empty(index) {
            return reject(Reason::Overwrite);
        }
        if stone != self.turn().stone() {
            return reject(Reason::OutOfTurn);
        }

        let mut next = self.board.clone();
        next.play(index, stone);
        if self.ko.contains(&next) {
            return reject(Reason::KoViolation);
        }

        Ok(Some(next))
    }

    // -- Game actions --

    /// Apply `mv`. On error nothing about the match changes.
    pub fn do_move(&mut self, mv: Move) -> Result<(), InvalidMove> {
        let next = match self.resolve(&mv) {
            Ok(next) => next,
            Err(err) => {
                tracing::debug!(reason = %err.reason(), "rejected move {mv}");
                return Err(err);
            }
        };

        if let Some(board) = next {
            self.ko.record(board.clone());
            self.board = board;
        }
        self.record_last_move(mv);
        self.turn_is_player1 = !self.turn_is_player1;
        tracing::trace!("accepted move {mv}");

        if self.is_gameover() {
            tracing::debug!(
                black = self.score(Stone::Black),
                white = self.score(Stone::White),
                "game over after two passes"
            );
        }
        Ok(())
    }

    fn record_last_move(&mut self, mv: Move) {
        if self.last_moves.is_full() {
            self.last_moves.remove(0);
        }
        self.last_moves.push(mv);
    }

    // -- Termination --

    /// True once the two most recent moves were both passes.
    pub fn is_gameover(&self) -> bool {
        self.last_moves.is_full() && self.last_moves.iter().all(Move::is_pass)
    }

    pub fn stage(&self) -> Stage {
        if self.is_gameover() {
            Stage::GameOver
        } else {
            Stage::Active
        }
    }

    /// The higher-scoring player once the game is over. `None` while the
    /// game is still running or when the scores are tied.
    pub fn winner(&self) -> Option<&P> {
        if !self.is_gameover() {
            return None;
        }
        let first = self.score(self.player1.stone());
        let second = self.score(self.player2.stone());
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Some(&self.player1),
            std::cmp::Ordering::Less => Some(&self.player2),
            std::cmp::Ordering::Equal => None,
        }
    }

    // -- Serialization --

    pub fn game_state(&self) -> GameState {
        GameState {
            dim: self.board.dim(),
            board: self.board.cells().to_vec(),
            turn: self.turn().stone(),
            stage: self.stage(),
            black_score: self.score(Stone::Black),
            white_score: self.score(Stone::White),
            last_move: self.last_move(),
        }
    }
}

impl<P: Player> fmt::Debug for GameEngine<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEngine")
            .field("player1", &self.player1.stone())
            .field("player2", &self.player2.stone())
            .field("board", &self.board)
            .field("ko", &self.ko)
            .field("last_moves", &self.last_moves)
            .field("turn_is_player1", &self.turn_is_player1)
            .finish()
    }
}

impl<P: Player> fmt::Display for GameEngine<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {} - {} {}",
            Stone::Black.name(),
            self.score(Stone::Black),
            self.score(Stone::White),
            Stone::White.name()
        )?;
        write!(f, "{}", self.board)
    }
}
