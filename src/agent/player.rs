//! Player trait and associated types for Othello seats.
//!
//! This module provides the abstraction the [`Orchestrator`](crate::orchestrator::Orchestrator)
//! uses for a computer-controlled seat. Human moves do not go through this trait: they
//! arrive as coordinates through `Orchestrator::activate`, and a player's chosen move is
//! submitted through the same path.
//!
//! # Synchronous Design
//!
//! `get_move()` is synchronous and must not sleep or do I/O. Any "thinking" delay a
//! front-end wants to show belongs around the call, never inside it.

use std::fmt;

use crate::agent::ai::Difficulty;
use crate::game_repr::{Board, Color, Move};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    BlackWins,
    WhiteWins,
    Draw,
}

impl GameResult {
    /// Create a GameResult from the winning color
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::Black => GameResult::BlackWins,
            Color::White => GameResult::WhiteWins,
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::BlackWins => Some(Color::Black),
            GameResult::WhiteWins => Some(Color::White),
            GameResult::Draw => None,
        }
    }
}

/// Final disc counts and verdict, reported once the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalScore {
    pub black: u32,
    pub white: u32,
    pub result: GameResult,
}

impl FinalScore {
    /// More discs wins; equal counts are a draw.
    pub fn from_board(board: &Board) -> Self {
        let (black, white) = board.counts();
        let result = if black > white {
            GameResult::BlackWins
        } else if white > black {
            GameResult::WhiteWins
        } else {
            GameResult::Draw
        };
        Self {
            black,
            white,
            result,
        }
    }
}

impl fmt::Display for FinalScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = match self.result.winner() {
            Some(color) => format!("{color} wins"),
            None => "Draw".to_string(),
        };
        write!(f, "Black {} : White {} ({verdict})", self.black, self.white)
    }
}

/// Trait for entities that can pick a move for a seat.
///
/// Only `get_move()` must be implemented.
///
/// ## `get_move()`
/// - **Returns `None`**: the player has nothing to play
/// - **Returns `Some(Move)`**: a move that must be legal for `color` on `board`
///
/// ## `set_difficulty()`
/// - Called by the orchestrator at the start of every computer turn with the
///   difficulty configured at that moment, so a settings change applies from the
///   next turn on.
///
/// ## `game_ended()`
/// - Default: does nothing
pub trait Player {
    fn get_move(&mut self, board: &Board, color: Color) -> Option<Move>;

    fn set_difficulty(&mut self, _difficulty: Difficulty) {
        // Default: fixed-strength players ignore this
    }

    fn game_ended(&mut self, _score: &FinalScore) {
        // Default: do nothing
    }

    fn name(&self) -> &str {
        "Player"
    }
}
