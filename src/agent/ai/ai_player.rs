//! AIPlayer - the computer opponent
//!
//! Two strengths are available:
//! - **Basic**: greedy capture with corner preference and a random tie-break
//! - **Advanced**: depth-4 minimax with alpha-beta pruning over a positional evaluation
//!
//! The difficulty is not pinned for the game. The orchestrator pushes the currently
//! configured difficulty into the player at the start of every computer turn.
//!
//! # Examples
//!
//! ```
//! use othello_engine::agent::{AIPlayer, Difficulty, Player};
//! use othello_engine::game_repr::{Board, Color};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut ai = AIPlayer::with_rng(StdRng::seed_from_u64(7), Difficulty::Advanced);
//! let board = Board::new();
//! let mv = ai.get_move(&board, Color::Black).unwrap();
//! assert!(board.is_legal_move(mv, Color::Black));
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::agent::player::{FinalScore, Player};
use crate::game_repr::{Board, Color, Move};
use super::greedy::choose_move_basic;
use super::search::{search, SEARCH_DEPTH};

/// Computer strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Most captures now, corners first among equals, random otherwise
    #[default]
    Basic,
    /// Fixed-depth minimax with alpha-beta pruning
    Advanced,
}

impl Difficulty {
    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Basic, Difficulty::Advanced]
    }

    /// Get a display name for this difficulty level
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Basic => "Basic",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// Pick a move for `color` with the given strength.
///
/// Returns `None` only when `color` has no legal move. Advanced never touches
/// `rng`.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Move> {
    match difficulty {
        Difficulty::Basic => choose_move_basic(board, color, rng),
        Difficulty::Advanced => search(board, color, SEARCH_DEPTH).best_move,
    }
}

/// Computer player with an injectable random source.
pub struct AIPlayer<R: Rng = StdRng> {
    difficulty: Difficulty,
    rng: R,
    name: String,
}

impl AIPlayer<StdRng> {
    /// AI seeded from the operating system
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(StdRng::from_entropy(), difficulty)
    }
}

impl<R: Rng> AIPlayer<R> {
    /// AI drawing its tie-breaks from `rng`. Pass a seeded generator for
    /// reproducible games.
    pub fn with_rng(rng: R, difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            rng,
            name: format!("AI ({})", difficulty.name()),
        }
    }

    /// Get the current difficulty level
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl<R: Rng> Player for AIPlayer<R> {
    fn get_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        let mv = choose_move(board, color, self.difficulty, &mut self.rng);
        log::debug!(
            "[{}] {} plays {}",
            self.name,
            color,
            mv.map_or_else(|| "nothing".to_string(), |m| m.to_string())
        );
        mv
    }

    fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        // Update name if it follows the auto-generated pattern
        if self.name.starts_with("AI (") {
            self.name = format!("AI ({})", difficulty.name());
        }
    }

    fn game_ended(&mut self, score: &FinalScore) {
        log::debug!("[{}] game over: {}", self.name, score);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
