use std::io;

use crate::agent::player::FinalScore;
use crate::game_repr::{Board, Color, FlipSequence, Move};

pub mod text_renderer;

pub use text_renderer::TextRenderer;

/// Trait for presenting an Othello game.
/// This abstraction lets the same session drive different front-ends (terminal, tests, etc.)
pub trait Renderer {
    /// Draw the current board
    ///
    /// # Arguments
    /// * `board` - The current board
    /// * `to_move` - Color to move, `None` once the game is over
    /// * `hints` - Legal moves of a human mover with their flip counts
    fn draw_position(&mut self, board: &Board, to_move: Option<Color>, hints: &[(Move, u32)]) -> io::Result<()>;

    /// Present the discs turned by a move, in the order they were flipped.
    ///
    /// Any pacing between flips happens here. The session stays busy until the
    /// front-end returns from this call and completes the move.
    fn draw_flips(&mut self, flips: &FlipSequence) -> io::Result<()>;

    /// Announce that `color` had no legal move
    fn draw_pass(&mut self, color: Color) -> io::Result<()>;

    /// Draw the final board and the result
    fn draw_game_end(&mut self, board: &Board, score: &FinalScore) -> io::Result<()>;
}
