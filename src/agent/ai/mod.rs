// AI Agent - Greedy and Minimax opponents
//
// Basic picks the biggest capture (corners first among equals).
// Advanced runs a fixed-depth minimax with alpha-beta pruning over a
// weighted evaluation of corners, mobility, disc count and danger squares.
//
// Both are deterministic given the board, except for Basic's random
// tie-break, which draws from an injected generator.

mod ai_player;
pub mod evaluation;
pub mod greedy;
pub mod search;

#[cfg(test)]
mod tests;

pub use ai_player::{choose_move, AIPlayer, Difficulty};

// Re-export useful types
pub use search::{SearchResult, SEARCH_DEPTH};
