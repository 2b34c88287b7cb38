use super::*;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to build a board from its text form
pub fn board(text: &str) -> Board {
    text.parse().expect("test board should parse")
}

/// Helper function to shorten move construction
pub fn mv(row: usize, col: usize) -> Move {
    Move::new(row, col)
}

/// Play random legal moves from the opening until neither side can move.
///
/// Returns every position reached together with the side to move there.
pub fn random_game(seed: u64) -> Vec<(Board, Color)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut to_move = Color::Black;
    let mut history = vec![(board, to_move)];

    while !board.is_terminal() {
        let moves = board.legal_moves(to_move);
        if let Some(&choice) = moves.choose(&mut rng) {
            board.apply_move(choice, to_move);
        }
        to_move = to_move.opposite();
        history.push((board, to_move));
    }

    history
}

// ==================== TEST MODULES ====================

mod board_text;
