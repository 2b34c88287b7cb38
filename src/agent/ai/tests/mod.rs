use crate::game_repr::{Board, Color, Move};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Helper function to build a board from its text form
pub fn board(text: &str) -> Board {
    text.parse().expect("test board should parse")
}

pub fn mv(row: usize, col: usize) -> Move {
    Move::new(row, col)
}

/// Position after `plies` random moves from the opening (passes count as
/// plies), together with the side to move.
pub fn random_position(seed: u64, plies: usize) -> (Board, Color) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut to_move = Color::Black;

    for _ in 0..plies {
        if board.is_terminal() {
            break;
        }
        if let Some(&choice) = board.legal_moves(to_move).choose(&mut rng) {
            board.apply_move(choice, to_move);
        }
        to_move = to_move.opposite();
    }

    (board, to_move)
}
