// Basic strategy: greedy capture with corner preference
//
// Keep only the moves that flip the most discs. If one of those is a corner,
// take the first such corner in enumeration order; otherwise pick one of them
// at random. A corner never beats a move that captures strictly more.

use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

use crate::game_repr::{Board, Color, Move};

/// Moves that capture the maximum number of discs, in enumeration order,
/// together with that maximum.
pub fn max_flip_moves(board: &Board, color: Color) -> (SmallVec<[Move; 8]>, u32) {
    let mut best = SmallVec::new();
    let mut max_flips = 0;

    for mv in board.legal_moves(color) {
        let flips = board.count_flips(mv, color);
        if flips > max_flips {
            max_flips = flips;
            best.clear();
            best.push(mv);
        } else if flips == max_flips {
            best.push(mv);
        }
    }

    (best, max_flips)
}

/// Pick a move for `color`, or `None` when it has no legal move.
///
/// `rng` is only consulted for the random tie-break, so a seeded generator
/// makes the choice reproducible.
pub fn choose_move_basic<R: Rng + ?Sized>(board: &Board, color: Color, rng: &mut R) -> Option<Move> {
    let (best, max_flips) = max_flip_moves(board, color);

    if let Some(&corner) = best.iter().find(|mv| mv.is_corner()) {
        log::debug!("basic: corner {corner} among {} moves flipping {max_flips}", best.len());
        return Some(corner);
    }

    let choice = best.choose(rng).copied();
    if let Some(mv) = choice {
        log::debug!("basic: {mv} from {} moves flipping {max_flips}", best.len());
    }
    choice
}
