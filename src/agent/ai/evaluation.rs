// Static position evaluation
// Returns a score from the point of view of `me` (positive = good for `me`)

use crate::game_repr::{Board, Color, Move};

// Feature weights
pub const CORNER_WEIGHT: i32 = 120;
pub const MOBILITY_WEIGHT: i32 = 8;
pub const DISC_WEIGHT: i32 = 1;
pub const DANGER_WEIGHT: i32 = 12;

pub const CORNERS: [Move; 4] = [
    Move::new(0, 0),
    Move::new(0, 7),
    Move::new(7, 0),
    Move::new(7, 7),
];

/// X-squares (diagonal to a corner) followed by C-squares (orthogonal to a
/// corner). Taking one while the corner is open usually hands the corner over.
pub const DANGER_SQUARES: [Move; 12] = [
    Move::new(1, 1),
    Move::new(1, 6),
    Move::new(6, 1),
    Move::new(6, 6),
    Move::new(0, 1),
    Move::new(1, 0),
    Move::new(0, 6),
    Move::new(1, 7),
    Move::new(6, 0),
    Move::new(7, 1),
    Move::new(6, 7),
    Move::new(7, 6),
];

/// Raw (unweighted) feature values of a position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Features {
    /// +1 per corner held by me, -1 per corner held by the opponent
    pub corners: i32,
    /// My legal move count minus the opponent's
    pub mobility: i32,
    /// My disc count minus the opponent's
    pub discs: i32,
    /// -1 per danger square held by me, +1 per danger square held by the opponent
    pub danger: i32,
}

impl Features {
    pub fn score(&self) -> i32 {
        self.corners * CORNER_WEIGHT
            + self.mobility * MOBILITY_WEIGHT
            + self.discs * DISC_WEIGHT
            + self.danger * DANGER_WEIGHT
    }
}

/// +1 for `me`, -1 for the opponent, 0 for empty
fn ownership(board: &Board, sq: Move, me: Color) -> i32 {
    match board.cell(sq).color() {
        Some(c) if c == me => 1,
        Some(_) => -1,
        None => 0,
    }
}

pub fn corner_score(board: &Board, me: Color) -> i32 {
    CORNERS.iter().map(|&sq| ownership(board, sq, me)).sum()
}

pub fn mobility_score(board: &Board, me: Color) -> i32 {
    board.mobility(me) as i32 - board.mobility(me.opposite()) as i32
}

pub fn disc_differential(board: &Board, me: Color) -> i32 {
    board.count(me) as i32 - board.count(me.opposite()) as i32
}

pub fn danger_score(board: &Board, me: Color) -> i32 {
    -DANGER_SQUARES
        .iter()
        .map(|&sq| ownership(board, sq, me))
        .sum::<i32>()
}

pub fn features(board: &Board, me: Color) -> Features {
    Features {
        corners: corner_score(board, me),
        mobility: mobility_score(board, me),
        discs: disc_differential(board, me),
        danger: danger_score(board, me),
    }
}

/// Weighted sum of corners, mobility, disc difference and danger squares.
pub fn evaluate(board: &Board, me: Color) -> i32 {
    features(board, me).score()
}
