use std::fmt;

use smallvec::SmallVec;

pub const BOARD_SIZE: usize = 8;

/// Legal move list. Mid-game positions rarely offer more than 20 moves.
pub type MoveList = SmallVec<[Move; 32]>;

/// A disc placement at (row, col), row 0 at the top.
///
/// Coordinates outside the board are a caller bug, so construction panics
/// instead of returning an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    row: u8,
    col: u8,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Move {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE, "move coordinate out of range");
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Row-major square index, 0..64
    pub fn index(&self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }

    pub fn is_corner(&self) -> bool {
        let edge = (BOARD_SIZE - 1) as u8;
        (self.row == 0 || self.row == edge) && (self.col == 0 || self.col == edge)
    }

    /// Neighbouring square one step in `dir`, `None` past the edge
    pub fn step(&self, dir: Direction) -> Option<Move> {
        let (dr, dc) = dir.delta();
        let r = self.row as i8 + dr;
        let c = self.col as i8 + dc;
        if (0..BOARD_SIZE as i8).contains(&r) && (0..BOARD_SIZE as i8).contains(&c) {
            Some(Move::new(r as usize, c as usize))
        } else {
            None
        }
    }

    /// Parse `d3` style notation: column letter a-h, row number 1-8.
    pub fn from_algebraic(s: &str) -> Option<Move> {
        let mut chars = s.trim().chars();
        let file = chars.next()?.to_ascii_lowercase();
        let rank = chars.next()?.to_digit(10)? as usize;
        if chars.next().is_some() || !('a'..='h').contains(&file) || !(1..=8).contains(&rank) {
            return None;
        }
        Some(Move::new(rank - 1, (file as u8 - b'a') as usize))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

/// The eight scan directions. `ALL` fixes the order used for flip bundles,
/// so the flip sequence handed to the presentation is always the same for
/// the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// (row delta, col delta)
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::N => (-1, 0),
            Direction::NE => (-1, 1),
            Direction::E => (0, 1),
            Direction::SE => (1, 1),
            Direction::S => (1, 0),
            Direction::SW => (1, -1),
            Direction::W => (0, -1),
            Direction::NW => (-1, -1),
        }
    }
}
