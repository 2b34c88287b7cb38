use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::{Cell, Color, Move, BOARD_SIZE};

/*
 * BOARD STATE ONLY.
 * Legality lives in rules.rs, mutation through a move in flips.rs.
 */

/// 8x8 grid of cells.
///
/// `Board` is `Copy` (64 bytes), so search code works on independent values
/// and never shares a board between sibling branches.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard opening: White on (3,3) and (4,4), Black on (3,4) and (4,3)
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.cells[3][3] = Cell::White;
        board.cells[3][4] = Cell::Black;
        board.cells[4][3] = Cell::Black;
        board.cells[4][4] = Cell::White;
        board
    }

    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn cell(&self, mv: Move) -> Cell {
        self.cells[mv.row()][mv.col()]
    }

    /// Cell lookup by raw coordinates. Panics when out of range.
    pub fn at(&self, row: usize, col: usize) -> Cell {
        self.cell(Move::new(row, col))
    }

    /// Overwrite a single cell, bypassing the rules. Used to set up positions.
    pub fn set(&mut self, mv: Move, cell: Cell) {
        self.cells[mv.row()][mv.col()] = cell;
    }

    pub fn is_empty_at(&self, mv: Move) -> bool {
        self.cell(mv).is_empty()
    }

    /// All 64 squares in row-major order
    pub fn squares() -> impl Iterator<Item = Move> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Move::new(row, col)))
    }

    pub fn count(&self, color: Color) -> u32 {
        let target = color.to_cell();
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == target)
            .count() as u32
    }

    /// (black, white)
    pub fn counts(&self) -> (u32, u32) {
        (self.count(Color::Black), self.count(Color::White))
    }

    pub fn empty_count(&self) -> u32 {
        self.cells.iter().flatten().filter(|cell| cell.is_empty()).count() as u32
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),
    #[error("row {row} has {len} cells, expected 8")]
    RowLength { row: usize, len: usize },
    #[error("unknown cell character {ch:?} in row {row}")]
    UnknownCell { row: usize, ch: char },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Eight non-blank lines of `B`, `W` and `.`; spaces inside a line are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if rows.len() != BOARD_SIZE {
            return Err(ParseBoardError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|ch| Cell::from_char(ch).ok_or(ParseBoardError::UnknownCell { row, ch }))
                .collect::<Result<Vec<_>, _>>()?;
            if cells.len() != BOARD_SIZE {
                return Err(ParseBoardError::RowLength {
                    row,
                    len: cells.len(),
                });
            }
            for (col, cell) in cells.into_iter().enumerate() {
                board.cells[row][col] = cell;
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(Cell::to_char).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board")?;
        fmt::Display::fmt(self, f)
    }
}
