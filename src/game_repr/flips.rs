use smallvec::SmallVec;

use super::*;

/// Captured discs along one direction, nearest first. A run holds at most
/// six discs on an 8x8 board.
pub type FlipRun = SmallVec<[Move; 6]>;

/// The discs a prospective move captures, grouped by scan direction.
///
/// Only directions whose run is closed by an own disc are kept, and they are
/// kept in [`Direction::ALL`] order. A bundle is computed for a single move
/// attempt and then applied or dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipBundle {
    runs: SmallVec<[(Direction, FlipRun); 8]>,
}

impl FlipBundle {
    pub fn compute(board: &Board, mv: Move, color: Color) -> Self {
        let mut runs = SmallVec::new();

        for dir in Direction::ALL {
            let len = board.run_length(mv, dir, color) as usize;
            if len == 0 {
                continue;
            }

            let mut run = FlipRun::new();
            let mut cursor = mv;
            for _ in 0..len {
                // run_length already proved these squares are on the board
                cursor = match cursor.step(dir) {
                    Some(sq) => sq,
                    None => break,
                };
                run.push(cursor);
            }
            runs.push((dir, run));
        }

        Self { runs }
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Total number of captured discs
    pub fn total(&self) -> usize {
        self.runs.iter().map(|(_, run)| run.len()).sum()
    }

    pub fn runs(&self) -> impl Iterator<Item = (Direction, &[Move])> {
        self.runs.iter().map(|(dir, run)| (*dir, run.as_slice()))
    }

    /// Direction by direction, near to far inside each direction
    pub fn flatten(&self) -> Vec<Move> {
        self.runs
            .iter()
            .flat_map(|(_, run)| run.iter().copied())
            .collect()
    }
}

/// Result of applying a move: where the disc went, who placed it, and the
/// captured discs in the order a presentation layer should animate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipSequence {
    pub origin: Move,
    pub color: Color,
    pub flips: Vec<Move>,
}

impl FlipSequence {
    pub fn len(&self) -> usize {
        self.flips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flips.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.flips.iter()
    }
}

impl Board {
    /// Place a disc for `color` at `mv` and flip every captured disc.
    ///
    /// The caller must have checked legality; placing onto an occupied cell
    /// panics.
    pub fn apply_move(&mut self, mv: Move, color: Color) -> FlipSequence {
        assert!(
            self.is_empty_at(mv),
            "apply_move onto occupied cell {mv}"
        );

        let bundle = FlipBundle::compute(self, mv, color);
        debug_assert!(!bundle.is_empty(), "apply_move with no captures at {mv}");

        let disc = color.to_cell();
        self.set(mv, disc);
        let flips = bundle.flatten();
        for &sq in &flips {
            self.set(sq, disc);
        }

        FlipSequence {
            origin: mv,
            color,
            flips,
        }
    }

    /// Copy of this board with `mv` played
    pub fn with_move(&self, mv: Move, color: Color) -> Board {
        let mut next = *self;
        next.apply_move(mv, color);
        next
    }
}
