use super::*;

impl Board {
    /// Length of the opposing run starting next to `mv` in `dir`.
    ///
    /// Returns 0 unless the run is at least one disc long and is closed by a
    /// disc of `color` inside the board.
    pub(crate) fn run_length(&self, mv: Move, dir: Direction, color: Color) -> u32 {
        let own = color.to_cell();
        let opponent = color.opposite().to_cell();

        let mut run = 0;
        let mut cursor = mv.step(dir);
        while let Some(sq) = cursor {
            let cell = self.cell(sq);
            if cell == opponent {
                run += 1;
                cursor = sq.step(dir);
            } else if cell == own {
                return run;
            } else {
                return 0;
            }
        }

        // ran off the board without meeting an own disc
        0
    }

    /// A move is legal on an empty cell that brackets at least one opposing
    /// disc in some direction.
    pub fn is_legal_move(&self, mv: Move, color: Color) -> bool {
        if !self.is_empty_at(mv) {
            return false;
        }
        Direction::ALL
            .iter()
            .any(|&dir| self.run_length(mv, dir, color) > 0)
    }

    /// Total discs `color` would capture by playing `mv`. Zero for an
    /// occupied cell or an illegal move.
    pub fn count_flips(&self, mv: Move, color: Color) -> u32 {
        if !self.is_empty_at(mv) {
            return 0;
        }
        Direction::ALL
            .iter()
            .map(|&dir| self.run_length(mv, dir, color))
            .sum()
    }

    /// Every legal move for `color` in row-major order.
    ///
    /// The order is part of the contract: the greedy player breaks corner ties
    /// by it and the search visits children in it.
    pub fn legal_moves(&self, color: Color) -> MoveList {
        Board::squares()
            .filter(|&mv| self.is_legal_move(mv, color))
            .collect()
    }

    pub fn has_any_legal_move(&self, color: Color) -> bool {
        Board::squares().any(|mv| self.is_legal_move(mv, color))
    }

    /// Number of legal moves available to `color`
    pub fn mobility(&self, color: Color) -> usize {
        Board::squares()
            .filter(|&mv| self.is_legal_move(mv, color))
            .count()
    }

    /// Neither side can move: the game is over.
    pub fn is_terminal(&self) -> bool {
        !self.has_any_legal_move(Color::Black) && !self.has_any_legal_move(Color::White)
    }
}
