//! Plain-text front-end for terminals and logs.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use super::Renderer;
use crate::agent::player::FinalScore;
use crate::game_repr::{Board, Color, FlipSequence, Move, BOARD_SIZE};

/// Draws the board as ASCII art: columns `a`-`h`, rows `1`-`8`, `B`/`W` discs and
/// hint counts on the empty squares a human could play.
pub struct TextRenderer<W: Write> {
    out: W,
    flip_delay: Duration,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            flip_delay: Duration::ZERO,
        }
    }

    /// Pause this long before each flipped disc is reported
    pub fn with_flip_delay(mut self, delay: Duration) -> Self {
        self.flip_delay = delay;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_grid(&mut self, board: &Board, hints: &[(Move, u32)]) -> io::Result<()> {
        write!(self.out, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(self.out, " {}", (b'a' + col as u8) as char)?;
        }
        writeln!(self.out)?;

        for row in 0..BOARD_SIZE {
            write!(self.out, "{:>2}", row + 1)?;
            for col in 0..BOARD_SIZE {
                let mv = Move::new(row, col);
                let ch = match hints.iter().find(|(m, _)| *m == mv) {
                    Some(&(_, n)) => hint_char(n),
                    None => board.cell(mv).to_char(),
                };
                write!(self.out, " {}", ch)?;
            }
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn write_score(&mut self, board: &Board) -> io::Result<()> {
        let (black, white) = board.counts();
        write!(self.out, "Black {} : White {}", black, white)
    }
}

/// Flip count as a single character, `+` for ten or more
fn hint_char(flips: u32) -> char {
    char::from_digit(flips, 10).unwrap_or('+')
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn draw_position(&mut self, board: &Board, to_move: Option<Color>, hints: &[(Move, u32)]) -> io::Result<()> {
        writeln!(self.out)?;
        self.write_grid(board, hints)?;
        self.write_score(board)?;
        if let Some(color) = to_move {
            write!(self.out, "  ({} to move)", color)?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    fn draw_flips(&mut self, flips: &FlipSequence) -> io::Result<()> {
        write!(self.out, "{} plays {}:", flips.color, flips.origin)?;
        self.out.flush()?;

        for mv in flips.iter() {
            if !self.flip_delay.is_zero() {
                thread::sleep(self.flip_delay);
            }
            write!(self.out, " {}", mv)?;
            self.out.flush()?;
        }
        writeln!(self.out)
    }

    fn draw_pass(&mut self, color: Color) -> io::Result<()> {
        writeln!(self.out, "{} has no legal move and passes.", color)
    }

    fn draw_game_end(&mut self, board: &Board, score: &FinalScore) -> io::Result<()> {
        writeln!(self.out)?;
        self.write_grid(board, &[])?;
        writeln!(self.out, "Game over: {}", score)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::player::GameResult;

    fn render(f: impl FnOnce(&mut TextRenderer<Vec<u8>>) -> io::Result<()>) -> String {
        let mut renderer = TextRenderer::new(Vec::new());
        f(&mut renderer).expect("writing to a Vec cannot fail");
        String::from_utf8(renderer.into_inner()).expect("output is ASCII")
    }

    #[test]
    fn test_opening_grid() {
        let out = render(|r| r.draw_position(&Board::new(), Some(Color::Black), &[]));
        let lines: Vec<&str> = out.lines().skip(1).collect();

        assert_eq!(lines[0], "   a b c d e f g h");
        assert_eq!(lines[1], " 1 . . . . . . . .");
        assert_eq!(lines[4], " 4 . . . W B . . .");
        assert_eq!(lines[5], " 5 . . . B W . . .");
        assert_eq!(lines[8], " 8 . . . . . . . .");
        assert_eq!(lines[9], "Black 2 : White 2  (Black to move)");
    }

    #[test]
    fn test_hints_replace_empty_cells() {
        let hints = [(Move::new(2, 3), 1), (Move::new(5, 4), 12)];
        let out = render(|r| r.draw_position(&Board::new(), Some(Color::Black), &hints));

        assert!(out.contains(" 3 . . . 1 . . . ."));
        assert!(out.contains(" 6 . . . . + . . ."));
    }

    #[test]
    fn test_flips_listed_in_order() {
        let mut board = Board::new();
        let flips = board.apply_move(Move::new(2, 3), Color::Black);

        let out = render(|r| r.draw_flips(&flips));
        assert_eq!(out, "Black plays d3: d4\n");
    }

    #[test]
    fn test_pass_and_game_end() {
        let out = render(|r| r.draw_pass(Color::White));
        assert_eq!(out, "White has no legal move and passes.\n");

        let board = Board::new();
        let score = FinalScore::from_board(&board);
        assert_eq!(score.result, GameResult::Draw);

        let out = render(|r| r.draw_game_end(&board, &score));
        assert!(out.ends_with(&format!("Game over: {}\n", score)));
    }
}
