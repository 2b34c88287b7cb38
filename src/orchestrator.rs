//! Game session and turn management.
//!
//! This module contains the [`Orchestrator`] component, the single owner of a game in
//! progress. It manages:
//! - The board and whose turn it is ([`TurnState`])
//! - Move submission for humans ([`activate`](Orchestrator::activate)) and for the
//!   computer ([`play_computer_turn`](Orchestrator::play_computer_turn))
//! - Pass and end-of-game detection ([`complete_move`](Orchestrator::complete_move))
//! - Live configuration changes (play mode and difficulty)
//!
//! # Turn Flow
//!
//! ```text
//! AwaitingMove(p) --activate / play_computer_turn--> Resolving(p)
//!   Resolving(p) --complete_move--> AwaitingMove(opponent)
//!                                 | AwaitingMove(p)      (opponent passes)
//!                                 | Terminal(score)      (nobody can move)
//! ```
//!
//! Submitting a move applies it at once and returns the ordered [`FlipSequence`]. The
//! session then stays in `Resolving` until the front-end has finished presenting the
//! flips and calls `complete_move`. Every other command is refused in the meantime.
//!
//! Refused commands return a [`TurnError`] and leave the session untouched, so a
//! front-end that does not care why a click did nothing can simply ignore the error.

use thiserror::Error;

use crate::agent::ai::{AIPlayer, Difficulty};
use crate::agent::player::{FinalScore, Player};
use crate::config::{GameConfig, PlayMode};
use crate::game_repr::{Board, Color, FlipSequence, Move};

/// Where the session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for this color to submit a move. The color always has one.
    AwaitingMove(Color),

    /// This color's move has been applied and is being presented
    Resolving(Color),

    /// Neither side can move
    Terminal(FinalScore),
}

impl TurnState {
    /// Color that is moving or has just moved, `None` once the game is over
    pub fn color(&self) -> Option<Color> {
        match *self {
            TurnState::AwaitingMove(c) | TurnState::Resolving(c) => Some(c),
            TurnState::Terminal(_) => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnState::Terminal(_))
    }
}

/// Reason a command was refused. The session is unchanged whenever one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("a move is still being resolved")]
    Busy,
    #[error("the game is over")]
    GameOver,
    #[error("it is the computer's turn")]
    ComputerTurn,
    #[error("it is not the computer's turn")]
    NotComputerTurn,
    #[error("{0} is not a legal move")]
    IllegalMove(Move),
    #[error("no move is waiting to be completed")]
    NothingToResolve,
    #[error("the computer player returned no move")]
    NoMoveFromComputer,
}

/// Result of [`Orchestrator::complete_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnAdvance {
    /// State after the turn passed on
    pub state: TurnState,
    /// Color that had to pass, if any
    pub passed: Option<Color>,
}

/// Owns one game: the board, the turn state and the computer seat.
///
/// The computer seat is a boxed [`Player`], so tests and front-ends can plug in their
/// own opponent. Human moves never go through it.
pub struct Orchestrator {
    board: Board,
    state: TurnState,
    config: GameConfig,
    computer: Box<dyn Player>,
}

impl Orchestrator {
    /// New game from the initial position with the built-in AI as the computer seat.
    pub fn new(config: GameConfig) -> Self {
        Self::with_player(config, Box::new(AIPlayer::new(config.difficulty)))
    }

    /// New game from the initial position with a custom computer seat.
    pub fn with_player(config: GameConfig, computer: Box<dyn Player>) -> Self {
        Self::from_position(Board::new(), Color::Black, config, computer)
    }

    /// Resume from an arbitrary position.
    ///
    /// If `to_move` has no legal move the turn passes straight to the opponent, and a
    /// position where neither side can move starts out terminal.
    pub fn from_position(
        board: Board,
        to_move: Color,
        config: GameConfig,
        computer: Box<dyn Player>,
    ) -> Self {
        let (state, _) = settle(&board, to_move);
        log::debug!("Session created: {:?}, {:?}", state, config);

        Self {
            board,
            state,
            config,
            computer,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Color to move (or resolving its move), `None` once the game is over
    pub fn current_player(&self) -> Option<Color> {
        self.state.color()
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn final_score(&self) -> Option<FinalScore> {
        match self.state {
            TurnState::Terminal(score) => Some(score),
            _ => None,
        }
    }

    /// Change who controls the computer color. Takes effect immediately: switching to
    /// [`PlayMode::HumanVsComputer`] while the computer's color is to move makes
    /// [`is_computer_turn`](Self::is_computer_turn) true.
    pub fn set_play_mode(&mut self, mode: PlayMode) {
        log::debug!("Play mode: {:?} -> {:?}", self.config.play_mode, mode);
        self.config.play_mode = mode;
    }

    /// Change the computer's strength. Read at the start of the next computer turn.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        log::debug!("Difficulty: {:?} -> {:?}", self.config.difficulty, difficulty);
        self.config.difficulty = difficulty;
    }

    /// Waiting for a human move
    pub fn is_human_turn(&self) -> bool {
        matches!(self.state, TurnState::AwaitingMove(c) if !self.config.is_computer(c))
    }

    /// Waiting for [`play_computer_turn`](Self::play_computer_turn)
    pub fn is_computer_turn(&self) -> bool {
        matches!(self.state, TurnState::AwaitingMove(c) if self.config.is_computer(c))
    }

    /// Legal moves of the human to move with the number of discs each would flip.
    /// Empty outside a human turn.
    pub fn hints(&self) -> Vec<(Move, u32)> {
        match self.state {
            TurnState::AwaitingMove(c) if !self.config.is_computer(c) => self
                .board
                .legal_moves(c)
                .into_iter()
                .map(|m| (m, self.board.count_flips(m, c)))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Human move on (row, col).
    ///
    /// # Panics
    ///
    /// If `row` or `col` is outside 0..8.
    pub fn activate(&mut self, row: usize, col: usize) -> Result<FlipSequence, TurnError> {
        let mv = Move::new(row, col);
        let color = self.awaiting()?;

        if self.config.is_computer(color) {
            return Err(TurnError::ComputerTurn);
        }
        self.submit(color, mv)
    }

    /// Ask the computer seat for its move and submit it.
    ///
    /// The configured difficulty is pushed into the player first, so changes made
    /// between turns apply to this one.
    pub fn play_computer_turn(&mut self) -> Result<FlipSequence, TurnError> {
        let color = self.awaiting()?;

        if !self.config.is_computer(color) {
            return Err(TurnError::NotComputerTurn);
        }

        self.computer.set_difficulty(self.config.difficulty);
        let mv = self
            .computer
            .get_move(&self.board, color)
            .ok_or(TurnError::NoMoveFromComputer)?;
        self.submit(color, mv)
    }

    /// Finish the move being resolved and hand the turn on.
    pub fn complete_move(&mut self) -> Result<TurnAdvance, TurnError> {
        let mover = match self.state {
            TurnState::Resolving(c) => c,
            TurnState::AwaitingMove(_) => return Err(TurnError::NothingToResolve),
            TurnState::Terminal(_) => return Err(TurnError::GameOver),
        };

        let (state, passed) = settle(&self.board, mover.opposite());
        self.state = state;

        if let Some(color) = passed {
            log::info!("{} has no legal move and passes", color);
        }
        if let TurnState::Terminal(score) = state {
            log::info!("Game over: {}", score);
            self.computer.game_ended(&score);
        }

        Ok(TurnAdvance { state, passed })
    }

    /// Start over from the initial position, Black to move.
    /// Refused while a move is being resolved.
    pub fn restart(&mut self) -> Result<(), TurnError> {
        if let TurnState::Resolving(_) = self.state {
            return Err(TurnError::Busy);
        }

        self.board = Board::new();
        self.state = TurnState::AwaitingMove(Color::Black);
        log::info!("New game");
        Ok(())
    }

    /// Color to move, or the reason no move can be submitted now
    fn awaiting(&self) -> Result<Color, TurnError> {
        match self.state {
            TurnState::AwaitingMove(c) => Ok(c),
            TurnState::Resolving(_) => Err(TurnError::Busy),
            TurnState::Terminal(_) => Err(TurnError::GameOver),
        }
    }

    /// Shared path for human and computer moves
    fn submit(&mut self, color: Color, mv: Move) -> Result<FlipSequence, TurnError> {
        if !self.board.is_legal_move(mv, color) {
            return Err(TurnError::IllegalMove(mv));
        }

        let flips = self.board.apply_move(mv, color);
        self.state = TurnState::Resolving(color);

        let (black, white) = self.board.counts();
        log::debug!("{} plays {} flipping {} (B {} : W {})", color, mv, flips.len(), black, white);
        Ok(flips)
    }
}

/// State for `mover` to play on `board`, passing to the opponent when `mover` is stuck.
/// Returns the color that passed.
fn settle(board: &Board, mover: Color) -> (TurnState, Option<Color>) {
    if board.has_any_legal_move(mover) {
        (TurnState::AwaitingMove(mover), None)
    } else if board.has_any_legal_move(mover.opposite()) {
        (TurnState::AwaitingMove(mover.opposite()), Some(mover))
    } else {
        (TurnState::Terminal(FinalScore::from_board(board)), None)
    }
}
