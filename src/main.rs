//! Terminal Othello.
//!
//! Moves are typed as `d3` or `row col` (1-based). Other commands:
//! `mode hvh|hvc`, `difficulty basic|advanced`, `restart`, `help`, `quit`.
//!
//! `OTHELLO_MODE` and `OTHELLO_DIFFICULTY` set the starting configuration,
//! `RUST_LOG` the log level (default `info`).

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use othello_engine::agent::Difficulty;
use othello_engine::config::{GameConfig, PlayMode};
use othello_engine::game_repr::{Move, BOARD_SIZE};
use othello_engine::orchestrator::{Orchestrator, TurnError, TurnState};
use othello_engine::renderer::{Renderer, TextRenderer};

const FLIP_DELAY: Duration = Duration::from_millis(120);
const THINK_DELAY: Duration = Duration::from_millis(400);

const HELP: &str = "\
Commands:
  d3 | 3 4            place a disc (column letter + row, or row and column)
  mode hvh|hvc        human vs human / human vs computer
  difficulty basic|advanced
  restart             new game
  quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Play(Move),
    Mode(PlayMode),
    Difficulty(Difficulty),
    Restart,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["quit" | "exit" | "q"] => Ok(Command::Quit),
        ["help" | "?"] => Ok(Command::Help),
        ["restart" | "new"] => Ok(Command::Restart),
        ["mode", value] => value.parse().map(Command::Mode).map_err(|e| e.to_string()),
        ["difficulty", value] => value.parse().map(Command::Difficulty).map_err(|e| e.to_string()),
        [square] => Move::from_algebraic(square)
            .map(Command::Play)
            .ok_or_else(|| format!("not a square: {square}")),
        [row, col] => {
            let row: usize = row.parse().map_err(|_| format!("not a row: {row}"))?;
            let col: usize = col.parse().map_err(|_| format!("not a column: {col}"))?;
            if !(1..=BOARD_SIZE).contains(&row) || !(1..=BOARD_SIZE).contains(&col) {
                return Err(format!("coordinates must be between 1 and {BOARD_SIZE}"));
            }
            Ok(Command::Play(Move::new(row - 1, col - 1)))
        }
        _ => Err(format!("unknown command: {}", line.trim())),
    }
}

/// Hand the turn on after the flips were shown, reporting passes and the end
fn finish_move<R: Renderer>(game: &mut Orchestrator, renderer: &mut R) -> io::Result<()> {
    match game.complete_move() {
        Ok(advance) => {
            if let Some(color) = advance.passed {
                renderer.draw_pass(color)?;
            }
            if let TurnState::Terminal(score) = advance.state {
                renderer.draw_game_end(game.board(), &score)?;
            }
        }
        Err(e) => log::warn!("Could not complete move: {}", e),
    }
    Ok(())
}

fn play_computer_turns<R: Renderer>(game: &mut Orchestrator, renderer: &mut R) -> io::Result<()> {
    while game.is_computer_turn() {
        renderer.draw_position(game.board(), game.current_player(), &[])?;
        thread::sleep(THINK_DELAY);

        match game.play_computer_turn() {
            Ok(flips) => {
                renderer.draw_flips(&flips)?;
                finish_move(game, renderer)?;
            }
            Err(e) => {
                log::error!("Computer turn failed: {}", e);
                break;
            }
        }
    }
    Ok(())
}

fn run<R: Renderer>(game: &mut Orchestrator, renderer: &mut R) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{HELP}");
    loop {
        play_computer_turns(game, renderer)?;

        if game.is_terminal() {
            print!("Type `restart` for a new game or `quit`. > ");
        } else {
            renderer.draw_position(game.board(), game.current_player(), &game.hints())?;
            print!("> ");
        }
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(msg) => {
                println!("{msg}");
                continue;
            }
        };

        match command {
            Command::Play(mv) => match game.activate(mv.row(), mv.col()) {
                Ok(flips) => {
                    renderer.draw_flips(&flips)?;
                    finish_move(game, renderer)?;
                }
                Err(TurnError::IllegalMove(mv)) => println!("{mv} is not a legal move."),
                Err(e) => println!("{e}."),
            },
            Command::Mode(mode) => game.set_play_mode(mode),
            Command::Difficulty(difficulty) => {
                game.set_difficulty(difficulty);
                println!("Difficulty set to {}.", difficulty.name());
            }
            Command::Restart => {
                if let Err(e) = game.restart() {
                    println!("{e}.");
                }
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => return Ok(()),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::from_env();
    log::info!(
        "Starting {:?} game, computer difficulty {}",
        config.play_mode,
        config.difficulty.name()
    );

    let mut game = Orchestrator::new(config);
    let mut renderer = TextRenderer::new(io::stdout()).with_flip_delay(FLIP_DELAY);

    if let Err(e) = run(&mut game, &mut renderer) {
        log::error!("Terminal I/O failed: {}", e);
        std::process::exit(1);
    }
}
