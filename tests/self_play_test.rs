//! Whole games driven through the session, the way a front-end drives it.
//!
//! Covers:
//! - Every submitted move is legal and changes the disc counts as expected
//! - Passes hand the turn back without ending the game
//! - Games always terminate, and only when neither side can move
//! - The text front-end can follow a full game

use othello_engine::agent::ai::choose_move;
use othello_engine::agent::player::{FinalScore, GameResult};
use othello_engine::agent::{AIPlayer, Difficulty};
use othello_engine::config::GameConfig;
use othello_engine::game_repr::{Board, Color};
use othello_engine::orchestrator::{Orchestrator, TurnState};
use othello_engine::renderer::{Renderer, TextRenderer};
use rand::rngs::StdRng;
use rand::SeedableRng;

const MAX_TURNS: usize = 200;

struct GameLog {
    score: FinalScore,
    moves: usize,
    passes: usize,
}

/// Human seat picks with `human`, computer seat is the built-in AI.
fn play_game(seed: u64, human: Difficulty, computer: Difficulty) -> GameLog {
    let config = GameConfig::human_vs_computer(Color::White, computer);
    let ai = AIPlayer::with_rng(StdRng::seed_from_u64(seed), computer);
    let mut game = Orchestrator::with_player(config, Box::new(ai));
    let mut human_rng = StdRng::seed_from_u64(seed.wrapping_add(1000));

    let mut moves = 0;
    let mut passes = 0;

    for _ in 0..MAX_TURNS {
        let mover = match game.state() {
            TurnState::AwaitingMove(c) => c,
            TurnState::Terminal(score) => {
                assert!(!game.board().has_any_legal_move(Color::Black));
                assert!(!game.board().has_any_legal_move(Color::White));
                assert_eq!(score, FinalScore::from_board(game.board()));
                return GameLog { score, moves, passes };
            }
            TurnState::Resolving(c) => panic!("{c} left resolving"),
        };
        assert!(game.board().has_any_legal_move(mover), "{mover} awaiting without moves");

        let before = *game.board();
        let flips = if game.is_computer_turn() {
            game.play_computer_turn().expect("computer turn")
        } else {
            let mv = choose_move(&before, mover, human, &mut human_rng).expect("mover has moves");
            game.activate(mv.row(), mv.col()).expect("chosen move is legal")
        };

        assert!(before.is_legal_move(flips.origin, mover));
        assert_eq!(flips.len() as u32, before.count_flips(flips.origin, mover));
        assert_eq!(game.board().count(mover), before.count(mover) + 1 + flips.len() as u32);
        assert_eq!(
            game.board().count(mover.opposite()),
            before.count(mover.opposite()) - flips.len() as u32
        );
        moves += 1;

        let advance = game.complete_move().expect("move was resolving");
        if let Some(passed) = advance.passed {
            assert_eq!(passed, mover.opposite());
            assert_eq!(advance.state, TurnState::AwaitingMove(mover));
            passes += 1;
        }
    }

    panic!("game did not finish within {MAX_TURNS} turns");
}

#[test]
fn test_basic_vs_basic_games_finish() {
    for seed in 0..8 {
        let log = play_game(seed, Difficulty::Basic, Difficulty::Basic);

        assert!(log.score.black + log.score.white <= 64);
        assert!(log.moves <= 60);
        assert_eq!(log.score.black + log.score.white, 4 + log.moves as u32);
    }
}

#[test]
fn test_advanced_computer_games_finish() {
    for seed in 0..3 {
        let log = play_game(seed, Difficulty::Basic, Difficulty::Advanced);
        assert_eq!(log.score.black + log.score.white, 4 + log.moves as u32);
    }
}

#[test]
fn test_advanced_vs_advanced_is_reproducible() {
    // Advanced never consults its random source
    let first = play_game(1, Difficulty::Advanced, Difficulty::Advanced);
    let second = play_game(2, Difficulty::Advanced, Difficulty::Advanced);

    assert_eq!(first.score, second.score);
    assert_eq!(first.moves, second.moves);
    assert_eq!(first.passes, second.passes);
}

#[test]
fn test_result_matches_disc_counts() {
    for seed in 10..14 {
        let log = play_game(seed, Difficulty::Basic, Difficulty::Basic);
        let expected = match log.score.black.cmp(&log.score.white) {
            std::cmp::Ordering::Greater => GameResult::BlackWins,
            std::cmp::Ordering::Less => GameResult::WhiteWins,
            std::cmp::Ordering::Equal => GameResult::Draw,
        };
        assert_eq!(log.score.result, expected);
    }
}

#[test]
fn test_text_front_end_follows_a_game() {
    let config = GameConfig::human_vs_human();
    let mut game = Orchestrator::with_player(config, Box::new(AIPlayer::new(Difficulty::Basic)));
    let mut renderer = TextRenderer::new(Vec::new());
    let mut rng = StdRng::seed_from_u64(5);

    while let TurnState::AwaitingMove(mover) = game.state() {
        renderer
            .draw_position(game.board(), Some(mover), &game.hints())
            .expect("write to Vec");
        let mv = choose_move(game.board(), mover, Difficulty::Basic, &mut rng).expect("mover has moves");
        let flips = game.activate(mv.row(), mv.col()).expect("legal");
        renderer.draw_flips(&flips).expect("write to Vec");

        let advance = game.complete_move().expect("resolving");
        if let Some(color) = advance.passed {
            renderer.draw_pass(color).expect("write to Vec");
        }
    }

    let score = game.final_score().expect("loop only exits at the end");
    renderer.draw_game_end(game.board(), &score).expect("write to Vec");

    let out = String::from_utf8(renderer.into_inner()).expect("ASCII output");
    assert!(out.starts_with("\n   a b c d e f g h\n"));
    assert!(out.contains("Black plays "));
    assert!(out.trim_end().ends_with(&format!("Game over: {}", score)));
}

#[test]
fn test_restart_after_game_over() {
    let mut game = Orchestrator::from_position(
        Board::empty(),
        Color::Black,
        GameConfig::default(),
        Box::new(AIPlayer::new(Difficulty::Basic)),
    );
    assert!(game.is_terminal());

    game.restart().expect("not resolving");
    assert_eq!(game.state(), TurnState::AwaitingMove(Color::Black));
    assert_eq!(*game.board(), Board::new());
}
