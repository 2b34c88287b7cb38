// Minimax search with alpha-beta pruning
//
// Scores are always taken from the root player's point of view: the root
// player maximizes, the opponent minimizes. Every child is searched on its
// own copy of the board.
//
// Pass handling: when the side to move has no legal move but the other side
// does, the turn passes and the role flips. A pass still costs one ply.

use crate::game_repr::{Board, Color, Move};
use super::evaluation::evaluate;

/// Plies searched by the Advanced player, counting its own move
pub const SEARCH_DEPTH: u8 = 4;

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth: u8,
    pub nodes_searched: u64,
}

impl SearchResult {
    /// Create a new search result with no move found
    pub fn new(depth: u8) -> Self {
        Self {
            best_move: None,
            score: i32::MIN,
            depth,
            nodes_searched: 0,
        }
    }
}

/// Search every legal move of `color` and return the best one.
///
/// Each root move gets its own full (-inf, +inf) window and is searched as
/// the opponent's minimizing ply with `depth - 1` plies left. The first move
/// reaching the highest score wins, so equal scores resolve in enumeration
/// order.
pub fn search(board: &Board, color: Color, depth: u8) -> SearchResult {
    let depth = depth.max(1);
    let mut result = SearchResult::new(depth);

    for mv in board.legal_moves(color) {
        let child = board.with_move(mv, color);
        let score = minimax(
            &child,
            depth - 1,
            false,
            color,
            i32::MIN,
            i32::MAX,
            &mut result.nodes_searched,
        );

        if result.best_move.is_none() || score > result.score {
            result.score = score;
            result.best_move = Some(mv);
        }
    }

    log::debug!(
        "search: {:?} depth {} best {:?} score {} nodes {}",
        color,
        depth,
        result.best_move.map(|mv| mv.to_string()),
        result.score,
        result.nodes_searched
    );

    result
}

/// Minimax value of `node` for `root`.
///
/// # Arguments
///
/// * `node` - Position to score
/// * `depth` - Remaining plies (0 = evaluate statically)
/// * `maximizing` - Whether `root` is to move at this node
/// * `root` - Player whose point of view every score takes
/// * `alpha` / `beta` - Current window
/// * `nodes` - Counter of visited nodes
pub fn minimax(
    node: &Board,
    depth: u8,
    maximizing: bool,
    root: Color,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    let to_move = if maximizing { root } else { root.opposite() };
    let mover_can_play = node.has_any_legal_move(to_move);

    if depth == 0 || (!mover_can_play && !node.has_any_legal_move(to_move.opposite())) {
        return evaluate(node, root);
    }

    if !mover_can_play {
        return minimax(node, depth - 1, !maximizing, root, alpha, beta, nodes);
    }

    if maximizing {
        let mut best = i32::MIN;
        for mv in node.legal_moves(to_move) {
            let child = node.with_move(mv, to_move);
            best = best.max(minimax(&child, depth - 1, false, root, alpha, beta, nodes));
            alpha = alpha.max(best);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for mv in node.legal_moves(to_move) {
            let child = node.with_move(mv, to_move);
            best = best.min(minimax(&child, depth - 1, true, root, alpha, beta, nodes));
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
