//! Plain minimax search without pruning.
//!
//! Reference implementation kept alongside the alpha-beta search. Both
//! walk the tree in the same order and break ties the same way, so on
//! every position and depth they must agree on both score and move; the
//! differential tests hold the pruned search to that.

use crate::board::{BoardState, Color};
use crate::eval::evaluate;
use crate::movegen::{legal_moves, terminal};

use super::alpha_beta::{SearchResult, INFINITY};

/// Searches `depth` plies ahead with no pruning.
pub fn minimax(state: &mut BoardState, attacker: Color, depth: u32) -> SearchResult {
    let mut nodes = 0;
    let (score, best_move) = search(state, attacker, depth, true, &mut nodes);
    SearchResult {
        best_move,
        score,
        nodes,
    }
}

fn search(
    state: &mut BoardState,
    attacker: Color,
    depth: u32,
    maximizing: bool,
    nodes: &mut u64,
) -> (i32, Option<crate::board::Move>) {
    *nodes += 1;

    if depth == 0 || terminal(state).is_some() {
        return (evaluate(state, attacker), None);
    }

    let mut best = if maximizing { -INFINITY } else { INFINITY };
    let mut best_move = None;
    for mv in legal_moves(state) {
        state.make_move(mv);
        let (score, _) = search(state, attacker, depth - 1, !maximizing, nodes);
        state.unmake_move();
        let better = if maximizing { score > best } else { score < best };
        if better {
            best = score;
            best_move = Some(mv);
        }
    }
    (best, best_move)
}
