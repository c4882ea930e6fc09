//! Minimax search with alpha-beta pruning.
//!
//! Depth-first exploration over a single shared `BoardState`, applying
//! and undoing each move in place. Alpha is the best score the attacker
//! can already guarantee on the current path, beta the defender's
//! counterpart; remaining siblings are skipped once `beta <= alpha`.

use crate::board::{BoardState, Color, Move};
use crate::eval::evaluate;
use crate::movegen::{legal_moves, terminal};

/// Bound strictly larger than any reachable score.
pub(crate) const INFINITY: i32 = 1_000_000;

/// Result of a search: the chosen move and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move at the root, or `None` when the side to move has no
    /// legal move. Callers are expected to have excluded that case with
    /// a terminal check before searching.
    pub best_move: Option<Move>,
    /// Minimax value of the root position from the attacker's view.
    pub score: i32,
    /// Nodes visited, counting the root.
    pub nodes: u64,
}

/// Searches `depth` plies ahead and returns the attacker's best move.
///
/// The state is borrowed exclusively for the duration of the call and is
/// handed back exactly as it was passed in: every applied move is undone
/// on every exit path, including pruning cutoffs.
pub fn alpha_beta(state: &mut BoardState, attacker: Color, depth: u32) -> SearchResult {
    let mut nodes = 0;
    let (score, best_move) = search(
        state,
        attacker,
        depth,
        -INFINITY,
        INFINITY,
        true,
        &mut nodes,
    );
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
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    nodes: &mut u64,
) -> (i32, Option<Move>) {
    *nodes += 1;

    // Leaves report no move: either the depth budget is spent or the
    // game is over right here.
    if depth == 0 || terminal(state).is_some() {
        return (evaluate(state, attacker), None);
    }

    if maximizing {
        let mut best = -INFINITY;
        let mut best_move = None;
        for mv in legal_moves(state) {
            state.make_move(mv);
            let (score, _) = search(state, attacker, depth - 1, alpha, beta, false, nodes);
            state.unmake_move();
            // Strict comparison: ties keep the earlier-enumerated move.
            if score > best {
                best = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        (best, best_move)
    } else {
        let mut best = INFINITY;
        let mut best_move = None;
        for mv in legal_moves(state) {
            state.make_move(mv);
            let (score, _) = search(state, attacker, depth - 1, alpha, beta, true, nodes);
            state.unmake_move();
            if score < best {
                best = score;
                best_move = Some(mv);
            }
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        (best, best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{CHECKMATE_SCORE, STALEMATE_SCORE};
    use crate::protocol::fen::parse_fen;

    #[test]
    fn finds_mate_in_one() {
        let mut state = parse_fen("7k/8/6K1/8/8/8/8/R7 w - - 0 1").unwrap();
        let result = alpha_beta(&mut state, Color::White, 1);
        assert_eq!(result.score, CHECKMATE_SCORE);
        assert_eq!(result.best_move, Some(Move::from_uci("a1a8").unwrap()));

        // The mating move really mates.
        state.make_move(result.best_move.unwrap());
        assert_eq!(evaluate(&state, Color::White), CHECKMATE_SCORE);
    }

    #[test]
    fn deeper_search_still_scores_the_mate() {
        // No depth discount on the sentinel: a mate found anywhere in the
        // tree scores the same as a faster one.
        let mut state = parse_fen("7k/8/6K1/8/8/8/8/R7 w - - 0 1").unwrap();
        let result = alpha_beta(&mut state, Color::White, 4);
        assert_eq!(result.score, CHECKMATE_SCORE);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn checkmate_at_the_root_expands_nothing() {
        let mut state = parse_fen("R6k/8/7K/8/8/8/8/8 b - - 0 1").unwrap();
        for depth in [0, 1, 3] {
            let result = alpha_beta(&mut state, Color::White, depth);
            assert_eq!(result.score, CHECKMATE_SCORE);
            assert_eq!(result.best_move, None);
            assert_eq!(result.nodes, 1);
        }
    }

    #[test]
    fn stalemate_at_the_root_scores_zero() {
        let mut state = parse_fen("k7/8/KR6/8/8/8/8/8 b - - 0 1").unwrap();
        let result = alpha_beta(&mut state, Color::White, 3);
        assert_eq!(result.score, STALEMATE_SCORE);
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn depth_zero_returns_the_heuristic() {
        let mut state = parse_fen("7k/8/5K2/8/8/8/8/R7 w - - 0 1").unwrap();
        let static_score = evaluate(&state, Color::White);
        let result = alpha_beta(&mut state, Color::White, 0);
        assert_eq!(result.score, static_score);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn state_is_restored_after_search() {
        let mut state = parse_fen("7k/8/5K2/8/8/8/8/R7 w - - 0 1").unwrap();
        let before = state.clone();
        alpha_beta(&mut state, Color::White, 3);
        assert_eq!(state, before);
    }

    #[test]
    fn search_works_for_the_black_side_too() {
        // Mirrored setup: black holds the rooks and mates in one.
        let mut state = parse_fen("r7/8/8/8/8/6k1/8/7K b - - 0 1").unwrap();
        let result = alpha_beta(&mut state, Color::Black, 1);
        assert_eq!(result.score, CHECKMATE_SCORE);
        assert_eq!(result.best_move, Some(Move::from_uci("a8a1").unwrap()));
    }
}
