//! Heuristic position evaluation.
//!
//! With king and two rooks against a lone king the material verdict is
//! never in question, so the heuristic ignores material entirely and
//! scores only how far the defending king has been driven from the
//! center: mating nets are built on the edge of the board.

use crate::board::{BoardState, Color};
use crate::movegen::{terminal, Terminal};

/// Score for a delivered checkmate. Exceeds any attainable positional
/// value by a wide margin and is not discounted by distance to mate.
pub const CHECKMATE_SCORE: i32 = 100_000;

/// Score for stalemate and the other drawn terminals.
pub const STALEMATE_SCORE: i32 = 0;

/// Flat bonus when the defending king stands on the rim.
const EDGE_BONUS: i32 = 50;

/// Scores a position from the attacker's perspective.
///
/// Terminal positions score `CHECKMATE_SCORE` (negated when the attacker
/// is the side being mated) or `STALEMATE_SCORE` for the drawn outcomes.
/// Otherwise the score grows as the defending king nears the board edge:
/// with `rank_dist = |rank - 3.5|` and `file_dist = |file - 3.5|`, the
/// value is `(rank_dist + file_dist) * 10`, plus the rim bonus.
///
/// Pure: never mutates the position. Total for every position that
/// contains both kings; a missing king is a rules-engine contract
/// violation and aborts rather than scoring the position as drawn.
pub fn evaluate(state: &BoardState, attacker: Color) -> i32 {
    match terminal(state) {
        Some(Terminal::Checkmate) => {
            if state.side_to_move == attacker {
                -CHECKMATE_SCORE
            } else {
                CHECKMATE_SCORE
            }
        }
        Some(_) => STALEMATE_SCORE,
        None => {
            let defender = attacker.opponent();
            let king = state
                .king(defender)
                .expect("rules engine contract violation: defending king missing");
            // (|rank - 3.5| + |file - 3.5|) * 10, in integer arithmetic.
            let rank = i32::from(king.rank());
            let file = i32::from(king.file());
            let center_dist = (2 * rank - 7).abs() + (2 * file - 7).abs();
            let mut score = center_dist * 5;
            if king.is_edge() {
                score += EDGE_BONUS;
            }
            score
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::fen::parse_fen;

    #[test]
    fn cornered_king_scores_highest() {
        // Defender king on a1: (3.5 + 3.5) * 10 + 50 = 120.
        let state = parse_fen("8/6R1/4K2R/8/8/8/8/k7 w - - 0 1").unwrap();
        assert_eq!(evaluate(&state, Color::White), 120);
    }

    #[test]
    fn centered_king_scores_lowest() {
        // Defender king on d4: (0.5 + 0.5) * 10 = 10, no rim bonus.
        let state = parse_fen("8/6R1/4K2R/8/3k4/8/8/8 w - - 0 1").unwrap();
        assert_eq!(evaluate(&state, Color::White), 10);
    }

    #[test]
    fn edge_bonus_applies_off_the_corner() {
        // Defender king on a4: rank_dist 0.5, file_dist 3.5, on the rim:
        // (0.5 + 3.5) * 10 + 50 = 90.
        let state = parse_fen("8/6R1/4K2R/8/k7/8/8/8 w - - 0 1").unwrap();
        assert_eq!(evaluate(&state, Color::White), 90);
    }

    #[test]
    fn checkmate_scores_the_sentinel() {
        let state = parse_fen("R6k/8/7K/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(evaluate(&state, Color::White), CHECKMATE_SCORE);
        // Seen from the mated side the same position is a loss.
        assert_eq!(evaluate(&state, Color::Black), -CHECKMATE_SCORE);
    }

    #[test]
    fn drawn_terminals_score_zero() {
        let stalemate = parse_fen("k7/8/KR6/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(evaluate(&stalemate, Color::White), STALEMATE_SCORE);

        let bare_kings = parse_fen("k7/8/K7/8/8/8/8/8 w - - 0 1").unwrap();
        assert_eq!(evaluate(&bare_kings, Color::White), STALEMATE_SCORE);
    }

    #[test]
    fn evaluation_is_pure() {
        let state = parse_fen("7k/8/5K2/8/8/8/8/R7 w - - 0 1").unwrap();
        let copy = state.clone();
        let first = evaluate(&state, Color::White);
        let second = evaluate(&state, Color::White);
        assert_eq!(first, second);
        assert_eq!(state, copy);
    }

    #[test]
    fn positional_scores_stay_below_the_sentinel() {
        // The maximum positional value is 120; the sentinel must dominate.
        assert!(CHECKMATE_SCORE > 120);
    }
}
