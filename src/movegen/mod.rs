//! Legal move generation.
//!
//! Generates the set of legal moves for the side to move in the current
//! game state, classifies terminal positions, and produces the random
//! two-rooks-versus-king setups used to start a game.

pub mod attacks;
mod pseudo;

use rand::Rng;

use crate::board::{BoardState, CastlingRights, Color, Move, Piece, PieceKind, Square};

pub use attacks::{attacked, in_check};

/// Why a position admits no further play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    Repetition,
}

/// Generates all legal moves for the side to move.
///
/// Pseudo-legal moves are probed one by one on a scratch copy of the
/// state; any move that leaves the mover's own king attacked is dropped.
pub fn legal_moves(state: &BoardState) -> Vec<Move> {
    let us = state.side_to_move;
    let mut probe = state.clone();
    let mut legal = Vec::new();

    for mv in pseudo::pseudo_legal_moves(state) {
        probe.make_move(mv);
        let safe = match probe.king(us) {
            Some(sq) => !attacks::attacked(&probe, sq, us.opponent()),
            None => true,
        };
        probe.unmake_move();
        if safe {
            legal.push(mv);
        }
    }

    legal
}

/// Classifies the position if no further play is possible.
///
/// A side with no legal moves is checkmated or stalemated; otherwise the
/// position may still be dead by material or drawn by repetition.
pub fn terminal(state: &BoardState) -> Option<Terminal> {
    if legal_moves(state).is_empty() {
        if attacks::in_check(state) {
            Some(Terminal::Checkmate)
        } else {
            Some(Terminal::Stalemate)
        }
    } else if state.insufficient_material() {
        Some(Terminal::InsufficientMaterial)
    } else if state.is_repetition() {
        Some(Terminal::Repetition)
    } else {
        None
    }
}

/// Generates a random legal two-rooks-versus-king starting position:
/// white king and two rooks against a lone black king, white to move.
///
/// This is the protocol counterpart of a GUI's piece-placement setup
/// phase. Rejection sampling keeps drawing square sets until the
/// position is legal (black must not already stand in check).
pub fn random_endgame(rng: &mut impl Rng) -> BoardState {
    loop {
        let mut picks = [0usize; 4];
        let mut n = 0;
        while n < 4 {
            let sq = rng.gen_range(0..64);
            if !picks[..n].contains(&sq) {
                picks[n] = sq;
                n += 1;
            }
        }

        let mut squares = [None; 64];
        squares[picks[0]] = Some(Piece::new(Color::White, PieceKind::King));
        squares[picks[1]] = Some(Piece::new(Color::Black, PieceKind::King));
        squares[picks[2]] = Some(Piece::new(Color::White, PieceKind::Rook));
        squares[picks[3]] = Some(Piece::new(Color::White, PieceKind::Rook));

        let state = BoardState::new(
            squares,
            Color::White,
            CastlingRights::none(),
            None,
            0,
            1,
        );
        let black_king = Square::from_index(picks[1]);
        if attacks::attacked(&state, black_king, Color::White) {
            continue;
        }
        return state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::fen::{parse_fen, STARTING_FEN};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    /// Counts leaf nodes of the full legal move tree to the given depth.
    fn perft(state: &mut BoardState, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let mut nodes = 0;
        for mv in legal_moves(state) {
            state.make_move(mv);
            nodes += perft(state, depth - 1);
            state.unmake_move();
        }
        nodes
    }

    #[test]
    fn perft_starting_position() {
        let mut state = parse_fen(STARTING_FEN).unwrap();
        assert_eq!(perft(&mut state, 1), 20);
        assert_eq!(perft(&mut state, 2), 400);
        assert_eq!(perft(&mut state, 3), 8_902);
        assert_eq!(perft(&mut state, 4), 197_281);
    }

    #[test]
    fn perft_castling_and_pins() {
        // Kiwipete: exercises castling, en passant, pins, and promotions.
        let mut state = parse_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .unwrap();
        assert_eq!(perft(&mut state, 1), 48);
        assert_eq!(perft(&mut state, 2), 2_039);
        assert_eq!(perft(&mut state, 3), 97_862);
    }

    #[test]
    fn checkmate_is_detected() {
        let state = parse_fen("R6k/8/7K/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(legal_moves(&state).is_empty());
        assert_eq!(terminal(&state), Some(Terminal::Checkmate));
    }

    #[test]
    fn stalemate_is_detected() {
        let state = parse_fen("k7/8/KR6/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(legal_moves(&state).is_empty());
        assert!(!in_check(&state));
        assert_eq!(terminal(&state), Some(Terminal::Stalemate));
    }

    #[test]
    fn bare_kings_are_terminal() {
        let state = parse_fen("k7/8/K7/8/8/8/8/8 w - - 0 1").unwrap();
        assert_eq!(terminal(&state), Some(Terminal::InsufficientMaterial));
    }

    #[test]
    fn live_position_is_not_terminal() {
        let state = parse_fen("7k/8/5K2/8/8/8/8/R7 w - - 0 1").unwrap();
        assert_eq!(terminal(&state), None);
    }

    #[test]
    fn castling_blocked_by_attacked_transit() {
        let state = parse_fen("4k3/8/8/8/8/8/6r1/4K2R w K - 0 1").unwrap();
        let castle = Move::from_uci("e1g1").unwrap();
        assert!(!legal_moves(&state).contains(&castle));

        let state = parse_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
        assert!(legal_moves(&state).contains(&castle));
    }

    #[test]
    fn moves_exposing_the_king_are_illegal() {
        // The white rook on e4 is pinned against its king by the black rook.
        let state = parse_fen("4r1k1/8/8/8/4R3/8/8/4K3 w - - 0 1").unwrap();
        let moves = legal_moves(&state);
        assert!(moves.contains(&Move::from_uci("e4e5").unwrap()));
        assert!(moves.contains(&Move::from_uci("e4e8").unwrap()));
        assert!(!moves.contains(&Move::from_uci("e4a4").unwrap()));
        assert!(!moves.contains(&Move::from_uci("e4h4").unwrap()));
    }

    #[test]
    fn random_endgame_is_well_formed() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            let state = random_endgame(&mut rng);
            assert_eq!(state.side_to_move, Color::White);
            let pieces: Vec<Piece> = state.squares.iter().flatten().copied().collect();
            assert_eq!(pieces.len(), 4);
            assert_eq!(
                pieces
                    .iter()
                    .filter(|p| p.kind == PieceKind::Rook)
                    .count(),
                2
            );
            let bk = state.king(Color::Black).unwrap();
            assert!(!attacked(&state, bk, Color::White));
            assert!(!legal_moves(&state).is_empty());
        }
    }
}
