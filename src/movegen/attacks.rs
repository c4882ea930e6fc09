//! Attack detection.
//!
//! Answers "is this square attacked by that color" by scanning outward
//! from the square: pawn and leaper patterns first, then sliding rays.

use crate::board::{BoardState, Color, Piece, PieceKind, Square};

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const ROOK_DIRS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub(crate) const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// True if `square` is attacked by any piece of color `by`.
pub fn attacked(state: &BoardState, square: Square, by: Color) -> bool {
    // A white pawn attacks diagonally upward, so look one rank below the
    // target square for it (and the mirror for black).
    let pawn_rank = if by == Color::White { -1 } else { 1 };
    for df in [-1, 1] {
        if let Some(from) = square.offset(df, pawn_rank) {
            if state.piece_at(from) == Some(Piece::new(by, PieceKind::Pawn)) {
                return true;
            }
        }
    }

    for (df, dr) in KNIGHT_OFFSETS {
        if let Some(from) = square.offset(df, dr) {
            if state.piece_at(from) == Some(Piece::new(by, PieceKind::Knight)) {
                return true;
            }
        }
    }

    for (df, dr) in KING_OFFSETS {
        if let Some(from) = square.offset(df, dr) {
            if state.piece_at(from) == Some(Piece::new(by, PieceKind::King)) {
                return true;
            }
        }
    }

    for (df, dr) in ROOK_DIRS {
        if ray_hits(state, square, df, dr, by, PieceKind::Rook) {
            return true;
        }
    }
    for (df, dr) in BISHOP_DIRS {
        if ray_hits(state, square, df, dr, by, PieceKind::Bishop) {
            return true;
        }
    }

    false
}

/// Walks a ray from `from` and reports whether the first piece met is a
/// `by`-colored slider of the given kind (or a queen).
fn ray_hits(
    state: &BoardState,
    from: Square,
    dfile: i8,
    drank: i8,
    by: Color,
    kind: PieceKind,
) -> bool {
    let mut sq = from;
    while let Some(next) = sq.offset(dfile, drank) {
        sq = next;
        if let Some(p) = state.piece_at(sq) {
            return p.color == by && (p.kind == kind || p.kind == PieceKind::Queen);
        }
    }
    false
}

/// True if the side to move's king is currently attacked.
pub fn in_check(state: &BoardState) -> bool {
    match state.king(state.side_to_move) {
        Some(sq) => attacked(state, sq, state.side_to_move.opponent()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::fen::parse_fen;

    fn sq(name: &str) -> Square {
        Square::from_name(name).unwrap()
    }

    #[test]
    fn rook_attacks_along_open_lines() {
        let state = parse_fen("4k3/8/8/8/3R4/8/8/4K3 w - - 0 1").unwrap();
        assert!(attacked(&state, sq("d8"), Color::White));
        assert!(attacked(&state, sq("a4"), Color::White));
        assert!(!attacked(&state, sq("e5"), Color::White));
    }

    #[test]
    fn rook_attacks_are_blocked() {
        let state = parse_fen("4k3/8/3p4/8/3R4/8/8/4K3 w - - 0 1").unwrap();
        assert!(attacked(&state, sq("d6"), Color::White));
        assert!(!attacked(&state, sq("d7"), Color::White));
        assert!(!attacked(&state, sq("d8"), Color::White));
    }

    #[test]
    fn pawn_attack_direction() {
        let state = parse_fen("4k3/8/8/8/3p4/8/8/4K3 b - - 0 1").unwrap();
        assert!(attacked(&state, sq("c3"), Color::Black));
        assert!(attacked(&state, sq("e3"), Color::Black));
        assert!(!attacked(&state, sq("c5"), Color::Black));
        assert!(!attacked(&state, sq("d3"), Color::Black));
    }

    #[test]
    fn knight_and_king_attacks() {
        let state = parse_fen("4k3/8/8/8/4N3/8/8/4K3 w - - 0 1").unwrap();
        assert!(attacked(&state, sq("d6"), Color::White));
        assert!(attacked(&state, sq("f6"), Color::White));
        assert!(!attacked(&state, sq("e5"), Color::White));
        // The white king on e1 covers its own ring.
        assert!(attacked(&state, sq("d2"), Color::White));
        assert!(attacked(&state, sq("f1"), Color::White));
    }

    #[test]
    fn in_check_reports_side_to_move() {
        let state = parse_fen("4k3/8/8/8/8/8/8/R3K3 b - - 0 1").unwrap();
        // Black to move, rook a1 does not see e8.
        assert!(!in_check(&state));
        let state = parse_fen("4k3/8/8/8/8/8/8/4K2R b - - 0 1").unwrap();
        assert!(!in_check(&state));
        let state = parse_fen("R3k3/8/8/8/8/8/8/4K3 b - - 0 1").unwrap();
        assert!(in_check(&state));
    }
}
