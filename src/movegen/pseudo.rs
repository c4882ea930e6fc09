//! Pseudo-legal move generation.
//!
//! Produces every move that obeys piece movement rules without checking
//! whether the mover's king is left in check; `legal_moves` filters that.

use crate::board::{BoardState, CastlingRights, Color, Move, Piece, PieceKind, Square};

use super::attacks::{attacked, BISHOP_DIRS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRS};

const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Generates all pseudo-legal moves for the side to move, scanning squares
/// in index order (a1..h8). The order is deterministic but carries no
/// significance; ties downstream are broken by enumeration position.
pub(crate) fn pseudo_legal_moves(state: &BoardState) -> Vec<Move> {
    let us = state.side_to_move;
    let mut moves = Vec::with_capacity(64);

    for i in 0..64 {
        let Some(piece) = state.squares[i] else {
            continue;
        };
        if piece.color != us {
            continue;
        }
        let from = Square::from_index(i);
        match piece.kind {
            PieceKind::Pawn => pawn_moves(state, from, us, &mut moves),
            PieceKind::Knight => leaper_moves(state, from, us, &KNIGHT_OFFSETS, &mut moves),
            PieceKind::Bishop => slider_moves(state, from, us, &BISHOP_DIRS, &mut moves),
            PieceKind::Rook => slider_moves(state, from, us, &ROOK_DIRS, &mut moves),
            PieceKind::Queen => {
                slider_moves(state, from, us, &ROOK_DIRS, &mut moves);
                slider_moves(state, from, us, &BISHOP_DIRS, &mut moves);
            }
            PieceKind::King => {
                leaper_moves(state, from, us, &KING_OFFSETS, &mut moves);
                castling_moves(state, from, us, &mut moves);
            }
        }
    }

    moves
}

fn leaper_moves(
    state: &BoardState,
    from: Square,
    us: Color,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(df, dr) in offsets {
        if let Some(to) = from.offset(df, dr) {
            match state.piece_at(to) {
                Some(p) if p.color == us => {}
                _ => moves.push(Move::new(from, to)),
            }
        }
    }
}

fn slider_moves(
    state: &BoardState,
    from: Square,
    us: Color,
    dirs: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(df, dr) in dirs {
        let mut sq = from;
        while let Some(to) = sq.offset(df, dr) {
            sq = to;
            match state.piece_at(to) {
                None => moves.push(Move::new(from, to)),
                Some(p) => {
                    if p.color != us {
                        moves.push(Move::new(from, to));
                    }
                    break;
                }
            }
        }
    }
}

fn pawn_moves(state: &BoardState, from: Square, us: Color, moves: &mut Vec<Move>) {
    let (up, start_rank, promo_rank) = match us {
        Color::White => (1, 1, 7),
        Color::Black => (-1, 6, 0),
    };

    if let Some(to) = from.offset(0, up) {
        if state.piece_at(to).is_none() {
            push_pawn_move(from, to, promo_rank, moves);
            if from.rank() == start_rank {
                if let Some(two) = from.offset(0, 2 * up) {
                    if state.piece_at(two).is_none() {
                        moves.push(Move::new(from, two));
                    }
                }
            }
        }
    }

    for df in [-1, 1] {
        if let Some(to) = from.offset(df, up) {
            match state.piece_at(to) {
                Some(p) if p.color != us => push_pawn_move(from, to, promo_rank, moves),
                None if Some(to) == state.en_passant => moves.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

fn push_pawn_move(from: Square, to: Square, promo_rank: u8, moves: &mut Vec<Move>) {
    if to.rank() == promo_rank {
        for kind in PROMOTION_KINDS {
            moves.push(Move::promoting(from, to, kind));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}

fn castling_moves(state: &BoardState, from: Square, us: Color, moves: &mut Vec<Move>) {
    let (home, kingside, queenside) = match us {
        Color::White => (
            0,
            CastlingRights::WHITE_KINGSIDE,
            CastlingRights::WHITE_QUEENSIDE,
        ),
        Color::Black => (
            7,
            CastlingRights::BLACK_KINGSIDE,
            CastlingRights::BLACK_QUEENSIDE,
        ),
    };
    if from != Square::new(4, home) {
        return;
    }
    let them = us.opponent();
    let rook = Some(Piece::new(us, PieceKind::Rook));
    let empty = |file: u8| state.piece_at(Square::new(file, home)).is_none();
    let safe = |file: u8| !attacked(state, Square::new(file, home), them);

    // The king may not castle out of, through, or into check.
    if state.castling.allows(kingside)
        && state.piece_at(Square::new(7, home)) == rook
        && empty(5)
        && empty(6)
        && safe(4)
        && safe(5)
        && safe(6)
    {
        moves.push(Move::new(from, Square::new(6, home)));
    }
    if state.castling.allows(queenside)
        && state.piece_at(Square::new(0, home)) == rook
        && empty(1)
        && empty(2)
        && empty(3)
        && safe(4)
        && safe(3)
        && safe(2)
    {
        moves.push(Move::new(from, Square::new(2, home)));
    }
}
