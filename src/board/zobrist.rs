//! Zobrist hashing of board positions.
//!
//! Positions are hashed for repetition detection. The random table is
//! filled once from a fixed-seed generator via `LazyLock`, so hashes are
//! stable across runs.

use std::sync::LazyLock;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::piece::Piece;
use super::square::Square;

struct Table {
    /// One key per (color, kind, square) triple: `[color][kind][square]`.
    pieces: [[[u64; 64]; 6]; 2],
    /// XORed in when black is to move.
    side: u64,
    /// One key per castling-rights bitmask.
    castling: [u64; 16],
    /// One key per en-passant file.
    ep_file: [u64; 8],
}

static TABLE: LazyLock<Table> = LazyLock::new(|| {
    let mut rng = SmallRng::seed_from_u64(0x9E37_79B9_7F4A_7C15);
    let mut pieces = [[[0u64; 64]; 6]; 2];
    for color in pieces.iter_mut() {
        for kind in color.iter_mut() {
            for key in kind.iter_mut() {
                *key = rng.gen();
            }
        }
    }
    let side = rng.gen();
    let mut castling = [0u64; 16];
    for key in castling.iter_mut() {
        *key = rng.gen();
    }
    let mut ep_file = [0u64; 8];
    for key in ep_file.iter_mut() {
        *key = rng.gen();
    }
    Table {
        pieces,
        side,
        castling,
        ep_file,
    }
});

/// Key for a piece standing on a square.
#[inline]
pub fn piece(piece: Piece, square: Square) -> u64 {
    TABLE.pieces[piece.color as usize][piece.kind.index()][square.index()]
}

/// Key XORed in when black is to move.
#[inline]
pub fn side_to_move() -> u64 {
    TABLE.side
}

/// Key for a castling-rights bitmask (0..16).
#[inline]
pub fn castling(mask: u8) -> u64 {
    TABLE.castling[mask as usize & 0xf]
}

/// Key for the en-passant target file.
#[inline]
pub fn en_passant_file(file: u8) -> u64 {
    TABLE.ep_file[file as usize & 0x7]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::{Color, PieceKind};

    #[test]
    fn keys_are_stable() {
        let sq = Square::from_name("e4").unwrap();
        let p = Piece::new(Color::White, PieceKind::Rook);
        assert_eq!(piece(p, sq), piece(p, sq));
        assert_eq!(side_to_move(), side_to_move());
    }

    #[test]
    fn keys_distinguish_pieces_and_squares() {
        let e4 = Square::from_name("e4").unwrap();
        let d4 = Square::from_name("d4").unwrap();
        let wr = Piece::new(Color::White, PieceKind::Rook);
        let br = Piece::new(Color::Black, PieceKind::Rook);
        assert_ne!(piece(wr, e4), piece(wr, d4));
        assert_ne!(piece(wr, e4), piece(br, e4));
        assert_ne!(castling(0), castling(0xf));
    }
}
