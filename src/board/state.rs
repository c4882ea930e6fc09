//! Game state representation.
//!
//! Holds the complete snapshot of a chess game at a given point in time:
//! piece placement, side to move, castling rights, en-passant target, move
//! clocks, plus an undo stack and a hash history for repetition detection.
//!
//! `make_move` / `unmake_move` are exact inverses: every field, including
//! the hash history, is restored when a move is taken back. Search relies
//! on this to explore the tree on a single shared state.

use super::mov::Move;
use super::piece::{Color, Piece, PieceKind};
use super::square::Square;
use super::zobrist;

/// Castling rights as a 4-bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const WHITE_KINGSIDE: u8 = 0b0001;
    pub const WHITE_QUEENSIDE: u8 = 0b0010;
    pub const BLACK_KINGSIDE: u8 = 0b0100;
    pub const BLACK_QUEENSIDE: u8 = 0b1000;

    /// No castling allowed for either side.
    pub const fn none() -> CastlingRights {
        CastlingRights(0)
    }

    /// All four castling rights.
    pub const fn all() -> CastlingRights {
        CastlingRights(0b1111)
    }

    /// Creates rights from a raw 4-bit mask.
    pub const fn from_mask(mask: u8) -> CastlingRights {
        CastlingRights(mask & 0b1111)
    }

    /// Raw 4-bit mask, used for hashing and FEN output.
    pub const fn mask(self) -> u8 {
        self.0
    }

    /// True if every right in `flags` is still held.
    pub const fn allows(self, flags: u8) -> bool {
        self.0 & flags == flags
    }

    /// Removes the given rights.
    pub fn revoke(&mut self, flags: u8) {
        self.0 &= !flags;
    }
}

/// Everything needed to take back one move.
#[derive(Debug, Clone, Copy)]
struct Undo {
    mv: Move,
    moved: Piece,
    /// Captured piece and the square it stood on (differs from the move
    /// destination for en-passant captures).
    captured: Option<(Square, Piece)>,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u16,
    fullmove_number: u16,
}

/// Complete board state at a point in time.
///
/// The position fields are public; the undo stack and hash history are
/// private so their pairing invariants cannot be broken from outside.
#[derive(Debug, Clone)]
pub struct BoardState {
    /// Piece at each square, indexed by `Square::index()`.
    pub squares: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    /// En-passant target square, set only immediately after a double push.
    pub en_passant: Option<Square>,
    /// Halfmoves since the last pawn move or capture.
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
    undo_stack: Vec<Undo>,
    /// Position hash after every move since construction, current last.
    hash_history: Vec<u64>,
}

impl PartialEq for BoardState {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares
            && self.side_to_move == other.side_to_move
            && self.castling == other.castling
            && self.en_passant == other.en_passant
            && self.halfmove_clock == other.halfmove_clock
            && self.fullmove_number == other.fullmove_number
    }
}

impl Eq for BoardState {}

impl BoardState {
    /// Creates a state from its position fields and seeds the hash history.
    pub fn new(
        squares: [Option<Piece>; 64],
        side_to_move: Color,
        castling: CastlingRights,
        en_passant: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> BoardState {
        let mut state = BoardState {
            squares,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            undo_stack: Vec::new(),
            hash_history: Vec::new(),
        };
        state.hash_history.push(state.compute_hash());
        state
    }

    /// Returns the piece standing on a square, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    /// Locates the king of the given color.
    pub fn king(&self, color: Color) -> Option<Square> {
        for i in 0..64 {
            if let Some(p) = self.squares[i] {
                if p.color == color && p.kind == PieceKind::King {
                    return Some(Square::from_index(i));
                }
            }
        }
        None
    }

    /// Zobrist hash of the current position.
    pub fn hash(&self) -> u64 {
        *self
            .hash_history
            .last()
            .expect("hash history is seeded at construction")
    }

    fn compute_hash(&self) -> u64 {
        let mut h = 0u64;
        for i in 0..64 {
            if let Some(p) = self.squares[i] {
                h ^= zobrist::piece(p, Square::from_index(i));
            }
        }
        if self.side_to_move == Color::Black {
            h ^= zobrist::side_to_move();
        }
        h ^= zobrist::castling(self.castling.mask());
        if let Some(ep) = self.en_passant {
            h ^= zobrist::en_passant_file(ep.file());
        }
        h
    }

    /// Applies a move. The move must come from the legal-move enumeration
    /// for the current position; applying anything else corrupts the state.
    pub fn make_move(&mut self, mv: Move) {
        let moved = self.squares[mv.from.index()]
            .expect("make_move: no piece on the source square");
        let mut undo = Undo {
            mv,
            moved,
            captured: None,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        };

        // Identify the captured piece, which for en passant does not stand
        // on the destination square.
        if let Some(victim) = self.squares[mv.to.index()] {
            undo.captured = Some((mv.to, victim));
        } else if moved.kind == PieceKind::Pawn && Some(mv.to) == self.en_passant {
            let back = if moved.color == Color::White { -1 } else { 1 };
            let victim_sq = mv
                .to
                .offset(0, back)
                .expect("en-passant victim square is on the board");
            if let Some(victim) = self.squares[victim_sq.index()] {
                undo.captured = Some((victim_sq, victim));
            }
        }
        if let Some((sq, _)) = undo.captured {
            self.squares[sq.index()] = None;
        }

        // Move the piece, materializing a promotion if present.
        self.squares[mv.from.index()] = None;
        let placed = match mv.promotion {
            Some(kind) => Piece::new(moved.color, kind),
            None => moved,
        };
        self.squares[mv.to.index()] = Some(placed);

        // Castling is encoded as the two-square king move; hop the rook.
        if moved.kind == PieceKind::King && mv.from.file().abs_diff(mv.to.file()) == 2 {
            let rank = mv.from.rank();
            let (rook_from, rook_to) = if mv.to.file() == 6 {
                (Square::new(7, rank), Square::new(5, rank))
            } else {
                (Square::new(0, rank), Square::new(3, rank))
            };
            self.squares[rook_to.index()] = self.squares[rook_from.index()].take();
        }

        // Rights: a king move loses both; a rook leaving or being captured
        // on its corner loses that side.
        if moved.kind == PieceKind::King {
            let flags = match moved.color {
                Color::White => {
                    CastlingRights::WHITE_KINGSIDE | CastlingRights::WHITE_QUEENSIDE
                }
                Color::Black => {
                    CastlingRights::BLACK_KINGSIDE | CastlingRights::BLACK_QUEENSIDE
                }
            };
            self.castling.revoke(flags);
        }
        self.revoke_rights_for(mv.from);
        self.revoke_rights_for(mv.to);

        self.en_passant = if moved.kind == PieceKind::Pawn
            && mv.from.rank().abs_diff(mv.to.rank()) == 2
        {
            let up = if moved.color == Color::White { 1 } else { -1 };
            mv.from.offset(0, up)
        } else {
            None
        };

        if moved.kind == PieceKind::Pawn || undo.captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.opponent();

        self.undo_stack.push(undo);
        self.hash_history.push(self.compute_hash());
    }

    /// Takes back the most recently applied move, restoring the prior
    /// state exactly.
    pub fn unmake_move(&mut self) {
        let undo = self
            .undo_stack
            .pop()
            .expect("unmake_move: no move to undo");
        self.hash_history.pop();

        self.side_to_move = self.side_to_move.opponent();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        let mv = undo.mv;
        self.squares[mv.to.index()] = None;
        self.squares[mv.from.index()] = Some(undo.moved);

        if undo.moved.kind == PieceKind::King && mv.from.file().abs_diff(mv.to.file()) == 2 {
            let rank = mv.from.rank();
            let (rook_from, rook_to) = if mv.to.file() == 6 {
                (Square::new(7, rank), Square::new(5, rank))
            } else {
                (Square::new(0, rank), Square::new(3, rank))
            };
            self.squares[rook_from.index()] = self.squares[rook_to.index()].take();
        }

        if let Some((sq, victim)) = undo.captured {
            self.squares[sq.index()] = Some(victim);
        }
    }

    fn revoke_rights_for(&mut self, square: Square) {
        let flags = match square.index() {
            0 => CastlingRights::WHITE_QUEENSIDE,
            7 => CastlingRights::WHITE_KINGSIDE,
            56 => CastlingRights::BLACK_QUEENSIDE,
            63 => CastlingRights::BLACK_KINGSIDE,
            _ => return,
        };
        self.castling.revoke(flags);
    }

    /// True if the current position has occurred at least three times
    /// since construction.
    pub fn is_repetition(&self) -> bool {
        let current = self.hash();
        self.hash_history.iter().filter(|&&h| h == current).count() >= 3
    }

    /// True if neither side retains enough material to deliver mate:
    /// bare kings, a single minor piece, or same-colored bishops only.
    pub fn insufficient_material(&self) -> bool {
        let mut minors: Vec<(PieceKind, Square)> = Vec::new();
        for i in 0..64 {
            if let Some(p) = self.squares[i] {
                match p.kind {
                    PieceKind::King => {}
                    PieceKind::Knight | PieceKind::Bishop => {
                        minors.push((p.kind, Square::from_index(i)));
                    }
                    // A pawn, rook, or queen is always enough to mate with.
                    _ => return false,
                }
            }
        }
        match minors.len() {
            0 | 1 => true,
            _ => {
                let square_color = |sq: Square| (sq.file() + sq.rank()) % 2;
                minors.iter().all(|&(kind, _)| kind == PieceKind::Bishop)
                    && minors
                        .iter()
                        .all(|&(_, sq)| square_color(sq) == square_color(minors[0].1))
            }
        }
    }
}
