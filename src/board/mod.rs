//! Board representation and game-state types.
//!
//! Contains the core data structures for squares, pieces, moves, castling
//! rights, and the overall game state with its apply/undo machinery.

pub mod mov;
pub mod piece;
pub mod square;
pub mod state;
pub mod zobrist;

pub use mov::{Move, MoveParseError};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
pub use state::{BoardState, CastlingRights};
