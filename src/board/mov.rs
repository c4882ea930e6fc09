//! Moves in UCI coordinate notation.
//!
//! A move is a source square, a destination square, and an optional
//! promotion piece. The text form is the UCI convention: `e2e4`, `e7e8q`.

use thiserror::Error;

use super::piece::PieceKind;
use super::square::Square;

/// Errors that can occur when parsing a move string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("move string must be 4 or 5 characters, got '{0}'")]
    WrongLength(String),

    #[error("invalid square in move: '{0}'")]
    InvalidSquare(String),

    #[error("invalid promotion piece: '{0}'")]
    InvalidPromotion(char),
}

/// A move from one square to another, with an optional promotion.
///
/// Moves carry no legality information of their own; only the move
/// generator decides whether a move is playable in a given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// Creates a plain move with no promotion.
    pub const fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Creates a promotion move.
    pub const fn promoting(from: Square, to: Square, kind: PieceKind) -> Move {
        Move {
            from,
            to,
            promotion: Some(kind),
        }
    }

    /// Formats the move in UCI coordinate notation.
    pub fn to_uci(self) -> String {
        match self.promotion {
            Some(kind) => format!("{}{}{}", self.from, self.to, kind.letter()),
            None => format!("{}{}", self.from, self.to),
        }
    }

    /// Parses a move from UCI coordinate notation.
    pub fn from_uci(s: &str) -> Result<Move, MoveParseError> {
        if s.len() != 4 && s.len() != 5 {
            return Err(MoveParseError::WrongLength(s.to_string()));
        }
        let from = Square::from_name(&s[0..2])
            .ok_or_else(|| MoveParseError::InvalidSquare(s[0..2].to_string()))?;
        let to = Square::from_name(&s[2..4])
            .ok_or_else(|| MoveParseError::InvalidSquare(s[2..4].to_string()))?;
        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => match PieceKind::from_letter(c) {
                Some(kind) if kind != PieceKind::Pawn && kind != PieceKind::King => Some(kind),
                _ => return Err(MoveParseError::InvalidPromotion(c)),
            },
        };
        Ok(Move {
            from,
            to,
            promotion,
        })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}
