//! FEN position encoding.
//!
//! Parses and serializes Forsyth-Edwards Notation, the six-field text
//! form the `position` command uses to transfer a board state.

use thiserror::Error;

use crate::board::{BoardState, CastlingRights, Color, Piece, PieceKind, Square};

/// FEN for the standard chess starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Errors produced while parsing a FEN string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("expected 6 fields, found {0}")]
    WrongFieldCount(usize),

    #[error("expected 8 ranks, found {0}")]
    WrongRankCount(usize),

    #[error("rank '{0}' does not describe 8 files")]
    BadRankWidth(String),

    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),

    #[error("invalid side to move '{0}'")]
    InvalidSide(String),

    #[error("invalid castling field '{0}'")]
    InvalidCastling(String),

    #[error("invalid en-passant field '{0}'")]
    InvalidEnPassant(String),

    #[error("invalid clock field '{0}'")]
    InvalidClock(String),

    #[error("side {0:?} must have exactly one king, found {1}")]
    BadKingCount(Color, usize),
}

/// Parses a FEN string into a board state.
pub fn parse_fen(fen: &str) -> Result<BoardState, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(FenError::WrongFieldCount(fields.len()));
    }

    let squares = parse_placement(fields[0])?;

    let side_to_move = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(FenError::InvalidSide(other.to_string())),
    };

    let castling = parse_castling(fields[2])?;

    let en_passant = match fields[3] {
        "-" => None,
        name => Some(
            Square::from_name(name)
                .ok_or_else(|| FenError::InvalidEnPassant(name.to_string()))?,
        ),
    };

    let halfmove_clock = fields[4]
        .parse::<u16>()
        .map_err(|_| FenError::InvalidClock(fields[4].to_string()))?;
    let fullmove_number = fields[5]
        .parse::<u16>()
        .map_err(|_| FenError::InvalidClock(fields[5].to_string()))?;

    for color in [Color::White, Color::Black] {
        let kings = squares
            .iter()
            .flatten()
            .filter(|p| p.color == color && p.kind == PieceKind::King)
            .count();
        if kings != 1 {
            return Err(FenError::BadKingCount(color, kings));
        }
    }

    Ok(BoardState::new(
        squares,
        side_to_move,
        castling,
        en_passant,
        halfmove_clock,
        fullmove_number,
    ))
}

/// Serializes a board state back into FEN.
pub fn format_fen(state: &BoardState) -> String {
    let mut out = String::new();

    for rank in (0..8).rev() {
        let mut empty = 0;
        for file in 0..8 {
            match state.piece_at(Square::new(file, rank)) {
                Some(piece) => {
                    if empty > 0 {
                        out.push(char::from(b'0' + empty));
                        empty = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push(char::from(b'0' + empty));
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(state.side_to_move.fen_char());

    out.push(' ');
    let rights = [
        (CastlingRights::WHITE_KINGSIDE, 'K'),
        (CastlingRights::WHITE_QUEENSIDE, 'Q'),
        (CastlingRights::BLACK_KINGSIDE, 'k'),
        (CastlingRights::BLACK_QUEENSIDE, 'q'),
    ];
    if state.castling == CastlingRights::none() {
        out.push('-');
    } else {
        for (right, ch) in rights {
            if state.castling.allows(right) {
                out.push(ch);
            }
        }
    }

    out.push(' ');
    match state.en_passant {
        Some(sq) => out.push_str(&sq.name()),
        None => out.push('-'),
    }

    out.push_str(&format!(
        " {} {}",
        state.halfmove_clock, state.fullmove_number
    ));
    out
}

fn parse_placement(field: &str) -> Result<[Option<Piece>; 64], FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount(ranks.len()));
    }

    let mut squares = [None; 64];
    for (row, rank_str) in ranks.iter().enumerate() {
        // FEN lists rank 8 first.
        let rank = 7 - row as u8;
        let mut file = 0u8;
        for ch in rank_str.chars() {
            if let Some(skip) = ch.to_digit(10) {
                file += skip as u8;
            } else {
                let piece =
                    Piece::from_fen_char(ch).ok_or(FenError::InvalidPiece(ch))?;
                if file >= 8 {
                    return Err(FenError::BadRankWidth(rank_str.to_string()));
                }
                squares[Square::new(file, rank).index()] = Some(piece);
                file += 1;
            }
        }
        if file != 8 {
            return Err(FenError::BadRankWidth(rank_str.to_string()));
        }
    }
    Ok(squares)
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    if field == "-" {
        return Ok(CastlingRights::none());
    }
    let mut mask = 0;
    for ch in field.chars() {
        mask |= match ch {
            'K' => CastlingRights::WHITE_KINGSIDE,
            'Q' => CastlingRights::WHITE_QUEENSIDE,
            'k' => CastlingRights::BLACK_KINGSIDE,
            'q' => CastlingRights::BLACK_QUEENSIDE,
            _ => return Err(FenError::InvalidCastling(field.to_string())),
        };
    }
    Ok(CastlingRights::from_mask(mask))
}
