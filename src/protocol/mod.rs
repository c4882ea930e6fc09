//! Protocol handling.
//!
//! This module implements the text protocol the engine speaks over
//! stdin/stdout: FEN position encoding and the command parser for the
//! main loop.

pub mod fen;
pub mod parser;

pub use fen::{format_fen, parse_fen, FenError, STARTING_FEN};
pub use parser::{parse_command, Command, GoParams, PositionSpec};
