//! Command parser.
//!
//! Parses incoming protocol commands from raw text into structured
//! `Command` variants that the engine main loop can dispatch on.

use crate::board::Color;

/// Search constraints passed with the `go` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    pub depth: Option<u32>,
}

/// How the `position` command specifies the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionSpec {
    /// The standard chess starting position.
    Startpos,

    /// An explicit FEN string.
    Fen(String),

    /// A randomly generated two-rooks-versus-king setup. A seed makes
    /// the draw reproducible.
    Random { seed: Option<u64> },
}

/// A parsed server-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Initialize the protocol handshake.
    Uci,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Reset engine state for a new game.
    NewGame,

    /// Set the board position.
    Position(PositionSpec),

    /// Set the side the engine searches for.
    SetSide(Color),

    /// Apply a move, in coordinate notation, for the opposing side.
    Play { mv: String },

    /// Begin calculating a move with optional search constraints.
    Go(GoParams),

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "uci" => Some(Command::Uci),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "newgame" => Some(Command::NewGame),

        "setoption" => parse_setoption(&tokens),
        "position" => parse_position(&tokens),
        "setside" => parse_setside(&tokens),
        "play" => parse_play(&tokens),
        "go" => parse_go(&tokens),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    // Minimum: setoption name <id>
    if tokens.len() < 3 || tokens[1] != "name" {
        eprintln!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    // Find the "value" keyword to split name from value.
    // The name can be multi-word in theory (UCI allows it), but we keep it simple.
    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                eprintln!("malformed setoption: empty name");
                return None;
            }
            let name = name_parts.join(" ");
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name, value)
        }
        None => {
            let name = tokens[2..].join(" ");
            (name, None)
        }
    };

    Some(Command::SetOption { name, value })
}

/// Parses `position startpos`, `position fen <fen>`, or
/// `position random [seed <n>]`.
fn parse_position(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed position: expected 'position startpos|fen <fen>|random [seed <n>]'");
        return None;
    }
    match tokens[1] {
        "startpos" => Some(Command::Position(PositionSpec::Startpos)),
        "fen" => {
            // FEN itself contains spaces; take everything after the keyword.
            if tokens.len() < 3 {
                eprintln!("malformed position: missing fen string");
                return None;
            }
            Some(Command::Position(PositionSpec::Fen(tokens[2..].join(" "))))
        }
        "random" => {
            let seed = match tokens.get(2) {
                Some(&"seed") => match tokens.get(3).map(|t| t.parse::<u64>()) {
                    Some(Ok(seed)) => Some(seed),
                    _ => {
                        eprintln!("malformed position: expected 'seed <n>'");
                        return None;
                    }
                },
                Some(other) => {
                    eprintln!("unknown position parameter: '{}'", other);
                    return None;
                }
                None => None,
            };
            Some(Command::Position(PositionSpec::Random { seed }))
        }
        other => {
            eprintln!("unknown position kind: '{}'", other);
            None
        }
    }
}

/// Parses `setside white|black`.
fn parse_setside(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed setside: expected 'setside white|black'");
        return None;
    }
    match tokens[1] {
        "white" => Some(Command::SetSide(Color::White)),
        "black" => Some(Command::SetSide(Color::Black)),
        other => {
            eprintln!("unknown side: '{}'", other);
            None
        }
    }
}

/// Parses `play <move>`.
fn parse_play(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed play: expected 'play <move>'");
        return None;
    }
    Some(Command::Play {
        mv: tokens[1].to_string(),
    })
}

/// Parses `go [depth <n>]`.
fn parse_go(tokens: &[&str]) -> Option<Command> {
    let mut params = GoParams::default();
    let mut i = 1;

    while i < tokens.len() {
        match tokens[i] {
            "depth" => {
                i += 1;
                if i < tokens.len() {
                    match tokens[i].parse::<u32>() {
                        Ok(v) => params.depth = Some(v),
                        Err(_) => {
                            eprintln!("invalid depth value: '{}'", tokens[i]);
                        }
                    }
                }
            }
            other => {
                eprintln!("unknown go parameter: '{}'", other);
            }
        }
        i += 1;
    }

    Some(Command::Go(params))
}
