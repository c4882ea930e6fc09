//! Engine state management.
//!
//! Holds the current board position, the side the engine plays, and the
//! engine options, and runs the alpha-beta search for the `go` command.

use std::collections::HashMap;
use std::io::Write;
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::{BoardState, Color, Move};
use crate::movegen::{legal_moves, random_endgame, terminal, Terminal};
use crate::protocol::fen::{parse_fen, STARTING_FEN};
use crate::protocol::parser::GoParams;
use crate::search::alpha_beta;

/// Default search depth in plies.
const DEFAULT_DEPTH: u32 = 4;

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub position: Option<BoardState>,
    /// The side the engine searches and plays for.
    pub engine_side: Color,
    pub options: HashMap<String, String>,
    rng: SmallRng,
}

impl Engine {
    /// Creates a new engine with no position, playing white by default.
    pub fn new() -> Self {
        Engine {
            position: None,
            engine_side: Color::White,
            options: HashMap::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Resets all engine state for a new game.
    pub fn new_game(&mut self) {
        self.position = None;
        self.engine_side = Color::White;
    }

    /// Sets the current board position from a FEN string.
    /// Returns an error message on failure.
    pub fn set_position_fen(&mut self, fen: &str) -> Result<(), String> {
        match parse_fen(fen) {
            Ok(state) => {
                self.position = Some(state);
                Ok(())
            }
            Err(e) => Err(format!("failed to parse FEN: {}", e)),
        }
    }

    /// Sets the standard chess starting position.
    pub fn set_position_startpos(&mut self) {
        // The constant is known-good; routing it through the parser keeps
        // a single construction path.
        if let Err(e) = self.set_position_fen(STARTING_FEN) {
            eprintln!("{}", e);
        }
    }

    /// Sets a randomly drawn two-rooks-versus-king position. A seed makes
    /// the draw reproducible; without one the engine's own RNG is used.
    pub fn set_position_random(&mut self, seed: Option<u64>) {
        let state = match seed {
            Some(seed) => random_endgame(&mut SmallRng::seed_from_u64(seed)),
            None => random_endgame(&mut self.rng),
        };
        self.position = Some(state);
    }

    /// Sets the side the engine plays.
    pub fn set_side(&mut self, side: Color) {
        self.engine_side = side;
    }

    /// Sets an engine option.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        match value {
            Some(v) => {
                self.options.insert(name, v);
            }
            None => {
                self.options.insert(name, String::new());
            }
        }
    }

    /// Returns the configured search depth from options, or the default.
    fn depth(&self) -> u32 {
        self.options
            .get("Depth")
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|d| (1..=8).contains(d))
            .unwrap_or(DEFAULT_DEPTH)
    }

    /// Handles the protocol handshake: writes id, options, and uciok.
    pub fn handle_uci<W: Write>(&self, out: &mut W) {
        writeln!(out, "id name rookmate").unwrap();
        writeln!(out, "id author rookmate contributors").unwrap();
        writeln!(out, "option name Depth type spin default 4 min 1 max 8").unwrap();
        writeln!(out, "uciok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) {
        writeln!(out, "readyok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `play` command: applies a move for either side after
    /// checking it is legal in the current position.
    pub fn handle_play<W: Write>(&mut self, mv: &str, out: &mut W) {
        let state = match self.position.as_mut() {
            Some(s) => s,
            None => {
                eprintln!("play: no position set");
                return;
            }
        };

        if let Some(term) = terminal(state) {
            eprintln!("play: game is already over");
            write_outcome(term, state.side_to_move, out);
            out.flush().unwrap();
            return;
        }

        let mv = match Move::from_uci(mv) {
            Ok(mv) => mv,
            Err(e) => {
                eprintln!("play: {}", e);
                return;
            }
        };
        if !legal_moves(state).contains(&mv) {
            eprintln!("play: illegal move '{}'", mv);
            return;
        }

        state.make_move(mv);
        if let Some(term) = terminal(state) {
            write_outcome(term, state.side_to_move, out);
            out.flush().unwrap();
        }
    }

    /// Handles the `go` command: searches the current position for the
    /// engine's side and plays the best move found.
    pub fn handle_go<W: Write>(&mut self, params: &GoParams, out: &mut W) {
        let depth = params.depth.unwrap_or_else(|| self.depth());
        let engine_side = self.engine_side;

        let state = match self.position.as_mut() {
            Some(s) => s,
            None => {
                eprintln!("go: no position set");
                return;
            }
        };

        if let Some(term) = terminal(state) {
            write_outcome(term, state.side_to_move, out);
            out.flush().unwrap();
            return;
        }
        if state.side_to_move != engine_side {
            eprintln!("go: it is not the engine's turn");
            return;
        }

        let started = Instant::now();
        let result = alpha_beta(state, engine_side, depth);
        let elapsed = started.elapsed().as_millis();

        let best = match result.best_move {
            Some(mv) => mv,
            None => {
                // Unreachable given the terminal check above.
                eprintln!("go: search found no move");
                return;
            }
        };

        writeln!(
            out,
            "info depth {} score {} nodes {} time {}",
            depth, result.score, result.nodes, elapsed
        )
        .unwrap();
        writeln!(out, "bestmove {}", best).unwrap();

        state.make_move(best);
        if let Some(term) = terminal(state) {
            write_outcome(term, state.side_to_move, out);
        }
        out.flush().unwrap();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

/// Writes the game-over line for a terminal position. `to_move` is the
/// side to move in that position, which under checkmate is the loser.
fn write_outcome<W: Write>(term: Terminal, to_move: Color, out: &mut W) {
    match term {
        Terminal::Checkmate => {
            let winner = match to_move.opponent() {
                Color::White => "white",
                Color::Black => "black",
            };
            writeln!(out, "gameover checkmate {}", winner).unwrap();
        }
        Terminal::Stalemate => writeln!(out, "gameover stalemate").unwrap(),
        Terminal::InsufficientMaterial => {
            writeln!(out, "gameover draw insufficient_material").unwrap()
        }
        Terminal::Repetition => writeln!(out, "gameover draw repetition").unwrap(),
    }
}
