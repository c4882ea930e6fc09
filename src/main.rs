//! Rookmate -- a two-rooks-versus-king endgame engine.
//!
//! This binary reads commands from stdin and writes responses to stdout,
//! following a UCI-style convention.

use std::io::{self, BufRead};

use rookmate::engine::Engine;
use rookmate::protocol::parser::{parse_command, Command, PositionSpec};

/// Runs the main protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Uci => {
                engine.handle_uci(&mut out);
            }
            Command::IsReady => {
                engine.handle_isready(&mut out);
            }
            Command::SetOption { name, value } => {
                engine.set_option(name, value);
            }
            Command::NewGame => {
                engine.new_game();
            }
            Command::Position(spec) => match spec {
                PositionSpec::Startpos => engine.set_position_startpos(),
                PositionSpec::Fen(fen) => {
                    if let Err(e) = engine.set_position_fen(&fen) {
                        eprintln!("{}", e);
                    }
                }
                PositionSpec::Random { seed } => engine.set_position_random(seed),
            },
            Command::SetSide(side) => {
                engine.set_side(side);
            }
            Command::Play { mv } => {
                engine.handle_play(&mv, &mut out);
            }
            Command::Go(params) => {
                engine.handle_go(&params, &mut out);
            }
            Command::Quit => {
                break;
            }
        }
    }
}
