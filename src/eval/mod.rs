//! Position evaluation.
//!
//! Scores a board position from the attacking side's perspective,
//! rewarding positions that drive the defending king toward the edge.

pub mod heuristic;

pub use heuristic::{evaluate, CHECKMATE_SCORE, STALEMATE_SCORE};
