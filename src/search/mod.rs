//! Game tree search.
//!
//! Explores the move tree to a fixed depth to find the attacker's best
//! move: minimax with alpha-beta pruning as the production search, plus
//! an unpruned reference the differential tests compare it against.

pub mod alpha_beta;
pub mod minimax;

pub use alpha_beta::{alpha_beta, SearchResult};
pub use minimax::minimax;
