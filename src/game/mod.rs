//! The 2048 engine: board state, moves, scoring and tile spawns.

mod engine;

pub use engine::{Game, MoveOutcome};
