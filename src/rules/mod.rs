//! Game rules: line consolidation and terminal-state detection.
//!
//! These are pure functions over `Board` values. The engine in
//! `crate::game` applies them; players may call them too when scoring
//! candidate moves.

pub mod consolidate;
pub mod status;

pub use consolidate::consolidate;
pub use status::{evaluate, is_loss, is_win, GameStatus};
