//! Core Connect Four game logic: position representation, heuristic
//! evaluation, player types, and a driver-side game record.

mod board;
pub mod evaluation;
mod player;
mod state;

pub use board::{Cell, Position, CENTER_COL, COLS, ROWS};
pub use player::Player;
pub use state::{Game, GameOutcome};
