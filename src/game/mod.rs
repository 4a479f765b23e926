//! Core Connect Four game logic: the board rules engine, player types, and the
//! turn-keeping game that drives it.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, Position, DEFAULT_COLUMNS, DEFAULT_ROWS, WIN_LENGTH};
pub use player::Player;
pub use state::{Game, GameOutcome, MoveResult};
