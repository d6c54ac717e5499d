//! Connect 383 game model: a column-drop board that plays until full, where
//! every run of three or more pieces scores its length squared.

mod board;
mod counter;
mod player;
mod state;

pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS, MAX_DIMENSION, MIN_STREAK};
pub use counter::StateCounter;
pub use player::Player;
pub use state::{GameState, MoveError};
