//! Core Connect Four game logic: board representation, player types, the
//! game state machine with copy-on-write transitions, and win detection.

mod board;
mod player;
mod state;
mod win;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, GameStatus, Placement};
pub use win::{check_winner, winning_line, AXES, CONNECT};
