//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules only ever look at a board
//! value; they hold no state of their own.

pub mod draw;
pub mod legal;
pub mod win;

pub use draw::{is_draw, is_full};
pub use legal::{check_move, is_move_legal};
pub use win::{LINES, WinResult, evaluate_winner};
