//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according to
//! tic-tac-toe rules. Nothing here is cached: the engine calls into these
//! rules every time it needs a status.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::{is_draw, is_full};
pub use status::status;
pub use win::{LINES, WinResult, evaluate};
