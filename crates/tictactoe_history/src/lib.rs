//! Tic-tac-toe with move history and time travel.
//!
//! The crate is the game-state core behind a tic-tac-toe front-end. A
//! front-end owns a [`GameEngine`], forwards user input to it and redraws
//! from [`GameEngine::snapshot`] after every call.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw/status evaluation of a [`Board`]
//! - **History**: every board the game passed through, truncated when a new
//!   move is played from an earlier point
//! - **Engine**: move application, history navigation and sort order
//! - **Snapshot**: the read-only view a renderer draws from
//!
//! # Example
//!
//! ```
//! use tictactoe_history::GameEngine;
//!
//! let mut engine = GameEngine::new();
//! engine.apply_move(4).unwrap();
//! engine.apply_move(0).unwrap();
//! engine.jump_to(1).unwrap();
//! engine.apply_move(8).unwrap();
//!
//! let snapshot = engine.snapshot();
//! assert_eq!(snapshot.status_text(), "Next player: X");
//! assert_eq!(snapshot.moves().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod snapshot;
mod types;

pub use action::MoveError;
pub use engine::GameEngine;
pub use history::{History, HistoryError, MoveRecord};
pub use position::{Location, Position};
pub use rules::WinResult;
pub use snapshot::{MoveListEntry, Snapshot, SortOrder};
pub use types::{Board, BoardParseError, GameStatus, Player, Square};
