//! Terminal front-end for the time-travel tic-tac-toe engine.
//!
//! The front-end is a thin presentation layer: it turns key presses into
//! engine calls and redraws from the engine's snapshot after each one.
//! Refused moves are ignored silently, like a click on a filled square.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod ui;

pub use app::{App, Focus};
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use input::{Action, Direction};
