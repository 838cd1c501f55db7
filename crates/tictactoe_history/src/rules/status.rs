//! Status derivation: in progress, won or drawn.

use super::super::{Board, GameStatus, Player};
use super::{draw, win};
use tracing::instrument;

/// Derives the status of `board` when `next` is the player to move.
///
/// A completed line takes precedence over a full board.
#[instrument(skip(board))]
pub fn status(board: &Board, next: Player) -> GameStatus {
    if let Some(result) = win::evaluate(board) {
        GameStatus::Won(result)
    } else if draw::is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress { next }
    }
}
