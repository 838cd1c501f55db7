//! Game engine with move history and time travel.
//!
//! The engine owns three pieces of state: the history of boards, a pointer
//! to the current move and the move-list sort order. Whose turn it is and
//! whether the game is over are always derived from the board at the
//! current move; neither is stored.

use super::action::MoveError;
use super::history::{History, MoveRecord};
use super::invariants;
use super::rules::{self, WinResult};
use super::snapshot::{Snapshot, SortOrder};
use super::{Board, GameStatus, Player, Position};
use tracing::{debug, info, instrument};

/// Tic-tac-toe engine with time travel.
///
/// Jumping back to an earlier move keeps the later moves around; they are
/// discarded only when a new move is played from the earlier position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) history: History,
    pub(crate) current_move: usize,
    pub(crate) sort_order: SortOrder,
}

impl GameEngine {
    /// Creates a new game with an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a new game whose move list is shown in `sort_order`.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: History::new(),
            current_move: 0,
            sort_order,
        }
    }

    /// Replays `positions` from an empty board.
    ///
    /// # Errors
    ///
    /// Returns the error of the first move that is refused.
    #[instrument(skip(positions), fields(moves = positions.len()))]
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        let mut engine = Self::new();
        for pos in positions {
            engine.place(*pos)?;
        }
        Ok(engine)
    }

    /// Full move history, including moves after the current one.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the move currently shown.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Order of the move list in snapshots.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Board at the current move.
    pub fn current_board(&self) -> &Board {
        self.history[self.current_move].board()
    }

    /// Player to move, derived from the current move index.
    pub fn to_move(&self) -> Player {
        Player::for_ply(self.current_move)
    }

    /// Completed line on the current board, if any.
    pub fn winner(&self) -> Option<WinResult> {
        rules::evaluate(self.current_board())
    }

    /// Status of the current board.
    pub fn status(&self) -> GameStatus {
        rules::status(self.current_board(), self.to_move())
    }

    /// Plays the cell at `index` (0-8, row-major) for the player to move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the current board already has a winner
    /// - [`MoveError::OutOfBounds`] if `index` is not a cell
    /// - [`MoveError::SquareOccupied`] if the cell is taken
    ///
    /// A refused move leaves the engine unchanged.
    #[instrument(skip(self), fields(current_move = self.current_move, player = %self.to_move()))]
    pub fn apply_move(&mut self, index: usize) -> Result<(), MoveError> {
        self.ensure_undecided()?;
        let pos = Position::from_index(index).ok_or_else(|| {
            debug!(index, "Rejected move off the board");
            MoveError::OutOfBounds(index)
        })?;
        self.place_unchecked(pos)
    }

    /// Plays `pos` for the player to move.
    ///
    /// # Errors
    ///
    /// Same as [`GameEngine::apply_move`], minus the bounds check.
    #[instrument(skip(self), fields(current_move = self.current_move, player = %self.to_move()))]
    pub fn place(&mut self, pos: Position) -> Result<(), MoveError> {
        self.ensure_undecided()?;
        self.place_unchecked(pos)
    }

    fn ensure_undecided(&self) -> Result<(), MoveError> {
        match self.winner() {
            Some(result) => {
                debug!(winner = %result.winner(), "Rejected move after game was decided");
                Err(MoveError::GameOver)
            }
            None => Ok(()),
        }
    }

    fn place_unchecked(&mut self, pos: Position) -> Result<(), MoveError> {
        let board = self.current_board();
        if !board.is_empty(pos) {
            debug!(position = %pos, "Rejected move on occupied square");
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.to_move();
        let record = MoveRecord::new(board.with_mark(pos, player), pos);
        self.current_move = self.history.truncate_then_append(self.current_move, record);
        info!(
            player = %player,
            position = %pos,
            location = %pos.location(),
            current_move = self.current_move,
            "Move played"
        );

        self.assert_invariants();
        Ok(())
    }

    /// Moves the cursor to history index `move_index`.
    ///
    /// Later records are kept, so jumping forward again is possible until a
    /// new move is played.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::HistoryOutOfRange`] if there is no such record.
    #[instrument(skip(self), fields(current_move = self.current_move, len = self.history.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), MoveError> {
        if move_index >= self.history.len() {
            debug!(move_index, "Rejected jump outside history");
            return Err(MoveError::HistoryOutOfRange {
                requested: move_index,
                len: self.history.len(),
            });
        }

        self.current_move = move_index;
        info!(current_move = move_index, "Jumped to move");
        self.assert_invariants();
        Ok(())
    }

    /// Flips the move-list order.
    #[instrument(skip(self), fields(sort_order = %self.sort_order))]
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggled();
        debug!(sort_order = %self.sort_order, "Sort order toggled");
    }

    /// Read-only view for renderers.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    /// Panics in debug builds if an engine invariant is broken.
    fn assert_invariants(&self) {
        let verified = invariants::verify(self);
        debug_assert!(verified.is_ok(), "{:?}", verified);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_first_move_is_x() {
        let mut engine = GameEngine::new();
        engine.apply_move(0).unwrap();
        assert_eq!(
            engine.current_board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
        assert_eq!(engine.to_move(), Player::O);
        assert_eq!(engine.current_move(), 1);
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.apply_move(9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(engine, GameEngine::new());
    }

    #[test]
    fn test_game_over_checked_before_bounds() {
        let mut engine = GameEngine::new();
        for cell in [0, 3, 1, 4, 2] {
            engine.apply_move(cell).unwrap();
        }
        assert_eq!(engine.apply_move(42), Err(MoveError::GameOver));
    }

    #[test]
    fn test_jump_forward_after_jump_back() {
        let mut engine = GameEngine::new();
        for cell in [0, 1, 2] {
            engine.apply_move(cell).unwrap();
        }
        engine.jump_to(0).unwrap();
        assert_eq!(engine.current_board(), &Board::new());
        engine.jump_to(3).unwrap();
        assert_eq!(engine.current_board().occupied_count(), 3);
        assert_eq!(engine.history().len(), 4);
    }

    #[test]
    fn test_toggle_sort_order_leaves_game_alone() {
        let mut engine = GameEngine::replay(&[Position::Center]).unwrap();
        let before = engine.clone();
        engine.toggle_sort_order();
        assert_eq!(engine.sort_order(), SortOrder::Descending);
        assert_eq!(engine.history(), before.history());
        assert_eq!(engine.current_move(), before.current_move());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "InvariantViolation")]
    fn test_broken_history_panics_on_next_jump() {
        let mut engine = GameEngine::replay(&[Position::Center]).unwrap();
        engine.history.records[1].board = Board::new();
        let _ = engine.jump_to(0);
    }
}
