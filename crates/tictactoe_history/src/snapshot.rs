//! Read-only view of an engine, shaped for renderers.
//!
//! A [`Snapshot`] holds everything a front-end needs to draw one frame:
//! the board, the status line, the move list in display order and the
//! winning cells. It owns its data, so it can outlive the engine call that
//! produced it or be serialized for a renderer in another process.

use super::{Board, GameEngine, GameStatus, Location, MoveRecord, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Display order of the move list.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// The other order.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Label for the sort button, naming the order it switches to.
    pub fn toggle_label(self) -> String {
        format!("Sort by: {}", self.toggled())
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveListEntry {
    /// Text shown for the entry.
    label: String,
    /// Absolute history index to pass to [`GameEngine::jump_to`].
    target: usize,
    /// Where the move was played; `None` for the game start.
    location: Option<Location>,
    /// True for the entry at the current move.
    is_current: bool,
}

impl MoveListEntry {
    fn new(target: usize, record: &MoveRecord, current_move: usize) -> Self {
        let location = record.location();
        let label = match location {
            Some(location) if target > 0 => format!("Go to move #{} ({})", target, location),
            _ => "Go to game start".to_string(),
        };
        Self {
            label,
            target,
            location,
            is_current: target == current_move,
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board at the current move.
    board: Board,
    /// Derived status of that board.
    status: GameStatus,
    /// Status line, e.g. `Next player: O`.
    status_text: String,
    /// Move list in the current sort order.
    moves: Vec<MoveListEntry>,
    /// Current history index.
    current_move: usize,
    /// Position indicator, e.g. `You are at the move # 3`.
    current_move_text: String,
    /// Cells to highlight when someone has won.
    winning_line: Option<[Position; 3]>,
    /// Order of `moves`.
    sort_order: SortOrder,
    /// Label for the sort toggle.
    sort_toggle_label: String,
}

impl Snapshot {
    /// Captures the engine's current state.
    #[instrument(skip(engine), fields(current_move = engine.current_move()))]
    pub fn capture(engine: &GameEngine) -> Self {
        let current_move = engine.current_move();
        let status = engine.status();
        let sort_order = engine.sort_order();

        let mut moves: Vec<MoveListEntry> = engine
            .history()
            .iter()
            .enumerate()
            .map(|(target, record)| MoveListEntry::new(target, record, current_move))
            .collect();
        if sort_order == SortOrder::Descending {
            moves.reverse();
        }

        Self {
            board: *engine.current_board(),
            status_text: status.to_string(),
            winning_line: status.win().map(|result| result.line()),
            status,
            moves,
            current_move,
            current_move_text: format!("You are at the move # {}", current_move),
            sort_order,
            sort_toggle_label: sort_order.toggle_label(),
        }
    }

    /// Returns true if `pos` belongs to the winning line.
    pub fn is_winning_square(&self, pos: Position) -> bool {
        self.winning_line
            .is_some_and(|line| line.contains(&pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_sort_order_toggle_label() {
        assert_eq!(SortOrder::Ascending.toggle_label(), "Sort by: Descending");
        assert_eq!(SortOrder::Descending.toggle_label(), "Sort by: Ascending");
        assert_eq!(SortOrder::Ascending.toggled().toggled(), SortOrder::Ascending);
    }

    #[test]
    fn test_sort_order_parses_case_insensitively() {
        assert_eq!(SortOrder::from_str("descending"), Ok(SortOrder::Descending));
        assert_eq!(SortOrder::from_str("Ascending"), Ok(SortOrder::Ascending));
        assert!(SortOrder::from_str("sideways").is_err());
    }

    #[test]
    fn test_new_game_snapshot() {
        let snapshot = GameEngine::new().snapshot();
        assert_eq!(snapshot.status_text(), "Next player: X");
        assert_eq!(snapshot.current_move_text(), "You are at the move # 0");
        assert_eq!(snapshot.moves().len(), 1);
        assert_eq!(snapshot.moves()[0].label(), "Go to game start");
        assert!(*snapshot.moves()[0].is_current());
        assert_eq!(*snapshot.winning_line(), None);
    }

    #[test]
    fn test_labels_carry_one_indexed_location() {
        let mut engine = GameEngine::new();
        engine.apply_move(5).unwrap();
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.moves()[1].label(), "Go to move #1 (row 2, col 3)");
        assert_eq!(
            *snapshot.moves()[1].location(),
            Some(Location { row: 2, col: 3 })
        );
    }
}
