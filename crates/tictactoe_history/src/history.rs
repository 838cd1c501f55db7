//! Move history: every board the game has passed through.

use super::{Board, Location, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One entry in the history: the board after a move and where it was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Board after the move.
    pub(crate) board: Board,
    /// Cell that was played; `None` for the starting record.
    pub(crate) position: Option<Position>,
}

impl MoveRecord {
    /// The record every game starts from: an empty board, no move.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            position: None,
        }
    }

    /// Record for a mark placed at `position`, producing `board`.
    pub fn new(board: Board, position: Position) -> Self {
        Self {
            board,
            position: Some(position),
        }
    }

    /// 1-indexed row/column of the move, absent for the starting record.
    pub fn location(&self) -> Option<Location> {
        self.position.map(Position::location)
    }

    /// Player whose mark was placed by this move.
    pub fn player(&self) -> Option<Player> {
        self.position.and_then(|pos| self.board.get(pos).player())
    }
}

/// Ordered, never-empty list of move records.
///
/// Index 0 always holds the empty starting board and index `n` the board
/// after `n` marks. Records are only ever dropped by
/// [`History::truncate_then_append`]. Serialized as a plain list of
/// records; deserializing checks that the list starts with
/// [`MoveRecord::start`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<MoveRecord>", into = "Vec<MoveRecord>")]
pub struct History {
    pub(crate) records: Vec<MoveRecord>,
}

impl History {
    /// History holding only the starting record.
    pub fn new() -> Self {
        Self {
            records: vec![MoveRecord::start()],
        }
    }

    /// Number of records, including the start.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the most recent record.
    pub fn last_index(&self) -> usize {
        self.records.len() - 1
    }

    /// Record at `index`.
    pub fn get(&self, index: usize) -> Option<&MoveRecord> {
        self.records.get(index)
    }

    /// All records in play order.
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Iterates over records in play order.
    pub fn iter(&self) -> std::slice::Iter<'_, MoveRecord> {
        self.records.iter()
    }

    /// Drops every record after `at`, then appends `record`.
    ///
    /// Returns the index of the appended record, which is always `at + 1`.
    #[instrument(skip(self, record), fields(len = self.records.len()))]
    pub fn truncate_then_append(&mut self, at: usize, record: MoveRecord) -> usize {
        let discarded = self.records.len().saturating_sub(at + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding later moves");
        }
        self.records.truncate(at + 1);
        self.records.push(record);
        self.last_index()
    }
}

/// Error rebuilding a [`History`] from a list of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// The list held no records at all.
    #[display("History must hold at least the starting record")]
    Empty,

    /// Record 0 was not the empty starting board.
    #[display("History must begin with the empty starting board")]
    MissingStart,
}

impl std::error::Error for HistoryError {}

impl TryFrom<Vec<MoveRecord>> for History {
    type Error = HistoryError;

    fn try_from(records: Vec<MoveRecord>) -> Result<Self, Self::Error> {
        match records.first() {
            None => Err(HistoryError::Empty),
            Some(first) if *first != MoveRecord::start() => Err(HistoryError::MissingStart),
            Some(_) => Ok(Self { records }),
        }
    }
}

impl From<History> for Vec<MoveRecord> {
    fn from(history: History) -> Self {
        history.records
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for History {
    type Output = MoveRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a MoveRecord;
    type IntoIter = std::slice::Iter<'a, MoveRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
