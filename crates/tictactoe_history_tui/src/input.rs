//! Key bindings and cursor movement.

use crossterm::event::KeyCode;
use tictactoe_history::Position;

/// Direction of an arrow key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum Direction {
    /// Towards the top row / start of the list.
    Up,
    /// Towards the bottom row / end of the list.
    Down,
    /// Towards the left column.
    Left,
    /// Towards the right column.
    Right,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor or the list selection.
    Move(Direction),
    /// Play the cursor cell, or jump to the selected list entry.
    Activate,
    /// Play a cell directly by index (0-8).
    PlayCell(usize),
    /// Switch focus between the board and the move list.
    SwitchFocus,
    /// Flip the move-list order.
    ToggleSort,
    /// Leave the app.
    Quit,
}

/// Maps a key to an action; unbound keys map to `None`.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up => Some(Action::Move(Direction::Up)),
        KeyCode::Down => Some(Action::Move(Direction::Down)),
        KeyCode::Left => Some(Action::Move(Direction::Left)),
        KeyCode::Right => Some(Action::Move(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Action::PlayCell(d as usize - 1)),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchFocus),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::ToggleSort),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves the board cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
