//! Application state and key handling.

use crate::config::TuiConfig;
use crate::input::{self, Action, Direction};
use crossterm::event::KeyCode;
use tictactoe_history::{GameEngine, Position, Snapshot};
use tracing::{debug, instrument};

/// Which panel receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The move list.
    Moves,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    focus: Focus,
    /// Row in the displayed move list, not a history index.
    selected: usize,
    highlight_winning_line: bool,
    should_quit: bool,
}

impl App {
    /// Creates an app with a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            engine: GameEngine::with_sort_order(*config.sort_order()),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            highlight_winning_line: *config.highlight_winning_line(),
            should_quit: false,
        }
    }

    /// The game engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Snapshot to draw from.
    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the displayed move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether winning cells are highlighted.
    pub fn highlight_winning_line(&self) -> bool {
        self.highlight_winning_line
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(action) = input::action_for(key) {
            self.handle_action(action);
        }
    }

    /// Applies an action to the app.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleSort => self.toggle_sort(),
            Action::SwitchFocus => self.switch_focus(),
            Action::PlayCell(index) => self.play(index),
            Action::Move(direction) => match self.focus {
                Focus::Board => self.cursor = input::move_cursor(self.cursor, direction),
                Focus::Moves => self.move_selection(direction),
            },
            Action::Activate => match self.focus {
                Focus::Board => self.play(self.cursor.to_index()),
                Focus::Moves => self.jump_to_selected(),
            },
        }
    }

    /// Plays a cell, keeping the selected history entry selected while it
    /// survives the move.
    fn play(&mut self, index: usize) {
        let target = self.target_at(self.selected);
        if let Err(e) = self.engine.apply_move(index) {
            debug!(error = %e, "Ignoring refused move");
            return;
        }
        match target.and_then(|target| self.row_of(target)) {
            Some(row) => self.selected = row,
            None => self.clamp_selection(),
        }
    }

    fn jump_to_selected(&mut self) {
        let Some(target) = self.target_at(self.selected) else {
            return;
        };
        if let Err(e) = self.engine.jump_to(target) {
            debug!(error = %e, "Ignoring refused jump");
        }
    }

    /// Keeps the same history entry selected across the reorder.
    fn toggle_sort(&mut self) {
        let target = self.target_at(self.selected);
        self.engine.toggle_sort_order();
        if let Some(target) = target {
            self.selected = self.row_of(target).unwrap_or(0);
        }
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.selected = self.row_of(self.engine.current_move()).unwrap_or(0);
                Focus::Moves
            }
            Focus::Moves => Focus::Board,
        };
    }

    fn move_selection(&mut self, direction: Direction) {
        let last = self.engine.history().len() - 1;
        self.selected = match direction {
            Direction::Up => self.selected.saturating_sub(1),
            Direction::Down => (self.selected + 1).min(last),
            Direction::Left | Direction::Right => self.selected,
        };
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.engine.history().len() - 1);
    }

    fn target_at(&self, row: usize) -> Option<usize> {
        self.snapshot().moves().get(row).map(|entry| *entry.target())
    }

    fn row_of(&self, target: usize) -> Option<usize> {
        self.snapshot()
            .moves()
            .iter()
            .position(|entry| *entry.target() == target)
    }
}
