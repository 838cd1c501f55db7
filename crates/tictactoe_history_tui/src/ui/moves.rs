//! Move list rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, List, ListItem, ListState, Paragraph},
};
use tictactoe_history::Snapshot;

/// Renders the position indicator, the sort toggle and the move list.
pub fn render_moves(f: &mut Frame, area: Rect, snapshot: &Snapshot, selected: usize, focused: bool) {
    let block = Block::bordered().title("History");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    f.render_widget(Paragraph::new(snapshot.current_move_text().as_str()), parts[0]);
    f.render_widget(
        Paragraph::new(format!("[s] {}", snapshot.sort_toggle_label())),
        parts[1],
    );

    let items: Vec<ListItem> = snapshot
        .moves()
        .iter()
        .map(|entry| {
            let marker = if *entry.is_current() { "> " } else { "  " };
            let style = if *entry.is_current() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("{}{}", marker, entry.label())).style(style)
        })
        .collect();

    let highlight = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    let list = List::new(items).highlight_style(highlight);
    let mut state = ListState::default().with_selected(focused.then_some(selected));
    f.render_stateful_widget(list, parts[2], &mut state);
}
