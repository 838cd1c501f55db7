//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph},
};
use tictactoe_history::{Player, Position, Snapshot, Square};

/// Renders the board with the cursor and any winning line marked.
pub fn render_board(
    f: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    cursor: Position,
    focused: bool,
    highlight_winning_line: bool,
) {
    let block = Block::bordered().title("Board");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let board_area = center_rect(inner, 23, 9);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(7),
                Constraint::Length(1),
                Constraint::Length(7),
                Constraint::Length(1),
                Constraint::Length(7),
            ])
            .split(area);

        for (col, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            if let Some(pos) = Position::from_row_col(row, col) {
                let highlighted = highlight_winning_line && snapshot.is_winning_square(pos);
                let selected = focused && pos == cursor;
                render_square(f, cell_area, snapshot, pos, highlighted, selected);
            }
        }
        render_vertical_sep(f, cols[1]);
        render_vertical_sep(f, cols[3]);
    }
    render_separator(f, rows[1]);
    render_separator(f, rows[3]);
}

fn render_square(
    f: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    pos: Position,
    highlighted: bool,
    selected: bool,
) {
    let (text, mut style) = match snapshot.board().get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if highlighted {
        style = style.bg(Color::Green);
    }
    if selected {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Middle line of the three-line cell.
    let paragraph = Paragraph::new(format!("\n{}", text))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(horizontal[1])[1]
}
