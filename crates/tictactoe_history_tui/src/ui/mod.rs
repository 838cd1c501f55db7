//! Frame layout and rendering.

mod board;
mod moves;

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph},
};
use tictactoe_history::GameStatus;

const HELP: &str = "arrows move | enter play/jump | 1-9 play | tab focus | s sort | q quit";

/// Draws one frame from the app's current snapshot.
pub fn draw(f: &mut Frame, app: &App) {
    let snapshot = app.snapshot();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(14), Constraint::Length(1)])
        .split(f.area());

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(outer[0]);

    let game = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(11)])
        .split(panels[0]);

    let status_style = match snapshot.status() {
        GameStatus::Won(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        GameStatus::InProgress { .. } => Style::default(),
    };
    let status = Paragraph::new(snapshot.status_text().as_str())
        .style(status_style)
        .block(Block::bordered().title("Status"));
    f.render_widget(status, game[0]);

    board::render_board(
        f,
        game[1],
        &snapshot,
        app.cursor(),
        app.focus() == Focus::Board,
        app.highlight_winning_line(),
    );
    moves::render_moves(f, panels[1], &snapshot, app.selected(), app.focus() == Focus::Moves);

    let help = Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, outer[1]);
}
