//! Terminal UI rendering.

pub mod board_view;
pub mod status_bar;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::App;

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    // Board on top, overlay line and status bar at the bottom
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    board_view::render(frame, main_chunks[0], app);
    status_bar::render_overlay(frame, main_chunks[1], app);
    status_bar::render(frame, main_chunks[2], app);
}
