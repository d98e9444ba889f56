//! Status bar and drag overlay rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, Mode};
use crate::controller::Overlay;

/// Render the one-line drag overlay above the status bar.
pub fn render_overlay(frame: &mut Frame, area: Rect, app: &App) {
    let line = match app.controller.overlay() {
        Some(Overlay::Column { column, tasks }) => Line::from(vec![
            Span::styled("Dragging: ", theme::dragging()),
            Span::styled(column.title, theme::dragging()),
            Span::styled(format!(" ({} tasks)", tasks.len()), theme::dimmed()),
        ]),
        Some(Overlay::Task(task)) => Line::from(vec![
            Span::styled("Dragging: ", theme::dragging()),
            Span::styled(task.content, theme::dragging()),
        ]),
        None => Line::from(Span::styled(app.status.as_str(), theme::dimmed())),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let status_line = match app.mode {
        Mode::Editing(_) => Line::from(vec![
            Span::styled("Edit: ", theme::bold()),
            Span::raw(app.input.as_str()),
            Span::styled("█", theme::highlighted()),
            Span::raw(" | "),
            Span::styled("Enter: save | Esc: cancel", theme::dimmed()),
        ]),
        Mode::Normal => {
            let help_text = if app.dragging().is_some() {
                "←→↑↓/hjkl: move over | Space/Enter: drop | Esc: cancel"
            } else {
                "c: column | t: task | e: edit | x: delete | Space: drag | q: quit"
            };
            Line::from(vec![
                Span::styled("Dragboard v0.1.0", theme::bold()),
                Span::raw(" | "),
                Span::styled(help_text, theme::dimmed()),
            ])
        }
    };

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
