//! Board rendering: columns side by side, tasks in per-column order.

use dragboard_core::{Column, EntityRef};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::theme;
use crate::app::App;

/// Render every column, or a hint when the board is empty.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let board = app.controller.snapshot();
    if board.columns.is_empty() {
        let hint = Paragraph::new("No columns yet. Press 'c' to add one.")
            .style(theme::dimmed())
            .block(Block::default().borders(Borders::ALL).title("Board"));
        frame.render_widget(hint, area);
        return;
    }

    let mut constraints: Vec<Constraint> = board
        .columns
        .iter()
        .map(|_| Constraint::Length(app.column_width))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (index, (column, chunk)) in board.columns.iter().zip(chunks.iter()).enumerate() {
        render_column(frame, *chunk, app, index, column);
    }
}

fn render_column(frame: &mut Frame, area: Rect, app: &App, index: usize, column: &Column) {
    let board = app.controller.snapshot();
    let dragging = app.dragging();
    let cursor_here = app.cursor.column == index;

    let border_style = if dragging == Some(EntityRef::Column(column.id)) {
        theme::dragging()
    } else if cursor_here && app.cursor.row.is_none() {
        theme::highlighted()
    } else {
        theme::normal()
    };

    let title = Line::from(vec![
        Span::styled(format!(" {} ", column.title), theme::panel_title(theme::COLUMN_TITLE)),
        Span::styled(format!(" {} ", board.task_count(column.id)), theme::count_badge()),
    ]);

    let items: Vec<ListItem> = board
        .tasks_in(column.id)
        .enumerate()
        .map(|(row, task)| {
            let style = if dragging == Some(EntityRef::Task(task.id)) {
                theme::dragging()
            } else if cursor_here && app.cursor.row == Some(row) {
                theme::selected()
            } else {
                theme::normal()
            };
            ListItem::new(Line::from(Span::styled(task.content.clone(), style)))
        })
        .collect();

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(List::new(items).block(block), area);
}
