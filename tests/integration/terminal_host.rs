//! Integration tests for the terminal host.
//!
//! Feeds key events into `App` and renders into ratatui's `TestBackend`,
//! checking that gestures made with the keyboard reach the board and that
//! the result shows up on screen.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dragboard::BoardController;
use dragboard::app::App;
use dragboard::board::SequentialIds;
use dragboard::ui;
use ratatui::{Terminal, backend::TestBackend};

fn make_app() -> App {
    App::new(BoardController::with_id_generator(Box::new(
        SequentialIds::new(),
    )))
    .with_column_width(20)
}

fn press(app: &mut App, codes: &[KeyCode]) {
    for &code in codes {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }
}

/// Renders one frame and returns the screen as text.
fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
    terminal.draw(|frame| ui::draw(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(ratatui::buffer::Cell::symbol)
        .collect()
}

fn contents(app: &App) -> Vec<(String, String)> {
    let board = app.controller.snapshot();
    board
        .tasks
        .iter()
        .map(|t| {
            let column = board.column(t.column_id).unwrap().title.clone();
            (t.content.clone(), column)
        })
        .collect()
}

#[test]
fn empty_board_shows_hint() {
    let app = make_app();
    assert!(render(&app).contains("No columns yet"));
}

#[test]
fn columns_and_tasks_are_drawn() {
    let mut app = make_app();
    press(
        &mut app,
        &[KeyCode::Char('c'), KeyCode::Char('t'), KeyCode::Char('c')],
    );
    let screen = render(&app);
    assert!(screen.contains("Column 1"));
    assert!(screen.contains("Column 2"));
    assert!(screen.contains("Task 1"));
}

#[test]
fn keyboard_drag_moves_task_across_columns() {
    let mut app = make_app();
    // Column 1: Task 1, Task 2. Column 2: Task 3.
    press(
        &mut app,
        &[
            KeyCode::Char('c'),
            KeyCode::Char('t'),
            KeyCode::Char('t'),
            KeyCode::Char('c'),
            KeyCode::Char('t'),
        ],
    );
    // Left lands on Task 1; pick it up, carry it right onto Task 3.
    press(&mut app, &[KeyCode::Left, KeyCode::Char(' ')]);
    assert!(app.dragging().is_some());
    assert!(render(&app).contains("Dragging: Task 1"));

    press(&mut app, &[KeyCode::Right]);
    assert_eq!(
        contents(&app),
        vec![
            ("Task 2".to_string(), "Column 1".to_string()),
            ("Task 1".to_string(), "Column 2".to_string()),
            ("Task 3".to_string(), "Column 2".to_string()),
        ]
    );

    press(&mut app, &[KeyCode::Enter]);
    assert!(app.dragging().is_none());
    assert_eq!(app.controller.snapshot().check_invariants(), Ok(()));
}

#[test]
fn keyboard_drag_onto_empty_column_header() {
    let mut app = make_app();
    press(
        &mut app,
        &[
            KeyCode::Char('c'),
            KeyCode::Char('t'),
            KeyCode::Char('c'),
            KeyCode::Left,
            KeyCode::Down,
            KeyCode::Char(' '),
            KeyCode::Right,
            KeyCode::Char(' '),
        ],
    );
    assert_eq!(
        contents(&app),
        vec![("Task 1".to_string(), "Column 2".to_string())]
    );
    assert_eq!(app.cursor.column, 1);
}

#[test]
fn overlay_shows_column_with_task_count() {
    let mut app = make_app();
    press(
        &mut app,
        &[
            KeyCode::Char('c'),
            KeyCode::Char('t'),
            KeyCode::Char('t'),
            KeyCode::Up,
            KeyCode::Up,
            KeyCode::Char(' '),
        ],
    );
    let screen = render(&app);
    assert!(screen.contains("Dragging: Column 1 (2 tasks)"));
}

#[test]
fn edit_mode_shows_buffer() {
    let mut app = make_app();
    press(&mut app, &[KeyCode::Char('c'), KeyCode::Char('e')]);
    assert!(render(&app).contains("Edit: Column 1"));
}
