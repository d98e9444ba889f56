//! Application state and event handling for the terminal host.
//!
//! A keyboard cursor stands in for the pointer. It rests either on a column
//! header or on one of the column's tasks, and the entity under it is what
//! a gesture event reports as its target.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dragboard_core::{EntityKind, EntityRef};

use crate::controller::BoardController;

/// Cursor position on the rendered board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Index into the column sequence.
    pub column: usize,
    /// Row within the column's task list; `None` is the header.
    pub row: Option<usize>,
}

/// Input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Navigation and commands.
    Normal,
    /// Editing a column title or task content.
    Editing(EntityRef),
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// The board being shown.
    pub controller: BoardController,
    /// Pointer stand-in.
    pub cursor: Cursor,
    /// Current input mode.
    pub mode: Mode,
    /// Edit buffer while in [`Mode::Editing`].
    pub input: String,
    /// Last action, shown in the status bar.
    pub status: String,
    /// Rendered column width in cells.
    pub column_width: u16,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create the app around an existing board.
    #[must_use]
    pub fn new(controller: BoardController) -> Self {
        Self {
            controller,
            cursor: Cursor::default(),
            mode: Mode::Normal,
            input: String::new(),
            status: String::new(),
            column_width: 28,
            should_quit: false,
        }
    }

    /// Set the rendered column width.
    #[must_use]
    pub fn with_column_width(mut self, width: u16) -> Self {
        self.column_width = width;
        self
    }

    /// The dragged entity, if a gesture is in progress.
    #[must_use]
    pub const fn dragging(&self) -> Option<EntityRef> {
        self.controller.session().active()
    }

    /// The entity under the cursor.
    ///
    /// A row past the end of a column resolves to the column header, so an
    /// empty column is still a valid target.
    #[must_use]
    pub fn focused(&self) -> Option<EntityRef> {
        let board = self.controller.snapshot();
        let column = board.columns.get(self.cursor.column)?;
        let task = self
            .cursor
            .row
            .and_then(|row| board.tasks_in(column.id).nth(row));
        Some(task.map_or(EntityRef::Column(column.id), |t| EntityRef::Task(t.id)))
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.mode {
            Mode::Editing(target) => self.handle_edit_key(key, target),
            Mode::Normal => {
                if let Some(active) = self.dragging() {
                    self.handle_drag_key(key, active);
                } else {
                    self.handle_normal_key(key);
                }
            }
        }
    }

    /// Handle key event with no gesture in progress.
    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') => self.add_column(),
            KeyCode::Char('t') => self.add_task(),
            KeyCode::Char('x') | KeyCode::Delete => self.delete_focused(),
            KeyCode::Char('e') => self.begin_edit(),
            KeyCode::Char(' ') => self.begin_drag(),
            code => {
                self.move_cursor(code);
            }
        }
    }

    /// Handle key event while dragging `active`.
    fn handle_drag_key(&mut self, key: KeyEvent, active: EntityRef) {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => {
                let over = self.focused();
                let changed = self.controller.on_drag_end(active, over);
                self.follow(active);
                self.status = if changed { "Dropped" } else { "Drag ended" }.to_string();
            }
            KeyCode::Esc => {
                self.controller.on_drag_end(active, None);
                self.follow(active);
                self.status = "Drag cancelled".to_string();
            }
            code => {
                if active.kind() == EntityKind::Column
                    && matches!(
                        code,
                        KeyCode::Up | KeyCode::Down | KeyCode::Char('j' | 'k')
                    )
                {
                    // Columns are dragged by their header.
                    return;
                }
                if self.move_cursor(code) {
                    let over = self.focused();
                    self.controller.on_drag_over(active, over);
                    self.clamp_cursor();
                }
            }
        }
    }

    /// Handle key event while editing `target`.
    fn handle_edit_key(&mut self, key: KeyEvent, target: EntityRef) {
        match key.code {
            KeyCode::Enter => {
                let text = self.input.trim();
                if !text.is_empty() {
                    match target {
                        EntityRef::Column(id) => {
                            self.controller.rename_column(id, text);
                        }
                        EntityRef::Task(id) => {
                            self.controller.update_task_content(id, text);
                        }
                    }
                }
                self.input.clear();
                self.mode = Mode::Normal;
            }
            KeyCode::Esc => {
                self.input.clear();
                self.mode = Mode::Normal;
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    fn add_column(&mut self) {
        let column = self.controller.add_column();
        self.cursor = Cursor {
            column: self.controller.snapshot().columns.len().saturating_sub(1),
            row: None,
        };
        self.status = format!("Added {}", column.title);
    }

    fn add_task(&mut self) {
        let Some(column) = self.controller.snapshot().columns.get(self.cursor.column) else {
            self.status = "Add a column first".to_string();
            return;
        };
        let column_id = column.id;
        match self.controller.add_task(column_id) {
            Ok(task) => {
                let row = self.controller.snapshot().task_count(column_id).saturating_sub(1);
                self.cursor.row = Some(row);
                self.status = format!("Added {}", task.content);
            }
            Err(e) => self.status = e.to_string(),
        }
    }

    fn delete_focused(&mut self) {
        match self.focused() {
            Some(EntityRef::Column(id)) => {
                self.controller.delete_column(id);
                self.status = "Column deleted".to_string();
            }
            Some(EntityRef::Task(id)) => {
                self.controller.delete_task(id);
                self.status = "Task deleted".to_string();
            }
            None => {}
        }
        self.clamp_cursor();
    }

    fn begin_edit(&mut self) {
        let Some(target) = self.focused() else {
            return;
        };
        let board = self.controller.snapshot();
        let current = match target {
            EntityRef::Column(id) => board.column(id).map(|c| c.title.clone()),
            EntityRef::Task(id) => board.task(id).map(|t| t.content.clone()),
        };
        self.input = current.unwrap_or_default();
        self.mode = Mode::Editing(target);
    }

    fn begin_drag(&mut self) {
        let Some(entity) = self.focused() else {
            return;
        };
        if entity.kind() == EntityKind::Column {
            self.cursor.row = None;
        }
        self.controller.on_drag_start(entity);
        self.status = format!("Dragging {}", entity.kind());
    }

    /// Moves the cursor for a navigation key. Returns `true` if it moved.
    fn move_cursor(&mut self, code: KeyCode) -> bool {
        let before = self.cursor;
        let columns = self.controller.snapshot().columns.len();
        match code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.cursor.column = self.cursor.column.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.cursor.column + 1 < columns {
                    self.cursor.column += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor.row = match self.cursor.row {
                    None | Some(0) => None,
                    Some(r) => Some(r - 1),
                };
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor.row = Some(self.cursor.row.map_or(0, |r| r + 1));
            }
            _ => return false,
        }
        self.clamp_cursor();
        self.cursor != before
    }

    /// Keeps the cursor on an existing column and task row.
    fn clamp_cursor(&mut self) {
        let board = self.controller.snapshot();
        let Some(last_column) = board.columns.len().checked_sub(1) else {
            self.cursor = Cursor::default();
            return;
        };
        self.cursor.column = self.cursor.column.min(last_column);
        let column_id = board.columns[self.cursor.column].id;
        let count = board.task_count(column_id);
        self.cursor.row = match (self.cursor.row, count) {
            (Some(_), 0) | (None, _) => None,
            (Some(r), n) => Some(r.min(n - 1)),
        };
    }

    /// Puts the cursor on `entity` if it is still on the board.
    fn follow(&mut self, entity: EntityRef) {
        let board = self.controller.snapshot();
        match entity {
            EntityRef::Column(id) => {
                if let Some(index) = board.column_index(id) {
                    self.cursor = Cursor {
                        column: index,
                        row: None,
                    };
                }
            }
            EntityRef::Task(id) => {
                let Some(task) = board.task(id) else {
                    return;
                };
                let Some(column) = board.column_index(task.column_id) else {
                    return;
                };
                let row = board.tasks_in(task.column_id).position(|t| t.id == id);
                self.cursor = Cursor { column, row };
            }
        }
        self.clamp_cursor();
    }
}
