//! Board store for column/task CRUD and reorder installation.
//!
//! `BoardStore` is the only owner of the [`Board`]. Commands that name a
//! missing entity are silent no-ops and report `false`; creating a task for
//! a missing column is rejected.

use dragboard_core::{Board, Column, ColumnId, Task, TaskId};
use tracing::{debug, warn};
use uuid::Uuid;

use super::BoardError;
use super::ids::{IdGenerator, RandomIds};

/// Draws from the configured generator before falling back to UUID v7.
const MAX_ID_ATTEMPTS: usize = 16;

/// Owns the board and the counters behind default names.
#[derive(Debug)]
pub struct BoardStore {
    board: Board,
    ids: Box<dyn IdGenerator>,
    /// Number used in the next default column title.
    column_counter: u64,
    /// Number used in the next default task content.
    task_counter: u64,
}

impl BoardStore {
    /// Creates an empty store with random identifiers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id_generator(Box::new(RandomIds))
    }

    /// Creates an empty store drawing identifiers from `ids`.
    #[must_use]
    pub fn with_id_generator(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            board: Board::new(),
            ids,
            column_counter: 1,
            task_counter: 1,
        }
    }

    /// Current board state.
    #[must_use]
    pub const fn snapshot(&self) -> &Board {
        &self.board
    }

    /// Appends a column titled `Column {n}`.
    pub fn add_column(&mut self) -> Column {
        let id = ColumnId::from_uuid(self.fresh_uuid(|board, uuid| {
            board.has_column(ColumnId::from_uuid(uuid))
        }));
        let column = Column {
            id,
            title: format!("Column {}", self.column_counter),
        };
        self.column_counter += 1;
        self.board.columns.push(column.clone());
        debug!(column = %id, title = %column.title, "column added");
        self.debug_check();
        column
    }

    /// Removes a column and every task in it.
    ///
    /// Returns `false` if no such column exists.
    pub fn delete_column(&mut self, id: ColumnId) -> bool {
        let Some(index) = self.board.column_index(id) else {
            return false;
        };
        self.board.columns.remove(index);
        let before = self.board.tasks.len();
        self.board.tasks.retain(|t| t.column_id != id);
        debug!(
            column = %id,
            cascaded = before - self.board.tasks.len(),
            "column deleted"
        );
        self.debug_check();
        true
    }

    /// Replaces a column title.
    ///
    /// Returns `false` if no such column exists.
    pub fn rename_column(&mut self, id: ColumnId, title: &str) -> bool {
        let Some(column) = self.board.columns.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        title.clone_into(&mut column.title);
        debug!(column = %id, title, "column renamed");
        true
    }

    /// Appends a task titled `Task {n}` to the given column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidReference`] if the column does not
    /// exist. The task counter is not advanced in that case.
    pub fn add_task(&mut self, column_id: ColumnId) -> Result<Task, BoardError> {
        if !self.board.has_column(column_id) {
            warn!(column = %column_id, "task requested for missing column");
            return Err(BoardError::InvalidReference(column_id));
        }
        let id = TaskId::from_uuid(
            self.fresh_uuid(|board, uuid| board.task(TaskId::from_uuid(uuid)).is_some()),
        );
        let task = Task {
            id,
            column_id,
            content: format!("Task {}", self.task_counter),
        };
        self.task_counter += 1;
        self.board.tasks.push(task.clone());
        debug!(task = %id, column = %column_id, "task added");
        self.debug_check();
        Ok(task)
    }

    /// Removes a task.
    ///
    /// Returns `false` if no such task exists.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let Some(index) = self.board.task_index(id) else {
            return false;
        };
        self.board.tasks.remove(index);
        debug!(task = %id, "task deleted");
        true
    }

    /// Replaces a task's content.
    ///
    /// Returns `false` if no such task exists.
    pub fn update_task_content(&mut self, id: TaskId, content: &str) -> bool {
        let Some(task) = self.board.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        content.clone_into(&mut task.content);
        debug!(task = %id, "task content updated");
        true
    }

    /// Installs a reordered task sequence computed from the current one.
    pub(crate) fn install_tasks(&mut self, tasks: Vec<Task>) {
        self.board.tasks = tasks;
        self.debug_check();
    }

    /// Installs a reordered column sequence computed from the current one.
    pub(crate) fn install_columns(&mut self, columns: Vec<Column>) {
        self.board.columns = columns;
        self.debug_check();
    }

    /// Draws a UUID that `in_use` does not reject.
    fn fresh_uuid(&mut self, in_use: impl Fn(&Board, Uuid) -> bool) -> Uuid {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.ids.next_uuid();
            if !in_use(&self.board, candidate) {
                return candidate;
            }
            warn!(%candidate, "identifier collision, drawing again");
        }
        loop {
            let candidate = Uuid::now_v7();
            if !in_use(&self.board, candidate) {
                return candidate;
            }
        }
    }

    fn debug_check(&self) {
        debug_assert_eq!(self.board.check_invariants(), Ok(()));
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}
